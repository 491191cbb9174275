/*
MIT License with FEFF10 Attribution

Copyright (c) 2025 Ameyanagi

Based on or developed using Distribution: FEFF10.0
Copyright (c) 2020 FEFF Project, University of Washington and SLAC National Accelerator Laboratory.
All rights reserved.
*/

//! All-electron vs pseudo logarithmic derivatives
//!
//! A logarithmic derivative is stored as a [`RadialFunction`] whose mesh is
//! the energy grid.

use super::config::PlotConfig;
use super::errors::{PlotError, Result};
use super::{render_panels, LegendCorner, Panel, Series};
use crate::atoms::QState;
use crate::radial::RadialFunction;
use std::path::Path;

/// One panel per PP logarithmic derivative, paired with the AE one of the same state
pub fn logder_panels(
    ae_logders: &[(QState, RadialFunction)],
    pp_logders: &[(QState, RadialFunction)],
) -> Result<Vec<Panel>> {
    if ae_logders.len() != pp_logders.len() {
        return Err(PlotError::MismatchedInputs(format!(
            "{} AE and {} PP logarithmic derivatives",
            ae_logders.len(),
            pp_logders.len()
        )));
    }

    pp_logders
        .iter()
        .map(|(state, pp_logd)| {
            let (_, ae_logd) = ae_logders
                .iter()
                .find(|(s, _)| s == state)
                .ok_or_else(|| {
                    PlotError::MismatchedInputs(format!("no AE logarithmic derivative for {}", state))
                })?;

            Ok(Panel {
                reference: Series::new(format!("AE logder {}", state), ae_logd.iter().collect()),
                comparison: Some(Series::new(format!("PP logder {}", state), pp_logd.iter().collect())),
                legend: LegendCorner::LowerLeft,
            })
        })
        .collect()
}

/// Plot AE and PP logarithmic derivatives and save the figure
pub fn plot_logders(
    ae_logders: &[(QState, RadialFunction)],
    pp_logders: &[(QState, RadialFunction)],
    path: &Path,
    config: &PlotConfig,
) -> Result<()> {
    let panels = logder_panels(ae_logders, pp_logders)?;
    render_panels(&panels, path, config, "Energy [Ha]")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn logder(name: &str, shift: f64) -> RadialFunction {
        let energies: Vec<f64> = (0..20).map(|i| -2.0 + 0.2 * i as f64).collect();
        let values: Vec<f64> = energies.iter().map(|e| (e + shift).tan()).collect();
        RadialFunction::new(name, energies, values).unwrap()
    }

    #[test]
    fn test_panels_follow_pp_order() {
        let s = QState::new(3, 0, 2.0);
        let p = QState::new(3, 1, 2.0);
        let ae = vec![(s, logder("ae_s", 0.0)), (p, logder("ae_p", 0.1))];
        let pp = vec![(p, logder("pp_p", 0.11)), (s, logder("pp_s", 0.01))];

        let panels = logder_panels(&ae, &pp).unwrap();
        assert_eq!(panels.len(), 2);
        assert_eq!(panels[0].reference.label, "AE logder 3p2");
        assert_eq!(panels[1].comparison.as_ref().unwrap().label, "PP logder 3s2");
        assert_eq!(panels[0].legend, LegendCorner::LowerLeft);
    }

    #[test]
    fn test_mismatched_inputs() {
        let s = QState::new(3, 0, 2.0);
        let p = QState::new(3, 1, 2.0);
        let ae = vec![(s, logder("ae_s", 0.0))];

        let err = logder_panels(&ae, &[]).unwrap_err();
        assert!(matches!(err, PlotError::MismatchedInputs(_)));

        let err = logder_panels(&ae, &[(p, logder("pp_p", 0.0))]).unwrap_err();
        assert!(matches!(err, PlotError::MismatchedInputs(_)));
    }
}
