/*
MIT License with FEFF10 Attribution

Copyright (c) 2025 Ameyanagi

Based on or developed using Distribution: FEFF10.0
Copyright (c) 2020 FEFF Project, University of Washington and SLAC National Accelerator Laboratory.
All rights reserved.
*/

//! All-electron vs pseudo radial wavefunctions

use super::config::PlotConfig;
use super::errors::Result;
use super::{render_panels, LegendCorner, Panel, Series};
use crate::atoms::QState;
use crate::radial::{RadialFunction, RadialWaveFunction};
use std::path::Path;

/// Outermost radius shown in each panel
#[derive(Debug, Clone, Default)]
pub enum RMax {
    /// Whole mesh
    #[default]
    Full,
    /// Same radius for every state
    Uniform(f64),
    /// Radius per state, states not listed use the whole mesh
    PerState(Vec<(QState, f64)>),
}

impl RMax {
    fn for_state(&self, state: &QState) -> Option<f64> {
        match self {
            RMax::Full => None,
            RMax::Uniform(r) => Some(*r),
            RMax::PerState(radii) => radii.iter().find(|(s, _)| s == state).map(|&(_, r)| r),
        }
    }
}

/// Number of leading mesh points shown for `rmax`
///
/// The cut is the index of the last AE mesh point not larger than `rmax`,
/// exclusive. `None` keeps the whole mesh.
fn cut_index(ae_phi: &RadialFunction, rmax: Option<f64>) -> Result<Option<usize>> {
    match rmax {
        Some(r) if r < ae_phi.rmax() => Ok(Some(ae_phi.ifromr(r)?)),
        _ => Ok(None),
    }
}

fn leading_points(func: &RadialFunction, cut: Option<usize>) -> Vec<(f64, f64)> {
    func.iter().take(cut.unwrap_or(func.len())).collect()
}

/// One panel per AE state, paired with the PP function of the same state
///
/// When PP functions are given, AE states without a PP counterpart are skipped.
pub fn aepp_panels(
    ae_funcs: &[RadialWaveFunction],
    pp_funcs: Option<&[RadialWaveFunction]>,
    rmax: &RMax,
) -> Result<Vec<Panel>> {
    let mut panels = Vec::new();

    for ae_phi in ae_funcs {
        let state = ae_phi.state();
        let pp_phi = match pp_funcs {
            Some(pp) => match pp.iter().find(|phi| phi.state() == state) {
                Some(phi) => Some(phi),
                None => {
                    log::debug!("No PP wavefunction for {}, skipping", state);
                    continue;
                }
            },
            None => None,
        };

        // The AE cut applies to the PP curve as well
        let cut = cut_index(ae_phi.function(), rmax.for_state(state))?;
        let reference = Series::new(format!("AE: {}", state), leading_points(ae_phi.function(), cut));
        let comparison = pp_phi
            .map(|phi| Series::new(format!("PP: {}", state), leading_points(phi.function(), cut)));

        panels.push(Panel {
            reference,
            comparison,
            legend: LegendCorner::LowerRight,
        });
    }

    Ok(panels)
}

/// Plot AE wavefunctions, optionally against PP wavefunctions, and save the figure
pub fn plot_aepp(
    ae_funcs: &[RadialWaveFunction],
    pp_funcs: Option<&[RadialWaveFunction]>,
    rmax: &RMax,
    path: &Path,
    config: &PlotConfig,
) -> Result<()> {
    let panels = aepp_panels(ae_funcs, pp_funcs, rmax)?;
    render_panels(&panels, path, config, "r [Bohr]")
}
