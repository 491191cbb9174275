/*
MIT License with FEFF10 Attribution

Copyright (c) 2025 Ameyanagi

Based on or developed using Distribution: FEFF10.0
Copyright (c) 2020 FEFF Project, University of Washington and SLAC National Accelerator Laboratory.
All rights reserved.
*/

//! Comparison figures between all-electron and pseudo quantities
//!
//! Figures are stacks of panels, one per orbital. Each panel draws a
//! reference (all-electron) curve as a line and, optionally, the
//! pseudopotential curve as triangle markers. Rendering uses `plotters` and
//! writes PNG or SVG files depending on the extension of the output path.

pub mod aepp;
pub mod config;
mod errors;
pub mod logders;

pub use aepp::{aepp_panels, plot_aepp, RMax};
pub use config::{OutputFormat, PlotConfig};
pub use errors::{PlotError, Result};
pub use logders::{logder_panels, plot_logders};

use errors::backend_error;
use plotters::coord::Shift;
use plotters::prelude::*;
use std::path::Path;

/// A labelled set of (x, y) points
#[derive(Debug, Clone, PartialEq)]
pub struct Series {
    pub label: String,
    pub points: Vec<(f64, f64)>,
}

impl Series {
    pub fn new(label: impl Into<String>, points: Vec<(f64, f64)>) -> Self {
        Self {
            label: label.into(),
            points,
        }
    }
}

/// Corner of the panel holding the legend
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LegendCorner {
    LowerLeft,
    LowerRight,
}

/// One panel of a comparison figure
#[derive(Debug, Clone, PartialEq)]
pub struct Panel {
    /// All-electron curve, drawn as a line
    pub reference: Series,
    /// Pseudo curve, drawn as markers
    pub comparison: Option<Series>,
    pub legend: LegendCorner,
}

impl Panel {
    /// Data bounds (xmin, xmax, ymin, ymax) over all finite points
    fn bounds(&self) -> Option<(f64, f64, f64, f64)> {
        let points = self
            .reference
            .points
            .iter()
            .chain(self.comparison.iter().flat_map(|s| s.points.iter()))
            .filter(|(x, y)| x.is_finite() && y.is_finite());

        points.fold(None, |acc, &(x, y)| match acc {
            None => Some((x, x, y, y)),
            Some((x0, x1, y0, y1)) => Some((x0.min(x), x1.max(x), y0.min(y), y1.max(y))),
        })
    }
}

fn padded(lo: f64, hi: f64, fraction: f64) -> (f64, f64) {
    let span = hi - lo;
    if span > 0.0 {
        (lo - fraction * span, hi + fraction * span)
    } else {
        let pad = lo.abs().max(1.0) * 0.1;
        (lo - pad, hi + pad)
    }
}

/// Render stacked panels to `path`; the x label goes under the last panel
pub fn render_panels(panels: &[Panel], path: &Path, config: &PlotConfig, xlabel: &str) -> Result<()> {
    if panels.is_empty() {
        return Err(PlotError::NoData);
    }

    let size = (config.width, config.panel_height * panels.len() as u32);
    match OutputFormat::from_path(path)? {
        OutputFormat::Svg => {
            let root = SVGBackend::new(path, size).into_drawing_area();
            draw_panels(&root, panels, config, xlabel)?;
            root.present().map_err(backend_error)?;
        }
        OutputFormat::Png => {
            let root = BitMapBackend::new(path, size).into_drawing_area();
            draw_panels(&root, panels, config, xlabel)?;
            root.present().map_err(backend_error)?;
        }
    }

    log::info!("Saved figure with {} panels to {}", panels.len(), path.display());
    Ok(())
}

fn draw_panels<DB: DrawingBackend>(
    root: &DrawingArea<DB, Shift>,
    panels: &[Panel],
    config: &PlotConfig,
    xlabel: &str,
) -> Result<()>
where
    DB::ErrorType: 'static,
{
    root.fill(&WHITE).map_err(backend_error)?;

    let areas = root.split_evenly((panels.len(), 1));
    let last = panels.len() - 1;

    for (idx, (panel, area)) in panels.iter().zip(areas.iter()).enumerate() {
        let (x0, x1, y0, y1) = panel.bounds().ok_or(PlotError::NoData)?;
        let (x0, x1) = padded(x0, x1, 0.0);
        let (y0, y1) = padded(y0, y1, 0.05);

        let mut builder = ChartBuilder::on(area);
        builder
            .margin(15)
            .x_label_area_size(if idx == last { 45 } else { 25 })
            .y_label_area_size(60);
        if idx == 0 {
            if let Some(title) = &config.title {
                builder.caption(title, ("sans-serif", 24).into_font());
            }
        }
        let mut chart = builder
            .build_cartesian_2d(x0..x1, y0..y1)
            .map_err(backend_error)?;

        let mut mesh = chart.configure_mesh();
        mesh.x_label_style(("sans-serif", 14))
            .y_label_style(("sans-serif", 14));
        if idx == last {
            mesh.x_desc(xlabel);
        }
        if let Some(ylabel) = &config.ylabel {
            mesh.y_desc(ylabel.as_str());
        }
        mesh.draw().map_err(backend_error)?;

        let line_color = RGBColor(0, 0, 204);
        chart
            .draw_series(LineSeries::new(
                panel.reference.points.iter().copied(),
                line_color.stroke_width(2),
            ))
            .map_err(backend_error)?
            .label(panel.reference.label.as_str())
            .legend(move |(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], line_color.stroke_width(2)));

        if let Some(comparison) = &panel.comparison {
            let marker_color = RGBColor(204, 0, 0);
            chart
                .draw_series(
                    comparison
                        .points
                        .iter()
                        .map(|&(x, y)| TriangleMarker::new((x, y), 4, marker_color.filled())),
                )
                .map_err(backend_error)?
                .label(comparison.label.as_str())
                .legend(move |(x, y)| TriangleMarker::new((x + 10, y), 4, marker_color.filled()));
        }

        let position = match panel.legend {
            LegendCorner::LowerLeft => SeriesLabelPosition::LowerLeft,
            LegendCorner::LowerRight => SeriesLabelPosition::LowerRight,
        };
        chart
            .configure_series_labels()
            .position(position)
            .background_style(WHITE.mix(0.8))
            .border_style(BLACK)
            .draw()
            .map_err(backend_error)?;
    }

    Ok(())
}
