/*
MIT License with FEFF10 Attribution

Copyright (c) 2025 Ameyanagi

Based on or developed using Distribution: FEFF10.0
Copyright (c) 2020 FEFF Project, University of Washington and SLAC National Accelerator Laboratory.
All rights reserved.
*/

//! Figure configuration

use super::errors::{PlotError, Result};
use std::path::Path;

/// Figure layout and labels
#[derive(Debug, Clone)]
pub struct PlotConfig {
    /// Width of the figure in pixels
    pub width: u32,
    /// Height of each panel in pixels
    pub panel_height: u32,
    /// Title drawn above the first panel
    pub title: Option<String>,
    /// Label of the y axis of every panel
    pub ylabel: Option<String>,
}

impl Default for PlotConfig {
    fn default() -> Self {
        Self {
            width: 900,
            panel_height: 280,
            title: None,
            ylabel: None,
        }
    }
}

/// Image format, chosen from the file extension
///
/// There is no PostScript backend: `.eps` and `.ps` are rejected, `.svg` is
/// the vector alternative.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Png,
    Svg,
}

impl OutputFormat {
    pub fn from_path(path: &Path) -> Result<Self> {
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .map(str::to_ascii_lowercase)
            .unwrap_or_default();

        match ext.as_str() {
            "png" => Ok(OutputFormat::Png),
            "svg" => Ok(OutputFormat::Svg),
            _ => Err(PlotError::UnsupportedFormat(path.display().to_string())),
        }
    }
}
