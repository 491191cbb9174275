/*
MIT License with FEFF10 Attribution

Copyright (c) 2025 Ameyanagi

Based on or developed using Distribution: FEFF10.0
Copyright (c) 2020 FEFF Project, University of Washington and SLAC National Accelerator Laboratory.
All rights reserved.
*/

//! Error types for plotting

use thiserror::Error;

/// Result type for plotting
pub type Result<T> = std::result::Result<T, PlotError>;

/// Error type for figure rendering
#[derive(Error, Debug)]
pub enum PlotError {
    #[error("Unsupported figure format: {0} (only .png and .svg are written; use .svg for vector output such as .eps)")]
    UnsupportedFormat(String),

    #[error("Mismatched inputs: {0}")]
    MismatchedInputs(String),

    #[error("Nothing to plot")]
    NoData,

    #[error("Drawing backend error: {0}")]
    Backend(String),

    #[error("Radial function error: {0}")]
    RadialError(#[from] crate::radial::RadialError),
}

/// Wrap any plotters error
pub(crate) fn backend_error<E: std::fmt::Debug>(err: E) -> PlotError {
    PlotError::Backend(format!("{:?}", err))
}
