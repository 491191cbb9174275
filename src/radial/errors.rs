/*
MIT License with FEFF10 Attribution

Copyright (c) 2025 Ameyanagi

Based on or developed using Distribution: FEFF10.0
Copyright (c) 2020 FEFF Project, University of Washington and SLAC National Accelerator Laboratory.
All rights reserved.
*/

//! Error types for radial functions

use thiserror::Error;

/// Result type for radial function operations
pub type Result<T> = std::result::Result<T, RadialError>;

/// Error type for radial mesh, spline and file operations
#[derive(Error, Debug)]
pub enum RadialError {
    #[error("Radial mesh and values differ in length: {mesh} != {values}")]
    LengthMismatch { mesh: usize, values: usize },

    #[error("Radial mesh is empty")]
    EmptyMesh,

    #[error("Cubic spline requires at least {required} points, got {actual}")]
    MeshTooSmall { required: usize, actual: usize },

    #[error("Radial mesh is not strictly increasing at index {0}")]
    NonMonotonicMesh(usize),

    #[error("Cannot find {0} in rmesh")]
    PointOutOfMesh(f64),

    #[error("Failed to read {path}: {source}")]
    FileRead {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Parse error in {path} at line {line}: {reason}")]
    Parse {
        path: String,
        line: usize,
        reason: String,
    },
}
