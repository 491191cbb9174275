/*
MIT License with FEFF10 Attribution

Copyright (c) 2025 Ameyanagi

Based on or developed using Distribution: FEFF10.0
Copyright (c) 2020 FEFF Project, University of Washington and SLAC National Accelerator Laboratory.
All rights reserved.
*/

//! Radial functions and wavefunctions
//!
//! Functions are sampled on a radial mesh and interpolated with a cubic
//! spline for derivatives, zeros and integrals. Wavefunctions additionally
//! know the orbital they describe and whether they are bound.

pub mod config;
mod errors;
pub mod function;
pub mod spline;
pub mod wavefunction;

pub use config::RadialFileConfig;
pub use errors::{RadialError, Result};
pub use function::{RadialFunction, DEFAULT_SMALL_TOL};
pub use spline::CubicSpline;
pub use wavefunction::RadialWaveFunction;
