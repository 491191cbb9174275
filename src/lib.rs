/*
MIT License with FEFF10 Attribution

Copyright (c) 2025 Ameyanagi

Based on or developed using Distribution: FEFF10.0
Copyright (c) 2020 FEFF Project, University of Washington and SLAC National Accelerator Laboratory.
All rights reserved.
*/

//! # pseudo-dojo-rs
//!
//! Atomic configurations and radial functions used to validate
//! pseudopotentials against all-electron references.
//!
//! The crate provides:
//!
//! - quantum states and atomic configurations parsed from spectroscopic
//!   notation such as `[He] 2s2 2p3` ([`atoms`]),
//! - radial functions sampled on a mesh with spline interpolation, roots and
//!   integrals, and radial wavefunctions that know whether they are bound
//!   ([`radial`]),
//! - AE vs PP dipole matrix elements ([`dipole`]),
//! - comparison figures of wavefunctions and logarithmic derivatives
//!   ([`plot`]).

pub mod atoms;
pub mod cli;
pub mod dipole;
pub mod plot;
pub mod radial;
pub mod utils;

pub use atoms::{AtomicConfiguration, QState};
pub use dipole::Dipole;
pub use radial::{RadialFunction, RadialWaveFunction};

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
pub const AUTHORS: &str = env!("CARGO_PKG_AUTHORS");
