/*
MIT License with FEFF10 Attribution

Copyright (c) 2025 Ameyanagi

Based on or developed using Distribution: FEFF10.0
Copyright (c) 2020 FEFF Project, University of Washington and SLAC National Accelerator Laboratory.
All rights reserved.
*/

//! Atomic configurations and quantum states
//!
//! This module provides the quantum-number bookkeeping used to describe the
//! all-electron reference atom: spectroscopic parsing, occupancies, charge
//! and the reference neutral configurations.

pub mod configuration;
pub mod database;
pub mod errors;
pub mod qstate;

pub use configuration::{states_from_string, AtomicConfiguration, SpinMode};
pub use errors::{AtomError, Result};
pub use qstate::{parse_angular_momentum, parse_orbital_token, QState};
