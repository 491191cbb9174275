/*
MIT License with FEFF10 Attribution

Copyright (c) 2025 Ameyanagi

Based on or developed using Distribution: FEFF10.0
Copyright (c) 2020 FEFF Project, University of Washington and SLAC National Accelerator Laboratory.
All rights reserved.
*/

//! Radial wavefunctions attached to an atomic orbital

use super::config::RadialFileConfig;
use super::errors::Result;
use super::function::RadialFunction;
use crate::atoms::QState;
use ndarray::Array1;
use std::fmt;
use std::ops::Deref;
use std::path::Path;

/// Number of trailing points inspected by [`RadialWaveFunction::is_bound`]
const BOUND_TAIL: usize = 10;

/// A radial function describing the orbital `state`
///
/// Dereferences to the underlying [`RadialFunction`].
#[derive(Debug, Clone)]
pub struct RadialWaveFunction {
    state: QState,
    function: RadialFunction,
}

impl RadialWaveFunction {
    /// Magnitude below which the tail of a bound state must decay
    pub const TOL_BOUND: f64 = 1.0e-10;

    pub fn new(
        state: QState,
        name: impl Into<String>,
        rmesh: impl Into<Array1<f64>>,
        values: impl Into<Array1<f64>>,
    ) -> Result<Self> {
        Ok(Self::from_function(state, RadialFunction::new(name, rmesh, values)?))
    }

    pub fn from_function(state: QState, function: RadialFunction) -> Self {
        Self { state, function }
    }

    /// Read the wavefunction of `state` from a text file
    pub fn from_file<P: AsRef<Path>>(state: QState, path: P, config: &RadialFileConfig) -> Result<Self> {
        Ok(Self::from_function(state, RadialFunction::from_file(path, config)?))
    }

    pub fn state(&self) -> &QState {
        &self.state
    }

    pub fn function(&self) -> &RadialFunction {
        &self.function
    }

    /// True if the last points of the mesh (at most ten) are all below [`Self::TOL_BOUND`]
    pub fn is_bound(&self) -> bool {
        let back = self.function.len().min(BOUND_TAIL);
        self.function
            .values()
            .iter()
            .rev()
            .take(back)
            .all(|v| v.abs() < Self::TOL_BOUND)
    }
}

impl Deref for RadialWaveFunction {
    type Target = RadialFunction;

    fn deref(&self) -> &Self::Target {
        &self.function
    }
}

impl fmt::Display for RadialWaveFunction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "<RadialWaveFunction, name = {}, state = {}>",
            self.function.name(),
            self.state
        )
    }
}
