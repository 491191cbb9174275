/*
MIT License with FEFF10 Attribution

Copyright (c) 2025 Ameyanagi

Based on or developed using Distribution: FEFF10.0
Copyright (c) 2020 FEFF Project, University of Washington and SLAC National Accelerator Laboratory.
All rights reserved.
*/

//! Dipole matrix elements computed with the all-electron and the pseudo atom

use crate::atoms::QState;
use serde::{Deserialize, Serialize};

/// AE and PP dipole matrix elements between an initial and a final state
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Dipole {
    istate: QState,
    ostate: QState,
    aeres: f64,
    ppres: f64,
}

impl Dipole {
    /// Largest AE - PP difference accepted for an allowed transition
    pub const TOL_LRULE: f64 = 0.002;

    pub fn new(istate: QState, ostate: QState, aeres: f64, ppres: f64) -> Self {
        Self {
            istate,
            ostate,
            aeres,
            ppres,
        }
    }

    pub fn istate(&self) -> &QState {
        &self.istate
    }

    pub fn ostate(&self) -> &QState {
        &self.ostate
    }

    /// All-electron result
    pub fn aeres(&self) -> f64 {
        self.aeres
    }

    /// Pseudo result
    pub fn ppres(&self) -> f64 {
        self.ppres
    }

    /// AE minus PP
    pub fn aempp(&self) -> f64 {
        self.aeres - self.ppres
    }

    /// False if the transition is dipole-allowed and AE and PP disagree beyond [`Self::TOL_LRULE`]
    pub fn fulfills_lrule(&self) -> bool {
        !(self.istate.lselect(&self.ostate) && self.aempp().abs() > Self::TOL_LRULE)
    }
}
