/*
MIT License with FEFF10 Attribution

Copyright (c) 2025 Ameyanagi

Based on or developed using Distribution: FEFF10.0
Copyright (c) 2020 FEFF Project, University of Washington and SLAC National Accelerator Laboratory.
All rights reserved.
*/

//! Error types for the atoms module

/// Error types for the atoms module
#[derive(Debug, thiserror::Error)]
pub enum AtomError {
    #[error("Invalid atomic number: {0}")]
    InvalidAtomicNumber(i64),

    #[error("Unknown element symbol: {0}")]
    UnknownSymbol(String),

    #[error("Don't know how to interpret {0}")]
    InvalidOrbitalToken(String),

    #[error("Invalid angular momentum: {0}")]
    InvalidAngularMomentum(String),

    #[error("Invalid quantum number {name}: {value}")]
    InvalidQuantumNumber { name: &'static str, value: String },

    #[error("state {0} is already in the configuration")]
    DuplicateState(String),

    #[error("state {0} is not in the configuration")]
    StateNotFound(String),

    #[error("Not implemented: {0}")]
    NotImplemented(String),

    #[error("Don't know how to convert {0}")]
    Unconvertible(String),

    #[error("Invalid dictionary: {0}")]
    InvalidDict(String),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Result type for atom operations
pub type Result<T> = std::result::Result<T, AtomError>;
