/*
MIT License with FEFF10 Attribution

Copyright (c) 2025 Ameyanagi

Based on or developed using Distribution: FEFF10.0
Copyright (c) 2020 FEFF Project, University of Washington and SLAC National Accelerator Laboratory.
All rights reserved.
*/

//! Utility functions shared by the atoms and radial modules

pub mod serialization;

pub use serialization::{from_tagged_dict, to_tagged_dict, Dict};

/// Absolute tolerance used when checking the charge of a configuration
pub const CHARGE_TOLERANCE: f64 = 1.0e-8;

/// Format a float the way a plain `repr` would: integers keep a trailing `.0`
pub fn float_repr(value: f64) -> String {
    format!("{:?}", value)
}

/// Format a float without a trailing `.0` when it is integral
pub fn compact_float(value: f64) -> String {
    if value.fract() == 0.0 && value.abs() < 1.0e15 {
        format!("{}", value as i64)
    } else {
        format!("{}", value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_float_formatting() {
        assert_eq!(float_repr(2.0), "2.0");
        assert_eq!(float_repr(0.5), "0.5");
        assert_eq!(compact_float(3.0), "3");
        assert_eq!(compact_float(2.5), "2.5");
    }
}
