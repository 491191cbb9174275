/*
MIT License with FEFF10 Attribution

Copyright (c) 2025 Ameyanagi

Based on or developed using Distribution: FEFF10.0
Copyright (c) 2020 FEFF Project, University of Washington and SLAC National Accelerator Laboratory.
All rights reserved.
*/

//! Quantum numbers of an atomic orbital
//!
//! A [`QState`] collects the principal quantum number, the orbital angular
//! momentum, the occupancy and, optionally, the eigenvalue, the total angular
//! momentum and the spin of an orbital. Ordering between states is not
//! defined: two states are only ever compared for equality.

use super::errors::{AtomError, Result};
use crate::utils::{compact_float, float_repr, from_tagged_dict, to_tagged_dict, Dict};
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

/// Spectroscopic letters indexed by angular momentum
pub const ANGULAR_MOMENTUM_SYMBOLS: [char; 7] = ['s', 'p', 'd', 'f', 'g', 'h', 'i'];

static ORBITAL_TOKEN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(\d+)([spdfghi])(\d+(?:\.\d*)?)$").expect("orbital token regex is valid")
});

/// Convert a spectroscopic letter or an integer string to l
pub fn parse_angular_momentum(token: &str) -> Result<u32> {
    let token = token.trim();
    let mut chars = token.chars();
    if let (Some(c), None) = (chars.next(), chars.next()) {
        if let Some(l) = ANGULAR_MOMENTUM_SYMBOLS.iter().position(|&s| s == c) {
            return Ok(l as u32);
        }
    }

    token
        .parse::<u32>()
        .map_err(|_| AtomError::InvalidAngularMomentum(token.to_string()))
}

/// Spectroscopic letter of l, if there is one
pub fn angular_momentum_symbol(l: u32) -> Option<char> {
    ANGULAR_MOMENTUM_SYMBOLS.get(l as usize).copied()
}

/// Parse a single orbital token such as `2p3` or `3d2.5`
pub fn parse_orbital_token(token: &str) -> Result<QState> {
    let trimmed = token.trim();
    let invalid = || AtomError::InvalidOrbitalToken(token.to_string());

    let caps = ORBITAL_TOKEN.captures(trimmed).ok_or_else(invalid)?;
    QState::from_tokens(&caps[1], &caps[2], &caps[3]).map_err(|_| invalid())
}

fn deserialize_angular_momentum<'de, D>(deserializer: D) -> std::result::Result<u32, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum RawL {
        Integer(u32),
        Text(String),
    }

    match RawL::deserialize(deserializer)? {
        RawL::Integer(l) => Ok(l),
        RawL::Text(text) => parse_angular_momentum(&text).map_err(serde::de::Error::custom),
    }
}

/// Quantum numbers, occupancy and eigenvalue of an atomic orbital
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct QState {
    n: u32,
    #[serde(deserialize_with = "deserialize_angular_momentum")]
    l: u32,
    occ: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    eig: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    j: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    s: Option<i32>,
}

impl QState {
    /// Class name written to the `@class` tag
    pub const CLASS: &'static str = "QState";

    /// Create a state from its principal number, angular momentum and occupancy
    pub fn new(n: u32, l: u32, occ: f64) -> Self {
        Self {
            n,
            l,
            occ,
            eig: None,
            j: None,
            s: None,
        }
    }

    /// Create a state from textual quantum numbers, `l` may be a letter
    pub fn from_tokens(n: &str, l: &str, occ: &str) -> Result<Self> {
        let n = n
            .trim()
            .parse::<u32>()
            .map_err(|_| AtomError::InvalidQuantumNumber {
                name: "n",
                value: n.to_string(),
            })?;
        let l = parse_angular_momentum(l)?;
        let occ = occ
            .trim()
            .parse::<f64>()
            .map_err(|_| AtomError::InvalidQuantumNumber {
                name: "occ",
                value: occ.to_string(),
            })?;

        Ok(Self::new(n, l, occ))
    }

    pub fn with_eig(mut self, eig: f64) -> Self {
        self.eig = Some(eig);
        self
    }

    pub fn with_j(mut self, j: i32) -> Self {
        self.j = Some(j);
        self
    }

    pub fn with_s(mut self, s: i32) -> Self {
        self.s = Some(s);
        self
    }

    pub fn n(&self) -> u32 {
        self.n
    }

    pub fn l(&self) -> u32 {
        self.l
    }

    pub fn occ(&self) -> f64 {
        self.occ
    }

    pub fn eig(&self) -> Option<f64> {
        self.eig
    }

    pub fn j(&self) -> Option<i32> {
        self.j
    }

    pub fn s(&self) -> Option<i32> {
        self.s
    }

    pub fn has_j(&self) -> bool {
        self.j.is_some()
    }

    pub fn has_s(&self) -> bool {
        self.s.is_some()
    }

    /// True if a dipole transition between `self` and `other` is allowed (|Δl| = 1)
    pub fn lselect(&self, other: &QState) -> bool {
        self.l.abs_diff(other.l) == 1
    }

    /// Dictionary representation with `@module` and `@class` tags.
    /// Unset optional fields are omitted.
    pub fn to_dict(&self) -> Result<Dict> {
        Ok(to_tagged_dict(self, module_path!(), Self::CLASS)?)
    }

    /// Rebuild a state from the output of [`QState::to_dict`]
    pub fn from_dict(dict: &Dict) -> Result<Self> {
        Ok(from_tagged_dict(dict)?)
    }

    /// Lines describing this orbital in the input format of APE
    pub fn to_ape_input(&self) -> Result<Vec<String>> {
        match (self.s, self.j) {
            (None, _) => Ok(vec![format!(
                "{} | {} | {} ",
                self.n,
                self.l,
                float_repr(self.occ)
            )]),
            (Some(2), _) => Err(AtomError::NotImplemented("Spin".to_string())),
            (Some(_), Some(_)) => Err(AtomError::NotImplemented("Spinor".to_string())),
            (Some(_), None) => Err(AtomError::Unconvertible(self.to_string())),
        }
    }
}

impl fmt::Display for QState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match angular_momentum_symbol(self.l) {
            Some(symbol) => write!(f, "{}{}{}", self.n, symbol, compact_float(self.occ))?,
            None => write!(f, "{}[l={}]{}", self.n, self.l, compact_float(self.occ))?,
        }
        if let Some(j) = self.j {
            write!(f, " j={}", j)?;
        }
        if let Some(s) = self.s {
            write!(f, " s={}", s)?;
        }
        if let Some(eig) = self.eig {
            write!(f, " eig={}", eig)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use serde_json::Value;

    #[test]
    fn test_angular_momentum_coercion() {
        assert_eq!(parse_angular_momentum("s").unwrap(), 0);
        assert_eq!(parse_angular_momentum("f").unwrap(), 3);
        assert_eq!(parse_angular_momentum("i").unwrap(), 6);
        assert_eq!(parse_angular_momentum("2").unwrap(), 2);
        assert!(parse_angular_momentum("x").is_err());
        assert!(parse_angular_momentum("-1").is_err());
    }

    #[test]
    fn test_parse_orbital_token() {
        let state = parse_orbital_token("2p3").unwrap();
        assert_eq!(state.n(), 2);
        assert_eq!(state.l(), 1);
        assert_relative_eq!(state.occ(), 3.0);

        let state = parse_orbital_token(" 3d2.5 ").unwrap();
        assert_eq!(state.l(), 2);
        assert_relative_eq!(state.occ(), 2.5);
    }

    #[test]
    fn test_invalid_token_reports_token() {
        let err = parse_orbital_token("2x3").unwrap_err();
        match err {
            AtomError::InvalidOrbitalToken(token) => assert_eq!(token, "2x3"),
            other => panic!("unexpected error: {other}"),
        }
        assert!(parse_orbital_token("2p").is_err());
        assert!(parse_orbital_token("p3").is_err());
    }

    #[test]
    fn test_dict_omits_unset_fields() {
        let dict = QState::new(1, 0, 2.0).to_dict().unwrap();
        assert!(!dict.contains_key("eig"));
        assert!(!dict.contains_key("j"));
        assert_eq!(dict.get("@class"), Some(&Value::from("QState")));
        assert!(dict.contains_key("@module"));
    }

    #[test]
    fn test_dict_accepts_letter_l() {
        let mut dict = Dict::new();
        dict.insert("n".to_string(), Value::from(3));
        dict.insert("l".to_string(), Value::from("d"));
        dict.insert("occ".to_string(), Value::from(5.0));
        let state = QState::from_dict(&dict).unwrap();
        assert_eq!(state, QState::new(3, 2, 5.0));
    }

    #[test]
    fn test_ape_input() {
        let lines = QState::new(2, 1, 3.0).to_ape_input().unwrap();
        assert_eq!(lines, vec!["2 | 1 | 3.0 ".to_string()]);

        let spin = QState::new(2, 1, 3.0).with_s(2).to_ape_input();
        assert!(matches!(spin, Err(AtomError::NotImplemented(_))));

        let spinor = QState::new(2, 1, 3.0).with_s(1).with_j(1).to_ape_input();
        assert!(matches!(spinor, Err(AtomError::NotImplemented(_))));

        let other = QState::new(2, 1, 3.0).with_s(1).to_ape_input();
        assert!(matches!(other, Err(AtomError::Unconvertible(_))));
    }

    #[test]
    fn test_lselect() {
        let s = QState::new(1, 0, 2.0);
        let p = QState::new(2, 1, 1.0);
        let d = QState::new(3, 2, 0.0);
        assert!(s.lselect(&p));
        assert!(d.lselect(&p));
        assert!(!s.lselect(&d));
        assert!(!p.lselect(&p));
    }

    #[test]
    fn test_display() {
        assert_eq!(QState::new(2, 1, 3.0).to_string(), "2p3");
        assert_eq!(QState::new(4, 3, 0.5).to_string(), "4f0.5");
        assert_eq!(QState::new(8, 7, 1.0).to_string(), "8[l=7]1");
    }
}
