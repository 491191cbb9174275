/*
MIT License with FEFF10 Attribution

Copyright (c) 2025 Ameyanagi

Based on or developed using Distribution: FEFF10.0
Copyright (c) 2020 FEFF Project, University of Washington and SLAC National Accelerator Laboratory.
All rights reserved.
*/

//! Atomic configuration defining the all-electron atom

use super::database;
use super::errors::{AtomError, Result};
use super::qstate::{parse_orbital_token, QState};
use crate::utils::serialization::{CLASS_KEY, MODULE_KEY};
use crate::utils::{Dict, CHARGE_TOLERANCE};
use serde_json::Value;
use std::fmt;

/// Spin treatment implied by the states of a configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpinMode {
    /// Spin-unpolarized calculation
    Unpolarized,
    /// Spin-polarized calculation
    Polarized,
}

impl fmt::Display for SpinMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SpinMode::Unpolarized => write!(f, "unpolarized"),
            SpinMode::Polarized => write!(f, "polarized"),
        }
    }
}

/// Parse a configuration string such as `[He] 2s2 2p3` into states
///
/// A leading bracketed noble gas is expanded into its neutral configuration.
pub fn states_from_string(text: &str) -> Result<Vec<QState>> {
    let mut tokens = text.split_whitespace().peekable();
    let mut states = Vec::new();

    if let Some(core) = tokens.next_if(|t| t.starts_with('[')) {
        let symbol = core
            .strip_prefix('[')
            .and_then(|s| s.strip_suffix(']'))
            .ok_or_else(|| AtomError::InvalidOrbitalToken(core.to_string()))?;
        if database::noble_gas_atomic_number(symbol).is_none() {
            log::warn!("Core [{}] is not a noble gas", symbol);
        }
        let noble_gas = AtomicConfiguration::neutral_from_symbol(symbol)?;
        states = noble_gas.states;
    }

    for token in tokens {
        states.push(parse_orbital_token(token)?);
    }
    Ok(states)
}

/// Atomic number plus an ordered list of occupied states
#[derive(Debug, Clone, PartialEq)]
pub struct AtomicConfiguration {
    z: u32,
    states: Vec<QState>,
}

impl AtomicConfiguration {
    /// Class name written to the `@class` tag
    pub const CLASS: &'static str = "AtomicConfiguration";

    /// Create a configuration from an atomic number and a list of states
    pub fn new(z: u32, states: Vec<QState>) -> Self {
        Self { z, states }
    }

    /// Build a configuration from spectroscopic notation, e.g. `[He] 2s2 2p3`
    ///
    /// Spin-resolved and relativistic notations are not supported.
    pub fn from_string(z: u32, text: &str, has_s: bool, has_j: bool) -> Result<Self> {
        if has_s || has_j {
            return Err(AtomError::NotImplemented(
                "configurations with spin or total angular momentum".to_string(),
            ));
        }
        Ok(Self::new(z, states_from_string(text)?))
    }

    /// Neutral reference configuration from a chemical symbol or an atomic number
    pub fn neutral_from_symbol(symbol: &str) -> Result<Self> {
        let symbol = symbol.trim();
        let z = match symbol.parse::<i64>() {
            Ok(z) => u32::try_from(z).map_err(|_| AtomError::InvalidAtomicNumber(z))?,
            Err(_) => database::atomic_number_from_symbol(symbol)
                .ok_or_else(|| AtomError::UnknownSymbol(symbol.to_string()))?,
        };
        Self::neutral_from_z(z)
    }

    /// Neutral reference configuration of the element with atomic number `z`
    pub fn neutral_from_z(z: u32) -> Result<Self> {
        let shells = database::neutral_configuration(z)
            .ok_or(AtomError::InvalidAtomicNumber(z as i64))?;
        let states = shells
            .into_iter()
            .map(|(n, l, occ)| QState::new(n, l, occ))
            .collect();
        Ok(Self::new(z, states))
    }

    pub fn z(&self) -> u32 {
        self.z
    }

    pub fn states(&self) -> &[QState] {
        &self.states
    }

    pub fn len(&self) -> usize {
        self.states.len()
    }

    pub fn is_empty(&self) -> bool {
        self.states.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, QState> {
        self.states.iter()
    }

    /// Chemical symbol of the element
    pub fn symbol(&self) -> Option<&'static str> {
        database::element_symbol(self.z)
    }

    pub fn spin_mode(&self) -> SpinMode {
        if self.states.iter().any(|state| state.s() == Some(2)) {
            SpinMode::Polarized
        } else {
            SpinMode::Unpolarized
        }
    }

    /// Electronic charge (negative)
    pub fn echarge(&self) -> f64 {
        -self.states.iter().map(QState::occ).sum::<f64>()
    }

    /// True if the electronic charge compensates the nuclear charge
    pub fn is_neutral(&self) -> bool {
        (self.echarge() + self.z as f64).abs() < CHARGE_TOLERANCE
    }

    /// Append a state; duplicates are rejected and leave `self` untouched
    pub fn add_state(&mut self, state: QState) -> Result<()> {
        if self.states.contains(&state) {
            return Err(AtomError::DuplicateState(state.to_string()));
        }
        self.states.push(state);
        Ok(())
    }

    /// Remove the first state equal to `state`
    pub fn remove_state(&mut self, state: &QState) -> Result<QState> {
        let idx = self
            .states
            .iter()
            .position(|s| s == state)
            .ok_or_else(|| AtomError::StateNotFound(state.to_string()))?;
        Ok(self.states.remove(idx))
    }

    /// JSON-serializable dictionary with nested state dictionaries
    pub fn to_dict(&self) -> Result<Dict> {
        let states = self
            .states
            .iter()
            .map(|s| s.to_dict().map(Value::Object))
            .collect::<Result<Vec<_>>>()?;

        let mut dict = Dict::new();
        dict.insert("Z".to_string(), Value::from(self.z));
        dict.insert("states".to_string(), Value::Array(states));
        dict.insert(CLASS_KEY.to_string(), Value::from(Self::CLASS));
        dict.insert(MODULE_KEY.to_string(), Value::from(module_path!()));
        Ok(dict)
    }

    /// Reconstitute a configuration from the output of [`AtomicConfiguration::to_dict`]
    pub fn from_dict(dict: &Dict) -> Result<Self> {
        let z = dict
            .get("Z")
            .and_then(Value::as_u64)
            .ok_or_else(|| missing_field("Z"))?;
        let z = u32::try_from(z).map_err(|_| AtomError::InvalidAtomicNumber(z as i64))?;

        let states = dict
            .get("states")
            .and_then(Value::as_array)
            .ok_or_else(|| missing_field("states"))?
            .iter()
            .map(|entry| match entry {
                Value::Object(state) => QState::from_dict(state),
                _ => Err(missing_field("states[]")),
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(Self::new(z, states))
    }

    /// Input lines for APE, one per state
    pub fn to_ape_input(&self) -> Result<Vec<String>> {
        let mut lines = Vec::with_capacity(self.states.len());
        for state in &self.states {
            lines.extend(state.to_ape_input()?);
        }
        Ok(lines)
    }
}

fn missing_field(field: &str) -> AtomError {
    AtomError::InvalidDict(format!("missing or malformed field `{}`", field))
}

impl<'a> IntoIterator for &'a AtomicConfiguration {
    type Item = &'a QState;
    type IntoIter = std::slice::Iter<'a, QState>;

    fn into_iter(self) -> Self::IntoIter {
        self.states.iter()
    }
}

impl fmt::Display for AtomicConfiguration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: ", self.z)?;
        for state in &self.states {
            write!(f, "\n{}", state)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_states_from_string() {
        let states = states_from_string("2s2 2p3").unwrap();
        assert_eq!(states, vec![QState::new(2, 0, 2.0), QState::new(2, 1, 3.0)]);
    }

    #[test]
    fn test_noble_gas_core_is_expanded() {
        let config = AtomicConfiguration::from_string(7, "[He] 2s2 2p3", false, false).unwrap();
        assert_eq!(config.len(), 3);
        assert_eq!(config.states()[0], QState::new(1, 0, 2.0));
        assert!(config.is_neutral());
        assert_eq!(config.symbol(), Some("N"));
    }

    #[test]
    fn test_unterminated_core_is_rejected() {
        assert!(states_from_string("[He 2s2").is_err());
    }

    #[test]
    fn test_spin_notation_not_implemented() {
        let result = AtomicConfiguration::from_string(7, "[He] 2s2 2p3", true, false);
        assert!(matches!(result, Err(AtomError::NotImplemented(_))));
    }

    #[test]
    fn test_charge() {
        let config = AtomicConfiguration::from_string(8, "[He] 2s2 2p3", false, false).unwrap();
        assert_relative_eq!(config.echarge(), -7.0);
        assert!(!config.is_neutral());
    }

    #[test]
    fn test_spin_mode() {
        let mut config = AtomicConfiguration::new(1, vec![QState::new(1, 0, 1.0)]);
        assert_eq!(config.spin_mode(), SpinMode::Unpolarized);
        config.add_state(QState::new(2, 0, 0.0).with_s(2)).unwrap();
        assert_eq!(config.spin_mode(), SpinMode::Polarized);
    }

    #[test]
    fn test_remove_state() {
        let mut config = AtomicConfiguration::neutral_from_symbol("C").unwrap();
        let removed = config.remove_state(&QState::new(2, 1, 2.0)).unwrap();
        assert_eq!(removed.l(), 1);
        assert_eq!(config.len(), 2);

        let err = config.remove_state(&QState::new(2, 1, 2.0)).unwrap_err();
        assert!(matches!(err, AtomError::StateNotFound(_)));
    }

    #[test]
    fn test_neutral_from_number_string() {
        let by_number = AtomicConfiguration::neutral_from_symbol("14").unwrap();
        let by_symbol = AtomicConfiguration::neutral_from_symbol("Si").unwrap();
        assert_eq!(by_number, by_symbol);
        assert!(AtomicConfiguration::neutral_from_symbol("-3").is_err());
        assert!(AtomicConfiguration::neutral_from_symbol("Qq").is_err());
    }

    #[test]
    fn test_display() {
        let config = AtomicConfiguration::from_string(5, "[He] 2s2 2p1", false, false).unwrap();
        assert_eq!(config.to_string(), "5: \n1s2\n2s2\n2p1");
    }
}
