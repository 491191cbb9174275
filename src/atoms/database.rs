/*
MIT License with FEFF10 Attribution

Copyright (c) 2025 Ameyanagi

Based on or developed using Distribution: FEFF10.0
Copyright (c) 2020 FEFF Project, University of Washington and SLAC National Accelerator Laboratory.
All rights reserved.
*/

//! Atomic database for element symbols and reference configurations
//!
//! Neutral ground-state configurations are generated with the Madelung
//! (n + l, n) filling rule and corrected for the elements whose measured
//! ground state departs from it.

/// Largest atomic number known to the database
pub const MAX_ATOMIC_NUMBER: u32 = 118;

const ELEMENT_SYMBOLS: [&str; MAX_ATOMIC_NUMBER as usize] = [
    "H", "He", "Li", "Be", "B", "C", "N", "O", "F", "Ne", "Na", "Mg", "Al", "Si", "P", "S", "Cl",
    "Ar", "K", "Ca", "Sc", "Ti", "V", "Cr", "Mn", "Fe", "Co", "Ni", "Cu", "Zn", "Ga", "Ge", "As",
    "Se", "Br", "Kr", "Rb", "Sr", "Y", "Zr", "Nb", "Mo", "Tc", "Ru", "Rh", "Pd", "Ag", "Cd", "In",
    "Sn", "Sb", "Te", "I", "Xe", "Cs", "Ba", "La", "Ce", "Pr", "Nd", "Pm", "Sm", "Eu", "Gd", "Tb",
    "Dy", "Ho", "Er", "Tm", "Yb", "Lu", "Hf", "Ta", "W", "Re", "Os", "Ir", "Pt", "Au", "Hg", "Tl",
    "Pb", "Bi", "Po", "At", "Rn", "Fr", "Ra", "Ac", "Th", "Pa", "U", "Np", "Pu", "Am", "Cm", "Bk",
    "Cf", "Es", "Fm", "Md", "No", "Lr", "Rf", "Db", "Sg", "Bh", "Hs", "Mt", "Ds", "Rg", "Cn", "Nh",
    "Fl", "Mc", "Lv", "Ts", "Og",
];

/// Noble gases that may appear as a bracketed core, e.g. `[Ar] 3d6 4s2`
pub const NOBLE_GASES: [(&str, u32); 7] = [
    ("He", 2),
    ("Ne", 10),
    ("Ar", 18),
    ("Kr", 36),
    ("Xe", 54),
    ("Rn", 86),
    ("Og", 118),
];

/// Ground states that deviate from the Madelung rule, as (Z, [(n, l, Δocc)])
const ANOMALOUS_CONFIGURATIONS: [(u32, &[(u32, u32, i32)]); 20] = [
    (24, &[(4, 0, -1), (3, 2, 1)]),  // Cr
    (29, &[(4, 0, -1), (3, 2, 1)]),  // Cu
    (41, &[(5, 0, -1), (4, 2, 1)]),  // Nb
    (42, &[(5, 0, -1), (4, 2, 1)]),  // Mo
    (44, &[(5, 0, -1), (4, 2, 1)]),  // Ru
    (45, &[(5, 0, -1), (4, 2, 1)]),  // Rh
    (46, &[(5, 0, -2), (4, 2, 2)]),  // Pd
    (47, &[(5, 0, -1), (4, 2, 1)]),  // Ag
    (57, &[(4, 3, -1), (5, 2, 1)]),  // La
    (58, &[(4, 3, -1), (5, 2, 1)]),  // Ce
    (64, &[(4, 3, -1), (5, 2, 1)]),  // Gd
    (78, &[(6, 0, -1), (5, 2, 1)]),  // Pt
    (79, &[(6, 0, -1), (5, 2, 1)]),  // Au
    (89, &[(5, 3, -1), (6, 2, 1)]),  // Ac
    (90, &[(5, 3, -2), (6, 2, 2)]),  // Th
    (91, &[(5, 3, -1), (6, 2, 1)]),  // Pa
    (92, &[(5, 3, -1), (6, 2, 1)]),  // U
    (93, &[(5, 3, -1), (6, 2, 1)]),  // Np
    (96, &[(5, 3, -1), (6, 2, 1)]),  // Cm
    (103, &[(6, 2, -1), (7, 1, 1)]), // Lr
];

/// Provides the element symbol for an atomic number
pub fn element_symbol(atomic_number: u32) -> Option<&'static str> {
    match atomic_number {
        1..=MAX_ATOMIC_NUMBER => Some(ELEMENT_SYMBOLS[atomic_number as usize - 1]),
        _ => None,
    }
}

/// Returns the atomic number for an element symbol
///
/// This function is case-insensitive and will handle both "Fe" and "FE"
pub fn atomic_number_from_symbol(symbol: &str) -> Option<u32> {
    let symbol = symbol.trim();
    ELEMENT_SYMBOLS
        .iter()
        .position(|s| s.eq_ignore_ascii_case(symbol))
        .map(|idx| idx as u32 + 1)
}

/// Atomic number of a noble gas core symbol such as `He`
pub fn noble_gas_atomic_number(symbol: &str) -> Option<u32> {
    NOBLE_GASES
        .iter()
        .find(|(s, _)| s.eq_ignore_ascii_case(symbol.trim()))
        .map(|&(_, z)| z)
}

/// Maximum occupancy of a shell with angular momentum l
pub fn shell_capacity(l: u32) -> u32 {
    2 * (2 * l + 1)
}

/// Orbitals (n, l) in Madelung filling order, up to and including 8s
pub fn madelung_order() -> Vec<(u32, u32)> {
    let mut shells: Vec<(u32, u32)> = (1..=8)
        .flat_map(|n| (0..n.min(4)).map(move |l| (n, l)))
        .collect();
    shells.sort_by_key(|&(n, l)| (n + l, n));
    shells
}

/// Neutral ground-state occupations (n, l, occ) for an atomic number
///
/// States are listed in filling order and only occupied shells are returned.
pub fn neutral_configuration(atomic_number: u32) -> Option<Vec<(u32, u32, f64)>> {
    if atomic_number == 0 || atomic_number > MAX_ATOMIC_NUMBER {
        return None;
    }

    let mut remaining = atomic_number;
    let mut shells: Vec<(u32, u32, i32)> = Vec::new();
    for (n, l) in madelung_order() {
        let occ = remaining.min(shell_capacity(l));
        shells.push((n, l, occ as i32));
        remaining -= occ;
    }

    if let Some((_, corrections)) = ANOMALOUS_CONFIGURATIONS
        .iter()
        .find(|(z, _)| *z == atomic_number)
    {
        log::debug!(
            "Applying anomalous ground state corrections for Z = {}",
            atomic_number
        );
        for &(n, l, delta) in corrections.iter() {
            if let Some(shell) = shells.iter_mut().find(|s| s.0 == n && s.1 == l) {
                shell.2 += delta;
            }
        }
    }

    Some(
        shells
            .into_iter()
            .filter(|&(_, _, occ)| occ > 0)
            .map(|(n, l, occ)| (n, l, occ as f64))
            .collect(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn occupation(config: &[(u32, u32, f64)], n: u32, l: u32) -> f64 {
        config
            .iter()
            .find(|s| s.0 == n && s.1 == l)
            .map(|s| s.2)
            .unwrap_or(0.0)
    }

    #[test]
    fn test_symbol_lookup() {
        assert_eq!(element_symbol(1), Some("H"));
        assert_eq!(element_symbol(26), Some("Fe"));
        assert_eq!(element_symbol(118), Some("Og"));
        assert_eq!(element_symbol(0), None);
        assert_eq!(element_symbol(119), None);

        assert_eq!(atomic_number_from_symbol("Fe"), Some(26));
        assert_eq!(atomic_number_from_symbol("FE"), Some(26));
        assert_eq!(atomic_number_from_symbol("si"), Some(14));
        assert_eq!(atomic_number_from_symbol("Xx"), None);
    }

    #[test]
    fn test_madelung_order() {
        let order = madelung_order();
        assert_eq!(&order[..7], &[(1, 0), (2, 0), (2, 1), (3, 0), (3, 1), (4, 0), (3, 2)]);
    }

    #[test]
    fn test_neutral_configurations_sum_to_z() {
        for z in 1..=MAX_ATOMIC_NUMBER {
            let config = neutral_configuration(z).unwrap();
            let total: f64 = config.iter().map(|s| s.2).sum();
            assert_eq!(total, z as f64, "Z = {}", z);
        }
    }

    #[test]
    fn test_noble_gases_fill_shells() {
        let ar = neutral_configuration(18).unwrap();
        assert_eq!(
            ar,
            vec![(1, 0, 2.0), (2, 0, 2.0), (2, 1, 6.0), (3, 0, 2.0), (3, 1, 6.0)]
        );
    }

    #[test]
    fn test_anomalous_configurations() {
        let cu = neutral_configuration(29).unwrap();
        assert_eq!(occupation(&cu, 4, 0), 1.0);
        assert_eq!(occupation(&cu, 3, 2), 10.0);

        let pd = neutral_configuration(46).unwrap();
        assert_eq!(occupation(&pd, 5, 0), 0.0);
        assert!(!pd.iter().any(|s| s.0 == 5 && s.1 == 0));

        let lr = neutral_configuration(103).unwrap();
        assert_eq!(occupation(&lr, 7, 1), 1.0);
        assert_eq!(occupation(&lr, 6, 2), 0.0);
    }
}
