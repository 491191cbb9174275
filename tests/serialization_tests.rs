/*
MIT License with FEFF10 Attribution

Copyright (c) 2025 Ameyanagi

Based on or developed using Distribution: FEFF10.0
Copyright (c) 2020 FEFF Project, University of Washington and SLAC National Accelerator Laboratory.
All rights reserved.
*/

use pseudo_dojo_rs::atoms::{AtomicConfiguration, QState};
use pseudo_dojo_rs::utils::Dict;
use rstest::rstest;
use serde_json::Value;

#[rstest]
#[case(QState::new(1, 0, 2.0))]
#[case(QState::new(3, 2, 5.5).with_eig(-0.3125))]
#[case(QState::new(4, 3, 7.0).with_j(3).with_s(1))]
fn test_qstate_dict_round_trip(#[case] state: QState) {
    let dict = state.to_dict().unwrap();
    assert_eq!(dict.get("@class"), Some(&Value::from("QState")));

    let back = QState::from_dict(&dict).unwrap();
    assert_eq!(back, state);
}

#[test]
fn test_qstate_dict_survives_json_text() {
    let state = QState::new(2, 1, 3.0).with_eig(-0.25);
    let text = serde_json::to_string(&state.to_dict().unwrap()).unwrap();

    let dict: Dict = serde_json::from_str(&text).unwrap();
    assert_eq!(QState::from_dict(&dict).unwrap(), state);
}

#[test]
fn test_configuration_dict_round_trip() {
    let config = AtomicConfiguration::from_string(26, "[Ar] 3d6 4s2", false, false).unwrap();
    let dict = config.to_dict().unwrap();

    assert_eq!(dict.get("Z"), Some(&Value::from(26)));
    assert_eq!(dict.get("@class"), Some(&Value::from("AtomicConfiguration")));
    let states = dict.get("states").and_then(Value::as_array).unwrap();
    assert_eq!(states.len(), config.len());
    assert!(states.iter().all(|s| s.get("@class") == Some(&Value::from("QState"))));

    assert_eq!(AtomicConfiguration::from_dict(&dict).unwrap(), config);
}

#[test]
fn test_configuration_dict_requires_fields() {
    let mut dict = Dict::new();
    dict.insert("Z".to_string(), Value::from(8));
    assert!(AtomicConfiguration::from_dict(&dict).is_err());
}
