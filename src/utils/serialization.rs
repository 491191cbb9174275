/*
MIT License with FEFF10 Attribution

Copyright (c) 2025 Ameyanagi

Based on or developed using Distribution: FEFF10.0
Copyright (c) 2020 FEFF Project, University of Washington and SLAC National Accelerator Laboratory.
All rights reserved.
*/

//! Dictionary serialization tagged with class and module metadata
//!
//! Objects are written as JSON objects carrying two extra keys, `@module` and
//! `@class`, so that a consumer can tell which type produced the entry. The
//! tags are stripped again before deserializing.

use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::{Map, Value};

/// Key holding the module path of the serialized type
pub const MODULE_KEY: &str = "@module";

/// Key holding the type name of the serialized type
pub const CLASS_KEY: &str = "@class";

/// A JSON object produced by `to_dict`
pub type Dict = Map<String, Value>;

/// Serialize `value` into a JSON object and add the metadata tags
pub fn to_tagged_dict<T: Serialize>(value: &T, module: &str, class: &str) -> serde_json::Result<Dict> {
    match serde_json::to_value(value)? {
        Value::Object(mut map) => {
            map.insert(MODULE_KEY.to_string(), Value::String(module.to_string()));
            map.insert(CLASS_KEY.to_string(), Value::String(class.to_string()));
            Ok(map)
        }
        other => Err(serde::ser::Error::custom(format!(
            "expected a JSON object, got {}",
            other
        ))),
    }
}

/// Drop every `@`-prefixed key from a dictionary
pub fn strip_tags(dict: &Dict) -> Dict {
    dict.iter()
        .filter(|(key, _)| !key.starts_with('@'))
        .map(|(key, value)| (key.clone(), value.clone()))
        .collect()
}

/// Deserialize a tagged dictionary, ignoring the metadata tags
pub fn from_tagged_dict<T: DeserializeOwned>(dict: &Dict) -> serde_json::Result<T> {
    serde_json::from_value(Value::Object(strip_tags(dict)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;

    #[derive(Debug, PartialEq, Serialize, Deserialize)]
    struct Point {
        x: f64,
        y: f64,
    }

    #[test]
    fn test_tags_are_added_and_stripped() {
        let point = Point { x: 1.0, y: -2.5 };
        let dict = to_tagged_dict(&point, "geometry", "Point").unwrap();

        assert_eq!(dict.get(MODULE_KEY), Some(&Value::from("geometry")));
        assert_eq!(dict.get(CLASS_KEY), Some(&Value::from("Point")));

        let back: Point = from_tagged_dict(&dict).unwrap();
        assert_eq!(back, point);
    }

    #[test]
    fn test_non_object_is_rejected() {
        assert!(to_tagged_dict(&3.0_f64, "m", "Float").is_err());
    }
}
