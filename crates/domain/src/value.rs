//! Typed values attached to groups as variables.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// A single group-variable value.
///
/// The set of shapes is closed so that encoding never fails: every variant
/// maps onto a JSON value (non-finite floats encode as `null`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum VarValue {
    Null,
    Bool(bool),
    Int(i64),
    Float(f64),
    String(String),
    List(Vec<VarValue>),
    Map(BTreeMap<String, VarValue>),
}

impl From<bool> for VarValue {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<i64> for VarValue {
    fn from(value: i64) -> Self {
        Self::Int(value)
    }
}

impl From<f64> for VarValue {
    fn from(value: f64) -> Self {
        Self::Float(value)
    }
}

impl From<&str> for VarValue {
    fn from(value: &str) -> Self {
        Self::String(value.to_string())
    }
}

impl From<String> for VarValue {
    fn from(value: String) -> Self {
        Self::String(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_serialize_string_variant_as_plain_string() {
        let json = serde_json::to_string(&VarValue::from("hello")).unwrap();
        assert_eq!(json, "\"hello\"");
    }

    #[test]
    fn should_serialize_int_variant_as_number() {
        let json = serde_json::to_string(&VarValue::Int(42)).unwrap();
        assert_eq!(json, "42");
    }

    #[test]
    fn should_serialize_nested_map_and_list() {
        let mut map = BTreeMap::new();
        map.insert(
            "ports".to_string(),
            VarValue::List(vec![VarValue::Int(80), VarValue::Int(443)]),
        );
        map.insert("tls".to_string(), VarValue::Bool(true));
        let json = serde_json::to_string(&VarValue::Map(map)).unwrap();
        assert_eq!(json, r#"{"ports":[80,443],"tls":true}"#);
    }

    #[test]
    fn should_encode_non_finite_float_as_null() {
        let json = serde_json::to_string(&VarValue::Float(f64::NAN)).unwrap();
        assert_eq!(json, "null");
    }

    #[test]
    fn should_round_trip_null_variant() {
        let val: VarValue = serde_json::from_str("null").unwrap();
        assert_eq!(val, VarValue::Null);
        assert_eq!(serde_json::to_string(&val).unwrap(), "null");
    }

    #[test]
    fn should_deserialize_integer_before_float() {
        let val: VarValue = serde_json::from_str("7").unwrap();
        assert_eq!(val, VarValue::Int(7));
        let val: VarValue = serde_json::from_str("7.5").unwrap();
        assert_eq!(val, VarValue::Float(7.5));
    }
}
