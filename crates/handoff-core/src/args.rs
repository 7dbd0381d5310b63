//! Normalization of free-form tool arguments.
//!
//! Tool argument shapes are unconstrained by this crate, so arguments are
//! carried as a generic ordered JSON object. This module owns the single
//! rule set that turns whatever a caller supplies into that object.

use serde::Serialize;
use serde_json::{Map, Value};

/// Normalizes a caller-supplied JSON value into an argument object.
///
/// `None` and JSON `null` yield absent arguments. An object passes
/// through unchanged, keys verbatim. Anything else (a scalar or an
/// array) degrades to the empty object, since an action's arguments must
/// be an object or nothing.
pub fn normalize(args: Option<Value>) -> Option<Map<String, Value>> {
    match args {
        None | Some(Value::Null) => None,
        Some(Value::Object(map)) => Some(map),
        Some(_) => Some(Map::new()),
    }
}

/// Normalizes an arbitrary serializable value into an argument object.
///
/// The value is serialized through `serde_json` and any null-valued
/// members are dropped, matching the omit-if-absent rule the rest of the
/// wire contract follows; the result then passes through [`normalize`].
/// A value that cannot serialize degrades to the empty object rather
/// than surfacing an error; argument normalization never fails.
pub fn from_serialize<T: Serialize>(value: &T) -> Option<Map<String, Value>> {
    match serde_json::to_value(value) {
        Ok(json) => normalize(Some(drop_nulls(json))),
        Err(_) => Some(Map::new()),
    }
}

/// Removes null-valued object members at every depth.
fn drop_nulls(value: Value) -> Value {
    match value {
        Value::Object(map) => Value::Object(
            map.into_iter()
                .filter(|(_, v)| !v.is_null())
                .map(|(k, v)| (k, drop_nulls(v)))
                .collect(),
        ),
        Value::Array(items) => Value::Array(items.into_iter().map(drop_nulls).collect()),
        other => other,
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn test_none_and_null_yield_absent_args() {
        assert_eq!(normalize(None), None);
        assert_eq!(normalize(Some(Value::Null)), None);
    }

    #[test]
    fn test_object_passes_through_unchanged() {
        let args = normalize(Some(json!({"screen": "Payroll", "count": 3}))).unwrap();
        assert_eq!(args.len(), 2);
        assert_eq!(args["screen"], json!("Payroll"));
        assert_eq!(args["count"], json!(3));
    }

    #[test]
    fn test_explicit_object_keeps_null_members() {
        // Pass-through is verbatim; only the serialize path strips nulls
        let args = normalize(Some(json!({"keep": null}))).unwrap();
        assert!(args.contains_key("keep"));
    }

    #[test]
    fn test_object_keys_keep_insertion_order() {
        let args = normalize(Some(json!({"zeta": 1, "alpha": 2, "Mixed_Case": 3}))).unwrap();
        let keys: Vec<&str> = args.keys().map(String::as_str).collect();
        assert_eq!(keys, ["zeta", "alpha", "Mixed_Case"]);
    }

    #[test]
    fn test_scalar_and_array_degrade_to_empty_object() {
        assert_eq!(normalize(Some(json!(42))), Some(Map::new()));
        assert_eq!(normalize(Some(json!("text"))), Some(Map::new()));
        assert_eq!(normalize(Some(json!([1, 2, 3]))), Some(Map::new()));
        assert_eq!(normalize(Some(json!(true))), Some(Map::new()));
    }

    #[test]
    fn test_from_serialize_drops_null_fields() {
        #[derive(serde::Serialize)]
        struct DeployArgs {
            env: String,
            replicas: Option<u32>,
            nested: Nested,
        }

        #[derive(serde::Serialize)]
        struct Nested {
            region: Option<String>,
            zone: String,
        }

        let args = from_serialize(&DeployArgs {
            env: "prod".to_string(),
            replicas: None,
            nested: Nested {
                region: None,
                zone: "b".to_string(),
            },
        })
        .unwrap();

        assert_eq!(args["env"], json!("prod"));
        assert!(!args.contains_key("replicas"));
        assert_eq!(args["nested"], json!({"zone": "b"}));
    }

    #[test]
    fn test_from_serialize_scalar_degrades() {
        assert_eq!(from_serialize(&7u8), Some(Map::new()));
    }
}
