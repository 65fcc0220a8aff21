//! The one-or-many normalizer.
//!
//! The wire format encodes an N-element relationship as a bare object
//! when N is 1 and as an array when N is larger, and omits the key (or
//! sends `null`) when N is 0. Every container field goes through one of
//! the two entry points here, so the ambiguity is resolved in exactly
//! one place.

use crate::error::ShapeError;
use crate::raw::{self, RawNode};
use serde_json::Value;

fn shape(v: &Value) -> ShapeError {
    ShapeError {
        found: raw::type_name(v).to_string(),
    }
}

/// Normalizes an optional raw value to a list of nodes: absent and
/// `null` become the empty list, a bare object becomes a singleton, and
/// an array of objects passes through.
pub fn as_list(v: Option<&Value>) -> Result<Vec<&RawNode>, ShapeError> {
    match v {
        None | Some(Value::Null) => Ok(Vec::new()),
        Some(Value::Object(m)) => Ok(vec![m]),
        Some(Value::Array(items)) => items
            .iter()
            .map(|item| item.as_object().ok_or_else(|| shape(item)))
            .collect(),
        Some(other) => Err(shape(other)),
    }
}

/// Normalizes an optional raw value to zero or one node. A singleton
/// array collapses to its element; an array of two or more is a shape
/// error because the field forbids multiplicity.
pub fn as_optional(v: Option<&Value>) -> Result<Option<&RawNode>, ShapeError> {
    match v {
        None | Some(Value::Null) => Ok(None),
        Some(Value::Object(m)) => Ok(Some(m)),
        Some(Value::Array(items)) => match items.as_slice() {
            [] => Ok(None),
            [single] => single.as_object().map(Some).ok_or_else(|| shape(single)),
            _ => Err(ShapeError {
                found: format!("array of {}", items.len()),
            }),
        },
        Some(other) => Err(shape(other)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn absent_is_empty_list() {
        assert_eq!(as_list(None).unwrap(), Vec::<&RawNode>::new());
        assert_eq!(as_list(Some(&json!(null))).unwrap(), Vec::<&RawNode>::new());
    }

    #[test]
    fn single_object_is_singleton_list() {
        let v = json!({"title": "Result"});
        let list = as_list(Some(&v)).unwrap();
        assert_eq!(list.len(), 1);
        assert_eq!(list[0].get("title"), Some(&json!("Result")));
    }

    #[test]
    fn array_passes_through() {
        let v = json!([{"a": 1}, {"b": 2}]);
        let list = as_list(Some(&v)).unwrap();
        assert_eq!(list.len(), 2);
    }

    #[test]
    fn scalar_is_a_shape_error() {
        let err = as_list(Some(&json!("oops"))).unwrap_err();
        assert_eq!(err.found, "string");
        assert!(as_list(Some(&json!(3))).is_err());
    }

    #[test]
    fn array_of_non_objects_is_a_shape_error() {
        assert!(as_list(Some(&json!([{"a": 1}, 2]))).is_err());
    }

    #[test]
    fn optional_absent_is_none() {
        assert_eq!(as_optional(None).unwrap(), None);
        assert_eq!(as_optional(Some(&json!(null))).unwrap(), None);
        assert_eq!(as_optional(Some(&json!([]))).unwrap(), None);
    }

    #[test]
    fn optional_object_is_some() {
        let v = json!({"code": "1"});
        let node = as_optional(Some(&v)).unwrap().unwrap();
        assert_eq!(node.get("code"), Some(&json!("1")));
    }

    #[test]
    fn optional_singleton_array_collapses() {
        let v = json!([{"code": "1"}]);
        let node = as_optional(Some(&v)).unwrap().unwrap();
        assert_eq!(node.get("code"), Some(&json!("1")));
    }

    #[test]
    fn optional_rejects_multiplicity() {
        let err = as_optional(Some(&json!([{"a": 1}, {"b": 2}]))).unwrap_err();
        assert_eq!(err.found, "array of 2");
    }

    #[test]
    fn optional_rejects_scalars() {
        assert!(as_optional(Some(&json!("true"))).is_err());
    }
}
