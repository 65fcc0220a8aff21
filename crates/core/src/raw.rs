//! Raw wire payloads and attribute-marker key lookup.
//!
//! The service's XML-to-JSON conversion prefixes attribute-origin keys
//! with `@`, so the same field can arrive as `title` or `@title`
//! depending on which converter produced the document. All key access
//! goes through [`lookup`] so the precedence rule lives in one place.

use serde_json::Value;

/// An untyped wire payload node: the JSON object for one element of the
/// response, exactly as the service sent it.
pub type RawNode = serde_json::Map<String, Value>;

/// Looks up `field` in a raw node, bare key first, `@`-marked key second.
/// A JSON `null` under either spelling counts as absent.
pub fn lookup<'a>(raw: &'a RawNode, field: &str) -> Option<&'a Value> {
    if let Some(v) = raw.get(field) {
        if !v.is_null() {
            return Some(v);
        }
    }
    let marked = format!("@{}", field);
    match raw.get(&marked) {
        Some(v) if !v.is_null() => Some(v),
        _ => None,
    }
}

/// Returns a short type name for a raw value, for error messages.
pub fn type_name(v: &Value) -> &'static str {
    match v {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn node(v: Value) -> RawNode {
        v.as_object().unwrap().clone()
    }

    #[test]
    fn lookup_bare_key() {
        let raw = node(json!({"title": "Result"}));
        assert_eq!(lookup(&raw, "title"), Some(&json!("Result")));
    }

    #[test]
    fn lookup_marked_key() {
        let raw = node(json!({"@title": "Result"}));
        assert_eq!(lookup(&raw, "title"), Some(&json!("Result")));
    }

    #[test]
    fn bare_key_wins_over_marked() {
        let raw = node(json!({"title": "bare", "@title": "marked"}));
        assert_eq!(lookup(&raw, "title"), Some(&json!("bare")));
    }

    #[test]
    fn null_counts_as_absent() {
        let raw = node(json!({"title": null}));
        assert_eq!(lookup(&raw, "title"), None);
    }

    #[test]
    fn null_bare_key_falls_through_to_marked() {
        let raw = node(json!({"title": null, "@title": "marked"}));
        assert_eq!(lookup(&raw, "title"), Some(&json!("marked")));
    }

    #[test]
    fn missing_key_is_absent() {
        let raw = node(json!({"other": 1}));
        assert_eq!(lookup(&raw, "title"), None);
    }

    #[test]
    fn type_names() {
        assert_eq!(type_name(&json!(null)), "null");
        assert_eq!(type_name(&json!(true)), "boolean");
        assert_eq!(type_name(&json!(3)), "number");
        assert_eq!(type_name(&json!("x")), "string");
        assert_eq!(type_name(&json!([])), "array");
        assert_eq!(type_name(&json!({})), "object");
    }
}
