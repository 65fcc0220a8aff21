//! Primitive coercers for the service's mixed scalar encodings.
//!
//! Numbers and booleans normally arrive as strings ("42", "true"); some
//! converters emit native JSON scalars for the same fields. Each coercer
//! accepts both. The `wire_*` inverses re-emit values in the string
//! encoding so reconstructed payloads look like the service's own.

use crate::error::CoercionError;
use crate::raw;
use serde_json::Value;

fn render(v: &Value) -> String {
    match v {
        Value::Array(_) | Value::Object(_) => raw::type_name(v).to_string(),
        _ => v.to_string(),
    }
}

fn fail(expected: &'static str, v: &Value) -> CoercionError {
    CoercionError {
        expected,
        found: render(v),
    }
}

// ──────────────────────────────────────────────
// Forward coercers
// ──────────────────────────────────────────────

/// Reads a plain string field.
pub fn string(v: &Value) -> Result<String, CoercionError> {
    match v {
        Value::String(s) => Ok(s.clone()),
        _ => Err(fail("string", v)),
    }
}

/// Reads an integer from an int-looking string or a native JSON integer.
pub fn int(v: &Value) -> Result<i64, CoercionError> {
    match v {
        Value::Number(n) => n.as_i64().ok_or_else(|| fail("integer", v)),
        Value::String(s) => s.trim().parse::<i64>().map_err(|_| fail("integer", v)),
        _ => Err(fail("integer", v)),
    }
}

/// Reads a float from a numeric string or any native JSON number.
pub fn float(v: &Value) -> Result<f64, CoercionError> {
    match v {
        Value::Number(n) => n.as_f64().ok_or_else(|| fail("float", v)),
        Value::String(s) => s.trim().parse::<f64>().map_err(|_| fail("float", v)),
        _ => Err(fail("float", v)),
    }
}

/// Reads a boolean from the literal strings "true"/"false". The parse is
/// lexical; no other spelling is accepted. Native JSON booleans also
/// occur in the wild and pass through.
pub fn boolean(v: &Value) -> Result<bool, CoercionError> {
    match v {
        Value::Bool(b) => Ok(*b),
        Value::String(s) if s == "true" => Ok(true),
        Value::String(s) if s == "false" => Ok(false),
        _ => Err(fail("boolean", v)),
    }
}

/// Reads a comma-separated integer list ("1,2,16"). The empty string is
/// an empty list. A native JSON array of integers is accepted as well.
pub fn int_list(v: &Value) -> Result<Vec<i64>, CoercionError> {
    match v {
        Value::String(s) if s.is_empty() => Ok(Vec::new()),
        Value::String(s) => s
            .split(',')
            .map(|part| part.trim().parse::<i64>().map_err(|_| fail("integer list", v)))
            .collect(),
        Value::Array(items) => items.iter().map(int).collect(),
        _ => Err(fail("integer list", v)),
    }
}

// ──────────────────────────────────────────────
// Wire-encoding inverses
// ──────────────────────────────────────────────

/// Re-emits an integer in its wire encoding.
pub fn wire_int(n: i64) -> Value {
    Value::String(n.to_string())
}

/// Re-emits a float in its wire encoding.
pub fn wire_float(x: f64) -> Value {
    Value::String(x.to_string())
}

/// Re-emits a boolean as the literal string "true"/"false".
pub fn wire_bool(b: bool) -> Value {
    Value::String(if b { "true" } else { "false" }.to_string())
}

/// Re-emits an integer list as a comma-joined string.
pub fn wire_int_list(items: &[i64]) -> Value {
    let joined = items
        .iter()
        .map(|n| n.to_string())
        .collect::<Vec<_>>()
        .join(",");
    Value::String(joined)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn int_from_string_and_native() {
        assert_eq!(int(&json!("42")).unwrap(), 42);
        assert_eq!(int(&json!(" 42 ")).unwrap(), 42);
        assert_eq!(int(&json!(42)).unwrap(), 42);
        assert_eq!(int(&json!(-3)).unwrap(), -3);
    }

    #[test]
    fn int_rejects_garbage() {
        let err = int(&json!("many")).unwrap_err();
        assert_eq!(err.expected, "integer");
        assert_eq!(err.found, "\"many\"");
        assert!(int(&json!(1.5)).is_err());
        assert!(int(&json!(true)).is_err());
    }

    #[test]
    fn float_from_string_and_native() {
        assert_eq!(float(&json!("1.292")).unwrap(), 1.292);
        assert_eq!(float(&json!("3")).unwrap(), 3.0);
        assert_eq!(float(&json!(1.292)).unwrap(), 1.292);
    }

    #[test]
    fn float_rejects_garbage() {
        assert!(float(&json!("fast")).is_err());
        assert!(float(&json!([])).is_err());
    }

    #[test]
    fn boolean_is_lexical() {
        assert_eq!(boolean(&json!("true")).unwrap(), true);
        assert_eq!(boolean(&json!("false")).unwrap(), false);
        assert_eq!(boolean(&json!(true)).unwrap(), true);
        assert!(boolean(&json!("True")).is_err());
        assert!(boolean(&json!("1")).is_err());
        assert!(boolean(&json!(1)).is_err());
    }

    #[test]
    fn int_list_from_comma_string() {
        assert_eq!(int_list(&json!("1,2,16")).unwrap(), vec![1, 2, 16]);
        assert_eq!(int_list(&json!("1, 2, 16")).unwrap(), vec![1, 2, 16]);
        assert_eq!(int_list(&json!("7")).unwrap(), vec![7]);
    }

    #[test]
    fn int_list_empty_string_is_empty() {
        assert_eq!(int_list(&json!("")).unwrap(), Vec::<i64>::new());
    }

    #[test]
    fn int_list_from_native_array() {
        assert_eq!(int_list(&json!([1, 2, 16])).unwrap(), vec![1, 2, 16]);
    }

    #[test]
    fn int_list_rejects_garbage() {
        assert!(int_list(&json!("1,x,3")).is_err());
        assert!(int_list(&json!(12)).is_err());
    }

    #[test]
    fn string_rejects_non_strings() {
        assert_eq!(string(&json!("pi")).unwrap(), "pi");
        assert!(string(&json!(3)).is_err());
    }

    #[test]
    fn wire_inverses_round_trip() {
        assert_eq!(int(&wire_int(42)).unwrap(), 42);
        assert_eq!(float(&wire_float(1.292)).unwrap(), 1.292);
        assert_eq!(boolean(&wire_bool(true)).unwrap(), true);
        assert_eq!(boolean(&wire_bool(false)).unwrap(), false);
        assert_eq!(int_list(&wire_int_list(&[1, 2, 16])).unwrap(), vec![1, 2, 16]);
        assert_eq!(wire_int_list(&[]), json!(""));
    }
}
