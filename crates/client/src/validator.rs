//! Schema-presence checks and safe accessors over backend responses.
//!
//! Responsibilities:
//! - Decide whether a response carries the fields of a given resource type.
//! - Read single and nested fields without ever failing on a missing key.
//!
//! Invariants:
//! - An explicit JSON `null` is treated exactly like a missing key.
//! - Non-object intermediates short-circuit to the default.
//! - No function here panics or returns an error; a missing field is a
//!   display concern, handled by substituting the caller's default.

use serde_json::Value;

static MISSING: Value = Value::Null;

/// True iff every name in `required` is a direct key of `response`.
///
/// A non-object response only satisfies an empty requirement list.
pub fn has_required_fields(response: &Value, required: &[&str]) -> bool {
    match response.as_object() {
        Some(map) => required.iter().all(|field| map.contains_key(*field)),
        None => required.is_empty(),
    }
}

/// Value at `key`, or `default` when the key is absent or null.
pub fn safe_get<'a>(response: &'a Value, key: &str, default: &'a Value) -> &'a Value {
    match response.get(key) {
        None | Some(Value::Null) => default,
        Some(value) => value,
    }
}

/// Walk `path` through nested objects, returning `default` at the first
/// missing key, null value, or non-object intermediate.
///
/// An empty path returns `response` itself (or `default` if it is null).
pub fn safe_get_nested<'a>(response: &'a Value, path: &[&str], default: &'a Value) -> &'a Value {
    let mut current = response;
    for key in path {
        current = match current.as_object().and_then(|map| map.get(*key)) {
            None | Some(Value::Null) => return default,
            Some(value) => value,
        };
    }
    if current.is_null() { default } else { current }
}

/// Nested numeric field, accepting numbers and numeric strings.
pub fn nested_f64(response: &Value, path: &[&str], default: f64) -> f64 {
    match safe_get_nested(response, path, &MISSING) {
        Value::Number(n) => n.as_f64().unwrap_or(default),
        Value::String(s) => s.trim().parse().unwrap_or(default),
        _ => default,
    }
}

/// Nested string field.
pub fn nested_str<'a>(response: &'a Value, path: &[&str], default: &'a str) -> &'a str {
    match safe_get_nested(response, path, &MISSING) {
        Value::String(s) => s.as_str(),
        _ => default,
    }
}

/// Nested array field; anything else yields an empty slice.
pub fn nested_array<'a>(response: &'a Value, path: &[&str]) -> &'a [Value] {
    match safe_get_nested(response, path, &MISSING) {
        Value::Array(items) => items.as_slice(),
        _ => &[],
    }
}
