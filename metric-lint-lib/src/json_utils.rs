//! Small helpers for presenting and loading JSON text.

use serde_json::Value;

/// Strip a leading UTF-8 byte-order mark, which editors on Windows like to add.
#[must_use]
pub fn strip_bom(text: &str) -> &str {
    text.strip_prefix('\u{feff}').unwrap_or(text)
}

/// Name of the JSON type of a value, as used in diagnostics.
#[must_use]
pub const fn type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

/// Render a value for a diagnostic message: strings verbatim, anything else as compact JSON.
#[must_use]
pub fn describe(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_strip_bom() {
        assert_eq!(strip_bom("\u{feff}[]"), "[]");
        assert_eq!(strip_bom("[]"), "[]");
    }

    #[test]
    fn test_type_name() {
        assert_eq!(type_name(&json!(null)), "null");
        assert_eq!(type_name(&json!(true)), "boolean");
        assert_eq!(type_name(&json!(1.5)), "number");
        assert_eq!(type_name(&json!("x")), "string");
        assert_eq!(type_name(&json!([])), "array");
        assert_eq!(type_name(&json!({})), "object");
    }

    #[test]
    fn test_describe() {
        assert_eq!(describe(&json!("GreaterThan")), "GreaterThan");
        assert_eq!(describe(&json!(3)), "3");
        assert_eq!(describe(&json!(true)), "true");
        assert_eq!(describe(&json!(null)), "null");
        assert_eq!(describe(&json!({"a": 1})), r#"{"a":1}"#);
    }
}
