use serde_json::Value;

/// Whether a field value counts as filled in.
///
/// `null`, `false`, zero and the empty string are treated as missing; arrays and
/// objects are always present.
pub fn is_present(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().map_or(true, |f| f != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

/// Text of a present field; `None` when the value is missing.
pub fn field_text(value: Option<&Value>) -> Option<String> {
    let value = value.filter(|v| is_present(v))?;
    Some(match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    })
}
