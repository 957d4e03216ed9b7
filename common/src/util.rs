use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// Accepts a JSON string or number and keeps its text. `null`, booleans,
/// arrays and objects are treated as no value instead of failing the whole
/// document.
pub fn deserialize_lenient_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(match value {
        Some(Value::String(s)) => Some(s),
        Some(Value::Number(n)) => Some(n.to_string()),
        _ => None,
    })
}

/// A field is missing when it is absent, null or the empty string. `"0"` is a value.
pub fn is_missing(value: Option<&str>) -> bool {
    value.map_or(true, str::is_empty)
}
