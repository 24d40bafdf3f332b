use serde::de::Error;
use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// Custom deserializer for record ids that accepts any JSON scalar
///
/// Strings are kept as-is; numbers and booleans are stored in their JSON text form.
pub fn deserialize_record_id<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    match value {
        Value::String(s) => Ok(s),
        Value::Number(n) => Ok(n.to_string()),
        Value::Bool(b) => Ok(b.to_string()),
        Value::Null => Err(Error::custom("id cannot be null")),
        _ => Err(Error::custom("id must be a string, number or boolean")),
    }
}
