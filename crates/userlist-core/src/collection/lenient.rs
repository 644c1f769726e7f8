//! Tolerant decoders for envelope parts that rendering never reads.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// Decode `T`, falling back to its default when the value has another shape.
pub(super) fn or_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned + Default,
{
    let value = Value::deserialize(deserializer)?;
    Ok(serde_json::from_value(value).unwrap_or_default())
}

/// Decode an array, dropping elements that don't fit `T`. Anything other
/// than an array (including `null`) is empty.
pub(super) fn seq_skipping_invalid<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    match Value::deserialize(deserializer)? {
        Value::Array(values) => Ok(values
            .into_iter()
            .filter_map(|value| serde_json::from_value(value).ok())
            .collect()),
        _ => Ok(Vec::new()),
    }
}

/// Field values as display text. Strings as-is, `null` empty, anything else
/// (numbers, booleans, arrays, objects) as compact JSON.
pub(super) fn value_as_text<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    match Value::deserialize(deserializer)? {
        Value::String(s) => Ok(s),
        Value::Null => Ok(String::new()),
        other => Ok(other.to_string()),
    }
}
