//! Lenient field deserializers for codelab metadata.
//!
//! Metadata files are hand-written, so fields arrive as whatever JSON the author
//! typed. Each deserializer accepts any JSON value and maps "falsy" input (null,
//! empty string, `false`, wrong shape) to "absent" rather than failing the record.

use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// Text field: non-empty strings, numbers and `true` are kept, everything else is absent
pub fn deserialize_text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(scalar_text(&value))
}

/// List field: arrays keep their non-empty scalar elements, a single scalar becomes
/// a one-element list, anything else is empty
pub fn deserialize_string_list<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(match value {
        Value::Array(items) => items.iter().filter_map(scalar_text).collect(),
        other => scalar_text(&other).into_iter().collect(),
    })
}

/// Duration in minutes: non-negative integers, truncated floats and numeric strings;
/// negative or non-numeric values become 0
pub fn deserialize_minutes<'de, D>(deserializer: D) -> Result<u64, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(match value {
        Value::Number(n) => match n.as_u64() {
            Some(minutes) => minutes,
            None => n.as_f64().map(whole_minutes).unwrap_or(0),
        },
        Value::String(s) => s.trim().parse::<f64>().map(whole_minutes).unwrap_or(0),
        _ => 0,
    })
}

fn scalar_text(value: &Value) -> Option<String> {
    match value {
        Value::String(s) if !s.is_empty() => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(true) => Some("true".to_string()),
        _ => None,
    }
}

fn whole_minutes(minutes: f64) -> u64 {
    if minutes.is_finite() && minutes > 0.0 { minutes.trunc() as u64 } else { 0 }
}
