//! Records exchanged with the asset API.

pub mod asset;
pub mod category;
pub mod user;

use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// Accepts any JSON scalar and keeps it as text.
///
/// The API stores field values as JSON and numeric user ids as integers;
/// the views only ever deal in strings.
pub(crate) fn scalar_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::Null => String::new(),
        Value::String(s) => s,
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => n.to_string(),
        other => other.to_string(),
    })
}
