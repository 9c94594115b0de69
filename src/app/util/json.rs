use serde::{de::DeserializeOwned, Deserialize, Deserializer};
use serde_json::Value;

/// Deserializes an optional field, treating a value of the wrong JSON type
/// the same as an absent one so that validation reports it by field name.
pub fn typed_or_none<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    let value = Option::<Value>::deserialize(deserializer)?;

    Ok(value.and_then(|v| serde_json::from_value(v).ok()))
}
