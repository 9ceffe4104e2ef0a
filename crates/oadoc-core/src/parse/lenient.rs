//! Deserializers for optional document fields that fall back to their default
//! instead of rejecting the whole document when the value has the wrong shape.

use indexmap::IndexMap;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// Deserialize `T`, or `T::default()` if the value does not fit.
pub(crate) fn or_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned + Default,
{
    let value = Value::deserialize(deserializer)?;
    Ok(T::deserialize(value).unwrap_or_default())
}

/// Deserialize a sequence, dropping the elements that do not fit.
pub(crate) fn filtered_vec<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    let value = Value::deserialize(deserializer)?;
    let Value::Array(items) = value else {
        return Ok(Vec::new());
    };
    Ok(items
        .into_iter()
        .filter_map(|item| T::deserialize(item).ok())
        .collect())
}

/// Deserialize a mapping whose values fall back to `T::default()`.
/// The mapping itself must be an object.
pub(crate) fn values_or_default<'de, D, T>(deserializer: D) -> Result<IndexMap<String, T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned + Default,
{
    let map = IndexMap::<String, Value>::deserialize(deserializer)?;
    Ok(map
        .into_iter()
        .map(|(key, value)| (key, T::deserialize(value).unwrap_or_default()))
        .collect())
}

/// Deserialize a mapping, dropping the entries that do not fit. Anything other
/// than an object yields an empty mapping.
pub(crate) fn filtered_map<'de, D, T>(deserializer: D) -> Result<IndexMap<String, T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    let value = Value::deserialize(deserializer)?;
    let Value::Object(entries) = value else {
        return Ok(IndexMap::new());
    };
    Ok(entries
        .into_iter()
        .filter_map(|(key, value)| T::deserialize(value).ok().map(|v| (key, v)))
        .collect())
}

/// Accept a string, or a number/bool rendered as a string (YAML `openapi: 3.1`).
pub(crate) fn stringly<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    match Value::deserialize(deserializer)? {
        Value::String(s) => Ok(s),
        Value::Number(n) => Ok(n.to_string()),
        Value::Bool(b) => Ok(b.to_string()),
        other => Err(serde::de::Error::custom(format!(
            "expected a string, found {other}"
        ))),
    }
}

/// Like [`stringly`], with an empty string for anything else.
pub(crate) fn stringly_or_default<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(stringly(deserializer).unwrap_or_default())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[derive(Debug, Deserialize)]
    struct Holder {
        #[serde(default, deserialize_with = "or_default")]
        tags: Vec<String>,
        #[serde(default, deserialize_with = "filtered_vec")]
        numbers: Vec<u32>,
        #[serde(deserialize_with = "stringly")]
        version: String,
    }

    #[test]
    fn test_wrong_shape_falls_back() {
        let h: Holder =
            serde_json::from_value(json!({"tags": "pets", "numbers": 3, "version": "3.0.0"}))
                .unwrap();
        assert!(h.tags.is_empty());
        assert!(h.numbers.is_empty());
        assert_eq!(h.version, "3.0.0");
    }

    #[test]
    fn test_bad_elements_are_dropped() {
        let h: Holder =
            serde_json::from_value(json!({"numbers": [1, "two", 3], "version": 3.1})).unwrap();
        assert_eq!(h.numbers, vec![1, 3]);
        assert_eq!(h.version, "3.1");
    }

    #[test]
    fn test_stringly_rejects_objects() {
        let result = serde_json::from_value::<Holder>(json!({"version": {"x": 1}}));
        assert!(result.is_err());
    }
}
