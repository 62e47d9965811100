//! Lenient field deserializers for companion-app exports.
//!
//! The export format is unreliable about scalar types: numeric fields arrive
//! as numbers or numeric strings depending on game version, and booleans
//! sometimes arrive as 0/1. Per the import contract, a field whose value
//! cannot be coerced is `None` — a record is never rejected over a single
//! field. Structural errors (a record that is not an object, a list that is
//! not an array) are still surfaced by the payload layer.

use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// Number, numeric string, or null → `Option<i32>`.
pub fn opt_i32<'de, D: Deserializer<'de>>(d: D) -> Result<Option<i32>, D::Error> {
    Ok(opt_i64(d)?.and_then(|v| i32::try_from(v).ok()))
}

/// Number, numeric string, or null → `Option<i64>`.
pub fn opt_i64<'de, D: Deserializer<'de>>(d: D) -> Result<Option<i64>, D::Error> {
    let value = Option::<Value>::deserialize(d)?;

    Ok(value.and_then(|v| match v {
        Value::Number(n) => n.as_i64().or_else(|| n.as_f64().map(|f| f as i64)),
        Value::String(s) => s.trim().parse::<i64>().ok(),
        _ => None,
    }))
}

/// Number, numeric string, or null → `Option<f32>`.
pub fn opt_f32<'de, D: Deserializer<'de>>(d: D) -> Result<Option<f32>, D::Error> {
    let value = Option::<Value>::deserialize(d)?;

    Ok(value.and_then(|v| match v {
        Value::Number(n) => n.as_f64().map(|f| f as f32),
        Value::String(s) => s.trim().parse::<f32>().ok(),
        _ => None,
    }))
}

/// Bool, 0/1, "true"/"false", or null → `Option<bool>`.
pub fn opt_bool<'de, D: Deserializer<'de>>(d: D) -> Result<Option<bool>, D::Error> {
    let value = Option::<Value>::deserialize(d)?;

    Ok(value.and_then(|v| match v {
        Value::Bool(b) => Some(b),
        Value::Number(n) => n.as_i64().map(|i| i != 0),
        Value::String(s) => match s.trim() {
            "true" | "1" => Some(true),
            "false" | "0" => Some(false),
            _ => None,
        },
        _ => None,
    }))
}

/// String or number (stringified), or null → `Option<String>`.
///
/// Identifier fields (team id, roster id, stat id) use this: the game emits
/// small integers but the schema stores them as strings.
pub fn opt_string<'de, D: Deserializer<'de>>(d: D) -> Result<Option<String>, D::Error> {
    let value = Option::<Value>::deserialize(d)?;

    Ok(value.and_then(|v| match v {
        Value::String(s) => Some(s),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }))
}

#[cfg(test)]
mod tests {
    use serde::Deserialize;

    #[derive(Deserialize, Default, Debug)]
    #[serde(default)]
    struct Probe {
        #[serde(deserialize_with = "super::opt_i32")]
        int: Option<i32>,
        #[serde(deserialize_with = "super::opt_f32")]
        float: Option<f32>,
        #[serde(deserialize_with = "super::opt_bool")]
        flag: Option<bool>,
        #[serde(deserialize_with = "super::opt_string")]
        id: Option<String>,
    }

    /// Numeric strings coerce to numbers, numbers stringify for id fields
    #[test]
    fn coerces_numeric_strings_and_stringifies_numbers() {
        let probe: Probe = serde_json::from_str(
            r#"{ "int": "42", "float": "99.3", "flag": 1, "id": 7 }"#,
        )
        .unwrap();

        assert_eq!(probe.int, Some(42));
        assert_eq!(probe.float, Some(99.3));
        assert_eq!(probe.flag, Some(true));
        assert_eq!(probe.id.as_deref(), Some("7"));
    }

    /// Missing, null, and non-matching values all land as None
    #[test]
    fn mismatched_values_become_none() {
        let probe: Probe = serde_json::from_str(
            r#"{ "int": null, "float": [1], "flag": "maybe", "id": {"x": 1} }"#,
        )
        .unwrap();

        assert_eq!(probe.int, None);
        assert_eq!(probe.float, None);
        assert_eq!(probe.flag, None);
        assert_eq!(probe.id, None);

        let probe: Probe = serde_json::from_str("{}").unwrap();
        assert_eq!(probe.int, None);
    }
}
