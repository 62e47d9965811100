//! Import body shape normalization.
//!
//! The companion app is inconsistent about body shape: most builds send
//! `{ "<name>List": [...] }`, some send the bare array. Both are accepted,
//! normalized here once instead of duck-typed per handler.

use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::error::import::ImportError;

/// Pull the record array out of an import body.
///
/// Accepts `{ "<key>": [...] }` and bare `[...]` bodies. An object without
/// the named key, or a named key holding a non-array, is a validation error.
pub fn take_list(body: Value, key: &'static str) -> Result<Vec<Value>, ImportError> {
    match body {
        Value::Array(items) => Ok(items),
        Value::Object(mut map) => match map.remove(key) {
            Some(Value::Array(items)) => Ok(items),
            Some(_) => Err(ImportError::InvalidPayload(format!(
                "`{key}` is not an array"
            ))),
            None => Err(ImportError::MissingList(key)),
        },
        _ => Err(ImportError::MissingList(key)),
    }
}

/// Normalize the body shape and validate every record in the list.
///
/// Record validation is serde-driven: unknown fields are ignored, optional
/// fields default to `None`, and scalar coercion is handled by the
/// deserializers in [`crate::import::de`]. A record that is not an object at
/// all fails with its index in the error detail.
pub fn parse_records<T: DeserializeOwned>(
    body: Value,
    key: &'static str,
) -> Result<Vec<T>, ImportError> {
    take_list(body, key)?
        .into_iter()
        .enumerate()
        .map(|(index, item)| {
            serde_json::from_value(item)
                .map_err(|err| ImportError::InvalidPayload(format!("record {index}: {err}")))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::take_list;
    use crate::error::import::ImportError;

    /// Wrapped and bare bodies both normalize to the same list
    #[test]
    fn accepts_wrapped_and_bare_shapes() {
        let wrapped = json!({ "leagueTeamInfoList": [{ "teamId": 1 }] });
        let bare = json!([{ "teamId": 1 }]);

        assert_eq!(take_list(wrapped, "leagueTeamInfoList").unwrap().len(), 1);
        assert_eq!(take_list(bare, "leagueTeamInfoList").unwrap().len(), 1);
    }

    /// An empty array is a valid shape (zero records)
    #[test]
    fn accepts_empty_list() {
        let body = json!({ "leagueTeamInfoList": [] });

        assert!(take_list(body, "leagueTeamInfoList").unwrap().is_empty());
    }

    /// Object without the named key and non-array values are rejected
    #[test]
    fn rejects_malformed_shapes() {
        let missing = json!({ "somethingElse": [] });
        let not_array = json!({ "leagueTeamInfoList": "nope" });
        let scalar = json!(42);

        assert!(matches!(
            take_list(missing, "leagueTeamInfoList"),
            Err(ImportError::MissingList(_))
        ));
        assert!(matches!(
            take_list(not_array, "leagueTeamInfoList"),
            Err(ImportError::InvalidPayload(_))
        ));
        assert!(matches!(
            take_list(scalar, "leagueTeamInfoList"),
            Err(ImportError::MissingList(_))
        ));
    }
}
