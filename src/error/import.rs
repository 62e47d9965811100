use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::model::api::ErrorEnvelope;

/// Errors raised while normalizing, validating, or addressing an import.
#[derive(Error, Debug)]
pub enum ImportError {
    /// No league matched the slug or import key in the URL.
    #[error("League not found: {0}")]
    LeagueNotFound(String),
    /// The body was structurally invalid (wrong type, non-array list, bad record).
    #[error("Request body failed validation: {0}")]
    InvalidPayload(String),
    /// Neither the named list key nor a bare array was present in the body.
    #[error("Expected a `{0}` array or a bare JSON array in the request body")]
    MissingList(&'static str),
    /// An empty list where the importer needs the first record for week/season context.
    #[error("No data provided")]
    NoData,
    /// The `{category}` route segment did not name a known stat category.
    #[error("Unknown stat category: {0}")]
    UnknownCategory(String),
    /// The `{platform}` route segment did not name a known console platform.
    #[error("Unknown platform: {0}")]
    UnknownPlatform(String),
    /// The `{week}` route segment does not fit the week partition column.
    #[error("Week number out of range: {0}")]
    InvalidWeek(u32),
}

impl IntoResponse for ImportError {
    fn into_response(self) -> Response {
        match self {
            Self::LeagueNotFound(_) => {
                tracing::debug!("{}", self);

                (
                    StatusCode::NOT_FOUND,
                    Json(ErrorEnvelope::new("not_found", "League not found", None)),
                )
                    .into_response()
            }
            Self::InvalidPayload(ref detail) => {
                tracing::debug!("{}", self);

                let details = Some(serde_json::Value::String(detail.clone()));
                (
                    StatusCode::BAD_REQUEST,
                    Json(ErrorEnvelope::new(
                        "validation_error",
                        "Request body failed validation",
                        details,
                    )),
                )
                    .into_response()
            }
            err => {
                tracing::debug!("{}", err);

                (
                    StatusCode::BAD_REQUEST,
                    Json(ErrorEnvelope::new("validation_error", &err.to_string(), None)),
                )
                    .into_response()
            }
        }
    }
}
