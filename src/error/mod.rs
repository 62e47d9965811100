//! Error types for the Gridiron server.
//!
//! A single root [`Error`] aggregates the domain error enums (auth, config,
//! import) and external library errors, and maps everything to the JSON
//! error envelope the companion app and dashboard expect. Domain enums carry
//! their own `IntoResponse` so each module owns its HTTP mapping.

pub mod auth;
pub mod config;
pub mod import;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::{
    error::{auth::AuthError, config::ConfigError, import::ImportError},
    model::api::ErrorEnvelope,
};

/// Main error type for the Gridiron server.
#[derive(Error, Debug)]
pub enum Error {
    /// Configuration error (missing or invalid environment variables).
    #[error(transparent)]
    ConfigError(#[from] ConfigError),
    /// Session or league ownership error.
    #[error(transparent)]
    AuthError(#[from] AuthError),
    /// Import payload or addressing error.
    #[error(transparent)]
    ImportError(#[from] ImportError),
    /// Failed to parse a value from a string or other format.
    #[error("Failed to parse value: {0:?}")]
    ParseError(String),
    /// Database error (query failures, connection issues, constraint violations).
    #[error(transparent)]
    DbErr(#[from] sea_orm::DbErr),
    /// Session store error (retrieval, storage, serialization).
    #[error(transparent)]
    SessionError(#[from] tower_sessions::session::Error),
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        match self {
            Self::ConfigError(err) => err.into_response(),
            Self::AuthError(err) => err.into_response(),
            Self::ImportError(err) => err.into_response(),
            err => InternalServerError(err).into_response(),
        }
    }
}

/// Wrapper converting any displayable error into a 500 response.
///
/// The full error is logged server-side; the client only ever sees a generic
/// message so no internal detail leaks through the envelope.
pub struct InternalServerError<E>(pub E);

impl<E: std::fmt::Display> IntoResponse for InternalServerError<E> {
    fn into_response(self) -> Response {
        tracing::error!("{}", self.0);

        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorEnvelope::new("internal_error", "Internal server error", None)),
        )
            .into_response()
    }
}
