use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::model::api::ErrorEnvelope;

/// Session and league ownership errors.
///
/// Session establishment is delegated to the external identity provider;
/// this service only reads the subject id already stored in the session.
#[derive(Error, Debug)]
pub enum AuthError {
    #[error("No user ID present in session")]
    NotLoggedIn,
    #[error("User {user_id:?} does not own league ID {league_id}")]
    NotLeagueOwner { user_id: String, league_id: i32 },
}

impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        match self {
            Self::NotLoggedIn => {
                tracing::debug!("{}", Self::NotLoggedIn);

                (
                    StatusCode::UNAUTHORIZED,
                    Json(ErrorEnvelope::new("unauthorized", "Not logged in", None)),
                )
                    .into_response()
            }
            Self::NotLeagueOwner { ref user_id, league_id } => {
                tracing::debug!(user_id = %user_id, league_id = %league_id, "{}", self);

                (
                    StatusCode::FORBIDDEN,
                    Json(ErrorEnvelope::new(
                        "forbidden",
                        "You do not have access to this league",
                        None,
                    )),
                )
                    .into_response()
            }
        }
    }
}
