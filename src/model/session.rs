use serde::{Deserialize, Serialize};
use tower_sessions::Session;

use crate::error::{auth::AuthError, Error};

pub const SESSION_USER_ID_KEY: &str = "gridiron:user:id";

/// Subject identifier of the logged-in user, as stored in the session by the
/// external identity provider integration.
#[derive(Default, Deserialize, Serialize, Debug)]
pub struct SessionUserId(pub String);

impl SessionUserId {
    /// Insert user ID into session
    pub async fn insert(session: &Session, user_id: &str) -> Result<(), Error> {
        session
            .insert(SESSION_USER_ID_KEY, SessionUserId(user_id.to_string()))
            .await?;

        Ok(())
    }

    /// Get user ID from session
    pub async fn get(session: &Session) -> Result<Option<String>, Error> {
        let user_id = session
            .get::<SessionUserId>(SESSION_USER_ID_KEY)
            .await?
            .map(|SessionUserId(id)| id);

        Ok(user_id)
    }

    /// Get user ID from session, failing with 401 when absent
    pub async fn require(session: &Session) -> Result<String, Error> {
        Self::get(session).await?.ok_or(Error::AuthError(AuthError::NotLoggedIn))
    }
}

#[cfg(test)]
mod tests {
    use gridiron_test_utils::prelude::*;

    use crate::model::session::SessionUserId;

    /// Expect success when inserting a user ID into the session
    #[tokio::test]
    async fn test_insert_session_user_id_success() -> Result<(), TestError> {
        let test = TestSetup::new().await?;

        let result = SessionUserId::insert(&test.session, "auth0|abc123").await;

        assert!(result.is_ok());

        Ok(())
    }

    /// Expect Some when a user ID is present in the session
    #[tokio::test]
    async fn test_get_session_user_id_some() -> Result<(), TestError> {
        let test = TestSetup::new().await?;
        SessionUserId::insert(&test.session, "auth0|abc123")
            .await
            .unwrap();

        let result = SessionUserId::get(&test.session).await;

        assert!(result.is_ok());
        assert_eq!(result.unwrap().as_deref(), Some("auth0|abc123"));

        Ok(())
    }

    /// Expect None when no user ID has been stored
    #[tokio::test]
    async fn test_get_session_user_id_none() -> Result<(), TestError> {
        let test = TestSetup::new().await?;

        let result = SessionUserId::get(&test.session).await;

        assert!(result.is_ok());
        assert!(result.unwrap().is_none());

        Ok(())
    }

    /// Expect a 401-mapped error when requiring a user ID from an empty session
    #[tokio::test]
    async fn test_require_session_user_id_unauthorized() -> Result<(), TestError> {
        let test = TestSetup::new().await?;

        let result = SessionUserId::require(&test.session).await;

        assert!(result.is_err());

        Ok(())
    }
}
