//! Database fixtures shared across test suites.

use chrono::Utc;
use entity::league::Platform;
use sea_orm::{ActiveModelTrait, ActiveValue};

use crate::{constant::TEST_USER_ID, error::TestError, setup::TestSetup};

impl TestSetup {
    /// Insert a league owned by the default test user.
    ///
    /// The league name is derived from the slug; no Madden league id is
    /// recorded, matching a league fresh from the create endpoint.
    pub async fn insert_league(&self, slug: &str) -> Result<entity::league::Model, TestError> {
        let league = entity::league::ActiveModel {
            user_id: ActiveValue::Set(TEST_USER_ID.to_string()),
            name: ActiveValue::Set(slug.replace('-', " ")),
            slug: ActiveValue::Set(slug.to_string()),
            platform: ActiveValue::Set(Platform::Xbox),
            created_at: ActiveValue::Set(Utc::now().naive_utc()),
            updated_at: ActiveValue::Set(Utc::now().naive_utc()),
            ..Default::default()
        };

        Ok(league.insert(&self.db).await?)
    }
}
