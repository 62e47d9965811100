use chrono::Utc;
use entity::league::Platform;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter,
    QueryOrder,
};

pub struct LeagueRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> LeagueRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    pub async fn create(
        &self,
        user_id: &str,
        name: &str,
        slug: &str,
        platform: Platform,
    ) -> Result<entity::league::Model, DbErr> {
        let league = entity::league::ActiveModel {
            user_id: ActiveValue::Set(user_id.to_string()),
            name: ActiveValue::Set(name.to_string()),
            slug: ActiveValue::Set(slug.to_string()),
            platform: ActiveValue::Set(platform),
            created_at: ActiveValue::Set(Utc::now().naive_utc()),
            updated_at: ActiveValue::Set(Utc::now().naive_utc()),
            ..Default::default()
        };

        league.insert(self.db).await
    }

    pub async fn get_by_slug(&self, slug: &str) -> Result<Option<entity::league::Model>, DbErr> {
        entity::prelude::League::find()
            .filter(entity::league::Column::Slug.eq(slug))
            .one(self.db)
            .await
    }

    /// Resolve a league by the roster-import URL key: owner, platform, and
    /// the Madden league id the companion app reports.
    pub async fn get_by_import_key(
        &self,
        user_id: &str,
        platform: Platform,
        external_league_id: &str,
    ) -> Result<Option<entity::league::Model>, DbErr> {
        entity::prelude::League::find()
            .filter(entity::league::Column::UserId.eq(user_id))
            .filter(entity::league::Column::Platform.eq(platform))
            .filter(entity::league::Column::ExternalLeagueId.eq(external_league_id))
            .one(self.db)
            .await
    }

    pub async fn get_by_user(&self, user_id: &str) -> Result<Vec<entity::league::Model>, DbErr> {
        entity::prelude::League::find()
            .filter(entity::league::Column::UserId.eq(user_id))
            .order_by_asc(entity::league::Column::Name)
            .all(self.db)
            .await
    }

    pub async fn slug_exists(&self, slug: &str) -> Result<bool, DbErr> {
        Ok(self.get_by_slug(slug).await?.is_some())
    }

    /// Record a successful import: bump `last_import_at` and store the
    /// external league id seen in the import URL when one was supplied.
    pub async fn touch_import(
        &self,
        league_id: i32,
        external_league_id: Option<String>,
    ) -> Result<entity::league::Model, DbErr> {
        let mut league = entity::league::ActiveModel {
            id: ActiveValue::Unchanged(league_id),
            last_import_at: ActiveValue::Set(Some(Utc::now().naive_utc())),
            updated_at: ActiveValue::Set(Utc::now().naive_utc()),
            ..Default::default()
        };

        if let Some(external_id) = external_league_id {
            league.external_league_id = ActiveValue::Set(Some(external_id));
        }

        league.update(self.db).await
    }

    /// Delete a league; dependent rows cascade via foreign keys.
    pub async fn delete(&self, league_id: i32) -> Result<(), DbErr> {
        entity::prelude::League::delete_by_id(league_id)
            .exec(self.db)
            .await?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use entity::league::Platform;
    use gridiron_test_utils::prelude::*;

    use super::LeagueRepository;

    /// Leagues resolve by slug and by the roster-import key
    #[tokio::test]
    async fn resolves_by_slug_and_import_key() -> Result<(), TestError> {
        let test = TestBuilder::new()
            .with_table(entity::prelude::League)
            .build()
            .await?;

        let repo = LeagueRepository::new(&test.db);
        let created = repo
            .create("auth0|abc123", "My Franchise", "my-franchise", Platform::Xbox)
            .await?;

        let by_slug = repo.get_by_slug("my-franchise").await?;
        assert_eq!(by_slug.map(|l| l.id), Some(created.id));

        // No external league id recorded yet
        let by_key = repo
            .get_by_import_key("auth0|abc123", Platform::Xbox, "12345")
            .await?;
        assert!(by_key.is_none());

        repo.touch_import(created.id, Some("12345".to_string())).await?;

        let by_key = repo
            .get_by_import_key("auth0|abc123", Platform::Xbox, "12345")
            .await?;
        assert_eq!(by_key.map(|l| l.id), Some(created.id));

        Ok(())
    }

    /// touch_import sets last_import_at and keeps the external id when the
    /// URL carries none
    #[tokio::test]
    async fn touch_import_updates_timestamp() -> Result<(), TestError> {
        let test = TestBuilder::new()
            .with_table(entity::prelude::League)
            .build()
            .await?;

        let repo = LeagueRepository::new(&test.db);
        let created = repo
            .create("auth0|abc123", "My Franchise", "my-franchise", Platform::Playstation)
            .await?;
        assert!(created.last_import_at.is_none());

        repo.touch_import(created.id, Some("999".to_string())).await?;
        let touched = repo.touch_import(created.id, None).await?;

        assert!(touched.last_import_at.is_some());
        assert_eq!(touched.external_league_id.as_deref(), Some("999"));

        Ok(())
    }

    /// Listing by user only returns that user's leagues
    #[tokio::test]
    async fn lists_by_user() -> Result<(), TestError> {
        let test = TestBuilder::new()
            .with_table(entity::prelude::League)
            .build()
            .await?;

        let repo = LeagueRepository::new(&test.db);
        repo.create("auth0|abc123", "Mine", "mine", Platform::Xbox).await?;
        repo.create("auth0|other", "Theirs", "theirs", Platform::Xbox).await?;

        let mine = repo.get_by_user("auth0|abc123").await?;

        assert_eq!(mine.len(), 1);
        assert_eq!(mine[0].slug, "mine");

        Ok(())
    }
}
