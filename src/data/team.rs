use std::collections::HashMap;

use migration::OnConflict;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter,
    QueryOrder, QuerySelect,
};
use uuid::Uuid;

use crate::data::{missing_conflict_target, BATCH_SIZE};

pub struct TeamRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> TeamRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Upsert teams on (league, external team id).
    ///
    /// Teams are never partition-replaced: a team import updates existing
    /// rows in place (keeping their UUIDs, which player rows reference) and
    /// inserts the rest. Falls back to per-row find-update-or-insert when
    /// the composite unique constraint is missing.
    pub async fn upsert_many(
        &self,
        rows: Vec<entity::team::ActiveModel>,
    ) -> Result<Vec<entity::team::Model>, DbErr> {
        if rows.is_empty() {
            return Ok(Vec::new());
        }

        match self.upsert_on_conflict(&rows).await {
            Ok(models) => Ok(models),
            Err(err) if missing_conflict_target(&err) => {
                tracing::warn!("conflict target missing on team, upserting row by row: {err}");

                self.upsert_row_by_row(rows).await
            }
            Err(err) => Err(err),
        }
    }

    /// All teams for a league, ordered by external id.
    pub async fn get_by_league(
        &self,
        league_id: i32,
    ) -> Result<Vec<entity::team::Model>, DbErr> {
        entity::prelude::Team::find()
            .filter(entity::team::Column::LeagueId.eq(league_id))
            .order_by_asc(entity::team::Column::ExternalTeamId)
            .all(self.db)
            .await
    }

    /// Map external Madden team ids to internal team UUIDs for a league.
    pub async fn external_id_map(&self, league_id: i32) -> Result<HashMap<String, Uuid>, DbErr> {
        let pairs = entity::prelude::Team::find()
            .select_only()
            .column(entity::team::Column::ExternalTeamId)
            .column(entity::team::Column::Id)
            .filter(entity::team::Column::LeagueId.eq(league_id))
            .into_tuple::<(String, Uuid)>()
            .all(self.db)
            .await?;

        Ok(pairs.into_iter().collect())
    }

    async fn upsert_on_conflict(
        &self,
        rows: &[entity::team::ActiveModel],
    ) -> Result<Vec<entity::team::Model>, DbErr> {
        let mut models = Vec::with_capacity(rows.len());
        for batch in rows.chunks(BATCH_SIZE) {
            let inserted = entity::prelude::Team::insert_many(batch.to_vec())
                .on_conflict(
                    OnConflict::columns([
                        entity::team::Column::LeagueId,
                        entity::team::Column::ExternalTeamId,
                    ])
                    .update_columns([
                        entity::team::Column::CityName,
                        entity::team::Column::DisplayName,
                        entity::team::Column::NickName,
                        entity::team::Column::AbbrName,
                        entity::team::Column::DivName,
                        entity::team::Column::ConferenceName,
                        entity::team::Column::OvrRating,
                        entity::team::Column::OffScheme,
                        entity::team::Column::DefScheme,
                        entity::team::Column::PrimaryColor,
                        entity::team::Column::SecondaryColor,
                        entity::team::Column::UserName,
                        entity::team::Column::InjuryCount,
                        entity::team::Column::UpdatedAt,
                    ])
                    .to_owned(),
                )
                .exec_with_returning(self.db)
                .await?;

            models.extend(inserted);
        }

        Ok(models)
    }

    async fn upsert_row_by_row(
        &self,
        rows: Vec<entity::team::ActiveModel>,
    ) -> Result<Vec<entity::team::Model>, DbErr> {
        let mut models = Vec::with_capacity(rows.len());

        for mut row in rows {
            let league_id = row.league_id.clone().take();
            let external_team_id = row.external_team_id.clone().take();
            let (Some(league_id), Some(external_team_id)) = (league_id, external_team_id) else {
                continue;
            };

            let existing = entity::prelude::Team::find()
                .filter(entity::team::Column::LeagueId.eq(league_id))
                .filter(entity::team::Column::ExternalTeamId.eq(external_team_id))
                .one(self.db)
                .await?;

            let model = match existing {
                Some(existing) => {
                    row.id = ActiveValue::Unchanged(existing.id);
                    row.created_at = ActiveValue::Set(existing.created_at);
                    row.update(self.db).await?
                }
                None => row.insert(self.db).await?,
            };

            models.push(model);
        }

        Ok(models)
    }
}

#[cfg(test)]
mod tests {
    use gridiron_test_utils::prelude::*;
    use sea_orm::ActiveValue::Set;

    use super::TeamRepository;

    fn row(league_id: i32, team_id: &str, name: &str) -> entity::team::ActiveModel {
        entity::team::ActiveModel {
            id: Set(uuid::Uuid::new_v4()),
            league_id: Set(league_id),
            external_team_id: Set(team_id.to_string()),
            display_name: Set(Some(name.to_string())),
            created_at: Set(chrono::Utc::now().naive_utc()),
            updated_at: Set(chrono::Utc::now().naive_utc()),
            ..Default::default()
        }
    }

    /// Re-importing teams updates in place, keeping internal UUIDs stable
    #[tokio::test]
    async fn upsert_keeps_uuids_stable() -> Result<(), TestError> {
        let test = TestBuilder::new()
            .with_table(entity::prelude::League)
            .with_table(entity::prelude::Team)
            .build()
            .await?;
        let league = test.insert_league("test-league").await?;

        let repo = TeamRepository::new(&test.db);
        let first = repo
            .upsert_many(vec![row(league.id, "7", "Bears"), row(league.id, "12", "Lions")])
            .await?;
        assert_eq!(first.len(), 2);

        let bears_id = first
            .iter()
            .find(|t| t.external_team_id == "7")
            .unwrap()
            .id;

        let second = repo
            .upsert_many(vec![row(league.id, "7", "Chicago Bears")])
            .await?;
        assert_eq!(second.len(), 1);

        let stored = repo.get_by_league(league.id).await?;
        assert_eq!(stored.len(), 2);

        let bears = stored.iter().find(|t| t.external_team_id == "7").unwrap();
        assert_eq!(bears.id, bears_id);
        assert_eq!(bears.display_name.as_deref(), Some("Chicago Bears"));

        Ok(())
    }

    /// The external-to-internal id map covers every team in the league
    #[tokio::test]
    async fn external_id_map_resolves_teams() -> Result<(), TestError> {
        let test = TestBuilder::new()
            .with_table(entity::prelude::League)
            .with_table(entity::prelude::Team)
            .build()
            .await?;
        let league = test.insert_league("test-league").await?;

        let repo = TeamRepository::new(&test.db);
        let created = repo
            .upsert_many(vec![row(league.id, "7", "Bears"), row(league.id, "12", "Lions")])
            .await?;

        let map = repo.external_id_map(league.id).await?;

        assert_eq!(map.len(), 2);
        for team in created {
            assert_eq!(map.get(&team.external_team_id), Some(&team.id));
        }
        assert!(map.get("99").is_none());

        Ok(())
    }

    /// Empty input inserts nothing and returns an empty Vec
    #[tokio::test]
    async fn handles_empty_input() -> Result<(), TestError> {
        let test = TestBuilder::new()
            .with_table(entity::prelude::League)
            .with_table(entity::prelude::Team)
            .build()
            .await?;

        let repo = TeamRepository::new(&test.db);
        let result = repo.upsert_many(vec![]).await?;

        assert!(result.is_empty());

        Ok(())
    }
}
