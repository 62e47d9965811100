use migration::OnConflict;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter, QueryOrder,
    Value,
};

use crate::data::{missing_conflict_target, BATCH_SIZE};
use crate::import::week::WeekContext;

/// Schedule rows partition by (league, week, season) like stats, but the
/// natural key is (league, external schedule id) alone: a matchup keeps its
/// id when the game moves it to another week, so the upsert conflicts on the
/// schedule id and updates the week columns too.
pub struct ScheduleRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> ScheduleRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Replace the (league, week, season) partition with `rows`.
    ///
    /// Empty input is a no-op; see the weekly repositories for the policy.
    pub async fn replace_week(
        &self,
        league_id: i32,
        ctx: WeekContext,
        rows: Vec<entity::schedule::ActiveModel>,
    ) -> Result<Vec<entity::schedule::Model>, DbErr> {
        if rows.is_empty() {
            return Ok(Vec::new());
        }

        match self.upsert_partition(league_id, ctx, &rows).await {
            Ok(models) => Ok(models),
            Err(err) if missing_conflict_target(&err) => {
                tracing::warn!("conflict target missing on schedule, rebuilding partition: {err}");

                self.rebuild_partition(league_id, ctx, rows).await
            }
            Err(err) => Err(err),
        }
    }

    /// Read one week's matchups, ordered by insertion id.
    pub async fn get_week(
        &self,
        league_id: i32,
        ctx: WeekContext,
    ) -> Result<Vec<entity::schedule::Model>, DbErr> {
        entity::prelude::Schedule::find()
            .filter(entity::schedule::Column::LeagueId.eq(league_id))
            .filter(entity::schedule::Column::WeekIndex.eq(ctx.week_index))
            .filter(entity::schedule::Column::SeasonIndex.eq(ctx.season_index))
            .order_by_asc(entity::schedule::Column::Id)
            .all(self.db)
            .await
    }

    /// Read a league's matchups with optional week and season narrowing.
    pub async fn list(
        &self,
        league_id: i32,
        week: Option<i32>,
        season: Option<i32>,
    ) -> Result<Vec<entity::schedule::Model>, DbErr> {
        let mut query = entity::prelude::Schedule::find()
            .filter(entity::schedule::Column::LeagueId.eq(league_id));

        if let Some(week) = week {
            query = query.filter(entity::schedule::Column::WeekIndex.eq(week));
        }
        if let Some(season) = season {
            query = query.filter(entity::schedule::Column::SeasonIndex.eq(season));
        }

        query
            .order_by_asc(entity::schedule::Column::Id)
            .all(self.db)
            .await
    }

    async fn upsert_partition(
        &self,
        league_id: i32,
        ctx: WeekContext,
        rows: &[entity::schedule::ActiveModel],
    ) -> Result<Vec<entity::schedule::Model>, DbErr> {
        let schedule_ids: Vec<Value> = rows
            .iter()
            .filter_map(|row| {
                row.get(entity::schedule::Column::ExternalScheduleId)
                    .into_value()
            })
            .collect();

        entity::prelude::Schedule::delete_many()
            .filter(entity::schedule::Column::LeagueId.eq(league_id))
            .filter(entity::schedule::Column::WeekIndex.eq(ctx.week_index))
            .filter(entity::schedule::Column::SeasonIndex.eq(ctx.season_index))
            .filter(entity::schedule::Column::ExternalScheduleId.is_not_in(schedule_ids))
            .exec(self.db)
            .await?;

        let mut models = Vec::with_capacity(rows.len());
        for batch in rows.chunks(BATCH_SIZE) {
            let inserted = entity::prelude::Schedule::insert_many(batch.to_vec())
                .on_conflict(
                    OnConflict::columns([
                        entity::schedule::Column::LeagueId,
                        entity::schedule::Column::ExternalScheduleId,
                    ])
                    .update_columns([
                        entity::schedule::Column::WeekIndex,
                        entity::schedule::Column::SeasonIndex,
                        entity::schedule::Column::StageIndex,
                        entity::schedule::Column::HomeTeamId,
                        entity::schedule::Column::AwayTeamId,
                        entity::schedule::Column::HomeScore,
                        entity::schedule::Column::AwayScore,
                        entity::schedule::Column::Status,
                        entity::schedule::Column::IsGameOfTheWeek,
                    ])
                    .to_owned(),
                )
                .exec_with_returning(self.db)
                .await?;

            models.extend(inserted);
        }

        Ok(models)
    }

    async fn rebuild_partition(
        &self,
        league_id: i32,
        ctx: WeekContext,
        rows: Vec<entity::schedule::ActiveModel>,
    ) -> Result<Vec<entity::schedule::Model>, DbErr> {
        entity::prelude::Schedule::delete_many()
            .filter(entity::schedule::Column::LeagueId.eq(league_id))
            .filter(entity::schedule::Column::WeekIndex.eq(ctx.week_index))
            .filter(entity::schedule::Column::SeasonIndex.eq(ctx.season_index))
            .exec(self.db)
            .await?;

        let mut models = Vec::with_capacity(rows.len());
        for batch in rows.chunks(BATCH_SIZE) {
            let inserted = entity::prelude::Schedule::insert_many(batch.to_vec())
                .exec_with_returning(self.db)
                .await?;

            models.extend(inserted);
        }

        Ok(models)
    }
}
