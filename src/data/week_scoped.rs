//! Generic persistence for week-partitioned tables.
//!
//! Standings and all seven weekly stat tables share the same shape: a
//! surrogate pk, a (league, natural external id, week, season) unique key,
//! and replace-the-partition import semantics. One generic repository covers
//! them; each entity declares its key columns via [`WeekScoped`].

use migration::OnConflict;
use sea_orm::{
    ActiveModelBehavior, ActiveModelTrait, ColumnTrait, ConnectionTrait, DbErr, EntityTrait,
    IdenStatic, IntoActiveModel, Iterable, QueryFilter, QueryOrder, Value,
};
use std::marker::PhantomData;

use crate::data::{missing_conflict_target, BATCH_SIZE};
use crate::import::week::WeekContext;

/// Key-column declarations for a week-partitioned entity.
pub trait WeekScoped: EntityTrait {
    /// The entity's active model.
    type Row: ActiveModelTrait<Entity = Self> + ActiveModelBehavior + Clone + Send;

    fn id_col() -> Self::Column;
    fn league_col() -> Self::Column;
    fn natural_id_col() -> Self::Column;
    fn week_col() -> Self::Column;
    fn season_col() -> Self::Column;
}

pub struct WeeklyRepository<'a, C: ConnectionTrait, E: WeekScoped> {
    db: &'a C,
    entity: PhantomData<E>,
}

impl<'a, C, E> WeeklyRepository<'a, C, E>
where
    C: ConnectionTrait,
    E: WeekScoped,
    E::Model: IntoActiveModel<E::Row>,
{
    pub fn new(db: &'a C) -> Self {
        Self {
            db,
            entity: PhantomData,
        }
    }

    /// Replace the (league, week, season) partition with `rows`.
    ///
    /// Empty input is a no-op returning an empty Vec; importing zero records
    /// must not clear the partition. Otherwise, after success the partition
    /// holds exactly `rows`: stale rows on other natural ids are deleted and
    /// the rest are upserted on the composite key. When the store reports
    /// the composite unique constraint missing, the whole partition is
    /// rebuilt by delete-then-insert instead.
    pub async fn replace_week(
        &self,
        league_id: i32,
        ctx: WeekContext,
        rows: Vec<E::Row>,
    ) -> Result<Vec<E::Model>, DbErr> {
        if rows.is_empty() {
            return Ok(Vec::new());
        }

        match self.upsert_partition(league_id, ctx, &rows).await {
            Ok(models) => Ok(models),
            Err(err) if missing_conflict_target(&err) => {
                tracing::warn!(
                    "conflict target missing on {}, rebuilding partition: {err}",
                    E::default().table_name(),
                );

                self.rebuild_partition(league_id, ctx, rows).await
            }
            Err(err) => Err(err),
        }
    }

    /// Read one partition, ordered by insertion id.
    pub async fn get_week(
        &self,
        league_id: i32,
        ctx: WeekContext,
    ) -> Result<Vec<E::Model>, DbErr> {
        E::find()
            .filter(E::league_col().eq(league_id))
            .filter(E::week_col().eq(ctx.week_index))
            .filter(E::season_col().eq(ctx.season_index))
            .order_by_asc(E::id_col())
            .all(self.db)
            .await
    }

    /// Read a league's rows with optional week and season narrowing.
    pub async fn list(
        &self,
        league_id: i32,
        week: Option<i32>,
        season: Option<i32>,
    ) -> Result<Vec<E::Model>, DbErr> {
        let mut query = E::find().filter(E::league_col().eq(league_id));

        if let Some(week) = week {
            query = query.filter(E::week_col().eq(week));
        }
        if let Some(season) = season {
            query = query.filter(E::season_col().eq(season));
        }

        query.order_by_asc(E::id_col()).all(self.db).await
    }

    async fn upsert_partition(
        &self,
        league_id: i32,
        ctx: WeekContext,
        rows: &[E::Row],
    ) -> Result<Vec<E::Model>, DbErr> {
        let natural_ids: Vec<Value> = rows
            .iter()
            .filter_map(|row| row.get(E::natural_id_col()).into_value())
            .collect();

        // Rows the new import no longer carries would survive an upsert.
        E::delete_many()
            .filter(E::league_col().eq(league_id))
            .filter(E::week_col().eq(ctx.week_index))
            .filter(E::season_col().eq(ctx.season_index))
            .filter(E::natural_id_col().is_not_in(natural_ids))
            .exec(self.db)
            .await?;

        let key_cols = [
            E::league_col(),
            E::natural_id_col(),
            E::week_col(),
            E::season_col(),
        ];
        let update_cols: Vec<E::Column> = E::Column::iter()
            .filter(|col| {
                col.as_str() != E::id_col().as_str()
                    && key_cols.iter().all(|key| key.as_str() != col.as_str())
            })
            .collect();

        let mut models = Vec::with_capacity(rows.len());
        for batch in rows.chunks(BATCH_SIZE) {
            let inserted = E::insert_many(batch.to_vec())
                .on_conflict(
                    OnConflict::columns(key_cols)
                        .update_columns(update_cols.clone())
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
        rows: Vec<E::Row>,
    ) -> Result<Vec<E::Model>, DbErr> {
        E::delete_many()
            .filter(E::league_col().eq(league_id))
            .filter(E::week_col().eq(ctx.week_index))
            .filter(E::season_col().eq(ctx.season_index))
            .exec(self.db)
            .await?;

        let mut models = Vec::with_capacity(rows.len());
        for batch in rows.chunks(BATCH_SIZE) {
            let inserted = E::insert_many(batch.to_vec())
                .exec_with_returning(self.db)
                .await?;

            models.extend(inserted);
        }

        Ok(models)
    }
}
