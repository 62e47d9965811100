use sea_orm::DatabaseConnection;
use serde_json::Value;

use crate::{
    data::{
        league::LeagueRepository,
        player::PlayerRepository,
        schedule::ScheduleRepository,
        standing::StandingRepository,
        stats::{
            DefensiveStatRepository, KickingStatRepository, PassingStatRepository,
            PuntingStatRepository, ReceivingStatRepository, RushingStatRepository,
            TeamStatRepository,
        },
        team::TeamRepository,
    },
    error::{import::ImportError, Error},
    import::{
        payload::parse_records,
        record::{
            DefensiveStatRecord, KickingStatRecord, PassingStatRecord, PlayerRecord,
            PuntingStatRecord, ReceivingStatRecord, RushingStatRecord, ScheduleRecord,
            StandingRecord, TeamRecord, TeamStatRecord,
        },
        transform,
        week::{StatCategory, WeekContext},
    },
    service::league::platform_from_route,
};

/// What a successful import writes, for the response envelope.
#[derive(Debug)]
pub struct ImportOutcome {
    pub count: usize,
    pub week: Option<i32>,
    pub season: Option<i32>,
}

impl ImportOutcome {
    fn counted(count: usize) -> Self {
        Self {
            count,
            week: None,
            season: None,
        }
    }

    fn partitioned(count: usize, ctx: WeekContext) -> Self {
        Self {
            count,
            week: Some(ctx.week_index),
            season: Some(ctx.season_index),
        }
    }
}

pub struct ImportService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ImportService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Upsert the league's team list. Empty list is a zero-count success.
    pub async fn import_teams(&self, slug: &str, body: Value) -> Result<ImportOutcome, Error> {
        let league_repo = LeagueRepository::new(self.db);
        let team_repo = TeamRepository::new(self.db);

        let league = self.resolve_by_slug(slug).await?;
        let records: Vec<TeamRecord> = parse_records(body, "leagueTeamInfoList")?;

        let rows = transform::team::team_rows(records, league.id);
        let count = team_repo.upsert_many(rows).await?.len();

        league_repo.touch_import(league.id, None).await?;

        tracing::info!("imported {count} teams for league {slug}");

        Ok(ImportOutcome::counted(count))
    }

    /// Replace one week's standings, with the partition inferred from the
    /// first record. An empty list cannot be addressed and is a 400.
    pub async fn import_standings(&self, slug: &str, body: Value) -> Result<ImportOutcome, Error> {
        let league_repo = LeagueRepository::new(self.db);
        let standing_repo = StandingRepository::new(self.db);

        let league = self.resolve_by_slug(slug).await?;
        let records: Vec<StandingRecord> = parse_records(body, "teamStandingInfoList")?;
        let ctx = WeekContext::from_first_record(&records)?;

        let rows = transform::standings::standing_rows(records, league.id, ctx);
        let count = standing_repo.replace_week(league.id, ctx, rows).await?.len();

        league_repo.touch_import(league.id, None).await?;

        tracing::info!(
            "imported {count} standings for league {slug}, week {} season {}",
            ctx.week_index,
            ctx.season_index,
        );

        Ok(ImportOutcome::partitioned(count, ctx))
    }

    /// Replace the league's roster from a full snapshot.
    ///
    /// The companion app addresses rosters by (owner, platform, Madden
    /// league id) rather than slug. A league that has not recorded its
    /// Madden id yet is claimed by the first roster import that matches
    /// the owner and platform.
    pub async fn import_roster(
        &self,
        user_id: &str,
        platform: &str,
        external_league_id: &str,
        body: Value,
    ) -> Result<ImportOutcome, Error> {
        let league_repo = LeagueRepository::new(self.db);
        let team_repo = TeamRepository::new(self.db);
        let player_repo = PlayerRepository::new(self.db);

        let platform = platform_from_route(platform)?;
        let league = match league_repo
            .get_by_import_key(user_id, platform, external_league_id)
            .await?
        {
            Some(league) => league,
            None => league_repo
                .get_by_user(user_id)
                .await?
                .into_iter()
                .find(|l| l.platform == platform && l.external_league_id.is_none())
                .ok_or_else(|| ImportError::LeagueNotFound(external_league_id.to_string()))?,
        };

        let records: Vec<PlayerRecord> = parse_records(body, "rosterInfoList")?;

        let team_map = team_repo.external_id_map(league.id).await?;
        let rows = transform::roster::roster_rows(records, league.id, &team_map);
        let count = player_repo.replace_league_roster(league.id, rows).await?;

        league_repo
            .touch_import(league.id, Some(external_league_id.to_string()))
            .await?;

        tracing::info!("imported {count} roster entries for league {}", league.slug);

        Ok(ImportOutcome::counted(count))
    }

    /// Replace one (week, season) partition of a weekly category. The URL
    /// supplies the partition; week markers in the body are ignored.
    pub async fn import_week(
        &self,
        slug: &str,
        platform: &str,
        external_league_id: &str,
        season_type: &str,
        week_number: u32,
        category: &str,
        body: Value,
    ) -> Result<ImportOutcome, Error> {
        let league_repo = LeagueRepository::new(self.db);

        let league = self.resolve_by_slug(slug).await?;
        platform_from_route(platform)?;
        let category = StatCategory::from_route(category)?;
        let ctx = WeekContext::from_route(season_type, week_number)?;

        let count = self.replace_category(league.id, category, ctx, body).await?;

        league_repo
            .touch_import(league.id, Some(external_league_id.to_string()))
            .await?;

        tracing::info!(
            "imported {count} {} records for league {slug}, week {} season {}",
            category.list_key(),
            ctx.week_index,
            ctx.season_index,
        );

        Ok(ImportOutcome::partitioned(count, ctx))
    }

    /// Read one (week, season) partition of a weekly category as JSON rows.
    pub async fn get_week(
        &self,
        slug: &str,
        season_type: &str,
        week_number: u32,
        category: &str,
    ) -> Result<Vec<Value>, Error> {
        let league = self.resolve_by_slug(slug).await?;
        let category = StatCategory::from_route(category)?;
        let ctx = WeekContext::from_route(season_type, week_number)?;

        let rows = match category {
            StatCategory::Schedules => to_values(
                ScheduleRepository::new(self.db)
                    .get_week(league.id, ctx)
                    .await?,
            ),
            StatCategory::TeamStats => to_values(
                TeamStatRepository::new(self.db)
                    .get_week(league.id, ctx)
                    .await?,
            ),
            StatCategory::Passing => to_values(
                PassingStatRepository::new(self.db)
                    .get_week(league.id, ctx)
                    .await?,
            ),
            StatCategory::Rushing => to_values(
                RushingStatRepository::new(self.db)
                    .get_week(league.id, ctx)
                    .await?,
            ),
            StatCategory::Receiving => to_values(
                ReceivingStatRepository::new(self.db)
                    .get_week(league.id, ctx)
                    .await?,
            ),
            StatCategory::Defense => to_values(
                DefensiveStatRepository::new(self.db)
                    .get_week(league.id, ctx)
                    .await?,
            ),
            StatCategory::Kicking => to_values(
                KickingStatRepository::new(self.db)
                    .get_week(league.id, ctx)
                    .await?,
            ),
            StatCategory::Punting => to_values(
                PuntingStatRepository::new(self.db)
                    .get_week(league.id, ctx)
                    .await?,
            ),
        };

        Ok(rows)
    }

    async fn replace_category(
        &self,
        league_id: i32,
        category: StatCategory,
        ctx: WeekContext,
        body: Value,
    ) -> Result<usize, Error> {
        let key = category.list_key();

        let count = match category {
            StatCategory::Schedules => {
                let records: Vec<ScheduleRecord> = parse_records(body, key)?;
                let rows = transform::schedule::schedule_rows(records, league_id, ctx);
                ScheduleRepository::new(self.db)
                    .replace_week(league_id, ctx, rows)
                    .await?
                    .len()
            }
            StatCategory::TeamStats => {
                let records: Vec<TeamStatRecord> = parse_records(body, key)?;
                let rows = transform::stats::team_stat_rows(records, league_id, ctx);
                TeamStatRepository::new(self.db)
                    .replace_week(league_id, ctx, rows)
                    .await?
                    .len()
            }
            StatCategory::Passing => {
                let records: Vec<PassingStatRecord> = parse_records(body, key)?;
                let rows = transform::stats::passing_rows(records, league_id, ctx);
                PassingStatRepository::new(self.db)
                    .replace_week(league_id, ctx, rows)
                    .await?
                    .len()
            }
            StatCategory::Rushing => {
                let records: Vec<RushingStatRecord> = parse_records(body, key)?;
                let rows = transform::stats::rushing_rows(records, league_id, ctx);
                RushingStatRepository::new(self.db)
                    .replace_week(league_id, ctx, rows)
                    .await?
                    .len()
            }
            StatCategory::Receiving => {
                let records: Vec<ReceivingStatRecord> = parse_records(body, key)?;
                let rows = transform::stats::receiving_rows(records, league_id, ctx);
                ReceivingStatRepository::new(self.db)
                    .replace_week(league_id, ctx, rows)
                    .await?
                    .len()
            }
            StatCategory::Defense => {
                let records: Vec<DefensiveStatRecord> = parse_records(body, key)?;
                let rows = transform::stats::defensive_rows(records, league_id, ctx);
                DefensiveStatRepository::new(self.db)
                    .replace_week(league_id, ctx, rows)
                    .await?
                    .len()
            }
            StatCategory::Kicking => {
                let records: Vec<KickingStatRecord> = parse_records(body, key)?;
                let rows = transform::stats::kicking_rows(records, league_id, ctx);
                KickingStatRepository::new(self.db)
                    .replace_week(league_id, ctx, rows)
                    .await?
                    .len()
            }
            StatCategory::Punting => {
                let records: Vec<PuntingStatRecord> = parse_records(body, key)?;
                let rows = transform::stats::punting_rows(records, league_id, ctx);
                PuntingStatRepository::new(self.db)
                    .replace_week(league_id, ctx, rows)
                    .await?
                    .len()
            }
        };

        Ok(count)
    }

    async fn resolve_by_slug(&self, slug: &str) -> Result<entity::league::Model, Error> {
        let league_repo = LeagueRepository::new(self.db);

        let league = league_repo
            .get_by_slug(slug)
            .await?
            .ok_or_else(|| ImportError::LeagueNotFound(slug.to_string()))?;

        Ok(league)
    }
}

fn to_values<T: serde::Serialize>(models: Vec<T>) -> Vec<Value> {
    models
        .into_iter()
        .filter_map(|m| serde_json::to_value(m).ok())
        .collect()
}
