use sea_orm_migration::{prelude::*, schema::*};

use crate::m20250829_000001_league::League;

static IDX_SCHEDULE_NATURAL_KEY: &str = "idx-schedule-league_id-external_schedule_id";
static IDX_SCHEDULE_WEEK: &str = "idx-schedule-league-week-season";
static FK_SCHEDULE_LEAGUE_ID: &str = "fk-schedule-league_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Schedule::Table)
                    .if_not_exists()
                    .col(pk_auto(Schedule::Id))
                    .col(integer(Schedule::LeagueId))
                    .col(string(Schedule::ExternalScheduleId))
                    .col(integer(Schedule::WeekIndex))
                    .col(integer(Schedule::SeasonIndex))
                    .col(integer_null(Schedule::StageIndex))
                    .col(string_null(Schedule::HomeTeamId))
                    .col(string_null(Schedule::AwayTeamId))
                    .col(integer_null(Schedule::HomeScore))
                    .col(integer_null(Schedule::AwayScore))
                    .col(integer_null(Schedule::Status))
                    .col(boolean_null(Schedule::IsGameOfTheWeek))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_SCHEDULE_NATURAL_KEY)
                    .table(Schedule::Table)
                    .col(Schedule::LeagueId)
                    .col(Schedule::ExternalScheduleId)
                    .unique()
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_SCHEDULE_WEEK)
                    .table(Schedule::Table)
                    .col(Schedule::LeagueId)
                    .col(Schedule::WeekIndex)
                    .col(Schedule::SeasonIndex)
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_SCHEDULE_LEAGUE_ID)
                    .from_tbl(Schedule::Table)
                    .from_col(Schedule::LeagueId)
                    .to_tbl(League::Table)
                    .to_col(League::Id)
                    .on_delete(ForeignKeyAction::Cascade)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Schedule::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum Schedule {
    Table,
    Id,
    LeagueId,
    ExternalScheduleId,
    WeekIndex,
    SeasonIndex,
    StageIndex,
    HomeTeamId,
    AwayTeamId,
    HomeScore,
    AwayScore,
    Status,
    IsGameOfTheWeek,
}
