use sea_orm_migration::{prelude::*, schema::*};

use crate::m20250829_000001_league::League;

static IDX_TEAM_STAT_PARTITION: &str = "idx-team_stat-league-stat-week-season";
static FK_TEAM_STAT_LEAGUE_ID: &str = "fk-team_stat-league_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(TeamStat::Table)
                    .if_not_exists()
                    .col(pk_auto(TeamStat::Id))
                    .col(integer(TeamStat::LeagueId))
                    .col(string(TeamStat::ExternalStatId))
                    .col(integer(TeamStat::WeekIndex))
                    .col(integer(TeamStat::SeasonIndex))
                    .col(integer_null(TeamStat::StageIndex))
                    .col(string_null(TeamStat::ExternalTeamId))
                    .col(integer_null(TeamStat::TotalWins))
                    .col(integer_null(TeamStat::TotalLosses))
                    .col(integer_null(TeamStat::TotalTies))
                    .col(integer_null(TeamStat::Seed))
                    .col(integer_null(TeamStat::OffTotalYds))
                    .col(integer_null(TeamStat::OffPassYds))
                    .col(integer_null(TeamStat::OffRushYds))
                    .col(integer_null(TeamStat::DefTotalYds))
                    .col(integer_null(TeamStat::DefPassYds))
                    .col(integer_null(TeamStat::DefRushYds))
                    .col(integer_null(TeamStat::ToGiveaways))
                    .col(integer_null(TeamStat::ToTakeaways))
                    .col(integer_null(TeamStat::ToDiff))
                    .col(float_null(TeamStat::OffPtsPerGame))
                    .col(float_null(TeamStat::DefPtsPerGame))
                    .col(integer_null(TeamStat::OffRedZones))
                    .col(integer_null(TeamStat::OffRedZoneTds))
                    .col(float_null(TeamStat::OffRedZonePct))
                    .col(integer_null(TeamStat::OffFirstDowns))
                    .col(integer_null(TeamStat::Off3rdDownAtt))
                    .col(integer_null(TeamStat::Off3rdDownConv))
                    .col(integer_null(TeamStat::Off4thDownAtt))
                    .col(integer_null(TeamStat::Off4thDownConv))
                    .col(integer_null(TeamStat::Penalties))
                    .col(integer_null(TeamStat::PenaltyYds))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_TEAM_STAT_PARTITION)
                    .table(TeamStat::Table)
                    .col(TeamStat::LeagueId)
                    .col(TeamStat::ExternalStatId)
                    .col(TeamStat::WeekIndex)
                    .col(TeamStat::SeasonIndex)
                    .unique()
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_TEAM_STAT_LEAGUE_ID)
                    .from_tbl(TeamStat::Table)
                    .from_col(TeamStat::LeagueId)
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
            .drop_table(Table::drop().table(TeamStat::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum TeamStat {
    Table,
    Id,
    LeagueId,
    ExternalStatId,
    WeekIndex,
    SeasonIndex,
    StageIndex,
    ExternalTeamId,
    TotalWins,
    TotalLosses,
    TotalTies,
    Seed,
    OffTotalYds,
    OffPassYds,
    OffRushYds,
    DefTotalYds,
    DefPassYds,
    DefRushYds,
    ToGiveaways,
    ToTakeaways,
    ToDiff,
    OffPtsPerGame,
    DefPtsPerGame,
    OffRedZones,
    OffRedZoneTds,
    OffRedZonePct,
    OffFirstDowns,
    Off3rdDownAtt,
    Off3rdDownConv,
    Off4thDownAtt,
    Off4thDownConv,
    Penalties,
    PenaltyYds,
}
