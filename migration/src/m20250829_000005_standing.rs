use sea_orm_migration::{prelude::*, schema::*};

use crate::m20250829_000001_league::League;

static IDX_STANDING_PARTITION: &str = "idx-standing-league-team-week-season";
static FK_STANDING_LEAGUE_ID: &str = "fk-standing-league_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Standing::Table)
                    .if_not_exists()
                    .col(pk_auto(Standing::Id))
                    .col(integer(Standing::LeagueId))
                    .col(string(Standing::ExternalTeamId))
                    .col(integer(Standing::WeekIndex))
                    .col(integer(Standing::SeasonIndex))
                    .col(integer_null(Standing::StageIndex))
                    .col(integer_null(Standing::CalendarYear))
                    .col(integer_null(Standing::Rank))
                    .col(integer_null(Standing::PrevRank))
                    .col(integer_null(Standing::Seed))
                    .col(integer_null(Standing::TotalWins))
                    .col(integer_null(Standing::TotalLosses))
                    .col(integer_null(Standing::TotalTies))
                    .col(float_null(Standing::WinPct))
                    .col(integer_null(Standing::WinLossStreak))
                    .col(integer_null(Standing::DivWins))
                    .col(integer_null(Standing::DivLosses))
                    .col(integer_null(Standing::DivTies))
                    .col(integer_null(Standing::ConfWins))
                    .col(integer_null(Standing::ConfLosses))
                    .col(integer_null(Standing::ConfTies))
                    .col(integer_null(Standing::HomeWins))
                    .col(integer_null(Standing::HomeLosses))
                    .col(integer_null(Standing::HomeTies))
                    .col(integer_null(Standing::AwayWins))
                    .col(integer_null(Standing::AwayLosses))
                    .col(integer_null(Standing::AwayTies))
                    .col(integer_null(Standing::PtsFor))
                    .col(integer_null(Standing::PtsAgainst))
                    .col(integer_null(Standing::NetPts))
                    .col(integer_null(Standing::ToDiff))
                    .col(string_null(Standing::DivName))
                    .col(string_null(Standing::ConferenceName))
                    .col(integer_null(Standing::PlayoffStatus))
                    .col(integer_null(Standing::TeamOvr))
                    .col(integer_null(Standing::OffTotalYds))
                    .col(integer_null(Standing::OffPassYds))
                    .col(integer_null(Standing::OffRushYds))
                    .col(integer_null(Standing::DefTotalYds))
                    .col(integer_null(Standing::DefPassYds))
                    .col(integer_null(Standing::DefRushYds))
                    .col(big_integer_null(Standing::CapAvailable))
                    .col(big_integer_null(Standing::CapSpent))
                    .col(big_integer_null(Standing::CapRoom))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_STANDING_PARTITION)
                    .table(Standing::Table)
                    .col(Standing::LeagueId)
                    .col(Standing::ExternalTeamId)
                    .col(Standing::WeekIndex)
                    .col(Standing::SeasonIndex)
                    .unique()
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_STANDING_LEAGUE_ID)
                    .from_tbl(Standing::Table)
                    .from_col(Standing::LeagueId)
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
            .drop_table(Table::drop().table(Standing::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum Standing {
    Table,
    Id,
    LeagueId,
    ExternalTeamId,
    WeekIndex,
    SeasonIndex,
    StageIndex,
    CalendarYear,
    Rank,
    PrevRank,
    Seed,
    TotalWins,
    TotalLosses,
    TotalTies,
    WinPct,
    WinLossStreak,
    DivWins,
    DivLosses,
    DivTies,
    ConfWins,
    ConfLosses,
    ConfTies,
    HomeWins,
    HomeLosses,
    HomeTies,
    AwayWins,
    AwayLosses,
    AwayTies,
    PtsFor,
    PtsAgainst,
    NetPts,
    ToDiff,
    DivName,
    ConferenceName,
    PlayoffStatus,
    TeamOvr,
    OffTotalYds,
    OffPassYds,
    OffRushYds,
    DefTotalYds,
    DefPassYds,
    DefRushYds,
    CapAvailable,
    CapSpent,
    CapRoom,
}
