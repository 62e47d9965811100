use sea_orm_migration::{prelude::*, schema::*};

use crate::m20250829_000001_league::League;

static IDX_PASSING_STAT_PARTITION: &str = "idx-passing_stat-league-stat-week-season";
static FK_PASSING_STAT_LEAGUE_ID: &str = "fk-passing_stat-league_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(PassingStat::Table)
                    .if_not_exists()
                    .col(pk_auto(PassingStat::Id))
                    .col(integer(PassingStat::LeagueId))
                    .col(string(PassingStat::ExternalStatId))
                    .col(integer(PassingStat::WeekIndex))
                    .col(integer(PassingStat::SeasonIndex))
                    .col(integer_null(PassingStat::StageIndex))
                    .col(string_null(PassingStat::ExternalTeamId))
                    .col(string_null(PassingStat::ExternalRosterId))
                    .col(string_null(PassingStat::FullName))
                    .col(integer_null(PassingStat::PassAtt))
                    .col(integer_null(PassingStat::PassComp))
                    .col(integer_null(PassingStat::PassYds))
                    .col(integer_null(PassingStat::PassTds))
                    .col(integer_null(PassingStat::PassInts))
                    .col(integer_null(PassingStat::PassSacks))
                    .col(integer_null(PassingStat::PassLongest))
                    .col(float_null(PassingStat::PasserRating))
                    .col(float_null(PassingStat::PassCompPct))
                    .col(float_null(PassingStat::PassYdsPerAtt))
                    .col(float_null(PassingStat::PassYdsPerGame))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_PASSING_STAT_PARTITION)
                    .table(PassingStat::Table)
                    .col(PassingStat::LeagueId)
                    .col(PassingStat::ExternalStatId)
                    .col(PassingStat::WeekIndex)
                    .col(PassingStat::SeasonIndex)
                    .unique()
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_PASSING_STAT_LEAGUE_ID)
                    .from_tbl(PassingStat::Table)
                    .from_col(PassingStat::LeagueId)
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
            .drop_table(Table::drop().table(PassingStat::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum PassingStat {
    Table,
    Id,
    LeagueId,
    ExternalStatId,
    WeekIndex,
    SeasonIndex,
    StageIndex,
    ExternalTeamId,
    ExternalRosterId,
    FullName,
    PassAtt,
    PassComp,
    PassYds,
    PassTds,
    PassInts,
    PassSacks,
    PassLongest,
    PasserRating,
    PassCompPct,
    PassYdsPerAtt,
    PassYdsPerGame,
}
