use sea_orm_migration::{prelude::*, schema::*};

use crate::m20250829_000001_league::League;

static IDX_RECEIVING_STAT_PARTITION: &str = "idx-receiving_stat-league-stat-week-season";
static FK_RECEIVING_STAT_LEAGUE_ID: &str = "fk-receiving_stat-league_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(ReceivingStat::Table)
                    .if_not_exists()
                    .col(pk_auto(ReceivingStat::Id))
                    .col(integer(ReceivingStat::LeagueId))
                    .col(string(ReceivingStat::ExternalStatId))
                    .col(integer(ReceivingStat::WeekIndex))
                    .col(integer(ReceivingStat::SeasonIndex))
                    .col(integer_null(ReceivingStat::StageIndex))
                    .col(string_null(ReceivingStat::ExternalTeamId))
                    .col(string_null(ReceivingStat::ExternalRosterId))
                    .col(string_null(ReceivingStat::FullName))
                    .col(integer_null(ReceivingStat::RecCatches))
                    .col(integer_null(ReceivingStat::RecYds))
                    .col(integer_null(ReceivingStat::RecTds))
                    .col(integer_null(ReceivingStat::RecDrops))
                    .col(integer_null(ReceivingStat::RecLongest))
                    .col(integer_null(ReceivingStat::RecYdsAfterCatch))
                    .col(float_null(ReceivingStat::RecYdsPerCatch))
                    .col(float_null(ReceivingStat::RecYacPerCatch))
                    .col(float_null(ReceivingStat::RecCatchPct))
                    .col(float_null(ReceivingStat::RecYdsPerGame))
                    .col(float_null(ReceivingStat::RecToPct))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_RECEIVING_STAT_PARTITION)
                    .table(ReceivingStat::Table)
                    .col(ReceivingStat::LeagueId)
                    .col(ReceivingStat::ExternalStatId)
                    .col(ReceivingStat::WeekIndex)
                    .col(ReceivingStat::SeasonIndex)
                    .unique()
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_RECEIVING_STAT_LEAGUE_ID)
                    .from_tbl(ReceivingStat::Table)
                    .from_col(ReceivingStat::LeagueId)
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
            .drop_table(Table::drop().table(ReceivingStat::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum ReceivingStat {
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
    RecCatches,
    RecYds,
    RecTds,
    RecDrops,
    RecLongest,
    RecYdsAfterCatch,
    RecYdsPerCatch,
    RecYacPerCatch,
    RecCatchPct,
    RecYdsPerGame,
    RecToPct,
}
