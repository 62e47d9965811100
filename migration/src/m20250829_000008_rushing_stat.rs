use sea_orm_migration::{prelude::*, schema::*};

use crate::m20250829_000001_league::League;

static IDX_RUSHING_STAT_PARTITION: &str = "idx-rushing_stat-league-stat-week-season";
static FK_RUSHING_STAT_LEAGUE_ID: &str = "fk-rushing_stat-league_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(RushingStat::Table)
                    .if_not_exists()
                    .col(pk_auto(RushingStat::Id))
                    .col(integer(RushingStat::LeagueId))
                    .col(string(RushingStat::ExternalStatId))
                    .col(integer(RushingStat::WeekIndex))
                    .col(integer(RushingStat::SeasonIndex))
                    .col(integer_null(RushingStat::StageIndex))
                    .col(string_null(RushingStat::ExternalTeamId))
                    .col(string_null(RushingStat::ExternalRosterId))
                    .col(string_null(RushingStat::FullName))
                    .col(integer_null(RushingStat::RushAtt))
                    .col(integer_null(RushingStat::RushYds))
                    .col(integer_null(RushingStat::RushTds))
                    .col(integer_null(RushingStat::RushFum))
                    .col(integer_null(RushingStat::RushLongest))
                    .col(integer_null(RushingStat::Rush20PlusYds))
                    .col(integer_null(RushingStat::RushBrokenTackles))
                    .col(integer_null(RushingStat::RushYdsAfterContact))
                    .col(float_null(RushingStat::RushYdsPerAtt))
                    .col(float_null(RushingStat::RushYdsPerGame))
                    .col(float_null(RushingStat::RushToPct))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_RUSHING_STAT_PARTITION)
                    .table(RushingStat::Table)
                    .col(RushingStat::LeagueId)
                    .col(RushingStat::ExternalStatId)
                    .col(RushingStat::WeekIndex)
                    .col(RushingStat::SeasonIndex)
                    .unique()
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_RUSHING_STAT_LEAGUE_ID)
                    .from_tbl(RushingStat::Table)
                    .from_col(RushingStat::LeagueId)
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
            .drop_table(Table::drop().table(RushingStat::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum RushingStat {
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
    RushAtt,
    RushYds,
    RushTds,
    RushFum,
    RushLongest,
    Rush20PlusYds,
    RushBrokenTackles,
    RushYdsAfterContact,
    RushYdsPerAtt,
    RushYdsPerGame,
    RushToPct,
}
