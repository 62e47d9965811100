use sea_orm_migration::{prelude::*, schema::*};

use crate::m20250829_000001_league::League;

static IDX_DEFENSIVE_STAT_PARTITION: &str = "idx-defensive_stat-league-stat-week-season";
static FK_DEFENSIVE_STAT_LEAGUE_ID: &str = "fk-defensive_stat-league_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(DefensiveStat::Table)
                    .if_not_exists()
                    .col(pk_auto(DefensiveStat::Id))
                    .col(integer(DefensiveStat::LeagueId))
                    .col(string(DefensiveStat::ExternalStatId))
                    .col(integer(DefensiveStat::WeekIndex))
                    .col(integer(DefensiveStat::SeasonIndex))
                    .col(integer_null(DefensiveStat::StageIndex))
                    .col(string_null(DefensiveStat::ExternalTeamId))
                    .col(string_null(DefensiveStat::ExternalRosterId))
                    .col(string_null(DefensiveStat::FullName))
                    .col(integer_null(DefensiveStat::DefTotalTackles))
                    .col(float_null(DefensiveStat::DefSacks))
                    .col(integer_null(DefensiveStat::DefInts))
                    .col(integer_null(DefensiveStat::DefIntReturnYds))
                    .col(integer_null(DefensiveStat::DefForcedFum))
                    .col(integer_null(DefensiveStat::DefFumRec))
                    .col(integer_null(DefensiveStat::DefDeflections))
                    .col(integer_null(DefensiveStat::DefTds))
                    .col(integer_null(DefensiveStat::DefSafeties))
                    .col(integer_null(DefensiveStat::DefCatchesAllowed))
                    .col(integer_null(DefensiveStat::DefPts))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_DEFENSIVE_STAT_PARTITION)
                    .table(DefensiveStat::Table)
                    .col(DefensiveStat::LeagueId)
                    .col(DefensiveStat::ExternalStatId)
                    .col(DefensiveStat::WeekIndex)
                    .col(DefensiveStat::SeasonIndex)
                    .unique()
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_DEFENSIVE_STAT_LEAGUE_ID)
                    .from_tbl(DefensiveStat::Table)
                    .from_col(DefensiveStat::LeagueId)
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
            .drop_table(Table::drop().table(DefensiveStat::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum DefensiveStat {
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
    DefTotalTackles,
    DefSacks,
    DefInts,
    DefIntReturnYds,
    DefForcedFum,
    DefFumRec,
    DefDeflections,
    DefTds,
    DefSafeties,
    DefCatchesAllowed,
    DefPts,
}
