use sea_orm_migration::{prelude::*, schema::*};

use crate::m20250829_000001_league::League;

static IDX_PUNTING_STAT_PARTITION: &str = "idx-punting_stat-league-stat-week-season";
static FK_PUNTING_STAT_LEAGUE_ID: &str = "fk-punting_stat-league_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(PuntingStat::Table)
                    .if_not_exists()
                    .col(pk_auto(PuntingStat::Id))
                    .col(integer(PuntingStat::LeagueId))
                    .col(string(PuntingStat::ExternalStatId))
                    .col(integer(PuntingStat::WeekIndex))
                    .col(integer(PuntingStat::SeasonIndex))
                    .col(integer_null(PuntingStat::StageIndex))
                    .col(string_null(PuntingStat::ExternalTeamId))
                    .col(string_null(PuntingStat::ExternalRosterId))
                    .col(string_null(PuntingStat::FullName))
                    .col(integer_null(PuntingStat::PuntAtt))
                    .col(integer_null(PuntingStat::PuntYds))
                    .col(integer_null(PuntingStat::PuntLongest))
                    .col(integer_null(PuntingStat::PuntsIn20))
                    .col(integer_null(PuntingStat::PuntTbs))
                    .col(integer_null(PuntingStat::PuntsBlocked))
                    .col(integer_null(PuntingStat::PuntNetYds))
                    .col(float_null(PuntingStat::PuntYdsPerAtt))
                    .col(float_null(PuntingStat::PuntNetYdsPerAtt))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_PUNTING_STAT_PARTITION)
                    .table(PuntingStat::Table)
                    .col(PuntingStat::LeagueId)
                    .col(PuntingStat::ExternalStatId)
                    .col(PuntingStat::WeekIndex)
                    .col(PuntingStat::SeasonIndex)
                    .unique()
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_PUNTING_STAT_LEAGUE_ID)
                    .from_tbl(PuntingStat::Table)
                    .from_col(PuntingStat::LeagueId)
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
            .drop_table(Table::drop().table(PuntingStat::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum PuntingStat {
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
    PuntAtt,
    PuntYds,
    PuntLongest,
    PuntsIn20,
    PuntTbs,
    PuntsBlocked,
    PuntNetYds,
    PuntYdsPerAtt,
    PuntNetYdsPerAtt,
}
