use sea_orm_migration::{prelude::*, schema::*};

use crate::m20250829_000001_league::League;

static IDX_KICKING_STAT_PARTITION: &str = "idx-kicking_stat-league-stat-week-season";
static FK_KICKING_STAT_LEAGUE_ID: &str = "fk-kicking_stat-league_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(KickingStat::Table)
                    .if_not_exists()
                    .col(pk_auto(KickingStat::Id))
                    .col(integer(KickingStat::LeagueId))
                    .col(string(KickingStat::ExternalStatId))
                    .col(integer(KickingStat::WeekIndex))
                    .col(integer(KickingStat::SeasonIndex))
                    .col(integer_null(KickingStat::StageIndex))
                    .col(string_null(KickingStat::ExternalTeamId))
                    .col(string_null(KickingStat::ExternalRosterId))
                    .col(string_null(KickingStat::FullName))
                    .col(integer_null(KickingStat::FgAtt))
                    .col(integer_null(KickingStat::FgMade))
                    .col(integer_null(KickingStat::FgLongest))
                    .col(integer_null(KickingStat::Fg50PlusAtt))
                    .col(integer_null(KickingStat::Fg50PlusMade))
                    .col(integer_null(KickingStat::XpAtt))
                    .col(integer_null(KickingStat::XpMade))
                    .col(integer_null(KickingStat::KickoffAtt))
                    .col(integer_null(KickingStat::KickoffTbs))
                    .col(integer_null(KickingStat::KickPts))
                    .col(float_null(KickingStat::FgCompPct))
                    .col(float_null(KickingStat::XpCompPct))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_KICKING_STAT_PARTITION)
                    .table(KickingStat::Table)
                    .col(KickingStat::LeagueId)
                    .col(KickingStat::ExternalStatId)
                    .col(KickingStat::WeekIndex)
                    .col(KickingStat::SeasonIndex)
                    .unique()
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_KICKING_STAT_LEAGUE_ID)
                    .from_tbl(KickingStat::Table)
                    .from_col(KickingStat::LeagueId)
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
            .drop_table(Table::drop().table(KickingStat::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum KickingStat {
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
    FgAtt,
    FgMade,
    FgLongest,
    Fg50PlusAtt,
    Fg50PlusMade,
    XpAtt,
    XpMade,
    KickoffAtt,
    KickoffTbs,
    KickPts,
    FgCompPct,
    XpCompPct,
}
