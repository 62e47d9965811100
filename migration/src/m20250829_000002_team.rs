use sea_orm_migration::{prelude::*, schema::*};

use crate::m20250829_000001_league::League;

static IDX_TEAM_NATURAL_KEY: &str = "idx-team-league_id-external_team_id";
static FK_TEAM_LEAGUE_ID: &str = "fk-team-league_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Team::Table)
                    .if_not_exists()
                    .col(uuid(Team::Id).primary_key())
                    .col(integer(Team::LeagueId))
                    .col(string(Team::ExternalTeamId))
                    .col(string_null(Team::CityName))
                    .col(string_null(Team::DisplayName))
                    .col(string_null(Team::NickName))
                    .col(string_null(Team::AbbrName))
                    .col(string_null(Team::DivName))
                    .col(string_null(Team::ConferenceName))
                    .col(integer_null(Team::OvrRating))
                    .col(integer_null(Team::OffScheme))
                    .col(integer_null(Team::DefScheme))
                    .col(integer_null(Team::PrimaryColor))
                    .col(integer_null(Team::SecondaryColor))
                    .col(string_null(Team::UserName))
                    .col(integer_null(Team::InjuryCount))
                    .col(timestamp(Team::CreatedAt))
                    .col(timestamp(Team::UpdatedAt))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_TEAM_NATURAL_KEY)
                    .table(Team::Table)
                    .col(Team::LeagueId)
                    .col(Team::ExternalTeamId)
                    .unique()
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_TEAM_LEAGUE_ID)
                    .from_tbl(Team::Table)
                    .from_col(Team::LeagueId)
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
            .drop_foreign_key(
                ForeignKey::drop()
                    .name(FK_TEAM_LEAGUE_ID)
                    .table(Team::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name(IDX_TEAM_NATURAL_KEY)
                    .table(Team::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(Team::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum Team {
    Table,
    Id,
    LeagueId,
    ExternalTeamId,
    CityName,
    DisplayName,
    NickName,
    AbbrName,
    DivName,
    ConferenceName,
    OvrRating,
    OffScheme,
    DefScheme,
    PrimaryColor,
    SecondaryColor,
    UserName,
    InjuryCount,
    CreatedAt,
    UpdatedAt,
}
