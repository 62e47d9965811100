use sea_orm_migration::{prelude::*, schema::*};

use crate::{m20250829_000001_league::League, m20250829_000002_team::Team};

static IDX_PLAYER_NATURAL_KEY: &str = "idx-player-league_id-external_roster_id";
static IDX_PLAYER_TEAM_ID: &str = "idx-player-team_id";
static FK_PLAYER_LEAGUE_ID: &str = "fk-player-league_id";
static FK_PLAYER_TEAM_ID: &str = "fk-player-team_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Player::Table)
                    .if_not_exists()
                    .col(uuid(Player::Id).primary_key())
                    .col(integer(Player::LeagueId))
                    .col(uuid_null(Player::TeamId))
                    .col(string(Player::ExternalRosterId))
                    .col(string_null(Player::ExternalTeamId))
                    .col(string_null(Player::FirstName))
                    .col(string_null(Player::LastName))
                    .col(string_null(Player::Position))
                    .col(integer_null(Player::JerseyNum))
                    .col(integer_null(Player::Age))
                    .col(integer_null(Player::Height))
                    .col(integer_null(Player::Weight))
                    .col(integer_null(Player::BirthDay))
                    .col(integer_null(Player::BirthMonth))
                    .col(integer_null(Player::BirthYear))
                    .col(integer_null(Player::YearsPro))
                    .col(integer_null(Player::RookieYear))
                    .col(string_null(Player::College))
                    .col(string_null(Player::HomeTown))
                    .col(integer_null(Player::HomeState))
                    .col(integer_null(Player::DevTrait))
                    .col(integer_null(Player::PlayerBestOvr))
                    .col(integer_null(Player::PlayerSchemeOvr))
                    .col(integer_null(Player::TeamSchemeOvr))
                    .col(integer_null(Player::LegacyScore))
                    .col(integer_null(Player::ExperiencePoints))
                    .col(integer_null(Player::SkillPoints))
                    .col(big_integer_null(Player::ContractSalary))
                    .col(big_integer_null(Player::ContractBonus))
                    .col(integer_null(Player::ContractLength))
                    .col(integer_null(Player::ContractYearsLeft))
                    .col(big_integer_null(Player::CapHit))
                    .col(big_integer_null(Player::CapReleasePenalty))
                    .col(big_integer_null(Player::CapReleaseNetSavings))
                    .col(big_integer_null(Player::DesiredSalary))
                    .col(big_integer_null(Player::DesiredBonus))
                    .col(integer_null(Player::DesiredLength))
                    .col(integer_null(Player::ReSignStatus))
                    .col(integer_null(Player::DraftRound))
                    .col(integer_null(Player::DraftPick))
                    .col(integer_null(Player::InjuryType))
                    .col(integer_null(Player::InjuryLength))
                    .col(boolean_null(Player::IsFreeAgent))
                    .col(boolean_null(Player::IsOnIr))
                    .col(boolean_null(Player::IsOnPracticeSquad))
                    .col(boolean_null(Player::IsActive))
                    .col(integer_null(Player::PortraitId))
                    .col(big_integer_null(Player::PresentationId))
                    .col(integer_null(Player::Scheme))
                    .col(integer_null(Player::DurabilityGrade))
                    .col(integer_null(Player::IntangibleGrade))
                    .col(integer_null(Player::PhysicalGrade))
                    .col(integer_null(Player::ProductionGrade))
                    .col(integer_null(Player::SizeGrade))
                    .col(timestamp(Player::CreatedAt))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_PLAYER_NATURAL_KEY)
                    .table(Player::Table)
                    .col(Player::LeagueId)
                    .col(Player::ExternalRosterId)
                    .unique()
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_PLAYER_TEAM_ID)
                    .table(Player::Table)
                    .col(Player::TeamId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_PLAYER_LEAGUE_ID)
                    .from_tbl(Player::Table)
                    .from_col(Player::LeagueId)
                    .to_tbl(League::Table)
                    .to_col(League::Id)
                    .on_delete(ForeignKeyAction::Cascade)
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_PLAYER_TEAM_ID)
                    .from_tbl(Player::Table)
                    .from_col(Player::TeamId)
                    .to_tbl(Team::Table)
                    .to_col(Team::Id)
                    .on_delete(ForeignKeyAction::SetNull)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_foreign_key(
                ForeignKey::drop()
                    .name(FK_PLAYER_TEAM_ID)
                    .table(Player::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_foreign_key(
                ForeignKey::drop()
                    .name(FK_PLAYER_LEAGUE_ID)
                    .table(Player::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(Player::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum Player {
    Table,
    Id,
    LeagueId,
    TeamId,
    ExternalRosterId,
    ExternalTeamId,
    FirstName,
    LastName,
    Position,
    JerseyNum,
    Age,
    Height,
    Weight,
    BirthDay,
    BirthMonth,
    BirthYear,
    YearsPro,
    RookieYear,
    College,
    HomeTown,
    HomeState,
    DevTrait,
    PlayerBestOvr,
    PlayerSchemeOvr,
    TeamSchemeOvr,
    LegacyScore,
    ExperiencePoints,
    SkillPoints,
    ContractSalary,
    ContractBonus,
    ContractLength,
    ContractYearsLeft,
    CapHit,
    CapReleasePenalty,
    CapReleaseNetSavings,
    DesiredSalary,
    DesiredBonus,
    DesiredLength,
    ReSignStatus,
    DraftRound,
    DraftPick,
    InjuryType,
    InjuryLength,
    IsFreeAgent,
    IsOnIr,
    IsOnPracticeSquad,
    IsActive,
    PortraitId,
    PresentationId,
    Scheme,
    DurabilityGrade,
    IntangibleGrade,
    PhysicalGrade,
    ProductionGrade,
    SizeGrade,
    CreatedAt,
}
