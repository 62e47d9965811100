use sea_orm_migration::{prelude::*, schema::*};

use crate::m20250829_000003_player::Player;

static FK_PLAYER_TRAIT_PLAYER_ID: &str = "fk-player_trait-player_id";
static FK_PLAYER_RATING_PLAYER_ID: &str = "fk-player_rating-player_id";
static FK_PLAYER_ABILITY_PLAYER_ID: &str = "fk-player_ability-player_id";
static IDX_PLAYER_ABILITY_PLAYER_ID: &str = "idx-player_ability-player_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(PlayerTrait::Table)
                    .if_not_exists()
                    .col(uuid(PlayerTrait::PlayerId).primary_key())
                    .col(integer(PlayerTrait::LeagueId))
                    .col(integer_null(PlayerTrait::YacCatchTrait))
                    .col(integer_null(PlayerTrait::PosCatchTrait))
                    .col(integer_null(PlayerTrait::HpCatchTrait))
                    .col(integer_null(PlayerTrait::DropOpenPassTrait))
                    .col(integer_null(PlayerTrait::FeetInBoundsTrait))
                    .col(integer_null(PlayerTrait::FightForYardsTrait))
                    .col(integer_null(PlayerTrait::CoverBallTrait))
                    .col(boolean_null(PlayerTrait::ClutchTrait))
                    .col(boolean_null(PlayerTrait::HighMotorTrait))
                    .col(integer_null(PlayerTrait::PenaltyTrait))
                    .col(boolean_null(PlayerTrait::BigHitTrait))
                    .col(boolean_null(PlayerTrait::StripBallTrait))
                    .col(integer_null(PlayerTrait::PlayBallTrait))
                    .col(integer_null(PlayerTrait::DlBullRushTrait))
                    .col(integer_null(PlayerTrait::DlSwimTrait))
                    .col(integer_null(PlayerTrait::DlSpinTrait))
                    .col(integer_null(PlayerTrait::LbStyleTrait))
                    .col(integer_null(PlayerTrait::QbStyleTrait))
                    .col(integer_null(PlayerTrait::SensePressureTrait))
                    .col(boolean_null(PlayerTrait::ThrowAwayTrait))
                    .col(boolean_null(PlayerTrait::TightSpiralTrait))
                    .col(integer_null(PlayerTrait::ForcePassTrait))
                    .col(boolean_null(PlayerTrait::PredictTrait))
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(PlayerRating::Table)
                    .if_not_exists()
                    .col(uuid(PlayerRating::PlayerId).primary_key())
                    .col(integer(PlayerRating::LeagueId))
                    .col(integer_null(PlayerRating::SpeedRating))
                    .col(integer_null(PlayerRating::AccelRating))
                    .col(integer_null(PlayerRating::AgilityRating))
                    .col(integer_null(PlayerRating::ChangeOfDirectionRating))
                    .col(integer_null(PlayerRating::StrengthRating))
                    .col(integer_null(PlayerRating::AwarenessRating))
                    .col(integer_null(PlayerRating::JumpRating))
                    .col(integer_null(PlayerRating::StaminaRating))
                    .col(integer_null(PlayerRating::ToughnessRating))
                    .col(integer_null(PlayerRating::InjuryRating))
                    .col(integer_null(PlayerRating::CarryRating))
                    .col(integer_null(PlayerRating::CatchRating))
                    .col(integer_null(PlayerRating::SpecCatchRating))
                    .col(integer_null(PlayerRating::CitRating))
                    .col(integer_null(PlayerRating::ReleaseRating))
                    .col(integer_null(PlayerRating::RouteRunShortRating))
                    .col(integer_null(PlayerRating::RouteRunMedRating))
                    .col(integer_null(PlayerRating::RouteRunDeepRating))
                    .col(integer_null(PlayerRating::ThrowPowerRating))
                    .col(integer_null(PlayerRating::ThrowAccRating))
                    .col(integer_null(PlayerRating::ThrowAccShortRating))
                    .col(integer_null(PlayerRating::ThrowAccMidRating))
                    .col(integer_null(PlayerRating::ThrowAccDeepRating))
                    .col(integer_null(PlayerRating::ThrowOnRunRating))
                    .col(integer_null(PlayerRating::ThrowUnderPressureRating))
                    .col(integer_null(PlayerRating::PlayActionRating))
                    .col(integer_null(PlayerRating::BreakSackRating))
                    .col(integer_null(PlayerRating::BreakTackleRating))
                    .col(integer_null(PlayerRating::BcvRating))
                    .col(integer_null(PlayerRating::TruckRating))
                    .col(integer_null(PlayerRating::StiffArmRating))
                    .col(integer_null(PlayerRating::SpinMoveRating))
                    .col(integer_null(PlayerRating::JukeMoveRating))
                    .col(integer_null(PlayerRating::ElusiveRating))
                    .col(integer_null(PlayerRating::RunBlockRating))
                    .col(integer_null(PlayerRating::RunBlockPowerRating))
                    .col(integer_null(PlayerRating::RunBlockFinesseRating))
                    .col(integer_null(PlayerRating::PassBlockRating))
                    .col(integer_null(PlayerRating::PassBlockPowerRating))
                    .col(integer_null(PlayerRating::PassBlockFinesseRating))
                    .col(integer_null(PlayerRating::LeadBlockRating))
                    .col(integer_null(PlayerRating::ImpactBlockRating))
                    .col(integer_null(PlayerRating::TackleRating))
                    .col(integer_null(PlayerRating::HitPowerRating))
                    .col(integer_null(PlayerRating::PowerMovesRating))
                    .col(integer_null(PlayerRating::FinesseMovesRating))
                    .col(integer_null(PlayerRating::BlockShedRating))
                    .col(integer_null(PlayerRating::PursuitRating))
                    .col(integer_null(PlayerRating::PlayRecRating))
                    .col(integer_null(PlayerRating::ManCoverRating))
                    .col(integer_null(PlayerRating::ZoneCoverRating))
                    .col(integer_null(PlayerRating::PressRating))
                    .col(integer_null(PlayerRating::KickPowerRating))
                    .col(integer_null(PlayerRating::KickAccRating))
                    .col(integer_null(PlayerRating::KickRetRating))
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(PlayerAbility::Table)
                    .if_not_exists()
                    .col(pk_auto(PlayerAbility::Id))
                    .col(uuid(PlayerAbility::PlayerId))
                    .col(integer(PlayerAbility::LeagueId))
                    .col(integer_null(PlayerAbility::SlotIndex))
                    .col(string_null(PlayerAbility::Title))
                    .col(text_null(PlayerAbility::Description))
                    .col(integer_null(PlayerAbility::LogoId))
                    .col(boolean_null(PlayerAbility::IsUnlocked))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_PLAYER_ABILITY_PLAYER_ID)
                    .table(PlayerAbility::Table)
                    .col(PlayerAbility::PlayerId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_PLAYER_TRAIT_PLAYER_ID)
                    .from_tbl(PlayerTrait::Table)
                    .from_col(PlayerTrait::PlayerId)
                    .to_tbl(Player::Table)
                    .to_col(Player::Id)
                    .on_delete(ForeignKeyAction::Cascade)
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_PLAYER_RATING_PLAYER_ID)
                    .from_tbl(PlayerRating::Table)
                    .from_col(PlayerRating::PlayerId)
                    .to_tbl(Player::Table)
                    .to_col(Player::Id)
                    .on_delete(ForeignKeyAction::Cascade)
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_PLAYER_ABILITY_PLAYER_ID)
                    .from_tbl(PlayerAbility::Table)
                    .from_col(PlayerAbility::PlayerId)
                    .to_tbl(Player::Table)
                    .to_col(Player::Id)
                    .on_delete(ForeignKeyAction::Cascade)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(PlayerAbility::Table).to_owned())
            .await?;

        manager
            .drop_table(Table::drop().table(PlayerRating::Table).to_owned())
            .await?;

        manager
            .drop_table(Table::drop().table(PlayerTrait::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum PlayerTrait {
    Table,
    PlayerId,
    LeagueId,
    YacCatchTrait,
    PosCatchTrait,
    HpCatchTrait,
    DropOpenPassTrait,
    FeetInBoundsTrait,
    FightForYardsTrait,
    CoverBallTrait,
    ClutchTrait,
    HighMotorTrait,
    PenaltyTrait,
    BigHitTrait,
    StripBallTrait,
    PlayBallTrait,
    DlBullRushTrait,
    DlSwimTrait,
    DlSpinTrait,
    LbStyleTrait,
    QbStyleTrait,
    SensePressureTrait,
    ThrowAwayTrait,
    TightSpiralTrait,
    ForcePassTrait,
    PredictTrait,
}

#[derive(DeriveIden)]
pub enum PlayerRating {
    Table,
    PlayerId,
    LeagueId,
    SpeedRating,
    AccelRating,
    AgilityRating,
    ChangeOfDirectionRating,
    StrengthRating,
    AwarenessRating,
    JumpRating,
    StaminaRating,
    ToughnessRating,
    InjuryRating,
    CarryRating,
    CatchRating,
    SpecCatchRating,
    CitRating,
    ReleaseRating,
    RouteRunShortRating,
    RouteRunMedRating,
    RouteRunDeepRating,
    ThrowPowerRating,
    ThrowAccRating,
    ThrowAccShortRating,
    ThrowAccMidRating,
    ThrowAccDeepRating,
    ThrowOnRunRating,
    ThrowUnderPressureRating,
    PlayActionRating,
    BreakSackRating,
    BreakTackleRating,
    BcvRating,
    TruckRating,
    StiffArmRating,
    SpinMoveRating,
    JukeMoveRating,
    ElusiveRating,
    RunBlockRating,
    RunBlockPowerRating,
    RunBlockFinesseRating,
    PassBlockRating,
    PassBlockPowerRating,
    PassBlockFinesseRating,
    LeadBlockRating,
    ImpactBlockRating,
    TackleRating,
    HitPowerRating,
    PowerMovesRating,
    FinesseMovesRating,
    BlockShedRating,
    PursuitRating,
    PlayRecRating,
    ManCoverRating,
    ZoneCoverRating,
    PressRating,
    KickPowerRating,
    KickAccRating,
    KickRetRating,
}

#[derive(DeriveIden)]
pub enum PlayerAbility {
    Table,
    Id,
    PlayerId,
    LeagueId,
    SlotIndex,
    Title,
    Description,
    LogoId,
    IsUnlocked,
}
