use sea_orm_migration::{prelude::*, schema::*};

static IDX_LEAGUE_USER_ID: &str = "idx-league-user_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(League::Table)
                    .if_not_exists()
                    .col(pk_auto(League::Id))
                    .col(string(League::UserId))
                    .col(string(League::Name))
                    .col(string_uniq(League::Slug))
                    .col(string_len(League::Platform, 8))
                    .col(string_null(League::ExternalLeagueId))
                    .col(timestamp_null(League::LastImportAt))
                    .col(timestamp(League::CreatedAt))
                    .col(timestamp(League::UpdatedAt))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_LEAGUE_USER_ID)
                    .table(League::Table)
                    .col(League::UserId)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(
                Index::drop()
                    .name(IDX_LEAGUE_USER_ID)
                    .table(League::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(League::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum League {
    Table,
    Id,
    UserId,
    Name,
    Slug,
    Platform,
    ExternalLeagueId,
    LastImportAt,
    CreatedAt,
    UpdatedAt,
}
