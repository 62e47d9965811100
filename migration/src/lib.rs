pub use sea_orm_migration::prelude::*;

mod m20250829_000001_league;
mod m20250829_000002_team;
mod m20250829_000003_player;
mod m20250829_000004_player_attributes;
mod m20250829_000005_standing;
mod m20250829_000006_schedule;
mod m20250829_000007_passing_stat;
mod m20250829_000008_rushing_stat;
mod m20250829_000009_receiving_stat;
mod m20250829_000010_defensive_stat;
mod m20250829_000011_kicking_stat;
mod m20250829_000012_punting_stat;
mod m20250829_000013_team_stat;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20250829_000001_league::Migration),
            Box::new(m20250829_000002_team::Migration),
            Box::new(m20250829_000003_player::Migration),
            Box::new(m20250829_000004_player_attributes::Migration),
            Box::new(m20250829_000005_standing::Migration),
            Box::new(m20250829_000006_schedule::Migration),
            Box::new(m20250829_000007_passing_stat::Migration),
            Box::new(m20250829_000008_rushing_stat::Migration),
            Box::new(m20250829_000009_receiving_stat::Migration),
            Box::new(m20250829_000010_defensive_stat::Migration),
            Box::new(m20250829_000011_kicking_stat::Migration),
            Box::new(m20250829_000012_punting_stat::Migration),
            Box::new(m20250829_000013_team_stat::Migration),
        ]
    }
}
