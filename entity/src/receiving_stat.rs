use sea_orm::entity::prelude::*;
use serde::Serialize;

/// Weekly receiving line, one row per (league, external stat id, week, season).
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize)]
#[sea_orm(table_name = "receiving_stat")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub league_id: i32,
    pub external_stat_id: String,
    pub week_index: i32,
    pub season_index: i32,
    pub stage_index: Option<i32>,
    pub external_team_id: Option<String>,
    pub external_roster_id: Option<String>,
    pub full_name: Option<String>,
    pub rec_catches: Option<i32>,
    pub rec_yds: Option<i32>,
    pub rec_tds: Option<i32>,
    pub rec_drops: Option<i32>,
    pub rec_longest: Option<i32>,
    pub rec_yds_after_catch: Option<i32>,
    pub rec_yds_per_catch: Option<f32>,
    pub rec_yac_per_catch: Option<f32>,
    pub rec_catch_pct: Option<f32>,
    pub rec_yds_per_game: Option<f32>,
    pub rec_to_pct: Option<f32>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::league::Entity",
        from = "Column::LeagueId",
        to = "super::league::Column::Id"
    )]
    League,
}

impl Related<super::league::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::League.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
