use sea_orm::entity::prelude::*;
use serde::Serialize;

/// Weekly rushing line, one row per (league, external stat id, week, season).
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize)]
#[sea_orm(table_name = "rushing_stat")]
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
    pub rush_att: Option<i32>,
    pub rush_yds: Option<i32>,
    pub rush_tds: Option<i32>,
    pub rush_fum: Option<i32>,
    pub rush_longest: Option<i32>,
    pub rush_20_plus_yds: Option<i32>,
    pub rush_broken_tackles: Option<i32>,
    pub rush_yds_after_contact: Option<i32>,
    pub rush_yds_per_att: Option<f32>,
    pub rush_yds_per_game: Option<f32>,
    pub rush_to_pct: Option<f32>,
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
