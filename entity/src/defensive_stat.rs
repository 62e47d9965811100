use sea_orm::entity::prelude::*;
use serde::Serialize;

/// Weekly defensive line, one row per (league, external stat id, week, season).
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize)]
#[sea_orm(table_name = "defensive_stat")]
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
    pub def_total_tackles: Option<i32>,
    pub def_sacks: Option<f32>,
    pub def_ints: Option<i32>,
    pub def_int_return_yds: Option<i32>,
    pub def_forced_fum: Option<i32>,
    pub def_fum_rec: Option<i32>,
    pub def_deflections: Option<i32>,
    pub def_tds: Option<i32>,
    pub def_safeties: Option<i32>,
    pub def_catches_allowed: Option<i32>,
    pub def_pts: Option<i32>,
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
