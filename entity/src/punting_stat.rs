use sea_orm::entity::prelude::*;
use serde::Serialize;

/// Weekly punting line, one row per (league, external stat id, week, season).
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize)]
#[sea_orm(table_name = "punting_stat")]
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
    pub punt_att: Option<i32>,
    pub punt_yds: Option<i32>,
    pub punt_longest: Option<i32>,
    pub punts_in_20: Option<i32>,
    pub punt_tbs: Option<i32>,
    pub punts_blocked: Option<i32>,
    pub punt_net_yds: Option<i32>,
    pub punt_yds_per_att: Option<f32>,
    pub punt_net_yds_per_att: Option<f32>,
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
