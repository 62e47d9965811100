use sea_orm::entity::prelude::*;
use serde::Serialize;

/// Weekly passing line, one row per (league, external stat id, week, season).
/// Derived fields (completion pct, passer rating) are stored verbatim from
/// the game export, never recomputed.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize)]
#[sea_orm(table_name = "passing_stat")]
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
    pub pass_att: Option<i32>,
    pub pass_comp: Option<i32>,
    pub pass_yds: Option<i32>,
    pub pass_tds: Option<i32>,
    pub pass_ints: Option<i32>,
    pub pass_sacks: Option<i32>,
    pub pass_longest: Option<i32>,
    pub passer_rating: Option<f32>,
    pub pass_comp_pct: Option<f32>,
    pub pass_yds_per_att: Option<f32>,
    pub pass_yds_per_game: Option<f32>,
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
