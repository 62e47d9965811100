use sea_orm::entity::prelude::*;
use serde::Serialize;

/// Weekly kicking line, one row per (league, external stat id, week, season).
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize)]
#[sea_orm(table_name = "kicking_stat")]
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
    pub fg_att: Option<i32>,
    pub fg_made: Option<i32>,
    pub fg_longest: Option<i32>,
    pub fg_50_plus_att: Option<i32>,
    pub fg_50_plus_made: Option<i32>,
    pub xp_att: Option<i32>,
    pub xp_made: Option<i32>,
    pub kickoff_att: Option<i32>,
    pub kickoff_tbs: Option<i32>,
    pub kick_pts: Option<i32>,
    pub fg_comp_pct: Option<f32>,
    pub xp_comp_pct: Option<f32>,
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
