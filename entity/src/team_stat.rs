use sea_orm::entity::prelude::*;
use serde::Serialize;

/// Weekly team totals, one row per (league, external stat id, week, season).
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize)]
#[sea_orm(table_name = "team_stat")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub league_id: i32,
    pub external_stat_id: String,
    pub week_index: i32,
    pub season_index: i32,
    pub stage_index: Option<i32>,
    pub external_team_id: Option<String>,
    pub total_wins: Option<i32>,
    pub total_losses: Option<i32>,
    pub total_ties: Option<i32>,
    pub seed: Option<i32>,
    pub off_total_yds: Option<i32>,
    pub off_pass_yds: Option<i32>,
    pub off_rush_yds: Option<i32>,
    pub def_total_yds: Option<i32>,
    pub def_pass_yds: Option<i32>,
    pub def_rush_yds: Option<i32>,
    pub to_giveaways: Option<i32>,
    pub to_takeaways: Option<i32>,
    pub to_diff: Option<i32>,
    pub off_pts_per_game: Option<f32>,
    pub def_pts_per_game: Option<f32>,
    pub off_red_zones: Option<i32>,
    pub off_red_zone_tds: Option<i32>,
    pub off_red_zone_pct: Option<f32>,
    pub off_first_downs: Option<i32>,
    pub off_3rd_down_att: Option<i32>,
    pub off_3rd_down_conv: Option<i32>,
    pub off_4th_down_att: Option<i32>,
    pub off_4th_down_conv: Option<i32>,
    pub penalties: Option<i32>,
    pub penalty_yds: Option<i32>,
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
