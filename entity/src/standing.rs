use sea_orm::entity::prelude::*;
use serde::Serialize;

/// One row per (league, external team id, week, season).
///
/// `external_team_id` is the raw game team id string, not the internal team
/// UUID; week-scoped tables keep the raw id so stat imports never depend on
/// the team import having run first.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize)]
#[sea_orm(table_name = "standing")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub league_id: i32,
    pub external_team_id: String,
    pub week_index: i32,
    pub season_index: i32,
    pub stage_index: Option<i32>,
    pub calendar_year: Option<i32>,
    pub rank: Option<i32>,
    pub prev_rank: Option<i32>,
    pub seed: Option<i32>,
    pub total_wins: Option<i32>,
    pub total_losses: Option<i32>,
    pub total_ties: Option<i32>,
    pub win_pct: Option<f32>,
    pub win_loss_streak: Option<i32>,
    pub div_wins: Option<i32>,
    pub div_losses: Option<i32>,
    pub div_ties: Option<i32>,
    pub conf_wins: Option<i32>,
    pub conf_losses: Option<i32>,
    pub conf_ties: Option<i32>,
    pub home_wins: Option<i32>,
    pub home_losses: Option<i32>,
    pub home_ties: Option<i32>,
    pub away_wins: Option<i32>,
    pub away_losses: Option<i32>,
    pub away_ties: Option<i32>,
    pub pts_for: Option<i32>,
    pub pts_against: Option<i32>,
    pub net_pts: Option<i32>,
    pub to_diff: Option<i32>,
    pub div_name: Option<String>,
    pub conference_name: Option<String>,
    pub playoff_status: Option<i32>,
    pub team_ovr: Option<i32>,
    pub off_total_yds: Option<i32>,
    pub off_pass_yds: Option<i32>,
    pub off_rush_yds: Option<i32>,
    pub def_total_yds: Option<i32>,
    pub def_pass_yds: Option<i32>,
    pub def_rush_yds: Option<i32>,
    pub cap_available: Option<i64>,
    pub cap_spent: Option<i64>,
    pub cap_room: Option<i64>,
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
