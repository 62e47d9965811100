use sea_orm::entity::prelude::*;
use serde::Serialize;

/// Behavioral traits, one row per player, replaced in full on each roster import.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize)]
#[sea_orm(table_name = "player_trait")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub player_id: Uuid,
    pub league_id: i32,
    pub yac_catch_trait: Option<i32>,
    pub pos_catch_trait: Option<i32>,
    pub hp_catch_trait: Option<i32>,
    pub drop_open_pass_trait: Option<i32>,
    pub feet_in_bounds_trait: Option<i32>,
    pub fight_for_yards_trait: Option<i32>,
    pub cover_ball_trait: Option<i32>,
    pub clutch_trait: Option<bool>,
    pub high_motor_trait: Option<bool>,
    pub penalty_trait: Option<i32>,
    pub big_hit_trait: Option<bool>,
    pub strip_ball_trait: Option<bool>,
    pub play_ball_trait: Option<i32>,
    pub dl_bull_rush_trait: Option<i32>,
    pub dl_swim_trait: Option<i32>,
    pub dl_spin_trait: Option<i32>,
    pub lb_style_trait: Option<i32>,
    pub qb_style_trait: Option<i32>,
    pub sense_pressure_trait: Option<i32>,
    pub throw_away_trait: Option<bool>,
    pub tight_spiral_trait: Option<bool>,
    pub force_pass_trait: Option<i32>,
    pub predict_trait: Option<bool>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::player::Entity",
        from = "Column::PlayerId",
        to = "super::player::Column::Id"
    )]
    Player,
}

impl Related<super::player::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Player.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
