use sea_orm::entity::prelude::*;
use serde::Serialize;

/// Numeric ratings, one row per player, replaced in full on each roster import.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize)]
#[sea_orm(table_name = "player_rating")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub player_id: Uuid,
    pub league_id: i32,
    pub speed_rating: Option<i32>,
    pub accel_rating: Option<i32>,
    pub agility_rating: Option<i32>,
    pub change_of_direction_rating: Option<i32>,
    pub strength_rating: Option<i32>,
    pub awareness_rating: Option<i32>,
    pub jump_rating: Option<i32>,
    pub stamina_rating: Option<i32>,
    pub toughness_rating: Option<i32>,
    pub injury_rating: Option<i32>,
    pub carry_rating: Option<i32>,
    pub catch_rating: Option<i32>,
    pub spec_catch_rating: Option<i32>,
    pub cit_rating: Option<i32>,
    pub release_rating: Option<i32>,
    pub route_run_short_rating: Option<i32>,
    pub route_run_med_rating: Option<i32>,
    pub route_run_deep_rating: Option<i32>,
    pub throw_power_rating: Option<i32>,
    pub throw_acc_rating: Option<i32>,
    pub throw_acc_short_rating: Option<i32>,
    pub throw_acc_mid_rating: Option<i32>,
    pub throw_acc_deep_rating: Option<i32>,
    pub throw_on_run_rating: Option<i32>,
    pub throw_under_pressure_rating: Option<i32>,
    pub play_action_rating: Option<i32>,
    pub break_sack_rating: Option<i32>,
    pub break_tackle_rating: Option<i32>,
    pub bcv_rating: Option<i32>,
    pub truck_rating: Option<i32>,
    pub stiff_arm_rating: Option<i32>,
    pub spin_move_rating: Option<i32>,
    pub juke_move_rating: Option<i32>,
    pub elusive_rating: Option<i32>,
    pub run_block_rating: Option<i32>,
    pub run_block_power_rating: Option<i32>,
    pub run_block_finesse_rating: Option<i32>,
    pub pass_block_rating: Option<i32>,
    pub pass_block_power_rating: Option<i32>,
    pub pass_block_finesse_rating: Option<i32>,
    pub lead_block_rating: Option<i32>,
    pub impact_block_rating: Option<i32>,
    pub tackle_rating: Option<i32>,
    pub hit_power_rating: Option<i32>,
    pub power_moves_rating: Option<i32>,
    pub finesse_moves_rating: Option<i32>,
    pub block_shed_rating: Option<i32>,
    pub pursuit_rating: Option<i32>,
    pub play_rec_rating: Option<i32>,
    pub man_cover_rating: Option<i32>,
    pub zone_cover_rating: Option<i32>,
    pub press_rating: Option<i32>,
    pub kick_power_rating: Option<i32>,
    pub kick_acc_rating: Option<i32>,
    pub kick_ret_rating: Option<i32>,
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
