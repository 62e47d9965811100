//! Typed views of companion-app export records.
//!
//! Field names mirror the game's JSON keys. The default rename is camelCase;
//! keys the game capitalizes oddly (`fGAtt`, `yACCatchTrait`, `tODiff`) get
//! explicit renames. Every field is optional and coerced leniently via
//! [`crate::import::de`]; only structural problems fail a record.

use serde::Deserialize;

use crate::import::de;

/// One team from `leagueTeamInfoList`.
#[derive(Deserialize, Default, Debug)]
#[serde(default, rename_all = "camelCase")]
pub struct TeamRecord {
    #[serde(deserialize_with = "de::opt_string")]
    pub team_id: Option<String>,
    #[serde(deserialize_with = "de::opt_string")]
    pub city_name: Option<String>,
    #[serde(deserialize_with = "de::opt_string")]
    pub display_name: Option<String>,
    #[serde(deserialize_with = "de::opt_string")]
    pub nick_name: Option<String>,
    #[serde(deserialize_with = "de::opt_string")]
    pub abbr_name: Option<String>,
    #[serde(deserialize_with = "de::opt_string")]
    pub div_name: Option<String>,
    #[serde(deserialize_with = "de::opt_string")]
    pub conference_name: Option<String>,
    #[serde(deserialize_with = "de::opt_i32")]
    pub ovr_rating: Option<i32>,
    #[serde(deserialize_with = "de::opt_i32")]
    pub off_scheme: Option<i32>,
    #[serde(deserialize_with = "de::opt_i32")]
    pub def_scheme: Option<i32>,
    #[serde(deserialize_with = "de::opt_i32")]
    pub primary_color: Option<i32>,
    #[serde(deserialize_with = "de::opt_i32")]
    pub secondary_color: Option<i32>,
    #[serde(deserialize_with = "de::opt_string")]
    pub user_name: Option<String>,
    #[serde(deserialize_with = "de::opt_i32")]
    pub injury_count: Option<i32>,
}

/// One signature-ability slot on a roster record.
#[derive(Deserialize, Default, Debug)]
#[serde(default, rename_all = "camelCase")]
pub struct AbilitySlotRecord {
    #[serde(deserialize_with = "de::opt_i32")]
    pub slot_index: Option<i32>,
    #[serde(deserialize_with = "de::opt_bool")]
    pub is_empty: Option<bool>,
    pub signature_ability: Option<SignatureAbilityRecord>,
}

#[derive(Deserialize, Default, Debug)]
#[serde(default, rename_all = "camelCase")]
pub struct SignatureAbilityRecord {
    #[serde(deserialize_with = "de::opt_string")]
    pub signature_title: Option<String>,
    #[serde(deserialize_with = "de::opt_string")]
    pub signature_description: Option<String>,
    #[serde(deserialize_with = "de::opt_i32")]
    pub signature_logo_id: Option<i32>,
    #[serde(deserialize_with = "de::opt_bool")]
    pub is_unlocked: Option<bool>,
}

/// One roster entry from `rosterInfoList`.
///
/// The export flattens descriptive fields, traits, and ratings onto one
/// record; the roster transformer fans it out into player, trait, rating,
/// and ability rows.
#[derive(Deserialize, Default, Debug)]
#[serde(default, rename_all = "camelCase")]
pub struct PlayerRecord {
    #[serde(deserialize_with = "de::opt_string")]
    pub roster_id: Option<String>,
    #[serde(deserialize_with = "de::opt_string")]
    pub team_id: Option<String>,
    #[serde(deserialize_with = "de::opt_string")]
    pub first_name: Option<String>,
    #[serde(deserialize_with = "de::opt_string")]
    pub last_name: Option<String>,
    #[serde(deserialize_with = "de::opt_string")]
    pub position: Option<String>,
    #[serde(deserialize_with = "de::opt_i32")]
    pub jersey_num: Option<i32>,
    #[serde(deserialize_with = "de::opt_i32")]
    pub age: Option<i32>,
    #[serde(deserialize_with = "de::opt_i32")]
    pub height: Option<i32>,
    #[serde(deserialize_with = "de::opt_i32")]
    pub weight: Option<i32>,
    #[serde(deserialize_with = "de::opt_i32")]
    pub birth_day: Option<i32>,
    #[serde(deserialize_with = "de::opt_i32")]
    pub birth_month: Option<i32>,
    #[serde(deserialize_with = "de::opt_i32")]
    pub birth_year: Option<i32>,
    #[serde(deserialize_with = "de::opt_i32")]
    pub years_pro: Option<i32>,
    #[serde(deserialize_with = "de::opt_i32")]
    pub rookie_year: Option<i32>,
    #[serde(deserialize_with = "de::opt_string")]
    pub college: Option<String>,
    #[serde(deserialize_with = "de::opt_string")]
    pub home_town: Option<String>,
    #[serde(deserialize_with = "de::opt_i32")]
    pub home_state: Option<i32>,
    #[serde(deserialize_with = "de::opt_i32")]
    pub dev_trait: Option<i32>,
    #[serde(deserialize_with = "de::opt_i32")]
    pub player_best_ovr: Option<i32>,
    #[serde(deserialize_with = "de::opt_i32")]
    pub player_scheme_ovr: Option<i32>,
    #[serde(deserialize_with = "de::opt_i32")]
    pub team_scheme_ovr: Option<i32>,
    #[serde(deserialize_with = "de::opt_i32")]
    pub legacy_score: Option<i32>,
    #[serde(deserialize_with = "de::opt_i32")]
    pub experience_points: Option<i32>,
    #[serde(deserialize_with = "de::opt_i32")]
    pub skill_points: Option<i32>,
    #[serde(deserialize_with = "de::opt_i64")]
    pub contract_salary: Option<i64>,
    #[serde(deserialize_with = "de::opt_i64")]
    pub contract_bonus: Option<i64>,
    #[serde(deserialize_with = "de::opt_i32")]
    pub contract_length: Option<i32>,
    #[serde(deserialize_with = "de::opt_i32")]
    pub contract_years_left: Option<i32>,
    #[serde(deserialize_with = "de::opt_i64")]
    pub cap_hit: Option<i64>,
    #[serde(deserialize_with = "de::opt_i64")]
    pub cap_release_penalty: Option<i64>,
    #[serde(deserialize_with = "de::opt_i64")]
    pub cap_release_net_savings: Option<i64>,
    #[serde(deserialize_with = "de::opt_i64")]
    pub desired_salary: Option<i64>,
    #[serde(deserialize_with = "de::opt_i64")]
    pub desired_bonus: Option<i64>,
    #[serde(deserialize_with = "de::opt_i32")]
    pub desired_length: Option<i32>,
    #[serde(deserialize_with = "de::opt_i32")]
    pub re_sign_status: Option<i32>,
    #[serde(deserialize_with = "de::opt_i32")]
    pub draft_round: Option<i32>,
    #[serde(deserialize_with = "de::opt_i32")]
    pub draft_pick: Option<i32>,
    #[serde(deserialize_with = "de::opt_i32")]
    pub injury_type: Option<i32>,
    #[serde(deserialize_with = "de::opt_i32")]
    pub injury_length: Option<i32>,
    #[serde(deserialize_with = "de::opt_bool")]
    pub is_free_agent: Option<bool>,
    #[serde(rename = "isOnIR", deserialize_with = "de::opt_bool")]
    pub is_on_ir: Option<bool>,
    #[serde(deserialize_with = "de::opt_bool")]
    pub is_on_practice_squad: Option<bool>,
    #[serde(deserialize_with = "de::opt_bool")]
    pub is_active: Option<bool>,
    #[serde(deserialize_with = "de::opt_i32")]
    pub portrait_id: Option<i32>,
    #[serde(deserialize_with = "de::opt_i64")]
    pub presentation_id: Option<i64>,
    #[serde(deserialize_with = "de::opt_i32")]
    pub scheme: Option<i32>,
    #[serde(deserialize_with = "de::opt_i32")]
    pub durability_grade: Option<i32>,
    #[serde(deserialize_with = "de::opt_i32")]
    pub intangible_grade: Option<i32>,
    #[serde(deserialize_with = "de::opt_i32")]
    pub physical_grade: Option<i32>,
    #[serde(deserialize_with = "de::opt_i32")]
    pub production_grade: Option<i32>,
    #[serde(deserialize_with = "de::opt_i32")]
    pub size_grade: Option<i32>,

    // Traits, flattened on the roster record by the export.
    #[serde(rename = "yACCatchTrait", deserialize_with = "de::opt_i32")]
    pub yac_catch_trait: Option<i32>,
    #[serde(deserialize_with = "de::opt_i32")]
    pub pos_catch_trait: Option<i32>,
    #[serde(rename = "hPCatchTrait", deserialize_with = "de::opt_i32")]
    pub hp_catch_trait: Option<i32>,
    #[serde(deserialize_with = "de::opt_i32")]
    pub drop_open_pass_trait: Option<i32>,
    #[serde(deserialize_with = "de::opt_i32")]
    pub feet_in_bounds_trait: Option<i32>,
    #[serde(deserialize_with = "de::opt_i32")]
    pub fight_for_yards_trait: Option<i32>,
    #[serde(deserialize_with = "de::opt_i32")]
    pub cover_ball_trait: Option<i32>,
    #[serde(deserialize_with = "de::opt_bool")]
    pub clutch_trait: Option<bool>,
    #[serde(deserialize_with = "de::opt_bool")]
    pub high_motor_trait: Option<bool>,
    #[serde(deserialize_with = "de::opt_i32")]
    pub penalty_trait: Option<i32>,
    #[serde(deserialize_with = "de::opt_bool")]
    pub big_hit_trait: Option<bool>,
    #[serde(deserialize_with = "de::opt_bool")]
    pub strip_ball_trait: Option<bool>,
    #[serde(deserialize_with = "de::opt_i32")]
    pub play_ball_trait: Option<i32>,
    #[serde(rename = "dLBullRushTrait", deserialize_with = "de::opt_i32")]
    pub dl_bull_rush_trait: Option<i32>,
    #[serde(rename = "dLSwimTrait", deserialize_with = "de::opt_i32")]
    pub dl_swim_trait: Option<i32>,
    #[serde(rename = "dLSpinTrait", deserialize_with = "de::opt_i32")]
    pub dl_spin_trait: Option<i32>,
    #[serde(rename = "lBStyleTrait", deserialize_with = "de::opt_i32")]
    pub lb_style_trait: Option<i32>,
    #[serde(rename = "qBStyleTrait", deserialize_with = "de::opt_i32")]
    pub qb_style_trait: Option<i32>,
    #[serde(deserialize_with = "de::opt_i32")]
    pub sense_pressure_trait: Option<i32>,
    #[serde(deserialize_with = "de::opt_bool")]
    pub throw_away_trait: Option<bool>,
    #[serde(deserialize_with = "de::opt_bool")]
    pub tight_spiral_trait: Option<bool>,
    #[serde(deserialize_with = "de::opt_i32")]
    pub force_pass_trait: Option<i32>,
    #[serde(deserialize_with = "de::opt_bool")]
    pub predict_trait: Option<bool>,

    // Ratings, also flattened.
    #[serde(deserialize_with = "de::opt_i32")]
    pub speed_rating: Option<i32>,
    #[serde(deserialize_with = "de::opt_i32")]
    pub accel_rating: Option<i32>,
    #[serde(deserialize_with = "de::opt_i32")]
    pub agility_rating: Option<i32>,
    #[serde(deserialize_with = "de::opt_i32")]
    pub change_of_direction_rating: Option<i32>,
    #[serde(deserialize_with = "de::opt_i32")]
    pub strength_rating: Option<i32>,
    #[serde(deserialize_with = "de::opt_i32")]
    pub awareness_rating: Option<i32>,
    #[serde(deserialize_with = "de::opt_i32")]
    pub jump_rating: Option<i32>,
    #[serde(deserialize_with = "de::opt_i32")]
    pub stamina_rating: Option<i32>,
    #[serde(deserialize_with = "de::opt_i32")]
    pub toughness_rating: Option<i32>,
    #[serde(deserialize_with = "de::opt_i32")]
    pub injury_rating: Option<i32>,
    #[serde(deserialize_with = "de::opt_i32")]
    pub carry_rating: Option<i32>,
    #[serde(deserialize_with = "de::opt_i32")]
    pub catch_rating: Option<i32>,
    #[serde(deserialize_with = "de::opt_i32")]
    pub spec_catch_rating: Option<i32>,
    #[serde(rename = "cITRating", deserialize_with = "de::opt_i32")]
    pub cit_rating: Option<i32>,
    #[serde(deserialize_with = "de::opt_i32")]
    pub release_rating: Option<i32>,
    #[serde(deserialize_with = "de::opt_i32")]
    pub route_run_short_rating: Option<i32>,
    #[serde(deserialize_with = "de::opt_i32")]
    pub route_run_med_rating: Option<i32>,
    #[serde(deserialize_with = "de::opt_i32")]
    pub route_run_deep_rating: Option<i32>,
    #[serde(deserialize_with = "de::opt_i32")]
    pub throw_power_rating: Option<i32>,
    #[serde(deserialize_with = "de::opt_i32")]
    pub throw_acc_rating: Option<i32>,
    #[serde(deserialize_with = "de::opt_i32")]
    pub throw_acc_short_rating: Option<i32>,
    #[serde(deserialize_with = "de::opt_i32")]
    pub throw_acc_mid_rating: Option<i32>,
    #[serde(deserialize_with = "de::opt_i32")]
    pub throw_acc_deep_rating: Option<i32>,
    #[serde(deserialize_with = "de::opt_i32")]
    pub throw_on_run_rating: Option<i32>,
    #[serde(deserialize_with = "de::opt_i32")]
    pub throw_under_pressure_rating: Option<i32>,
    #[serde(deserialize_with = "de::opt_i32")]
    pub play_action_rating: Option<i32>,
    #[serde(deserialize_with = "de::opt_i32")]
    pub break_sack_rating: Option<i32>,
    #[serde(deserialize_with = "de::opt_i32")]
    pub break_tackle_rating: Option<i32>,
    #[serde(rename = "bCVRating", deserialize_with = "de::opt_i32")]
    pub bcv_rating: Option<i32>,
    #[serde(deserialize_with = "de::opt_i32")]
    pub truck_rating: Option<i32>,
    #[serde(deserialize_with = "de::opt_i32")]
    pub stiff_arm_rating: Option<i32>,
    #[serde(deserialize_with = "de::opt_i32")]
    pub spin_move_rating: Option<i32>,
    #[serde(deserialize_with = "de::opt_i32")]
    pub juke_move_rating: Option<i32>,
    #[serde(deserialize_with = "de::opt_i32")]
    pub elusive_rating: Option<i32>,
    #[serde(deserialize_with = "de::opt_i32")]
    pub run_block_rating: Option<i32>,
    #[serde(deserialize_with = "de::opt_i32")]
    pub run_block_power_rating: Option<i32>,
    #[serde(deserialize_with = "de::opt_i32")]
    pub run_block_finesse_rating: Option<i32>,
    #[serde(deserialize_with = "de::opt_i32")]
    pub pass_block_rating: Option<i32>,
    #[serde(deserialize_with = "de::opt_i32")]
    pub pass_block_power_rating: Option<i32>,
    #[serde(deserialize_with = "de::opt_i32")]
    pub pass_block_finesse_rating: Option<i32>,
    #[serde(deserialize_with = "de::opt_i32")]
    pub lead_block_rating: Option<i32>,
    #[serde(deserialize_with = "de::opt_i32")]
    pub impact_block_rating: Option<i32>,
    #[serde(deserialize_with = "de::opt_i32")]
    pub tackle_rating: Option<i32>,
    #[serde(deserialize_with = "de::opt_i32")]
    pub hit_power_rating: Option<i32>,
    #[serde(deserialize_with = "de::opt_i32")]
    pub power_moves_rating: Option<i32>,
    #[serde(deserialize_with = "de::opt_i32")]
    pub finesse_moves_rating: Option<i32>,
    #[serde(deserialize_with = "de::opt_i32")]
    pub block_shed_rating: Option<i32>,
    #[serde(deserialize_with = "de::opt_i32")]
    pub pursuit_rating: Option<i32>,
    #[serde(deserialize_with = "de::opt_i32")]
    pub play_rec_rating: Option<i32>,
    #[serde(deserialize_with = "de::opt_i32")]
    pub man_cover_rating: Option<i32>,
    #[serde(deserialize_with = "de::opt_i32")]
    pub zone_cover_rating: Option<i32>,
    #[serde(deserialize_with = "de::opt_i32")]
    pub press_rating: Option<i32>,
    #[serde(deserialize_with = "de::opt_i32")]
    pub kick_power_rating: Option<i32>,
    #[serde(deserialize_with = "de::opt_i32")]
    pub kick_acc_rating: Option<i32>,
    #[serde(deserialize_with = "de::opt_i32")]
    pub kick_ret_rating: Option<i32>,

    pub signature_slot_list: Option<Vec<AbilitySlotRecord>>,
}

/// One team standing from `teamStandingInfoList`.
#[derive(Deserialize, Default, Debug)]
#[serde(default, rename_all = "camelCase")]
pub struct StandingRecord {
    #[serde(deserialize_with = "de::opt_string")]
    pub team_id: Option<String>,
    #[serde(deserialize_with = "de::opt_i32")]
    pub week_index: Option<i32>,
    #[serde(deserialize_with = "de::opt_i32")]
    pub season_index: Option<i32>,
    #[serde(deserialize_with = "de::opt_i32")]
    pub stage_index: Option<i32>,
    #[serde(deserialize_with = "de::opt_i32")]
    pub calendar_year: Option<i32>,
    #[serde(deserialize_with = "de::opt_i32")]
    pub rank: Option<i32>,
    #[serde(deserialize_with = "de::opt_i32")]
    pub prev_rank: Option<i32>,
    #[serde(deserialize_with = "de::opt_i32")]
    pub seed: Option<i32>,
    #[serde(deserialize_with = "de::opt_i32")]
    pub total_wins: Option<i32>,
    #[serde(deserialize_with = "de::opt_i32")]
    pub total_losses: Option<i32>,
    #[serde(deserialize_with = "de::opt_i32")]
    pub total_ties: Option<i32>,
    #[serde(deserialize_with = "de::opt_f32")]
    pub win_pct: Option<f32>,
    #[serde(deserialize_with = "de::opt_i32")]
    pub win_loss_streak: Option<i32>,
    #[serde(deserialize_with = "de::opt_i32")]
    pub div_wins: Option<i32>,
    #[serde(deserialize_with = "de::opt_i32")]
    pub div_losses: Option<i32>,
    #[serde(deserialize_with = "de::opt_i32")]
    pub div_ties: Option<i32>,
    #[serde(deserialize_with = "de::opt_i32")]
    pub conf_wins: Option<i32>,
    #[serde(deserialize_with = "de::opt_i32")]
    pub conf_losses: Option<i32>,
    #[serde(deserialize_with = "de::opt_i32")]
    pub conf_ties: Option<i32>,
    #[serde(deserialize_with = "de::opt_i32")]
    pub home_wins: Option<i32>,
    #[serde(deserialize_with = "de::opt_i32")]
    pub home_losses: Option<i32>,
    #[serde(deserialize_with = "de::opt_i32")]
    pub home_ties: Option<i32>,
    #[serde(deserialize_with = "de::opt_i32")]
    pub away_wins: Option<i32>,
    #[serde(deserialize_with = "de::opt_i32")]
    pub away_losses: Option<i32>,
    #[serde(deserialize_with = "de::opt_i32")]
    pub away_ties: Option<i32>,
    #[serde(deserialize_with = "de::opt_i32")]
    pub pts_for: Option<i32>,
    #[serde(deserialize_with = "de::opt_i32")]
    pub pts_against: Option<i32>,
    #[serde(deserialize_with = "de::opt_i32")]
    pub net_pts: Option<i32>,
    #[serde(rename = "tODiff", deserialize_with = "de::opt_i32")]
    pub to_diff: Option<i32>,
    #[serde(deserialize_with = "de::opt_string")]
    pub div_name: Option<String>,
    #[serde(deserialize_with = "de::opt_string")]
    pub conference_name: Option<String>,
    #[serde(deserialize_with = "de::opt_i32")]
    pub playoff_status: Option<i32>,
    #[serde(deserialize_with = "de::opt_i32")]
    pub team_ovr: Option<i32>,
    #[serde(deserialize_with = "de::opt_i32")]
    pub off_total_yds: Option<i32>,
    #[serde(deserialize_with = "de::opt_i32")]
    pub off_pass_yds: Option<i32>,
    #[serde(deserialize_with = "de::opt_i32")]
    pub off_rush_yds: Option<i32>,
    #[serde(deserialize_with = "de::opt_i32")]
    pub def_total_yds: Option<i32>,
    #[serde(deserialize_with = "de::opt_i32")]
    pub def_pass_yds: Option<i32>,
    #[serde(deserialize_with = "de::opt_i32")]
    pub def_rush_yds: Option<i32>,
    #[serde(deserialize_with = "de::opt_i64")]
    pub cap_available: Option<i64>,
    #[serde(deserialize_with = "de::opt_i64")]
    pub cap_spent: Option<i64>,
    #[serde(deserialize_with = "de::opt_i64")]
    pub cap_room: Option<i64>,
}

/// One matchup from `gameScheduleInfoList`.
#[derive(Deserialize, Default, Debug)]
#[serde(default, rename_all = "camelCase")]
pub struct ScheduleRecord {
    #[serde(deserialize_with = "de::opt_string")]
    pub schedule_id: Option<String>,
    #[serde(deserialize_with = "de::opt_i32")]
    pub week_index: Option<i32>,
    #[serde(deserialize_with = "de::opt_i32")]
    pub season_index: Option<i32>,
    #[serde(deserialize_with = "de::opt_i32")]
    pub stage_index: Option<i32>,
    #[serde(deserialize_with = "de::opt_string")]
    pub home_team_id: Option<String>,
    #[serde(deserialize_with = "de::opt_string")]
    pub away_team_id: Option<String>,
    #[serde(deserialize_with = "de::opt_i32")]
    pub home_score: Option<i32>,
    #[serde(deserialize_with = "de::opt_i32")]
    pub away_score: Option<i32>,
    #[serde(deserialize_with = "de::opt_i32")]
    pub status: Option<i32>,
    #[serde(deserialize_with = "de::opt_bool")]
    pub is_game_of_the_week: Option<bool>,
}

/// One passing line from `passingStatInfoList`.
#[derive(Deserialize, Default, Debug)]
#[serde(default, rename_all = "camelCase")]
pub struct PassingStatRecord {
    #[serde(deserialize_with = "de::opt_string")]
    pub stat_id: Option<String>,
    #[serde(deserialize_with = "de::opt_i32")]
    pub week_index: Option<i32>,
    #[serde(deserialize_with = "de::opt_i32")]
    pub season_index: Option<i32>,
    #[serde(deserialize_with = "de::opt_i32")]
    pub stage_index: Option<i32>,
    #[serde(deserialize_with = "de::opt_string")]
    pub team_id: Option<String>,
    #[serde(deserialize_with = "de::opt_string")]
    pub roster_id: Option<String>,
    #[serde(deserialize_with = "de::opt_string")]
    pub full_name: Option<String>,
    #[serde(deserialize_with = "de::opt_i32")]
    pub pass_att: Option<i32>,
    #[serde(deserialize_with = "de::opt_i32")]
    pub pass_comp: Option<i32>,
    #[serde(deserialize_with = "de::opt_i32")]
    pub pass_yds: Option<i32>,
    #[serde(rename = "passTDs", deserialize_with = "de::opt_i32")]
    pub pass_tds: Option<i32>,
    #[serde(deserialize_with = "de::opt_i32")]
    pub pass_ints: Option<i32>,
    #[serde(deserialize_with = "de::opt_i32")]
    pub pass_sacks: Option<i32>,
    #[serde(deserialize_with = "de::opt_i32")]
    pub pass_longest: Option<i32>,
    #[serde(deserialize_with = "de::opt_f32")]
    pub passer_rating: Option<f32>,
    #[serde(deserialize_with = "de::opt_f32")]
    pub pass_comp_pct: Option<f32>,
    #[serde(deserialize_with = "de::opt_f32")]
    pub pass_yds_per_att: Option<f32>,
    #[serde(deserialize_with = "de::opt_f32")]
    pub pass_yds_per_game: Option<f32>,
}

/// One rushing line from `rushingStatInfoList`.
#[derive(Deserialize, Default, Debug)]
#[serde(default, rename_all = "camelCase")]
pub struct RushingStatRecord {
    #[serde(deserialize_with = "de::opt_string")]
    pub stat_id: Option<String>,
    #[serde(deserialize_with = "de::opt_i32")]
    pub week_index: Option<i32>,
    #[serde(deserialize_with = "de::opt_i32")]
    pub season_index: Option<i32>,
    #[serde(deserialize_with = "de::opt_i32")]
    pub stage_index: Option<i32>,
    #[serde(deserialize_with = "de::opt_string")]
    pub team_id: Option<String>,
    #[serde(deserialize_with = "de::opt_string")]
    pub roster_id: Option<String>,
    #[serde(deserialize_with = "de::opt_string")]
    pub full_name: Option<String>,
    #[serde(deserialize_with = "de::opt_i32")]
    pub rush_att: Option<i32>,
    #[serde(deserialize_with = "de::opt_i32")]
    pub rush_yds: Option<i32>,
    #[serde(rename = "rushTDs", deserialize_with = "de::opt_i32")]
    pub rush_tds: Option<i32>,
    #[serde(deserialize_with = "de::opt_i32")]
    pub rush_fum: Option<i32>,
    #[serde(deserialize_with = "de::opt_i32")]
    pub rush_longest: Option<i32>,
    #[serde(rename = "rush20PlusYds", deserialize_with = "de::opt_i32")]
    pub rush_20_plus_yds: Option<i32>,
    #[serde(deserialize_with = "de::opt_i32")]
    pub rush_broken_tackles: Option<i32>,
    #[serde(deserialize_with = "de::opt_i32")]
    pub rush_yds_after_contact: Option<i32>,
    #[serde(deserialize_with = "de::opt_f32")]
    pub rush_yds_per_att: Option<f32>,
    #[serde(deserialize_with = "de::opt_f32")]
    pub rush_yds_per_game: Option<f32>,
    #[serde(rename = "rushTOPct", deserialize_with = "de::opt_f32")]
    pub rush_to_pct: Option<f32>,
}

/// One receiving line from `receivingStatInfoList`.
#[derive(Deserialize, Default, Debug)]
#[serde(default, rename_all = "camelCase")]
pub struct ReceivingStatRecord {
    #[serde(deserialize_with = "de::opt_string")]
    pub stat_id: Option<String>,
    #[serde(deserialize_with = "de::opt_i32")]
    pub week_index: Option<i32>,
    #[serde(deserialize_with = "de::opt_i32")]
    pub season_index: Option<i32>,
    #[serde(deserialize_with = "de::opt_i32")]
    pub stage_index: Option<i32>,
    #[serde(deserialize_with = "de::opt_string")]
    pub team_id: Option<String>,
    #[serde(deserialize_with = "de::opt_string")]
    pub roster_id: Option<String>,
    #[serde(deserialize_with = "de::opt_string")]
    pub full_name: Option<String>,
    #[serde(deserialize_with = "de::opt_i32")]
    pub rec_catches: Option<i32>,
    #[serde(deserialize_with = "de::opt_i32")]
    pub rec_yds: Option<i32>,
    #[serde(rename = "recTDs", deserialize_with = "de::opt_i32")]
    pub rec_tds: Option<i32>,
    #[serde(deserialize_with = "de::opt_i32")]
    pub rec_drops: Option<i32>,
    #[serde(deserialize_with = "de::opt_i32")]
    pub rec_longest: Option<i32>,
    #[serde(deserialize_with = "de::opt_i32")]
    pub rec_yds_after_catch: Option<i32>,
    #[serde(deserialize_with = "de::opt_f32")]
    pub rec_yds_per_catch: Option<f32>,
    #[serde(rename = "recYACPerCatch", deserialize_with = "de::opt_f32")]
    pub rec_yac_per_catch: Option<f32>,
    #[serde(deserialize_with = "de::opt_f32")]
    pub rec_catch_pct: Option<f32>,
    #[serde(deserialize_with = "de::opt_f32")]
    pub rec_yds_per_game: Option<f32>,
    #[serde(rename = "recTOPct", deserialize_with = "de::opt_f32")]
    pub rec_to_pct: Option<f32>,
}

/// One defensive line from `defensiveStatInfoList`.
#[derive(Deserialize, Default, Debug)]
#[serde(default, rename_all = "camelCase")]
pub struct DefensiveStatRecord {
    #[serde(deserialize_with = "de::opt_string")]
    pub stat_id: Option<String>,
    #[serde(deserialize_with = "de::opt_i32")]
    pub week_index: Option<i32>,
    #[serde(deserialize_with = "de::opt_i32")]
    pub season_index: Option<i32>,
    #[serde(deserialize_with = "de::opt_i32")]
    pub stage_index: Option<i32>,
    #[serde(deserialize_with = "de::opt_string")]
    pub team_id: Option<String>,
    #[serde(deserialize_with = "de::opt_string")]
    pub roster_id: Option<String>,
    #[serde(deserialize_with = "de::opt_string")]
    pub full_name: Option<String>,
    #[serde(deserialize_with = "de::opt_i32")]
    pub def_total_tackles: Option<i32>,
    #[serde(deserialize_with = "de::opt_f32")]
    pub def_sacks: Option<f32>,
    #[serde(deserialize_with = "de::opt_i32")]
    pub def_ints: Option<i32>,
    #[serde(deserialize_with = "de::opt_i32")]
    pub def_int_return_yds: Option<i32>,
    #[serde(deserialize_with = "de::opt_i32")]
    pub def_forced_fum: Option<i32>,
    #[serde(deserialize_with = "de::opt_i32")]
    pub def_fum_rec: Option<i32>,
    #[serde(deserialize_with = "de::opt_i32")]
    pub def_deflections: Option<i32>,
    #[serde(rename = "defTDs", deserialize_with = "de::opt_i32")]
    pub def_tds: Option<i32>,
    #[serde(deserialize_with = "de::opt_i32")]
    pub def_safeties: Option<i32>,
    #[serde(deserialize_with = "de::opt_i32")]
    pub def_catches_allowed: Option<i32>,
    #[serde(deserialize_with = "de::opt_i32")]
    pub def_pts: Option<i32>,
}

/// One kicking line from `kickingStatInfoList`.
#[derive(Deserialize, Default, Debug)]
#[serde(default, rename_all = "camelCase")]
pub struct KickingStatRecord {
    #[serde(deserialize_with = "de::opt_string")]
    pub stat_id: Option<String>,
    #[serde(deserialize_with = "de::opt_i32")]
    pub week_index: Option<i32>,
    #[serde(deserialize_with = "de::opt_i32")]
    pub season_index: Option<i32>,
    #[serde(deserialize_with = "de::opt_i32")]
    pub stage_index: Option<i32>,
    #[serde(deserialize_with = "de::opt_string")]
    pub team_id: Option<String>,
    #[serde(deserialize_with = "de::opt_string")]
    pub roster_id: Option<String>,
    #[serde(deserialize_with = "de::opt_string")]
    pub full_name: Option<String>,
    #[serde(rename = "fGAtt", deserialize_with = "de::opt_i32")]
    pub fg_att: Option<i32>,
    #[serde(rename = "fGMade", deserialize_with = "de::opt_i32")]
    pub fg_made: Option<i32>,
    #[serde(rename = "fGLongest", deserialize_with = "de::opt_i32")]
    pub fg_longest: Option<i32>,
    #[serde(rename = "fG50PlusAtt", deserialize_with = "de::opt_i32")]
    pub fg_50_plus_att: Option<i32>,
    #[serde(rename = "fG50PlusMade", deserialize_with = "de::opt_i32")]
    pub fg_50_plus_made: Option<i32>,
    #[serde(rename = "xPAtt", deserialize_with = "de::opt_i32")]
    pub xp_att: Option<i32>,
    #[serde(rename = "xPMade", deserialize_with = "de::opt_i32")]
    pub xp_made: Option<i32>,
    #[serde(deserialize_with = "de::opt_i32")]
    pub kickoff_att: Option<i32>,
    #[serde(rename = "kickoffTBs", deserialize_with = "de::opt_i32")]
    pub kickoff_tbs: Option<i32>,
    #[serde(deserialize_with = "de::opt_i32")]
    pub kick_pts: Option<i32>,
    #[serde(rename = "fGCompPct", deserialize_with = "de::opt_f32")]
    pub fg_comp_pct: Option<f32>,
    #[serde(rename = "xPCompPct", deserialize_with = "de::opt_f32")]
    pub xp_comp_pct: Option<f32>,
}

/// One punting line from `puntingStatInfoList`.
#[derive(Deserialize, Default, Debug)]
#[serde(default, rename_all = "camelCase")]
pub struct PuntingStatRecord {
    #[serde(deserialize_with = "de::opt_string")]
    pub stat_id: Option<String>,
    #[serde(deserialize_with = "de::opt_i32")]
    pub week_index: Option<i32>,
    #[serde(deserialize_with = "de::opt_i32")]
    pub season_index: Option<i32>,
    #[serde(deserialize_with = "de::opt_i32")]
    pub stage_index: Option<i32>,
    #[serde(deserialize_with = "de::opt_string")]
    pub team_id: Option<String>,
    #[serde(deserialize_with = "de::opt_string")]
    pub roster_id: Option<String>,
    #[serde(deserialize_with = "de::opt_string")]
    pub full_name: Option<String>,
    #[serde(deserialize_with = "de::opt_i32")]
    pub punt_att: Option<i32>,
    #[serde(deserialize_with = "de::opt_i32")]
    pub punt_yds: Option<i32>,
    #[serde(deserialize_with = "de::opt_i32")]
    pub punt_longest: Option<i32>,
    #[serde(deserialize_with = "de::opt_i32")]
    pub punts_in_20: Option<i32>,
    #[serde(rename = "puntTBs", deserialize_with = "de::opt_i32")]
    pub punt_tbs: Option<i32>,
    #[serde(deserialize_with = "de::opt_i32")]
    pub punts_blocked: Option<i32>,
    #[serde(deserialize_with = "de::opt_i32")]
    pub punt_net_yds: Option<i32>,
    #[serde(deserialize_with = "de::opt_f32")]
    pub punt_yds_per_att: Option<f32>,
    #[serde(deserialize_with = "de::opt_f32")]
    pub punt_net_yds_per_att: Option<f32>,
}

/// One team line from `teamStatInfoList`.
#[derive(Deserialize, Default, Debug)]
#[serde(default, rename_all = "camelCase")]
pub struct TeamStatRecord {
    #[serde(deserialize_with = "de::opt_string")]
    pub stat_id: Option<String>,
    #[serde(deserialize_with = "de::opt_i32")]
    pub week_index: Option<i32>,
    #[serde(deserialize_with = "de::opt_i32")]
    pub season_index: Option<i32>,
    #[serde(deserialize_with = "de::opt_i32")]
    pub stage_index: Option<i32>,
    #[serde(deserialize_with = "de::opt_string")]
    pub team_id: Option<String>,
    #[serde(deserialize_with = "de::opt_i32")]
    pub total_wins: Option<i32>,
    #[serde(deserialize_with = "de::opt_i32")]
    pub total_losses: Option<i32>,
    #[serde(deserialize_with = "de::opt_i32")]
    pub total_ties: Option<i32>,
    #[serde(deserialize_with = "de::opt_i32")]
    pub seed: Option<i32>,
    #[serde(deserialize_with = "de::opt_i32")]
    pub off_total_yds: Option<i32>,
    #[serde(deserialize_with = "de::opt_i32")]
    pub off_pass_yds: Option<i32>,
    #[serde(deserialize_with = "de::opt_i32")]
    pub off_rush_yds: Option<i32>,
    #[serde(deserialize_with = "de::opt_i32")]
    pub def_total_yds: Option<i32>,
    #[serde(deserialize_with = "de::opt_i32")]
    pub def_pass_yds: Option<i32>,
    #[serde(deserialize_with = "de::opt_i32")]
    pub def_rush_yds: Option<i32>,
    #[serde(rename = "tOGiveaways", deserialize_with = "de::opt_i32")]
    pub to_giveaways: Option<i32>,
    #[serde(rename = "tOTakeaways", deserialize_with = "de::opt_i32")]
    pub to_takeaways: Option<i32>,
    #[serde(rename = "tODiff", deserialize_with = "de::opt_i32")]
    pub to_diff: Option<i32>,
    #[serde(deserialize_with = "de::opt_f32")]
    pub off_pts_per_game: Option<f32>,
    #[serde(deserialize_with = "de::opt_f32")]
    pub def_pts_per_game: Option<f32>,
    #[serde(deserialize_with = "de::opt_i32")]
    pub off_red_zones: Option<i32>,
    #[serde(rename = "offRedZoneTDs", deserialize_with = "de::opt_i32")]
    pub off_red_zone_tds: Option<i32>,
    #[serde(deserialize_with = "de::opt_f32")]
    pub off_red_zone_pct: Option<f32>,
    #[serde(deserialize_with = "de::opt_i32")]
    pub off_first_downs: Option<i32>,
    #[serde(rename = "off3rdDownAtt", deserialize_with = "de::opt_i32")]
    pub off_3rd_down_att: Option<i32>,
    #[serde(rename = "off3rdDownConv", deserialize_with = "de::opt_i32")]
    pub off_3rd_down_conv: Option<i32>,
    #[serde(rename = "off4thDownAtt", deserialize_with = "de::opt_i32")]
    pub off_4th_down_att: Option<i32>,
    #[serde(rename = "off4thDownConv", deserialize_with = "de::opt_i32")]
    pub off_4th_down_conv: Option<i32>,
    #[serde(deserialize_with = "de::opt_i32")]
    pub penalties: Option<i32>,
    #[serde(deserialize_with = "de::opt_i32")]
    pub penalty_yds: Option<i32>,
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::{KickingStatRecord, PlayerRecord};

    /// Oddly-capitalized game keys land in the right fields
    #[test]
    fn parses_irregular_key_capitalization() {
        let record: PlayerRecord = serde_json::from_value(json!({
            "rosterId": 1234,
            "yACCatchTrait": 2,
            "dLSwimTrait": 1,
            "bCVRating": 88,
            "cITRating": "91",
            "isOnIR": true
        }))
        .unwrap();

        assert_eq!(record.roster_id.as_deref(), Some("1234"));
        assert_eq!(record.yac_catch_trait, Some(2));
        assert_eq!(record.dl_swim_trait, Some(1));
        assert_eq!(record.bcv_rating, Some(88));
        assert_eq!(record.cit_rating, Some(91));
        assert_eq!(record.is_on_ir, Some(true));

        let record: KickingStatRecord = serde_json::from_value(json!({
            "statId": "k1",
            "fGAtt": 3,
            "fGMade": "2",
            "xPAtt": 4,
            "fGCompPct": 66.7
        }))
        .unwrap();

        assert_eq!(record.fg_att, Some(3));
        assert_eq!(record.fg_made, Some(2));
        assert_eq!(record.xp_att, Some(4));
        assert_eq!(record.fg_comp_pct, Some(66.7));
    }

    /// Ability slots parse nested, with empty slots representable
    #[test]
    fn parses_signature_slot_list() {
        let record: PlayerRecord = serde_json::from_value(json!({
            "rosterId": "9",
            "signatureSlotList": [
                { "slotIndex": 0, "isEmpty": true },
                {
                    "slotIndex": 1,
                    "isEmpty": false,
                    "signatureAbility": {
                        "signatureTitle": "Bazooka",
                        "signatureDescription": "Increased max throw distance",
                        "signatureLogoId": 14,
                        "isUnlocked": true
                    }
                }
            ]
        }))
        .unwrap();

        let slots = record.signature_slot_list.unwrap();
        assert_eq!(slots.len(), 2);
        assert_eq!(slots[0].is_empty, Some(true));
        assert!(slots[0].signature_ability.is_none());

        let ability = slots[1].signature_ability.as_ref().unwrap();
        assert_eq!(ability.signature_title.as_deref(), Some("Bazooka"));
        assert_eq!(ability.is_unlocked, Some(true));
    }
}
