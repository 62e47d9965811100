use std::collections::HashMap;

use chrono::Utc;
use entity::{player, player_ability, player_rating, player_trait};
use sea_orm::ActiveValue::{NotSet, Set};
use uuid::Uuid;

use crate::import::record::PlayerRecord;

/// Fan-out of a roster import: one player row per record, one trait and one
/// rating row each, zero or more ability rows. Trait/rating/ability rows
/// reference the freshly generated player UUID.
#[derive(Debug, Default)]
pub struct RosterRows {
    pub players: Vec<player::ActiveModel>,
    pub traits: Vec<player_trait::ActiveModel>,
    pub ratings: Vec<player_rating::ActiveModel>,
    pub abilities: Vec<player_ability::ActiveModel>,
}

/// Map roster records to player/trait/rating/ability rows.
///
/// `team_map` resolves external team ids to internal team UUIDs; an
/// unresolvable or absent team id leaves `team_id` as `None` (free agents,
/// or the team import has not run yet).
pub fn roster_rows(
    records: Vec<PlayerRecord>,
    league_id: i32,
    team_map: &HashMap<String, Uuid>,
) -> RosterRows {
    let now = Utc::now().naive_utc();
    let mut rows = RosterRows::default();

    for record in records {
        let player_id = Uuid::new_v4();
        let team_id = record
            .team_id
            .as_deref()
            .and_then(|external| team_map.get(external).copied());

        if let Some(slots) = &record.signature_slot_list {
            for slot in slots {
                let Some(ability) = &slot.signature_ability else {
                    continue;
                };

                rows.abilities.push(player_ability::ActiveModel {
                    id: NotSet,
                    player_id: Set(player_id),
                    league_id: Set(league_id),
                    slot_index: Set(slot.slot_index),
                    title: Set(ability.signature_title.clone()),
                    description: Set(ability.signature_description.clone()),
                    logo_id: Set(ability.signature_logo_id),
                    is_unlocked: Set(ability.is_unlocked),
                });
            }
        }

        rows.traits.push(player_trait::ActiveModel {
            player_id: Set(player_id),
            league_id: Set(league_id),
            yac_catch_trait: Set(record.yac_catch_trait),
            pos_catch_trait: Set(record.pos_catch_trait),
            hp_catch_trait: Set(record.hp_catch_trait),
            drop_open_pass_trait: Set(record.drop_open_pass_trait),
            feet_in_bounds_trait: Set(record.feet_in_bounds_trait),
            fight_for_yards_trait: Set(record.fight_for_yards_trait),
            cover_ball_trait: Set(record.cover_ball_trait),
            clutch_trait: Set(record.clutch_trait),
            high_motor_trait: Set(record.high_motor_trait),
            penalty_trait: Set(record.penalty_trait),
            big_hit_trait: Set(record.big_hit_trait),
            strip_ball_trait: Set(record.strip_ball_trait),
            play_ball_trait: Set(record.play_ball_trait),
            dl_bull_rush_trait: Set(record.dl_bull_rush_trait),
            dl_swim_trait: Set(record.dl_swim_trait),
            dl_spin_trait: Set(record.dl_spin_trait),
            lb_style_trait: Set(record.lb_style_trait),
            qb_style_trait: Set(record.qb_style_trait),
            sense_pressure_trait: Set(record.sense_pressure_trait),
            throw_away_trait: Set(record.throw_away_trait),
            tight_spiral_trait: Set(record.tight_spiral_trait),
            force_pass_trait: Set(record.force_pass_trait),
            predict_trait: Set(record.predict_trait),
        });

        rows.ratings.push(player_rating::ActiveModel {
            player_id: Set(player_id),
            league_id: Set(league_id),
            speed_rating: Set(record.speed_rating),
            accel_rating: Set(record.accel_rating),
            agility_rating: Set(record.agility_rating),
            change_of_direction_rating: Set(record.change_of_direction_rating),
            strength_rating: Set(record.strength_rating),
            awareness_rating: Set(record.awareness_rating),
            jump_rating: Set(record.jump_rating),
            stamina_rating: Set(record.stamina_rating),
            toughness_rating: Set(record.toughness_rating),
            injury_rating: Set(record.injury_rating),
            carry_rating: Set(record.carry_rating),
            catch_rating: Set(record.catch_rating),
            spec_catch_rating: Set(record.spec_catch_rating),
            cit_rating: Set(record.cit_rating),
            release_rating: Set(record.release_rating),
            route_run_short_rating: Set(record.route_run_short_rating),
            route_run_med_rating: Set(record.route_run_med_rating),
            route_run_deep_rating: Set(record.route_run_deep_rating),
            throw_power_rating: Set(record.throw_power_rating),
            throw_acc_rating: Set(record.throw_acc_rating),
            throw_acc_short_rating: Set(record.throw_acc_short_rating),
            throw_acc_mid_rating: Set(record.throw_acc_mid_rating),
            throw_acc_deep_rating: Set(record.throw_acc_deep_rating),
            throw_on_run_rating: Set(record.throw_on_run_rating),
            throw_under_pressure_rating: Set(record.throw_under_pressure_rating),
            play_action_rating: Set(record.play_action_rating),
            break_sack_rating: Set(record.break_sack_rating),
            break_tackle_rating: Set(record.break_tackle_rating),
            bcv_rating: Set(record.bcv_rating),
            truck_rating: Set(record.truck_rating),
            stiff_arm_rating: Set(record.stiff_arm_rating),
            spin_move_rating: Set(record.spin_move_rating),
            juke_move_rating: Set(record.juke_move_rating),
            elusive_rating: Set(record.elusive_rating),
            run_block_rating: Set(record.run_block_rating),
            run_block_power_rating: Set(record.run_block_power_rating),
            run_block_finesse_rating: Set(record.run_block_finesse_rating),
            pass_block_rating: Set(record.pass_block_rating),
            pass_block_power_rating: Set(record.pass_block_power_rating),
            pass_block_finesse_rating: Set(record.pass_block_finesse_rating),
            lead_block_rating: Set(record.lead_block_rating),
            impact_block_rating: Set(record.impact_block_rating),
            tackle_rating: Set(record.tackle_rating),
            hit_power_rating: Set(record.hit_power_rating),
            power_moves_rating: Set(record.power_moves_rating),
            finesse_moves_rating: Set(record.finesse_moves_rating),
            block_shed_rating: Set(record.block_shed_rating),
            pursuit_rating: Set(record.pursuit_rating),
            play_rec_rating: Set(record.play_rec_rating),
            man_cover_rating: Set(record.man_cover_rating),
            zone_cover_rating: Set(record.zone_cover_rating),
            press_rating: Set(record.press_rating),
            kick_power_rating: Set(record.kick_power_rating),
            kick_acc_rating: Set(record.kick_acc_rating),
            kick_ret_rating: Set(record.kick_ret_rating),
        });

        rows.players.push(player::ActiveModel {
            id: Set(player_id),
            league_id: Set(league_id),
            team_id: Set(team_id),
            external_roster_id: Set(record.roster_id.unwrap_or_default()),
            external_team_id: Set(record.team_id),
            first_name: Set(record.first_name),
            last_name: Set(record.last_name),
            position: Set(record.position),
            jersey_num: Set(record.jersey_num),
            age: Set(record.age),
            height: Set(record.height),
            weight: Set(record.weight),
            birth_day: Set(record.birth_day),
            birth_month: Set(record.birth_month),
            birth_year: Set(record.birth_year),
            years_pro: Set(record.years_pro),
            rookie_year: Set(record.rookie_year),
            college: Set(record.college),
            home_town: Set(record.home_town),
            home_state: Set(record.home_state),
            dev_trait: Set(record.dev_trait),
            player_best_ovr: Set(record.player_best_ovr),
            player_scheme_ovr: Set(record.player_scheme_ovr),
            team_scheme_ovr: Set(record.team_scheme_ovr),
            legacy_score: Set(record.legacy_score),
            experience_points: Set(record.experience_points),
            skill_points: Set(record.skill_points),
            contract_salary: Set(record.contract_salary),
            contract_bonus: Set(record.contract_bonus),
            contract_length: Set(record.contract_length),
            contract_years_left: Set(record.contract_years_left),
            cap_hit: Set(record.cap_hit),
            cap_release_penalty: Set(record.cap_release_penalty),
            cap_release_net_savings: Set(record.cap_release_net_savings),
            desired_salary: Set(record.desired_salary),
            desired_bonus: Set(record.desired_bonus),
            desired_length: Set(record.desired_length),
            re_sign_status: Set(record.re_sign_status),
            draft_round: Set(record.draft_round),
            draft_pick: Set(record.draft_pick),
            injury_type: Set(record.injury_type),
            injury_length: Set(record.injury_length),
            is_free_agent: Set(record.is_free_agent),
            is_on_ir: Set(record.is_on_ir),
            is_on_practice_squad: Set(record.is_on_practice_squad),
            is_active: Set(record.is_active),
            portrait_id: Set(record.portrait_id),
            presentation_id: Set(record.presentation_id),
            scheme: Set(record.scheme),
            durability_grade: Set(record.durability_grade),
            intangible_grade: Set(record.intangible_grade),
            physical_grade: Set(record.physical_grade),
            production_grade: Set(record.production_grade),
            size_grade: Set(record.size_grade),
            created_at: Set(now),
        });
    }

    rows
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use sea_orm::ActiveValue::Set;
    use serde_json::json;
    use uuid::Uuid;

    use super::roster_rows;
    use crate::import::record::PlayerRecord;

    fn records(values: serde_json::Value) -> Vec<PlayerRecord> {
        serde_json::from_value(values).unwrap()
    }

    /// One record fans out to player + trait + rating rows sharing one UUID,
    /// ability rows only for occupied slots
    #[test]
    fn fans_out_per_player() {
        let records = records(json!([
            {
                "rosterId": "100",
                "teamId": "7",
                "firstName": "Justin",
                "speedRating": 90,
                "clutchTrait": true,
                "signatureSlotList": [
                    { "slotIndex": 0, "isEmpty": true },
                    {
                        "slotIndex": 1,
                        "signatureAbility": { "signatureTitle": "Bazooka", "isUnlocked": 1 }
                    }
                ]
            },
            { "rosterId": "101" }
        ]));

        let team_uuid = Uuid::new_v4();
        let mut team_map = HashMap::new();
        team_map.insert("7".to_string(), team_uuid);

        let rows = roster_rows(records, 1, &team_map);

        assert_eq!(rows.players.len(), 2);
        assert_eq!(rows.traits.len(), 2);
        assert_eq!(rows.ratings.len(), 2);
        assert_eq!(rows.abilities.len(), 1);

        let player_id = match rows.players[0].id {
            Set(id) => id,
            _ => panic!("player id not set"),
        };
        assert_eq!(rows.traits[0].player_id, Set(player_id));
        assert_eq!(rows.ratings[0].player_id, Set(player_id));
        assert_eq!(rows.abilities[0].player_id, Set(player_id));
        assert_eq!(rows.abilities[0].title, Set(Some("Bazooka".to_string())));

        assert_eq!(rows.players[0].team_id, Set(Some(team_uuid)));
        assert_eq!(rows.ratings[0].speed_rating, Set(Some(90)));
        assert_eq!(rows.traits[0].clutch_trait, Set(Some(true)));
    }

    /// Unresolvable team ids leave team_id as None, never an error
    #[test]
    fn unresolved_team_becomes_none() {
        let records = records(json!([{ "rosterId": "100", "teamId": "99" }]));

        let rows = roster_rows(records, 1, &HashMap::new());

        assert_eq!(rows.players[0].team_id, Set(None));
        assert_eq!(rows.players[0].external_team_id, Set(Some("99".to_string())));
    }
}
