//! Weekly stat transformers, one per category.
//!
//! All follow the same shape: league id injected, week/season taken from the
//! URL-derived context, natural stat id carried through, everything else
//! null-coalesced field by field.

use entity::{
    defensive_stat, kicking_stat, passing_stat, punting_stat, receiving_stat, rushing_stat,
    team_stat,
};
use sea_orm::ActiveValue::{NotSet, Set};

use crate::import::record::{
    DefensiveStatRecord, KickingStatRecord, PassingStatRecord, PuntingStatRecord,
    ReceivingStatRecord, RushingStatRecord, TeamStatRecord,
};
use crate::import::week::WeekContext;

pub fn passing_rows(
    records: Vec<PassingStatRecord>,
    league_id: i32,
    ctx: WeekContext,
) -> Vec<passing_stat::ActiveModel> {
    records
        .into_iter()
        .map(|record| passing_stat::ActiveModel {
            id: NotSet,
            league_id: Set(league_id),
            external_stat_id: Set(record.stat_id.unwrap_or_default()),
            week_index: Set(ctx.week_index),
            season_index: Set(ctx.season_index),
            stage_index: Set(record.stage_index),
            external_team_id: Set(record.team_id),
            external_roster_id: Set(record.roster_id),
            full_name: Set(record.full_name),
            pass_att: Set(record.pass_att),
            pass_comp: Set(record.pass_comp),
            pass_yds: Set(record.pass_yds),
            pass_tds: Set(record.pass_tds),
            pass_ints: Set(record.pass_ints),
            pass_sacks: Set(record.pass_sacks),
            pass_longest: Set(record.pass_longest),
            passer_rating: Set(record.passer_rating),
            pass_comp_pct: Set(record.pass_comp_pct),
            pass_yds_per_att: Set(record.pass_yds_per_att),
            pass_yds_per_game: Set(record.pass_yds_per_game),
        })
        .collect()
}

pub fn rushing_rows(
    records: Vec<RushingStatRecord>,
    league_id: i32,
    ctx: WeekContext,
) -> Vec<rushing_stat::ActiveModel> {
    records
        .into_iter()
        .map(|record| rushing_stat::ActiveModel {
            id: NotSet,
            league_id: Set(league_id),
            external_stat_id: Set(record.stat_id.unwrap_or_default()),
            week_index: Set(ctx.week_index),
            season_index: Set(ctx.season_index),
            stage_index: Set(record.stage_index),
            external_team_id: Set(record.team_id),
            external_roster_id: Set(record.roster_id),
            full_name: Set(record.full_name),
            rush_att: Set(record.rush_att),
            rush_yds: Set(record.rush_yds),
            rush_tds: Set(record.rush_tds),
            rush_fum: Set(record.rush_fum),
            rush_longest: Set(record.rush_longest),
            rush_20_plus_yds: Set(record.rush_20_plus_yds),
            rush_broken_tackles: Set(record.rush_broken_tackles),
            rush_yds_after_contact: Set(record.rush_yds_after_contact),
            rush_yds_per_att: Set(record.rush_yds_per_att),
            rush_yds_per_game: Set(record.rush_yds_per_game),
            rush_to_pct: Set(record.rush_to_pct),
        })
        .collect()
}

pub fn receiving_rows(
    records: Vec<ReceivingStatRecord>,
    league_id: i32,
    ctx: WeekContext,
) -> Vec<receiving_stat::ActiveModel> {
    records
        .into_iter()
        .map(|record| receiving_stat::ActiveModel {
            id: NotSet,
            league_id: Set(league_id),
            external_stat_id: Set(record.stat_id.unwrap_or_default()),
            week_index: Set(ctx.week_index),
            season_index: Set(ctx.season_index),
            stage_index: Set(record.stage_index),
            external_team_id: Set(record.team_id),
            external_roster_id: Set(record.roster_id),
            full_name: Set(record.full_name),
            rec_catches: Set(record.rec_catches),
            rec_yds: Set(record.rec_yds),
            rec_tds: Set(record.rec_tds),
            rec_drops: Set(record.rec_drops),
            rec_longest: Set(record.rec_longest),
            rec_yds_after_catch: Set(record.rec_yds_after_catch),
            rec_yds_per_catch: Set(record.rec_yds_per_catch),
            rec_yac_per_catch: Set(record.rec_yac_per_catch),
            rec_catch_pct: Set(record.rec_catch_pct),
            rec_yds_per_game: Set(record.rec_yds_per_game),
            rec_to_pct: Set(record.rec_to_pct),
        })
        .collect()
}

pub fn defensive_rows(
    records: Vec<DefensiveStatRecord>,
    league_id: i32,
    ctx: WeekContext,
) -> Vec<defensive_stat::ActiveModel> {
    records
        .into_iter()
        .map(|record| defensive_stat::ActiveModel {
            id: NotSet,
            league_id: Set(league_id),
            external_stat_id: Set(record.stat_id.unwrap_or_default()),
            week_index: Set(ctx.week_index),
            season_index: Set(ctx.season_index),
            stage_index: Set(record.stage_index),
            external_team_id: Set(record.team_id),
            external_roster_id: Set(record.roster_id),
            full_name: Set(record.full_name),
            def_total_tackles: Set(record.def_total_tackles),
            def_sacks: Set(record.def_sacks),
            def_ints: Set(record.def_ints),
            def_int_return_yds: Set(record.def_int_return_yds),
            def_forced_fum: Set(record.def_forced_fum),
            def_fum_rec: Set(record.def_fum_rec),
            def_deflections: Set(record.def_deflections),
            def_tds: Set(record.def_tds),
            def_safeties: Set(record.def_safeties),
            def_catches_allowed: Set(record.def_catches_allowed),
            def_pts: Set(record.def_pts),
        })
        .collect()
}

pub fn kicking_rows(
    records: Vec<KickingStatRecord>,
    league_id: i32,
    ctx: WeekContext,
) -> Vec<kicking_stat::ActiveModel> {
    records
        .into_iter()
        .map(|record| kicking_stat::ActiveModel {
            id: NotSet,
            league_id: Set(league_id),
            external_stat_id: Set(record.stat_id.unwrap_or_default()),
            week_index: Set(ctx.week_index),
            season_index: Set(ctx.season_index),
            stage_index: Set(record.stage_index),
            external_team_id: Set(record.team_id),
            external_roster_id: Set(record.roster_id),
            full_name: Set(record.full_name),
            fg_att: Set(record.fg_att),
            fg_made: Set(record.fg_made),
            fg_longest: Set(record.fg_longest),
            fg_50_plus_att: Set(record.fg_50_plus_att),
            fg_50_plus_made: Set(record.fg_50_plus_made),
            xp_att: Set(record.xp_att),
            xp_made: Set(record.xp_made),
            kickoff_att: Set(record.kickoff_att),
            kickoff_tbs: Set(record.kickoff_tbs),
            kick_pts: Set(record.kick_pts),
            fg_comp_pct: Set(record.fg_comp_pct),
            xp_comp_pct: Set(record.xp_comp_pct),
        })
        .collect()
}

pub fn punting_rows(
    records: Vec<PuntingStatRecord>,
    league_id: i32,
    ctx: WeekContext,
) -> Vec<punting_stat::ActiveModel> {
    records
        .into_iter()
        .map(|record| punting_stat::ActiveModel {
            id: NotSet,
            league_id: Set(league_id),
            external_stat_id: Set(record.stat_id.unwrap_or_default()),
            week_index: Set(ctx.week_index),
            season_index: Set(ctx.season_index),
            stage_index: Set(record.stage_index),
            external_team_id: Set(record.team_id),
            external_roster_id: Set(record.roster_id),
            full_name: Set(record.full_name),
            punt_att: Set(record.punt_att),
            punt_yds: Set(record.punt_yds),
            punt_longest: Set(record.punt_longest),
            punts_in_20: Set(record.punts_in_20),
            punt_tbs: Set(record.punt_tbs),
            punts_blocked: Set(record.punts_blocked),
            punt_net_yds: Set(record.punt_net_yds),
            punt_yds_per_att: Set(record.punt_yds_per_att),
            punt_net_yds_per_att: Set(record.punt_net_yds_per_att),
        })
        .collect()
}

pub fn team_stat_rows(
    records: Vec<TeamStatRecord>,
    league_id: i32,
    ctx: WeekContext,
) -> Vec<team_stat::ActiveModel> {
    records
        .into_iter()
        .map(|record| team_stat::ActiveModel {
            id: NotSet,
            league_id: Set(league_id),
            external_stat_id: Set(record.stat_id.unwrap_or_default()),
            week_index: Set(ctx.week_index),
            season_index: Set(ctx.season_index),
            stage_index: Set(record.stage_index),
            external_team_id: Set(record.team_id),
            total_wins: Set(record.total_wins),
            total_losses: Set(record.total_losses),
            total_ties: Set(record.total_ties),
            seed: Set(record.seed),
            off_total_yds: Set(record.off_total_yds),
            off_pass_yds: Set(record.off_pass_yds),
            off_rush_yds: Set(record.off_rush_yds),
            def_total_yds: Set(record.def_total_yds),
            def_pass_yds: Set(record.def_pass_yds),
            def_rush_yds: Set(record.def_rush_yds),
            to_giveaways: Set(record.to_giveaways),
            to_takeaways: Set(record.to_takeaways),
            to_diff: Set(record.to_diff),
            off_pts_per_game: Set(record.off_pts_per_game),
            def_pts_per_game: Set(record.def_pts_per_game),
            off_red_zones: Set(record.off_red_zones),
            off_red_zone_tds: Set(record.off_red_zone_tds),
            off_red_zone_pct: Set(record.off_red_zone_pct),
            off_first_downs: Set(record.off_first_downs),
            off_3rd_down_att: Set(record.off_3rd_down_att),
            off_3rd_down_conv: Set(record.off_3rd_down_conv),
            off_4th_down_att: Set(record.off_4th_down_att),
            off_4th_down_conv: Set(record.off_4th_down_conv),
            penalties: Set(record.penalties),
            penalty_yds: Set(record.penalty_yds),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use sea_orm::ActiveValue::Set;
    use serde_json::json;

    use super::{defensive_rows, team_stat_rows};
    use crate::import::record::{DefensiveStatRecord, TeamStatRecord};
    use crate::import::week::WeekContext;

    /// Decimal fields pass through verbatim, body week markers are overridden
    #[test]
    fn maps_defensive_line() {
        let records: Vec<DefensiveStatRecord> = serde_json::from_value(json!([
            {
                "statId": "d1",
                "weekIndex": 9,
                "teamId": 7,
                "fullName": "Micah Parsons",
                "defSacks": 1.5,
                "defTotalTackles": "8"
            }
        ]))
        .unwrap();

        let rows = defensive_rows(records, 2, WeekContext { week_index: 3, season_index: 1 });

        assert_eq!(rows[0].external_stat_id, Set("d1".to_string()));
        assert_eq!(rows[0].week_index, Set(3));
        assert_eq!(rows[0].external_team_id, Set(Some("7".to_string())));
        assert_eq!(rows[0].def_sacks, Set(Some(1.5)));
        assert_eq!(rows[0].def_total_tackles, Set(Some(8)));
    }

    /// Team stats keep raw external team ids and odd turnover keys
    #[test]
    fn maps_team_line() {
        let records: Vec<TeamStatRecord> = serde_json::from_value(json!([
            {
                "statId": "s1",
                "teamId": "7",
                "totalWins": 5,
                "tOGiveaways": 3,
                "tOTakeaways": 6,
                "tODiff": 3,
                "off3rdDownAtt": 12
            }
        ]))
        .unwrap();

        let rows = team_stat_rows(records, 2, WeekContext { week_index: 3, season_index: 1 });

        assert_eq!(rows[0].total_wins, Set(Some(5)));
        assert_eq!(rows[0].to_giveaways, Set(Some(3)));
        assert_eq!(rows[0].to_diff, Set(Some(3)));
        assert_eq!(rows[0].off_3rd_down_att, Set(Some(12)));
        assert_eq!(rows[0].external_team_id, Set(Some("7".to_string())));
    }
}
