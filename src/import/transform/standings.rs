use entity::standing;
use sea_orm::ActiveValue::{NotSet, Set};

use crate::import::record::StandingRecord;
use crate::import::week::WeekContext;

/// Map standings records to rows for one (league, week, season) partition.
///
/// The context overwrites any week/season fields carried per record, so a
/// payload with inconsistent week markers still lands in one partition.
pub fn standing_rows(
    records: Vec<StandingRecord>,
    league_id: i32,
    ctx: WeekContext,
) -> Vec<standing::ActiveModel> {
    records
        .into_iter()
        .map(|record| standing::ActiveModel {
            id: NotSet,
            league_id: Set(league_id),
            external_team_id: Set(record.team_id.unwrap_or_default()),
            week_index: Set(ctx.week_index),
            season_index: Set(ctx.season_index),
            stage_index: Set(record.stage_index),
            calendar_year: Set(record.calendar_year),
            rank: Set(record.rank),
            prev_rank: Set(record.prev_rank),
            seed: Set(record.seed),
            total_wins: Set(record.total_wins),
            total_losses: Set(record.total_losses),
            total_ties: Set(record.total_ties),
            win_pct: Set(record.win_pct),
            win_loss_streak: Set(record.win_loss_streak),
            div_wins: Set(record.div_wins),
            div_losses: Set(record.div_losses),
            div_ties: Set(record.div_ties),
            conf_wins: Set(record.conf_wins),
            conf_losses: Set(record.conf_losses),
            conf_ties: Set(record.conf_ties),
            home_wins: Set(record.home_wins),
            home_losses: Set(record.home_losses),
            home_ties: Set(record.home_ties),
            away_wins: Set(record.away_wins),
            away_losses: Set(record.away_losses),
            away_ties: Set(record.away_ties),
            pts_for: Set(record.pts_for),
            pts_against: Set(record.pts_against),
            net_pts: Set(record.net_pts),
            to_diff: Set(record.to_diff),
            div_name: Set(record.div_name),
            conference_name: Set(record.conference_name),
            playoff_status: Set(record.playoff_status),
            team_ovr: Set(record.team_ovr),
            off_total_yds: Set(record.off_total_yds),
            off_pass_yds: Set(record.off_pass_yds),
            off_rush_yds: Set(record.off_rush_yds),
            def_total_yds: Set(record.def_total_yds),
            def_pass_yds: Set(record.def_pass_yds),
            def_rush_yds: Set(record.def_rush_yds),
            cap_available: Set(record.cap_available),
            cap_spent: Set(record.cap_spent),
            cap_room: Set(record.cap_room),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use sea_orm::ActiveValue::Set;
    use serde_json::json;

    use super::standing_rows;
    use crate::import::record::StandingRecord;
    use crate::import::week::WeekContext;

    /// The inferred context overwrites per-record week markers
    #[test]
    fn context_overrides_record_week_fields() {
        let records: Vec<StandingRecord> = serde_json::from_value(json!([
            { "teamId": "7", "weekIndex": 5, "seasonIndex": 1, "totalWins": 4 },
            { "teamId": "12", "weekIndex": 99, "seasonIndex": 0 }
        ]))
        .unwrap();

        let ctx = WeekContext { week_index: 5, season_index: 1 };
        let rows = standing_rows(records, 3, ctx);

        assert_eq!(rows.len(), 2);
        for row in &rows {
            assert_eq!(row.league_id, Set(3));
            assert_eq!(row.week_index, Set(5));
            assert_eq!(row.season_index, Set(1));
        }
        assert_eq!(rows[0].total_wins, Set(Some(4)));
        assert_eq!(rows[1].total_wins, Set(None));
    }
}
