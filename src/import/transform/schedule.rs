use entity::schedule;
use sea_orm::ActiveValue::{NotSet, Set};

use crate::import::record::ScheduleRecord;
use crate::import::week::WeekContext;

/// Map schedule records to rows, with the URL-derived context authoritative
/// over week/season fields in the body.
pub fn schedule_rows(
    records: Vec<ScheduleRecord>,
    league_id: i32,
    ctx: WeekContext,
) -> Vec<schedule::ActiveModel> {
    records
        .into_iter()
        .map(|record| schedule::ActiveModel {
            id: NotSet,
            league_id: Set(league_id),
            external_schedule_id: Set(record.schedule_id.unwrap_or_default()),
            week_index: Set(ctx.week_index),
            season_index: Set(ctx.season_index),
            stage_index: Set(record.stage_index),
            home_team_id: Set(record.home_team_id),
            away_team_id: Set(record.away_team_id),
            home_score: Set(record.home_score),
            away_score: Set(record.away_score),
            status: Set(record.status),
            is_game_of_the_week: Set(record.is_game_of_the_week),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use sea_orm::ActiveValue::Set;
    use serde_json::json;

    use super::schedule_rows;
    use crate::import::record::ScheduleRecord;
    use crate::import::week::WeekContext;

    /// URL week wins over a stale week marker in the body
    #[test]
    fn url_week_is_authoritative() {
        let records: Vec<ScheduleRecord> = serde_json::from_value(json!([
            {
                "scheduleId": 55,
                "weekIndex": 1,
                "seasonIndex": 0,
                "homeTeamId": "7",
                "awayTeamId": "12",
                "homeScore": 21,
                "awayScore": 17,
                "status": 3
            }
        ]))
        .unwrap();

        let rows = schedule_rows(records, 1, WeekContext { week_index: 4, season_index: 1 });

        assert_eq!(rows[0].external_schedule_id, Set("55".to_string()));
        assert_eq!(rows[0].week_index, Set(4));
        assert_eq!(rows[0].season_index, Set(1));
        assert_eq!(rows[0].status, Set(Some(3)));
    }
}
