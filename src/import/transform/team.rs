use chrono::Utc;
use entity::team;
use sea_orm::ActiveValue::Set;
use uuid::Uuid;

use crate::import::record::TeamRecord;

/// Map team records to rows for a league.
///
/// Every row gets a fresh UUID; the upsert path keyed on
/// (league, external team id) discards it when the team already exists.
pub fn team_rows(records: Vec<TeamRecord>, league_id: i32) -> Vec<team::ActiveModel> {
    let now = Utc::now().naive_utc();

    records
        .into_iter()
        .map(|record| team::ActiveModel {
            id: Set(Uuid::new_v4()),
            league_id: Set(league_id),
            external_team_id: Set(record.team_id.unwrap_or_default()),
            city_name: Set(record.city_name),
            display_name: Set(record.display_name),
            nick_name: Set(record.nick_name),
            abbr_name: Set(record.abbr_name),
            div_name: Set(record.div_name),
            conference_name: Set(record.conference_name),
            ovr_rating: Set(record.ovr_rating),
            off_scheme: Set(record.off_scheme),
            def_scheme: Set(record.def_scheme),
            primary_color: Set(record.primary_color),
            secondary_color: Set(record.secondary_color),
            user_name: Set(record.user_name),
            injury_count: Set(record.injury_count),
            created_at: Set(now),
            updated_at: Set(now),
        })
        .collect()
}
