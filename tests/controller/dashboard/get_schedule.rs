//! Tests for the schedule read endpoint.

use axum::{
    extract::{Path, Query, State},
    response::IntoResponse,
    Json,
};
use gridiron::controller::{
    dashboard::{get_schedule, WeekQuery},
    import::import_week,
};
use serde_json::json;

use super::*;

async fn setup() -> Result<TestSetup, TestError> {
    TestBuilder::new()
        .with_table(entity::prelude::League)
        .with_table(entity::prelude::Schedule)
        .build()
        .await
}

async fn import_schedule_week(test: &TestSetup, week: u32, schedule_id: &str) {
    let body = json!({
        "gameScheduleInfoList": [
            {
                "scheduleId": schedule_id,
                "homeTeamId": "7",
                "awayTeamId": "12",
                "status": 1
            }
        ]
    });

    import_week(
        State(test.into_app_state()),
        Path((
            "test-league".to_string(),
            "xbsx".to_string(),
            "12345".to_string(),
            "reg".to_string(),
            week,
            "schedules".to_string(),
        )),
        Json(body),
    )
    .await
    .unwrap();
}

/// The week query narrows the schedule to one partition.
///
/// Expected: Ok with only the requested week's matchup
#[tokio::test]
async fn week_query_narrows_schedule() -> Result<(), TestError> {
    let test = setup().await?;
    test.insert_league("test-league").await?;

    import_schedule_week(&test, 3, "55").await;
    import_schedule_week(&test, 4, "61").await;

    let read = get_schedule(
        State(test.into_app_state()),
        Path("test-league".to_string()),
        Query(WeekQuery {
            week: Some(3),
            season: Some(1),
        }),
    )
    .await
    .unwrap()
    .into_response();
    let schedule = body_json(read).await;

    let rows = schedule["data"].as_array().unwrap();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0]["external_schedule_id"], "55");

    Ok(())
}

/// Without a week query the full schedule comes back.
///
/// Expected: Ok with both weeks' matchups
#[tokio::test]
async fn unfiltered_read_returns_all_weeks() -> Result<(), TestError> {
    let test = setup().await?;
    test.insert_league("test-league").await?;

    import_schedule_week(&test, 3, "55").await;
    import_schedule_week(&test, 4, "61").await;

    let read = get_schedule(
        State(test.into_app_state()),
        Path("test-league".to_string()),
        Query(WeekQuery {
            week: None,
            season: None,
        }),
    )
    .await
    .unwrap()
    .into_response();
    let schedule = body_json(read).await;

    assert_eq!(schedule["data"].as_array().unwrap().len(), 2);

    Ok(())
}
