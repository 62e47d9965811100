//! Tests for the standings import endpoint.

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use gridiron::controller::{
    dashboard::{get_standings, WeekQuery},
    import::import_standings,
};
use serde_json::json;

use super::*;

async fn setup() -> Result<TestSetup, TestError> {
    TestBuilder::new()
        .with_table(entity::prelude::League)
        .with_table(entity::prelude::Standing)
        .build()
        .await
}

/// Week and season come from the first record and land in the summary.
///
/// Expected: Ok with 200 OK, count 2, week 5, season 1
#[tokio::test]
async fn infers_week_from_first_record() -> Result<(), TestError> {
    let test = setup().await?;
    test.insert_league("test-league").await?;

    let body = json!({
        "teamStandingInfoList": [
            { "teamId": "7", "weekIndex": 5, "seasonIndex": 1, "totalWins": 4, "rank": 1 },
            { "teamId": "12", "weekIndex": 5, "seasonIndex": 1, "totalWins": 3, "rank": 2 }
        ]
    });

    let result = import_standings(
        State(test.into_app_state()),
        Path("test-league".to_string()),
        Json(body),
    )
    .await;

    assert!(result.is_ok());
    let envelope = body_json(result.unwrap().into_response()).await;
    assert_eq!(envelope["data"]["count"], 2);
    assert_eq!(envelope["data"]["week"], 5);
    assert_eq!(envelope["data"]["season"], 1);

    let read = get_standings(
        State(test.into_app_state()),
        Path("test-league".to_string()),
        Query(WeekQuery {
            week: Some(5),
            season: Some(1),
        }),
    )
    .await
    .unwrap()
    .into_response();
    let standings = body_json(read).await;

    assert_eq!(standings["data"].as_array().unwrap().len(), 2);

    Ok(())
}

/// An empty standings list leaves the week unaddressable.
///
/// Expected: Err with 400 BAD_REQUEST response
#[tokio::test]
async fn empty_list_is_bad_request() -> Result<(), TestError> {
    let test = setup().await?;
    test.insert_league("test-league").await?;

    let result = import_standings(
        State(test.into_app_state()),
        Path("test-league".to_string()),
        Json(json!({ "teamStandingInfoList": [] })),
    )
    .await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    Ok(())
}

/// Re-importing a week keeps one standing per team.
///
/// Expected: Ok with one row carrying the updated win total
#[tokio::test]
async fn reimport_replaces_the_week() -> Result<(), TestError> {
    let test = setup().await?;
    test.insert_league("test-league").await?;

    let record = |wins: i32| {
        json!({
            "teamStandingInfoList": [
                { "teamId": "7", "weekIndex": 5, "seasonIndex": 1, "totalWins": wins }
            ]
        })
    };

    for wins in [4, 5] {
        let result = import_standings(
            State(test.into_app_state()),
            Path("test-league".to_string()),
            Json(record(wins)),
        )
        .await;
        assert!(result.is_ok());
    }

    let read = get_standings(
        State(test.into_app_state()),
        Path("test-league".to_string()),
        Query(WeekQuery {
            week: Some(5),
            season: Some(1),
        }),
    )
    .await
    .unwrap()
    .into_response();
    let standings = body_json(read).await;

    let rows = standings["data"].as_array().unwrap();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0]["total_wins"], 5);

    Ok(())
}
