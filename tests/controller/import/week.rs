//! Tests for the weekly category import endpoint.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use gridiron::controller::{dashboard::get_stats, import::import_week};
use serde_json::{json, Value};

use super::*;

async fn setup() -> Result<TestSetup, TestError> {
    TestBuilder::new()
        .with_table(entity::prelude::League)
        .with_table(entity::prelude::TeamStat)
        .build()
        .await
}

fn week_path(week: u32, category: &str) -> Path<(String, String, String, String, u32, String)> {
    Path((
        "test-league".to_string(),
        "xbsx".to_string(),
        "12345".to_string(),
        "reg".to_string(),
        week,
        category.to_string(),
    ))
}

async fn read_week(test: &TestSetup, week: u32) -> Value {
    let resp = get_stats(
        State(test.into_app_state()),
        Path((
            "test-league".to_string(),
            "teamstats".to_string(),
            "reg".to_string(),
            week,
        )),
    )
    .await
    .unwrap()
    .into_response();

    body_json(resp).await
}

/// A team-stat record lands in the partition the URL names, and a re-import
/// with changed values updates the row in place.
///
/// Expected: Ok with count 1 both times and one row holding the latest value
#[tokio::test]
async fn team_stats_update_in_place() -> Result<(), TestError> {
    let test = setup().await?;
    test.insert_league("test-league").await?;

    let record = |wins: i32| {
        json!({
            "teamStatInfoList": [
                { "statId": "s1", "weekIndex": 3, "seasonIndex": 1, "teamId": "7", "totalWins": wins }
            ]
        })
    };

    let result = import_week(
        State(test.into_app_state()),
        week_path(3, "teamstats"),
        Json(record(5)),
    )
    .await;

    assert!(result.is_ok());
    let envelope = body_json(result.unwrap().into_response()).await;
    assert_eq!(envelope["success"], true);
    assert_eq!(envelope["data"]["count"], 1);
    assert_eq!(envelope["data"]["week"], 3);
    assert_eq!(envelope["data"]["season"], 1);

    let result = import_week(
        State(test.into_app_state()),
        week_path(3, "teamstats"),
        Json(record(6)),
    )
    .await;
    assert!(result.is_ok());

    let stats = read_week(&test, 3).await;
    let rows = stats["data"].as_array().unwrap();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0]["total_wins"], 6);

    Ok(())
}

/// The URL addresses the partition even when the body disagrees.
///
/// Expected: the row is stored under the URL's week, not the body's
#[tokio::test]
async fn url_week_overrides_body_week() -> Result<(), TestError> {
    let test = setup().await?;
    test.insert_league("test-league").await?;

    let body = json!({
        "teamStatInfoList": [
            { "statId": "s1", "weekIndex": 9, "seasonIndex": 0, "teamId": "7", "totalWins": 5 }
        ]
    });

    let result = import_week(
        State(test.into_app_state()),
        week_path(3, "teamstats"),
        Json(body),
    )
    .await;
    assert!(result.is_ok());

    assert_eq!(read_week(&test, 3).await["data"].as_array().unwrap().len(), 1);
    assert_eq!(read_week(&test, 9).await["data"].as_array().unwrap().len(), 0);

    Ok(())
}

/// Weeks are isolated partitions.
///
/// Expected: importing week 4 leaves week 3 untouched
#[tokio::test]
async fn weeks_stay_isolated() -> Result<(), TestError> {
    let test = setup().await?;
    test.insert_league("test-league").await?;

    let record = |stat_id: &str, week: i32| {
        json!({
            "teamStatInfoList": [
                { "statId": stat_id, "weekIndex": week, "seasonIndex": 1, "teamId": "7" }
            ]
        })
    };

    import_week(
        State(test.into_app_state()),
        week_path(3, "teamstats"),
        Json(record("s1", 3)),
    )
    .await
    .unwrap();
    import_week(
        State(test.into_app_state()),
        week_path(4, "teamstats"),
        Json(record("s2", 4)),
    )
    .await
    .unwrap();

    assert_eq!(read_week(&test, 3).await["data"].as_array().unwrap().len(), 1);
    assert_eq!(read_week(&test, 4).await["data"].as_array().unwrap().len(), 1);

    Ok(())
}

/// An empty stat list succeeds without clearing the partition.
///
/// Expected: Ok with count 0 and the earlier row still present
#[tokio::test]
async fn empty_list_is_zero_count_success() -> Result<(), TestError> {
    let test = setup().await?;
    test.insert_league("test-league").await?;

    let body = json!({
        "teamStatInfoList": [
            { "statId": "s1", "teamId": "7", "totalWins": 5 }
        ]
    });
    import_week(
        State(test.into_app_state()),
        week_path(3, "teamstats"),
        Json(body),
    )
    .await
    .unwrap();

    let result = import_week(
        State(test.into_app_state()),
        week_path(3, "teamstats"),
        Json(json!({ "teamStatInfoList": [] })),
    )
    .await;

    assert!(result.is_ok());
    let envelope = body_json(result.unwrap().into_response()).await;
    assert_eq!(envelope["data"]["count"], 0);

    assert_eq!(read_week(&test, 3).await["data"].as_array().unwrap().len(), 1);

    Ok(())
}

/// An unknown category segment is a validation error.
///
/// Expected: Err with 400 BAD_REQUEST response
#[tokio::test]
async fn unknown_category_is_bad_request() -> Result<(), TestError> {
    let test = setup().await?;
    test.insert_league("test-league").await?;

    let result = import_week(
        State(test.into_app_state()),
        week_path(3, "blocking"),
        Json(json!({ "blockingStatInfoList": [] })),
    )
    .await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    Ok(())
}

/// A week number that cannot index the partition column is a validation
/// error, not a wrapped-around write.
///
/// Expected: Err with 400 BAD_REQUEST response
#[tokio::test]
async fn out_of_range_week_is_bad_request() -> Result<(), TestError> {
    let test = setup().await?;
    test.insert_league("test-league").await?;

    let body = json!({
        "teamStatInfoList": [
            { "statId": "s1", "teamId": "7", "totalWins": 5 }
        ]
    });

    let result = import_week(
        State(test.into_app_state()),
        week_path(u32::MAX, "teamstats"),
        Json(body),
    )
    .await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    Ok(())
}

/// An unknown platform segment is a validation error.
///
/// Expected: Err with 400 BAD_REQUEST response
#[tokio::test]
async fn unknown_platform_is_bad_request() -> Result<(), TestError> {
    let test = setup().await?;
    test.insert_league("test-league").await?;

    let result = import_week(
        State(test.into_app_state()),
        Path((
            "test-league".to_string(),
            "pc".to_string(),
            "12345".to_string(),
            "reg".to_string(),
            3,
            "teamstats".to_string(),
        )),
        Json(json!({ "teamStatInfoList": [] })),
    )
    .await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    Ok(())
}
