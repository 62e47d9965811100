//! Tests for the team-list import endpoint.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use gridiron::controller::{dashboard::get_teams, import::import_teams};
use serde_json::json;

use super::*;

async fn setup() -> Result<TestSetup, TestError> {
    TestBuilder::new()
        .with_table(entity::prelude::League)
        .with_table(entity::prelude::Team)
        .build()
        .await
}

/// Imported teams come back from the teams read with their names intact.
///
/// Expected: Ok with 200 OK and both teams in the read response
#[tokio::test]
async fn imported_teams_round_trip() -> Result<(), TestError> {
    let test = setup().await?;
    test.insert_league("test-league").await?;

    let body = json!({
        "leagueTeamInfoList": [
            { "teamId": 7, "displayName": "Bears", "cityName": "Chicago" },
            { "teamId": 12, "displayName": "Packers", "cityName": "Green Bay" }
        ]
    });

    let result = import_teams(
        State(test.into_app_state()),
        Path("test-league".to_string()),
        Json(body),
    )
    .await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::OK);

    let envelope = body_json(resp).await;
    assert_eq!(envelope["success"], true);
    assert_eq!(envelope["data"]["count"], 2);

    let read = get_teams(
        State(test.into_app_state()),
        Path("test-league".to_string()),
    )
    .await
    .unwrap()
    .into_response();
    let teams = body_json(read).await;

    let mut names: Vec<&str> = teams["data"]
        .as_array()
        .unwrap()
        .iter()
        .filter_map(|t| t["display_name"].as_str())
        .collect();
    names.sort();
    assert_eq!(names, vec!["Bears", "Packers"]);

    Ok(())
}

/// Re-importing the same teams keeps one row per team.
///
/// Expected: Ok with 200 OK and still two teams after the second import
#[tokio::test]
async fn reimport_does_not_duplicate() -> Result<(), TestError> {
    let test = setup().await?;
    test.insert_league("test-league").await?;

    let body = json!({
        "leagueTeamInfoList": [
            { "teamId": 7, "displayName": "Bears" },
            { "teamId": 12, "displayName": "Packers" }
        ]
    });

    for _ in 0..2 {
        let result = import_teams(
            State(test.into_app_state()),
            Path("test-league".to_string()),
            Json(body.clone()),
        )
        .await;
        assert!(result.is_ok());
    }

    let read = get_teams(
        State(test.into_app_state()),
        Path("test-league".to_string()),
    )
    .await
    .unwrap()
    .into_response();
    let teams = body_json(read).await;

    assert_eq!(teams["data"].as_array().unwrap().len(), 2);

    Ok(())
}

/// A bare JSON array is accepted in place of the wrapped list.
///
/// Expected: Ok with 200 OK and count 1
#[tokio::test]
async fn accepts_bare_array() -> Result<(), TestError> {
    let test = setup().await?;
    test.insert_league("test-league").await?;

    let result = import_teams(
        State(test.into_app_state()),
        Path("test-league".to_string()),
        Json(json!([{ "teamId": "7", "displayName": "Bears" }])),
    )
    .await;

    assert!(result.is_ok());
    let envelope = body_json(result.unwrap().into_response()).await;
    assert_eq!(envelope["data"]["count"], 1);

    Ok(())
}

/// An empty team list succeeds without writing anything.
///
/// Expected: Ok with 200 OK and count 0
#[tokio::test]
async fn empty_list_is_zero_count_success() -> Result<(), TestError> {
    let test = setup().await?;
    test.insert_league("test-league").await?;

    let result = import_teams(
        State(test.into_app_state()),
        Path("test-league".to_string()),
        Json(json!({ "leagueTeamInfoList": [] })),
    )
    .await;

    assert!(result.is_ok());
    let envelope = body_json(result.unwrap().into_response()).await;
    assert_eq!(envelope["success"], true);
    assert_eq!(envelope["data"]["count"], 0);

    Ok(())
}

/// An unknown slug is a 404.
///
/// Expected: Err with 404 NOT_FOUND response
#[tokio::test]
async fn unknown_slug_is_not_found() -> Result<(), TestError> {
    let test = setup().await?;

    let result = import_teams(
        State(test.into_app_state()),
        Path("no-such-league".to_string()),
        Json(json!({ "leagueTeamInfoList": [] })),
    )
    .await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    Ok(())
}

/// A non-array list value is a validation error.
///
/// Expected: Err with 400 BAD_REQUEST response
#[tokio::test]
async fn non_array_list_is_bad_request() -> Result<(), TestError> {
    let test = setup().await?;
    test.insert_league("test-league").await?;

    let result = import_teams(
        State(test.into_app_state()),
        Path("test-league".to_string()),
        Json(json!({ "leagueTeamInfoList": "nope" })),
    )
    .await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    Ok(())
}
