//! Tests for the weekly stats read endpoint.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use gridiron::controller::{dashboard::get_stats, import::import_week};
use serde_json::json;
use uuid::Uuid;

use super::*;

async fn setup() -> Result<TestSetup, TestError> {
    TestBuilder::new()
        .with_table(entity::prelude::League)
        .with_table(entity::prelude::PassingStat)
        .with_table(entity::prelude::Player)
        .build()
        .await
}

/// Imported passing stats come back from the stats read.
///
/// Expected: Ok with the imported row in the envelope
#[tokio::test]
async fn reads_imported_passing_week() -> Result<(), TestError> {
    let test = setup().await?;
    test.insert_league("test-league").await?;

    let body = json!({
        "passingStatInfoList": [
            { "statId": "p1", "rosterId": "100", "fullName": "J. Fields", "passYds": 312 }
        ]
    });

    import_week(
        State(test.into_app_state()),
        Path((
            "test-league".to_string(),
            "xbsx".to_string(),
            "12345".to_string(),
            "reg".to_string(),
            3,
            "passing".to_string(),
        )),
        Json(body),
    )
    .await
    .unwrap();

    let read = get_stats(
        State(test.into_app_state()),
        Path((
            "test-league".to_string(),
            "passing".to_string(),
            "reg".to_string(),
            3,
        )),
    )
    .await
    .unwrap()
    .into_response();
    let stats = body_json(read).await;

    let rows = stats["data"].as_array().unwrap();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0]["full_name"], "J. Fields");
    assert_eq!(rows[0]["pass_yds"], 312);

    Ok(())
}

/// An unknown category on the read side is a validation error.
///
/// Expected: Err with 400 BAD_REQUEST response
#[tokio::test]
async fn unknown_category_is_bad_request() -> Result<(), TestError> {
    let test = setup().await?;
    test.insert_league("test-league").await?;

    let result = get_stats(
        State(test.into_app_state()),
        Path((
            "test-league".to_string(),
            "blocking".to_string(),
            "reg".to_string(),
            3,
        )),
    )
    .await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    Ok(())
}

/// An unknown player id on the detail read is a 404.
///
/// Expected: Ok with 404 NOT_FOUND response
#[tokio::test]
async fn unknown_player_is_not_found() -> Result<(), TestError> {
    let test = setup().await?;
    test.insert_league("test-league").await?;

    let result = gridiron::controller::dashboard::get_player(
        State(test.into_app_state()),
        Path(("test-league".to_string(), Uuid::new_v4())),
    )
    .await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    Ok(())
}
