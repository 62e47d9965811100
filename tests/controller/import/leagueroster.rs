//! Tests for the roster import endpoint.

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use gridiron::controller::{
    dashboard::{get_player, get_players, PlayerQuery},
    import::{import_roster, import_teams},
};
use serde_json::json;
use uuid::Uuid;

use super::*;

async fn setup() -> Result<TestSetup, TestError> {
    TestBuilder::new()
        .with_table(entity::prelude::League)
        .with_table(entity::prelude::Team)
        .with_table(entity::prelude::Player)
        .with_table(entity::prelude::PlayerTrait)
        .with_table(entity::prelude::PlayerRating)
        .with_table(entity::prelude::PlayerAbility)
        .build()
        .await
}

fn roster_path(user_id: &str) -> Path<(String, String, String)> {
    Path((
        user_id.to_string(),
        "xbsx".to_string(),
        "12345".to_string(),
    ))
}

/// The first roster import claims the owner's unclaimed league, and the
/// imported players resolve to teams imported earlier.
///
/// Expected: Ok with count 2 and the QB linked to the Bears team row
#[tokio::test]
async fn roster_import_claims_league_and_links_teams() -> Result<(), TestError> {
    let test = setup().await?;
    test.insert_league("test-league").await?;

    import_teams(
        State(test.into_app_state()),
        Path("test-league".to_string()),
        Json(json!({ "leagueTeamInfoList": [{ "teamId": "7", "displayName": "Bears" }] })),
    )
    .await
    .unwrap();

    let body = json!({
        "rosterInfoList": [
            {
                "rosterId": "100",
                "teamId": "7",
                "firstName": "Justin",
                "lastName": "Fields",
                "position": "QB",
                "speedRating": 91,
                "signatureSlotList": [
                    { "slotIndex": 0, "signatureAbility": { "signatureTitle": "Bazooka" } }
                ]
            },
            { "rosterId": "101", "teamId": "999", "lastName": "Moore", "position": "WR" }
        ]
    });

    let result = import_roster(
        State(test.into_app_state()),
        roster_path(TEST_USER_ID),
        Json(body),
    )
    .await;

    assert!(result.is_ok());
    let envelope = body_json(result.unwrap().into_response()).await;
    assert_eq!(envelope["data"]["count"], 2);

    let read = get_players(
        State(test.into_app_state()),
        Path("test-league".to_string()),
        Query(PlayerQuery {
            team: None,
            position: Some("QB".to_string()),
        }),
    )
    .await
    .unwrap()
    .into_response();
    let players = body_json(read).await;

    let rows = players["data"].as_array().unwrap();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0]["last_name"], "Fields");
    // "7" resolved to the imported team, "999" had no match
    assert!(rows[0]["team_id"].is_string());

    let player_id: Uuid = serde_json::from_value(rows[0]["id"].clone()).unwrap();
    let detail = get_player(
        State(test.into_app_state()),
        Path(("test-league".to_string(), player_id)),
    )
    .await
    .unwrap()
    .into_response();
    let detail = body_json(detail).await;

    assert_eq!(detail["data"]["ratings"]["speed_rating"], 91);
    assert_eq!(detail["data"]["abilities"][0]["title"], "Bazooka");

    Ok(())
}

/// A second import through the recorded import key replaces the roster.
///
/// Expected: Ok with one remaining player after the second import
#[tokio::test]
async fn reimport_replaces_roster() -> Result<(), TestError> {
    let test = setup().await?;
    test.insert_league("test-league").await?;

    let two = json!({
        "rosterInfoList": [
            { "rosterId": "100", "lastName": "Fields" },
            { "rosterId": "101", "lastName": "Moore" }
        ]
    });
    let one = json!({
        "rosterInfoList": [
            { "rosterId": "100", "lastName": "Fields" }
        ]
    });

    import_roster(State(test.into_app_state()), roster_path(TEST_USER_ID), Json(two))
        .await
        .unwrap();
    import_roster(State(test.into_app_state()), roster_path(TEST_USER_ID), Json(one))
        .await
        .unwrap();

    let read = get_players(
        State(test.into_app_state()),
        Path("test-league".to_string()),
        Query(PlayerQuery {
            team: None,
            position: None,
        }),
    )
    .await
    .unwrap()
    .into_response();
    let players = body_json(read).await;

    assert_eq!(players["data"].as_array().unwrap().len(), 1);

    Ok(())
}

/// No league matches another user's import key.
///
/// Expected: Err with 404 NOT_FOUND response
#[tokio::test]
async fn unknown_import_key_is_not_found() -> Result<(), TestError> {
    let test = setup().await?;
    test.insert_league("test-league").await?;

    let result = import_roster(
        State(test.into_app_state()),
        roster_path("auth0|someone-else"),
        Json(json!({ "rosterInfoList": [{ "rosterId": "100" }] })),
    )
    .await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    Ok(())
}
