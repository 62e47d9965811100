//! Tests for the league listing and lookup endpoints.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};
use entity::league::Platform;
use gridiron::{
    controller::league::{get_league, get_user_leagues},
    data::league::LeagueRepository,
    model::session::SessionUserId,
};

use super::*;

async fn setup() -> Result<TestSetup, TestError> {
    TestBuilder::new()
        .with_table(entity::prelude::League)
        .build()
        .await
}

/// Listing returns only the session user's leagues.
///
/// Expected: Ok with 200 OK and one league in the envelope
#[tokio::test]
async fn lists_only_own_leagues() -> Result<(), TestError> {
    let test = setup().await?;
    test.insert_league("mine").await?;

    let repo = LeagueRepository::new(&test.db);
    repo.create("auth0|someone-else", "Theirs", "theirs", Platform::Xbox)
        .await
        .map_err(TestError::from)?;

    SessionUserId::insert(&test.session, TEST_USER_ID)
        .await
        .unwrap();

    let result = get_user_leagues(State(test.into_app_state()), test.session).await;

    assert!(result.is_ok());
    let envelope = body_json(result.unwrap().into_response()).await;

    let leagues = envelope["data"].as_array().unwrap();
    assert_eq!(leagues.len(), 1);
    assert_eq!(leagues[0]["slug"], "mine");

    Ok(())
}

/// The public league view resolves by slug without a session.
///
/// Expected: Ok with 200 OK and a roster import URL placeholder before any
/// roster import records the Madden league id
#[tokio::test]
async fn public_lookup_by_slug() -> Result<(), TestError> {
    let test = setup().await?;
    test.insert_league("test-league").await?;

    let result = get_league(
        State(test.into_app_state()),
        Path("test-league".to_string()),
    )
    .await;

    assert!(result.is_ok());
    let envelope = body_json(result.unwrap().into_response()).await;

    assert_eq!(envelope["data"]["slug"], "test-league");
    let roster_url = envelope["data"]["import_urls"]["roster"].as_str().unwrap();
    assert!(roster_url.contains("/xbsx/{leagueId}/leagueroster"));

    Ok(())
}
