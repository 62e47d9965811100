//! Tests for the delete-league endpoint.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};
use entity::league::Platform;
use gridiron::{
    controller::league::{delete_league, get_league},
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

/// Owners can delete their league, after which reads 404.
///
/// Expected: Ok with 200 OK, then 404 on the follow-up read
#[tokio::test]
async fn owner_deletes_league() -> Result<(), TestError> {
    let test = setup().await?;
    test.insert_league("test-league").await?;
    SessionUserId::insert(&test.session, TEST_USER_ID)
        .await
        .unwrap();

    let result = delete_league(
        State(test.into_app_state()),
        test.session.clone(),
        Path("test-league".to_string()),
    )
    .await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::OK);

    let read = get_league(
        State(test.into_app_state()),
        Path("test-league".to_string()),
    )
    .await;

    assert!(read.is_err());
    let resp = read.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    Ok(())
}

/// Another user's league cannot be deleted.
///
/// Expected: Err with 403 FORBIDDEN response
#[tokio::test]
async fn non_owner_is_forbidden() -> Result<(), TestError> {
    let test = setup().await?;

    let repo = LeagueRepository::new(&test.db);
    repo.create("auth0|someone-else", "Theirs", "theirs", Platform::Xbox)
        .await
        .map_err(TestError::from)?;

    SessionUserId::insert(&test.session, TEST_USER_ID)
        .await
        .unwrap();

    let result = delete_league(
        State(test.into_app_state()),
        test.session,
        Path("theirs".to_string()),
    )
    .await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::FORBIDDEN);

    Ok(())
}

/// Deleting requires a logged-in session.
///
/// Expected: Err with 401 UNAUTHORIZED response
#[tokio::test]
async fn unauthorized_without_session() -> Result<(), TestError> {
    let test = setup().await?;
    test.insert_league("test-league").await?;

    let result = delete_league(
        State(test.into_app_state()),
        test.session,
        Path("test-league".to_string()),
    )
    .await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);

    Ok(())
}
