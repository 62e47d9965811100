//! Tests for the create-league endpoint.

use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use entity::league::Platform;
use gridiron::{
    controller::league::create_league, model::league::CreateLeagueDto,
    model::session::SessionUserId,
};

use super::*;

/// Creating a league derives a slug and returns the import URLs.
///
/// Expected: Ok with 201 CREATED and a slugged URL set
#[tokio::test]
async fn creates_league_with_slug_and_import_urls() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::League)
        .build()
        .await?;
    SessionUserId::insert(&test.session, TEST_USER_ID)
        .await
        .unwrap();

    let result = create_league(
        State(test.into_app_state()),
        test.session,
        Json(CreateLeagueDto {
            name: "My Franchise".to_string(),
            platform: Platform::Xbox,
        }),
    )
    .await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::CREATED);

    let envelope = body_json(resp).await;
    assert_eq!(envelope["data"]["slug"], "my-franchise");
    assert_eq!(envelope["data"]["platform"], "xbsx");

    let teams_url = envelope["data"]["import_urls"]["teams"].as_str().unwrap();
    assert!(teams_url.ends_with("/api/leagues/my-franchise/import/leagueteams"));

    Ok(())
}

/// A second league with the same name gets a suffixed slug.
///
/// Expected: Ok with slug my-franchise-2
#[tokio::test]
async fn duplicate_names_get_suffixed_slugs() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::League)
        .build()
        .await?;
    SessionUserId::insert(&test.session, TEST_USER_ID)
        .await
        .unwrap();

    let dto = || CreateLeagueDto {
        name: "My Franchise".to_string(),
        platform: Platform::Playstation,
    };

    let first = create_league(
        State(test.into_app_state()),
        test.session.clone(),
        Json(dto()),
    )
    .await;
    assert!(first.is_ok());

    let second = create_league(State(test.into_app_state()), test.session, Json(dto())).await;

    assert!(second.is_ok());
    let envelope = body_json(second.unwrap().into_response()).await;
    assert_eq!(envelope["data"]["slug"], "my-franchise-2");

    Ok(())
}

/// Creating a league requires a logged-in session.
///
/// Expected: Err with 401 UNAUTHORIZED response
#[tokio::test]
async fn unauthorized_without_session() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::League)
        .build()
        .await?;

    let result = create_league(
        State(test.into_app_state()),
        test.session,
        Json(CreateLeagueDto {
            name: "My Franchise".to_string(),
            platform: Platform::Xbox,
        }),
    )
    .await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);

    Ok(())
}
