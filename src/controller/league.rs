use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use tower_sessions::Session;

use crate::{
    error::Error,
    model::{
        api::{DataEnvelope, ErrorEnvelope},
        app::AppState,
        league::{CreateLeagueDto, LeagueDto},
        session::SessionUserId,
    },
    service::league::LeagueService,
};

pub static LEAGUE_TAG: &str = "league";

/// Create a league owned by the logged-in user
#[utoipa::path(
    post,
    path = "/api/leagues",
    tag = LEAGUE_TAG,
    request_body = CreateLeagueDto,
    responses(
        (status = 201, description = "League created", body = DataEnvelope<LeagueDto>),
        (status = 401, description = "Not logged in", body = ErrorEnvelope),
        (status = 500, description = "Internal server error", body = ErrorEnvelope)
    ),
)]
pub async fn create_league(
    State(state): State<AppState>,
    session: Session,
    Json(body): Json<CreateLeagueDto>,
) -> Result<impl IntoResponse, Error> {
    let league_service = LeagueService::new(&state.db, &state.config);

    let user_id = SessionUserId::require(&session).await?;

    let league = league_service
        .create_league(&user_id, &body.name, body.platform)
        .await?;

    Ok((StatusCode::CREATED, Json(DataEnvelope::new(league))))
}

/// List leagues owned by the logged-in user
#[utoipa::path(
    get,
    path = "/api/leagues",
    tag = LEAGUE_TAG,
    responses(
        (status = 200, description = "Leagues owned by the user", body = DataEnvelope<Vec<LeagueDto>>),
        (status = 401, description = "Not logged in", body = ErrorEnvelope),
        (status = 500, description = "Internal server error", body = ErrorEnvelope)
    ),
)]
pub async fn get_user_leagues(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, Error> {
    let league_service = LeagueService::new(&state.db, &state.config);

    let user_id = SessionUserId::require(&session).await?;

    let leagues = league_service.get_user_leagues(&user_id).await?;

    Ok(Json(DataEnvelope::new(leagues)))
}

/// Get a league by slug, with its companion-app import URLs
#[utoipa::path(
    get,
    path = "/api/leagues/{slug}",
    tag = LEAGUE_TAG,
    params(("slug" = String, Path, description = "League slug")),
    responses(
        (status = 200, description = "League found", body = DataEnvelope<LeagueDto>),
        (status = 404, description = "League not found", body = ErrorEnvelope),
        (status = 500, description = "Internal server error", body = ErrorEnvelope)
    ),
)]
pub async fn get_league(
    State(state): State<AppState>,
    Path(slug): Path<String>,
) -> Result<impl IntoResponse, Error> {
    let league_service = LeagueService::new(&state.db, &state.config);

    let league = league_service.get_league(&slug).await?;

    Ok(Json(DataEnvelope::new(league)))
}

/// Delete a league; only the owner may do so
#[utoipa::path(
    delete,
    path = "/api/leagues/{slug}",
    tag = LEAGUE_TAG,
    params(("slug" = String, Path, description = "League slug")),
    responses(
        (status = 200, description = "League deleted", body = DataEnvelope<String>),
        (status = 401, description = "Not logged in", body = ErrorEnvelope),
        (status = 403, description = "Not the league owner", body = ErrorEnvelope),
        (status = 404, description = "League not found", body = ErrorEnvelope),
        (status = 500, description = "Internal server error", body = ErrorEnvelope)
    ),
)]
pub async fn delete_league(
    State(state): State<AppState>,
    session: Session,
    Path(slug): Path<String>,
) -> Result<impl IntoResponse, Error> {
    let league_service = LeagueService::new(&state.db, &state.config);

    let user_id = SessionUserId::require(&session).await?;

    league_service.delete_league(&user_id, &slug).await?;

    Ok(Json(DataEnvelope::new(format!("League {slug} deleted"))))
}
