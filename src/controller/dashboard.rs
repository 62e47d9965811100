use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use serde::Deserialize;
use utoipa::IntoParams;
use uuid::Uuid;

use crate::{
    data::{
        league::LeagueRepository, player::PlayerRepository, schedule::ScheduleRepository,
        standing::StandingRepository, team::TeamRepository,
    },
    error::{import::ImportError, Error},
    model::{
        api::{DataEnvelope, ErrorEnvelope},
        app::AppState,
    },
    service::import::ImportService,
};

pub static DASHBOARD_TAG: &str = "dashboard";

/// Optional week/season narrowing for standings and schedule reads.
#[derive(Deserialize, IntoParams)]
pub struct WeekQuery {
    pub week: Option<i32>,
    pub season: Option<i32>,
}

/// Optional team/position narrowing for roster reads.
#[derive(Deserialize, IntoParams)]
pub struct PlayerQuery {
    pub team: Option<Uuid>,
    pub position: Option<String>,
}

/// List a league's teams
#[utoipa::path(
    get,
    path = "/api/leagues/{slug}/teams",
    tag = DASHBOARD_TAG,
    params(("slug" = String, Path, description = "League slug")),
    responses(
        (status = 200, description = "Teams for the league"),
        (status = 404, description = "League not found", body = ErrorEnvelope),
        (status = 500, description = "Internal server error", body = ErrorEnvelope)
    ),
)]
pub async fn get_teams(
    State(state): State<AppState>,
    Path(slug): Path<String>,
) -> Result<impl IntoResponse, Error> {
    let team_repository = TeamRepository::new(&state.db);

    let league = resolve_league(&state, &slug).await?;
    let teams = team_repository.get_by_league(league.id).await?;

    Ok(Json(DataEnvelope::new(teams)))
}

/// List a league's standings, optionally narrowed to a week and season
#[utoipa::path(
    get,
    path = "/api/leagues/{slug}/standings",
    tag = DASHBOARD_TAG,
    params(("slug" = String, Path, description = "League slug"), WeekQuery),
    responses(
        (status = 200, description = "Standings for the league"),
        (status = 404, description = "League not found", body = ErrorEnvelope),
        (status = 500, description = "Internal server error", body = ErrorEnvelope)
    ),
)]
pub async fn get_standings(
    State(state): State<AppState>,
    Path(slug): Path<String>,
    Query(query): Query<WeekQuery>,
) -> Result<impl IntoResponse, Error> {
    let standing_repository = StandingRepository::new(&state.db);

    let league = resolve_league(&state, &slug).await?;
    let standings = standing_repository
        .list(league.id, query.week, query.season)
        .await?;

    Ok(Json(DataEnvelope::new(standings)))
}

/// List a league's schedule, optionally narrowed to a week and season
#[utoipa::path(
    get,
    path = "/api/leagues/{slug}/schedule",
    tag = DASHBOARD_TAG,
    params(("slug" = String, Path, description = "League slug"), WeekQuery),
    responses(
        (status = 200, description = "Schedule for the league"),
        (status = 404, description = "League not found", body = ErrorEnvelope),
        (status = 500, description = "Internal server error", body = ErrorEnvelope)
    ),
)]
pub async fn get_schedule(
    State(state): State<AppState>,
    Path(slug): Path<String>,
    Query(query): Query<WeekQuery>,
) -> Result<impl IntoResponse, Error> {
    let schedule_repository = ScheduleRepository::new(&state.db);

    let league = resolve_league(&state, &slug).await?;
    let schedule = schedule_repository
        .list(league.id, query.week, query.season)
        .await?;

    Ok(Json(DataEnvelope::new(schedule)))
}

/// List a league's players, optionally narrowed to a team or position
#[utoipa::path(
    get,
    path = "/api/leagues/{slug}/players",
    tag = DASHBOARD_TAG,
    params(("slug" = String, Path, description = "League slug"), PlayerQuery),
    responses(
        (status = 200, description = "Players for the league"),
        (status = 404, description = "League not found", body = ErrorEnvelope),
        (status = 500, description = "Internal server error", body = ErrorEnvelope)
    ),
)]
pub async fn get_players(
    State(state): State<AppState>,
    Path(slug): Path<String>,
    Query(query): Query<PlayerQuery>,
) -> Result<impl IntoResponse, Error> {
    let player_repository = PlayerRepository::new(&state.db);

    let league = resolve_league(&state, &slug).await?;
    let players = player_repository
        .get_by_league(league.id, query.team, query.position.as_deref())
        .await?;

    Ok(Json(DataEnvelope::new(players)))
}

/// Get one player with traits, ratings, and abilities
#[utoipa::path(
    get,
    path = "/api/leagues/{slug}/players/{playerId}",
    tag = DASHBOARD_TAG,
    params(
        ("slug" = String, Path, description = "League slug"),
        ("playerId" = Uuid, Path, description = "Player id"),
    ),
    responses(
        (status = 200, description = "Player detail"),
        (status = 404, description = "League or player not found", body = ErrorEnvelope),
        (status = 500, description = "Internal server error", body = ErrorEnvelope)
    ),
)]
pub async fn get_player(
    State(state): State<AppState>,
    Path((slug, player_id)): Path<(String, Uuid)>,
) -> Result<impl IntoResponse, Error> {
    let player_repository = PlayerRepository::new(&state.db);

    let league = resolve_league(&state, &slug).await?;
    let detail = player_repository.get_detail(league.id, player_id).await?;

    let Some(detail) = detail else {
        return Ok((
            StatusCode::NOT_FOUND,
            Json(ErrorEnvelope::new("not_found", "Player not found", None)),
        )
            .into_response());
    };

    Ok(Json(DataEnvelope::new(detail)).into_response())
}

/// Read one week of a stat category
#[utoipa::path(
    get,
    path = "/api/leagues/{slug}/stats/{category}/{seasonType}/{weekNumber}",
    tag = DASHBOARD_TAG,
    params(
        ("slug" = String, Path, description = "League slug"),
        ("category" = String, Path, description = "Stat category"),
        ("seasonType" = String, Path, description = "Season stage (reg, post)"),
        ("weekNumber" = u32, Path, description = "Week number"),
    ),
    responses(
        (status = 200, description = "Stat rows for the week"),
        (status = 400, description = "Unknown category", body = ErrorEnvelope),
        (status = 404, description = "League not found", body = ErrorEnvelope),
        (status = 500, description = "Internal server error", body = ErrorEnvelope)
    ),
)]
pub async fn get_stats(
    State(state): State<AppState>,
    Path((slug, category, season_type, week_number)): Path<(String, String, String, u32)>,
) -> Result<impl IntoResponse, Error> {
    let import_service = ImportService::new(&state.db);

    let rows = import_service
        .get_week(&slug, &season_type, week_number, &category)
        .await?;

    Ok(Json(DataEnvelope::new(rows)))
}

async fn resolve_league(state: &AppState, slug: &str) -> Result<entity::league::Model, Error> {
    let league_repository = LeagueRepository::new(&state.db);

    let league = league_repository
        .get_by_slug(slug)
        .await?
        .ok_or_else(|| ImportError::LeagueNotFound(slug.to_string()))?;

    Ok(league)
}
