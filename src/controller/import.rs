use axum::{
    extract::{Path, State},
    response::IntoResponse,
    Json,
};
use serde_json::Value;

use crate::{
    error::Error,
    model::{
        api::{DataEnvelope, ErrorEnvelope, ImportSummaryDto},
        app::AppState,
    },
    service::import::{ImportOutcome, ImportService},
};

pub static IMPORT_TAG: &str = "import";

fn summary(noun: &str, outcome: ImportOutcome) -> DataEnvelope<ImportSummaryDto> {
    DataEnvelope::new(ImportSummaryDto {
        message: format!("Imported {} {noun}", outcome.count),
        count: outcome.count,
        week: outcome.week,
        season: outcome.season,
    })
}

/// Import the league team list exported by the companion app
#[utoipa::path(
    post,
    path = "/api/leagues/{slug}/import/leagueteams",
    tag = IMPORT_TAG,
    params(("slug" = String, Path, description = "League slug")),
    responses(
        (status = 200, description = "Teams imported", body = DataEnvelope<ImportSummaryDto>),
        (status = 400, description = "Invalid payload", body = ErrorEnvelope),
        (status = 404, description = "League not found", body = ErrorEnvelope),
        (status = 500, description = "Internal server error", body = ErrorEnvelope)
    ),
)]
pub async fn import_teams(
    State(state): State<AppState>,
    Path(slug): Path<String>,
    Json(body): Json<Value>,
) -> Result<impl IntoResponse, Error> {
    let import_service = ImportService::new(&state.db);

    let outcome = import_service.import_teams(&slug, body).await?;

    Ok(Json(summary("teams", outcome)))
}

/// Import a week of standings; week and season come from the first record
#[utoipa::path(
    post,
    path = "/api/leagues/{slug}/import/standings",
    tag = IMPORT_TAG,
    params(("slug" = String, Path, description = "League slug")),
    responses(
        (status = 200, description = "Standings imported", body = DataEnvelope<ImportSummaryDto>),
        (status = 400, description = "Invalid or empty payload", body = ErrorEnvelope),
        (status = 404, description = "League not found", body = ErrorEnvelope),
        (status = 500, description = "Internal server error", body = ErrorEnvelope)
    ),
)]
pub async fn import_standings(
    State(state): State<AppState>,
    Path(slug): Path<String>,
    Json(body): Json<Value>,
) -> Result<impl IntoResponse, Error> {
    let import_service = ImportService::new(&state.db);

    let outcome = import_service.import_standings(&slug, body).await?;

    Ok(Json(summary("standings", outcome)))
}

/// Import one week of a stat category; the URL addresses the partition
#[utoipa::path(
    post,
    path = "/api/leagues/{slug}/import/{platform}/{leagueId}/week/{seasonType}/{weekNumber}/{category}",
    tag = IMPORT_TAG,
    params(
        ("slug" = String, Path, description = "League slug"),
        ("platform" = String, Path, description = "Console platform (xbsx, ps5)"),
        ("leagueId" = String, Path, description = "Madden league id"),
        ("seasonType" = String, Path, description = "Season stage (reg, post)"),
        ("weekNumber" = u32, Path, description = "Week number"),
        ("category" = String, Path, description = "Stat category"),
    ),
    responses(
        (status = 200, description = "Week imported", body = DataEnvelope<ImportSummaryDto>),
        (status = 400, description = "Invalid payload, platform, or category", body = ErrorEnvelope),
        (status = 404, description = "League not found", body = ErrorEnvelope),
        (status = 500, description = "Internal server error", body = ErrorEnvelope)
    ),
)]
pub async fn import_week(
    State(state): State<AppState>,
    Path((slug, platform, league_id, season_type, week_number, category)): Path<(
        String,
        String,
        String,
        String,
        u32,
        String,
    )>,
    Json(body): Json<Value>,
) -> Result<impl IntoResponse, Error> {
    let import_service = ImportService::new(&state.db);

    let outcome = import_service
        .import_week(
            &slug,
            &platform,
            &league_id,
            &season_type,
            week_number,
            &category,
            body,
        )
        .await?;

    Ok(Json(summary(&format!("{category} records"), outcome)))
}

/// Import the full league roster; the league is resolved from the URL key
#[utoipa::path(
    post,
    path = "/api/{userId}/{platform}/{leagueId}/leagueroster",
    tag = IMPORT_TAG,
    params(
        ("userId" = String, Path, description = "League owner's subject id"),
        ("platform" = String, Path, description = "Console platform (xbsx, ps5)"),
        ("leagueId" = String, Path, description = "Madden league id"),
    ),
    responses(
        (status = 200, description = "Roster imported", body = DataEnvelope<ImportSummaryDto>),
        (status = 400, description = "Invalid payload or platform", body = ErrorEnvelope),
        (status = 404, description = "No league matched the import key", body = ErrorEnvelope),
        (status = 500, description = "Internal server error", body = ErrorEnvelope)
    ),
)]
pub async fn import_roster(
    State(state): State<AppState>,
    Path((user_id, platform, league_id)): Path<(String, String, String)>,
    Json(body): Json<Value>,
) -> Result<impl IntoResponse, Error> {
    let import_service = ImportService::new(&state.db);

    let outcome = import_service
        .import_roster(&user_id, &platform, &league_id, body)
        .await?;

    Ok(Json(summary("roster entries", outcome)))
}
