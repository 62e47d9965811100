//! HTTP routing and OpenAPI documentation configuration.
//!
//! All endpoints are registered here with their utoipa annotations collected
//! into a single OpenAPI document, and Swagger UI is served at `/api/docs`
//! for interactive exploration.

use axum::Router;
use utoipa::OpenApi;
use utoipa_axum::{router::OpenApiRouter, routes};
use utoipa_swagger_ui::SwaggerUi;

use crate::{controller, model::app::AppState};

/// Builds the application router with every API endpoint and Swagger UI.
///
/// Import endpoints accept the companion app's POSTs, league endpoints cover
/// session-authenticated management, and dashboard endpoints serve public
/// reads. The OpenAPI specification is available at `/api/docs/openapi.json`.
pub fn routes() -> Router<AppState> {
    #[derive(OpenApi)]
    #[openapi(info(title = "Gridiron", description = "Gridiron API"), tags(
        (name = controller::import::IMPORT_TAG, description = "Companion-app import routes"),
        (name = controller::league::LEAGUE_TAG, description = "League management routes"),
        (name = controller::dashboard::DASHBOARD_TAG, description = "Public dashboard routes"),
    ))]
    struct ApiDoc;

    let (routes, api) = OpenApiRouter::with_openapi(ApiDoc::openapi())
        .routes(routes!(controller::import::import_teams))
        .routes(routes!(controller::import::import_standings))
        .routes(routes!(controller::import::import_week))
        .routes(routes!(controller::import::import_roster))
        .routes(routes!(
            controller::league::create_league,
            controller::league::get_user_leagues
        ))
        .routes(routes!(
            controller::league::get_league,
            controller::league::delete_league
        ))
        .routes(routes!(controller::dashboard::get_teams))
        .routes(routes!(controller::dashboard::get_standings))
        .routes(routes!(controller::dashboard::get_schedule))
        .routes(routes!(controller::dashboard::get_players))
        .routes(routes!(controller::dashboard::get_player))
        .routes(routes!(controller::dashboard::get_stats))
        .split_for_parts();

    let routes = routes.merge(SwaggerUi::new("/api/docs").url("/api/docs/openapi.json", api));

    routes
}
