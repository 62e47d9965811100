use chrono::NaiveDateTime;
use entity::league::Platform;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// League as presented to the dashboard, including the import URLs the
/// companion app should be pointed at.
#[derive(Serialize, Deserialize, Debug, ToSchema)]
pub struct LeagueDto {
    pub id: i32,
    pub name: String,
    pub slug: String,
    #[schema(value_type = String)]
    pub platform: Platform,
    pub external_league_id: Option<String>,
    pub last_import_at: Option<NaiveDateTime>,
    pub import_urls: ImportUrlsDto,
}

/// Import URLs built from the configured public app URL.
#[derive(Serialize, Deserialize, Debug, ToSchema)]
pub struct ImportUrlsDto {
    pub teams: String,
    pub standings: String,
    pub roster: String,
    /// Base for weekly imports; the companion app appends
    /// `/{seasonType}/{weekNumber}/{category}`.
    pub weekly_base: String,
}

/// Request body for creating a league.
#[derive(Serialize, Deserialize, Debug, ToSchema)]
pub struct CreateLeagueDto {
    pub name: String,
    #[schema(value_type = String)]
    pub platform: Platform,
}
