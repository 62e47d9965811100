use sea_orm::DatabaseConnection;

use crate::config::Config;

/// Shared application state handed to every axum handler.
#[derive(Clone)]
pub struct AppState {
    pub db: DatabaseConnection,
    pub config: Config,
}

/// Build state from a connection and a public app URL. Tests construct state
/// this way so the test-utils crate never depends on the server crate.
impl From<(DatabaseConnection, String)> for AppState {
    fn from((db, public_app_url): (DatabaseConnection, String)) -> Self {
        Self {
            db,
            config: Config {
                database_url: "sqlite::memory:".to_string(),
                public_app_url,
                listen_addr: "127.0.0.1:0".to_string(),
            },
        }
    }
}
