//! Test utilities shared across controller suites.

use axum::response::Response;
use gridiron::model::app::AppState;
use gridiron_test_utils::TestSetup;

/// Extension trait for TestSetup to create the server's AppState.
pub trait TestSetupExt {
    fn into_app_state(&self) -> AppState;
}

impl TestSetupExt for TestSetup {
    fn into_app_state(&self) -> AppState {
        self.state()
    }
}

/// Read a response body as JSON.
pub async fn body_json(resp: Response) -> serde_json::Value {
    let bytes = axum::body::to_bytes(resp.into_body(), usize::MAX)
        .await
        .unwrap();

    serde_json::from_slice(&bytes).unwrap()
}
