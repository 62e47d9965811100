use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Error detail carried inside the error envelope.
#[derive(Serialize, Deserialize, Debug, ToSchema)]
pub struct ApiError {
    /// Stable machine-readable error code.
    pub code: String,
    /// Human-readable message, safe to show to the caller.
    pub message: String,
    /// Optional extra context (validation paths, offending values).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub details: Option<serde_json::Value>,
}

/// The response envelope when a request fails.
#[derive(Serialize, Deserialize, Debug, ToSchema)]
pub struct ErrorEnvelope {
    pub success: bool,
    pub error: ApiError,
}

impl ErrorEnvelope {
    pub fn new(code: &str, message: &str, details: Option<serde_json::Value>) -> Self {
        Self {
            success: false,
            error: ApiError {
                code: code.to_string(),
                message: message.to_string(),
                details,
            },
        }
    }
}

/// The response envelope when a request succeeds.
#[derive(Serialize, Debug, ToSchema)]
pub struct DataEnvelope<T> {
    pub success: bool,
    pub data: T,
}

impl<T: Serialize> DataEnvelope<T> {
    pub fn new(data: T) -> Self {
        Self { success: true, data }
    }
}

/// Summary returned by every import endpoint.
#[derive(Serialize, Deserialize, Debug, ToSchema)]
pub struct ImportSummaryDto {
    /// Short human-readable confirmation.
    pub message: String,
    /// Number of records written.
    pub count: usize,
    /// Week index the import was addressed to, when week-scoped.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub week: Option<i32>,
    /// Season index the import was addressed to, when week-scoped.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub season: Option<i32>,
}
