use serde::{Deserialize, Serialize};

/// Successful recommendation body. Clients treat a missing
/// `recommendations` field as an empty list.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecommendResponse {
    #[serde(default)]
    pub recommendations: Vec<String>,
}

/// Error body. The server always fills `error`; clients tolerate
/// its absence and fall back to a generic message.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}
