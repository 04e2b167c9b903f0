use axum::extract::{Query, State};
use axum::Json;
use serde::Deserialize;
use tracing::debug;

use crate::server::AppState;

use super::error::ApiError;
use super::types::RecommendResponse;

#[derive(Debug, Deserialize)]
pub struct RecommendParams {
    #[serde(default)]
    pub title: Option<String>,
}

/// `GET /recommend?title=...` — titles similar to the first movie whose
/// title contains the query.
pub async fn recommend(
    State(state): State<AppState>,
    Query(params): Query<RecommendParams>,
) -> Result<Json<RecommendResponse>, ApiError> {
    let title = params.title.unwrap_or_default();
    if title.is_empty() {
        return Err(ApiError::BadRequest(
            "A 'title' parameter is required.".to_string(),
        ));
    }

    debug!(title = %title, "Recommendation request");

    match state
        .engine
        .recommend(&title, state.config.dataset.max_results)
    {
        Some(recommendations) if !recommendations.is_empty() => {
            Ok(Json(RecommendResponse { recommendations }))
        }
        _ => Err(ApiError::NotFound(format!(
            "Movie titled '{}' not found in the dataset.",
            title
        ))),
    }
}
