use axum::{
    extract::{Query, State},
    http::StatusCode,
    Extension, Json,
};
use serde::Deserialize;
use serde_json::{json, Value};

use crate::{error::AppResult, middleware::request_id::RequestId, models::Recommendations};

use super::AppState;

#[derive(Debug, Deserialize)]
pub struct RecommendationQuery {
    pub title: String,
    pub count: Option<usize>,
}

/// Health check endpoint
pub async fn health_check() -> (StatusCode, Json<Value>) {
    (StatusCode::OK, Json(json!({ "status": "healthy" })))
}

/// All series titles in matrix order
pub async fn list_titles(State(state): State<AppState>) -> Json<Vec<String>> {
    Json(state.recommender.titles().to_vec())
}

/// Series most similar to the requested title
pub async fn recommend(
    State(state): State<AppState>,
    Extension(request_id): Extension<RequestId>,
    Query(params): Query<RecommendationQuery>,
) -> AppResult<Json<Recommendations>> {
    let count = params.count.unwrap_or(state.default_count);

    tracing::info!(
        request_id = %request_id,
        title = %params.title,
        count,
        "Processing recommendation request"
    );

    let recommendations = state
        .recommender
        .recommend(&params.title, count)
        .inspect_err(|e| {
            tracing::info!(request_id = %request_id, error = %e, "Recommendation query failed");
        })?;

    Ok(Json(recommendations))
}
