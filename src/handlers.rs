use crate::errors::AppError;
use crate::services::LeetCodeService;
use axum::{
    extract::{Path, Query, State},
    http::{header, StatusCode},
    response::IntoResponse,
    Json,
};
use serde::Deserialize;
use serde_json::json;
use std::sync::Arc;

/// Shared application state injected into handlers.
#[derive(Clone)]
pub struct AppState {
    /// Service talking to LeetCode's GraphQL endpoint.
    pub leetcode: LeetCodeService,
}

#[derive(Debug, Deserialize)]
pub struct SearchParams {
    pub name: String,
}

/// Health check endpoint.
pub async fn health() -> (StatusCode, Json<serde_json::Value>) {
    (
        StatusCode::OK,
        Json(json!({
            "status": "healthy",
            "service": "leetcode-user-api",
            "version": "0.1.0"
        })),
    )
}

/// GET /api/leetcode/search?name=<keyword>
///
/// Discovers LeetCode users whose username plausibly matches the keyword.
/// Always answers 200 with a `{"data":{"userSearchList":[...]}}` body; an
/// unproductive search yields an empty list, never an error.
pub async fn search_users(
    State(state): State<Arc<AppState>>,
    Query(params): Query<SearchParams>,
) -> impl IntoResponse {
    tracing::info!("GET /api/leetcode/search - name: {:?}", params.name);

    let body = state.leetcode.search_users(&params.name).await;

    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "application/json")],
        body,
    )
}

/// GET /api/leetcode/profile/:username
///
/// Relays the full public profile for a known username verbatim. Upstream
/// HTTP and transport failures surface as a `{"error": "..."}` body.
pub async fn get_user_profile(
    State(state): State<Arc<AppState>>,
    Path(username): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    tracing::info!("GET /api/leetcode/profile/{}", username);

    let body = state.leetcode.get_user_profile(&username).await?;

    Ok((
        StatusCode::OK,
        [(header::CONTENT_TYPE, "application/json")],
        body,
    ))
}
