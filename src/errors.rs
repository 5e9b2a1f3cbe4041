use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use std::fmt;

/// Application-specific error types.
///
/// Only the profile-lookup path produces errors; search failures are
/// absorbed candidate-by-candidate and never surface.
#[derive(Debug, Clone)]
pub enum AppError {
    /// LeetCode answered with a non-success HTTP status.
    UpstreamStatus {
        /// The HTTP status code returned by LeetCode.
        status: u16,
        /// The upstream response body text.
        body: String,
    },
    /// Network or parse failure talking to LeetCode.
    ExternalApiError(String),
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::UpstreamStatus { status, body } => {
                write!(f, "LeetCode API error: {} - {}", status, body)
            }
            AppError::ExternalApiError(msg) => write!(f, "Failed to get user profile: {}", msg),
        }
    }
}

impl IntoResponse for AppError {
    /// Converts the error into an HTTP response.
    ///
    /// Every failure surfaces as a client error with a JSON body of the form
    /// `{"error": "..."}`: a lookup failing for a specific username is the
    /// caller's problem to handle, whatever went wrong upstream.
    fn into_response(self) -> Response {
        match &self {
            AppError::UpstreamStatus { .. } => {
                tracing::warn!("Upstream status error: {}", self);
            }
            AppError::ExternalApiError(_) => {
                tracing::error!("External API error: {}", self);
            }
        }

        let body = Json(json!({
            "error": self.to_string(),
        }));

        (StatusCode::BAD_REQUEST, body).into_response()
    }
}
