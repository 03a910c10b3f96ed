use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;
use thiserror::Error;

/// ApiError
///
/// Every failure a request can end in. Lookups that come back empty and IDs
/// outside their valid range both surface as 404; the limiter surfaces as 429.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ApiError {
    #[error("Error: Invalid {kind} ID {id}")]
    InvalidId { kind: &'static str, id: String },
    #[error("{0}")]
    NotFound(String),
    #[error("Error: too many requests")]
    RateLimited,
}

impl ApiError {
    pub fn not_found(message: impl Into<String>) -> Self {
        ApiError::NotFound(message.into())
    }

    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::InvalidId { .. } | ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::RateLimited => StatusCode::TOO_MANY_REQUESTS,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status == StatusCode::TOO_MANY_REQUESTS {
            tracing::warn!("rate limit exceeded");
        } else {
            tracing::debug!(error = %self, "lookup returned no rows");
        }
        (status, Json(json!({ "error": self.to_string() }))).into_response()
    }
}

/// Turns an empty result set into a 404 carrying `message`.
pub fn require_rows<T>(rows: Vec<T>, message: &str) -> Result<Vec<T>, ApiError> {
    if rows.is_empty() {
        Err(ApiError::not_found(message))
    } else {
        Ok(rows)
    }
}
