//! Application error type mapping to error codes and the envelope format.

use axum::response::{IntoResponse, Response};

use skillmap_types::error::{RoadmapError, SearchError, ValidationError};
use skillmap_types::llm::LlmError;

use crate::http::response::ApiResponse;

/// Application-level error that maps to HTTP responses.
#[derive(Debug)]
pub enum AppError {
    /// Request validation failure.
    Validation(String),
    /// Roadmap generation is disabled (no API key configured).
    ProviderUnavailable,
    /// Roadmap pipeline failure.
    Roadmap(RoadmapError),
    /// Similarity search failure.
    Search(SearchError),
}

impl From<ValidationError> for AppError {
    fn from(e: ValidationError) -> Self {
        AppError::Validation(e.to_string())
    }
}

impl From<RoadmapError> for AppError {
    fn from(e: RoadmapError) -> Self {
        AppError::Roadmap(e)
    }
}

impl From<SearchError> for AppError {
    fn from(e: SearchError) -> Self {
        AppError::Search(e)
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (code, message) = match &self {
            AppError::Validation(msg) => ("VALIDATION_ERROR", msg.clone()),
            AppError::ProviderUnavailable => (
                "PROVIDER_UNAVAILABLE",
                "Roadmap generation is disabled: no LLM API key configured".to_string(),
            ),
            AppError::Roadmap(RoadmapError::Llm(LlmError::AuthenticationFailed)) => (
                "UPSTREAM_AUTH",
                "LLM provider rejected the configured API key".to_string(),
            ),
            AppError::Roadmap(RoadmapError::Llm(LlmError::RateLimited { .. })) => (
                "RATE_LIMITED",
                "LLM provider rate limit exceeded".to_string(),
            ),
            AppError::Roadmap(e) => ("ROADMAP_ERROR", e.to_string()),
            AppError::Search(e) => ("SEARCH_ERROR", e.to_string()),
        };

        ApiResponse::error(code, &message, String::new()).into_response()
    }
}
