//! Service statistics endpoint.
//!
//! GET /api/v1/stats - Aggregate counts for the running service.

use std::time::Instant;

use axum::Json;
use axum::extract::State;

use crate::http::response::ApiResponse;
use crate::state::AppState;

/// GET /api/v1/stats - Catalogue size, memory size, provider status.
pub async fn get_stats(State(state): State<AppState>) -> Json<ApiResponse<serde_json::Value>> {
    let start = Instant::now();
    let request_id = uuid::Uuid::now_v7().to_string();

    let data = serde_json::json!({
        "courses": state.recommender.catalogue().len(),
        "remembered_interactions": state.memory.len(),
        "roadmap_enabled": state.roadmap_service.is_some(),
        "llm_provider": state.config.llm.provider,
        "llm_model": state.config.llm.model,
    });

    let elapsed = start.elapsed().as_millis() as u64;
    Json(
        ApiResponse::success(data, request_id, elapsed)
            .with_link("self", "/api/v1/stats")
            .with_link("courses", "/api/v1/courses"),
    )
}
