//! Roadmap generation endpoint.
//!
//! POST /api/v1/roadmap - Validated skills+goal to roadmap and courses.

use std::time::Instant;

use axum::Json;
use axum::extract::State;
use tracing::Instrument;

use skillmap_observe::genai_attrs::{
    GEN_AI_OPERATION_NAME, GEN_AI_PROVIDER_NAME, GEN_AI_REQUEST_MAX_TOKENS, GEN_AI_REQUEST_MODEL,
    GEN_AI_REQUEST_TEMPERATURE, OP_GENERATE_ROADMAP,
};
use skillmap_types::roadmap::{Roadmap, RoadmapRequest};

use crate::http::error::AppError;
use crate::http::response::ApiResponse;
use crate::state::AppState;

/// POST /api/v1/roadmap - Generate a personalized CV roadmap.
///
/// Normalizes and validates the request, then runs the full pipeline:
/// memory context retrieval, LLM completion, memory append, course
/// recommendation. Returns 503 when no LLM API key is configured.
pub async fn generate_roadmap(
    State(state): State<AppState>,
    Json(request): Json<RoadmapRequest>,
) -> Result<Json<ApiResponse<Roadmap>>, AppError> {
    let start = Instant::now();
    let request_id = uuid::Uuid::now_v7().to_string();

    let request = request.normalized()?;

    let service = state
        .roadmap_service
        .as_ref()
        .ok_or(AppError::ProviderUnavailable)?;

    let span = tracing::info_span!(
        "generate_roadmap",
        { GEN_AI_OPERATION_NAME } = OP_GENERATE_ROADMAP,
        { GEN_AI_PROVIDER_NAME } = state.config.llm.provider.as_str(),
        { GEN_AI_REQUEST_MODEL } = state.config.llm.model.as_str(),
        { GEN_AI_REQUEST_TEMPERATURE } = state.config.llm.temperature,
        { GEN_AI_REQUEST_MAX_TOKENS } = state.config.llm.max_tokens,
    );
    let roadmap = service
        .generate(&request.skills, &request.goal)
        .instrument(span)
        .await?;

    let elapsed = start.elapsed().as_millis() as u64;
    Ok(Json(
        ApiResponse::success(roadmap, request_id, elapsed).with_link("self", "/api/v1/roadmap"),
    ))
}
