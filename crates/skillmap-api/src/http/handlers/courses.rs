//! Course catalogue endpoints.
//!
//! GET /api/v1/courses - the loaded catalogue.
//! GET /api/v1/courses/search - embedding-based recommendation.

use std::time::Instant;

use axum::Json;
use axum::extract::{Query, State};
use serde::Deserialize;

use skillmap_types::course::Course;

use crate::http::error::AppError;
use crate::http::response::ApiResponse;
use crate::state::AppState;

/// GET /api/v1/courses - List the full catalogue.
pub async fn list_courses(State(state): State<AppState>) -> Json<ApiResponse<Vec<Course>>> {
    let start = Instant::now();
    let request_id = uuid::Uuid::now_v7().to_string();

    let catalogue = state.recommender.catalogue().to_vec();

    let elapsed = start.elapsed().as_millis() as u64;
    Json(
        ApiResponse::success(catalogue, request_id, elapsed)
            .with_link("self", "/api/v1/courses")
            .with_link("search", "/api/v1/courses/search"),
    )
}

/// Query parameters for course search.
#[derive(Debug, Deserialize)]
pub struct SearchParams {
    /// Free-text skill-gap description.
    q: String,
    /// Number of courses to return.
    #[serde(default = "default_k")]
    k: usize,
}

fn default_k() -> usize {
    skillmap_core::recommend::DEFAULT_COURSE_K
}

/// GET /api/v1/courses/search - Recommend courses for a skill gap.
pub async fn search_courses(
    State(state): State<AppState>,
    Query(params): Query<SearchParams>,
) -> Result<Json<ApiResponse<Vec<Course>>>, AppError> {
    let start = Instant::now();
    let request_id = uuid::Uuid::now_v7().to_string();

    let query = params.q.trim();
    if query.is_empty() {
        return Err(AppError::Validation("query must not be empty".to_string()));
    }
    if params.k == 0 {
        return Err(AppError::Validation("k must be at least 1".to_string()));
    }

    let courses = state.recommender.recommend(query, params.k).await?;

    let elapsed = start.elapsed().as_millis() as u64;
    Ok(Json(
        ApiResponse::success(courses, request_id, elapsed)
            .with_link("self", "/api/v1/courses/search"),
    ))
}
