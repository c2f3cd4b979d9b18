use axum::{
    extract::{rejection::JsonRejection, State},
    http::HeaderMap,
    Json,
};
use chrono::Utc;
use instatrack_types::{AnalysisRequest, AnalysisResponse, Dataset, DashboardView};

use crate::{
    analytics::render_dashboard,
    api::{ApiError, ApiResult},
    handles::normalize_handles,
    state::AppState,
};

/// POST /api/analysis - Generate mock data for the selected handles
///
/// Every call is a full re-run: the session's previous dataset is replaced.
/// An empty handle list is not an error; it yields an empty dashboard.
/// Malformed bodies are rejected with a JSON 400.
pub async fn run_analysis(
    State(state): State<AppState>,
    headers: HeaderMap,
    payload: Result<Json<AnalysisRequest>, JsonRejection>,
) -> ApiResult<Json<AnalysisResponse>> {
    let Json(payload) = payload?;
    let bounds = &state.settings.analysis;
    let post_count = payload.post_count.unwrap_or(bounds.default_posts);

    if !(bounds.min_posts..=bounds.max_posts).contains(&post_count) {
        return Err(ApiError::BadRequest(format!(
            "post_count must be between {} and {}",
            bounds.min_posts, bounds.max_posts
        )));
    }

    let handles = normalize_handles(&payload.handles);
    tracing::info!(
        "Starting analysis for {} handles ({} posts each)",
        handles.len(),
        post_count
    );

    let dataset = state
        .generator
        .generate_dataset(&handles, post_count, Utc::now());
    let dashboard = render_dashboard(&dataset);

    let session_token = state
        .sessions
        .store_dataset(AppState::session_token(&headers), dataset);

    Ok(Json(AnalysisResponse {
        session_token,
        dashboard,
    }))
}

/// GET /api/analysis - Dashboard for the current session
///
/// Sessions without an analysis get the "no data" dashboard.
pub async fn get_analysis(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> ApiResult<Json<DashboardView>> {
    let dataset = state
        .session_dataset(&headers)
        .unwrap_or_else(|| Dataset::empty(Utc::now()));

    Ok(Json(render_dashboard(&dataset)))
}

/// DELETE /api/analysis - Forget the current session's analysis
pub async fn clear_analysis(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> ApiResult<Json<serde_json::Value>> {
    let cleared = AppState::session_token(&headers)
        .map(|token| state.sessions.clear(token))
        .unwrap_or(false);

    Ok(Json(serde_json::json!({ "cleared": cleared })))
}
