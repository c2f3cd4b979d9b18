use axum::{
    extract::{Path, State},
    http::HeaderMap,
    response::Html,
    Json,
};
use chrono::Utc;
use instatrack_types::{DashboardTab, Dataset, TabView};

use crate::{
    analytics::render_tab,
    api::{ApiError, ApiResult},
    state::AppState,
};

/// GET / - Dashboard page
pub async fn index() -> Html<&'static str> {
    Html(include_str!("../../static/dashboard.html"))
}

/// GET /api/dashboard/:tab - A single tab for the current session
pub async fn get_tab(
    State(state): State<AppState>,
    Path(tab): Path<String>,
    headers: HeaderMap,
) -> ApiResult<Json<TabView>> {
    let tab = DashboardTab::parse(&tab)
        .ok_or_else(|| ApiError::NotFound(format!("Unknown dashboard tab '{}'", tab)))?;

    let dataset = state
        .session_dataset(&headers)
        .unwrap_or_else(|| Dataset::empty(Utc::now()));

    Ok(Json(render_tab(&dataset, tab)))
}
