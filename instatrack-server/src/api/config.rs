use axum::{extract::State, Json};
use instatrack_types::DashboardConfig;

use crate::state::AppState;

/// GET /api/config - Static UI options (title, theme, sample handles, slider bounds)
pub async fn get_config(State(state): State<AppState>) -> Json<DashboardConfig> {
    Json(state.settings.dashboard_config())
}
