pub mod analysis;
pub mod config;
pub mod dashboard;
pub mod error;
pub mod export;

pub use error::{ApiError, ApiResult};

use axum::{routing::get, Router};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::state::AppState;

/// Build the full application router
pub fn create_router(state: AppState) -> Router {
    // Configure CORS
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        // Dashboard page
        .route("/", get(dashboard::index))
        // Health check
        .route("/health", get(health_check))
        // UI configuration
        .route("/api/config", get(config::get_config))
        // Analysis runs
        .route(
            "/api/analysis",
            get(analysis::get_analysis)
                .post(analysis::run_analysis)
                .delete(analysis::clear_analysis),
        )
        // Individual tabs
        .route("/api/dashboard/:tab", get(dashboard::get_tab))
        // Export routes
        .route("/api/export/csv", get(export::export_csv))
        .route("/api/export/json", get(export::export_json))
        .with_state(state)
        .layer(TraceLayer::new_for_http())
        .layer(cors)
}

pub async fn health_check() -> &'static str {
    "OK"
}
