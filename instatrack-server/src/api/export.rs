use axum::{
    extract::State,
    http::{header, HeaderMap},
    response::{IntoResponse, Response},
};
use chrono::Utc;
use instatrack_types::Dataset;

use crate::{
    api::ApiResult,
    export::{export_filename, CsvExporter, Exporter, JsonExporter},
    state::AppState,
};

fn download<E: Exporter>(exporter: E, state: &AppState, headers: &HeaderMap) -> ApiResult<Response> {
    let now = Utc::now();
    let dataset = state
        .session_dataset(headers)
        .unwrap_or_else(|| Dataset::empty(now));

    let body = exporter.export(&dataset)?;
    let disposition = format!(
        "attachment; filename=\"{}\"",
        export_filename(exporter.extension(), now)
    );

    Ok((
        [
            (header::CONTENT_TYPE, exporter.content_type().to_string()),
            (header::CONTENT_DISPOSITION, disposition),
        ],
        body,
    )
        .into_response())
}

/// GET /api/export/csv - Flattened dataset of the current session as CSV
pub async fn export_csv(State(state): State<AppState>, headers: HeaderMap) -> ApiResult<Response> {
    download(CsvExporter::new(), &state, &headers)
}

/// GET /api/export/json - Same rows as the CSV export, as a JSON array
pub async fn export_json(State(state): State<AppState>, headers: HeaderMap) -> ApiResult<Response> {
    download(JsonExporter::new(), &state, &headers)
}
