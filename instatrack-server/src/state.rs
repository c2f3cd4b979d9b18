use std::sync::Arc;

use axum::http::HeaderMap;
use instatrack_types::Dataset;

use crate::config::Settings;
use crate::generator::MockGenerator;
use crate::session::SessionStore;

pub const SESSION_HEADER: &str = "X-Session-Token";

#[derive(Clone)]
pub struct AppState {
    pub settings: Arc<Settings>,
    pub generator: MockGenerator,
    pub sessions: SessionStore,
}

impl AppState {
    pub fn new(settings: Settings) -> Self {
        let generator = MockGenerator::new(settings.analysis.seed);
        let sessions = SessionStore::new(settings.session_ttl());
        Self {
            settings: Arc::new(settings),
            generator,
            sessions,
        }
    }

    /// Session token from the request headers, if any
    pub fn session_token(headers: &HeaderMap) -> Option<&str> {
        headers
            .get(SESSION_HEADER)
            .and_then(|v| v.to_str().ok())
            .map(str::trim)
            .filter(|t| !t.is_empty())
    }

    /// Dataset of the calling session; missing or expired sessions have none
    pub fn session_dataset(&self, headers: &HeaderMap) -> Option<Dataset> {
        Self::session_token(headers).and_then(|token| self.sessions.dataset(token))
    }
}
