use chrono::{DateTime, Duration, Utc};
use instatrack_types::Dataset;
use std::collections::HashMap;
use std::sync::{Arc, RwLock, RwLockWriteGuard};
use uuid::Uuid;

/// One browser's analysis state
#[derive(Debug, Clone)]
pub struct Session {
    pub dataset: Dataset,
    pub last_seen: DateTime<Utc>,
}

/// In-memory session store for analysis results
///
/// Each browser holds a UUID v4 token in the `X-Session-Token` header. The store
/// keeps the latest dataset per token:
/// - Storing a dataset replaces whatever the session held before
/// - Sessions idle longer than the TTL are dropped on lookup or by
///   [`SessionStore::cleanup_expired_sessions`]
///
/// Nothing is persisted; restarting the server forgets every session.
#[derive(Clone)]
pub struct SessionStore {
    sessions: Arc<RwLock<HashMap<String, Session>>>,
    ttl: Duration,
}

impl SessionStore {
    pub fn new(ttl: Duration) -> Self {
        Self {
            sessions: Arc::new(RwLock::new(HashMap::new())),
            ttl,
        }
    }

    // A poisoned lock only means another request panicked mid-update; the map
    // itself is still usable.
    fn write(&self) -> RwLockWriteGuard<'_, HashMap<String, Session>> {
        self.sessions.write().unwrap_or_else(|e| e.into_inner())
    }

    fn is_expired(&self, session: &Session, now: DateTime<Utc>) -> bool {
        now - session.last_seen > self.ttl
    }

    /// Store a dataset for the given token, or for a fresh session when the
    /// token is missing or unknown
    ///
    /// # Returns
    /// * `String` - The token the dataset was stored under
    pub fn store_dataset(&self, token: Option<&str>, dataset: Dataset) -> String {
        let now = Utc::now();
        let mut sessions = self.write();

        let existing = token
            .filter(|t| {
                sessions
                    .get(*t)
                    .map(|s| !self.is_expired(s, now))
                    .unwrap_or(false)
            })
            .map(str::to_string);

        match existing {
            Some(token) => {
                if let Some(session) = sessions.get_mut(&token) {
                    session.dataset = dataset;
                    session.last_seen = now;
                }
                tracing::debug!("Replaced dataset for existing session");
                token
            }
            None => {
                let token = Uuid::new_v4().to_string();
                sessions.insert(
                    token.clone(),
                    Session {
                        dataset,
                        last_seen: now,
                    },
                );
                tracing::info!("Created analysis session ({} active)", sessions.len());
                token
            }
        }
    }

    /// Latest dataset for a token, refreshing its idle timer
    pub fn dataset(&self, token: &str) -> Option<Dataset> {
        self.dataset_at(token, Utc::now())
    }

    fn dataset_at(&self, token: &str, now: DateTime<Utc>) -> Option<Dataset> {
        let mut sessions = self.write();

        let expired = match sessions.get(token) {
            Some(session) => self.is_expired(session, now),
            None => return None,
        };

        if expired {
            sessions.remove(token);
            tracing::debug!("Dropped expired session on lookup");
            return None;
        }

        sessions.get_mut(token).map(|session| {
            session.last_seen = now;
            session.dataset.clone()
        })
    }

    /// Forget a session's dataset
    ///
    /// # Returns
    /// * `bool` - Whether a session existed for the token
    pub fn clear(&self, token: &str) -> bool {
        self.write().remove(token).is_some()
    }

    /// Drop every session idle longer than the TTL
    ///
    /// # Returns
    /// * `usize` - Number of sessions removed
    pub fn cleanup_expired_sessions(&self) -> usize {
        self.cleanup_expired_at(Utc::now())
    }

    fn cleanup_expired_at(&self, now: DateTime<Utc>) -> usize {
        let mut sessions = self.write();
        let before = sessions.len();
        sessions.retain(|_, session| !self.is_expired(session, now));
        before - sessions.len()
    }
}
