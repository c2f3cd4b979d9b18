use chrono::Duration;
use config::{Config, ConfigError, File};
use instatrack_types::{ColorScheme, DashboardConfig, DashboardTab, TabInfo};
use serde::Deserialize;
use std::path::PathBuf;

use crate::generator::SAMPLE_HANDLES;

/// Longest idle time a session may be configured to survive (30 days)
pub const MAX_SESSION_TTL_MINUTES: i64 = 30 * 24 * 60;

#[derive(Debug, Clone, Deserialize)]
pub struct Server {
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Dashboard {
    pub title: String,
    pub color_scheme: String,
    #[serde(default = "default_sample_handles")]
    pub sample_handles: Vec<String>,
    #[serde(default = "default_selected_handles")]
    pub default_handles: Vec<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Analysis {
    pub min_posts: usize,
    pub max_posts: usize,
    pub default_posts: usize,
    /// Salt mixed into every per-handle seed
    pub seed: u64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Session {
    pub ttl_minutes: i64,
    pub cleanup_interval_secs: u64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub server: Server,
    pub dashboard: Dashboard,
    pub analysis: Analysis,
    pub session: Session,
}

fn default_sample_handles() -> Vec<String> {
    SAMPLE_HANDLES.iter().map(|h| h.to_string()).collect()
}

fn default_selected_handles() -> Vec<String> {
    SAMPLE_HANDLES[..3].iter().map(|h| h.to_string()).collect()
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            server: Server {
                host: "0.0.0.0".to_string(),
                port: 8501,
            },
            dashboard: Dashboard {
                title: "Instagram Competitor Analytics Tracker".to_string(),
                color_scheme: ColorScheme::Default.as_str().to_string(),
                sample_handles: default_sample_handles(),
                default_handles: default_selected_handles(),
            },
            analysis: Analysis {
                min_posts: 10,
                max_posts: 50,
                default_posts: 20,
                seed: 0,
            },
            session: Session {
                ttl_minutes: 120,
                cleanup_interval_secs: 600,
            },
        }
    }
}

impl Settings {
    pub fn new() -> Result<Self, ConfigError> {
        let defaults = Settings::default();
        let mut builder = Config::builder();

        // 1. Try to load from settings.toml (optional)
        let config_file_name = "settings.toml";

        // Check in current directory
        let current_dir_path = PathBuf::from(config_file_name);
        if current_dir_path.exists() {
            builder = builder.add_source(File::from(current_dir_path).required(false));
        }

        // Check in instatrack-server directory (for development)
        let dev_path = PathBuf::from("instatrack-server").join(config_file_name);
        if dev_path.exists() {
            builder = builder.add_source(File::from(dev_path).required(false));
        }

        // 2. Defaults for anything the file leaves out
        builder = builder
            .set_default("server.host", defaults.server.host)?
            .set_default("server.port", i64::from(defaults.server.port))?
            .set_default("dashboard.title", defaults.dashboard.title)?
            .set_default("dashboard.color_scheme", defaults.dashboard.color_scheme)?
            .set_default("analysis.min_posts", defaults.analysis.min_posts as u64)?
            .set_default("analysis.max_posts", defaults.analysis.max_posts as u64)?
            .set_default("analysis.default_posts", defaults.analysis.default_posts as u64)?
            .set_default("analysis.seed", defaults.analysis.seed)?
            .set_default("session.ttl_minutes", defaults.session.ttl_minutes)?
            .set_default(
                "session.cleanup_interval_secs",
                defaults.session.cleanup_interval_secs,
            )?;

        // 3. Override with environment variables (highest priority)
        if let Ok(port) = std::env::var("PORT") {
            builder = builder.set_override("server.port", port)?;
        }
        if let Ok(host) = std::env::var("HOST") {
            builder = builder.set_override("server.host", host)?;
        }
        if let Ok(seed) = std::env::var("INSTATRACK_SEED") {
            builder = builder.set_override("analysis.seed", seed)?;
        }
        if let Ok(ttl) = std::env::var("SESSION_TTL_MINUTES") {
            builder = builder.set_override("session.ttl_minutes", ttl)?;
        }

        let settings: Settings = builder.build()?.try_deserialize()?;
        settings.validate()?;
        Ok(settings)
    }

    /// Reject post-count bounds the slider could not represent and session
    /// lifetimes outside 1 minute to 30 days
    pub fn validate(&self) -> Result<(), ConfigError> {
        let analysis = &self.analysis;
        if analysis.min_posts == 0 {
            return Err(ConfigError::Message(
                "analysis.min_posts must be greater than 0".to_string(),
            ));
        }
        if analysis.min_posts > analysis.max_posts {
            return Err(ConfigError::Message(format!(
                "analysis.min_posts ({}) exceeds analysis.max_posts ({})",
                analysis.min_posts, analysis.max_posts
            )));
        }
        if !(analysis.min_posts..=analysis.max_posts).contains(&analysis.default_posts) {
            return Err(ConfigError::Message(format!(
                "analysis.default_posts ({}) must lie within {}..={}",
                analysis.default_posts, analysis.min_posts, analysis.max_posts
            )));
        }
        let ttl = self.session.ttl_minutes;
        if !(1..=MAX_SESSION_TTL_MINUTES).contains(&ttl) {
            return Err(ConfigError::Message(format!(
                "session.ttl_minutes ({}) must lie within 1..={}",
                ttl, MAX_SESSION_TTL_MINUTES
            )));
        }
        if ColorScheme::parse(&self.dashboard.color_scheme).is_none() {
            return Err(ConfigError::Message(format!(
                "Invalid color scheme '{}'. Valid options: Default, Dark, Light, Solarized",
                self.dashboard.color_scheme
            )));
        }
        Ok(())
    }

    pub fn color_scheme(&self) -> ColorScheme {
        ColorScheme::parse(&self.dashboard.color_scheme).unwrap_or_default()
    }

    /// Session idle timeout, clamped to the range `validate` accepts
    pub fn session_ttl(&self) -> Duration {
        Duration::minutes(self.session.ttl_minutes.clamp(1, MAX_SESSION_TTL_MINUTES))
    }

    /// UI options served to the browser
    pub fn dashboard_config(&self) -> DashboardConfig {
        let color_scheme = self.color_scheme();
        DashboardConfig {
            title: self.dashboard.title.clone(),
            color_scheme,
            theme: color_scheme.palette(),
            sample_handles: self.dashboard.sample_handles.clone(),
            default_handles: self.dashboard.default_handles.clone(),
            min_posts: self.analysis.min_posts,
            max_posts: self.analysis.max_posts,
            default_posts: self.analysis.default_posts,
            tabs: DashboardTab::all()
                .into_iter()
                .map(|tab| TabInfo {
                    tab,
                    title: tab.title().to_string(),
                })
                .collect(),
        }
    }
}
