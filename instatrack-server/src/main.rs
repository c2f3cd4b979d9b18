use anyhow::Context;
use instatrack_server::{api, config, state::AppState};
use std::net::SocketAddr;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables from .env file
    dotenv::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "instatrack_server=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load settings
    let settings = config::Settings::new().context("Failed to load settings")?;
    tracing::info!(
        "Posts per profile: {}..={} (default {}), session TTL {} minutes",
        settings.analysis.min_posts,
        settings.analysis.max_posts,
        settings.analysis.default_posts,
        settings.session.ttl_minutes
    );

    let addr: SocketAddr = format!("{}:{}", settings.server.host, settings.server.port)
        .parse()
        .context("Failed to parse server address")?;
    let cleanup_every = settings.session.cleanup_interval_secs.max(1);

    // Create application state
    let state = AppState::new(settings);

    // Start background task for periodic session cleanup
    let cleanup_state = state.clone();
    tokio::spawn(async move {
        let mut interval = tokio::time::interval(tokio::time::Duration::from_secs(cleanup_every));
        loop {
            interval.tick().await;
            tracing::debug!("Running periodic session cleanup...");
            let count = cleanup_state.sessions.cleanup_expired_sessions();
            if count > 0 {
                tracing::info!("Periodic cleanup: removed {} expired sessions", count);
            }
        }
    });

    let app = api::create_router(state);

    // Start server
    tracing::info!("Starting dashboard on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .context("Failed to bind to address")?;

    axum::serve(listener, app).await.context("Server error")?;

    Ok(())
}
