//! Countdown Timer - keypad-driven countdown with an HTTP control surface
//!
//! This is the main entry point for the countdown-timer application.

use std::sync::Arc;
use anyhow::Context;
use tokio::net::TcpListener;
use tracing::info;

use countdown_timer::{
    config::Config,
    engine::TimerEngine,
    state::AppState,
    api::create_router,
    utils::shutdown_signal,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = Config::parse();

    // Initialize tracing with appropriate log level
    tracing_subscriber::fmt()
        .with_env_filter(format!("countdown_timer={},tower_http=info", config.log_level()))
        .init();

    let initial_duration = config
        .initial_duration_secs()
        .context("invalid --duration")?;

    info!("Starting countdown-timer server v{}", env!("CARGO_PKG_VERSION"));
    info!("Configuration: host={}, port={}, duration={}s",
          config.host, config.port, initial_duration);

    // Spawn the countdown engine
    let engine = TimerEngine::spawn(initial_duration);
    if config.start {
        engine.start_at_launch().await.context("failed to start countdown")?;
    }

    let state = Arc::new(AppState::new(engine, config.port, config.host.clone()));
    let app = create_router(state);

    let addr = config.address();
    let listener = TcpListener::bind(&addr)
        .await
        .with_context(|| format!("failed to bind {}", addr))?;

    info!("Server running on http://{}", addr);
    info!("Endpoints:");
    info!("  POST /timer/start - Start a countdown from keypad digits");
    info!("  POST /timer/pause - Pause/resume (starts if idle)");
    info!("  POST /timer/reset - Restore the full duration");
    info!("  GET  /timer       - Current display state");
    info!("  GET  /status      - Display state and server info");
    info!("  GET  /health      - Health check");

    // Setup graceful shutdown
    let server = axum::serve(listener, app);

    tokio::select! {
        result = server => {
            if let Err(e) = result {
                tracing::error!("Server error: {}", e);
            }
        }
        _ = shutdown_signal() => {
            info!("Shutdown signal received");
        }
    }

    info!("Server shutdown complete");
    Ok(())
}
