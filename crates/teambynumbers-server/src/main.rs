//! teambynumbers dashboard
//!
//! - HTML overview at `/`, entry form at `/new`
//! - JSON API under `/api/v1`
//! - Prometheus gauges at `/api/v1/metrics`, refreshed by a background task
//!
//! Config path: first argument, else `TBN_CONFIG`, else `teambynumbers.yaml`.

use tracing_subscriber::{fmt, EnvFilter};

use teambynumbers_server::{app_state, config, router};

const DEFAULT_CONFIG_PATH: &str = "teambynumbers.yaml";

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    fmt().with_env_filter(filter).init();

    let path = std::env::args()
        .nth(1)
        .or_else(|| std::env::var("TBN_CONFIG").ok())
        .unwrap_or_else(|| DEFAULT_CONFIG_PATH.to_string());

    let cfg = config::load_from_file(&path)?;
    let listen = cfg.server.listen_addr()?;

    let state = app_state::AppState::new(cfg)?;
    // Runs until the process exits.
    let _exporter = state.start_exporter();
    let app = router::build_router(state);

    tracing::info!(%listen, config = %path, "teambynumbers starting");
    let listener = tokio::net::TcpListener::bind(listen).await?;

    axum::serve(listener, app).await?;
    Ok(())
}
