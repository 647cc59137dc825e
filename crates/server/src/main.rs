//! MojFlix web server.
//!
//! Loads the catalog snapshots, then serves the browser page and JSON API.

use std::process::ExitCode;

use anyhow::{Context, Result};
use tokio::net::TcpListener;
use tracing::{info, warn};

use server::web::{create_router, AppState};
use server::{load_catalog, Config, MovieBrowser};

#[tokio::main]
async fn main() -> Result<ExitCode> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,server=debug,pipeline=debug,poster_client=debug".into()),
        )
        .init();

    info!("Starting MojFlix server");

    let config = Config::from_env()?;

    info!("Loading catalog...");
    let Some(catalog) = load_catalog(&config.movies_path(), &config.similarity_path())
        .context("Failed to load catalog")?
    else {
        return Ok(ExitCode::FAILURE);
    };
    info!("Catalog loaded: {} movies", catalog.len());

    let posters = config.poster_resolver(false)?;
    let browser = MovieBrowser::new(catalog, posters);
    let app = create_router(AppState::new(browser));

    let addr = format!("{}:{}", config.host, config.port);
    let listener = TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;
    info!("Server running on http://{}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("Server error")?;

    info!("Server stopped");
    Ok(ExitCode::SUCCESS)
}

async fn shutdown_signal() {
    match tokio::signal::ctrl_c().await {
        Ok(()) => info!("Shutdown signal received"),
        Err(e) => {
            warn!(error = %e, "Failed to listen for shutdown signal");
            std::future::pending::<()>().await;
        }
    }
}
