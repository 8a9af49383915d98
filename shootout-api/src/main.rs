//! shootout-api - Main entry point
//!
//! Serves the pedal catalog and planners over HTTP. The database is read
//! only; by default the schema is created on first start so an empty
//! catalog still serves.

use std::path::PathBuf;

use anyhow::{Context, Result};
use axum::http::{HeaderValue, Method};
use clap::Parser;
use shootout_common::config::{ConfigOverrides, ServiceConfig};
use shootout_common::db::{connect_readonly, init_database};
use shootout_api::{build_router, AppState};
use tokio::signal;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Command-line arguments for shootout-api
#[derive(Parser, Debug)]
#[command(name = "shootout-api")]
#[command(about = "Pedal catalog and planning service")]
#[command(version)]
struct Args {
    /// Path to the SQLite catalog database
    #[arg(short, long, env = "SHOOTOUT_DATABASE")]
    database: Option<PathBuf>,

    /// Address to bind
    #[arg(long, env = "SHOOTOUT_HOST")]
    host: Option<String>,

    /// Port to listen on
    #[arg(short, long, env = "SHOOTOUT_PORT")]
    port: Option<u16>,

    /// TOML configuration file
    #[arg(short, long, env = "SHOOTOUT_CONFIG")]
    config: Option<PathBuf>,

    /// Open an existing database read-only instead of creating the schema
    #[arg(long)]
    read_only: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    let overrides = ConfigOverrides {
        database_path: args.database,
        host: args.host,
        port: args.port,
        read_only: args.read_only,
    };
    let config = ServiceConfig::load(args.config.as_deref(), overrides)
        .await
        .context("Failed to load configuration")?;

    // RUST_LOG wins over the configured level
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                format!(
                    "shootout_api={level},shootout_common={level},tower_http={level}",
                    level = config.log_level
                )
                .into()
            }),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!(
        "Starting shootout-api v{} on {}",
        env!("CARGO_PKG_VERSION"),
        config.bind_address()
    );
    info!("Database path: {}", config.database_path.display());

    let pool = if config.read_only {
        let pool = connect_readonly(&config.database_path)
            .await
            .context("Failed to open database read-only")?;
        info!("Connected to database (read-only)");
        pool
    } else {
        init_database(&config.database_path)
            .await
            .context("Failed to initialize database")?
    };

    let cors = cors_layer(&config.allowed_origins)?;
    let app = build_router(AppState::new(pool))
        .layer(cors)
        .layer(TraceLayer::new_for_http());

    let listener = tokio::net::TcpListener::bind(config.bind_address())
        .await
        .context("Failed to bind to address")?;
    info!("Listening on http://{}", config.bind_address());
    info!("Health check: http://{}/health", config.bind_address());

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("Server error")?;

    info!("Server shutdown complete");
    Ok(())
}

/// Browser access for the configured origins, GET only
fn cors_layer(allowed_origins: &[String]) -> Result<CorsLayer> {
    let origins = allowed_origins
        .iter()
        .map(|origin| {
            origin
                .parse::<HeaderValue>()
                .with_context(|| format!("Invalid CORS origin: {}", origin))
        })
        .collect::<Result<Vec<_>>>()?;

    info!("CORS allowed origins: {}", allowed_origins.join(", "));

    Ok(CorsLayer::new()
        .allow_origin(origins)
        .allow_methods([Method::GET]))
}

/// Graceful shutdown signal handler
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            tracing::error!("Failed to install Ctrl+C handler: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sig) => {
                sig.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to install signal handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            info!("Received Ctrl+C, shutting down");
        },
        _ = terminate => {
            info!("Received terminate signal, shutting down");
        },
    }
}
