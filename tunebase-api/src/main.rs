//! tunebase-api - Artist / album / song catalog service
//!
//! Resolves its root folder (CLI → environment → config file → OS default),
//! opens or creates `tunebase.db` there, and serves the catalog over HTTP.

use std::net::SocketAddr;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tokio::signal;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use tunebase_common::config::{self, TomlConfig, ROOT_FOLDER_ENV};
use tunebase_common::db::init_database;
use tunebase_api::{build_router, AppState};

/// Default listen port when neither CLI, environment, nor config file sets one
const DEFAULT_PORT: u16 = 5810;

/// Command-line arguments for tunebase-api
#[derive(Parser, Debug)]
#[command(name = "tunebase-api")]
#[command(about = "Artist, album and song catalog service")]
#[command(version)]
struct Args {
    /// Port to listen on
    #[arg(short, long, env = "TUNEBASE_PORT")]
    port: Option<u16>,

    /// Address to bind
    #[arg(short, long, env = "TUNEBASE_BIND")]
    bind: Option<String>,

    /// Root folder holding tunebase.db
    #[arg(short, long)]
    root_folder: Option<PathBuf>,

    /// Explicit database file (overrides the root folder)
    #[arg(short, long, env = "TUNEBASE_DATABASE")]
    database: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "tunebase_api=info,tower_http=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!(
        "Starting tunebase-api v{} [{}] built {} ({})",
        env!("CARGO_PKG_VERSION"),
        env!("GIT_HASH"),
        env!("BUILD_TIMESTAMP"),
        env!("BUILD_PROFILE")
    );

    let args = Args::parse();
    let toml_config = TomlConfig::load().context("Failed to load config file")?;

    let db_path = match args.database {
        Some(path) => path,
        None => {
            let root_folder =
                config::resolve_root_folder(args.root_folder.as_deref(), ROOT_FOLDER_ENV, &toml_config);
            info!("Root folder: {}", root_folder.display());
            config::database_path(&root_folder)
        }
    };
    info!("Database path: {}", db_path.display());

    let pool = init_database(&db_path)
        .await
        .context("Failed to initialize database")?;

    let app = build_router(AppState::new(pool.clone()));

    let port = args.port.or(toml_config.port).unwrap_or(DEFAULT_PORT);
    let bind = args
        .bind
        .or(toml_config.bind)
        .unwrap_or_else(|| "127.0.0.1".to_string());
    let addr: SocketAddr = format!("{}:{}", bind, port)
        .parse()
        .with_context(|| format!("Invalid bind address: {}:{}", bind, port))?;

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .context("Failed to bind to address")?;
    info!("tunebase-api listening on http://{}", addr);
    info!("Health check: http://{}/health", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("Server error")?;

    pool.close().await;
    info!("Server shutdown complete");
    Ok(())
}

/// Graceful shutdown signal handler
async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("Failed to install signal handler")
            .recv()
            .await;
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
