//! Todo Server - REST API over the todo list
//!
//! Startup runs in a fixed order: configuration, logging, storage, listener.

pub mod error;
pub mod extract;
pub mod health;
pub mod logging;
pub mod routes;

use anyhow::Context;
use clap::Parser;
use std::path::PathBuf;
use std::sync::Arc;
use todo_core::{TodoConfig, TodoDatabase};
use tokio::net::TcpListener;
use tracing::{info, instrument};

pub use error::ApiError;
pub use logging::{init_logging, LogFormat};
pub use routes::{build_router, AppState};

#[derive(Parser, Debug)]
#[command(name = "todo-server")]
#[command(about = "Todo list REST API backed by SQLite")]
#[command(version)]
pub struct Cli {
    /// Database path (defaults to ./todoApplication.db)
    #[arg(long, short)]
    pub database: Option<PathBuf>,

    /// Interface to bind
    #[arg(long)]
    pub host: Option<String>,

    /// Port to listen on
    #[arg(long, short)]
    pub port: Option<u16>,

    /// Enable verbose output
    #[arg(long, short)]
    pub verbose: bool,

    /// Log output format
    #[arg(long, value_enum, env = "TODO_LOG_FORMAT", default_value_t = LogFormat::Pretty)]
    pub log_format: LogFormat,
}

impl Cli {
    /// Environment configuration with command-line overrides applied
    ///
    /// # Errors
    /// Returns an error if the environment holds an invalid value
    pub fn config(&self) -> todo_core::Result<TodoConfig> {
        let mut config = TodoConfig::from_env()?;
        if let Some(database) = &self.database {
            config.database_path.clone_from(database);
        }
        if let Some(host) = &self.host {
            config.host.clone_from(host);
        }
        if let Some(port) = self.port {
            config.port = port;
        }
        Ok(config)
    }
}

/// Open the configured database and check that the `todo` table is there
///
/// # Errors
/// Returns an error if the file is missing, cannot be opened, or lacks the table
#[instrument]
pub async fn connect_database(config: &TodoConfig) -> todo_core::Result<TodoDatabase> {
    let path = config.get_effective_database_path()?;
    let database = TodoDatabase::new(&path).await?;
    database.verify_schema().await?;
    Ok(database)
}

/// Bind, serve until a shutdown signal arrives, then close the database
///
/// # Errors
/// Returns an error if the listener cannot be bound or the server fails
pub async fn serve(config: &TodoConfig, database: TodoDatabase) -> anyhow::Result<()> {
    let database = Arc::new(database);
    let app = build_router(AppState::new(Arc::clone(&database)));

    let listener = TcpListener::bind(config.bind_address())
        .await
        .with_context(|| format!("Failed to bind {}", config.bind_address()))?;
    let port = listener.local_addr()?.port();
    info!("Server Running at http://localhost:{}/", port);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("Server error")?;

    info!("Server stopped");
    database.close().await;
    Ok(())
}

/// Resolves on Ctrl-C, or SIGTERM on Unix
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("Failed to listen for Ctrl-C: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to listen for SIGTERM: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {},
        () = terminate => {},
    }

    info!("Shutdown signal received");
}
