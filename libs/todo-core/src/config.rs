//! Configuration management for the todo service

use crate::error::{Result, TodoError};
use std::path::{Path, PathBuf};
use std::time::Duration;
use todo_common::{get_default_database_path, DEFAULT_HOST, DEFAULT_PORT};

/// Runtime configuration: where the data lives and where to listen
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TodoConfig {
    /// Path to the SQLite file holding the `todo` table
    pub database_path: PathBuf,
    /// Interface to bind
    pub host: String,
    /// TCP port to bind
    pub port: u16,
}

impl TodoConfig {
    /// Create a new configuration with a custom database path and the default address
    #[must_use]
    pub fn new<P: AsRef<Path>>(database_path: P) -> Self {
        Self {
            database_path: database_path.as_ref().to_path_buf(),
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
        }
    }

    /// Set the interface to bind
    #[must_use]
    pub fn with_host(mut self, host: impl Into<String>) -> Self {
        self.host = host.into();
        self
    }

    /// Set the port to bind
    #[must_use]
    pub fn with_port(mut self, port: u16) -> Self {
        self.port = port;
        self
    }

    /// Create configuration from environment variables
    ///
    /// Reads `TODO_DATABASE_PATH`, `TODO_HOST` and `TODO_PORT`; unset
    /// variables keep their defaults.
    ///
    /// # Errors
    /// Returns `TodoError::Configuration` if `TODO_PORT` is not a valid port number
    pub fn from_env() -> Result<Self> {
        let mut config = Self::default();

        if let Ok(path) = std::env::var("TODO_DATABASE_PATH") {
            config.database_path = PathBuf::from(path);
        }
        if let Ok(host) = std::env::var("TODO_HOST") {
            config.host = host;
        }
        if let Ok(port) = std::env::var("TODO_PORT") {
            config.port = port.trim().parse().map_err(|e| {
                TodoError::configuration(format!("Invalid TODO_PORT '{port}': {e}"))
            })?;
        }

        Ok(config)
    }

    /// `host:port` string suitable for binding a listener
    #[must_use]
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// Get the database path, checking that the file exists
    ///
    /// # Errors
    /// Returns `TodoError::DatabaseNotFound` if there is no file at the configured path
    pub fn get_effective_database_path(&self) -> Result<PathBuf> {
        if self.database_path.is_file() {
            Ok(self.database_path.clone())
        } else {
            Err(TodoError::DatabaseNotFound {
                path: self.database_path.display().to_string(),
            })
        }
    }
}

impl Default for TodoConfig {
    fn default() -> Self {
        Self::new(get_default_database_path())
    }
}

/// Connection settings for the storage client
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DatabaseConfig {
    /// Upper bound on open connections; the service shares a single one
    pub max_connections: u32,
    /// How long a request waits for the connection before failing
    pub acquire_timeout: Duration,
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            max_connections: 1,
            acquire_timeout: Duration::from_secs(30),
        }
    }
}
