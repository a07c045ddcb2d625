//! Application configuration schemas.
//!
//! All configuration structs are deserialized from TOML files via the
//! `config` crate. Each sub-module represents a logical configuration
//! section.

pub mod app;
pub mod database;
pub mod logging;

use std::path::Path;

use serde::{Deserialize, Serialize};

pub use self::app::{CorsConfig, ServerConfig};
pub use self::database::DatabaseConfig;
pub use self::logging::LoggingConfig;

use crate::error::AppError;

/// Environment variable prefix for overrides, e.g. `CATALOG__SERVER__PORT`.
const ENV_PREFIX: &str = "CATALOG";

/// Root application configuration.
///
/// Top-level deserialization target for the merged configuration
/// (base file + environment overlay + environment variables).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    /// HTTP server settings.
    #[serde(default)]
    pub server: ServerConfig,
    /// Database connection settings.
    pub database: DatabaseConfig,
    /// Logging settings.
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl AppConfig {
    /// Load configuration.
    ///
    /// Reads `config_path` (extension optional), then the sibling overlay
    /// `{env}` file in the same directory if present, then environment
    /// variables prefixed with `CATALOG__`.
    pub fn load(config_path: &str, env: &str) -> Result<Self, AppError> {
        Self::load_with_vars(config_path, env, None)
    }

    /// Like [`AppConfig::load`], reading overrides from `vars` instead of
    /// the process environment when given.
    fn load_with_vars(
        config_path: &str,
        env: &str,
        vars: Option<config::Map<String, String>>,
    ) -> Result<Self, AppError> {
        let base = strip_extension(config_path);
        let overlay = Path::new(&base)
            .parent()
            .map(|dir| dir.join(env).to_string_lossy().into_owned())
            .unwrap_or_else(|| env.to_string());

        tracing::debug!(%base, %overlay, "Loading configuration");

        let config = config::Config::builder()
            .add_source(config::File::with_name(&base).required(false))
            .add_source(config::File::with_name(&overlay).required(false))
            .add_source(
                config::Environment::with_prefix(ENV_PREFIX)
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true)
                    .source(vars),
            )
            .build()
            .map_err(|e| AppError::configuration(format!("Failed to build config: {e}")))?;

        config
            .try_deserialize()
            .map_err(|e| AppError::configuration(format!("Failed to deserialize config: {e}")))
    }

    /// Build a configuration backed by a private in-memory database.
    ///
    /// Used by tests and local experiments; every field other than the
    /// database URL takes its default.
    pub fn in_memory() -> Self {
        Self {
            server: ServerConfig::default(),
            database: DatabaseConfig::in_memory(),
            logging: LoggingConfig::default(),
        }
    }

    /// The `host:port` address the HTTP server binds to.
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }
}

fn strip_extension(path: &str) -> String {
    match path.strip_suffix(".toml") {
        Some(stripped) => stripped.to_string(),
        None => path.to_string(),
    }
}
