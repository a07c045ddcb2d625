//! CLI command definitions and dispatch.

pub mod migrate;
pub mod serve;

use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};

use catalog_core::config::AppConfig;
use catalog_core::error::AppError;
use catalog_database::DataContext;

/// Product catalog server
#[derive(Debug, Parser)]
#[command(name = "catalog-server", version, about, long_about = None)]
pub struct Cli {
    /// Path to configuration file
    #[arg(short, long, global = true, default_value = "config/default.toml")]
    pub config: String,

    /// Environment overlay loaded from the configuration directory
    #[arg(short, long, global = true, default_value = "development")]
    pub env: String,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Top-level commands
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Start the HTTP server
    Serve(serve::ServeArgs),
    /// Apply pending database migrations and exit
    Migrate,
}

impl Cli {
    /// Execute the selected command
    pub async fn execute(&self, config: AppConfig) -> Result<(), AppError> {
        match &self.command {
            Commands::Serve(args) => serve::execute(args, config).await,
            Commands::Migrate => migrate::execute(config).await,
        }
    }
}

/// Open the data context described by `config`.
///
/// Creates the directory holding a file-backed database first.
pub async fn connect(config: &AppConfig) -> Result<DataContext, AppError> {
    if let Some(dir) = database_dir(&config.database.url) {
        tokio::fs::create_dir_all(&dir).await.map_err(|e| {
            AppError::internal(format!("Failed to create dir '{}': {e}", dir.display()))
        })?;
    }
    DataContext::connect(&config.database).await
}

fn database_dir(url: &str) -> Option<PathBuf> {
    if url.contains(":memory:") || url.contains("mode=memory") {
        return None;
    }
    let path = url
        .strip_prefix("sqlite://")
        .or_else(|| url.strip_prefix("sqlite:"))?;
    let path = path.split('?').next().unwrap_or(path);
    Path::new(path)
        .parent()
        .filter(|p| !p.as_os_str().is_empty())
        .map(Path::to_path_buf)
}
