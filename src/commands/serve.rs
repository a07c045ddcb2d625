//! Start the catalog server.

use clap::Args;
use tracing::info;

use catalog_core::config::AppConfig;
use catalog_core::error::AppError;
use catalog_database::migration::run_migrations;

/// Arguments for the serve command
#[derive(Debug, Args)]
pub struct ServeArgs {
    /// Override the server port
    #[arg(short, long)]
    pub port: Option<u16>,

    /// Override the server host
    #[arg(long)]
    pub host: Option<String>,
}

/// Execute the serve command
pub async fn execute(args: &ServeArgs, mut config: AppConfig) -> Result<(), AppError> {
    if let Some(port) = args.port {
        config.server.port = port;
    }
    if let Some(ref host) = args.host {
        config.server.host = host.clone();
    }

    info!(
        version = env!("CARGO_PKG_VERSION"),
        address = %config.bind_address(),
        "Starting catalog server"
    );

    let db = super::connect(&config).await?;

    // An in-memory store is empty until migrated, whatever the setting says.
    if config.database.run_migrations || config.database.is_in_memory() {
        run_migrations(db.pool()).await?;
    }

    catalog_api::serve(config, db).await
}
