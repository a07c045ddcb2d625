//! Apply database migrations.

use tracing::info;

use catalog_core::config::AppConfig;
use catalog_core::error::AppError;
use catalog_database::migration::run_migrations;

/// Execute the migrate command
pub async fn execute(config: AppConfig) -> Result<(), AppError> {
    let db = super::connect(&config).await?;
    let result = run_migrations(db.pool()).await;
    db.close().await;
    result?;
    info!("All migrations applied");
    Ok(())
}
