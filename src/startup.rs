use std::path::Path;

use migration::{Migrator, MigratorTrait};
use sea_orm::{ConnectOptions, Database, DatabaseConnection};
use tracing_subscriber::EnvFilter;

use crate::{config::Config, error::AppError};

/// Installs the global tracing subscriber.
///
/// Verbosity comes from `RUST_LOG` and defaults to `info`.
pub fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt().with_env_filter(filter).init();
}

/// Creates the data directory if it does not exist yet.
pub async fn ensure_data_dir(path: &Path) -> Result<(), AppError> {
    tokio::fs::create_dir_all(path).await?;

    Ok(())
}

/// Applies pending migrations. Safe to call on an up-to-date schema.
pub async fn ensure_schema(db: &DatabaseConnection) -> Result<(), AppError> {
    Migrator::up(db, None).await?;

    Ok(())
}

/// Connects to the SQLite database and runs pending migrations.
///
/// Creates the data directory first so SQLite can create the database file in it.
///
/// # Arguments
/// - `config` - Application configuration containing the database URL and data directory
///
/// # Returns
/// - `Ok(DatabaseConnection)` - Connected database with migrations applied
/// - `Err(AppError)` - Failed to create the directory, connect or run migrations
pub async fn connect_to_database(config: &Config) -> Result<DatabaseConnection, AppError> {
    ensure_data_dir(&config.data_dir).await?;

    let mut opt = ConnectOptions::new(&config.database_url);
    opt.sqlx_logging(false);

    let db = Database::connect(opt).await?;

    ensure_schema(&db).await?;

    Ok(db)
}
