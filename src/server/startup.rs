use crate::server::{config::DatabaseConfig, data::store::Store, error::AppError};

/// Opens the persistence backend named by configuration.
///
/// For SQLite, establishes a connection pool using the configured URL and then runs
/// all pending SeaORM migrations so the schema is up-to-date before any request is
/// served. The in-memory backend starts empty.
///
/// # Arguments
/// - `config` - Database section of the application configuration
///
/// # Returns
/// - `Ok(Store)` - Connected store with migrations applied
/// - `Err(AppError::DbErr)` - Failed to connect to database or run migrations
pub async fn connect_store(config: &DatabaseConfig) -> Result<Store, AppError> {
    use migration::{Migrator, MigratorTrait};
    use sea_orm::{ConnectOptions, Database};

    match config {
        DatabaseConfig::Sqlite { url } => {
            let mut opt = ConnectOptions::new(url);
            opt.sqlx_logging(false);

            let db = Database::connect(opt).await?;

            Migrator::up(&db, None).await?;
            tracing::info!("Connected to SQLite database, migrations applied");

            Ok(Store::Relational(db))
        }
        DatabaseConfig::Memory => {
            tracing::info!("Using in-memory store; data is lost on shutdown");

            Ok(Store::in_memory())
        }
    }
}
