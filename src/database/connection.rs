use crate::config::{DatabaseConfig, Driver};
use crate::database::SchemaRegistry;
use crate::error::{AppError, AppResult};
use crate::repositories::Store;
use migration::{Migrator, MigratorTrait, SchemaManager};
use sea_orm::{ConnectOptions, Database, DatabaseConnection};
use std::sync::Arc;
use std::time::Duration;

pub type DbPool = DatabaseConnection;

pub async fn create_pool(config: &DatabaseConfig) -> AppResult<DbPool> {
    config.validate()?;
    let driver = config.driver()?;

    let mut options = ConnectOptions::new(config.connection_url()?);
    options
        .max_connections(config.max_connections)
        .connect_timeout(Duration::from_secs(config.connect_timeout_secs))
        .sqlx_logging(false);
    if driver == Driver::Sqlite && config.dbname == ":memory:" {
        // 每个连接各自持有一个内存库，只能共用同一个连接
        options.max_connections(1).min_connections(1);
    }

    let pool = Database::connect(options).await.map_err(|e| {
        AppError::ConnectionError(format!(
            "Cannot connect to {driver} database {} at {}:{}: {e}",
            config.dbname, config.host, config.port
        ))
    })?;

    Ok(pool)
}

/// Creates missing tables, then checks every registered table and column exists.
///
/// Migrations only ever add structures, so running this against an up-to-date
/// database is a no-op.
pub async fn sync_schema(pool: &DbPool, registry: &SchemaRegistry) -> AppResult<()> {
    Migrator::up(pool, None)
        .await
        .map_err(|e| AppError::SchemaSyncError(format!("Failed to run migrations: {e}")))?;

    let manager = SchemaManager::new(pool);
    for table in registry.tables() {
        let has_table = manager
            .has_table(&table.name)
            .await
            .map_err(|e| AppError::SchemaSyncError(format!("Cannot inspect {}: {e}", table.name)))?;
        if !has_table {
            return Err(AppError::SchemaSyncError(format!(
                "Table {} is missing after migration",
                table.name
            )));
        }

        for column in &table.columns {
            let has_column = manager
                .has_column(&table.name, &column.name)
                .await
                .map_err(|e| {
                    AppError::SchemaSyncError(format!(
                        "Cannot inspect {}.{}: {e}",
                        table.name, column.name
                    ))
                })?;
            if !has_column {
                return Err(AppError::SchemaSyncError(format!(
                    "Column {}.{} is missing after migration",
                    table.name, column.name
                )));
            }
        }
    }

    Ok(())
}

/// Connects, synchronises the schema and hands back the repositories.
///
/// Every failure here is fatal for the process; it is logged before being returned.
pub async fn bootstrap(config: &DatabaseConfig) -> AppResult<Store> {
    let registry = Arc::new(SchemaRegistry::food_ordering());

    let pool = match create_pool(config).await {
        Ok(pool) => {
            log::info!(
                "Connected to {} database {}",
                config.driver,
                config.dbname
            );
            pool
        }
        Err(e) => {
            log::error!("Database setup failed [{}]: {e}", e.code());
            return Err(e);
        }
    };

    if let Err(e) = sync_schema(&pool, &registry).await {
        log::error!("Schema synchronization failed: {e}");
        return Err(e);
    }
    log::info!("Schema synchronized ({} tables)", registry.len());

    Ok(Store::new(pool, registry))
}
