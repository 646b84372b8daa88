mod common;

use cms_backend::config::DatabaseConfig;
use cms_backend::database::{SchemaRegistry, create_pool, sync_schema};
use cms_backend::{AppError, bootstrap};
use common::*;
use sea_orm::{ConnectionTrait, Statement};

#[tokio::test]
async fn test_sync_twice_is_noop() {
    let store = store().await;
    let city_id = store.cities.create(city("Shanghai")).await.unwrap();

    store.sync_schema().await.unwrap();
    store.sync_schema().await.unwrap();

    let conn = store.connection();
    let row = conn
        .query_one(Statement::from_string(
            conn.get_database_backend(),
            "SELECT COUNT(*) AS n FROM sqlite_master WHERE type = 'table' AND name = 'city'",
        ))
        .await
        .unwrap()
        .unwrap();
    let n: i64 = row.try_get("", "n").unwrap();
    assert_eq!(n, 1);
    assert_eq!(store.cities.get_by_id(city_id).await.unwrap().name, "Shanghai");
}

#[tokio::test]
async fn test_registry_matches_migrated_schema() {
    let pool = create_pool(&DatabaseConfig::sqlite_memory()).await.unwrap();
    let registry = SchemaRegistry::food_ordering();
    sync_schema(&pool, &registry).await.unwrap();
    assert_eq!(registry.len(), 13);
}

#[tokio::test]
async fn test_bootstrap_rejects_unknown_driver() {
    let mut config = DatabaseConfig::sqlite_memory();
    config.driver = "oracle".to_string();
    let err = bootstrap(&config).await.err().unwrap();
    assert!(matches!(err, AppError::DriverRegistrationError(_)));
    assert!(err.is_fatal());
}

#[tokio::test]
async fn test_bootstrap_rejects_incomplete_config() {
    let mut config = DatabaseConfig::sqlite_memory();
    config.dbname = String::new();
    assert!(matches!(
        bootstrap(&config).await.err(),
        Some(AppError::ConfigError(_))
    ));
}

#[tokio::test]
async fn test_unreachable_server_is_connection_error() {
    let config = DatabaseConfig {
        driver: "postgres".to_string(),
        user: "elm".to_string(),
        password: String::new(),
        host: "127.0.0.1".to_string(),
        port: 1,
        dbname: "elm".to_string(),
        charset: "utf8".to_string(),
        max_connections: 1,
        connect_timeout_secs: 1,
    };
    assert!(matches!(
        bootstrap(&config).await.err(),
        Some(AppError::ConnectionError(_))
    ));
}
