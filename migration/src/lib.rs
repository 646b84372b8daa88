pub use sea_orm_migration::prelude::*;

mod m20240601_000001_create_reference_tables;
mod m20240601_000002_create_accounts_and_shops;
mod m20240601_000003_create_catalog_and_orders;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20240601_000001_create_reference_tables::Migration),
            Box::new(m20240601_000002_create_accounts_and_shops::Migration),
            Box::new(m20240601_000003_create_catalog_and_orders::Migration),
        ]
    }
}
