pub mod config;
pub mod database;
pub mod entities;
pub mod error;
pub mod logging;
pub mod models;
pub mod repositories;

pub use config::Config;
pub use database::{SchemaRegistry, bootstrap};
pub use error::{AppError, AppResult};
pub use repositories::Store;
