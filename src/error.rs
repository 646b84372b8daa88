use sea_orm::{DbErr, SqlErr};
use thiserror::Error;

pub type AppResult<T> = Result<T, AppError>;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Config error: {0}")]
    ConfigError(String),

    #[error("Driver registration error: {0}")]
    DriverRegistrationError(String),

    #[error("Connection error: {0}")]
    ConnectionError(String),

    #[error("Schema sync error: {0}")]
    SchemaSyncError(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Constraint violation: {0}")]
    ConstraintError(String),

    #[error("Database error: {0}")]
    DatabaseError(DbErr),
}

impl AppError {
    /// Stable code for logs and callers matching on error kinds.
    pub fn code(&self) -> &'static str {
        match self {
            AppError::ConfigError(_) => "CONFIG_ERROR",
            AppError::DriverRegistrationError(_) => "DRIVER_REGISTRATION_ERROR",
            AppError::ConnectionError(_) => "CONNECTION_ERROR",
            AppError::SchemaSyncError(_) => "SCHEMA_SYNC_ERROR",
            AppError::NotFound(_) => "NOT_FOUND",
            AppError::ConstraintError(_) => "CONSTRAINT_ERROR",
            AppError::DatabaseError(_) => "DATABASE_ERROR",
        }
    }

    /// Startup errors; the process cannot continue after one of these.
    pub fn is_fatal(&self) -> bool {
        matches!(
            self,
            AppError::ConfigError(_)
                | AppError::DriverRegistrationError(_)
                | AppError::ConnectionError(_)
                | AppError::SchemaSyncError(_)
        )
    }
}

impl From<DbErr> for AppError {
    fn from(err: DbErr) -> Self {
        match err.sql_err() {
            Some(SqlErr::ForeignKeyConstraintViolation(msg)) => {
                log::warn!("Foreign key violation: {msg}");
                return AppError::ConstraintError(msg);
            }
            Some(SqlErr::UniqueConstraintViolation(msg)) => {
                log::warn!("Unique constraint violation: {msg}");
                return AppError::ConstraintError(msg);
            }
            _ => {}
        }

        match err {
            DbErr::RecordNotFound(msg) => AppError::NotFound(msg),
            DbErr::RecordNotUpdated => AppError::NotFound("Record not updated".to_string()),
            err => {
                log::error!("Database error: {err}");
                AppError::DatabaseError(err)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_not_found_maps_to_not_found() {
        let err: AppError = DbErr::RecordNotFound("city #7".to_string()).into();
        assert!(matches!(err, AppError::NotFound(ref m) if m == "city #7"));
        assert_eq!(err.code(), "NOT_FOUND");
        assert!(!err.is_fatal());
    }

    #[test]
    fn test_other_db_errors_are_kept() {
        let err: AppError = DbErr::Custom("boom".to_string()).into();
        assert!(matches!(err, AppError::DatabaseError(_)));
    }

    #[test]
    fn test_startup_errors_are_fatal() {
        assert!(AppError::ConfigError("missing host".into()).is_fatal());
        assert!(AppError::DriverRegistrationError("oracle".into()).is_fatal());
        assert!(AppError::ConnectionError("refused".into()).is_fatal());
        assert!(AppError::SchemaSyncError("no table".into()).is_fatal());
        assert!(!AppError::ConstraintError("fk".into()).is_fatal());
    }
}
