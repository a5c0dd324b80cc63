use thiserror::Error;

/// Service layer errors - combines all error types
#[derive(Error, Debug)]
pub enum ServiceError {
    #[error(transparent)]
    DatabaseError(#[from] eventsite_db::error::DbError),

    #[error(transparent)]
    CoreError(#[from] eventsite_core::error::CoreError),

    #[error("Not authenticated")]
    NotAuthenticated,

    #[error("Invalid configuration: {0}")]
    InvalidConfiguration(String),
}

impl ServiceError {
    /// Whether the error came from failing to check out a database connection.
    #[must_use]
    pub fn is_unavailable(&self) -> bool {
        matches!(
            self,
            Self::DatabaseError(eventsite_db::error::DbError::PoolError(_))
        )
    }
}

pub type ServiceResult<T> = std::result::Result<T, ServiceError>;
