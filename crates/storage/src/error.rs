use thiserror::Error;

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Not found")]
    NotFound,

    #[error("Constraint violation: {0}")]
    ConstraintViolation(String),

    #[error("Invalid stored value: {0}")]
    Units(#[from] units::UnitsError),
}

pub type Result<T> = std::result::Result<T, StorageError>;

impl StorageError {
    /// SQLite extended result code 2067: SQLITE_CONSTRAINT_UNIQUE.
    pub fn is_unique_violation(&self) -> bool {
        matches!(
            self,
            StorageError::Database(sqlx::Error::Database(e))
                if e.code().as_deref() == Some("2067")
        )
    }

    /// SQLite extended result code 787: SQLITE_CONSTRAINT_FOREIGNKEY.
    pub fn is_foreign_key_violation(&self) -> bool {
        matches!(
            self,
            StorageError::Database(sqlx::Error::Database(e))
                if e.code().as_deref() == Some("787")
        )
    }
}
