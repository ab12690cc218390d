//! Common error types for tunebase

use thiserror::Error;

/// Common result type for tunebase operations
pub type Result<T> = std::result::Result<T, Error>;

/// Common error types across tunebase processes
#[derive(Error, Debug)]
pub enum Error {
    /// Database operation error (wraps sqlx::Error)
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// I/O operation error (wraps std::io::Error)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration loading or validation error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Referenced entity does not exist
    #[error("Not found: {0}")]
    NotFound(String),

    /// Unique field already taken
    #[error("Conflict: {0}")]
    Conflict(String),

    /// Missing or malformed request field
    #[error("Validation error: {0}")]
    Validation(String),
}

impl Error {
    /// Map a constraint violation raised by the store into the matching
    /// domain error, leaving every other database error untouched.
    ///
    /// `unique` and `foreign_key` supply the messages used when the insert
    /// lost a race against a concurrent writer.
    pub fn from_constraint(err: sqlx::Error, unique: &str, foreign_key: &str) -> Self {
        if let sqlx::Error::Database(ref db_err) = err {
            if db_err.is_unique_violation() {
                return Error::Conflict(unique.to_string());
            }
            if db_err.is_foreign_key_violation() {
                return Error::NotFound(foreign_key.to_string());
            }
        }
        Error::Database(err)
    }
}
