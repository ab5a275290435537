//! Error helpers for dalkit-store
//!
//! Everything surfaces as [`DalError`] so callers see one error type no
//! matter which backing store a repository uses.

use dalkit_core::errors::DalError;

/// Result type alias using DalError
pub type Result<T> = std::result::Result<T, DalError>;

/// Create a database error from rusqlite::Error
pub fn from_rusqlite(err: rusqlite::Error) -> DalError {
    DalError::Persistence {
        message: err.to_string(),
    }
}

/// Create a migration error
pub fn migration_error(migration_id: &str, reason: &str) -> DalError {
    DalError::Persistence {
        message: format!("Migration {} failed: {}", migration_id, reason),
    }
}

/// Create a poisoned-connection error
pub fn connection_poisoned() -> DalError {
    DalError::Persistence {
        message: "SQLite connection lock poisoned".to_string(),
    }
}

/// Wrap a decoding failure for column `index` so it can leave a row mapper
pub fn invalid_column(index: usize, err: DalError) -> rusqlite::Error {
    rusqlite::Error::FromSqlConversionFailure(index, rusqlite::types::Type::Text, Box::new(err))
}

/// Recover a [`DalError`] smuggled out of a row mapper by [`invalid_column`]
pub fn from_row_error(err: rusqlite::Error) -> DalError {
    match err {
        rusqlite::Error::FromSqlConversionFailure(_, _, source) => {
            match source.downcast::<DalError>() {
                Ok(dal) => *dal,
                Err(other) => DalError::Persistence {
                    message: other.to_string(),
                },
            }
        }
        other => from_rusqlite(other),
    }
}
