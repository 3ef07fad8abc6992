//! Error types for schema initialization and bulk loading.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

use crate::schema::ColumnType;

pub type Result<T> = std::result::Result<T, LoadError>;

#[derive(Debug, Error)]
pub enum LoadError {
    #[error("storage error: {0}")]
    Storage(rusqlite::Error),

    #[error("primary key or constraint violation: {message}")]
    ConstraintViolation { message: String },

    #[error("failed to open {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("malformed CSV: {0}")]
    Csv(#[from] csv::Error),

    #[error("header column {column:?} does not exist in table {table}")]
    UnknownColumn { table: &'static str, column: String },

    #[error("header column {column:?} appears more than once")]
    DuplicateColumn { column: String },

    #[error("header is missing required column {column:?}")]
    MissingColumn { column: &'static str },

    #[error("line {line}: required column {column:?} is empty")]
    MissingValue { line: u64, column: &'static str },

    #[error("line {line}: cannot coerce {value:?} in column {column:?} to {expected:?}")]
    Coercion {
        line: u64,
        column: &'static str,
        value: String,
        expected: ColumnType,
    },
}

impl LoadError {
    /// True for errors caused by the header not matching the table schema
    pub fn is_schema_mismatch(&self) -> bool {
        matches!(
            self,
            LoadError::UnknownColumn { .. }
                | LoadError::DuplicateColumn { .. }
                | LoadError::MissingColumn { .. }
        )
    }
}

impl From<rusqlite::Error> for LoadError {
    fn from(err: rusqlite::Error) -> Self {
        match err {
            rusqlite::Error::SqliteFailure(code, message)
                if code.code == rusqlite::ErrorCode::ConstraintViolation =>
            {
                LoadError::ConstraintViolation {
                    message: message.unwrap_or_else(|| code.to_string()),
                }
            }
            other => LoadError::Storage(other),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rusqlite::ffi;

    #[test]
    fn test_constraint_failure_is_classified() {
        let err = rusqlite::Error::SqliteFailure(
            ffi::Error::new(ffi::SQLITE_CONSTRAINT_PRIMARYKEY),
            Some("UNIQUE constraint failed: hygdata.id".to_string()),
        );
        match LoadError::from(err) {
            LoadError::ConstraintViolation { message } => {
                assert!(message.contains("hygdata.id"));
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_other_sqlite_failure_is_storage() {
        let err = rusqlite::Error::SqliteFailure(ffi::Error::new(ffi::SQLITE_NOTADB), None);
        assert!(matches!(LoadError::from(err), LoadError::Storage(_)));
    }

    #[test]
    fn test_schema_mismatch_classification() {
        assert!(LoadError::MissingColumn { column: "id" }.is_schema_mismatch());
        assert!(!LoadError::MissingValue { line: 2, column: "id" }.is_schema_mismatch());
    }
}
