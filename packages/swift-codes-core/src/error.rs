//! Registry error types.

use thiserror::Error;

/// Errors raised by the store, loader and query service.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SwiftError {
    /// No record stored under the requested code
    #[error("SWIFT code '{code}' not found")]
    NotFound { code: String },

    /// No record matches the requested country
    #[error("No SWIFT codes found for country '{iso2}'")]
    CountryNotFound { iso2: String },

    /// Malformed input payload
    #[error("Bad request: {0}")]
    BadRequest(String),

    /// The named bucket does not exist in the database
    #[error("Database bucket '{0}' not found")]
    BucketNotFound(String),

    /// Stored or outgoing data could not be (de)serialized
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// Error reported by the storage engine
    #[error("Storage error: {0}")]
    Storage(String),

    /// I/O error while reading the source file
    #[error("I/O error: {0}")]
    Io(String),
}

impl From<serde_json::Error> for SwiftError {
    fn from(e: serde_json::Error) -> Self {
        SwiftError::Serialization(e.to_string())
    }
}

impl From<csv::Error> for SwiftError {
    fn from(e: csv::Error) -> Self {
        SwiftError::Io(e.to_string())
    }
}

impl From<redb::DatabaseError> for SwiftError {
    fn from(e: redb::DatabaseError) -> Self {
        SwiftError::Storage(e.to_string())
    }
}

impl From<redb::TransactionError> for SwiftError {
    fn from(e: redb::TransactionError) -> Self {
        SwiftError::Storage(e.to_string())
    }
}

impl From<redb::StorageError> for SwiftError {
    fn from(e: redb::StorageError) -> Self {
        SwiftError::Storage(e.to_string())
    }
}

impl From<redb::CommitError> for SwiftError {
    fn from(e: redb::CommitError) -> Self {
        SwiftError::Storage(e.to_string())
    }
}
