use sqlx::Error as SqlxError;
use thiserror::Error as ThisError;

/// Unified error for every store operation.
///
/// Single-record lookups that match nothing yield `NotFound`, so callers can
/// tell an empty result from a failed query.
#[derive(Debug, ThisError)]
pub enum StoreError {
    #[error("record not found")]
    NotFound,

    #[error("database connection failure: {0}")]
    Connection(#[source] SqlxError),

    #[error("query failure: {0}")]
    Query(#[source] SqlxError),

    #[error("seed data error: {0}")]
    Seed(#[from] serde_json::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<SqlxError> for StoreError {
    fn from(e: SqlxError) -> Self {
        match e {
            SqlxError::RowNotFound => StoreError::NotFound,
            SqlxError::Io(_)
            | SqlxError::Tls(_)
            | SqlxError::PoolTimedOut
            | SqlxError::PoolClosed
            | SqlxError::WorkerCrashed
            | SqlxError::Configuration(_) => StoreError::Connection(e),
            other => StoreError::Query(other),
        }
    }
}

impl StoreError {
    pub fn is_not_found(&self) -> bool {
        matches!(self, StoreError::NotFound)
    }
}
