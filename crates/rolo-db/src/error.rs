//! Database error types for rolo-db.

use thiserror::Error;

/// Errors from database operations.
///
/// "Not found" is never an error here: scoped lookups return `Ok(None)`.
#[derive(Debug, Error)]
pub enum DatabaseError {
    /// A row could not be decoded into an entity.
    #[error("Query failed: {0}")]
    Query(String),

    /// Schema migration failed.
    #[error("Migration failed: {0}")]
    Migration(String),

    /// Expected a result row but none was returned.
    #[error("No result returned")]
    NoResult,

    /// Underlying libSQL error.
    #[error("libSQL error: {0}")]
    LibSql(#[from] libsql::Error),
}
