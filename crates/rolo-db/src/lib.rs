//! # rolo-db
//!
//! libSQL database operations for Rolodex.
//!
//! Holds the relational state: users and the contacts they own.
//! `RoloDb` opens the database and runs migrations; it hands out
//! [`Session`]s, and every repository function takes one explicitly.
//!
//! Uses the `libsql` crate (C `SQLite` fork) in local mode.

pub mod birthday;
pub mod error;
pub mod helpers;
mod migrations;
pub mod repos;
pub mod session;

#[cfg(test)]
mod test_support;

use error::DatabaseError;
use libsql::Builder;
use rolo_config::DatabaseConfig;

pub use session::Session;

const MEMORY_PATH: &str = ":memory:";

/// Central database handle for all Rolodex state.
///
/// Wraps a libSQL database and a primary connection used for migrations.
pub struct RoloDb {
    db: libsql::Database,
    conn: libsql::Connection,
    in_memory: bool,
    foreign_keys: bool,
}

impl RoloDb {
    /// Open a local database at the given path with foreign keys enabled.
    ///
    /// Runs migrations automatically on first open.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if the database cannot be opened or
    /// migrations fail.
    pub async fn open_local(path: &str) -> Result<Self, DatabaseError> {
        Self::open_with(path, true).await
    }

    /// Open the database described by a [`DatabaseConfig`].
    ///
    /// # Errors
    ///
    /// Same as [`Self::open_local`].
    pub async fn open(config: &DatabaseConfig) -> Result<Self, DatabaseError> {
        Self::open_with(&config.path, config.foreign_keys).await
    }

    async fn open_with(path: &str, foreign_keys: bool) -> Result<Self, DatabaseError> {
        tracing::debug!(path, foreign_keys, "opening database");
        let db = Builder::new_local(path).build().await?;
        let conn = db.connect()?;
        prepare_connection(&conn, foreign_keys).await?;

        let rolo_db = Self {
            db,
            conn,
            in_memory: path == MEMORY_PATH,
            foreign_keys,
        };
        rolo_db.run_migrations().await?;
        Ok(rolo_db)
    }

    /// Hand out a unit of work.
    ///
    /// File-backed databases get a fresh connection per session. An
    /// in-memory database exists only behind its primary connection, so
    /// sessions share that connection.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if a new connection cannot be opened.
    pub async fn session(&self) -> Result<Session, DatabaseError> {
        if self.in_memory {
            return Ok(Session::new(self.conn.clone()));
        }
        let conn = self.db.connect()?;
        prepare_connection(&conn, self.foreign_keys).await?;
        Ok(Session::new(conn))
    }

    /// Access the primary libSQL connection for direct queries.
    #[must_use]
    pub const fn conn(&self) -> &libsql::Connection {
        &self.conn
    }

    /// Whether this handle is backed by `:memory:`.
    #[must_use]
    pub const fn is_in_memory(&self) -> bool {
        self.in_memory
    }
}

/// Per-connection pragmas (foreign keys are not persisted in `SQLite`).
async fn prepare_connection(
    conn: &libsql::Connection,
    foreign_keys: bool,
) -> Result<(), DatabaseError> {
    let pragma = if foreign_keys {
        "PRAGMA foreign_keys = ON"
    } else {
        "PRAGMA foreign_keys = OFF"
    };
    conn.execute(pragma, ())
        .await
        .map_err(|e| DatabaseError::Migration(format!("{pragma}: {e}")))?;
    Ok(())
}
