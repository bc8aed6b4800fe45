//! Unit-of-work handle threaded through every repository call.

/// A caller-scoped unit of work over one libSQL connection.
///
/// Repository functions never open or close sessions themselves. Each
/// mutating call is a single statement, so it commits (or fails) as a whole
/// before the function returns. Dropping the session releases the connection.
#[derive(Clone)]
pub struct Session {
    conn: libsql::Connection,
}

impl Session {
    /// Wrap an already-prepared connection.
    #[must_use]
    pub const fn new(conn: libsql::Connection) -> Self {
        Self { conn }
    }

    /// Access the underlying connection.
    #[must_use]
    pub const fn conn(&self) -> &libsql::Connection {
        &self.conn
    }
}

impl std::fmt::Debug for Session {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Session").finish_non_exhaustive()
    }
}
