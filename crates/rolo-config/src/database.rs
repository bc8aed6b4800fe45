//! libSQL database configuration.

use serde::{Deserialize, Serialize};

/// Default database file, relative to the working directory.
fn default_path() -> String {
    String::from("rolodex.db")
}

/// Foreign keys are on unless explicitly disabled.
const fn default_foreign_keys() -> bool {
    true
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct DatabaseConfig {
    /// Path to the libSQL database file, or `:memory:`.
    #[serde(default = "default_path")]
    pub path: String,

    /// Whether to enable `PRAGMA foreign_keys` on every connection.
    #[serde(default = "default_foreign_keys")]
    pub foreign_keys: bool,
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            path: default_path(),
            foreign_keys: default_foreign_keys(),
        }
    }
}

impl DatabaseConfig {
    /// Check if a database location has been set.
    pub fn is_configured(&self) -> bool {
        !self.path.trim().is_empty()
    }

    /// An in-memory database lives only as long as its handle.
    pub fn is_in_memory(&self) -> bool {
        self.path == ":memory:"
    }
}
