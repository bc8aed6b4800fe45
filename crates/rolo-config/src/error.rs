//! Errors raised while loading Rolodex settings.

use thiserror::Error;

/// Why `RoloConfig::load` could not produce usable settings.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// A TOML file or `ROLODEX_*` variable could not be parsed into
    /// `RoloConfig`.
    #[error("Configuration error: {0}")]
    Figment(#[from] figment::Error),

    /// A section lacks a value it cannot work without, e.g. a blank
    /// `database.path`.
    #[error("Configuration section '{section}' is not configured (missing required fields)")]
    NotConfigured { section: String },

    /// A value parsed but is out of range, e.g. `general.max_limit = 0`.
    #[error("Invalid configuration value for '{field}': {reason}")]
    InvalidValue { field: String, reason: String },
}
