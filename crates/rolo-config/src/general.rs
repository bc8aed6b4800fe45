//! General application configuration.

use serde::{Deserialize, Serialize};

/// Default page size for list commands.
const fn default_limit() -> u32 {
    10
}

/// Smallest page size a caller may request.
const fn default_min_limit() -> u32 {
    10
}

/// Largest page size a caller may request.
const fn default_max_limit() -> u32 {
    500
}

/// Default birthday look-ahead, in days.
const fn default_birthday_days() -> u32 {
    1
}

/// Longest birthday look-ahead a caller may request, in days.
const fn default_max_birthday_days() -> u32 {
    7
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct GeneralConfig {
    /// Default result limit for list/search commands.
    #[serde(default = "default_limit")]
    pub default_limit: u32,

    #[serde(default = "default_min_limit")]
    pub min_limit: u32,

    #[serde(default = "default_max_limit")]
    pub max_limit: u32,

    /// Default window for `contact birthdays`.
    #[serde(default = "default_birthday_days")]
    pub default_birthday_days: u32,

    #[serde(default = "default_max_birthday_days")]
    pub max_birthday_days: u32,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            default_limit: default_limit(),
            min_limit: default_min_limit(),
            max_limit: default_max_limit(),
            default_birthday_days: default_birthday_days(),
            max_birthday_days: default_max_birthday_days(),
        }
    }
}

impl GeneralConfig {
    /// Resolve a requested page size into the configured bounds.
    pub fn effective_limit(&self, requested: Option<u32>) -> u32 {
        let lower = self.min_limit.min(self.max_limit);
        requested
            .unwrap_or(self.default_limit)
            .clamp(lower, self.max_limit)
    }

    /// Resolve a requested birthday window into `1..=max_birthday_days`.
    pub fn effective_birthday_days(&self, requested: Option<u32>) -> u32 {
        let upper = self.max_birthday_days.max(1);
        requested
            .unwrap_or(self.default_birthday_days)
            .clamp(1, upper)
    }
}
