use rolo_config::GeneralConfig;

/// Page size from `--limit`, clamped into the configured bounds.
#[must_use]
pub fn effective_limit(requested: Option<u32>, general: &GeneralConfig) -> u32 {
    general.effective_limit(requested)
}
