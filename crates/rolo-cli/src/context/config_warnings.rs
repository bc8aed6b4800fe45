use rolo_config::{ENV_PREFIX, RoloConfig};

/// Config sections paired with a sample key for the warning text.
const SECTIONS: [(&str, &str); 2] = [("DATABASE", "PATH"), ("GENERAL", "MAX_LIMIT")];

/// Emit warnings for likely mistyped env var keys that silently fell back to defaults.
pub fn warn_unconfigured(config: &RoloConfig) {
    for warning in collect_unconfigured_warnings(config, std::env::vars()) {
        tracing::warn!("{warning}");
    }
}

fn collect_unconfigured_warnings<I>(config: &RoloConfig, env: I) -> Vec<String>
where
    I: IntoIterator<Item = (String, String)>,
{
    let env_keys = env.into_iter().map(|(key, _)| key).collect::<Vec<_>>();

    let mut warnings = Vec::new();

    for (section, sample) in SECTIONS {
        let single = format!("{ENV_PREFIX}{section}_");
        let double = format!("{ENV_PREFIX}{section}__");
        if let Some(key) = env_keys
            .iter()
            .find(|key| key.starts_with(&single) && !key.starts_with(&double))
        {
            warnings.push(format!(
                "{key} is ignored. Use double underscores between section and key (example: {double}{sample})."
            ));
        }
    }

    if config.database.is_in_memory() {
        warnings.push(
            "database.path is :memory:; contacts will not survive this command.".to_string(),
        );
    }

    warnings
}
