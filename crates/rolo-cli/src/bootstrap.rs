use crate::cli::GlobalFlags;

/// Load layered configuration and apply command-line overrides on top.
pub fn load_config(flags: &GlobalFlags) -> anyhow::Result<rolo_config::RoloConfig> {
    let config = rolo_config::RoloConfig::load_with_dotenv()?;
    finalize(config, flags)
}

/// Apply overrides, then re-check the merged values.
fn finalize(
    mut config: rolo_config::RoloConfig,
    flags: &GlobalFlags,
) -> anyhow::Result<rolo_config::RoloConfig> {
    apply_overrides(&mut config, flags);
    config.validate()?;
    Ok(config)
}

fn apply_overrides(config: &mut rolo_config::RoloConfig, flags: &GlobalFlags) {
    if let Some(path) = &flags.db {
        tracing::debug!(path, "database path overridden from command line");
        config.database.path.clone_from(path);
    }
}
