use crate::core::config::{AppConfig, RateMode};
use anyhow::{Context, Result};
use std::path::Path;
use tracing::info;

const EXAMPLE_CONFIG: &str = include_str!("../../docs/example_config.yaml");

/// Creates a default configuration file with example content at the default location
pub fn setup() -> Result<()> {
    let path = AppConfig::default_config_path()?;
    setup_at_path(path)?;
    Ok(())
}

/// Writes the example configuration to `path` and returns it as loaded.
/// Never overwrites an existing file.
pub fn setup_at_path<P: AsRef<Path>>(path: P) -> Result<AppConfig> {
    let path = path.as_ref();

    if path.exists() {
        anyhow::bail!("Configuration file already exists at {}", path.display());
    }

    let config: AppConfig =
        serde_yaml::from_str(EXAMPLE_CONFIG).context("Bundled example configuration is invalid")?;

    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
    }

    std::fs::write(path, EXAMPLE_CONFIG)
        .with_context(|| format!("Failed to write config file to {}", path.display()))?;

    info!(
        path = %path.display(),
        mode = ?config.rate.mode,
        rate = %config.rate.fixed,
        "Created default configuration"
    );
    if config.rate.mode == RateMode::Fixed {
        info!(
            "Set rate.mode to live and export {} to fetch the current rate",
            config.providers.exchangerate.api_key_env
        );
    }
    Ok(config)
}
