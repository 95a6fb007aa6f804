//! CLI command implementations

pub mod completions;
pub mod config;
pub mod lists;
pub mod sync;

use std::path::PathBuf;

use anyhow::{Context, Result};

use listbridge_core::config::{RunConfig, ValidationError};

/// Loads the configuration file, honoring an explicit `--config` path.
///
/// An explicit path must exist and parse; the default location falls
/// back to defaults when absent, so a fully environment-driven setup
/// needs no file at all.
pub(crate) fn load_config(config_override: Option<&str>) -> Result<(RunConfig, PathBuf)> {
    match config_override {
        Some(path) => {
            let path = PathBuf::from(path);
            let config = RunConfig::load(&path)
                .with_context(|| format!("failed to load {}", path.display()))?;
            Ok((config, path))
        }
        None => {
            let path = RunConfig::default_path();
            let config = RunConfig::load_or_default(&path);
            Ok((config, path))
        }
    }
}

/// Loads the configuration, applies environment overrides, and collects
/// everything wrong with the result.
///
/// The error list mixes overlay problems (named after the environment
/// variable) and validation problems (named after the config field);
/// callers decide which of them block the command.
pub(crate) fn resolve_config(
    config_override: Option<&str>,
) -> Result<(RunConfig, Vec<ValidationError>)> {
    let (mut config, path) = load_config(config_override)?;
    tracing::debug!(config_path = %path.display(), "Loaded configuration");

    let mut errors = config.overlay_env(|name| std::env::var(name).ok());
    errors.extend(config.validate());
    Ok((config, errors))
}
