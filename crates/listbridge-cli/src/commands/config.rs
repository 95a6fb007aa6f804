//! Config command - View and validate listbridge configuration
//!
//! Provides the `listbridge config` CLI command which:
//! 1. Shows the effective configuration (file plus environment)
//! 2. Validates the configuration file and reports every problem
//!
//! Secrets never appear in the output: the config types have no
//! serializable fields for them, so `show` reports only whether each
//! one is set.

use anyhow::{Context, Result};
use clap::Subcommand;
use tracing::info;

use listbridge_core::config::RunConfig;

use crate::output::{get_formatter, OutputFormat};

/// Config subcommands
#[derive(Debug, Subcommand)]
pub enum ConfigCommand {
    /// Display the effective configuration
    Show,
    /// Validate the configuration file and environment
    Validate,
}

impl ConfigCommand {
    /// Execute the config command
    pub async fn execute(&self, config_override: Option<&str>, format: OutputFormat) -> Result<()> {
        match self {
            ConfigCommand::Show => self.execute_show(config_override, format).await,
            ConfigCommand::Validate => self.execute_validate(config_override, format).await,
        }
    }

    /// Show the effective configuration with secret status
    async fn execute_show(&self, config_override: Option<&str>, format: OutputFormat) -> Result<()> {
        let formatter = get_formatter(format);

        let (mut config, path) = crate::commands::load_config(config_override)?;
        // Overlay errors are reported by `validate`; show displays what
        // the run would actually use.
        let _ = config.overlay_env(|name| std::env::var(name).ok());

        info!(config_path = %path.display(), "Showing configuration");

        if format.is_json() {
            let json = serde_json::json!({
                "config_path": path.display().to_string(),
                "config": serde_json::to_value(&config)
                    .context("failed to serialize the configuration")?,
                "secrets": {
                    "keep_master_token_set": config.keep.master_token.is_set(),
                    "bring_password_set": config.bring.password.is_set(),
                },
            });
            formatter.print_json(&json);
            return Ok(());
        }

        formatter.success(&format!("Configuration ({})", path.display()));
        formatter.info("");

        let yaml =
            serde_yaml::to_string(&config).context("failed to serialize the configuration")?;
        for line in yaml.lines() {
            formatter.info(line);
        }

        formatter.info("");
        formatter.info(&format!(
            "Google master token: {}",
            if config.keep.master_token.is_set() {
                "set"
            } else {
                "not set (GOOGLE_TOKEN)"
            }
        ));
        formatter.info(&format!(
            "Bring! password:     {}",
            if config.bring.password.is_set() {
                "set"
            } else {
                "not set (BRING_PASSWORD)"
            }
        ));

        Ok(())
    }

    /// Validate the file and the environment overlay
    async fn execute_validate(
        &self,
        config_override: Option<&str>,
        format: OutputFormat,
    ) -> Result<()> {
        let formatter = get_formatter(format);

        let (config_path, explicit) = match config_override {
            Some(path) => (std::path::PathBuf::from(path), true),
            None => (RunConfig::default_path(), false),
        };

        let mut notes: Vec<String> = Vec::new();
        let mut config = match RunConfig::load(&config_path) {
            Ok(config) => config,
            Err(err) => {
                if !explicit && !config_path.exists() {
                    if !format.is_json() {
                        formatter.info(&format!(
                            "No configuration file at {}",
                            config_path.display()
                        ));
                        formatter.info("Defaults and environment variables apply.");
                    }
                    notes.push("no configuration file; defaults and environment apply".to_string());
                    RunConfig::default()
                } else {
                    if format.is_json() {
                        formatter.print_json(&serde_json::json!({
                            "valid": false,
                            "config_path": config_path.display().to_string(),
                            "errors": [format!("{err:#}")],
                        }));
                    } else {
                        formatter.error(&format!("{err:#}"));
                    }
                    return Ok(());
                }
            }
        };

        info!(config_path = %config_path.display(), "Validating configuration");

        let mut errors = config.overlay_env(|name| std::env::var(name).ok());
        errors.extend(config.validate());

        if format.is_json() {
            let rendered: Vec<String> = errors.iter().map(|e| e.to_string()).collect();
            formatter.print_json(&serde_json::json!({
                "valid": errors.is_empty(),
                "config_path": config_path.display().to_string(),
                "notes": notes,
                "errors": rendered,
            }));
        } else if errors.is_empty() {
            formatter.success("Configuration is valid");
            formatter.info(&format!("File: {}", config_path.display()));
        } else {
            formatter.error(&format!(
                "Configuration has {} problem{}:",
                errors.len(),
                if errors.len() == 1 { "" } else { "s" }
            ));
            for error in &errors {
                formatter.info(&format!("{} - {}", error.field, error.message));
            }
        }

        Ok(())
    }
}
