//! Lists command - Show the Bring! lists the account can see
//!
//! Helps with initial setup: the sync config wants a list name, and this
//! command shows what names exist (plus, with --items, what is on them).
//! Only the Bring! side of the configuration needs to be valid here.

use std::time::Duration;

use anyhow::{Context, Result};
use clap::Args;

use listbridge_bring::BringClient;
use listbridge_core::config::ValidationError;

use crate::output::{get_formatter, OutputFormat};

/// Lists command with clap options
#[derive(Debug, Args)]
pub struct ListsCommand {
    /// Also show the items on each list
    #[arg(long)]
    pub items: bool,
}

impl ListsCommand {
    /// Execute the lists command
    pub async fn execute(&self, config_override: Option<&str>, format: OutputFormat) -> Result<()> {
        let formatter = get_formatter(format);

        let (config, errors) = match crate::commands::resolve_config(config_override) {
            Ok(resolved) => resolved,
            Err(err) => {
                formatter.error(&format!("{err:#}"));
                std::process::exit(2);
            }
        };

        let errors = bring_errors_only(errors);
        if !errors.is_empty() {
            for error in &errors {
                formatter.error(&format!("{}: {}", error.field, error.message));
            }
            std::process::exit(2);
        }

        let timeout = Duration::from_secs(config.sync.http_timeout_secs);
        let client =
            BringClient::new(timeout).context("failed to set up the Bring! client")?;

        let session = match client
            .login(&config.bring.email, config.bring.password.expose())
            .await
        {
            Ok(session) => session,
            Err(err) => {
                formatter.error(&format!("{err:#}"));
                std::process::exit(2);
            }
        };

        let lists = match client.load_lists(&session).await {
            Ok(lists) => lists,
            Err(err) => {
                formatter.error(&format!("could not load the list collection: {err:#}"));
                std::process::exit(2);
            }
        };

        if format.is_json() {
            let mut entries = Vec::with_capacity(lists.len());
            for list in &lists {
                let mut entry = serde_json::json!({
                    "uuid": list.list_uuid,
                    "name": list.name,
                });
                if self.items {
                    let contents = match client.load_items(&session, &list.list_uuid).await {
                        Ok(contents) => contents,
                        Err(err) => {
                            formatter
                                .error(&format!("could not load list '{}': {err:#}", list.name));
                            std::process::exit(2);
                        }
                    };
                    entry["active"] = contents
                        .purchase
                        .iter()
                        .map(|item| item.name.clone())
                        .collect::<Vec<_>>()
                        .into();
                    entry["recently_completed"] = contents
                        .recently
                        .iter()
                        .map(|item| item.name.clone())
                        .collect::<Vec<_>>()
                        .into();
                }
                entries.push(entry);
            }
            formatter.print_json(&serde_json::json!({ "lists": entries }));
            return Ok(());
        }

        formatter.success(&format!(
            "{} list{} found",
            lists.len(),
            if lists.len() == 1 { "" } else { "s" }
        ));
        for list in &lists {
            formatter.info(&format!("{} ({})", list.name, list.list_uuid));
            if self.items {
                let contents = match client.load_items(&session, &list.list_uuid).await {
                    Ok(contents) => contents,
                    Err(err) => {
                        formatter.error(&format!("could not load list '{}': {err:#}", list.name));
                        std::process::exit(2);
                    }
                };
                for item in &contents.purchase {
                    formatter.info(&format!("  [ ] {}", item.name));
                }
                for item in &contents.recently {
                    formatter.info(&format!("  [x] {}", item.name));
                }
            }
        }
        Ok(())
    }
}

/// Keeps only the problems that affect the Bring! side.
///
/// Covers both naming schemes: validation errors use config fields
/// (`bring.email`), overlay errors use environment variables
/// (`BRING_EMAIL`).
fn bring_errors_only(errors: Vec<ValidationError>) -> Vec<ValidationError> {
    errors
        .into_iter()
        .filter(|error| error.field.to_ascii_lowercase().starts_with("bring"))
        .collect()
}
