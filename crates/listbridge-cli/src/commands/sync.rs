//! Sync command - Reconcile the two lists
//!
//! Provides the `listbridge sync` CLI command which:
//! 1. Loads configuration and applies environment overrides
//! 2. Builds the Keep and Bring! adapters
//! 3. Runs the engine (or just plans, with --dry-run)
//! 4. Renders the summary and sets the exit code
//!
//! Exit codes: 0 when every creation succeeded, 1 when the run finished
//! with recorded failures, 2 when it aborted before completing.

use std::sync::Arc;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::Args;
use tracing::info;

use listbridge_bring::BringListService;
use listbridge_core::domain::{RunSummary, Side, SyncDirection};
use listbridge_keep::KeepListService;
use listbridge_sync::{SyncEngine, TracingObserver};

use crate::output::{get_formatter, OutputFormat, OutputFormatter};

/// Sync command with clap options
#[derive(Debug, Args)]
pub struct SyncCommand {
    /// Override the configured direction (both, keep-to-bring,
    /// bring-to-keep, or the numeric modes 0, 1, 2)
    #[arg(long)]
    pub direction: Option<SyncDirection>,

    /// Re-fetch both lists between the two passes
    #[arg(long)]
    pub refetch: bool,

    /// Show what would be created without writing anything
    #[arg(long)]
    pub dry_run: bool,
}

impl SyncCommand {
    /// Execute the sync command
    ///
    /// Wires up the adapters, creates the engine, runs it, and renders
    /// the result.
    pub async fn execute(&self, config_override: Option<&str>, format: OutputFormat) -> Result<()> {
        let formatter = get_formatter(format);

        // Step 1: Load config and apply environment overrides
        let (mut config, errors) = match crate::commands::resolve_config(config_override) {
            Ok(resolved) => resolved,
            Err(err) => {
                formatter.error(&format!("{err:#}"));
                std::process::exit(2);
            }
        };

        // Step 2: Command-line flags override the configured behavior
        if let Some(direction) = self.direction {
            config.sync.direction = direction;
        }
        if self.refetch {
            config.sync.refetch_between_passes = true;
        }

        // Step 3: Refuse to start with an incomplete setup
        if !errors.is_empty() {
            for error in &errors {
                formatter.error(&format!("{}: {}", error.field, error.message));
            }
            std::process::exit(2);
        }

        // Step 4: Build the two services
        let timeout = Duration::from_secs(config.sync.http_timeout_secs);
        let keep = Arc::new(
            KeepListService::new(&config.keep, timeout)
                .context("failed to set up the Google Keep client")?,
        );
        let bring = Arc::new(
            BringListService::new(&config.bring, timeout)
                .context("failed to set up the Bring! client")?,
        );

        // In JSON mode the default silent observer keeps stdout clean;
        // otherwise per-item progress goes to the log.
        let mut engine = SyncEngine::new(keep, bring, &config);
        if !format.is_json() {
            engine = engine.with_observer(Arc::new(TracingObserver));
        }

        // Step 5: --dry-run plans without writing
        if self.dry_run {
            return self.execute_dry_run(&engine, format).await;
        }

        // Step 6: Run and render
        info!(direction = %config.sync.direction, "Starting synchronization");
        let summary = match engine.run().await {
            Ok(summary) => summary,
            Err(err) => {
                formatter.error(&err.to_string());
                std::process::exit(2);
            }
        };

        render_summary(&summary, format, formatter.as_ref());

        if !summary.is_clean() {
            std::process::exit(1);
        }
        Ok(())
    }

    /// Plans both passes and shows what would be created.
    async fn execute_dry_run(&self, engine: &SyncEngine, format: OutputFormat) -> Result<()> {
        let formatter = get_formatter(format);

        let plans = match engine.plan().await {
            Ok(plans) => plans,
            Err(err) => {
                formatter.error(&err.to_string());
                std::process::exit(2);
            }
        };

        if format.is_json() {
            let passes: Vec<serde_json::Value> = plans
                .iter()
                .map(|plan| {
                    serde_json::json!({
                        "source": plan.source(),
                        "target": plan.target,
                        "to_create": plan
                            .to_create
                            .iter()
                            .map(|item| item.label.trim().to_string())
                            .collect::<Vec<_>>(),
                        "skipped": plan.skipped(),
                    })
                })
                .collect();
            formatter.print_json(&serde_json::json!({
                "dry_run": true,
                "passes": passes,
            }));
            return Ok(());
        }

        formatter.info("Dry run - nothing will be written");
        for plan in &plans {
            if plan.is_empty() {
                formatter.success(&format!("{} is already up to date", plan.target));
            } else {
                formatter.success(&format!(
                    "Would add {} item{} to {}",
                    plan.to_create.len(),
                    if plan.to_create.len() == 1 { "" } else { "s" },
                    plan.target
                ));
                for item in &plan.to_create {
                    formatter.info(&format!("+ {}", item.label.trim()));
                }
            }
        }
        Ok(())
    }
}

/// Renders a completed run for the selected output format.
fn render_summary(summary: &RunSummary, format: OutputFormat, formatter: &dyn OutputFormatter) {
    if format.is_json() {
        let json = serde_json::to_value(summary).unwrap_or_default();
        formatter.print_json(&json);
        return;
    }

    let duration_display = if summary.duration_ms >= 1000 {
        format!("{:.1}s", summary.duration_ms as f64 / 1000.0)
    } else {
        format!("{}ms", summary.duration_ms)
    };

    if summary.total_added() == 0 && summary.failures.is_empty() {
        formatter.success("Already in sync");
    } else {
        formatter.success(&format!("Sync completed in {}", duration_display));
    }

    for side in [Side::Bring, Side::Keep] {
        let added = summary.added_to(side);
        if added > 0 {
            formatter.info(&format!(
                "Added to {}: {} item{}",
                side,
                added,
                if added == 1 { "" } else { "s" }
            ));
        }
    }

    if !summary.failures.is_empty() {
        formatter.error(&format!(
            "{} item{} could not be created:",
            summary.failures.len(),
            if summary.failures.len() == 1 { "" } else { "s" }
        ));
        for failure in &summary.failures {
            formatter.info(&format!(
                "- {} ({}): {}",
                failure.label, failure.target, failure.error
            ));
        }
    }
}
