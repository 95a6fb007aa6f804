//! Configuration module for listbridge.
//!
//! Provides typed configuration structs that map to the YAML configuration
//! file, with loading, environment overrides, validation, and defaults.
//! Credentials never pass through YAML; they are supplied via environment
//! variables only and are wrapped in [`Secret`] so logs cannot leak them.

use std::fmt;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::domain::SyncDirection;

// ---------------------------------------------------------------------------
// Secret wrapper
// ---------------------------------------------------------------------------

/// Wrapper for credential values that must never appear in output.
///
/// `Debug` renders a fixed placeholder; there is deliberately no `Display`.
#[derive(Clone, Default, PartialEq, Eq)]
pub struct Secret(String);

impl Secret {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    /// The wrapped value. Call sites are the only places a secret leaves
    /// this type, which keeps them easy to audit.
    pub fn expose(&self) -> &str {
        &self.0
    }

    /// True when a non-empty value has been provided.
    pub fn is_set(&self) -> bool {
        !self.0.is_empty()
    }
}

impl fmt::Debug for Secret {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_set() {
            write!(f, "Secret(***)")
        } else {
            write!(f, "Secret(unset)")
        }
    }
}

impl From<String> for Secret {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl From<&str> for Secret {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

// ---------------------------------------------------------------------------
// RunConfig struct with sub-sections
// ---------------------------------------------------------------------------

/// Top-level configuration for a run, immutable once loaded.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct RunConfig {
    pub keep: KeepConfig,
    pub bring: BringConfig,
    pub sync: SyncConfig,
    pub logging: LoggingConfig,
}

/// Google Keep account settings.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct KeepConfig {
    /// Google account email.
    pub email: String,
    /// Device master token exchanged for a short-lived bearer token.
    /// Environment-only; the YAML schema has no field for it.
    #[serde(skip)]
    pub master_token: Secret,
    /// Id of the Keep note holding the checklist. Must be a list note.
    pub list_id: String,
}

/// Bring! account settings.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct BringConfig {
    /// Bring! account email.
    pub email: String,
    /// Account password. Environment-only, like the Keep token.
    #[serde(skip)]
    pub password: Secret,
    /// Shopping list to sync with; `None` selects the account's first list.
    pub list_name: Option<String>,
}

/// Reconciliation settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SyncConfig {
    /// Which direction(s) to reconcile.
    pub direction: SyncDirection,
    /// Re-fetch both snapshots before the second pass instead of reusing
    /// the ones captured at the start of the run.
    pub refetch_between_passes: bool,
    /// Per-request timeout for every remote call, in seconds.
    pub http_timeout_secs: u64,
}

/// Logging / tracing settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Log level: `trace`, `debug`, `info`, `warn`, or `error`.
    pub level: String,
}

// ---------------------------------------------------------------------------
// Defaults
// ---------------------------------------------------------------------------

// RunConfig, KeepConfig, and BringConfig derive Default because all their
// fields default to empty/absent. (clippy::derivable_impls)

impl Default for SyncConfig {
    fn default() -> Self {
        Self {
            direction: SyncDirection::Both,
            refetch_between_passes: false,
            http_timeout_secs: 30,
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
        }
    }
}

// ---------------------------------------------------------------------------
// Loading
// ---------------------------------------------------------------------------

impl RunConfig {
    /// Load configuration from a YAML file at `path`.
    ///
    /// Sections and fields absent from the file keep their defaults, so a
    /// file containing only `sync:` overrides is valid.
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: RunConfig = serde_yaml::from_str(&content)?;
        Ok(config)
    }

    /// Try to load from `path`; fall back to [`RunConfig::default`] on any error.
    pub fn load_or_default(path: &Path) -> Self {
        Self::load(path).unwrap_or_default()
    }

    /// Platform-appropriate default path for the configuration file.
    ///
    /// Typically `$XDG_CONFIG_HOME/listbridge/config.yaml` on Linux.
    pub fn default_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("~/.config"))
            .join("listbridge")
            .join("config.yaml")
    }
}

// ---------------------------------------------------------------------------
// Environment overrides
// ---------------------------------------------------------------------------

impl RunConfig {
    /// Apply environment variable overrides on top of the current values.
    ///
    /// Recognized variables: `GOOGLE_EMAIL`, `GOOGLE_TOKEN`, `KEEP_LIST_ID`,
    /// `BRING_EMAIL`, `BRING_PASSWORD`, `BRING_LIST_NAME`, `SYNC_MODE`,
    /// `SYNC_REFETCH_BETWEEN_PASSES`, and `SYNC_HTTP_TIMEOUT_SECS`.
    /// `SYNC_MODE` accepts direction names as well as the numeric modes
    /// `0` (both), `1` (bring-to-keep), and `2` (keep-to-bring).
    ///
    /// Values are read through `lookup` so tests can inject variables
    /// without touching the process environment. Variables that are set
    /// but unparseable are reported as [`ValidationError`]s and leave the
    /// previous value in place.
    pub fn overlay_env(&mut self, lookup: impl Fn(&str) -> Option<String>) -> Vec<ValidationError> {
        let mut errors = Vec::new();

        if let Some(v) = lookup("GOOGLE_EMAIL") {
            self.keep.email = v;
        }
        if let Some(v) = lookup("GOOGLE_TOKEN") {
            self.keep.master_token = Secret::new(v);
        }
        if let Some(v) = lookup("KEEP_LIST_ID") {
            self.keep.list_id = v;
        }
        if let Some(v) = lookup("BRING_EMAIL") {
            self.bring.email = v;
        }
        if let Some(v) = lookup("BRING_PASSWORD") {
            self.bring.password = Secret::new(v);
        }
        if let Some(v) = lookup("BRING_LIST_NAME") {
            self.bring.list_name = Some(v);
        }
        if let Some(v) = lookup("SYNC_MODE") {
            match v.parse::<SyncDirection>() {
                Ok(direction) => self.sync.direction = direction,
                Err(e) => errors.push(ValidationError {
                    field: "SYNC_MODE".into(),
                    message: e.to_string(),
                }),
            }
        }
        if let Some(v) = lookup("SYNC_REFETCH_BETWEEN_PASSES") {
            match parse_env_bool(&v) {
                Some(flag) => self.sync.refetch_between_passes = flag,
                None => errors.push(ValidationError {
                    field: "SYNC_REFETCH_BETWEEN_PASSES".into(),
                    message: format!("cannot interpret '{}' as a boolean", v),
                }),
            }
        }
        if let Some(v) = lookup("SYNC_HTTP_TIMEOUT_SECS") {
            match v.parse::<u64>() {
                Ok(secs) => self.sync.http_timeout_secs = secs,
                Err(_) => errors.push(ValidationError {
                    field: "SYNC_HTTP_TIMEOUT_SECS".into(),
                    message: format!("cannot interpret '{}' as seconds", v),
                }),
            }
        }

        errors
    }
}

/// Interprets common truthy/falsy spellings used in environment variables.
fn parse_env_bool(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

// ---------------------------------------------------------------------------
// Validation
// ---------------------------------------------------------------------------

/// A single validation error found in the configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    /// Dotted path to the offending field, e.g. `"keep.list_id"`, or the
    /// environment variable name for overlay errors.
    pub field: String,
    /// Human-readable explanation.
    pub message: String,
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

/// Valid values for `logging.level`.
const VALID_LOG_LEVELS: &[&str] = &["trace", "debug", "info", "warn", "error"];

impl RunConfig {
    /// Validate the configuration and return all errors found.
    ///
    /// An empty vector means the configuration is valid.
    pub fn validate(&self) -> Vec<ValidationError> {
        let mut errors = Vec::new();

        // --- keep ---
        if self.keep.email.is_empty() {
            errors.push(ValidationError {
                field: "keep.email".into(),
                message: "missing Google account email (set GOOGLE_EMAIL)".into(),
            });
        }
        if !self.keep.master_token.is_set() {
            errors.push(ValidationError {
                field: "keep.master_token".into(),
                message: "missing Google master token (set GOOGLE_TOKEN)".into(),
            });
        }
        if self.keep.list_id.is_empty() {
            errors.push(ValidationError {
                field: "keep.list_id".into(),
                message: "missing Keep note id (set KEEP_LIST_ID)".into(),
            });
        }

        // --- bring ---
        if self.bring.email.is_empty() {
            errors.push(ValidationError {
                field: "bring.email".into(),
                message: "missing Bring! account email (set BRING_EMAIL)".into(),
            });
        }
        if !self.bring.password.is_set() {
            errors.push(ValidationError {
                field: "bring.password".into(),
                message: "missing Bring! password (set BRING_PASSWORD)".into(),
            });
        }

        // --- sync ---
        if self.sync.http_timeout_secs == 0 {
            errors.push(ValidationError {
                field: "sync.http_timeout_secs".into(),
                message: "must be greater than 0".into(),
            });
        }

        // --- logging ---
        if !VALID_LOG_LEVELS.contains(&self.logging.level.as_str()) {
            errors.push(ValidationError {
                field: "logging.level".into(),
                message: format!(
                    "invalid level '{}'; valid options: {}",
                    self.logging.level,
                    VALID_LOG_LEVELS.join(", ")
                ),
            });
        }

        errors
    }
}

// ---------------------------------------------------------------------------
// Unit tests
// ---------------------------------------------------------------------------
