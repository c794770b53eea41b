//! Output formatting module

pub mod human;
pub mod json;
pub mod reporter;
pub mod styles;

use anyhow::Result;
use console::Term;
use owo_colors::OwoColorize as _;

pub use human::HumanRenderer;
pub use json::JsonRenderer;
pub use reporter::TerminalReporter;
pub use styles::Styles;

use crate::application::services::archive_cleanup::CleanupSummary;
use crate::application::services::vault_purge::PurgeReport;
use crate::domain::{JobDescription, JobId, PurgeConfig, VaultTarget};

/// Output context carrying styling and terminal state.
pub struct OutputContext {
    /// Stylesheet for colored output.
    pub styles: Styles,
    /// Whether to suppress non-error output.
    pub quiet: bool,
}

impl OutputContext {
    /// Create output context based on CLI flags and environment.
    #[must_use]
    pub fn new(no_color: bool, quiet: bool) -> Self {
        let use_colors =
            !no_color && Term::stdout().is_term() && std::env::var("NO_COLOR").is_err();

        let mut styles = Styles::default();
        if use_colors {
            styles.colorize();
        }

        Self { styles, quiet }
    }

    /// Print a success message prefixed with `✓`. Suppressed when `quiet`.
    pub fn success(&self, msg: &str) {
        if !self.quiet {
            println!("  {} {msg}", "✓".style(self.styles.success));
        }
    }

    /// Print an error message prefixed with `✗` to stderr. Never suppressed.
    pub fn error(&self, msg: &str) {
        eprintln!("  {} {msg}", "✗".style(self.styles.error));
    }

    /// Print an info message prefixed with `ℹ`. Suppressed when `quiet`.
    pub fn info(&self, msg: &str) {
        if !self.quiet {
            println!("  {} {msg}", "ℹ".style(self.styles.info));
        }
    }

    /// Print a section header. Suppressed when `quiet`.
    pub fn header(&self, msg: &str) {
        if !self.quiet {
            println!("  {}", msg.style(self.styles.header));
        }
    }

    /// Print a key-value pair with the key dimmed. Suppressed when `quiet`.
    pub fn kv(&self, key: &str, value: &str) {
        if !self.quiet {
            println!("  {}  {value}", key.style(self.styles.label));
        }
    }
}

/// Mode-dispatching renderer handed out by `AppContext::renderer`.
pub enum Renderer<'a> {
    Human(HumanRenderer<'a>),
    Json(JsonRenderer),
}

impl Renderer<'_> {
    /// # Errors
    ///
    /// Returns an error if JSON serialization fails.
    pub fn render_job(
        &self,
        vault: &VaultTarget,
        job_id: &JobId,
        finished: Option<&JobDescription>,
    ) -> Result<()> {
        match self {
            Self::Human(r) => {
                r.render_job(vault, job_id, finished);
                Ok(())
            }
            Self::Json(r) => r.render_job(vault, job_id, finished),
        }
    }

    /// # Errors
    ///
    /// Returns an error if JSON serialization fails.
    pub fn render_job_status(&self, job_id: &JobId, description: &JobDescription) -> Result<()> {
        match self {
            Self::Human(r) => {
                r.render_job_status(job_id, description);
                Ok(())
            }
            Self::Json(r) => r.render_job_status(job_id, description),
        }
    }

    /// # Errors
    ///
    /// Returns an error if JSON serialization fails.
    pub fn render_cleanup(&self, summary: &CleanupSummary) -> Result<()> {
        match self {
            Self::Human(r) => {
                r.render_cleanup(summary);
                Ok(())
            }
            Self::Json(r) => r.render_cleanup(summary),
        }
    }

    /// # Errors
    ///
    /// Returns an error if JSON serialization fails.
    pub fn render_vault_deleted(&self, vault: &VaultTarget) -> Result<()> {
        match self {
            Self::Human(r) => {
                r.render_vault_deleted(vault);
                Ok(())
            }
            Self::Json(r) => r.render_vault_deleted(vault),
        }
    }

    /// # Errors
    ///
    /// Returns an error if JSON serialization fails.
    pub fn render_purge(&self, report: &PurgeReport) -> Result<()> {
        match self {
            Self::Human(r) => {
                r.render_purge(report);
                Ok(())
            }
            Self::Json(r) => r.render_purge(report),
        }
    }

    /// # Errors
    ///
    /// Returns an error if JSON serialization fails.
    pub fn render_config(&self, config: &PurgeConfig, path: &std::path::Path) -> Result<()> {
        match self {
            Self::Human(r) => {
                r.render_config(config, path);
                Ok(())
            }
            Self::Json(r) => r.render_config(config, path),
        }
    }

    /// # Errors
    ///
    /// Returns an error if JSON serialization fails.
    pub fn render_config_updated(
        &self,
        key: &str,
        value: &str,
        config: &PurgeConfig,
        path: &std::path::Path,
    ) -> Result<()> {
        match self {
            Self::Human(r) => {
                r.render_config_updated(key, value);
                Ok(())
            }
            Self::Json(r) => r.render_config(config, path),
        }
    }

    /// # Errors
    ///
    /// Returns an error if JSON serialization fails.
    pub fn render_cancelled(&self) -> Result<()> {
        match self {
            Self::Human(r) => {
                r.render_cancelled();
                Ok(())
            }
            Self::Json(r) => r.render_cancelled(),
        }
    }

    /// # Errors
    ///
    /// Returns an error if JSON serialization fails.
    pub fn render_version(&self, version: &str) -> Result<()> {
        match self {
            Self::Human(r) => {
                r.render_version(version);
                Ok(())
            }
            Self::Json(r) => r.render_version(version),
        }
    }
}
