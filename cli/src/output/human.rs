//! Human-readable terminal renderer.

use owo_colors::OwoColorize as _;

use crate::application::services::archive_cleanup::CleanupSummary;
use crate::application::services::vault_purge::PurgeReport;
use crate::domain::{JobDescription, JobId, JobStatus, PurgeConfig, VaultTarget};
use crate::output::OutputContext;

/// Renders command results as human-readable terminal output using `OutputContext`.
pub struct HumanRenderer<'a> {
    ctx: &'a OutputContext,
}

impl<'a> HumanRenderer<'a> {
    /// Create a new `HumanRenderer` wrapping the given output context.
    #[must_use]
    pub fn new(ctx: &'a OutputContext) -> Self {
        Self { ctx }
    }

    /// Render an initiated (and possibly awaited) job.
    ///
    /// The job id is printed even in quiet mode so it can be captured by scripts.
    pub fn render_job(
        &self,
        vault: &VaultTarget,
        job_id: &JobId,
        finished: Option<&JobDescription>,
    ) {
        if self.ctx.quiet {
            println!("{job_id}");
            return;
        }
        self.ctx.kv("Vault:", &vault.to_string());
        self.ctx
            .kv("Job id:", &job_id.style(self.ctx.styles.job_id).to_string());
        match finished {
            Some(description) => self.render_status_line(description),
            None => self.ctx.info(&format!(
                "Check later: glacier-purge --vault {} check --job-id {job_id}",
                vault.name()
            )),
        }
    }

    /// Render a job status check.
    pub fn render_job_status(&self, job_id: &JobId, description: &JobDescription) {
        if self.ctx.quiet {
            println!("{}", description.status);
            return;
        }
        self.ctx
            .kv("Job id:", &job_id.style(self.ctx.styles.job_id).to_string());
        self.render_status_line(description);
    }

    fn render_status_line(&self, description: &JobDescription) {
        match &description.status {
            JobStatus::Succeeded => self.ctx.success("Job succeeded"),
            JobStatus::Failed => self.ctx.error(&format!(
                "Job failed: {}",
                description.status_message.as_deref().unwrap_or("no status message")
            )),
            status => self.ctx.info(&format!("Job still running ({status})")),
        }
    }

    /// Render the result of an archive cleanup pass.
    pub fn render_cleanup(&self, summary: &CleanupSummary) {
        self.ctx.success(&format!(
            "{} archives deleted ({})",
            summary.archives_deleted,
            format_bytes(summary.bytes_deleted)
        ));
    }

    /// Render a deleted vault.
    pub fn render_vault_deleted(&self, vault: &VaultTarget) {
        self.ctx.success(&format!("Vault {vault} deleted"));
    }

    /// Render a completed purge.
    pub fn render_purge(&self, report: &PurgeReport) {
        if self.ctx.quiet {
            return;
        }
        println!();
        self.ctx.header(&format!("Vault {} purged", report.vault));
        self.ctx.kv(
            "Inventory job:",
            &format!("{} ({})", report.inventory_job_id, report.inventory_status),
        );
        self.ctx.kv(
            "Archives deleted:",
            &format!("{} ({})", report.archives_deleted, format_bytes(report.bytes_deleted)),
        );
        self.ctx.kv(
            "Confirmation job:",
            &format!("{} ({})", report.confirmation_job_id, report.confirmation_status),
        );
    }

    /// Render the current configuration.
    pub fn render_config(&self, config: &PurgeConfig, path: &std::path::Path) {
        println!();
        println!(
            "  {}",
            format!("Configuration ({})", path.display()).style(self.ctx.styles.header)
        );
        println!();
        println!("  {:<24} {}", "polling.interval_secs:", config.polling.interval_secs);
        let max_wait = if config.polling.max_wait_secs == 0 {
            "0 (no limit)".to_string()
        } else {
            config.polling.max_wait_secs.to_string()
        };
        println!("  {:<24} {max_wait}", "polling.max_wait_secs:");
        println!("  {:<24} {}", "on_job_failure:", config.on_job_failure);
        println!();
        println!("  {}", "Environment:".style(self.ctx.styles.emphasis));
        for var in ["GLACIER_PURGE_CONFIG", "AWS_REGION", "AWS_PROFILE", "NO_COLOR"] {
            println!(
                "    {:<22} {}",
                format!("{var}:"),
                std::env::var(var).unwrap_or_else(|_| "(not set)".to_string())
            );
        }
        println!();
    }

    /// Render a single updated setting.
    pub fn render_config_updated(&self, key: &str, value: &str) {
        self.ctx.success(&format!("{key} set to {value}"));
    }

    /// Render a declined confirmation prompt.
    pub fn render_cancelled(&self) {
        println!("Cancelled.");
    }

    /// Render the tool version.
    pub fn render_version(&self, version: &str) {
        println!("glacier-purge {version}");
    }
}

/// Format a byte count with a binary unit suffix.
#[must_use]
pub fn format_bytes(bytes: u64) -> String {
    const UNITS: &[&str] = &["B", "KiB", "MiB", "GiB", "TiB", "PiB"];
    let mut unit = 0;
    let mut whole = bytes;
    let mut rem = 0;
    while whole >= 1024 && unit < UNITS.len() - 1 {
        rem = whole % 1024;
        whole /= 1024;
        unit += 1;
    }
    if unit == 0 {
        format!("{bytes} B")
    } else {
        format!("{whole}.{} {}", rem * 10 / 1024, UNITS[unit])
    }
}
