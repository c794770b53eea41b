//! Application context: unified state passed to every command handler.
//!
//! Built once in `Cli::run()`. Holds output settings, the resolved run policy,
//! and the AWS options the Glacier client is built from.

use std::io::IsTerminal as _;

use anyhow::Result;

use crate::application::ports::ConfigStore;
use crate::domain::{JobFailurePolicy, PurgeConfig, PurgePolicy, VaultTarget};
use crate::infra::config::YamlConfigStore;
use crate::infra::glacier::{AwsOptions, SdkGlacier};
use crate::output::{HumanRenderer, JsonRenderer, OutputContext, Renderer, TerminalReporter};

/// Output rendering mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputMode {
    /// Human-readable terminal output (default).
    Human,
    /// Machine-readable JSON output.
    Json,
}

/// Output rendering flags.
pub struct OutputFlags {
    /// Disable ANSI color output.
    pub no_color: bool,
    /// Suppress non-error output.
    pub quiet: bool,
    /// Enable JSON output mode.
    pub json: bool,
}

/// Which vault to operate on.
#[derive(Default)]
pub struct VaultFlags {
    pub vault: Option<String>,
    pub account_id: Option<String>,
}

/// Command-line overrides for the persisted polling configuration.
#[derive(Default)]
pub struct PolicyFlags {
    pub poll_interval_secs: Option<u64>,
    /// `Some(0)` disables the deadline.
    pub max_wait_secs: Option<u64>,
    pub continue_on_job_failure: bool,
}

/// Behaviour flags.
pub struct BehaviourFlags {
    /// Skip confirmation prompts (also set by the `GLACIER_PURGE_YES` env var).
    pub yes: bool,
}

/// Flags passed from the top-level CLI to `AppContext::new`.
pub struct AppFlags {
    pub output: OutputFlags,
    pub vault: VaultFlags,
    pub policy: PolicyFlags,
    pub aws: AwsOptions,
    pub behaviour: BehaviourFlags,
}

/// Unified application context passed to every command handler.
pub struct AppContext {
    /// Terminal output context (colors, quiet mode).
    pub output: OutputContext,
    /// Output rendering mode (human vs JSON).
    pub mode: OutputMode,
    /// Persisted configuration store.
    pub config_store: YamlConfigStore,
    /// Run policy: config file values with command-line overrides applied.
    pub policy: PurgePolicy,
    /// When `true`, destructive commands run without asking.
    pub assume_yes: bool,
    vault: VaultFlags,
    aws: AwsOptions,
}

impl AppContext {
    /// Construct an `AppContext` from top-level CLI flags.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration file exists but cannot be parsed.
    pub fn new(flags: AppFlags) -> Result<Self> {
        let mode = if flags.output.json {
            OutputMode::Json
        } else {
            OutputMode::Human
        };
        let config_store = YamlConfigStore::from_env();
        let config = config_store.load()?;
        let policy = resolve_policy(&config, &flags.policy);
        tracing::debug!(?policy, "run policy resolved");

        Ok(Self {
            output: OutputContext::new(flags.output.no_color, flags.output.quiet),
            mode,
            config_store,
            policy,
            assume_yes: flags.behaviour.yes || std::env::var("GLACIER_PURGE_YES").is_ok(),
            vault: flags.vault,
            aws: flags.aws,
        })
    }

    /// Returns `true` when JSON output mode is active.
    #[must_use]
    pub fn is_json(&self) -> bool {
        self.mode == OutputMode::Json
    }

    /// Returns the appropriate `Renderer` variant for the current output mode.
    #[must_use]
    pub fn renderer(&self) -> Renderer<'_> {
        match self.mode {
            OutputMode::Human => Renderer::Human(HumanRenderer::new(&self.output)),
            OutputMode::Json => Renderer::Json(JsonRenderer),
        }
    }

    /// Progress reporter for services. Writes to stderr in JSON mode.
    #[must_use]
    pub fn reporter(&self) -> TerminalReporter<'_> {
        let reporter = TerminalReporter::new(&self.output);
        if self.is_json() {
            reporter.on_stderr()
        } else {
            reporter
        }
    }

    /// The validated vault target.
    ///
    /// # Errors
    ///
    /// Returns an error if `--vault` was not given or the name/account id is invalid.
    pub fn vault(&self) -> Result<VaultTarget> {
        let name = self.vault.vault.as_deref().ok_or_else(|| {
            anyhow::anyhow!("--vault <NAME> is required (or set GLACIER_PURGE_VAULT)")
        })?;
        VaultTarget::new(name, self.vault.account_id.as_deref())
    }

    /// Build the Glacier client from the default AWS provider chain.
    pub async fn glacier(&self) -> SdkGlacier {
        SdkGlacier::from_env(&self.aws).await
    }

    /// Ask the user to confirm a destructive action.
    ///
    /// Returns `true` immediately when `assume_yes` is set.
    ///
    /// # Errors
    ///
    /// Returns an error when no terminal is available to ask on, or the prompt fails.
    pub fn confirm(&self, prompt: &str) -> Result<bool> {
        if self.assume_yes {
            return Ok(true);
        }
        if !std::io::stdin().is_terminal() {
            anyhow::bail!("confirmation required but no terminal is attached. Re-run with --yes.");
        }
        let confirmed = dialoguer::Confirm::new()
            .with_prompt(prompt)
            .default(false)
            .interact()?;
        Ok(confirmed)
    }
}

/// Apply command-line overrides on top of the persisted configuration.
#[must_use]
pub fn resolve_policy(config: &PurgeConfig, flags: &PolicyFlags) -> PurgePolicy {
    let mut config = config.clone();
    if let Some(interval) = flags.poll_interval_secs {
        config.polling.interval_secs = interval;
    }
    if let Some(max_wait) = flags.max_wait_secs {
        config.polling.max_wait_secs = max_wait;
    }
    if flags.continue_on_job_failure {
        config.on_job_failure = JobFailurePolicy::Continue;
    }
    config.policy()
}
