//! Infrastructure implementation of the Glacier port traits over `aws-sdk-glacier`.

use anyhow::{Context, Result};
use aws_config::{BehaviorVersion, Region};
use aws_sdk_glacier::Client;
use aws_sdk_glacier::error::DisplayErrorContext;
use aws_sdk_glacier::types::JobParameters;

use crate::application::ports::{InventoryJobs, VaultDeleter};
use crate::domain::job::INVENTORY_RETRIEVAL;
use crate::domain::{JobDescription, JobId, JobStatus, VaultTarget};

/// Overrides for the SDK's default credential/region resolution.
#[derive(Debug, Clone, Default)]
pub struct AwsOptions {
    pub region: Option<String>,
    pub profile: Option<String>,
}

/// Production Glacier client. Constructed once per run and only borrowed afterwards.
#[derive(Clone)]
pub struct SdkGlacier {
    client: Client,
}

impl SdkGlacier {
    /// Build a client from the default provider chain (env, profile, IMDS).
    pub async fn from_env(options: &AwsOptions) -> Self {
        let mut loader = aws_config::defaults(BehaviorVersion::latest());
        if let Some(region) = &options.region {
            loader = loader.region(Region::new(region.clone()));
        }
        if let Some(profile) = &options.profile {
            loader = loader.profile_name(profile);
        }
        let config = loader.load().await;
        tracing::debug!(region = ?config.region(), "AWS configuration loaded");
        Self::new(Client::new(&config))
    }

    #[must_use]
    pub fn new(client: Client) -> Self {
        Self { client }
    }
}

/// Flatten an SDK error into a message that includes the service error code.
fn sdk_error(err: impl std::error::Error) -> anyhow::Error {
    anyhow::anyhow!("{}", DisplayErrorContext(err))
}

impl InventoryJobs for SdkGlacier {
    async fn initiate_inventory_job(&self, vault: &VaultTarget) -> Result<JobId> {
        let params = JobParameters::builder()
            .r#type(INVENTORY_RETRIEVAL)
            .format("JSON")
            .build();
        let output = self
            .client
            .initiate_job()
            .vault_name(vault.name())
            .account_id(vault.account_id())
            .job_parameters(params)
            .send()
            .await
            .map_err(sdk_error)?;
        output
            .job_id()
            .map(JobId::new)
            .context("InitiateJob response carried no job id")
    }

    async fn describe_job(&self, vault: &VaultTarget, job_id: &JobId) -> Result<JobDescription> {
        let output = self
            .client
            .describe_job()
            .vault_name(vault.name())
            .account_id(vault.account_id())
            .job_id(job_id.as_str())
            .send()
            .await
            .map_err(sdk_error)?;
        let status = output
            .status_code()
            .map_or_else(|| JobStatus::Unknown(String::new()), |code| {
                JobStatus::from_code(code.as_str())
            });
        let mut description = JobDescription::new(status);
        if let Some(message) = output.status_message() {
            description = description.with_message(message);
        }
        Ok(description)
    }

    async fn get_job_output(&self, vault: &VaultTarget, job_id: &JobId) -> Result<Vec<u8>> {
        let output = self
            .client
            .get_job_output()
            .vault_name(vault.name())
            .account_id(vault.account_id())
            .job_id(job_id.as_str())
            .send()
            .await
            .map_err(sdk_error)?;
        let body = output
            .body
            .collect()
            .await
            .context("reading job output body")?;
        Ok(body.into_bytes().to_vec())
    }
}

impl VaultDeleter for SdkGlacier {
    async fn delete_archive(&self, vault: &VaultTarget, archive_id: &str) -> Result<()> {
        self.client
            .delete_archive()
            .vault_name(vault.name())
            .account_id(vault.account_id())
            .archive_id(archive_id)
            .send()
            .await
            .map_err(sdk_error)?;
        Ok(())
    }

    async fn delete_vault(&self, vault: &VaultTarget) -> Result<()> {
        self.client
            .delete_vault()
            .vault_name(vault.name())
            .account_id(vault.account_id())
            .send()
            .await
            .map_err(sdk_error)?;
        Ok(())
    }
}
