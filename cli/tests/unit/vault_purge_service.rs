//! Tests for the `vault_purge` orchestrator.
//!
//! Every test drives the full sequence against the recording Glacier and
//! checks the exact order of remote calls.

#![allow(clippy::expect_used)]

use std::time::Duration;

use glacier_purge::application::services::vault_purge;
use glacier_purge::application::shutdown::ShutdownSignal;
use glacier_purge::domain::{
    JobDescription, JobError, JobFailurePolicy, JobStatus, PollPolicy, PurgePolicy,
};

use crate::helpers::{Call, NoopReporter, RecordingGlacier, RecordingReporter, inventory_json, vault};

fn policy(on_job_failure: JobFailurePolicy) -> PurgePolicy {
    PurgePolicy {
        poll: PollPolicy {
            interval: Duration::from_secs(10),
            max_wait: None,
        },
        on_job_failure,
    }
}

#[tokio::test(start_paused = true)]
async fn archive_bin_scenario_runs_steps_in_order() {
    let glacier = RecordingGlacier::new()
        .with_statuses([JobStatus::InProgress, JobStatus::InProgress, JobStatus::Succeeded])
        .with_inventory(inventory_json(&["a1", "a2"]));

    let report = vault_purge::purge_vault(
        &glacier,
        &vault("archive-bin"),
        &policy(JobFailurePolicy::Abort),
        &ShutdownSignal::never(),
        &NoopReporter,
    )
    .await
    .expect("purge");

    assert_eq!(
        glacier.calls(),
        vec![
            Call::Initiate("archive-bin".into()),
            Call::Describe("job-1".into()),
            Call::Describe("job-1".into()),
            Call::Describe("job-1".into()),
            Call::GetOutput("job-1".into()),
            Call::DeleteArchive("a1".into()),
            Call::DeleteArchive("a2".into()),
            Call::Initiate("archive-bin".into()),
            Call::Describe("job-2".into()),
            Call::DeleteVault("archive-bin".into()),
        ]
    );
    let times = glacier.describe_times();
    assert_eq!(times[1] - times[0], Duration::from_secs(10));
    assert_eq!(times[2] - times[1], Duration::from_secs(10));

    assert_eq!(report.vault, "archive-bin");
    assert_eq!(report.inventory_job_id.as_str(), "job-1");
    assert_eq!(report.confirmation_job_id.as_str(), "job-2");
    assert_eq!(report.archives_deleted, 2);
}

#[tokio::test(start_paused = true)]
async fn purge_initiates_two_jobs_and_deletes_vault_once_last() {
    let glacier = RecordingGlacier::new().with_inventory(inventory_json(&["a1"]));

    vault_purge::purge_vault(
        &glacier,
        &vault("v"),
        &policy(JobFailurePolicy::Abort),
        &ShutdownSignal::never(),
        &NoopReporter,
    )
    .await
    .expect("purge");

    let calls = glacier.calls();
    assert_eq!(glacier.count(|c| matches!(c, Call::Initiate(_))), 2);
    assert_eq!(glacier.count(|c| matches!(c, Call::DeleteVault(_))), 1);
    let last_describe = calls
        .iter()
        .rposition(|c| *c == Call::Describe("job-2".into()))
        .expect("second job polled");
    assert_eq!(calls.last(), Some(&Call::DeleteVault("v".into())));
    assert_eq!(last_describe, calls.len() - 2, "vault deleted right after second poll");
}

#[tokio::test(start_paused = true)]
async fn empty_vault_goes_straight_to_confirmation_job() {
    let glacier = RecordingGlacier::new().with_inventory(inventory_json(&[]));

    let report = vault_purge::purge_vault(
        &glacier,
        &vault("v"),
        &policy(JobFailurePolicy::Abort),
        &ShutdownSignal::never(),
        &NoopReporter,
    )
    .await
    .expect("purge");

    assert_eq!(report.archives_deleted, 0);
    assert_eq!(
        glacier.calls(),
        vec![
            Call::Initiate("v".into()),
            Call::Describe("job-1".into()),
            Call::GetOutput("job-1".into()),
            Call::Initiate("v".into()),
            Call::Describe("job-2".into()),
            Call::DeleteVault("v".into()),
        ]
    );
}

#[tokio::test(start_paused = true)]
async fn describe_error_aborts_before_any_delete() {
    let glacier = RecordingGlacier::new()
        .with_inventory(inventory_json(&["a1"]))
        .failing_describe();

    vault_purge::purge_vault(
        &glacier,
        &vault("v"),
        &policy(JobFailurePolicy::Continue),
        &ShutdownSignal::never(),
        &NoopReporter,
    )
    .await
    .expect_err("describe fails");

    assert!(glacier.deleted_archives().is_empty());
    assert_eq!(glacier.count(|c| matches!(c, Call::DeleteVault(_))), 0);
}

#[tokio::test(start_paused = true)]
async fn failed_job_aborts_by_default() {
    let glacier = RecordingGlacier::new()
        .with_descriptions([JobDescription::new(JobStatus::Failed).with_message("internal error")])
        .with_inventory(inventory_json(&["a1"]));

    let err = vault_purge::purge_vault(
        &glacier,
        &vault("v"),
        &policy(JobFailurePolicy::Abort),
        &ShutdownSignal::never(),
        &NoopReporter,
    )
    .await
    .expect_err("abort on failed job");

    match err.downcast_ref::<JobError>() {
        Some(JobError::Failed { job_id, message }) => {
            assert_eq!(job_id, "job-1");
            assert_eq!(message, "internal error");
        }
        other => panic!("expected JobError::Failed, got {other:?}"),
    }
    assert_eq!(
        glacier.calls(),
        vec![Call::Initiate("v".into()), Call::Describe("job-1".into())]
    );
}

#[tokio::test(start_paused = true)]
async fn failed_job_continues_with_warning_when_configured() {
    let glacier = RecordingGlacier::new()
        .with_statuses([JobStatus::Failed])
        .with_inventory(inventory_json(&["a1"]));
    let reporter = RecordingReporter::default();

    let report = vault_purge::purge_vault(
        &glacier,
        &vault("v"),
        &policy(JobFailurePolicy::Continue),
        &ShutdownSignal::never(),
        &reporter,
    )
    .await
    .expect("continue past failed job");

    assert_eq!(report.inventory_status, JobStatus::Failed);
    assert_eq!(glacier.deleted_archives(), vec!["a1"]);
    assert_eq!(glacier.count(|c| matches!(c, Call::DeleteVault(_))), 1);
    let warnings = reporter.warnings.lock().expect("lock");
    assert_eq!(warnings.len(), 1);
    assert!(warnings[0].contains("job-1"));
}

#[tokio::test(start_paused = true)]
async fn failed_confirmation_job_is_not_inspected() {
    // First job succeeds, second fails; the vault delete still goes ahead.
    let glacier = RecordingGlacier::new()
        .with_statuses([JobStatus::Succeeded, JobStatus::Failed])
        .with_inventory(inventory_json(&[]));

    let report = vault_purge::purge_vault(
        &glacier,
        &vault("v"),
        &policy(JobFailurePolicy::Abort),
        &ShutdownSignal::never(),
        &NoopReporter,
    )
    .await
    .expect("purge");

    assert_eq!(report.confirmation_status, JobStatus::Failed);
    assert_eq!(glacier.calls().last(), Some(&Call::DeleteVault("v".into())));
}

#[tokio::test(start_paused = true)]
async fn failed_archive_delete_skips_vault_delete() {
    let glacier = RecordingGlacier::new()
        .with_inventory(inventory_json(&["a1", "a2"]))
        .failing_delete_of("a1");

    vault_purge::purge_vault(
        &glacier,
        &vault("v"),
        &policy(JobFailurePolicy::Abort),
        &ShutdownSignal::never(),
        &NoopReporter,
    )
    .await
    .expect_err("delete fails");

    assert_eq!(glacier.deleted_archives(), vec!["a1"]);
    assert_eq!(glacier.count(|c| matches!(c, Call::Initiate(_))), 1);
    assert_eq!(glacier.count(|c| matches!(c, Call::DeleteVault(_))), 0);
}

#[tokio::test(start_paused = true)]
async fn cancellation_during_first_wait_deletes_nothing() {
    let glacier = RecordingGlacier::new()
        .with_statuses(vec![JobStatus::InProgress; 100])
        .with_inventory(inventory_json(&["a1"]));
    let (trigger, signal) = ShutdownSignal::new();
    trigger.trigger();

    let err = vault_purge::purge_vault(
        &glacier,
        &vault("v"),
        &policy(JobFailurePolicy::Abort),
        &signal,
        &NoopReporter,
    )
    .await
    .expect_err("cancelled");

    assert!(matches!(
        err.downcast_ref::<JobError>(),
        Some(JobError::Cancelled { .. })
    ));
    assert_eq!(glacier.calls(), vec![Call::Initiate("v".into())]);
}

#[tokio::test]
async fn delete_vault_error_carries_service_message() {
    let glacier = RecordingGlacier::new().failing_delete_vault();
    let err = vault_purge::delete_vault(&glacier, &vault("v"), &NoopReporter)
        .await
        .expect_err("not empty");
    let msg = format!("{err:#}");
    assert!(msg.contains("deleting vault v"), "{msg}");
    assert!(msg.contains("Vault not empty"), "{msg}");
}
