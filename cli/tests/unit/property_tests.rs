//! Property-based tests for validation and polling arithmetic.
//!
//! Uses `proptest` to verify invariants across many random inputs.

#![allow(clippy::expect_used)]

use std::time::Duration;

use proptest::prelude::*;

use glacier_purge::domain::config::VALID_CONFIG_KEYS;
use glacier_purge::domain::vault::{validate_account_id, validate_vault_name};
use glacier_purge::domain::{
    JobFailurePolicy, JobStatus, PollPolicy, PurgeConfig, parse_inventory, validate_config_key,
    validate_config_value,
};

// ============================================================================
// JobStatus
// ============================================================================

proptest! {
    /// Only the two documented terminal codes stop polling.
    #[test]
    fn prop_only_succeeded_and_failed_are_terminal(code in "\\PC{0,20}") {
        let status = JobStatus::from_code(&code);
        let expected = code == "Succeeded" || code == "Failed";
        prop_assert_eq!(status.is_terminal(), expected, "code {:?}", code);
    }

    /// Whatever the service sends is preserved verbatim.
    #[test]
    fn prop_status_code_round_trips(code in "[A-Za-z]{1,16}") {
        let status = JobStatus::from_code(&code);
        prop_assert_eq!(status.code(), code.as_str());
    }
}

// ============================================================================
// Vault target validation
// ============================================================================

proptest! {
    #[test]
    fn prop_well_formed_vault_names_accepted(name in "[A-Za-z0-9_.\\-]{1,255}") {
        prop_assert!(validate_vault_name(&name).is_ok(), "rejected {name}");
    }

    /// Any character outside the allowed set makes the name invalid.
    #[test]
    fn prop_names_with_forbidden_chars_rejected(
        prefix in "[a-z]{0,10}",
        bad in "[ /:@#!?*]",
        suffix in "[a-z]{0,10}",
    ) {
        let name = format!("{prefix}{bad}{suffix}");
        prop_assert!(validate_vault_name(&name).is_err(), "accepted {name:?}");
    }

    #[test]
    fn prop_twelve_digit_account_ids_accepted(id in "[0-9]{12}") {
        prop_assert!(validate_account_id(&id).is_ok());
    }

    #[test]
    fn prop_other_length_account_ids_rejected(id in "[0-9]{1,11}|[0-9]{13,20}") {
        prop_assert!(validate_account_id(&id).is_err(), "accepted {id}");
    }
}

#[test]
fn vault_name_length_limit_is_255() {
    assert!(validate_vault_name(&"a".repeat(255)).is_ok());
    assert!(validate_vault_name(&"a".repeat(256)).is_err());
    assert!(validate_vault_name("").is_err());
}

// ============================================================================
// PollPolicy::max_polls
// ============================================================================

proptest! {
    /// The poll budget always covers the whole deadline and never overshoots
    /// by a full interval.
    #[test]
    fn prop_max_polls_covers_deadline(interval in 1u64..3_600, max_wait in 0u64..200_000) {
        let policy = PollPolicy {
            interval: Duration::from_secs(interval),
            max_wait: Some(Duration::from_secs(max_wait)),
        };
        let polls = policy.max_polls().expect("bounded");
        prop_assert!(polls >= 1);
        prop_assert!(polls * interval >= max_wait);
        if max_wait > 0 {
            prop_assert!((polls - 1) * interval < max_wait);
        }
    }

    #[test]
    fn prop_unbounded_policy_has_no_limit(interval in 1u64..3_600) {
        let policy = PollPolicy {
            interval: Duration::from_secs(interval),
            max_wait: None,
        };
        prop_assert_eq!(policy.max_polls(), None);
    }
}

// ============================================================================
// Configuration keys and values
// ============================================================================

proptest! {
    /// Arbitrary keys (not in whitelist) are rejected.
    #[test]
    fn prop_arbitrary_keys_rejected(key in "[a-z_]{1,20}(\\.[a-z_]{1,20})?") {
        if !VALID_CONFIG_KEYS.contains(&key.as_str()) {
            prop_assert!(validate_config_key(&key).is_err(), "accepted invalid key: {key}");
        }
    }

    /// Arbitrary values for on_job_failure (not in whitelist) are rejected.
    #[test]
    fn prop_arbitrary_failure_policies_rejected(value in "[a-z]{1,20}") {
        if !JobFailurePolicy::VARIANTS.contains(&value.as_str()) {
            prop_assert!(validate_config_value("on_job_failure", &value).is_err());
        }
    }

    /// Every positive interval is stored exactly as given.
    #[test]
    fn prop_positive_intervals_round_trip_through_set(secs in 1u64..1_000_000) {
        let mut config = PurgeConfig::default();
        config
            .set("polling.interval_secs", &secs.to_string())
            .expect("valid interval");
        prop_assert_eq!(config.policy().poll.interval, Duration::from_secs(secs));
    }

    #[test]
    fn prop_non_numeric_seconds_rejected(value in "[a-z]{1,10}") {
        prop_assert!(validate_config_value("polling.max_wait_secs", &value).is_err());
        prop_assert!(validate_config_value("polling.interval_secs", &value).is_err());
    }
}

// ============================================================================
// Inventory parsing
// ============================================================================

proptest! {
    /// The archive list comes back in exactly the order the service sent it.
    #[test]
    fn prop_inventory_preserves_order(ids in proptest::collection::vec("[A-Za-z0-9_-]{8,40}", 0..50)) {
        let payload = serde_json::json!({
            "ArchiveList": ids.iter().map(|id| serde_json::json!({ "ArchiveId": id })).collect::<Vec<_>>(),
        });
        let bytes = serde_json::to_vec(&payload).expect("serialize");
        let inventory = parse_inventory(&bytes).expect("parse");
        let parsed: Vec<&str> = inventory.archives.iter().map(|a| a.archive_id.as_str()).collect();
        let expected: Vec<&str> = ids.iter().map(String::as_str).collect();
        prop_assert_eq!(parsed, expected);
    }
}
