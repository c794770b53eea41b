//! Unit tests for glacier-purge
//!
//! These tests use an in-memory Glacier and tokio's paused clock, so they run
//! fast without network access or real sleeps.

mod property_tests;
mod vault_purge_service;
