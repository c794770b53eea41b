//! Integration tests for the glacier-purge CLI
//!
//! These tests spawn the actual binary and test end-to-end behavior. None of
//! them reach AWS: every case fails or finishes before a client is built.

mod cli_tests;
