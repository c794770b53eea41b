//! Infrastructure layer: concrete implementations of application port traits.
//!
//! This module contains all I/O-performing code: the AWS SDK client,
//! configuration file access, and signal handling.
//!
//! Imports from `crate::domain` and `crate::application` are allowed.
//! Imports from `crate::commands` or `crate::output` are forbidden.

pub mod config;
pub mod glacier;
pub mod signal;
