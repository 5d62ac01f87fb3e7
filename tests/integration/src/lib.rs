//! Integration test utilities for the hours service
//!
//! This crate provides helpers for running end-to-end tests against
//! the REST API on the in-memory record store.

pub mod fixtures;
pub mod helpers;

pub use fixtures::*;
pub use helpers::*;
