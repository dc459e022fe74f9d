//! Scorekeeper test support utilities
//!
//! This crate provides the logging initialisation shared by unit and
//! integration tests, plus helpers for generating unique test data.

pub mod logging;
pub mod unique_helpers;
