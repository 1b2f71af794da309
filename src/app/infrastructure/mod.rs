//! Infrastructure layer - external integrations and utilities.
//!
//! This module contains code that interfaces with external systems:
//! - Error types
//! - Tracing subscriber setup

pub mod error;
pub mod logging;
