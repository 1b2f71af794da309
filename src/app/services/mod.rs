//! Services layer - business operations and utilities.
//!
//! This module contains business logic and operations:
//! - The file store and its subscription contract
//! - File naming rules
//! - Preview document composition
//! - Workspace snapshot persistence

pub mod file_store;
pub mod naming;
pub mod preview;
pub mod snapshot;
