//! Application layer - organized by Clean Architecture principles.
//!
//! # Structure
//!
//! - `domain/` - Core data structures (FileKind, VirtualFile, Settings, Messages)
//! - `controllers/` - Orchestration (TabSession)
//! - `services/` - Business operations (file store, naming, preview, snapshot)
//! - `infrastructure/` - Error type and logging
//! - `state.rs` - Main playground coordinator

pub mod controllers;
pub mod domain;
pub mod infrastructure;
pub mod services;
pub mod state;

// Re-exports for convenient external access
pub use controllers::tabs::TabSession;
pub use domain::{
    FileKind, Message, NoticeLevel, Notification, PlaygroundSettings, TagColor, VirtualFile,
};
pub use infrastructure::error::{PlaygroundError, Result};
pub use services::file_store::{FileStore, MemoryFileStore, StoreEvent, SubscriptionId};
pub use services::snapshot::WorkspaceSnapshot;
pub use state::Playground;
