//! Domain layer - core data structures and types.
//!
//! This module contains the fundamental domain models:
//! - FileKind, TagColor and VirtualFile
//! - Playground settings
//! - Message and notification types for the event system

pub mod file;
pub mod messages;
pub mod settings;

pub use file::{DEFAULT_FILES, FileKind, TagColor, VirtualFile, is_protected};
pub use messages::{Message, NoticeLevel, Notification};
pub use settings::PlaygroundSettings;
