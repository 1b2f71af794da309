//! PlayPad - the session model behind a browser HTML/CSS/JS playground.
//!
//! The crate tracks a set of virtual files, which of them are open as
//! editor tabs, which tab is current, and turns the three well-known
//! files into a live preview document.

pub mod app;

pub use app::{
    FileKind, FileStore, MemoryFileStore, Message, Notification, Playground, PlaygroundError,
    PlaygroundSettings, TabSession, TagColor,
};
