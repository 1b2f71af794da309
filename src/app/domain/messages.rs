use super::file::FileKind;

/// All messages the UI can send to the playground.
/// Each tab-bar, explorer or editor callback sends one of these; `Playground::handle` dispatches them.
#[derive(Debug, Clone, PartialEq)]
pub enum Message {
    // Tabs
    OpenFile(String),
    CloseTab(String),
    NextTab,
    PrevTab,

    // Explorer
    AddFile { name: String, kind: FileKind },
    RenameFile { from: String, to: String },
    DeleteFile(String),
    PinFile(String),
    UnpinFile(String),

    // Editor
    EditCurrent(String),

    // Preview
    Run,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeLevel {
    Info,
    Error,
}

/// User-facing toast produced in response to a message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub level: NoticeLevel,
    pub text: String,
}

impl Notification {
    pub fn info(text: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Info,
            text: text.into(),
        }
    }

    pub fn error(text: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Error,
            text: text.into(),
        }
    }

    pub fn is_error(&self) -> bool {
        self.level == NoticeLevel::Error
    }
}
