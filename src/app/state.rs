use std::path::Path;

use super::controllers::tabs::TabSession;
use super::domain::{FileKind, Message, Notification, PlaygroundSettings, TagColor, is_protected};
use super::infrastructure::error::{PlaygroundError, Result};
use super::services::file_store::{FileStore, MemoryFileStore};
use super::services::naming::{name_for_new_file, name_for_rename};
use super::services::preview::{PreviewSources, compose_preview};
use super::services::snapshot::WorkspaceSnapshot;

/// What the editor view needs to render the current file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditorBinding<'a> {
    pub language: &'static str,
    pub display_name: &'a str,
    /// Empty when the current file has vanished from the store.
    pub value: &'a str,
    pub tab_size: u32,
}

/// One row of the file explorer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileEntry {
    pub name: String,
    pub kind: FileKind,
    pub color: TagColor,
    /// CSS color for the tag in the requested palette.
    pub color_hex: String,
    pub is_open: bool,
    pub is_current: bool,
    pub is_pinned: bool,
}

/// Ties the injected file store to the tab session.
///
/// Store mutations happen first; the tab session is only updated once the
/// store has accepted the change, so a rejected operation leaves both
/// untouched.
pub struct Playground<S: FileStore = MemoryFileStore> {
    store: S,
    tabs: TabSession,
    settings: PlaygroundSettings,
    last_preview: Option<String>,
    preview_runs: u64,
}

impl Playground<MemoryFileStore> {
    /// A fresh playground seeded with the three default files.
    pub fn new(settings: PlaygroundSettings) -> Self {
        Self::with_store(MemoryFileStore::with_defaults(), settings)
    }

    pub fn from_snapshot(snapshot: WorkspaceSnapshot, settings: PlaygroundSettings) -> Self {
        let (store, tabs) = snapshot.restore(settings.effective_fallback());
        Self {
            store,
            tabs,
            settings,
            last_preview: None,
            preview_runs: 0,
        }
    }

    pub fn snapshot(&self) -> WorkspaceSnapshot {
        WorkspaceSnapshot::capture(&self.store, &self.tabs)
    }

    pub fn save_snapshot(&self, path: &Path) -> Result<()> {
        self.snapshot().save_to(path)?;
        tracing::info!(path = %path.display(), files = self.store.len(), "workspace saved");
        Ok(())
    }

    /// Store access for subscribing to change events.
    pub fn store_mut(&mut self) -> &mut MemoryFileStore {
        &mut self.store
    }
}

impl<S: FileStore> Playground<S> {
    pub fn with_store(store: S, settings: PlaygroundSettings) -> Self {
        let fallback = settings.effective_fallback().to_string();
        if !store.contains(&fallback) {
            tracing::warn!(fallback = %fallback, "store is missing the fallback file");
        }
        Self {
            store,
            tabs: TabSession::new(fallback),
            settings,
            last_preview: None,
            preview_runs: 0,
        }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn tabs(&self) -> &TabSession {
        &self.tabs
    }

    pub fn settings(&self) -> &PlaygroundSettings {
        &self.settings
    }

    pub fn current(&self) -> &str {
        self.tabs.current()
    }

    // --- Tabs ---

    pub fn open_file(&mut self, name: &str) -> Result<()> {
        if !self.store.contains(name) {
            return Err(PlaygroundError::NotFound(name.to_string()));
        }
        self.tabs.open(name);
        Ok(())
    }

    /// Close a tab. Fails when `name` is not open or is the only tab
    /// left and is the fallback; the tabs are unchanged in that case.
    pub fn close_tab(&mut self, name: &str) -> Result<()> {
        if self.tabs.close(name) {
            Ok(())
        } else {
            Err(PlaygroundError::TabNotClosable(name.to_string()))
        }
    }

    // --- File operations ---

    /// Create an empty file and focus it. Returns the final name, which
    /// has `kind`'s extension appended when the typed name had none.
    pub fn add_file(&mut self, raw_name: &str, kind: FileKind) -> Result<String> {
        let name = name_for_new_file(raw_name, kind)?;
        let kind = FileKind::from_name(&name);
        self.store.add(&name, kind)?;
        self.tabs.open(&name);
        tracing::info!(file = %name, kind = kind.as_str(), "file created");
        Ok(name)
    }

    /// Rename a file and retarget its tab in place. Returns the final name.
    pub fn rename_file(&mut self, old: &str, new_raw: &str) -> Result<String> {
        if is_protected(old) {
            return Err(PlaygroundError::ProtectedFile(old.to_string()));
        }
        if !self.store.contains(old) {
            return Err(PlaygroundError::NotFound(old.to_string()));
        }
        let new = name_for_rename(old, new_raw)?;
        if new == old {
            return Ok(new);
        }
        self.store.rename(old, &new)?;
        self.tabs.rename(old, &new);
        tracing::info!(from = old, to = %new, "file renamed");
        Ok(new)
    }

    pub fn delete_file(&mut self, name: &str) -> Result<()> {
        self.store.remove(name)?;
        self.tabs.forget(name);
        tracing::info!(file = name, current = self.tabs.current(), "file deleted");
        Ok(())
    }

    pub fn pin_file(&mut self, name: &str) -> Result<()> {
        if !self.store.contains(name) {
            return Err(PlaygroundError::NotFound(name.to_string()));
        }
        self.tabs.pin(name);
        Ok(())
    }

    pub fn unpin_file(&mut self, name: &str) {
        self.tabs.unpin(name);
    }

    // --- Editor ---

    /// Route an editor change to the current file. Called on every
    /// keystroke; a current file missing from the store is ignored.
    pub fn update_current_content(&mut self, content: String) {
        let current = self.tabs.current();
        if let Err(e) = self.store.update_content(current, content) {
            tracing::debug!(file = current, error = %e, "dropped edit for missing file");
        }
    }

    pub fn editor_binding(&self) -> EditorBinding<'_> {
        let name = self.tabs.current();
        EditorBinding {
            language: FileKind::from_name(name).language_id(),
            display_name: name,
            value: self.store.content_or_empty(name),
            tab_size: self.settings.tab_size,
        }
    }

    pub fn current_file_kind(&self) -> FileKind {
        FileKind::from_name(self.tabs.current())
    }

    /// Explorer rows, sorted by name with pinned files first when enabled.
    pub fn file_entries(&self, dark: bool) -> Vec<FileEntry> {
        let mut entries: Vec<FileEntry> = self
            .store
            .list()
            .into_iter()
            .map(|name| FileEntry {
                kind: FileKind::from_name(&name),
                color: TagColor::for_file(&name),
                color_hex: TagColor::for_file(&name).to_hex(dark),
                is_open: self.tabs.is_open(&name),
                is_current: self.tabs.current() == name,
                is_pinned: self.tabs.is_pinned(&name),
                name,
            })
            .collect();
        entries.sort_by(|a, b| a.name.cmp(&b.name));
        if self.settings.pinned_first {
            entries.sort_by_key(|e| !e.is_pinned);
        }
        entries
    }

    // --- Preview ---

    pub fn preview_sources(&self) -> PreviewSources {
        PreviewSources::from_store(&self.store)
    }

    /// The manual Run trigger: recompose the preview from current contents.
    pub fn run_preview(&mut self) -> &str {
        let doc = compose_preview(&self.preview_sources());
        self.preview_runs += 1;
        tracing::debug!(run = self.preview_runs, bytes = doc.len(), "preview composed");
        self.last_preview.insert(doc)
    }

    pub fn last_preview(&self) -> Option<&str> {
        self.last_preview.as_deref()
    }

    pub fn preview_runs(&self) -> u64 {
        self.preview_runs
    }

    // --- Dispatch ---

    /// Apply a UI message. Failures never escape: they come back as an
    /// error notification and leave state unchanged.
    pub fn handle(&mut self, message: Message) -> Option<Notification> {
        let outcome = match message {
            Message::OpenFile(name) => self.open_file(&name).map(|_| None),
            Message::CloseTab(name) => self.close_tab(&name).map(|_| None),
            Message::NextTab => {
                self.tabs.focus_next();
                Ok(None)
            }
            Message::PrevTab => {
                self.tabs.focus_prev();
                Ok(None)
            }
            Message::AddFile { name, kind } => self
                .add_file(&name, kind)
                .map(|n| Some(Notification::info(format!("Created {}", n)))),
            Message::RenameFile { from, to } => self
                .rename_file(&from, &to)
                .map(|n| Some(Notification::info(format!("Renamed {} to {}", from, n)))),
            Message::DeleteFile(name) => self
                .delete_file(&name)
                .map(|_| Some(Notification::info(format!("Deleted {}", name)))),
            Message::PinFile(name) => self.pin_file(&name).map(|_| None),
            Message::UnpinFile(name) => {
                self.unpin_file(&name);
                Ok(None)
            }
            Message::EditCurrent(content) => {
                self.update_current_content(content);
                Ok(None)
            }
            Message::Run => {
                self.run_preview();
                Ok(None)
            }
        };

        outcome.unwrap_or_else(|e| {
            tracing::warn!(error = %e, "operation rejected");
            Some(Notification::error(e.to_string()))
        })
    }
}
