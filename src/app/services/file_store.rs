use std::collections::BTreeMap;
use std::fmt;

use crate::app::domain::{DEFAULT_FILES, FileKind, VirtualFile, is_protected};
use crate::app::infrastructure::error::{PlaygroundError, Result};

/// Holder of the virtual files, keyed by name.
///
/// `add` rejects duplicates; `remove` and `rename` reject the protected
/// defaults. A rejected call leaves the store untouched.
pub trait FileStore {
    fn get(&self, name: &str) -> Option<&VirtualFile>;

    /// All file names in ascending order.
    fn list(&self) -> Vec<String>;

    fn add(&mut self, name: &str, kind: FileKind) -> Result<()>;

    fn remove(&mut self, name: &str) -> Result<VirtualFile>;

    fn rename(&mut self, old: &str, new: &str) -> Result<()>;

    fn update_content(&mut self, name: &str, content: String) -> Result<()>;

    fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    /// Content of `name`, or the empty string if it does not exist.
    fn content_or_empty(&self, name: &str) -> &str {
        self.get(name).map(|f| f.content.as_str()).unwrap_or("")
    }
}

/// Change notification delivered to store subscribers after a mutation
/// has been applied.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreEvent {
    Added(String),
    Removed(String),
    Renamed { from: String, to: String },
    ContentChanged(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(pub u64);

type Listener = Box<dyn FnMut(&StoreEvent)>;

/// In-memory store, the one the browser session uses.
pub struct MemoryFileStore {
    files: BTreeMap<String, VirtualFile>,
    listeners: Vec<(SubscriptionId, Listener)>,
    next_subscription: u64,
}

const DEFAULT_HTML: &str = "<!DOCTYPE html>
<html>
<head>
  <meta charset=\"utf-8\">
  <title>Playground</title>
</head>
<body>
  <h1>Hello, playground!</h1>
</body>
</html>
";

const DEFAULT_CSS: &str = "body {
  font-family: sans-serif;
  margin: 2rem;
}
";

const DEFAULT_JS: &str = "console.log('Hello from script.js');
";

impl MemoryFileStore {
    /// An empty store. Most callers want `with_defaults`.
    pub fn new() -> Self {
        Self {
            files: BTreeMap::new(),
            listeners: Vec::new(),
            next_subscription: 1,
        }
    }

    /// A store seeded with the three protected defaults.
    pub fn with_defaults() -> Self {
        let mut store = Self::new();
        store.seed_defaults();
        store
    }

    /// Insert any missing protected default with its starter content.
    /// Existing defaults are left as they are.
    pub fn seed_defaults(&mut self) {
        for name in DEFAULT_FILES {
            if !self.files.contains_key(name) {
                self.files
                    .insert(name.to_string(), VirtualFile::new(name, starter_content(name)));
            }
        }
    }

    /// Insert or overwrite a file with content, bypassing the duplicate
    /// check. Used when restoring a snapshot.
    pub fn insert(&mut self, name: &str, content: impl Into<String>) {
        self.files.insert(name.to_string(), VirtualFile::new(name, content));
    }

    pub fn len(&self) -> usize {
        self.files.len()
    }

    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &VirtualFile)> {
        self.files.iter()
    }

    pub fn subscribe(&mut self, listener: impl FnMut(&StoreEvent) + 'static) -> SubscriptionId {
        let id = SubscriptionId(self.next_subscription);
        self.next_subscription += 1;
        self.listeners.push((id, Box::new(listener)));
        id
    }

    /// Returns false if `id` was not subscribed.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.listeners.len();
        self.listeners.retain(|(sid, _)| *sid != id);
        self.listeners.len() != before
    }

    fn emit(&mut self, event: StoreEvent) {
        for (_, listener) in &mut self.listeners {
            listener(&event);
        }
    }
}

impl Default for MemoryFileStore {
    fn default() -> Self {
        Self::with_defaults()
    }
}

impl fmt::Debug for MemoryFileStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MemoryFileStore")
            .field("files", &self.files)
            .field("listeners", &self.listeners.len())
            .finish()
    }
}

impl FileStore for MemoryFileStore {
    fn get(&self, name: &str) -> Option<&VirtualFile> {
        self.files.get(name)
    }

    fn list(&self) -> Vec<String> {
        self.files.keys().cloned().collect()
    }

    fn add(&mut self, name: &str, kind: FileKind) -> Result<()> {
        if self.files.contains_key(name) {
            return Err(PlaygroundError::DuplicateName(name.to_string()));
        }
        self.files.insert(
            name.to_string(),
            VirtualFile {
                content: String::new(),
                kind,
            },
        );
        self.emit(StoreEvent::Added(name.to_string()));
        Ok(())
    }

    fn remove(&mut self, name: &str) -> Result<VirtualFile> {
        if is_protected(name) {
            return Err(PlaygroundError::ProtectedFile(name.to_string()));
        }
        let file = self
            .files
            .remove(name)
            .ok_or_else(|| PlaygroundError::NotFound(name.to_string()))?;
        self.emit(StoreEvent::Removed(name.to_string()));
        Ok(file)
    }

    fn rename(&mut self, old: &str, new: &str) -> Result<()> {
        if is_protected(old) {
            return Err(PlaygroundError::ProtectedFile(old.to_string()));
        }
        if !self.files.contains_key(old) {
            return Err(PlaygroundError::NotFound(old.to_string()));
        }
        if old == new {
            return Ok(());
        }
        if self.files.contains_key(new) {
            return Err(PlaygroundError::DuplicateName(new.to_string()));
        }

        if let Some(mut file) = self.files.remove(old) {
            file.kind = FileKind::from_name(new);
            self.files.insert(new.to_string(), file);
        }
        self.emit(StoreEvent::Renamed {
            from: old.to_string(),
            to: new.to_string(),
        });
        Ok(())
    }

    fn update_content(&mut self, name: &str, content: String) -> Result<()> {
        let file = self
            .files
            .get_mut(name)
            .ok_or_else(|| PlaygroundError::NotFound(name.to_string()))?;
        file.content = content;
        self.emit(StoreEvent::ContentChanged(name.to_string()));
        Ok(())
    }
}

fn starter_content(name: &str) -> &'static str {
    match FileKind::from_name(name) {
        FileKind::Html => DEFAULT_HTML,
        FileKind::Css => DEFAULT_CSS,
        FileKind::JavaScript => DEFAULT_JS,
        FileKind::Other => "",
    }
}
