use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::app::controllers::tabs::TabSession;
use crate::app::infrastructure::error::{PlaygroundError, Result};
use crate::app::services::file_store::{FileStore, MemoryFileStore};

/// Serialized form of a whole playground: files plus tab state.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorkspaceSnapshot {
    pub files: Vec<SnapshotFile>,
    pub open_files: Vec<String>,
    pub current: String,
    #[serde(default)]
    pub pinned: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SnapshotFile {
    pub name: String,
    pub content: String,
}

impl WorkspaceSnapshot {
    pub fn capture(store: &MemoryFileStore, tabs: &TabSession) -> Self {
        Self {
            files: store
                .iter()
                .map(|(name, file)| SnapshotFile {
                    name: name.clone(),
                    content: file.content.clone(),
                })
                .collect(),
            open_files: tabs.open_files().to_vec(),
            current: tabs.current().to_string(),
            pinned: tabs.pinned().iter().cloned().collect(),
        }
    }

    /// Rebuild the store and tab session. Missing defaults are re-seeded
    /// and dangling tab references are dropped.
    pub fn restore(self, fallback: &str) -> (MemoryFileStore, TabSession) {
        let mut store = MemoryFileStore::new();
        for file in self.files {
            store.insert(&file.name, file.content);
        }
        store.seed_defaults();

        let tabs = TabSession::restore(
            fallback,
            self.open_files,
            self.current,
            self.pinned,
            |name| store.contains(name),
        );
        (store, tabs)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        let json = serde_json::to_string_pretty(self)?;
        fs::write(path, json)?;
        Ok(())
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)?;
        serde_json::from_str(&contents)
            .map_err(|e| PlaygroundError::Snapshot(format!("{}: {}", path.display(), e)))
    }
}

/// Returns the snapshot path: data_dir/playpad/workspace.json
pub fn snapshot_path() -> PathBuf {
    let mut path = dirs::data_dir().unwrap_or_else(|| PathBuf::from("."));
    path.push("playpad");
    path.push("workspace.json");
    path
}

/// Load the saved workspace, if there is a readable one.
pub fn load_snapshot() -> Option<WorkspaceSnapshot> {
    let path = snapshot_path();
    if !path.exists() {
        return None;
    }
    match WorkspaceSnapshot::load_from(&path) {
        Ok(snapshot) => Some(snapshot),
        Err(e) => {
            tracing::warn!(error = %e, "ignoring unreadable workspace snapshot");
            None
        }
    }
}
