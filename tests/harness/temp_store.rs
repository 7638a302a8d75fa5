use std::fs;
use std::path::PathBuf;

use immobot::adapter::outbound::store::JsonFileStore;
use serde_json::Value;
use tempfile::TempDir;

/// JSON store in a temporary directory, removed on drop.
pub struct TempStore {
    _dir: TempDir,
    path: PathBuf,
}

impl TempStore {
    pub fn create() -> Self {
        let dir = tempfile::tempdir().expect("create temp dir");
        let path = dir.path().join("db.json");
        Self { _dir: dir, path }
    }

    /// Create a store pre-populated with `document`.
    pub fn with_document(document: &Value) -> Self {
        let store = Self::create();
        fs::write(&store.path, document.to_string()).expect("seed store");
        store
    }

    /// Make every save fail by occupying the temp-file path with a directory.
    pub fn block_writes(&self) {
        fs::create_dir(self.path.with_extension("tmp")).expect("block temp path");
    }

    pub fn store(&self) -> JsonFileStore {
        JsonFileStore::new(&self.path)
    }

    pub fn exists(&self) -> bool {
        self.path.exists()
    }

    pub fn raw(&self) -> String {
        fs::read_to_string(&self.path).expect("read store")
    }

    pub fn document(&self) -> Value {
        serde_json::from_str(&self.raw()).expect("parse store")
    }
}
