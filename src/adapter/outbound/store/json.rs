//! Whole-file JSON store.
//!
//! The document maps each search URL to its listings, keyed by listing id,
//! with the raw upstream record as value. Every save rewrites the whole
//! file. Runs sharing one file must not overlap: there is no locking, and
//! the last writer wins.

use std::fs;
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::domain::KnownListings;
use crate::error::StoreError;
use crate::port::ListingStore;

/// Store location used when none is configured.
pub const DEFAULT_STORE_PATH: &str = "db.json";

/// [`ListingStore`] backed by a single JSON document.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn write_error(&self, source: std::io::Error) -> StoreError {
        StoreError::Write {
            path: self.path.clone(),
            source,
        }
    }
}

impl ListingStore for JsonFileStore {
    fn load(&self) -> Result<KnownListings, StoreError> {
        let content = match fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                debug!(path = %self.path.display(), "No ads database yet, starting empty");
                return Ok(KnownListings::new());
            }
            Err(source) => {
                return Err(StoreError::Read {
                    path: self.path.clone(),
                    source,
                })
            }
        };

        serde_json::from_str(&content).map_err(|source| StoreError::Parse {
            path: self.path.clone(),
            source,
        })
    }

    /// Write to a sibling temp file, then rename over the target.
    fn save(&self, listings: &KnownListings) -> Result<(), StoreError> {
        let json = serde_json::to_string_pretty(listings)?;

        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(|e| self.write_error(e))?;
        }

        let temp_path = self.path.with_extension("tmp");
        let cleanup_and_err = |e| {
            let _ = fs::remove_file(&temp_path);
            self.write_error(e)
        };

        let mut file = fs::File::create(&temp_path).map_err(|e| self.write_error(e))?;
        file.write_all(json.as_bytes()).map_err(cleanup_and_err)?;
        file.sync_all().map_err(cleanup_and_err)?;
        drop(file);

        fs::rename(&temp_path, &self.path).map_err(cleanup_and_err)?;

        debug!(path = %self.path.display(), bytes = json.len(), "Saved ads database");
        Ok(())
    }
}
