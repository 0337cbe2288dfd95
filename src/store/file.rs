//! JSON file-backed key-value store.

use std::collections::BTreeMap;
use std::fs::{self, OpenOptions};
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};

use log::{debug, warn};

use super::KeyValueStore;
use crate::error::StoreError;

/// Owner read/write only
#[cfg(unix)]
const FILE_PERMISSIONS: u32 = 0o600;

/// All keys live in one JSON object: `{"key": "value", ...}`.
#[derive(Debug, Clone)]
pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// `<config_dir>/pwsmith/store.json`, falling back to the working directory.
    pub fn default_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("pwsmith")
            .join("store.json")
    }

    /// Read the whole map. A file that is not a JSON object of strings is
    /// `StoreError::Json`.
    fn load(&self) -> Result<BTreeMap<String, String>, StoreError> {
        let data = match fs::read_to_string(&self.path) {
            Ok(data) => data,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(BTreeMap::new()),
            Err(e) => return Err(e.into()),
        };

        if data.trim().is_empty() {
            return Ok(BTreeMap::new());
        }

        Ok(serde_json::from_str(&data)?)
    }

    /// Map to modify before a write. A corrupt file is replaced, so the
    /// returned flag forces a save even when nothing else changes.
    fn load_for_write(&self) -> Result<(BTreeMap<String, String>, bool), StoreError> {
        match self.load() {
            Ok(map) => Ok((map, false)),
            Err(StoreError::Json(e)) => {
                warn!(
                    "store file {} is corrupt, replacing it: {}",
                    self.path.display(),
                    e
                );
                Ok((BTreeMap::new(), true))
            }
            Err(e) => Err(e),
        }
    }

    fn save(&self, map: &BTreeMap<String, String>) -> Result<(), StoreError> {
        if let Some(parent) = self.path.parent()
            && !parent.as_os_str().is_empty()
            && !parent.exists()
        {
            fs::create_dir_all(parent)?;
        }

        let data = serde_json::to_string_pretty(map)?;
        let tmp = self.path.with_extension("json.tmp");

        let mut options = OpenOptions::new();
        options.create(true).write(true).truncate(true);
        #[cfg(unix)]
        {
            use std::os::unix::fs::OpenOptionsExt;
            options.mode(FILE_PERMISSIONS);
        }

        let mut file = options.open(&tmp)?;
        file.write_all(data.as_bytes())?;
        file.sync_all()?;
        fs::rename(&tmp, &self.path)?;

        debug!("saved {} key(s) to {}", map.len(), self.path.display());
        Ok(())
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        Ok(self.load()?.remove(key))
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError> {
        let (mut map, _) = self.load_for_write()?;
        map.insert(key.to_string(), value.to_string());
        self.save(&map)
    }

    fn remove(&mut self, key: &str) -> Result<(), StoreError> {
        let (mut map, corrupt) = self.load_for_write()?;
        if map.remove(key).is_some() || corrupt {
            self.save(&map)?;
        }
        Ok(())
    }
}
