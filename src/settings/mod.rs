//! Runtime settings: generator defaults and where things are stored.

use std::env;
use std::path::PathBuf;

use log::debug;

use crate::pass::{ClassSet, DEFAULT_LENGTH};
use crate::store::FileStore;

/// Overrides the key-value store location.
pub const STORE_ENV: &str = "PWSMITH_STORE";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub length: usize,
    pub classes: ClassSet,
    pub store_path: PathBuf,
    pub export_dir: PathBuf,
}

impl Settings {
    /// Store path precedence: explicit flag, then `PWSMITH_STORE`, then the
    /// user config directory.
    pub fn resolve(store_flag: Option<PathBuf>) -> Self {
        let env_path = env::var_os(STORE_ENV)
            .filter(|v| !v.is_empty())
            .map(PathBuf::from);
        Self {
            store_path: pick_store_path(store_flag, env_path),
            ..Default::default()
        }
    }

    pub fn store(&self) -> FileStore {
        let store = FileStore::new(&self.store_path);
        debug!("using store {}", store.path().display());
        store
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            length: DEFAULT_LENGTH,
            classes: ClassSet::default(),
            store_path: FileStore::default_path(),
            export_dir: PathBuf::from("."),
        }
    }
}

fn pick_store_path(flag: Option<PathBuf>, env_path: Option<PathBuf>) -> PathBuf {
    flag.or(env_path).unwrap_or_else(FileStore::default_path)
}

#[cfg(test)]
mod tests {
    use std::path::Path;

    use super::*;

    #[test]
    fn test_defaults() {
        let s = Settings::default();
        assert_eq!(s.length, 12);
        assert_eq!(s.classes, ClassSet::default());
        assert_eq!(s.export_dir, PathBuf::from("."));
        assert!(s.store_path.ends_with("pwsmith/store.json"));
    }

    #[test]
    fn test_store_path_precedence() {
        let flag = Some(PathBuf::from("/tmp/flag.json"));
        let env_path = Some(PathBuf::from("/tmp/env.json"));
        assert_eq!(
            pick_store_path(flag.clone(), env_path.clone()),
            PathBuf::from("/tmp/flag.json")
        );
        assert_eq!(
            pick_store_path(None, env_path),
            PathBuf::from("/tmp/env.json")
        );
        assert_eq!(pick_store_path(None, None), FileStore::default_path());
    }

    #[test]
    fn test_store_uses_store_path() {
        let s = Settings::resolve(Some(PathBuf::from("/tmp/pwsmith-test.json")));
        assert_eq!(s.store().path(), Path::new("/tmp/pwsmith-test.json"));
    }
}
