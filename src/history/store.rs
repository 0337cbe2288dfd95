//! History persistence policy.

use log::{debug, warn};

use super::HistoryList;
use crate::error::{HistoryError, StoreError};
use crate::pass::Password;
use crate::store::{KEY_HISTORY, KEY_LAST_PASSWORD, KeyValueStore};

/// Owns the history list and mirrors every change into the store.
///
/// Store failures are logged and never fail an operation: persistence is
/// best-effort and the in-memory list stays authoritative for the session.
pub struct HistoryStore<S> {
    list: HistoryList,
    store: S,
}

impl<S: KeyValueStore> HistoryStore<S> {
    /// Empty history; nothing is read until [`restore`](Self::restore).
    pub fn new(store: S) -> Self {
        Self {
            list: HistoryList::new(),
            store,
        }
    }

    /// Create and restore in one step.
    pub fn open(store: S) -> Self {
        let mut history = Self::new(store);
        history.restore();
        history
    }

    /// Load the persisted list. Corrupt data resets the persisted history and
    /// last password to absent.
    pub fn restore(&mut self) -> &HistoryList {
        self.list = HistoryList::new();

        let raw = match self.store.get(KEY_HISTORY) {
            Ok(Some(raw)) => raw,
            Ok(None) => return &self.list,
            Err(StoreError::Json(e)) => {
                warn!("store is corrupt, discarding history: {}", e);
                self.discard();
                return &self.list;
            }
            Err(e) => {
                warn!("failed to read history: {}", e);
                return &self.list;
            }
        };

        match serde_json::from_str::<HistoryList>(&raw) {
            Ok(mut list) => {
                if list.normalize() {
                    warn!("stored history broke its limits, rewriting");
                    self.list = list;
                    self.persist();
                } else if list.is_empty() {
                    self.list = list;
                    self.persist();
                } else {
                    self.list = list;
                }
                debug!("restored {} history entries", self.list.len());
            }
            Err(e) => {
                warn!("stored history is corrupt, discarding: {}", e);
                self.discard();
            }
        }

        &self.list
    }

    fn discard(&mut self) {
        for key in [KEY_HISTORY, KEY_LAST_PASSWORD] {
            if let Err(e) = self.store.remove(key) {
                warn!("failed to clear {}: {}", key, e);
            }
        }
    }

    /// Put `password` at the front, removing an earlier copy and keeping the
    /// five most recent entries.
    pub fn add(&mut self, password: Password) {
        self.list.push_front(password);
        debug!("history add, {} entries", self.list.len());
        self.persist();
    }

    /// Remove the entry at `index`. Out-of-range indices leave the list as is.
    pub fn remove_at(&mut self, index: usize) -> Result<Password, HistoryError> {
        let removed = self.list.remove(index)?;
        debug!("history remove at {}, {} entries", index, self.list.len());
        self.persist();
        Ok(removed)
    }

    pub fn entries(&self) -> &HistoryList {
        &self.list
    }

    pub fn get(&self, index: usize) -> Option<&Password> {
        self.list.get(index)
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn store_mut(&mut self) -> &mut S {
        &mut self.store
    }

    /// Write the list, or erase the key when the list is empty.
    fn persist(&mut self) {
        let result = if self.list.is_empty() {
            self.store.remove(KEY_HISTORY)
        } else {
            match serde_json::to_string(&self.list) {
                Ok(json) => self.store.set(KEY_HISTORY, &json),
                Err(e) => Err(e.into()),
            }
        };

        if let Err(e) = result {
            warn!("failed to persist history: {}", e);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::{FileStore, MemoryStore};

    fn pw(s: &str) -> Password {
        Password::from(s)
    }

    fn values<S: KeyValueStore>(h: &HistoryStore<S>) -> Vec<String> {
        h.entries().iter().map(|p| p.to_string()).collect()
    }

    fn stored(store: &MemoryStore) -> Option<Vec<String>> {
        store
            .get(KEY_HISTORY)
            .unwrap()
            .map(|raw| serde_json::from_str(&raw).unwrap())
    }

    #[test]
    fn test_add_puts_newest_first() {
        let mut h = HistoryStore::new(MemoryStore::new());
        h.add(pw("one"));
        h.add(pw("two"));
        assert_eq!(values(&h), ["two", "one"]);
        assert_eq!(stored(h.store()).unwrap(), ["two", "one"]);
    }

    #[test]
    fn test_add_duplicate_moves_to_front() {
        let mut h = HistoryStore::new(MemoryStore::new());
        h.add(pw("X"));
        h.add(pw("Y"));
        h.add(pw("Z"));
        h.add(pw("X"));
        assert_eq!(h.entries().len(), 3);
        assert_eq!(values(&h), ["X", "Z", "Y"]);
    }

    #[test]
    fn test_six_adds_keep_five_newest() {
        let mut h = HistoryStore::new(MemoryStore::new());
        for s in ["p1", "p2", "p3", "p4", "p5", "p6"] {
            h.add(pw(s));
        }
        assert_eq!(values(&h), ["p6", "p5", "p4", "p3", "p2"]);
        assert!(!values(&h).contains(&"p1".to_string()));
        assert_eq!(stored(h.store()).unwrap().len(), 5);
    }

    #[test]
    fn test_remove_at_preserves_order_and_persists() {
        let mut h = HistoryStore::new(MemoryStore::new());
        for s in ["a", "b", "c"] {
            h.add(pw(s));
        }
        let removed = h.remove_at(1).unwrap();
        assert_eq!(removed, "b");
        assert_eq!(values(&h), ["c", "a"]);
        assert_eq!(stored(h.store()).unwrap(), ["c", "a"]);
    }

    #[test]
    fn test_remove_last_clears_key() {
        let mut h = HistoryStore::new(MemoryStore::new());
        h.add(pw("only"));
        h.remove_at(0).unwrap();
        assert!(h.entries().is_empty());
        assert!(!h.store().contains(KEY_HISTORY));
    }

    #[test]
    fn test_remove_at_out_of_bounds() {
        let mut h = HistoryStore::new(MemoryStore::new());
        assert_eq!(
            h.remove_at(0),
            Err(HistoryError::IndexOutOfBounds { index: 0, len: 0 })
        );

        h.add(pw("a"));
        h.add(pw("b"));
        assert_eq!(
            h.remove_at(2),
            Err(HistoryError::IndexOutOfBounds { index: 2, len: 2 })
        );
        assert_eq!(values(&h), ["b", "a"]);
        assert_eq!(stored(h.store()).unwrap(), ["b", "a"]);
    }

    #[test]
    fn test_restore_roundtrip() {
        let mut first = HistoryStore::new(MemoryStore::new());
        for s in ["a", "b", "c"] {
            first.add(pw(s));
        }
        let store = first.store().clone();

        let second = HistoryStore::open(store);
        assert_eq!(second.entries(), first.entries());
    }

    #[test]
    fn test_restore_missing_is_empty() {
        let mut h = HistoryStore::new(MemoryStore::new());
        assert!(h.restore().is_empty());
    }

    #[test]
    fn test_restore_corrupt_clears_entry() {
        for bad in ["{not json", "42", r#"{"a":1}"#, "[1,2]", "null"] {
            let mut store = MemoryStore::new();
            store.set(KEY_HISTORY, bad).unwrap();
            let mut h = HistoryStore::new(store);
            assert!(h.restore().is_empty(), "input {bad}");
            assert!(!h.store().contains(KEY_HISTORY), "input {bad}");
        }
    }

    #[test]
    fn test_restore_corrupt_clears_last_password() {
        let mut store = MemoryStore::new();
        store.set(KEY_HISTORY, "{broken").unwrap();
        store.set(KEY_LAST_PASSWORD, "stale").unwrap();

        let h = HistoryStore::open(store);
        assert!(h.entries().is_empty());
        assert_eq!(h.store().get(KEY_LAST_PASSWORD).unwrap(), None);
        assert!(!h.store().contains(KEY_HISTORY));
    }

    #[test]
    fn test_restore_keeps_last_password_when_history_is_valid() {
        let mut store = MemoryStore::new();
        store.set(KEY_HISTORY, r#"["a"]"#).unwrap();
        store.set(KEY_LAST_PASSWORD, "a").unwrap();

        let h = HistoryStore::open(store);
        assert_eq!(h.store().get(KEY_LAST_PASSWORD).unwrap().as_deref(), Some("a"));
    }

    #[test]
    fn test_restore_resets_corrupt_store_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("store.json");
        std::fs::write(&path, "{not json").unwrap();

        let h = HistoryStore::open(FileStore::new(&path));
        assert!(h.entries().is_empty());
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "{}");
        assert_eq!(h.store().get(KEY_LAST_PASSWORD).unwrap(), None);
        assert_eq!(h.store().get(KEY_HISTORY).unwrap(), None);
    }

    #[test]
    fn test_restore_corrupt_entry_in_store_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("store.json");
        std::fs::write(
            &path,
            r#"{"passwordHistory":"{broken","lastPassword":"stale","themeMode":"dark"}"#,
        )
        .unwrap();

        let h = HistoryStore::open(FileStore::new(&path));
        assert!(h.entries().is_empty());
        assert_eq!(h.store().get(KEY_HISTORY).unwrap(), None);
        assert_eq!(h.store().get(KEY_LAST_PASSWORD).unwrap(), None);
        assert_eq!(h.store().get("themeMode").unwrap().as_deref(), Some("dark"));
    }

    #[test]
    fn test_restore_normalizes_oversized_list() {
        let mut store = MemoryStore::new();
        store
            .set(KEY_HISTORY, r#"["a","b","a","c","d","e","f"]"#)
            .unwrap();
        let h = HistoryStore::open(store);
        assert_eq!(values(&h), ["a", "b", "c", "d", "e"]);
        assert_eq!(stored(h.store()).unwrap(), ["a", "b", "c", "d", "e"]);
    }

    #[test]
    fn test_restore_empty_array_clears_entry() {
        let mut store = MemoryStore::new();
        store.set(KEY_HISTORY, "[]").unwrap();
        let h = HistoryStore::open(store);
        assert!(h.entries().is_empty());
        assert!(!h.store().contains(KEY_HISTORY));
    }

    struct FailingStore;

    impl KeyValueStore for FailingStore {
        fn get(&self, _key: &str) -> Result<Option<String>, StoreError> {
            Err(std::io::Error::other("read failed").into())
        }

        fn set(&mut self, _key: &str, _value: &str) -> Result<(), StoreError> {
            Err(std::io::Error::other("write failed").into())
        }

        fn remove(&mut self, _key: &str) -> Result<(), StoreError> {
            Err(std::io::Error::other("remove failed").into())
        }
    }

    #[test]
    fn test_store_failures_are_not_fatal() {
        let mut h = HistoryStore::open(FailingStore);
        assert!(h.entries().is_empty());
        h.add(pw("a"));
        h.add(pw("b"));
        assert_eq!(values(&h), ["b", "a"]);
        assert_eq!(h.remove_at(0).unwrap(), "b");
        assert_eq!(values(&h), ["a"]);
    }
}
