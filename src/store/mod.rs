//! Key-value persistence.
//!
//! The history and app state are mirrored into a string-keyed store with
//! `get/set/remove`. `FileStore` backs the binary; `MemoryStore` backs tests.

mod file;
#[cfg(test)]
mod memory;

pub use file::FileStore;
#[cfg(test)]
pub use memory::MemoryStore;

use crate::error::StoreError;

pub const KEY_LAST_PASSWORD: &str = "lastPassword";
pub const KEY_HISTORY: &str = "passwordHistory";
pub const KEY_THEME: &str = "themeMode";

pub trait KeyValueStore {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError>;
    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError>;
    fn remove(&mut self, key: &str) -> Result<(), StoreError>;
}

impl<S: KeyValueStore + ?Sized> KeyValueStore for &mut S {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        (**self).get(key)
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError> {
        (**self).set(key, value)
    }

    fn remove(&mut self, key: &str) -> Result<(), StoreError> {
        (**self).remove(key)
    }
}
