//! Recently generated passwords.
//!
//! At most five entries, newest first, no duplicates. Every change is
//! mirrored into the key-value store under `passwordHistory` as a JSON array
//! of strings; the key is removed when the list becomes empty.

mod list;
mod store;

pub use list::{HISTORY_LIMIT, HistoryList};
pub use store::HistoryStore;
