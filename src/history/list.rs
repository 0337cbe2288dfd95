//! Bounded, deduplicated, most-recent-first password list.

use serde::{Deserialize, Serialize};

use crate::error::HistoryError;
use crate::pass::Password;

pub const HISTORY_LIMIT: usize = 5;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct HistoryList(Vec<Password>);

impl HistoryList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Move or insert `password` to the front, dropping anything past the limit.
    pub fn push_front(&mut self, password: Password) {
        self.0.retain(|p| *p != password);
        self.0.insert(0, password);
        self.0.truncate(HISTORY_LIMIT);
    }

    pub fn remove(&mut self, index: usize) -> Result<Password, HistoryError> {
        if index >= self.0.len() {
            return Err(HistoryError::IndexOutOfBounds {
                index,
                len: self.0.len(),
            });
        }
        Ok(self.0.remove(index))
    }

    pub fn get(&self, index: usize) -> Option<&Password> {
        self.0.get(index)
    }

    pub fn as_slice(&self) -> &[Password] {
        &self.0
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Password> {
        self.0.iter()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Keep the first occurrence of each value and at most the limit.
    /// Returns true if anything was dropped.
    pub(super) fn normalize(&mut self) -> bool {
        let before = self.0.len();
        let mut kept: Vec<Password> = Vec::with_capacity(before.min(HISTORY_LIMIT));
        for pw in self.0.drain(..) {
            if kept.len() < HISTORY_LIMIT && !kept.contains(&pw) {
                kept.push(pw);
            }
        }
        self.0 = kept;
        self.0.len() != before
    }
}
