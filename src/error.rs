//! Error types for generation, history, persistence, clipboard and export.

use thiserror::Error;

use crate::pass::{MAX_LENGTH, MIN_LENGTH};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GenerationError {
    #[error("Select at least one option.")]
    NoClassSelected,

    #[error("Password length {length} is outside {}..={}", MIN_LENGTH, MAX_LENGTH)]
    LengthOutOfRange { length: usize },
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum HistoryError {
    #[error("History index {index} out of bounds (len {len})")]
    IndexOutOfBounds { index: usize, len: usize },
}

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

#[derive(Debug, Error)]
pub enum ClipboardError {
    #[error("Clipboard unavailable: {0}")]
    Unavailable(String),

    #[error("Clipboard write failed: {0}")]
    Write(String),
}

#[derive(Debug, Error)]
pub enum ExportError {
    #[error("No history to export")]
    EmptyHistory,

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
