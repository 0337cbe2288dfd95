//! History export to a plain-text file.

use std::fs::OpenOptions;
use std::io::Write;
use std::path::{Path, PathBuf};

use log::info;
use zeroize::Zeroize;

use super::Password;
use crate::error::ExportError;

pub const EXPORT_FILE_NAME: &str = "passwords_history.txt";
pub const HEADER: &str = "Generated Passwords:";

/// Owner read/write only
#[cfg(unix)]
const FILE_PERMISSIONS: u32 = 0o600;

/// Header line, then `"<i>. <password>"` per entry (1-based), newline-joined.
pub fn render(entries: &[Password]) -> String {
    let mut lines = Vec::with_capacity(entries.len() + 1);
    lines.push(HEADER.to_string());
    lines.extend(
        entries
            .iter()
            .enumerate()
            .map(|(i, pw)| format!("{}. {}", i + 1, pw)),
    );
    let doc = lines.join("\n");
    lines.zeroize();
    doc
}

/// Write the export document into `dir`, replacing any previous export.
pub fn write(dir: &Path, entries: &[Password]) -> Result<PathBuf, ExportError> {
    if entries.is_empty() {
        return Err(ExportError::EmptyHistory);
    }

    if !dir.as_os_str().is_empty() && !dir.exists() {
        std::fs::create_dir_all(dir)?;
    }
    let path = dir.join(EXPORT_FILE_NAME);

    let mut options = OpenOptions::new();
    options.create(true).write(true).truncate(true);
    #[cfg(unix)]
    {
        use std::os::unix::fs::OpenOptionsExt;
        options.mode(FILE_PERMISSIONS);
    }

    let mut doc = render(entries);
    let result = options
        .open(&path)
        .and_then(|mut file| file.write_all(doc.as_bytes()));
    doc.zeroize();
    result?;

    info!("exported {} password(s) to {}", entries.len(), path.display());
    Ok(path)
}
