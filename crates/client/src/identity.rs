//! Anonymous user identity, persisted on disk between runs.

use std::fs;
use std::io;
use std::path::Path;

/// Load the identifier stored at `path`, or mint a new UUID and persist it.
///
/// A blank or whitespace-only file is treated as missing.
pub fn load_or_create_identifier(path: impl AsRef<Path>) -> io::Result<String> {
    let path = path.as_ref();

    if let Ok(contents) = fs::read_to_string(path) {
        let trimmed = contents.trim();
        if !trimmed.is_empty() {
            return Ok(trimmed.to_string());
        }
    }

    let identifier = uuid::Uuid::new_v4().to_string();
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(path, &identifier)?;
    Ok(identifier)
}
