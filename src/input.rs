use log::debug;
use serde_json::Value;

use std::{
    fs, io,
    path::{Path, PathBuf},
};

/// Errors that stop a run before any records are processed.
#[derive(Debug, thiserror::Error)]
pub enum InputError {
    #[error("File not found: {}", .path.display())]
    NotFound {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("Cannot read file: {} ({source})", .path.display())]
    Unreadable {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("Invalid JSON format in file: {} (line {})", .path.display(), .source.line())]
    InvalidJson {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// Reads and decodes the JSON document at `path`.
///
/// # Errors
///
/// Returns [`InputError::NotFound`] if there is no file at `path`,
/// [`InputError::Unreadable`] if it cannot be read for any other reason, and
/// [`InputError::InvalidJson`] if its contents are not valid UTF-8 JSON.
pub fn read_json_file(path: impl AsRef<Path>) -> Result<Value, InputError> {
    let path = path.as_ref();
    let bytes = fs::read(path).map_err(|source| match source.kind() {
        io::ErrorKind::NotFound => InputError::NotFound {
            path: path.to_path_buf(),
            source,
        },
        _ => InputError::Unreadable {
            path: path.to_path_buf(),
            source,
        },
    })?;
    let value = serde_json::from_slice(&bytes).map_err(|source| InputError::InvalidJson {
        path: path.to_path_buf(),
        source,
    })?;
    debug!("read {} bytes of JSON from {}", bytes.len(), path.display());
    Ok(value)
}
