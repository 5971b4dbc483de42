//! Reading documents from disk.
use std::{fs, path::Path, vec::Vec};

use tracing::debug;

use crate::{error::LoadError, parser::parse, value::Value};

/// Reads the whole file at `path` into memory.
///
/// # Errors
///
/// [`LoadError::Io`] if the file cannot be opened or read.
pub fn load_file(path: impl AsRef<Path>) -> Result<Vec<u8>, LoadError> {
    let path = path.as_ref();
    let bytes = fs::read(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    debug!(path = %path.display(), bytes = bytes.len(), "loaded file");
    Ok(bytes)
}

/// Loads and parses the file at `path`.
///
/// The buffer is released once parsing ends; the returned tree owns copies of
/// everything it needs.
///
/// # Errors
///
/// [`LoadError::Io`] if reading fails, [`LoadError::Parse`] if the contents
/// are not a valid document.
pub fn parse_file(path: impl AsRef<Path>) -> Result<Value, LoadError> {
    let bytes = load_file(path)?;
    Ok(parse(&bytes)?)
}
