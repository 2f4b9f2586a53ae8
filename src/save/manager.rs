//! File wrappers around the roster codec
//!
//! Thin save/load helpers: encode-then-write and read-then-decode against a
//! single file path. Each call is independent and stateless; the file handle
//! is released on every exit path, including failures.

use super::codec;
use super::types::SaveError;
use crate::monster::Monster;
use std::fs;
use std::path::Path;

/// Save a roster to a file
///
/// Encodes the roster to JSON (pretty format for readability/debugging) and
/// writes the full document to `path`, truncating any existing content. The
/// parent directory is created if it doesn't exist. Any I/O failure is
/// returned as `SaveError::Io`; a failed write is never reported as success.
pub fn save_to_file(path: impl AsRef<Path>, monsters: &[Monster]) -> Result<(), SaveError> {
    let path = path.as_ref();
    let json = codec::encode(monsters)?;

    // Create the parent directory if it doesn't exist
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            fs::create_dir_all(parent)?;
        }
    }

    fs::write(path, json)?;

    Ok(())
}

/// Load a roster from a file
///
/// Reads the entire file into memory, then decodes it. Fails with
/// `SaveError::Io` when the file cannot be opened or read, and propagates
/// `Parse`/`Schema` when the contents don't decode.
pub fn load_from_file(path: impl AsRef<Path>) -> Result<Vec<Monster>, SaveError> {
    let json = fs::read_to_string(path)?;
    codec::decode(&json)
}
