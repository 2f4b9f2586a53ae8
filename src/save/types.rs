//! Save data types for the monster roster
//!
//! This module defines the root document structure written to disk and the
//! error types for save/load operations. It uses Serde for
//! serialization/deserialization to JSON format.

use crate::monster::Monster;
use serde::{Deserialize, Serialize};

/// The root save file structure
///
/// The on-disk document is a single JSON object with one key, `monsters`,
/// holding the full roster in order.
#[derive(Debug, Serialize, Deserialize)]
pub struct RosterFile {
    pub monsters: Vec<Monster>,
}

/// Error types for save/load operations
#[derive(Debug)]
pub enum SaveError {
    /// File could not be opened, read, or written
    Io(std::io::Error),

    /// Input text is not well-formed JSON
    Parse(serde_json::Error),

    /// Valid JSON, but a required field is missing or has the wrong type
    Schema(serde_json::Error),
}

impl std::fmt::Display for SaveError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SaveError::Io(e) => write!(f, "IO error: {}", e),
            SaveError::Parse(e) => write!(f, "Malformed JSON: {}", e),
            SaveError::Schema(e) => write!(f, "Invalid save data: {}", e),
        }
    }
}

impl std::error::Error for SaveError {}

impl From<std::io::Error> for SaveError {
    fn from(err: std::io::Error) -> Self {
        SaveError::Io(err)
    }
}

/// Sorts serde_json failures into the save error taxonomy
///
/// Syntax and unexpected-end-of-input failures mean the text was never
/// valid JSON; data failures mean the JSON parsed but didn't match the
/// document shape.
impl From<serde_json::Error> for SaveError {
    fn from(err: serde_json::Error) -> Self {
        use serde_json::error::Category;

        match err.classify() {
            Category::Syntax | Category::Eof => SaveError::Parse(err),
            Category::Data => SaveError::Schema(err),
            Category::Io => SaveError::Io(err.into()),
        }
    }
}
