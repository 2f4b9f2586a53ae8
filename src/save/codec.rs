//! JSON codec for the monster roster
//!
//! A pair of pure functions mapping between an ordered roster and the JSON
//! document format. File I/O lives in `manager`; these functions only
//! produce and consume text.

use super::types::{RosterFile, SaveError};
use crate::monster::Monster;

/// Serializes a roster to a pretty-printed JSON document
///
/// Document shape: `{ "monsters": [...] }`, one object per monster with
/// keys `name`, `status` (`level`/`hp`/`mp`) and `items` (`name`/`gold`),
/// preserving roster order and drop order. Pretty format for
/// readability/debugging. An empty drop table serializes as `"items": []`,
/// never as a missing key.
pub fn encode(monsters: &[Monster]) -> Result<String, SaveError> {
    let file = RosterFile {
        monsters: monsters.to_vec(),
    };
    Ok(serde_json::to_string_pretty(&file)?)
}

/// Parses a JSON document back into an ordered roster
///
/// Either the whole document decodes or the whole call fails: a missing or
/// mistyped required field anywhere rejects the document with
/// `SaveError::Schema`, and text that is not JSON at all rejects with
/// `SaveError::Parse`. Missing fields are never defaulted to zero or empty.
/// Unknown extra fields are ignored.
pub fn decode(text: &str) -> Result<Vec<Monster>, SaveError> {
    let file: RosterFile = serde_json::from_str(text)?;
    Ok(file.monsters)
}
