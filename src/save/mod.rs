//! Save/Load system for the monster roster
//!
//! This module provides a JSON-based save/load system with:
//! - Human-readable, debuggable save files
//! - A strict decode policy: the whole document loads or the whole load
//!   fails, with no per-record recovery and no defaulted fields
//! - Errors classified as IO, parse, or schema failures
//!
//! # Architecture
//!
//! - `types`: root document structure and error types
//! - `codec`: pure encode/decode between the roster and JSON text
//! - `manager`: file read/write wrappers around the codec

pub mod codec;
pub mod manager;
pub mod types;

// Re-export commonly used items
pub use codec::{decode, encode};
pub use manager::{load_from_file, save_to_file};
pub use types::{RosterFile, SaveError};
