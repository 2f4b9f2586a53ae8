use serde::{Deserialize, Serialize};

/// A monster's combat stats
///
/// Plain value record. No validation is applied: negative or zero values
/// are accepted and round-trip as-is. Field order here is also the key
/// order in the serialized document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Status {
    /// Monster level
    pub level: i32,

    /// Health points
    pub hp: i32,

    /// Mana points
    pub mp: i32,
}

impl Status {
    /// Creates a new status triple
    pub fn new(level: i32, hp: i32, mp: i32) -> Self {
        Status { level, hp, mp }
    }
}
