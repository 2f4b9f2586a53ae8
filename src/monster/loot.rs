use serde::{Deserialize, Serialize};

/// An item a monster can drop
///
/// No uniqueness constraint: the same item may appear more than once in
/// a drop table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LootItem {
    /// Display name of the item
    pub name: String,

    /// Currency value in gold
    pub gold: i32,
}

impl LootItem {
    /// Creates a new loot item
    pub fn new(name: impl Into<String>, gold: i32) -> Self {
        LootItem {
            name: name.into(),
            gold,
        }
    }
}
