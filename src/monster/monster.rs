use super::loot::LootItem;
use super::status::Status;
use serde::{Deserialize, Serialize};

/// A game entity record: name, combat status, and loot table
///
/// A monster owns its `Status` and its drop list exclusively; nothing is
/// shared between monsters. The order of `drops` is meaningful (it must
/// survive a save/load cycle unchanged), so it is stored as a plain Vec.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Monster {
    /// Display name of the monster
    pub name: String,

    /// Combat stats
    pub status: Status,

    /// Drop table, serialized under the key "items"
    #[serde(rename = "items")]
    pub drops: Vec<LootItem>,
}

impl Monster {
    /// Creates a monster with an empty drop table
    pub fn new(name: impl Into<String>, status: Status) -> Self {
        Monster {
            name: name.into(),
            status,
            drops: Vec::new(),
        }
    }

    /// Appends an item to the drop table, preserving insertion order
    pub fn add_drop(&mut self, item: LootItem) {
        self.drops.push(item);
    }
}
