// Monster model module
//
// This module provides the entity records the save system persists:
// - Monster: name, combat status, and ordered drop table
// - Status: level/hp/mp triple
// - LootItem: a named drop with a gold value

pub mod loot;
pub mod monster;
pub mod status;

// Re-export main types for convenient access
pub use loot::LootItem;
pub use monster::Monster;
pub use status::Status;
