// File: src/groups/mod.rs
mod character_groups;

pub use character_groups::CharacterGroups;
