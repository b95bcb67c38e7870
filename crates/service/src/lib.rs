//! Service layer for the foraging log.
//! - Owns the item store and its uniqueness rule.
//! - Reuses the entity and validation types from the `models` crate.

pub mod errors;
pub mod items;
