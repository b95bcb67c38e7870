//! Shared building blocks for the foraging log workspace.

pub mod types;
pub mod utils;
