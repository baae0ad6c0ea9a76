//! mnemo - keyboard accelerator assignment for UI label trees
//!
//! Library crate exposing the engine used by the binary: label parsing and
//! weighting (`label`), the greedy group assignment (`acekey`), the tree pass
//! driver (`manager`) and the interactive preview (`ui`).
//!
//! Tests live close to the modules they exercise as unit tests.

pub mod acekey;
pub mod config;
pub mod label;
pub mod loader;
pub mod manager;
pub mod report;
pub mod standard;
pub mod tree;

pub mod ui;

pub use acekey::{find_accelerators, UsedSet};
pub use label::LabeledString;
pub use manager::Session;
