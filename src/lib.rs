// src/lib.rs

pub mod accumulator;
pub mod config;
pub mod core;
pub mod error;
pub mod groups;
pub mod persistence;
pub use crate::core::engine::CharacterFinder;
pub use crate::error::{FinderError, Result};
