//! This module defines the game map and provides functions for interacting with it.

pub mod builder;
pub mod direction;
pub mod parser;
pub mod render;

pub use builder::GameMap;
