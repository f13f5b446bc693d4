//! Pac-Man simulation core: a grid map, the player, and ghosts steered by pluggable
//! movement strategies.

pub mod config;
pub mod constants;
pub mod entity;
pub mod error;
pub mod formatter;
pub mod game;
pub mod level;
pub mod map;
