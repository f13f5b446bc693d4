//! Centralized error types for the Pac-Man simulation.
//!
//! Errors only ever come out of construction: parsing a board, building a map,
//! spawning entities. The tick loop itself never fails.

use glam::IVec2;

/// Main error type for the simulation.
///
/// This is the primary error type that should be used in public APIs.
#[derive(thiserror::Error, Debug)]
pub enum GameError {
    #[error("Map parsing error: {0}")]
    MapParse(#[from] ParseError),

    #[error("Map error: {0}")]
    Map(#[from] MapError),

    #[error("Entity error: {0}")]
    Entity(#[from] EntityError),
}

/// Error type for board parsing operations.
#[derive(thiserror::Error, Debug, PartialEq, Eq)]
pub enum ParseError {
    #[error("Unknown character in board: {0:?}")]
    UnknownCharacter(char),
    #[error("Row {row} has width {found}, expected {expected}")]
    RaggedRow { row: usize, expected: usize, found: usize },
    #[error("Board is empty")]
    EmptyBoard,
    #[error("Board has no player start")]
    MissingPlayerStart,
}

/// Errors related to map construction.
#[derive(thiserror::Error, Debug, PartialEq, Eq)]
pub enum MapError {
    #[error("Expected {expected} tiles for the map size, found {found}")]
    SizeMismatch { expected: usize, found: usize },

    #[error("Spawn point {0} is not walkable")]
    BlockedSpawn(IVec2),
}

/// Errors related to entity setup.
#[derive(thiserror::Error, Debug, PartialEq, Eq)]
pub enum EntityError {
    #[error("Cannot spawn at {0}: cell is not walkable")]
    InvalidSpawn(IVec2),

    #[error("Composite strategy needs at least one sub-strategy")]
    EmptyComposite,
}

/// Errors in run-time configuration.
#[derive(thiserror::Error, Debug, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{key} must be a non-negative integer, got {value:?}")]
    InvalidValue { key: &'static str, value: String },
}

/// Result type for game operations.
pub type GameResult<T> = Result<T, GameError>;
