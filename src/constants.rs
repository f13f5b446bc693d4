//! This module contains all the constants used by the simulation.

use std::time::Duration;

use crate::map::direction::Direction;

/// The default duration of a single simulation tick (60 ticks per second).
pub const LOOP_TIME: Duration = Duration::from_nanos((1_000_000_000.0 / 60.0) as u64);

/// How long the chase/random composite keeps a sub-strategy before rotating to the next one.
pub const STRATEGY_SWITCH_INTERVAL: Duration = Duration::from_millis(5000);

/// Ghost speed, in cells per tick. At 1.0 a ghost steps once every tick.
pub const BASE_GHOST_SPEED: f32 = 1.0;
/// Player speed, in cells per tick.
pub const BASE_PLAYER_SPEED: f32 = 1.0;

/// Order in which the chase strategy considers neighbouring cells.
///
/// Horizontal moves come first so that ties on Manhattan distance resolve the same way every time.
pub const CHASE_PREFERENCE: [Direction; 4] = [Direction::Left, Direction::Right, Direction::Up, Direction::Down];

/// An enum representing the different types of tiles on the map.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MapTile {
    /// An empty floor tile.
    Empty,
    /// A wall tile.
    Wall,
    /// A regular pellet.
    Pellet,
    /// A power pellet.
    PowerPellet,
    /// A spawn point for the player or a ghost.
    Spawn,
}

impl MapTile {
    /// Whether an entity may occupy a tile of this kind.
    pub fn is_walkable(self) -> bool {
        !matches!(self, MapTile::Wall)
    }
}

/// The default board, as rows of characters.
///
/// `P` marks the player start and each `G` a ghost start.
pub const RAW_BOARD: [&str; 15] = [
    "###################",
    "#o.......#.......o#",
    "#.##.###.#.###.##.#",
    "#.................#",
    "#.##.#.#####.#.##.#",
    "#....#...#...#....#",
    "####.### # ###.####",
    "#   .   GGGG   .  #",
    "####.# ##### #.####",
    "#........#........#",
    "#.##.###.#.###.##.#",
    "#o.#.....P.....#.o#",
    "##.#.#.#####.#.#.##",
    "#....#...#...#....#",
    "###################",
];
