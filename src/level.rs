//! Levels pair a level number with the map it is played on.

use crate::map::GameMap;

/// One level of the game. Immutable once built; loading the next level replaces it.
#[derive(Debug, Clone, PartialEq)]
pub struct Level {
    number: u32,
    map: GameMap,
}

impl Level {
    pub fn new(number: u32, map: GameMap) -> Level {
        Level { number, map }
    }

    pub fn number(&self) -> u32 {
        self.number
    }

    pub fn map(&self) -> &GameMap {
        &self.map
    }
}
