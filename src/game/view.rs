use glam::IVec2;

use crate::map::GameMap;

/// The slice of game state a strategy may read.
///
/// Built fresh for every tick and passed by reference, so strategies never reach into
/// global state and the map cannot be mutated underneath them.
#[derive(Debug, Clone, Copy)]
pub struct GameView<'a> {
    map: &'a GameMap,
    player: IVec2,
}

impl<'a> GameView<'a> {
    pub fn new(map: &'a GameMap, player: IVec2) -> GameView<'a> {
        GameView { map, player }
    }

    pub fn map(&self) -> &'a GameMap {
        self.map
    }

    pub fn player_position(&self) -> IVec2 {
        self.player
    }
}
