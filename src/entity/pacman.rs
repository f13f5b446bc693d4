//! The player-controlled entity.

use glam::IVec2;

use crate::constants::BASE_PLAYER_SPEED;
use crate::entity::movement::{Motion, SpeedModulator};
use crate::map::direction::Direction;
use crate::map::GameMap;

/// Pac-Man. Input handling lives outside the core; callers feed a desired direction.
#[derive(Debug, Clone)]
pub struct Pacman {
    motion: Motion,
    modulator: SpeedModulator,
    /// Direction requested by input, applied as soon as it becomes legal.
    next_direction: Option<Direction>,
}

impl Pacman {
    pub fn new(spawn: IVec2) -> Pacman {
        Pacman {
            motion: Motion::new(spawn, Direction::Left),
            modulator: SpeedModulator::new(BASE_PLAYER_SPEED),
            next_direction: None,
        }
    }

    pub fn cell(&self) -> IVec2 {
        self.motion.cell
    }

    pub fn direction(&self) -> Direction {
        self.motion.direction
    }

    /// Buffers a turn. It is taken on the first tick where the turn is possible.
    pub fn set_next_direction(&mut self, direction: Direction) {
        self.next_direction = Some(direction);
    }

    /// Halts the player until a new direction is requested.
    pub fn stop(&mut self) {
        self.next_direction = None;
        self.motion.intent = None;
    }

    /// Advances one tick: turn if the buffered direction is open, then keep going.
    ///
    /// Running into a wall stops the player.
    pub fn tick(&mut self, map: &GameMap) {
        if let Some(direction) = self.next_direction {
            if self.motion.can_step(map, direction) {
                self.motion.intent = Some(direction);
                self.next_direction = None;
            }
        }

        if self.modulator.next() && self.motion.intent.is_some() && !self.motion.apply(map) {
            self.motion.intent = None;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::MapTile;

    #[test]
    fn test_buffered_turn_waits_for_opening() {
        // Corridor along row 1 with a single opening up at x = 3.
        let map = GameMap::parse(&["###.#", "P....", "#####"]).unwrap();
        let mut pacman = Pacman::new(map.player_start());

        pacman.set_next_direction(Direction::Right);
        pacman.tick(&map);
        assert_eq!(pacman.cell(), IVec2::new(1, 1));

        pacman.set_next_direction(Direction::Up);
        pacman.tick(&map);
        pacman.tick(&map);
        assert_eq!(pacman.cell(), IVec2::new(3, 1));

        pacman.tick(&map);
        assert_eq!(pacman.cell(), IVec2::new(3, 0));
        assert_eq!(pacman.direction(), Direction::Up);
    }

    #[test]
    fn test_wall_stops_player() {
        let map = GameMap::open(2, 1).with_tile(IVec2::new(1, 0), MapTile::Wall);
        let mut pacman = Pacman::new(IVec2::ZERO);

        pacman.set_next_direction(Direction::Right);
        pacman.tick(&map);
        assert_eq!(pacman.cell(), IVec2::ZERO);
    }
}
