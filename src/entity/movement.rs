//! Grid motion shared by the player and the ghosts.

use glam::IVec2;

use crate::map::direction::Direction;
use crate::map::GameMap;

/// Where an entity is, where it faces, and where it wants to go this tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Motion {
    /// The cell currently occupied.
    pub cell: IVec2,
    /// The last direction the entity faced or moved in.
    pub direction: Direction,
    /// The step decided for the upcoming tick. `None` holds position.
    pub intent: Option<Direction>,
}

impl Motion {
    pub fn new(cell: IVec2, direction: Direction) -> Motion {
        Motion {
            cell,
            direction,
            intent: None,
        }
    }

    /// Whether a step in `direction` lands on a walkable cell.
    pub fn can_step(&self, map: &GameMap, direction: Direction) -> bool {
        map.is_walkable(direction.step(self.cell))
    }

    /// Applies the current intent, if it is legal.
    ///
    /// Returns `true` when the entity changed cell. An illegal intent is dropped and the
    /// entity holds position.
    pub fn apply(&mut self, map: &GameMap) -> bool {
        match self.intent {
            Some(direction) if self.can_step(map, direction) => {
                self.cell = direction.step(self.cell);
                self.direction = direction;
                true
            }
            _ => false,
        }
    }
}

/// A speed modulator turns a fractional speed into whole-cell steps.
///
/// Entities move at most one cell per tick. Slower entities skip ticks: at a speed of
/// 0.5 cells per tick, every other tick is a movement tick. The pattern depends only on
/// the number of ticks, never on elapsed time.
#[derive(Debug, Clone, PartialEq)]
pub struct SpeedModulator {
    accumulator: f32,
    cells_per_tick: f32,
}

impl SpeedModulator {
    /// Creates a modulator. The speed is clamped to `0.0..=1.0`.
    pub fn new(cells_per_tick: f32) -> Self {
        Self {
            accumulator: 0f32,
            cells_per_tick: cells_per_tick.clamp(0.0, 1.0),
        }
    }

    pub fn speed(&self) -> f32 {
        self.cells_per_tick
    }

    pub fn set_speed(&mut self, cells_per_tick: f32) {
        self.cells_per_tick = cells_per_tick.clamp(0.0, 1.0);
    }

    /// Returns whether or not the entity moves on this tick.
    pub fn next(&mut self) -> bool {
        self.accumulator += self.cells_per_tick;
        if self.accumulator >= 1f32 {
            self.accumulator -= 1f32;
            true
        } else {
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_full_speed_moves_every_tick() {
        let mut modulator = SpeedModulator::new(1.0);
        assert!((0..10).all(|_| modulator.next()));
    }

    #[test]
    fn test_half_speed_moves_every_other_tick() {
        let mut modulator = SpeedModulator::new(0.5);
        let pattern: Vec<bool> = (0..6).map(|_| modulator.next()).collect();
        assert_eq!(pattern, vec![false, true, false, true, false, true]);
    }

    #[test]
    fn test_zero_speed_never_moves() {
        let mut modulator = SpeedModulator::new(0.0);
        assert!((0..10).all(|_| !modulator.next()));
    }

    #[test]
    fn test_speed_is_clamped() {
        assert_eq!(SpeedModulator::new(3.0).speed(), 1.0);
        assert_eq!(SpeedModulator::new(-1.0).speed(), 0.0);
    }

    #[test]
    fn test_apply_rejects_walls() {
        let map = GameMap::open(2, 1);
        let mut motion = Motion::new(IVec2::new(0, 0), Direction::Right);

        motion.intent = Some(Direction::Left);
        assert!(!motion.apply(&map));
        assert_eq!(motion.cell, IVec2::new(0, 0));
        assert_eq!(motion.direction, Direction::Right);

        motion.intent = Some(Direction::Right);
        assert!(motion.apply(&map));
        assert_eq!(motion.cell, IVec2::new(1, 0));
    }
}
