use std::time::Duration;

use rand::rngs::SmallRng;
use rand::seq::IndexedRandom;
use rand::SeedableRng;
use smallvec::SmallVec;
use tracing::{debug, trace};

use crate::entity::movement::Motion;
use crate::entity::strategy::GhostStrategy;
use crate::game::GameView;
use crate::map::direction::Direction;

/// Wanders at random, never turning back unless it is the only way out.
///
/// Each instance owns its RNG. Use [`DumbStrategy::seeded`] for reproducible runs.
#[derive(Debug, Clone, PartialEq)]
pub struct DumbStrategy {
    rng: SmallRng,
}

impl DumbStrategy {
    pub fn new() -> Self {
        Self {
            rng: SmallRng::from_rng(&mut rand::rng()),
        }
    }

    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: SmallRng::seed_from_u64(seed),
        }
    }
}

impl Default for DumbStrategy {
    fn default() -> Self {
        Self::new()
    }
}

impl GhostStrategy for DumbStrategy {
    fn decide_move(&mut self, motion: &mut Motion, _elapsed: Duration, game: &GameView<'_>) {
        let map = game.map();
        let opposite = motion.direction.opposite();

        let options: SmallVec<[Direction; 3]> = Direction::DIRECTIONS
            .into_iter()
            .filter(|&d| d != opposite && motion.can_step(map, d))
            .collect();

        motion.intent = if let Some(&direction) = options.choose(&mut self.rng) {
            Some(direction)
        } else if motion.can_step(map, opposite) {
            trace!(cell = ?motion.cell, direction = ?opposite, "Ghost forced to reverse direction");
            Some(opposite)
        } else {
            debug!(cell = ?motion.cell, "Ghost stuck with no available directions");
            None
        };
    }

    fn name(&self) -> &'static str {
        "dumb"
    }
}
