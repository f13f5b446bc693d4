//! Ghost entity implementation.
//!
//! A ghost owns its grid motion, a speed modulator, and exactly one movement strategy.
//! Each tick the strategy decides an intent and the ghost applies it.

use std::time::Duration;

use glam::IVec2;
use strum_macros::{EnumIter, IntoStaticStr};
use tracing::trace;

use crate::constants::BASE_GHOST_SPEED;
use crate::entity::movement::{Motion, SpeedModulator};
use crate::entity::strategy::{ChaseRandomStrategy, DumbStrategy, GhostStrategy, Strategy};
use crate::game::GameView;
use crate::map::direction::Direction;

/// The four classic ghost types.
#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumIter, IntoStaticStr)]
#[strum(serialize_all = "lowercase")]
pub enum GhostType {
    Blinky,
    Pinky,
    Inky,
    Clyde,
}

impl GhostType {
    /// Returns the ghost type name for logs.
    pub fn as_str(self) -> &'static str {
        self.into()
    }

    /// The strategy a ghost of this type gets when a level is loaded.
    pub fn default_strategy(self) -> Strategy {
        match self {
            GhostType::Blinky => Strategy::chase(),
            GhostType::Pinky | GhostType::Clyde => Strategy::chase_random(),
            GhostType::Inky => Strategy::dumb(),
        }
    }

    /// Same line-up as [`GhostType::default_strategy`], with any randomness seeded.
    pub fn seeded_strategy(self, seed: u64) -> Strategy {
        match self {
            GhostType::Blinky => Strategy::chase(),
            GhostType::Pinky | GhostType::Clyde => ChaseRandomStrategy::seeded(seed).into(),
            GhostType::Inky => DumbStrategy::seeded(seed).into(),
        }
    }
}

/// A ghost on the board.
#[derive(Debug, Clone)]
pub struct Ghost {
    kind: GhostType,
    motion: Motion,
    modulator: SpeedModulator,
    strategy: Strategy,
}

impl Ghost {
    /// Creates a ghost facing left at base speed, bound to `strategy`.
    ///
    /// The spawn cell is not checked here; [`crate::game::PacmanGame`] validates it
    /// against the map before the ghost joins the game.
    pub fn new(kind: GhostType, spawn: IVec2, strategy: Strategy) -> Ghost {
        Ghost {
            kind,
            motion: Motion::new(spawn, Direction::Left),
            modulator: SpeedModulator::new(BASE_GHOST_SPEED),
            strategy,
        }
    }

    pub fn kind(&self) -> GhostType {
        self.kind
    }

    pub fn cell(&self) -> IVec2 {
        self.motion.cell
    }

    pub fn direction(&self) -> Direction {
        self.motion.direction
    }

    /// The intent decided on the latest update.
    pub fn intent(&self) -> Option<Direction> {
        self.motion.intent
    }

    pub fn strategy(&self) -> &Strategy {
        &self.strategy
    }

    pub fn strategy_name(&self) -> &'static str {
        self.strategy.name()
    }

    /// Rebinds the ghost to a new strategy. The old one, with its state, is dropped.
    pub fn set_strategy(&mut self, strategy: Strategy) {
        trace!(ghost = self.kind.as_str(), from = self.strategy.name(), to = strategy.name(), "Strategy replaced");
        self.strategy = strategy;
    }

    pub fn speed(&self) -> f32 {
        self.modulator.speed()
    }

    pub fn set_speed(&mut self, cells_per_tick: f32) {
        self.modulator.set_speed(cells_per_tick);
    }

    /// Runs the strategy for this tick, then steps if the modulator allows it.
    ///
    /// After this returns the ghost is either on a walkable cell it stepped to, or still
    /// on the cell it started from.
    pub fn update(&mut self, elapsed: Duration, game: &GameView<'_>) {
        self.motion.intent = None;
        self.strategy.decide_move(&mut self.motion, elapsed, game);

        if self.modulator.next() && self.motion.apply(game.map()) {
            trace!(ghost = self.kind.as_str(), cell = ?self.motion.cell, direction = ?self.motion.direction, "Ghost moved");
        }
    }
}
