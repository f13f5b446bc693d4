//! Ghost movement strategies.
//!
//! A strategy looks at a ghost's [`Motion`] and the read-only [`GameView`] and writes
//! the ghost's intent for the upcoming tick. It never moves the ghost itself; the ghost
//! applies the intent afterwards, so a strategy cannot push it into a wall.
//!
//! The set of strategies is closed, so a ghost holds a [`Strategy`] enum by value.
//! Each ghost owns its strategy's state (timers, RNG) exclusively.

use std::time::Duration;

use strum_macros::IntoStaticStr;

use crate::entity::movement::Motion;
use crate::game::GameView;

mod chase;
mod composite;
mod dumb;

pub use chase::ChaseStrategy;
pub use composite::ChaseRandomStrategy;
pub use dumb::DumbStrategy;

/// Decides where a ghost goes next.
pub trait GhostStrategy {
    /// Sets `motion.intent` for the upcoming tick.
    ///
    /// `elapsed` is the time since the previous tick and may be zero. The intent must
    /// either be `None` (hold position) or point at a walkable cell.
    fn decide_move(&mut self, motion: &mut Motion, elapsed: Duration, game: &GameView<'_>);

    /// Short name, used in logs.
    fn name(&self) -> &'static str;
}

/// A movement strategy bound to one ghost.
#[derive(Debug, Clone, PartialEq, IntoStaticStr)]
#[strum(serialize_all = "snake_case")]
pub enum Strategy {
    Dumb(DumbStrategy),
    Chase(ChaseStrategy),
    ChaseRandom(ChaseRandomStrategy),
}

impl Strategy {
    pub fn dumb() -> Strategy {
        Strategy::Dumb(DumbStrategy::new())
    }

    pub fn chase() -> Strategy {
        Strategy::Chase(ChaseStrategy)
    }

    pub fn chase_random() -> Strategy {
        Strategy::ChaseRandom(ChaseRandomStrategy::new())
    }
}

impl GhostStrategy for Strategy {
    fn decide_move(&mut self, motion: &mut Motion, elapsed: Duration, game: &GameView<'_>) {
        match self {
            Strategy::Dumb(strategy) => strategy.decide_move(motion, elapsed, game),
            Strategy::Chase(strategy) => strategy.decide_move(motion, elapsed, game),
            Strategy::ChaseRandom(strategy) => strategy.decide_move(motion, elapsed, game),
        }
    }

    fn name(&self) -> &'static str {
        self.into()
    }
}

impl From<DumbStrategy> for Strategy {
    fn from(strategy: DumbStrategy) -> Self {
        Strategy::Dumb(strategy)
    }
}

impl From<ChaseStrategy> for Strategy {
    fn from(strategy: ChaseStrategy) -> Self {
        Strategy::Chase(strategy)
    }
}

impl From<ChaseRandomStrategy> for Strategy {
    fn from(strategy: ChaseRandomStrategy) -> Self {
        Strategy::ChaseRandom(strategy)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strategy_names() {
        assert_eq!(Strategy::dumb().name(), "dumb");
        assert_eq!(Strategy::chase().name(), "chase");
        assert_eq!(Strategy::chase_random().name(), "chase_random");
    }
}
