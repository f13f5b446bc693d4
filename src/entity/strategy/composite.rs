use std::time::Duration;

use tracing::debug;

use crate::constants::STRATEGY_SWITCH_INTERVAL;
use crate::entity::movement::Motion;
use crate::entity::strategy::{ChaseStrategy, DumbStrategy, GhostStrategy, Strategy};
use crate::error::EntityError;
use crate::game::GameView;

/// Rotates through a fixed list of sub-strategies on a countdown.
///
/// The countdown is driven purely by the `elapsed` values passed to
/// [`GhostStrategy::decide_move`], so replaying the same tick sequence reproduces the same
/// switch points. On the tick where the countdown reaches zero the timer re-arms to the
/// full interval (any overshoot is dropped) and the next sub-strategy takes over for that
/// same tick.
#[derive(Debug, Clone, PartialEq)]
pub struct ChaseRandomStrategy {
    strategies: Vec<Strategy>,
    current: usize,
    remaining: Duration,
    interval: Duration,
}

impl ChaseRandomStrategy {
    /// Alternates Chase and Dumb every [`STRATEGY_SWITCH_INTERVAL`], starting with Chase.
    pub fn new() -> Self {
        Self::alternating(DumbStrategy::new())
    }

    /// Same as [`ChaseRandomStrategy::new`] with a seeded random phase.
    pub fn seeded(seed: u64) -> Self {
        Self::alternating(DumbStrategy::seeded(seed))
    }

    fn alternating(dumb: DumbStrategy) -> Self {
        Self {
            strategies: vec![ChaseStrategy.into(), dumb.into()],
            current: 0,
            remaining: STRATEGY_SWITCH_INTERVAL,
            interval: STRATEGY_SWITCH_INTERVAL,
        }
    }

    /// Rotates through `strategies` in order, switching every `interval`.
    pub fn with_strategies(strategies: Vec<Strategy>, interval: Duration) -> Result<Self, EntityError> {
        if strategies.is_empty() {
            return Err(EntityError::EmptyComposite);
        }
        Ok(Self {
            strategies,
            current: 0,
            remaining: interval,
            interval,
        })
    }

    /// The sub-strategy currently making decisions.
    pub fn active(&self) -> &Strategy {
        &self.strategies[self.current]
    }

    /// Time left before the next switch.
    pub fn remaining(&self) -> Duration {
        self.remaining
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    /// Counts `elapsed` off the timer and rotates when it runs out.
    ///
    /// Returns `true` if the active sub-strategy changed.
    pub fn advance(&mut self, elapsed: Duration) -> bool {
        self.remaining = self.remaining.saturating_sub(elapsed);
        if !self.remaining.is_zero() {
            return false;
        }

        self.remaining = self.interval;
        let previous = self.active().name();
        self.current = (self.current + 1) % self.strategies.len();
        debug!(from = previous, to = self.active().name(), "Composite strategy switched");
        true
    }
}

impl Default for ChaseRandomStrategy {
    fn default() -> Self {
        Self::new()
    }
}

impl GhostStrategy for ChaseRandomStrategy {
    fn decide_move(&mut self, motion: &mut Motion, elapsed: Duration, game: &GameView<'_>) {
        self.advance(elapsed);
        self.strategies[self.current].decide_move(motion, elapsed, game);
    }

    fn name(&self) -> &'static str {
        "chase_random"
    }
}
