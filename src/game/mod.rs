//! This module contains the main game logic and state.

use std::time::Duration;

use glam::IVec2;
use strum::IntoEnumIterator;
use tracing::{debug, info, trace_span};

use crate::entity::ghost::{Ghost, GhostType};
use crate::entity::pacman::Pacman;
use crate::entity::strategy::{GhostStrategy, Strategy};
use crate::error::{EntityError, GameResult};
use crate::level::Level;
use crate::map::GameMap;

mod view;

pub use view::GameView;

/// The root of the simulation: one level, one player, and the ghosts chasing them.
///
/// Ghosts update in the order they were added, one after another, every tick.
pub struct PacmanGame {
    level: Level,
    pacman: Pacman,
    ghosts: Vec<Ghost>,
    /// Seed for the random strategies handed out on level load, if reproducible runs are wanted.
    seed: Option<u64>,
    clock: Duration,
    ticks: u64,
}

impl PacmanGame {
    /// Starts a game on `level` with the default ghost line-up.
    ///
    /// # Errors
    ///
    /// Returns [`EntityError::InvalidSpawn`] if the player start or a ghost start is a wall.
    pub fn new(level: Level) -> GameResult<PacmanGame> {
        Self::build(level, None)
    }

    /// Like [`PacmanGame::new`], but every random strategy is seeded from `seed`.
    pub fn seeded(level: Level, seed: u64) -> GameResult<PacmanGame> {
        Self::build(level, Some(seed))
    }

    fn build(level: Level, seed: Option<u64>) -> GameResult<PacmanGame> {
        let (pacman, ghosts) = Self::spawn(level.map(), seed)?;
        info!(level = level.number(), ghosts = ghosts.len(), "Game created");
        Ok(PacmanGame {
            level,
            pacman,
            ghosts,
            seed,
            clock: Duration::ZERO,
            ticks: 0,
        })
    }

    /// Places the player and one ghost per ghost start.
    ///
    /// Ghost types cycle Blinky, Pinky, Inky, Clyde in start order.
    fn spawn(map: &GameMap, seed: Option<u64>) -> GameResult<(Pacman, Vec<Ghost>)> {
        let player_start = map.player_start();
        if !map.is_walkable(player_start) {
            return Err(EntityError::InvalidSpawn(player_start).into());
        }

        let ghosts = map
            .ghost_starts()
            .iter()
            .zip(GhostType::iter().cycle())
            .enumerate()
            .map(|(index, (&cell, kind))| -> GameResult<Ghost> {
                if !map.is_walkable(cell) {
                    return Err(EntityError::InvalidSpawn(cell).into());
                }
                let strategy = match seed {
                    Some(seed) => kind.seeded_strategy(seed.wrapping_add(index as u64)),
                    None => kind.default_strategy(),
                };
                debug!(ghost = kind.as_str(), ?cell, strategy = strategy.name(), "Ghost spawned");
                Ok(Ghost::new(kind, cell, strategy))
            })
            .collect::<GameResult<Vec<_>>>()?;

        Ok((Pacman::new(player_start), ghosts))
    }

    /// Replaces the current level and re-spawns every entity on it.
    ///
    /// On error the game is left untouched.
    pub fn load_level(&mut self, level: Level) -> GameResult<()> {
        let (pacman, ghosts) = Self::spawn(level.map(), self.seed)?;
        info!(level = level.number(), "Level loaded");
        self.level = level;
        self.pacman = pacman;
        self.ghosts = ghosts;
        self.clock = Duration::ZERO;
        self.ticks = 0;
        Ok(())
    }

    /// Adds a ghost after the existing ones.
    ///
    /// # Errors
    ///
    /// Returns [`EntityError::InvalidSpawn`] if `cell` is not walkable.
    pub fn add_ghost(&mut self, kind: GhostType, cell: IVec2, strategy: Strategy) -> GameResult<()> {
        if !self.level.map().is_walkable(cell) {
            return Err(EntityError::InvalidSpawn(cell).into());
        }
        debug!(ghost = kind.as_str(), ?cell, strategy = strategy.name(), "Ghost added");
        self.ghosts.push(Ghost::new(kind, cell, strategy));
        Ok(())
    }

    /// Advances the simulation by one tick of length `delta`.
    ///
    /// The player moves first; then each ghost decides and moves, in order.
    pub fn tick(&mut self, delta: Duration) {
        self.clock += delta;
        self.ticks += 1;
        let _span = trace_span!("tick", n = self.ticks).entered();

        let map = self.level.map();
        self.pacman.tick(map);

        let view = GameView::new(map, self.pacman.cell());
        for ghost in self.ghosts.iter_mut() {
            ghost.update(delta, &view);
        }
    }

    /// A read-only view of the state strategies see.
    pub fn view(&self) -> GameView<'_> {
        GameView::new(self.level.map(), self.pacman.cell())
    }

    pub fn player_position(&self) -> IVec2 {
        self.pacman.cell()
    }

    pub fn pacman_mut(&mut self) -> &mut Pacman {
        &mut self.pacman
    }

    pub fn level(&self) -> &Level {
        &self.level
    }

    pub fn map(&self) -> &GameMap {
        self.level.map()
    }

    pub fn ghosts(&self) -> &[Ghost] {
        &self.ghosts
    }

    pub fn ghosts_mut(&mut self) -> &mut [Ghost] {
        &mut self.ghosts
    }

    /// Total simulated time since the level was loaded.
    pub fn elapsed(&self) -> Duration {
        self.clock
    }

    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    /// The first ghost standing on `cell`.
    pub fn ghost_at(&self, cell: IVec2) -> Option<&Ghost> {
        self.ghosts.iter().find(|ghost| ghost.cell() == cell)
    }

    /// Whether a ghost shares the player's cell.
    pub fn is_player_caught(&self) -> bool {
        self.ghost_at(self.pacman.cell()).is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ghost_types_cycle() {
        let map = GameMap::parse(&["#######", "#PGGGGG", "#######"]).unwrap();
        let game = PacmanGame::seeded(Level::new(1, map), 3).unwrap();
        let kinds: Vec<_> = game.ghosts().iter().map(Ghost::kind).collect();

        assert_eq!(
            kinds,
            vec![GhostType::Blinky, GhostType::Pinky, GhostType::Inky, GhostType::Clyde, GhostType::Blinky]
        );
    }

    #[test]
    fn test_clock_accumulates() {
        let mut game = PacmanGame::new(Level::new(1, GameMap::open(4, 4))).unwrap();
        game.tick(Duration::from_millis(10));
        game.tick(Duration::ZERO);
        game.tick(Duration::from_millis(5));

        assert_eq!(game.ticks(), 3);
        assert_eq!(game.elapsed(), Duration::from_millis(15));
    }
}
