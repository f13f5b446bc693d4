//! Entities that move on the grid: the player, the ghosts, and the strategies that
//! steer the ghosts.

pub mod ghost;
pub mod movement;
pub mod pacman;
pub mod strategy;
