#![allow(dead_code)]

use std::time::Duration;

use glam::IVec2;
use pacman::constants::{MapTile, LOOP_TIME};
use pacman::map::direction::Direction;
use pacman::map::GameMap;

/// An open map with the four neighbours of `cell` walled off.
pub fn boxed_in(width: usize, height: usize, cell: IVec2) -> GameMap {
    Direction::DIRECTIONS
        .into_iter()
        .fold(GameMap::open(width, height), |map, direction| {
            map.with_tile(direction.step(cell), MapTile::Wall)
        })
}

/// A small maze with loops, dead ends, and a walled-in pocket at (6, 5).
pub fn maze() -> GameMap {
    GameMap::parse(&[
        "##########",
        "#P...#...#",
        "#.##.#.#.#",
        "#....G.#.#",
        "#.##.###.#",
        "#....#.#.#",
        "##########",
    ])
    .unwrap()
}

/// `count` frame-length deltas.
pub fn frames(count: usize) -> impl Iterator<Item = Duration> {
    std::iter::repeat(LOOP_TIME).take(count)
}

pub fn manhattan(a: IVec2, b: IVec2) -> u32 {
    a.x.abs_diff(b.x) + a.y.abs_diff(b.y)
}
