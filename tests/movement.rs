use glam::IVec2;
use pacman::constants::MapTile;
use pacman::entity::movement::{Motion, SpeedModulator};
use pacman::entity::pacman::Pacman;
use pacman::map::direction::Direction;
use pacman::map::GameMap;
use pretty_assertions::assert_eq;
use speculoos::prelude::*;

#[test]
fn test_motion_drops_illegal_intent() {
    let map = GameMap::open(3, 3).with_tile(IVec2::new(1, 0), MapTile::Wall);
    let mut motion = Motion::new(IVec2::new(1, 1), Direction::Left);
    motion.intent = Some(Direction::Up);

    assert_that(&motion.apply(&map)).is_false();
    assert_eq!(motion.cell, IVec2::new(1, 1));
    assert_eq!(motion.direction, Direction::Left);
}

#[test]
fn test_motion_applies_legal_intent() {
    let map = GameMap::open(3, 3);
    let mut motion = Motion::new(IVec2::new(1, 1), Direction::Left);
    motion.intent = Some(Direction::Down);

    assert_that(&motion.apply(&map)).is_true();
    assert_eq!(motion.cell, IVec2::new(1, 2));
    assert_eq!(motion.direction, Direction::Down);
}

#[test]
fn test_motion_holds_without_intent() {
    let map = GameMap::open(3, 3);
    let mut motion = Motion::new(IVec2::new(1, 1), Direction::Right);

    assert_that(&motion.apply(&map)).is_false();
    assert_eq!(motion.cell, IVec2::new(1, 1));
}

#[test]
fn test_modulator_pattern_depends_only_on_tick_count() {
    let mut modulator = SpeedModulator::new(0.25);
    let moves: Vec<bool> = (0..8).map(|_| modulator.next()).collect();

    assert_eq!(moves, vec![false, false, false, true, false, false, false, true]);
}

#[test]
fn test_pacman_keeps_going_until_stopped() {
    let map = GameMap::open(6, 1);
    let mut pacman = Pacman::new(IVec2::ZERO);

    pacman.set_next_direction(Direction::Right);
    pacman.tick(&map);
    pacman.tick(&map);
    assert_eq!(pacman.cell(), IVec2::new(2, 0));

    pacman.stop();
    pacman.tick(&map);
    assert_eq!(pacman.cell(), IVec2::new(2, 0));
}
