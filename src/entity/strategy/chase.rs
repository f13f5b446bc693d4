use std::time::Duration;

use glam::IVec2;
use pathfinding::prelude::bfs;
use smallvec::SmallVec;
use tracing::trace;

use crate::constants::CHASE_PREFERENCE;
use crate::entity::movement::Motion;
use crate::entity::strategy::GhostStrategy;
use crate::game::GameView;
use crate::map::direction::Direction;
use crate::map::GameMap;

/// Heads straight for the player.
///
/// Prefers the neighbour that most reduces the Manhattan distance, breaking ties in
/// [`CHASE_PREFERENCE`] order. When walls block every closing step, it follows the first
/// step of a shortest path instead. Stateless and deterministic.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ChaseStrategy;

impl ChaseStrategy {
    /// The direction this strategy takes from `cell` towards `target`, if any.
    pub fn next_direction(&self, map: &GameMap, cell: IVec2, target: IVec2) -> Option<Direction> {
        let current = manhattan(cell, target);
        if current == 0 {
            return None;
        }

        let greedy = CHASE_PREFERENCE
            .into_iter()
            .filter(|d| map.is_walkable(d.step(cell)))
            .map(|d| (d, manhattan(d.step(cell), target)))
            .filter(|&(_, distance)| distance < current)
            .min_by_key(|&(_, distance)| distance);

        if let Some((direction, _)) = greedy {
            return Some(direction);
        }

        trace!(?cell, ?target, "Greedy chase blocked, falling back to shortest path");
        let path = bfs(
            &cell,
            |&p| {
                CHASE_PREFERENCE
                    .into_iter()
                    .map(|d| d.step(p))
                    .filter(|&next| map.is_walkable(next))
                    .collect::<SmallVec<[IVec2; 4]>>()
            },
            |&p| p == target,
        )?;

        path.get(1).and_then(|&next| Direction::between(cell, next))
    }
}

impl GhostStrategy for ChaseStrategy {
    fn decide_move(&mut self, motion: &mut Motion, _elapsed: Duration, game: &GameView<'_>) {
        motion.intent = self.next_direction(game.map(), motion.cell, game.player_position());
    }

    fn name(&self) -> &'static str {
        "chase"
    }
}

fn manhattan(a: IVec2, b: IVec2) -> u32 {
    a.x.abs_diff(b.x) + a.y.abs_diff(b.y)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::MapTile;

    #[test]
    fn test_ties_prefer_horizontal() {
        let map = GameMap::open(10, 10);
        // Player is diagonal: both Left and Up close the gap by one.
        let direction = ChaseStrategy.next_direction(&map, IVec2::new(5, 5), IVec2::new(2, 2));
        assert_eq!(direction, Some(Direction::Left));
    }

    #[test]
    fn test_on_player_holds() {
        let map = GameMap::open(3, 3);
        let cell = IVec2::new(1, 1);
        assert_eq!(ChaseStrategy.next_direction(&map, cell, cell), None);
    }

    #[test]
    fn test_routes_around_wall() {
        // Wall directly between ghost and player; only the detour via row 1 works.
        let map = GameMap::parse(&["#####", "#   #", "# # #", "#G#P#", "#####"]).unwrap();
        let ghost = IVec2::new(1, 3);
        let player = IVec2::new(3, 3);

        assert!(map.is_walkable(ghost));
        assert_eq!(map.tile(IVec2::new(2, 3)), Some(MapTile::Wall));
        assert_eq!(ChaseStrategy.next_direction(&map, ghost, player), Some(Direction::Up));
    }

    #[test]
    fn test_unreachable_player_holds() {
        let map = GameMap::parse(&["#####", "#G#P#", "#####"]).unwrap();
        let direction = ChaseStrategy.next_direction(&map, IVec2::new(1, 1), IVec2::new(3, 1));
        assert_eq!(direction, None);
    }
}
