use glam::IVec2;
use strum_macros::{EnumIter, IntoStaticStr};

/// A cardinal direction on the grid. `Up` points towards row 0.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, EnumIter, IntoStaticStr)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// The four cardinal directions.
    pub const DIRECTIONS: [Direction; 4] = [Direction::Up, Direction::Down, Direction::Left, Direction::Right];

    pub fn opposite(&self) -> Direction {
        match self {
            Direction::Up => Direction::Down,
            Direction::Down => Direction::Up,
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
        }
    }

    pub fn as_ivec2(&self) -> IVec2 {
        (*self).into()
    }

    /// The cell reached by taking one step from `cell` in this direction.
    pub fn step(&self, cell: IVec2) -> IVec2 {
        cell + self.as_ivec2()
    }

    /// The direction that leads from `from` to the orthogonally adjacent `to`.
    pub fn between(from: IVec2, to: IVec2) -> Option<Direction> {
        Self::DIRECTIONS.into_iter().find(|d| d.step(from) == to)
    }
}

impl From<Direction> for IVec2 {
    fn from(dir: Direction) -> Self {
        match dir {
            Direction::Up => -IVec2::Y,
            Direction::Down => IVec2::Y,
            Direction::Left => -IVec2::X,
            Direction::Right => IVec2::X,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_step() {
        assert_eq!(Direction::Up.step(IVec2::new(5, 5)), IVec2::new(5, 4));
        assert_eq!(Direction::Right.step(IVec2::new(0, 0)), IVec2::new(1, 0));
    }

    #[test]
    fn test_between() {
        let origin = IVec2::new(3, 3);
        assert_eq!(Direction::between(origin, IVec2::new(3, 2)), Some(Direction::Up));
        assert_eq!(Direction::between(origin, IVec2::new(2, 3)), Some(Direction::Left));
        assert_eq!(Direction::between(origin, IVec2::new(4, 4)), None);
        assert_eq!(Direction::between(origin, origin), None);
    }
}
