//! Map construction and cell queries.

use glam::IVec2;
use tracing::debug;

use crate::constants::MapTile;
use crate::error::{GameResult, MapError};
use crate::map::parser::MapTileParser;

/// The static grid a level is played on.
///
/// Tiles are stored row-major. Once built, a map is never mutated; pellets being
/// eaten is a concern of the surrounding game, not of movement.
#[derive(Debug, Clone, PartialEq)]
pub struct GameMap {
    width: usize,
    height: usize,
    tiles: Vec<MapTile>,
    player_start: IVec2,
    ghost_starts: Vec<IVec2>,
}

impl GameMap {
    /// Creates a map from raw tile data.
    ///
    /// # Errors
    ///
    /// Fails if `tiles` does not hold exactly `width * height` entries, or if any
    /// spawn point is not walkable.
    pub fn new(
        width: usize,
        height: usize,
        tiles: Vec<MapTile>,
        player_start: IVec2,
        ghost_starts: Vec<IVec2>,
    ) -> Result<GameMap, MapError> {
        let expected = width * height;
        if tiles.len() != expected {
            return Err(MapError::SizeMismatch {
                expected,
                found: tiles.len(),
            });
        }

        let map = GameMap {
            width,
            height,
            tiles,
            player_start,
            ghost_starts,
        };

        if let Some(&blocked) = std::iter::once(&map.player_start)
            .chain(map.ghost_starts.iter())
            .find(|&&cell| !map.is_walkable(cell))
        {
            return Err(MapError::BlockedSpawn(blocked));
        }

        Ok(map)
    }

    /// Creates a map with no walls at all.
    ///
    /// The player starts in the top-left corner and there are no ghost starts.
    pub fn open(width: usize, height: usize) -> GameMap {
        GameMap {
            width,
            height,
            tiles: vec![MapTile::Empty; width * height],
            player_start: IVec2::ZERO,
            ghost_starts: Vec::new(),
        }
    }

    /// Builds a map from ASCII rows (see [`MapTileParser`]).
    pub fn parse<S: AsRef<str>>(raw_board: &[S]) -> GameResult<GameMap> {
        let parsed = MapTileParser::parse_board(raw_board)?;
        let map = GameMap::new(
            parsed.width,
            parsed.height,
            parsed.tiles,
            parsed.player_start,
            parsed.ghost_starts,
        )?;
        debug!(width = map.width, height = map.height, "Map built");
        Ok(map)
    }

    /// Returns a copy of this map with `cell` replaced by `tile`.
    ///
    /// Out-of-bounds cells are ignored.
    pub fn with_tile(mut self, cell: IVec2, tile: MapTile) -> GameMap {
        if let Some(index) = self.index(cell) {
            self.tiles[index] = tile;
        }
        self
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn player_start(&self) -> IVec2 {
        self.player_start
    }

    pub fn ghost_starts(&self) -> &[IVec2] {
        &self.ghost_starts
    }

    /// Returns the tile at the given cell, or `None` when it lies outside the map.
    pub fn tile(&self, cell: IVec2) -> Option<MapTile> {
        self.index(cell).map(|index| self.tiles[index])
    }

    /// Whether an entity may stand on `cell`. Anything outside the map is a wall.
    pub fn is_walkable(&self, cell: IVec2) -> bool {
        self.tile(cell).is_some_and(MapTile::is_walkable)
    }

    /// Every walkable cell, in reading order.
    pub fn walkable_cells(&self) -> impl Iterator<Item = IVec2> + '_ {
        (0..self.height).flat_map(move |y| {
            (0..self.width)
                .map(move |x| IVec2::new(x as i32, y as i32))
                .filter(|&cell| self.is_walkable(cell))
        })
    }

    fn index(&self, cell: IVec2) -> Option<usize> {
        if cell.x < 0 || cell.y < 0 {
            return None;
        }
        let (x, y) = (cell.x as usize, cell.y as usize);
        if x >= self.width || y >= self.height {
            return None;
        }
        Some(y * self.width + x)
    }
}
