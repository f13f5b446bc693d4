//! Map parsing functionality for converting raw board layouts into structured data.

use glam::IVec2;
use tracing::trace;

use crate::constants::MapTile;
use crate::error::ParseError;

/// Represents the parsed data from a raw board layout.
#[derive(Debug)]
pub struct ParsedMap {
    pub width: usize,
    pub height: usize,
    /// The parsed tile layout, row-major.
    pub tiles: Vec<MapTile>,
    /// The player's starting position.
    pub player_start: IVec2,
    /// Ghost starting positions, in reading order.
    pub ghost_starts: Vec<IVec2>,
}

/// Parser for converting raw board layouts into structured map data.
pub struct MapTileParser;

impl MapTileParser {
    /// Parses a single character into a map tile.
    ///
    /// Spawn markers (`P`, `G`) become [`MapTile::Spawn`]; their positions are
    /// tracked by [`MapTileParser::parse_board`].
    pub fn parse_character(c: char) -> Result<MapTile, ParseError> {
        match c {
            '#' => Ok(MapTile::Wall),
            '.' => Ok(MapTile::Pellet),
            'o' => Ok(MapTile::PowerPellet),
            ' ' => Ok(MapTile::Empty),
            'P' | 'G' => Ok(MapTile::Spawn),
            _ => Err(ParseError::UnknownCharacter(c)),
        }
    }

    /// Parses a raw board layout into structured map data.
    ///
    /// # Errors
    ///
    /// Returns an error if the board is empty, if rows differ in width, if it contains
    /// unknown characters, or if no player start (`P`) is present.
    pub fn parse_board<S: AsRef<str>>(raw_board: &[S]) -> Result<ParsedMap, ParseError> {
        let width = raw_board.first().map(|row| row.as_ref().chars().count()).unwrap_or(0);
        if width == 0 {
            return Err(ParseError::EmptyBoard);
        }

        let mut tiles = Vec::with_capacity(width * raw_board.len());
        let mut player_start = None;
        let mut ghost_starts = Vec::new();

        for (y, line) in raw_board.iter().enumerate() {
            let line = line.as_ref();
            let found = line.chars().count();
            if found != width {
                return Err(ParseError::RaggedRow {
                    row: y,
                    expected: width,
                    found,
                });
            }

            for (x, character) in line.chars().enumerate() {
                let tile = Self::parse_character(character)?;
                let cell = IVec2::new(x as i32, y as i32);
                match character {
                    // Last marker wins if a board carries more than one
                    'P' => player_start = Some(cell),
                    'G' => ghost_starts.push(cell),
                    _ => {}
                }
                tiles.push(tile);
            }
        }

        let player_start = player_start.ok_or(ParseError::MissingPlayerStart)?;
        trace!(width, height = raw_board.len(), ghosts = ghost_starts.len(), "Parsed board");

        Ok(ParsedMap {
            width,
            height: raw_board.len(),
            tiles,
            player_start,
            ghost_starts,
        })
    }
}
