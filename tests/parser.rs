use glam::IVec2;
use pacman::constants::{MapTile, RAW_BOARD};
use pacman::error::ParseError;
use pacman::map::parser::MapTileParser;
use pretty_assertions::assert_eq;

#[test]
fn test_parse_character() {
    let test_cases = [
        ('#', MapTile::Wall),
        ('.', MapTile::Pellet),
        ('o', MapTile::PowerPellet),
        (' ', MapTile::Empty),
        ('P', MapTile::Spawn),
        ('G', MapTile::Spawn),
    ];

    for (character, expected) in test_cases {
        assert_eq!(MapTileParser::parse_character(character), Ok(expected));
    }

    assert_eq!(MapTileParser::parse_character('Z'), Err(ParseError::UnknownCharacter('Z')));
}

#[test]
fn test_parse_board() {
    let parsed = MapTileParser::parse_board(&RAW_BOARD).unwrap();

    assert_eq!(parsed.width, 19);
    assert_eq!(parsed.height, 15);
    assert_eq!(parsed.tiles.len(), 19 * 15);
    assert_eq!(parsed.player_start, IVec2::new(9, 11));
    assert_eq!(parsed.ghost_starts.len(), 4);
}

#[test]
fn test_parse_board_invalid_character() {
    let mut invalid_board = RAW_BOARD;
    invalid_board[0] = "##################Z";

    let result = MapTileParser::parse_board(&invalid_board);
    assert!(matches!(result.unwrap_err(), ParseError::UnknownCharacter('Z')));
}

#[test]
fn test_parse_board_without_player() {
    let result = MapTileParser::parse_board(&["#####", "#G..#", "#####"]);
    assert!(matches!(result.unwrap_err(), ParseError::MissingPlayerStart));
}

#[test]
fn test_ghost_starts_in_reading_order() {
    let parsed = MapTileParser::parse_board(&["G.G", ".P.", "G.."]).unwrap();

    assert_eq!(parsed.ghost_starts, vec![IVec2::new(0, 0), IVec2::new(2, 0), IVec2::new(0, 2)]);
}
