//! Text rendering of the board, used by the headless runner.

use glam::IVec2;

use crate::constants::MapTile;
use crate::map::builder::GameMap;

/// Handles rendering operations for the map.
pub struct MapRenderer;

impl MapRenderer {
    /// Glyph used for a bare tile.
    pub fn tile_glyph(tile: MapTile) -> char {
        match tile {
            MapTile::Wall => '#',
            MapTile::Pellet => '.',
            MapTile::PowerPellet => 'o',
            MapTile::Empty | MapTile::Spawn => ' ',
        }
    }

    /// Renders the map with the player (`C`) and ghosts (`A`, `B`, ...) drawn on top.
    ///
    /// Ghosts are lettered in the order given; a ghost drawn on the player's cell hides it.
    pub fn render_rows(map: &GameMap, player: IVec2, ghosts: &[IVec2]) -> Vec<String> {
        (0..map.height())
            .map(|y| {
                (0..map.width())
                    .map(|x| {
                        let cell = IVec2::new(x as i32, y as i32);
                        if let Some(index) = ghosts.iter().position(|&g| g == cell) {
                            return (b'A' + (index % 26) as u8) as char;
                        }
                        if cell == player {
                            return 'C';
                        }
                        map.tile(cell).map(Self::tile_glyph).unwrap_or(' ')
                    })
                    .collect()
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_rows() {
        let map = GameMap::parse(&["#####", "#P.G#", "#####"]).unwrap();
        let rows = MapRenderer::render_rows(&map, map.player_start(), map.ghost_starts());

        assert_eq!(rows, vec!["#####", "#C.A#", "#####"]);
    }
}
