//! The built-in tile set.

use crate::tile::Tile;
use crate::types::{TextureSlot, TileId};

pub const ROCK: TileId = TileId(1);
pub const GRASS: TileId = TileId(2);
pub const DIRT: TileId = TileId(3);
pub const STONE_BRICK: TileId = TileId(4);
pub const WOOD: TileId = TileId(5);
pub const BUSH: TileId = TileId(6);

pub fn default_tiles() -> Vec<Tile> {
    vec![
        Tile::cube(ROCK, "rock", TextureSlot(1)),
        Tile::grass(
            GRASS,
            "grass",
            TextureSlot(3),
            TextureSlot(0),
            TextureSlot(2),
            DIRT,
        ),
        Tile::cube(DIRT, "dirt", TextureSlot(2)),
        Tile::cube(STONE_BRICK, "stone_brick", TextureSlot(16)),
        Tile::cube(WOOD, "wood", TextureSlot(4)),
        Tile::bush(BUSH, "bush", TextureSlot(15), vec![DIRT, GRASS]),
    ]
}
