use std::collections::HashMap;

use crate::models::{Layer, MemoryTile, Tile, TILE_SIZE};

/// Trait for destination tile storage
pub trait TileStore {
    type Tile: Tile;

    /// Tile at tile coordinates (tx, ty), created if missing
    fn tile_mut(&mut self, tx: i32, ty: i32) -> &mut Self::Tile;
}

/// Split a world coordinate into tile coordinate and tile-local offset.
pub fn split_coord(world: i32) -> (i32, u32) {
    let size = TILE_SIZE as i32;
    (world.div_euclid(size), world.rem_euclid(size) as u32)
}

/// In-memory grid of tiles, created on demand
#[derive(Debug, Default)]
pub struct TileGrid {
    tiles: HashMap<(i32, i32), MemoryTile>,
}

impl TileGrid {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn tile(&self, tx: i32, ty: i32) -> Option<&MemoryTile> {
        self.tiles.get(&(tx, ty))
    }

    pub fn tile_mut_or_insert(&mut self, tx: i32, ty: i32) -> &mut MemoryTile {
        self.tiles.entry((tx, ty)).or_default()
    }

    pub fn tile_count(&self) -> usize {
        self.tiles.len()
    }

    /// Coordinates of all tiles, in raster order.
    pub fn coords(&self) -> Vec<(i32, i32)> {
        let mut coords: Vec<_> = self.tiles.keys().copied().collect();
        coords.sort_by_key(|&(tx, ty)| (ty, tx));
        coords
    }

    /// Terrain id at world coordinates.
    pub fn terrain_at(&self, x: i32, y: i32) -> Option<u16> {
        let ((tx, lx), (ty, ly)) = (split_coord(x), split_coord(y));
        self.tile(tx, ty).and_then(|tile| tile.terrain(lx, ly))
    }

    /// Layer value at world coordinates, 0 outside any tile.
    pub fn layer_value_at(&self, layer: &Layer, x: i32, y: i32) -> i32 {
        let ((tx, lx), (ty, ly)) = (split_coord(x), split_coord(y));
        self.tile(tx, ty)
            .map(|tile| tile.layer_value(layer, lx, ly))
            .unwrap_or(0)
    }

    pub fn bit_layer_value_at(&self, layer: &Layer, x: i32, y: i32) -> bool {
        let ((tx, lx), (ty, ly)) = (split_coord(x), split_coord(y));
        self.tile(tx, ty)
            .map(|tile| tile.bit_layer_value(layer, lx, ly))
            .unwrap_or(false)
    }
}

impl TileStore for TileGrid {
    type Tile = MemoryTile;

    fn tile_mut(&mut self, tx: i32, ty: i32) -> &mut MemoryTile {
        self.tile_mut_or_insert(tx, ty)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Terrain;

    #[test]
    fn test_split_coord() {
        assert_eq!(split_coord(0), (0, 0));
        assert_eq!(split_coord(127), (0, 127));
        assert_eq!(split_coord(128), (1, 0));
        assert_eq!(split_coord(-1), (-1, 127));
        assert_eq!(split_coord(-128), (-1, 0));
        assert_eq!(split_coord(-129), (-2, 127));
    }

    #[test]
    fn test_tiles_created_on_demand() {
        let mut grid = TileGrid::new();
        assert_eq!(grid.tile_count(), 0);
        assert!(grid.tile(0, 0).is_none());
        grid.tile_mut_or_insert(0, 0);
        grid.tile_mut_or_insert(0, 0);
        grid.tile_mut(-1, 2);
        assert_eq!(grid.tile_count(), 2);
        assert_eq!(grid.coords(), vec![(0, 0), (-1, 2)]);
    }

    #[test]
    fn test_world_reads() {
        let mut grid = TileGrid::new();
        let trees = Layer::continuous("Trees", 255);
        let frost = Layer::bit("Frost");
        let tile = grid.tile_mut_or_insert(-1, 0);
        tile.set_terrain(127, 5, &Terrain::new(3, "Sand"));
        tile.set_layer_value(&trees, 127, 5, 42);
        tile.set_bit_layer_value(&frost, 0, 0, true);

        assert_eq!(grid.terrain_at(-1, 5), Some(3));
        assert_eq!(grid.terrain_at(0, 5), None);
        assert_eq!(grid.layer_value_at(&trees, -1, 5), 42);
        assert_eq!(grid.layer_value_at(&trees, 500, 500), 0);
        assert!(grid.bit_layer_value_at(&frost, -128, 0));
        assert!(!grid.bit_layer_value_at(&frost, -127, 0));
    }
}
