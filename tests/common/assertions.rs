//! Assertion helpers for tests.

use pretty_assertions::assert_eq;

use mask_import::models::{Layer, MemoryTile, Tile};
use mask_import::services::TileGrid;

/// Assert a rectangle of world cells holds `expected` in `layer`
pub fn assert_layer_region(
    grid: &TileGrid,
    layer: &Layer,
    (x0, y0): (i32, i32),
    (x1, y1): (i32, i32),
    expected: i32,
) {
    for y in y0..y1 {
        for x in x0..x1 {
            assert_eq!(
                grid.layer_value_at(layer, x, y),
                expected,
                "Layer {} at ({}, {})",
                layer,
                x,
                y
            );
        }
    }
}

/// Collect a tile's layer values in raster order
pub fn layer_snapshot(tile: &MemoryTile, layer: &Layer, width: u32, height: u32) -> Vec<i32> {
    let mut values = Vec::with_capacity((width * height) as usize);
    for y in 0..height {
        for x in 0..width {
            values.push(tile.layer_value(layer, x, y));
        }
    }
    values
}
