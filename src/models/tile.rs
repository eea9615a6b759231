use std::collections::HashMap;

use super::{Layer, Terrain};

/// Edge length of a square tile, in cells.
pub const TILE_SIZE: u32 = 128;

/// Write/read contract a mapping needs from a destination tile.
///
/// Coordinates are tile-local and must be below the tile size;
/// [`MemoryTile`] panics on anything else.
pub trait Tile {
    fn set_terrain(&mut self, x: u32, y: u32, terrain: &Terrain);

    fn set_bit_layer_value(&mut self, layer: &Layer, x: u32, y: u32, value: bool);

    fn set_layer_value(&mut self, layer: &Layer, x: u32, y: u32, value: i32);

    /// Current value of a non-bit layer, 0 where never written.
    fn layer_value(&self, layer: &Layer, x: u32, y: u32) -> i32;
}

/// Dense in-memory tile.
///
/// Terrain is stored per cell as an optional terrain id so untouched cells
/// can be told apart. Layer arrays are allocated on first write; bit
/// layers are stored as 0/1.
#[derive(Debug, Clone)]
pub struct MemoryTile {
    terrain: Vec<Option<u16>>,
    layers: HashMap<String, Vec<i32>>,
}

const CELLS: usize = (TILE_SIZE * TILE_SIZE) as usize;

/// Row-major cell index; panics outside the tile.
fn cell(x: u32, y: u32) -> usize {
    assert!(
        x < TILE_SIZE && y < TILE_SIZE,
        "cell ({}, {}) outside {}x{} tile",
        x,
        y,
        TILE_SIZE,
        TILE_SIZE
    );
    (y * TILE_SIZE + x) as usize
}

impl MemoryTile {
    pub fn new() -> Self {
        Self {
            terrain: vec![None; CELLS],
            layers: HashMap::new(),
        }
    }

    /// Terrain id at (x, y), `None` if never set.
    pub fn terrain(&self, x: u32, y: u32) -> Option<u16> {
        self.terrain[cell(x, y)]
    }

    pub fn bit_layer_value(&self, layer: &Layer, x: u32, y: u32) -> bool {
        self.raw_value(&layer.name, x, y) != 0
    }

    /// Number of layers that received at least one write.
    pub fn layer_count(&self) -> usize {
        self.layers.len()
    }

    /// Number of cells with a terrain set.
    pub fn terrain_cells(&self) -> usize {
        self.terrain.iter().filter(|t| t.is_some()).count()
    }

    /// Number of cells with a non-zero value in `layer`.
    pub fn layer_cells(&self, layer: &Layer) -> usize {
        self.layers
            .get(&layer.name)
            .map(|values| values.iter().filter(|&&v| v != 0).count())
            .unwrap_or(0)
    }

    fn raw_value(&self, name: &str, x: u32, y: u32) -> i32 {
        self.layers
            .get(name)
            .map(|values| values[cell(x, y)])
            .unwrap_or(0)
    }

    fn layer_mut(&mut self, name: &str) -> &mut Vec<i32> {
        self.layers
            .entry(name.to_string())
            .or_insert_with(|| vec![0; CELLS])
    }
}

impl Default for MemoryTile {
    fn default() -> Self {
        Self::new()
    }
}

impl Tile for MemoryTile {
    fn set_terrain(&mut self, x: u32, y: u32, terrain: &Terrain) {
        self.terrain[cell(x, y)] = Some(terrain.id);
    }

    fn set_bit_layer_value(&mut self, layer: &Layer, x: u32, y: u32, value: bool) {
        self.layer_mut(&layer.name)[cell(x, y)] = i32::from(value);
    }

    fn set_layer_value(&mut self, layer: &Layer, x: u32, y: u32, value: i32) {
        self.layer_mut(&layer.name)[cell(x, y)] = value;
    }

    fn layer_value(&self, layer: &Layer, x: u32, y: u32) -> i32 {
        self.raw_value(&layer.name, x, y)
    }
}
