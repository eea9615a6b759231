//! Composable strategies that turn mask samples into tile writes.
//!
//! A [`Mapping`] is a chain of zero or more gates around one leaf. The
//! leaf writes to the tile; each gate decides whether a sample reaches
//! the mapping it wraps. All parts of a chain read one shared
//! [`MappingConfig`], owned by the mapping.

mod gate;
mod leaf;
mod range;

pub use gate::DITHER_SEED;
pub use range::{remap_actual, remap_full, RangeMode};

use serde::Serialize;

use crate::error::MappingError;
use crate::models::{Layer, MaskKind, Terrain, TerrainCatalog, Tile};
use gate::Gate;
use leaf::Leaf;

/// Settings shared by every part of a mapping chain.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct MappingConfig {
    /// Inclusive lower bound for threshold gates.
    pub threshold: u32,
    /// Lowest value present in the mask.
    pub mask_low_value: u32,
    /// Highest value present in the mask.
    pub mask_high_value: u32,
    /// Highest value the mask format can hold.
    pub mask_max_value: u32,
}

#[derive(Debug, Clone)]
enum Node {
    Leaf(Leaf),
    Gated { gate: Gate, inner: Box<Node> },
}

impl Node {
    fn apply<T: Tile + ?Sized>(
        &mut self,
        tile: &mut T,
        x: u32,
        y: u32,
        value: u32,
        config: &MappingConfig,
    ) -> Result<(), MappingError> {
        match self {
            Node::Leaf(leaf) => leaf.apply(tile, x, y, value, config),
            Node::Gated { gate, inner } => {
                if gate.passes(value, config)? {
                    inner.apply(tile, x, y, value, config)
                } else {
                    Ok(())
                }
            }
        }
    }

    fn leaf(&self) -> &Leaf {
        match self {
            Node::Leaf(leaf) => leaf,
            Node::Gated { inner, .. } => inner.leaf(),
        }
    }
}

/// A mapping from mask samples to tile writes.
///
/// Built with one of the leaf constructors, optionally wrapped with
/// [`threshold`](Self::threshold),
/// [`dithered_actual_range`](Self::dithered_actual_range) or
/// [`dithered_full_range`](Self::dithered_full_range), configured once,
/// then applied to every sample of every tile.
///
/// # Example
///
/// ```
/// use mask_import::mapping::Mapping;
/// use mask_import::models::{MemoryTile, Terrain};
///
/// let mut mapping = Mapping::set_terrain(Terrain::new(13, "Water")).threshold();
/// mapping.set_threshold(128);
///
/// let mut tile = MemoryTile::new();
/// mapping.apply(&mut tile, 0, 0, 127).unwrap();
/// mapping.apply(&mut tile, 1, 0, 128).unwrap();
/// assert_eq!(tile.terrain(0, 0), None);
/// assert_eq!(tile.terrain(1, 0), Some(13));
/// ```
#[derive(Debug, Clone)]
pub struct Mapping {
    root: Node,
    config: MappingConfig,
    aspect: String,
    description: String,
}

impl Mapping {
    fn from_leaf(leaf: Leaf) -> Self {
        Self {
            aspect: leaf.aspect(),
            description: leaf.description(),
            root: Node::Leaf(leaf),
            config: MappingConfig::default(),
        }
    }

    /// Set the terrain wherever the mask is non-zero.
    pub fn set_terrain(terrain: Terrain) -> Self {
        Self::from_leaf(Leaf::SetTerrain(terrain))
    }

    /// Write a fixed value into `layer` wherever the mask is non-zero.
    ///
    /// Bit layers are only ever set, never cleared. Discrete layers are
    /// overwritten. Continuous layers keep the higher of `value` and the
    /// current value, whatever the mask holds.
    pub fn set_layer_value(layer: Layer, value: i32) -> Self {
        Self::from_leaf(Leaf::fixed_layer_value(layer, value))
    }

    /// Use the mask value as an index into `catalog`.
    pub fn map_to_terrain(catalog: TerrainCatalog) -> Self {
        Self::from_leaf(Leaf::TerrainIndex(catalog))
    }

    /// Write the mask value itself into `layer`.
    pub fn map_to_layer(layer: Layer) -> Self {
        Self::from_leaf(Leaf::layer_from_mask(layer))
    }

    /// Scale the mask's actual range onto the layer's range.
    pub fn map_actual_range_to_layer(layer: Layer) -> Result<Self, MappingError> {
        Ok(Self::from_leaf(Leaf::ranged(layer, RangeMode::Actual)?))
    }

    /// Scale the mask's full range onto the layer's range.
    pub fn map_full_range_to_layer(layer: Layer) -> Result<Self, MappingError> {
        Ok(Self::from_leaf(Leaf::ranged(layer, RangeMode::Full)?))
    }

    /// Classify ARGB mask pixels into the annotation layer.
    pub fn colour_to_annotations() -> Self {
        Self::from_leaf(Leaf::ColourToAnnotations {
            layer: Layer::annotations(),
            dithered: false,
        })
    }

    fn wrap(self, gate: Gate) -> Self {
        let description = format!("{}{}", self.description, gate.suffix());
        Self {
            root: Node::Gated {
                gate,
                inner: Box::new(self.root),
            },
            config: self.config,
            aspect: self.aspect,
            description,
        }
    }

    /// Only pass samples at or above the threshold.
    pub fn threshold(self) -> Self {
        self.wrap(Gate::threshold())
    }

    /// Pass samples with a probability proportional to their position in
    /// the actual mask range.
    ///
    /// On a bare annotation mapping this adds no gate: the mask is instead
    /// reduced to the palette by error diffusion before it is applied (see
    /// [`wants_dithered_mask`](Self::wants_dithered_mask)).
    pub fn dithered_actual_range(mut self) -> Self {
        if let Node::Leaf(Leaf::ColourToAnnotations { dithered, .. }) = &mut self.root {
            *dithered = true;
            self.description = self.root.leaf().description();
            return self;
        }
        self.wrap(Gate::dithered_actual_range())
    }

    /// Pass samples with probability `value / mask_max`.
    pub fn dithered_full_range(self) -> Self {
        self.wrap(Gate::dithered_full_range())
    }

    /// Apply one sample at tile-local (x, y).
    pub fn apply<T: Tile + ?Sized>(
        &mut self,
        tile: &mut T,
        x: u32,
        y: u32,
        value: u32,
    ) -> Result<(), MappingError> {
        self.root.apply(tile, x, y, value, &self.config)
    }

    /// Scope the mapping to one tile.
    pub fn bind<'a, T: Tile + ?Sized>(&'a mut self, tile: &'a mut T) -> BoundMapping<'a, T> {
        BoundMapping {
            mapping: self,
            tile,
        }
    }

    pub fn set_threshold(&mut self, threshold: u32) {
        self.config.threshold = threshold;
    }

    pub fn set_mask_low_value(&mut self, value: u32) {
        self.config.mask_low_value = value;
    }

    pub fn set_mask_high_value(&mut self, value: u32) {
        self.config.mask_high_value = value;
    }

    pub fn set_mask_max_value(&mut self, value: u32) {
        self.config.mask_max_value = value;
    }

    /// Set actual and full range together.
    pub fn set_range(&mut self, low: u32, high: u32, max: u32) {
        self.config.mask_low_value = low;
        self.config.mask_high_value = high;
        self.config.mask_max_value = max;
    }

    pub fn set_config(&mut self, config: MappingConfig) {
        self.config = config;
    }

    pub fn config(&self) -> &MappingConfig {
        &self.config
    }

    /// What the mapping writes, e.g. `terrain Grass` or `layer Trees`.
    pub fn aspect(&self) -> &str {
        &self.aspect
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    /// Whether the mask must be palette-reduced before applying.
    pub fn wants_dithered_mask(&self) -> bool {
        matches!(
            self.root.leaf(),
            Leaf::ColourToAnnotations { dithered: true, .. }
        )
    }

    /// Kind of mask this mapping reads.
    pub fn input_kind(&self) -> MaskKind {
        match self.root.leaf() {
            Leaf::ColourToAnnotations { .. } => MaskKind::Color,
            _ => MaskKind::Scalar,
        }
    }
}

/// A mapping scoped to one destination tile.
pub struct BoundMapping<'a, T: Tile + ?Sized> {
    mapping: &'a mut Mapping,
    tile: &'a mut T,
}

impl<T: Tile + ?Sized> BoundMapping<'_, T> {
    pub fn apply(&mut self, x: u32, y: u32, value: u32) -> Result<(), MappingError> {
        self.mapping.apply(&mut *self.tile, x, y, value)
    }
}
