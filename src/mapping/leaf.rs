use annotation_dither::classify_argb;

use super::range::{remap_actual, remap_full, RangeMode};
use super::MappingConfig;
use crate::error::MappingError;
use crate::models::{Layer, Terrain, TerrainCatalog, Tile};

/// The mapping at the bottom of a chain: the one that writes.
#[derive(Debug, Clone)]
pub(crate) enum Leaf {
    SetTerrain(Terrain),
    SetBitLayer { layer: Layer, target: i32 },
    SetDiscreteLayer { layer: Layer, value: i32 },
    MergeContinuousLayer { layer: Layer, value: i32 },
    TerrainIndex(TerrainCatalog),
    BitLayerFromMask(Layer),
    LayerFromMask(Layer),
    Ranged { layer: Layer, mode: RangeMode },
    ColourToAnnotations { layer: Layer, dithered: bool },
}

fn merge_max<T: Tile + ?Sized>(tile: &mut T, layer: &Layer, x: u32, y: u32, value: i32) {
    let current = tile.layer_value(layer, x, y);
    if value > current {
        tile.set_layer_value(layer, x, y, value);
    }
}

impl Leaf {
    /// Pick the write behavior for a fixed value by layer kind.
    pub(crate) fn fixed_layer_value(layer: Layer, value: i32) -> Self {
        if layer.is_bit_layer() {
            Leaf::SetBitLayer {
                layer,
                target: value,
            }
        } else if layer.discrete {
            Leaf::SetDiscreteLayer { layer, value }
        } else {
            Leaf::MergeContinuousLayer { layer, value }
        }
    }

    pub(crate) fn layer_from_mask(layer: Layer) -> Self {
        if layer.is_bit_layer() {
            Leaf::BitLayerFromMask(layer)
        } else {
            Leaf::LayerFromMask(layer)
        }
    }

    pub(crate) fn ranged(layer: Layer, mode: RangeMode) -> Result<Self, MappingError> {
        if layer.is_bit_layer() {
            return Err(MappingError::BitLayerNotRangeable { layer: layer.name });
        }
        Ok(Leaf::Ranged { layer, mode })
    }

    pub(crate) fn aspect(&self) -> String {
        match self {
            Leaf::SetTerrain(terrain) => format!("terrain {}", terrain),
            Leaf::SetBitLayer { layer, target }
            | Leaf::SetDiscreteLayer {
                layer,
                value: target,
            }
            | Leaf::MergeContinuousLayer {
                layer,
                value: target,
            } => format!("layer {} (value {})", layer, target),
            Leaf::TerrainIndex(_) => "terrain".to_string(),
            Leaf::BitLayerFromMask(layer)
            | Leaf::LayerFromMask(layer)
            | Leaf::Ranged { layer, .. } => format!("layer {}", layer),
            Leaf::ColourToAnnotations { .. } => "annotations".to_string(),
        }
    }

    pub(crate) fn description(&self) -> String {
        match self {
            Leaf::SetTerrain(terrain) => format!("Set terrain type to {}", terrain),
            Leaf::SetBitLayer { layer, .. }
            | Leaf::SetDiscreteLayer { layer, .. }
            | Leaf::MergeContinuousLayer { layer, .. } => {
                format!("Set layer {} to selected value", layer)
            }
            Leaf::TerrainIndex(_) => "Set terrain type index to mask value".to_string(),
            Leaf::BitLayerFromMask(layer) | Leaf::LayerFromMask(layer) => {
                format!("Set layer {} to mask value", layer)
            }
            Leaf::Ranged { layer, mode } => {
                format!("Map layer {} to {} mask range", layer, mode.as_str())
            }
            Leaf::ColourToAnnotations { layer, dithered } => {
                let mut description = format!("Map layer {} to mask colours", layer);
                if *dithered {
                    description.push_str(" (dithered)");
                }
                description
            }
        }
    }

    pub(crate) fn apply<T: Tile + ?Sized>(
        &self,
        tile: &mut T,
        x: u32,
        y: u32,
        value: u32,
        config: &MappingConfig,
    ) -> Result<(), MappingError> {
        match self {
            Leaf::SetTerrain(terrain) => {
                if value != 0 {
                    tile.set_terrain(x, y, terrain);
                }
            }
            Leaf::SetBitLayer { layer, target } => {
                // never clears
                if *target != 0 && value != 0 {
                    tile.set_bit_layer_value(layer, x, y, true);
                }
            }
            Leaf::SetDiscreteLayer { layer, value: target } => {
                if value != 0 {
                    tile.set_layer_value(layer, x, y, *target);
                }
            }
            Leaf::MergeContinuousLayer { layer, value: target } => {
                merge_max(tile, layer, x, y, *target);
            }
            Leaf::TerrainIndex(catalog) => {
                let terrain = catalog.get(value)?;
                tile.set_terrain(x, y, terrain);
            }
            Leaf::BitLayerFromMask(layer) => {
                if value != 0 {
                    tile.set_bit_layer_value(layer, x, y, true);
                }
            }
            Leaf::LayerFromMask(layer) => {
                if value != 0 {
                    let value = i32::try_from(value).map_err(|_| MappingError::ValueOutOfRange {
                        value,
                        layer: layer.name.clone(),
                    })?;
                    merge_max(tile, layer, x, y, value);
                }
            }
            Leaf::Ranged { layer, mode } => {
                if layer.discrete && value == 0 {
                    return Ok(());
                }
                let scaled = match mode {
                    RangeMode::Actual => remap_actual(
                        value,
                        config.mask_low_value,
                        config.mask_high_value,
                        layer.max_value,
                    )?,
                    RangeMode::Full => remap_full(value, config.mask_max_value, layer.max_value)?,
                };
                if layer.discrete {
                    tile.set_layer_value(layer, x, y, scaled);
                } else {
                    merge_max(tile, layer, x, y, scaled);
                }
            }
            Leaf::ColourToAnnotations { layer, .. } => {
                if let Some(index) = classify_argb(value) {
                    tile.set_layer_value(layer, x, y, i32::from(index));
                }
            }
        }
        Ok(())
    }
}
