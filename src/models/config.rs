use annotation_dither::{AnnotationDitherer, DitherAlgorithm};
use serde::Deserialize;
use std::path::Path;

use super::{Layer, TerrainCatalog, ANNOTATIONS_LAYER};
use crate::error::ConfigError;
use crate::mapping::Mapping;
use crate::services::ImportOptions;

/// Import configuration loaded from a YAML file.
///
/// ```yaml
/// layers:
///   - name: Trees
///     max_value: 255
/// mapping:
///   type: full_range
///   layer: Trees
/// dithering: full_range
/// offset: [-64, 0]
/// ```
#[derive(Debug, Deserialize, Clone)]
pub struct ImportConfig {
    /// Layers the mapping may refer to, besides the built-in annotations
    #[serde(default)]
    pub layers: Vec<Layer>,

    /// Terrain names in index order; the default catalog when absent
    #[serde(default)]
    pub terrains: Option<Vec<String>>,

    /// What the mask is mapped to
    pub mapping: AspectConfig,

    /// Only apply where the mask is at or above this value
    #[serde(default)]
    pub threshold: Option<u32>,

    #[serde(default)]
    pub dithering: DitherMode,

    /// World coordinates of the mask's top-left pixel
    #[serde(default)]
    pub offset: [i32; 2],

    #[serde(default)]
    pub preview: PreviewConfig,
}

/// The aspect of the map a mask is imported into.
#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum AspectConfig {
    /// Set one terrain type where the mask is non-zero
    SetTerrain { terrain: String },
    /// Set one layer value where the mask is non-zero
    SetLayer { layer: String, value: i32 },
    /// Mask value is a terrain index
    TerrainIndex,
    /// Mask value is the layer value
    LayerValue { layer: String },
    /// Scale the mask's actual range onto the layer
    ActualRange { layer: String },
    /// Scale the mask's full range onto the layer
    FullRange { layer: String },
    /// Classify mask colours into annotations
    Annotations,
}

#[derive(Debug, Deserialize, Clone, Copy, Default, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum DitherMode {
    #[default]
    None,
    ActualRange,
    FullRange,
}

/// Palette reduction settings for annotation masks.
#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
pub struct PreviewConfig {
    #[serde(default = "default_algorithm")]
    pub algorithm: String,

    #[serde(default = "default_serpentine")]
    pub serpentine: bool,
}

fn default_algorithm() -> String {
    "floyd-steinberg".to_string()
}

fn default_serpentine() -> bool {
    true
}

impl Default for PreviewConfig {
    fn default() -> Self {
        Self {
            algorithm: default_algorithm(),
            serpentine: default_serpentine(),
        }
    }
}

impl ImportConfig {
    /// Load configuration from a YAML file
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        let config = Self::from_yaml(&content)?;
        tracing::info!(
            path = %path.display(),
            layers = config.layers.len(),
            mapping = ?config.mapping,
            "Loaded import configuration"
        );
        Ok(config)
    }

    pub fn from_yaml(content: &str) -> Result<Self, ConfigError> {
        Ok(serde_yaml::from_str(content)?)
    }

    /// Terrain catalog for index mappings and terrain lookups.
    pub fn catalog(&self) -> Result<TerrainCatalog, ConfigError> {
        match &self.terrains {
            Some(names) => TerrainCatalog::from_names(names),
            None => Ok(TerrainCatalog::default()),
        }
    }

    /// Find a layer by name (case-insensitive).
    pub fn layer(&self, name: &str) -> Result<Layer, ConfigError> {
        if name.eq_ignore_ascii_case(ANNOTATIONS_LAYER) {
            return Ok(Layer::annotations());
        }
        self.layers
            .iter()
            .find(|layer| layer.name.eq_ignore_ascii_case(name))
            .cloned()
            .ok_or_else(|| ConfigError::UnknownLayer(name.to_string()))
    }

    /// Build the configured mapping: leaf, then threshold, then dithering.
    pub fn build_mapping(&self) -> Result<Mapping, ConfigError> {
        let mut mapping = match &self.mapping {
            AspectConfig::SetTerrain { terrain } => {
                let catalog = self.catalog()?;
                let terrain = catalog
                    .by_name(terrain)
                    .cloned()
                    .ok_or_else(|| ConfigError::UnknownTerrain(terrain.clone()))?;
                Mapping::set_terrain(terrain)
            }
            AspectConfig::SetLayer { layer, value } => {
                Mapping::set_layer_value(self.layer(layer)?, *value)
            }
            AspectConfig::TerrainIndex => Mapping::map_to_terrain(self.catalog()?),
            AspectConfig::LayerValue { layer } => Mapping::map_to_layer(self.layer(layer)?),
            AspectConfig::ActualRange { layer } => {
                Mapping::map_actual_range_to_layer(self.layer(layer)?)?
            }
            AspectConfig::FullRange { layer } => {
                Mapping::map_full_range_to_layer(self.layer(layer)?)?
            }
            AspectConfig::Annotations => {
                // Colours are classified, never compared against a threshold
                // or drawn against a full range.
                if self.threshold.is_some() {
                    return Err(ConfigError::InvalidMapping(
                        "annotations cannot use a threshold".to_string(),
                    ));
                }
                if self.dithering == DitherMode::FullRange {
                    return Err(ConfigError::InvalidMapping(
                        "annotations only support actual_range dithering".to_string(),
                    ));
                }
                Mapping::colour_to_annotations()
            }
        };

        if self.threshold.is_some() {
            mapping = mapping.threshold();
        }
        mapping = match self.dithering {
            DitherMode::None => mapping,
            DitherMode::ActualRange => mapping.dithered_actual_range(),
            DitherMode::FullRange => mapping.dithered_full_range(),
        };
        if let Some(threshold) = self.threshold {
            mapping.set_threshold(threshold);
        }
        Ok(mapping)
    }

    pub fn import_options(&self) -> ImportOptions {
        ImportOptions {
            offset: (self.offset[0], self.offset[1]),
        }
    }

    /// Ditherer used when the mapping asks for a palette-reduced mask.
    pub fn ditherer(&self) -> Result<AnnotationDitherer, ConfigError> {
        let algorithm = DitherAlgorithm::from_name(&self.preview.algorithm)
            .ok_or_else(|| ConfigError::UnknownDitherAlgorithm(self.preview.algorithm.clone()))?;
        Ok(AnnotationDitherer::new()
            .algorithm(algorithm)
            .serpentine(self.preview.serpentine))
    }
}
