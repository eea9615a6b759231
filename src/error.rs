use thiserror::Error;

/// Failures raised while building or applying a mapping.
#[derive(Debug, Error)]
pub enum MappingError {
    #[error("Layer {layer} is a bit layer and cannot be mapped to a mask range")]
    BitLayerNotRangeable { layer: String },

    #[error("Terrain index {index} out of range (catalog has {len} entries)")]
    TerrainIndexOutOfRange { index: u32, len: usize },

    #[error("Invalid actual mask range: high value {high} must exceed low value {low}")]
    InvalidActualRange { low: u32, high: u32 },

    #[error("Invalid full mask range: maximum value must be positive")]
    InvalidFullRange,

    #[error("Mask value {value} does not fit layer {layer}")]
    ValueOutOfRange { value: u32, layer: String },
}

#[derive(Debug, Error)]
pub enum MaskError {
    #[error("PNG decode error: {0}")]
    PngDecode(String),

    #[error("Unsupported mask format: {0}")]
    Unsupported(String),

    #[error("Mask data holds {actual} samples, expected {expected}")]
    LengthMismatch { expected: usize, actual: usize },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Config parse error: {0}")]
    Parse(#[from] serde_yaml::Error),

    #[error("Unknown layer: {0}")]
    UnknownLayer(String),

    #[error("Unknown terrain: {0}")]
    UnknownTerrain(String),

    #[error("Unknown dither algorithm: {0}")]
    UnknownDitherAlgorithm(String),

    #[error("Invalid mapping: {0}")]
    Mapping(#[from] MappingError),

    #[error("Invalid mapping: {0}")]
    InvalidMapping(String),

    #[error("Terrain catalog has {0} entries, at most 65536 are supported")]
    TooManyTerrains(usize),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

#[derive(Debug, Error)]
pub enum ImportError {
    #[error("Mapping error: {0}")]
    Mapping(#[from] MappingError),

    #[error("Mask error: {0}")]
    Mask(#[from] MaskError),

    #[error("Dither error: {0}")]
    Dither(#[from] annotation_dither::DitherError),

    #[error("Mask of {width}x{height} at offset ({x}, {y}) extends past world coordinates")]
    OffsetOutOfRange {
        x: i32,
        y: i32,
        width: u32,
        height: u32,
    },

    #[error("Mapping expects a {expected} mask, got a {actual} mask")]
    MaskKindMismatch {
        expected: &'static str,
        actual: &'static str,
    },
}

#[derive(Debug, Error)]
pub enum RenderError {
    #[error("Unsupported dimensions: {width}x{height}")]
    UnsupportedDimensions { width: usize, height: usize },

    #[error("PNG encode error: {0}")]
    PngEncode(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
