pub mod config;
pub mod layer;
pub mod mask;
pub mod terrain;
pub mod tile;

pub use config::{AspectConfig, DitherMode, ImportConfig, PreviewConfig};
pub use layer::{Layer, ANNOTATIONS_LAYER};
pub use mask::{Mask, MaskKind};
pub use terrain::{Terrain, TerrainCatalog};
pub use tile::{MemoryTile, Tile, TILE_SIZE};
