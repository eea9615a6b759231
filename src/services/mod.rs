pub mod mask_importer;
pub mod tile_grid;

pub use mask_importer::{ImportOptions, ImportReport, MaskImporter};
pub use tile_grid::{split_coord, TileGrid, TileStore};
