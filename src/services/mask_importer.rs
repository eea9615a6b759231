use annotation_dither::AnnotationDitherer;
use serde::Serialize;
use std::borrow::Cow;

use super::tile_grid::{split_coord, TileStore};
use crate::error::ImportError;
use crate::mapping::{Mapping, MappingConfig};
use crate::models::{Mask, MaskKind, TILE_SIZE};

/// Placement of a mask in the world
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ImportOptions {
    /// World coordinates of the mask's top-left pixel
    pub offset: (i32, i32),
}

/// Summary of one import run
#[derive(Debug, Clone, Serialize)]
pub struct ImportReport {
    pub aspect: String,
    pub description: String,
    pub width: u32,
    pub height: u32,
    pub tiles: usize,
    pub samples: u64,
    pub dithered: bool,
    pub config: MappingConfig,
}

/// Drives one mapping over a whole mask
#[derive(Debug, Clone, Default)]
pub struct MaskImporter {
    ditherer: AnnotationDitherer,
}

impl MaskImporter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_ditherer(ditherer: AnnotationDitherer) -> Self {
        Self { ditherer }
    }

    /// Apply `mapping` to every pixel of `mask`, tile by tile.
    ///
    /// The mask's actual and full range are pushed into the mapping
    /// first; its threshold is left as configured. Tiles are visited in
    /// raster order and each tile's pixels in raster order, so dithered
    /// mappings give the same result for the same input.
    pub fn import<S: TileStore>(
        &self,
        mapping: &mut Mapping,
        mask: &Mask,
        store: &mut S,
        options: &ImportOptions,
    ) -> Result<ImportReport, ImportError> {
        let expected = mapping.input_kind();
        if mask.kind() != expected {
            return Err(ImportError::MaskKindMismatch {
                expected: expected.as_str(),
                actual: mask.kind().as_str(),
            });
        }

        if mask.kind() == MaskKind::Scalar {
            let (low, high) = mask.actual_range().unwrap_or((0, 0));
            mapping.set_range(low, high, mask.max_value());
        }

        let dithered = mapping.wants_dithered_mask();
        let mask: Cow<'_, Mask> = if dithered {
            let image = self.ditherer.dither(
                mask.samples(),
                mask.width() as usize,
                mask.height() as usize,
            )?;
            tracing::debug!(
                annotated = image.annotated_pixels(),
                "Reduced mask to annotation palette"
            );
            Cow::Owned(mask.with_argb(image.to_argb())?)
        } else {
            Cow::Borrowed(mask)
        };

        tracing::info!(
            aspect = %mapping.aspect(),
            description = %mapping.description(),
            width = mask.width(),
            height = mask.height(),
            config = ?mapping.config(),
            "Importing mask"
        );

        let mut tiles = 0;
        let mut samples = 0u64;
        if mask.width() > 0 && mask.height() > 0 {
            let (ox, oy) = (i64::from(options.offset.0), i64::from(options.offset.1));
            let (x0, y0) = (ox, oy);
            let (x1, y1) = (ox + i64::from(mask.width()), oy + i64::from(mask.height()));
            let size = i64::from(TILE_SIZE);

            let out_of_range = || ImportError::OffsetOutOfRange {
                x: options.offset.0,
                y: options.offset.1,
                width: mask.width(),
                height: mask.height(),
            };
            let last_x = i32::try_from(x1 - 1).map_err(|_| out_of_range())?;
            let last_y = i32::try_from(y1 - 1).map_err(|_| out_of_range())?;

            let (tx0, _) = split_coord(options.offset.0);
            let (ty0, _) = split_coord(options.offset.1);
            let (tx1, _) = split_coord(last_x);
            let (ty1, _) = split_coord(last_y);

            for ty in ty0..=ty1 {
                for tx in tx0..=tx1 {
                    let (tile_x, tile_y) = (i64::from(tx) * size, i64::from(ty) * size);
                    let (from_x, to_x) = (x0.max(tile_x), x1.min(tile_x + size));
                    let (from_y, to_y) = (y0.max(tile_y), y1.min(tile_y + size));

                    let tile = store.tile_mut(tx, ty);
                    let mut bound = mapping.bind(tile);
                    for wy in from_y..to_y {
                        for wx in from_x..to_x {
                            let value = mask
                                .sample((wx - ox) as u32, (wy - oy) as u32)
                                .unwrap_or(0);
                            bound.apply((wx - tile_x) as u32, (wy - tile_y) as u32, value)?;
                        }
                    }

                    let covered = ((to_x - from_x) * (to_y - from_y)) as u64;
                    samples += covered;
                    tiles += 1;
                    tracing::debug!(tx, ty, samples = covered, "Imported tile");
                }
            }
        }

        tracing::info!(
            aspect = %mapping.aspect(),
            tiles,
            samples,
            "Imported mask"
        );

        Ok(ImportReport {
            aspect: mapping.aspect().to_string(),
            description: mapping.description().to_string(),
            width: mask.width(),
            height: mask.height(),
            tiles,
            samples,
            dithered,
            config: *mapping.config(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::MappingError;
    use crate::models::{Layer, Terrain, Tile};
    use crate::services::TileGrid;

    fn ramp(width: u32, height: u32) -> Mask {
        let data = (0..width * height).map(|i| i % 256).collect();
        Mask::scalar(width, height, data, 255).unwrap()
    }

    #[test]
    fn test_import_sets_actual_range() {
        let data = vec![20, 30, 220, 40];
        let mask = Mask::scalar(2, 2, data, 255).unwrap();
        let trees = Layer::continuous("Trees", 255);
        let mut mapping = Mapping::map_actual_range_to_layer(trees.clone()).unwrap();
        let mut grid = TileGrid::new();

        let report = MaskImporter::new()
            .import(&mut mapping, &mask, &mut grid, &ImportOptions::default())
            .unwrap();

        assert_eq!(report.config.mask_low_value, 20);
        assert_eq!(report.config.mask_high_value, 220);
        assert_eq!(report.config.mask_max_value, 255);
        assert_eq!(report.tiles, 1);
        assert_eq!(report.samples, 4);
        assert_eq!(grid.layer_value_at(&trees, 0, 0), 0);
        assert_eq!(grid.layer_value_at(&trees, 0, 1), 255);
    }

    #[test]
    fn test_import_keeps_threshold() {
        let mask = ramp(16, 16);
        let mut mapping = Mapping::set_terrain(Terrain::new(13, "Water")).threshold();
        mapping.set_threshold(128);
        let mut grid = TileGrid::new();
        MaskImporter::new()
            .import(&mut mapping, &mask, &mut grid, &ImportOptions::default())
            .unwrap();

        assert_eq!(mapping.config().threshold, 128);
        // (15, 7) holds 127, (0, 8) holds 128
        assert_eq!(grid.terrain_at(15, 7), None);
        assert_eq!(grid.terrain_at(0, 8), Some(13));
    }

    #[test]
    fn test_import_spans_tiles_with_offset() {
        let mask = Mask::scalar(200, 3, vec![1; 600], 255).unwrap();
        let mut mapping = Mapping::set_terrain(Terrain::new(2, "Dirt"));
        let mut grid = TileGrid::new();
        let options = ImportOptions { offset: (-100, -2) };

        let report = MaskImporter::new()
            .import(&mut mapping, &mask, &mut grid, &options)
            .unwrap();

        // x covers -100..100, y covers -2..1
        assert_eq!(report.tiles, 4);
        assert_eq!(report.samples, 600);
        assert_eq!(grid.coords(), vec![(-1, -1), (0, -1), (-1, 0), (0, 0)]);
        assert_eq!(grid.terrain_at(-100, -2), Some(2));
        assert_eq!(grid.terrain_at(99, 0), Some(2));
        assert_eq!(grid.terrain_at(-101, -2), None);
        assert_eq!(grid.terrain_at(100, 0), None);
        assert_eq!(grid.terrain_at(0, 1), None);

        let tile = grid.tile(-1, -1).unwrap();
        assert_eq!(tile.terrain(28, 126), Some(2));
        assert_eq!(tile.terrain(27, 126), None);
        assert_eq!(tile.terrain_cells(), 100 * 2);
    }

    #[test]
    fn test_mask_past_world_edge_is_rejected() {
        let mask = Mask::scalar(20, 1, vec![1; 20], 255).unwrap();
        let mut mapping = Mapping::set_terrain(Terrain::new(2, "Dirt"));
        let mut grid = TileGrid::new();
        let options = ImportOptions {
            offset: (i32::MAX - 10, 0),
        };

        match MaskImporter::new().import(&mut mapping, &mask, &mut grid, &options) {
            Err(ImportError::OffsetOutOfRange {
                x,
                y,
                width,
                height,
            }) => {
                assert_eq!((x, y), (i32::MAX - 10, 0));
                assert_eq!((width, height), (20, 1));
            }
            other => panic!("Expected OffsetOutOfRange, got {:?}", other),
        }
        assert_eq!(grid.tile_count(), 0);
    }

    #[test]
    fn test_mask_ending_at_world_edge() {
        let mask = Mask::scalar(11, 1, vec![1; 11], 255).unwrap();
        let mut mapping = Mapping::set_terrain(Terrain::new(2, "Dirt"));
        let mut grid = TileGrid::new();
        let options = ImportOptions {
            offset: (i32::MAX - 10, 0),
        };

        let report = MaskImporter::new()
            .import(&mut mapping, &mask, &mut grid, &options)
            .unwrap();
        assert_eq!(report.samples, 11);
        assert_eq!(grid.terrain_at(i32::MAX, 0), Some(2));
    }

    #[test]
    fn test_kind_mismatch() {
        let mask = Mask::argb(1, 1, vec![0xFFDD_DDDD]).unwrap();
        let mut mapping = Mapping::set_terrain(Terrain::new(0, "Grass"));
        let mut grid = TileGrid::new();
        match MaskImporter::new().import(&mut mapping, &mask, &mut grid, &ImportOptions::default())
        {
            Err(ImportError::MaskKindMismatch { expected, actual }) => {
                assert_eq!(expected, "scalar");
                assert_eq!(actual, "color");
            }
            other => panic!("Expected MaskKindMismatch, got {:?}", other),
        }
    }

    #[test]
    fn test_flat_mask_fails_actual_range() {
        let mask = Mask::scalar(2, 2, vec![9; 4], 255).unwrap();
        let mut mapping =
            Mapping::map_actual_range_to_layer(Layer::continuous("Trees", 255)).unwrap();
        let mut grid = TileGrid::new();
        let result =
            MaskImporter::new().import(&mut mapping, &mask, &mut grid, &ImportOptions::default());
        assert!(matches!(
            result,
            Err(ImportError::Mapping(MappingError::InvalidActualRange { low: 9, high: 9 }))
        ));
    }

    #[test]
    fn test_dithered_annotations_match_ditherer() {
        let pixels: Vec<u32> = (0..30 * 20u32)
            .map(|i| 0xFF00_0000 | (i.wrapping_mul(0x0102_0304) & 0xFF_FFFF))
            .collect();
        let mask = Mask::argb(30, 20, pixels.clone()).unwrap();
        let mut mapping = Mapping::colour_to_annotations().dithered_actual_range();
        let mut grid = TileGrid::new();

        let report = MaskImporter::new()
            .import(&mut mapping, &mask, &mut grid, &ImportOptions::default())
            .unwrap();
        assert!(report.dithered);

        let expected = AnnotationDitherer::new().dither(&pixels, 30, 20).unwrap();
        let annotations = Layer::annotations();
        for y in 0..20 {
            for x in 0..30 {
                assert_eq!(
                    grid.layer_value_at(&annotations, x as i32, y as i32),
                    i32::from(expected.get(x, y).unwrap())
                );
            }
        }
    }

    #[test]
    fn test_empty_mask_touches_nothing() {
        let mask = Mask::scalar(0, 0, Vec::new(), 255).unwrap();
        let mut mapping = Mapping::set_terrain(Terrain::new(0, "Grass"));
        let mut grid = TileGrid::new();
        let report = MaskImporter::new()
            .import(&mut mapping, &mask, &mut grid, &ImportOptions::default())
            .unwrap();
        assert_eq!(report.tiles, 0);
        assert_eq!(grid.tile_count(), 0);
    }

    #[test]
    fn test_report_serializes() {
        let mask = ramp(4, 4);
        let mut mapping = Mapping::map_to_layer(Layer::continuous("Height", 255));
        let mut grid = TileGrid::new();
        let report = MaskImporter::new()
            .import(&mut mapping, &mask, &mut grid, &ImportOptions::default())
            .unwrap();
        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json["aspect"], "layer Height");
        assert_eq!(json["samples"], 16);
        assert_eq!(json["config"]["mask_high_value"], 15);
        assert_eq!(grid.tile(0, 0).unwrap().layer_count(), 1);
        let height = Layer::continuous("Height", 255);
        assert_eq!(grid.tile(0, 0).unwrap().layer_value(&height, 3, 3), 15);
    }
}
