//! Test fixtures: masks, PNG files and configurations.

use std::path::{Path, PathBuf};

use mask_import::models::{Layer, Mask, Terrain};

/// Layers and terrains shared by the scenarios
pub mod catalog {
    use super::*;

    pub fn grass() -> Terrain {
        Terrain::new(0, "Grass")
    }

    pub fn water() -> Terrain {
        Terrain::new(13, "Water")
    }

    pub fn trees() -> Layer {
        Layer::continuous("Trees", 255)
    }

    pub fn frost() -> Layer {
        Layer::bit("Frost")
    }
}

/// Import configuration mapping a heightmap onto the Trees layer
pub const TREES_CONFIG: &str = r#"
layers:
  - name: Trees
    max_value: 255
mapping:
  type: actual_range
  layer: Trees
offset: [-10, -10]
"#;

/// Import configuration setting Water at or above 128
pub const WATER_CONFIG: &str = r#"
mapping:
  type: set_terrain
  terrain: Water
threshold: 128
"#;

/// Import configuration classifying a dithered color mask
pub const ANNOTATIONS_CONFIG: &str = r#"
mapping:
  type: annotations
dithering: actual_range
"#;

/// A scalar mask holding `(x + y * width) % 256`
pub fn ramp_mask(width: u32, height: u32) -> Mask {
    let data = (0..width * height).map(|i| i % 256).collect();
    Mask::scalar(width, height, data, 255).unwrap()
}

/// Encode 8-bit grayscale samples as a PNG
pub fn grayscale_png(width: u32, height: u32, data: &[u8]) -> Vec<u8> {
    encode_png(width, height, png::ColorType::Grayscale, data)
}

/// Encode RGBA samples as a PNG
pub fn rgba_png(width: u32, height: u32, data: &[u8]) -> Vec<u8> {
    encode_png(width, height, png::ColorType::Rgba, data)
}

fn encode_png(width: u32, height: u32, color: png::ColorType, data: &[u8]) -> Vec<u8> {
    let mut buf = Vec::new();
    {
        let mut encoder = png::Encoder::new(&mut buf, width, height);
        encoder.set_color(color);
        encoder.set_depth(png::BitDepth::Eight);
        let mut writer = encoder.write_header().unwrap();
        writer.write_image_data(data).unwrap();
    }
    buf
}

/// Write `contents` to `name` inside `dir`
pub fn write_file(dir: &Path, name: &str, contents: &[u8]) -> PathBuf {
    let path = dir.join(name);
    std::fs::write(&path, contents).unwrap();
    path
}
