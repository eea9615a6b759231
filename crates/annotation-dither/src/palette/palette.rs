//! Annotation palette with nearest-color matching.

use crate::color::Rgb;

/// Index written for "no annotation".
pub const UNSET_INDEX: u8 = 0;

/// The fifteen annotation colors, in palette order.
///
/// Entry `i` of this array is annotation index `i + 1`.
pub const ANNOTATION_COLORS: [Rgb; 15] = [
    Rgb::from_hex(0xdddddd), // white
    Rgb::from_hex(0xdb7d3e), // orange
    Rgb::from_hex(0xb350bc), // magenta
    Rgb::from_hex(0x6a8ac9), // light blue
    Rgb::from_hex(0xb1a627), // yellow
    Rgb::from_hex(0x41ae38), // lime
    Rgb::from_hex(0xd08499), // pink
    Rgb::from_hex(0x9aa1a1), // light grey
    Rgb::from_hex(0x2e6e89), // cyan
    Rgb::from_hex(0x7e3db5), // purple
    Rgb::from_hex(0x2e388d), // blue
    Rgb::from_hex(0x4f321f), // brown
    Rgb::from_hex(0x35461b), // green
    Rgb::from_hex(0x963430), // red
    Rgb::from_hex(0x191616), // black
];

/// The annotation palette.
///
/// Indices are 1-based; index 0 ([`UNSET_INDEX`]) means "no annotation" and
/// has no color of its own. Unit-range channel values are precomputed at
/// construction so the dithering loop does not convert per pixel.
///
/// # Example
///
/// ```
/// use annotation_dither::{Palette, Rgb};
///
/// let palette = Palette::annotations();
/// assert_eq!(palette.len(), 15);
/// assert_eq!(palette.color(1), Some(Rgb::from_hex(0xdddddd)));
/// assert_eq!(palette.color(0), None);
/// ```
#[derive(Debug, Clone)]
pub struct Palette {
    colors: Vec<Rgb>,
    unit: Vec<[f32; 3]>,
}

impl Palette {
    /// The fixed fifteen-color annotation palette.
    pub fn annotations() -> Self {
        let colors = ANNOTATION_COLORS.to_vec();
        let unit = colors.iter().map(|c| c.to_unit()).collect();
        Self { colors, unit }
    }

    /// Returns the number of colors in the palette (excluding the unset index).
    #[inline]
    pub fn len(&self) -> usize {
        self.colors.len()
    }

    /// Returns true if the palette has no colors.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }

    /// Color for a 1-based palette index, `None` for the unset index or
    /// anything past the end.
    #[inline]
    pub fn color(&self, index: u8) -> Option<Rgb> {
        if index == UNSET_INDEX {
            return None;
        }
        self.colors.get(index as usize - 1).copied()
    }

    /// Unit-range channels for a 1-based index.
    #[inline]
    pub(crate) fn unit(&self, index: u8) -> [f32; 3] {
        self.unit[index as usize - 1]
    }

    /// Exact nearest palette index for an 8-bit color.
    ///
    /// Ties resolve to the lowest index since only a strictly smaller
    /// distance replaces the current best.
    pub fn nearest(&self, color: Rgb) -> u8 {
        let mut best_idx = 0;
        let mut best_dist = u32::MAX;
        for (i, &entry) in self.colors.iter().enumerate() {
            let dist = color.distance_squared(entry);
            if dist < best_dist {
                best_dist = dist;
                best_idx = i;
            }
        }
        (best_idx + 1) as u8
    }

    /// Nearest palette index for a unit-range color that may carry
    /// accumulated diffusion error.
    ///
    /// Returns `(index, squared distance)`.
    #[inline]
    pub fn find_nearest(&self, color: [f32; 3]) -> (u8, f32) {
        let mut best_idx = 0;
        let mut best_dist = f32::MAX;
        for (i, entry) in self.unit.iter().enumerate() {
            let dr = color[0] - entry[0];
            let dg = color[1] - entry[1];
            let db = color[2] - entry[2];
            let dist = dr * dr + dg * dg + db * db;
            if dist < best_dist {
                best_dist = dist;
                best_idx = i;
            }
        }
        ((best_idx + 1) as u8, best_dist)
    }

    /// Color table indexed by palette index, entry 0 standing in for unset
    /// pixels.
    ///
    /// Suitable as the PLTE of a 4-bit indexed image.
    pub fn color_table(&self) -> Vec<Rgb> {
        let mut table = Vec::with_capacity(self.colors.len() + 1);
        table.push(Rgb::default());
        table.extend_from_slice(&self.colors);
        table
    }
}

impl Default for Palette {
    fn default() -> Self {
        Self::annotations()
    }
}
