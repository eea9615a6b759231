//! DitheredImage: an annotation-indexed raster.

use crate::color::{pack_argb, Rgb};
use crate::palette::{Palette, UNSET_INDEX};

/// The output of annotation dithering.
///
/// Stores one index per pixel in row-major order: `1..=15` for annotation
/// colors and [`UNSET_INDEX`] for pixels that were transparent in the
/// source. Together with [`color_table()`](DitheredImage::color_table) this
/// is a 4-bit indexed image.
///
/// # Example
///
/// ```
/// use annotation_dither::{DitheredImage, Palette};
///
/// let image = DitheredImage::new(vec![1, 0, 15, 2], 2, 2, Palette::annotations());
/// assert_eq!(image.get(0, 1), Some(15));
/// assert_eq!(image.to_argb()[1], 0); // unset is fully transparent
/// ```
#[derive(Debug, Clone)]
pub struct DitheredImage {
    indices: Vec<u8>,
    width: usize,
    height: usize,
    palette: Palette,
}

impl DitheredImage {
    /// Wrap dithered indices.
    ///
    /// # Panics (debug only)
    ///
    /// Debug-asserts that `indices.len() == width * height`.
    pub fn new(indices: Vec<u8>, width: usize, height: usize, palette: Palette) -> Self {
        debug_assert_eq!(
            indices.len(),
            width * height,
            "indices length ({}) must match width * height ({}x{}={})",
            indices.len(),
            width,
            height,
            width * height,
        );
        Self {
            indices,
            width,
            height,
            palette,
        }
    }

    /// Annotation indices, row-major.
    #[inline]
    pub fn indices(&self) -> &[u8] {
        &self.indices
    }

    /// Returns the image width in pixels.
    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    /// Returns the image height in pixels.
    #[inline]
    pub fn height(&self) -> usize {
        self.height
    }

    /// Returns the palette the indices refer to.
    #[inline]
    pub fn palette(&self) -> &Palette {
        &self.palette
    }

    /// Index at (x, y), `None` outside the image.
    #[inline]
    pub fn get(&self, x: usize, y: usize) -> Option<u8> {
        if x >= self.width || y >= self.height {
            return None;
        }
        Some(self.indices[y * self.width + x])
    }

    /// Color table for the indices: entry 0 is the unset color, then the
    /// palette in order.
    pub fn color_table(&self) -> Vec<Rgb> {
        self.palette.color_table()
    }

    /// Number of pixels per index, `counts[0]` being unset pixels.
    pub fn histogram(&self) -> Vec<usize> {
        let mut counts = vec![0usize; self.palette.len() + 1];
        for &idx in &self.indices {
            counts[idx as usize] += 1;
        }
        counts
    }

    /// Render back to packed ARGB.
    ///
    /// Annotated pixels are fully opaque palette colors; unset pixels are
    /// `0x00000000`. Feeding this raster to the per-pixel classifier yields
    /// exactly [`indices()`](DitheredImage::indices).
    pub fn to_argb(&self) -> Vec<u32> {
        self.indices
            .iter()
            .map(|&idx| match self.palette.color(idx) {
                Some(color) => pack_argb(0xFF, color),
                None => 0,
            })
            .collect()
    }

    /// Count of pixels that carry an annotation.
    pub fn annotated_pixels(&self) -> usize {
        self.indices.iter().filter(|&&idx| idx != UNSET_INDEX).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::palette::{classify_argb, ANNOTATION_COLORS};

    #[test]
    fn test_new_stores_fields() {
        let image = DitheredImage::new(vec![1, 2, 3, 0, 5, 6], 3, 2, Palette::annotations());
        assert_eq!(image.indices(), &[1, 2, 3, 0, 5, 6]);
        assert_eq!(image.width(), 3);
        assert_eq!(image.height(), 2);
        assert_eq!(image.palette().len(), 15);
    }

    #[test]
    fn test_get_bounds() {
        let image = DitheredImage::new(vec![1, 2, 3, 4], 2, 2, Palette::annotations());
        assert_eq!(image.get(1, 0), Some(2));
        assert_eq!(image.get(0, 1), Some(3));
        assert_eq!(image.get(2, 0), None);
        assert_eq!(image.get(0, 2), None);
    }

    #[test]
    fn test_to_argb_round_trips_through_classifier() {
        let indices: Vec<u8> = (0..=15).collect();
        let image = DitheredImage::new(indices.clone(), 4, 4, Palette::annotations());
        let argb = image.to_argb();
        assert_eq!(argb[0], 0);
        assert_eq!(argb[1], pack_argb(0xFF, ANNOTATION_COLORS[0]));
        let classified: Vec<u8> = argb
            .iter()
            .map(|&p| classify_argb(p).unwrap_or(UNSET_INDEX))
            .collect();
        assert_eq!(classified, indices);
    }

    #[test]
    fn test_histogram_and_annotated_count() {
        let image = DitheredImage::new(vec![0, 0, 3, 15], 2, 2, Palette::annotations());
        let hist = image.histogram();
        assert_eq!(hist.len(), 16);
        assert_eq!(hist[0], 2);
        assert_eq!(hist[3], 1);
        assert_eq!(hist[15], 1);
        assert_eq!(image.annotated_pixels(), 2);
    }
}
