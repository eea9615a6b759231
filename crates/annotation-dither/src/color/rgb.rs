//! 8-bit sRGB color triple

/// A color with 8-bit red, green and blue channels.
///
/// Channels are stored exactly as they appear in the mask image; no gamma
/// handling is applied anywhere in this crate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Rgb {
    /// Red channel
    pub r: u8,
    /// Green channel
    pub g: u8,
    /// Blue channel
    pub b: u8,
}

impl Rgb {
    /// Create a color from its channels.
    #[inline]
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Create a color from a `0xRRGGBB` literal.
    ///
    /// # Example
    /// ```
    /// use annotation_dither::Rgb;
    /// assert_eq!(Rgb::from_hex(0xdb7d3e), Rgb::new(0xdb, 0x7d, 0x3e));
    /// ```
    #[inline]
    pub const fn from_hex(hex: u32) -> Self {
        Self {
            r: (hex >> 16) as u8,
            g: (hex >> 8) as u8,
            b: hex as u8,
        }
    }

    /// Extract the color channels of a packed `0xAARRGGBB` pixel, ignoring alpha.
    #[inline]
    pub const fn from_argb(argb: u32) -> Self {
        Self::from_hex(argb & 0x00FF_FFFF)
    }

    /// Convert to a byte array [R, G, B].
    #[inline]
    pub const fn to_bytes(self) -> [u8; 3] {
        [self.r, self.g, self.b]
    }

    /// Channels scaled to `0.0..=1.0`, for error diffusion arithmetic.
    #[inline]
    pub fn to_unit(self) -> [f32; 3] {
        [
            self.r as f32 / 255.0,
            self.g as f32 / 255.0,
            self.b as f32 / 255.0,
        ]
    }

    /// Squared Euclidean distance between two colors in channel units.
    #[inline]
    pub fn distance_squared(self, other: Rgb) -> u32 {
        let dr = self.r as i32 - other.r as i32;
        let dg = self.g as i32 - other.g as i32;
        let db = self.b as i32 - other.b as i32;
        (dr * dr + dg * dg + db * db) as u32
    }
}
