//! Packed ARGB channel extraction.

use super::rgb::Rgb;

/// Alpha values strictly above this count as opaque.
pub const ALPHA_THRESHOLD: u8 = 0x7f;

/// Alpha channel of a packed `0xAARRGGBB` pixel.
#[inline]
pub fn alpha(argb: u32) -> u8 {
    (argb >> 24) as u8
}

/// Returns true if the pixel is more than 50% opaque.
#[inline]
pub fn is_opaque(argb: u32) -> bool {
    alpha(argb) > ALPHA_THRESHOLD
}

/// Pack an alpha value and a color into `0xAARRGGBB`.
#[inline]
pub fn pack_argb(alpha: u8, color: Rgb) -> u32 {
    ((alpha as u32) << 24) | ((color.r as u32) << 16) | ((color.g as u32) << 8) | color.b as u32
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_alpha_extraction() {
        assert_eq!(alpha(0xFF00_0000), 0xFF);
        assert_eq!(alpha(0x7F12_3456), 0x7F);
        assert_eq!(alpha(0x0012_3456), 0);
    }

    #[test]
    fn test_opacity_boundary() {
        assert!(!is_opaque(0x7FFF_FFFF), "exactly 50% is not opaque");
        assert!(is_opaque(0x80FF_FFFF));
        assert!(!is_opaque(0x0000_0000));
    }

    #[test]
    fn test_pack_matches_from_argb() {
        let color = Rgb::new(0xdb, 0x7d, 0x3e);
        let packed = pack_argb(0xFF, color);
        assert_eq!(packed, 0xFFDB_7D3E);
        assert_eq!(Rgb::from_argb(packed), color);
    }
}
