//! Color types and packed ARGB helpers
//!
//! Mask pixels arrive as packed 32-bit ARGB words (`0xAARRGGBB`). This
//! module extracts channels from them and provides the [`Rgb`] triple used
//! by the palette.

mod argb;
mod rgb;

pub use argb::{alpha, is_opaque, pack_argb, ALPHA_THRESHOLD};
pub use rgb::Rgb;
