//! PNG in and out: mask decoding and annotation preview encoding.

pub mod mask_png;
pub mod preview_png;

pub use preview_png::{encode_preview, write_preview};
