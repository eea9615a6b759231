//! Error type for the annotation-dither public API.

use std::fmt;

/// Errors returned by [`AnnotationDitherer::dither()`](crate::AnnotationDitherer::dither).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DitherError {
    /// The pixel buffer does not hold `width * height` pixels.
    DimensionMismatch {
        /// `width * height`
        expected: usize,
        /// Length of the supplied buffer
        actual: usize,
    },
}

impl fmt::Display for DitherError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DitherError::DimensionMismatch { expected, actual } => write!(
                f,
                "pixel buffer holds {} pixels, expected {}",
                actual, expected
            ),
        }
    }
}

impl std::error::Error for DitherError {}
