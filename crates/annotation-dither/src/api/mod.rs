//! Public API for the annotation-dither crate.
//!
//! This module provides the high-level API: [`AnnotationDitherer`] builder
//! and the [`DitherError`] error type.

mod builder;
mod error;

pub use builder::AnnotationDitherer;
pub use error::DitherError;
