//! Mask import - maps heightmap and annotation masks onto tiled terrain.
//!
//! A [`mapping::Mapping`] decides, sample by sample, what a mask writes into
//! a [`models::Tile`]. The [`services::MaskImporter`] drives a mapping over
//! a whole [`models::Mask`].

pub mod error;
pub mod mapping;
pub mod models;
pub mod rendering;
pub mod services;
