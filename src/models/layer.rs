use serde::Deserialize;
use std::fmt;

/// Name of the built-in annotation layer.
pub const ANNOTATIONS_LAYER: &str = "Annotations";

/// Descriptor of a per-cell data layer.
///
/// A layer with `max_value == 1` is a bit layer (stored as booleans).
/// Other layers are either discrete (values are categories, later writes
/// overwrite) or continuous (values are intensities, writes merge by
/// maximum).
#[derive(Debug, Deserialize, Clone, PartialEq, Eq, Hash)]
pub struct Layer {
    pub name: String,

    #[serde(default = "default_max_value")]
    pub max_value: i32,

    #[serde(default)]
    pub discrete: bool,
}

fn default_max_value() -> i32 {
    255
}

impl Layer {
    /// A boolean layer.
    pub fn bit(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            max_value: 1,
            discrete: false,
        }
    }

    /// A continuous layer with values in `0..=max_value`.
    pub fn continuous(name: impl Into<String>, max_value: i32) -> Self {
        Self {
            name: name.into(),
            max_value,
            discrete: false,
        }
    }

    /// A discrete layer with values in `0..=max_value`.
    pub fn discrete(name: impl Into<String>, max_value: i32) -> Self {
        Self {
            name: name.into(),
            max_value,
            discrete: true,
        }
    }

    /// The annotation layer: 15 colors plus "none".
    pub fn annotations() -> Self {
        Self::discrete(ANNOTATIONS_LAYER, 15)
    }

    pub fn is_bit_layer(&self) -> bool {
        self.max_value == 1
    }
}

impl fmt::Display for Layer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}
