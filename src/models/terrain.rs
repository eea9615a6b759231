use serde::Deserialize;
use std::fmt;

use crate::error::{ConfigError, MappingError};

/// A terrain type.
#[derive(Debug, Deserialize, Clone, PartialEq, Eq, Hash)]
pub struct Terrain {
    pub id: u16,
    pub name: String,
}

impl Terrain {
    pub fn new(id: u16, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
        }
    }
}

impl fmt::Display for Terrain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}

/// Terrain names of the default catalog, in index order.
const DEFAULT_TERRAINS: &[&str] = &[
    "Grass",
    "Bare Grass",
    "Dirt",
    "Sand",
    "Desert",
    "Bare Desert",
    "Rock",
    "Cobblestones",
    "Gravel",
    "Clay",
    "Snow",
    "Deep Snow",
    "Permadirt",
    "Water",
    "Lava",
    "Bedrock",
];

/// Ordered terrain list, indexable by mask value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TerrainCatalog {
    terrains: Vec<Terrain>,
}

impl TerrainCatalog {
    pub fn new(terrains: Vec<Terrain>) -> Self {
        Self { terrains }
    }

    /// Build a catalog whose ids are the list positions.
    ///
    /// Terrain ids are 16-bit, so at most 65536 names fit.
    pub fn from_names<S: AsRef<str>>(names: &[S]) -> Result<Self, ConfigError> {
        names
            .iter()
            .enumerate()
            .map(|(id, name)| {
                u16::try_from(id)
                    .map(|id| Terrain::new(id, name.as_ref()))
                    .map_err(|_| ConfigError::TooManyTerrains(names.len()))
            })
            .collect::<Result<Vec<_>, _>>()
            .map(Self::new)
    }

    /// Terrain at `index`, failing when the mask value has no entry.
    pub fn get(&self, index: u32) -> Result<&Terrain, MappingError> {
        self.terrains
            .get(index as usize)
            .ok_or(MappingError::TerrainIndexOutOfRange {
                index,
                len: self.terrains.len(),
            })
    }

    /// Case-insensitive lookup by name.
    pub fn by_name(&self, name: &str) -> Option<&Terrain> {
        self.terrains
            .iter()
            .find(|t| t.name.eq_ignore_ascii_case(name))
    }

    pub fn len(&self) -> usize {
        self.terrains.len()
    }

    pub fn is_empty(&self) -> bool {
        self.terrains.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Terrain> {
        self.terrains.iter()
    }
}

impl Default for TerrainCatalog {
    fn default() -> Self {
        Self::new(
            (0u16..)
                .zip(DEFAULT_TERRAINS)
                .map(|(id, name)| Terrain::new(id, *name))
                .collect(),
        )
    }
}
