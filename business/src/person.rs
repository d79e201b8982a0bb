//! The static person dataset.

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use ustr::Ustr;

use crate::{DatasetError, DirectoryConfig};

/// Dataset compiled into the binary.
pub const BUNDLED_DATASET: &str = include_str!("../data/person.json");

const BUNDLED_ORIGIN: &str = "<bundled person.json>";

/// One directory entry. Records are immutable once loaded.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Person {
    pub name: String,
    pub username: Ustr,
    /// Path relative to the configured asset root.
    pub image: String,
    pub status: String,
    #[serde(rename = "Role")]
    pub role: Ustr,
    pub email: String,
    #[serde(rename = "Teams", default)]
    pub teams: Vec<String>,
    #[serde(rename = "Age")]
    pub age: u32,
}

/// The full, read-only person list.
///
/// Cloning is cheap; every clone shares the same records.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Dataset {
    people: Arc<[Person]>,
}

impl Dataset {
    pub fn new(people: Vec<Person>) -> Self {
        Self {
            people: people.into(),
        }
    }

    pub fn from_json(json: &str, origin: impl Into<String>) -> Result<Self, DatasetError> {
        let people: Vec<Person> =
            serde_json::from_str(json).map_err(|source| DatasetError::Decode {
                origin: origin.into(),
                source,
            })?;
        Ok(Self::new(people))
    }

    pub fn bundled() -> Result<Self, DatasetError> {
        Self::from_json(BUNDLED_DATASET, BUNDLED_ORIGIN)
    }

    #[cfg(not(target_arch = "wasm32"))]
    pub fn from_path(path: &str) -> Result<Self, DatasetError> {
        let json = std::fs::read_to_string(path).map_err(|source| DatasetError::Io {
            origin: path.to_owned(),
            source,
        })?;
        Self::from_json(&json, path)
    }

    /// Loads the dataset named by the configuration, or the bundled one.
    pub fn load(config: &DirectoryConfig) -> Result<Self, DatasetError> {
        let dataset = match config.dataset_path() {
            #[cfg(not(target_arch = "wasm32"))]
            Some(path) => Self::from_path(path)?,
            #[cfg(target_arch = "wasm32")]
            Some(path) => {
                log::warn!("Ignoring dataset path {path} on the web, using the bundled dataset");
                Self::bundled()?
            }
            None => Self::bundled()?,
        };

        log::info!("Loaded {} people", dataset.len());
        Ok(dataset)
    }

    pub fn people(&self) -> &[Person] {
        &self.people
    }

    pub fn len(&self) -> usize {
        self.people.len()
    }

    pub fn is_empty(&self) -> bool {
        self.people.is_empty()
    }
}
