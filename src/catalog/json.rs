use crate::models::BreedProfile;
use std::collections::HashSet;
use std::fs;
use std::path::Path;
use thiserror::Error;

/// Errors that can occur when loading the breed catalog.
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("failed to read catalog file: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse catalog file: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("duplicate breed id in catalog: {0}")]
    DuplicateId(String),
}

/// Breed catalog backed by a static JSON dataset.
///
/// This is the crate's stand-in for the catalog collaborator: it hands the
/// scorer well-formed `BreedProfile` records. Size tokens are lowercased and
/// characteristic values are clamped into `[1, 10]` at load time, so nothing
/// downstream needs to validate them again.
pub struct JsonCatalog {
    breeds: Vec<BreedProfile>,
}

impl JsonCatalog {
    /// Load a catalog from a JSON file containing an array of breed records.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, CatalogError> {
        let raw = fs::read_to_string(path.as_ref())?;
        let breeds: Vec<BreedProfile> = serde_json::from_str(&raw)?;

        tracing::debug!(
            "Loaded {} breed records from {}",
            breeds.len(),
            path.as_ref().display()
        );

        Self::from_breeds(breeds)
    }

    /// Build a catalog from in-memory records, normalizing each entry.
    pub fn from_breeds(breeds: Vec<BreedProfile>) -> Result<Self, CatalogError> {
        let mut seen = HashSet::new();
        for breed in &breeds {
            if !seen.insert(breed.breed_id.clone()) {
                return Err(CatalogError::DuplicateId(breed.breed_id.clone()));
            }
        }

        let breeds = breeds.into_iter().map(BreedProfile::normalized).collect();
        Ok(Self { breeds })
    }

    pub fn breeds(&self) -> &[BreedProfile] {
        &self.breeds
    }

    pub fn into_breeds(self) -> Vec<BreedProfile> {
        self.breeds
    }

    pub fn get(&self, breed_id: &str) -> Option<&BreedProfile> {
        self.breeds.iter().find(|b| b.breed_id == breed_id)
    }

    pub fn len(&self) -> usize {
        self.breeds.len()
    }

    pub fn is_empty(&self) -> bool {
        self.breeds.is_empty()
    }
}
