use crate::pack::types::{Pack, PackError, PackRecord};
use std::collections::HashMap;
use thiserror::Error;
use tracing::{debug, info};

#[derive(Error, Debug)]
pub enum PackDatabaseError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
    #[error("JSON parsing error: {0}")]
    JsonError(#[from] serde_json::Error),
    #[error("Invalid pack record #{index}: {source}")]
    InvalidPack {
        index: usize,
        #[source]
        source: PackError,
    },
    #[error("Duplicate pack label: {0}")]
    DuplicateLabel(String),
    #[error("Duplicate pack name: {0}")]
    DuplicateName(String),
    #[error("Pack not found: {0}")]
    PackNotFound(String),
    #[error("No packs loaded")]
    Empty,
}

/// Pack collection loaded from JSON, kept in file order
pub struct PackDatabase {
    packs: Vec<Pack>,
    by_name: HashMap<String, usize>,
}

impl PackDatabase {
    /// Load packs from a JSON file
    pub fn from_file(path: &str) -> Result<Self, PackDatabaseError> {
        let content = std::fs::read_to_string(path)?;
        let db = Self::from_json_str(&content)?;
        info!(path, packs = db.pack_count(), "loaded pack database");
        Ok(db)
    }

    /// Parse packs from a JSON array of `{name, colours, creature_types}` records
    pub fn from_json_str(content: &str) -> Result<Self, PackDatabaseError> {
        let records: Vec<PackRecord> = serde_json::from_str(content)?;

        let packs = records
            .into_iter()
            .enumerate()
            .map(|(index, record)| {
                Pack::try_from(record).map_err(|source| PackDatabaseError::InvalidPack { index, source })
            })
            .collect::<Result<Vec<_>, _>>()?;

        Self::from_packs(packs)
    }

    /// Build a database from already constructed packs, rejecting duplicates
    pub fn from_packs(packs: Vec<Pack>) -> Result<Self, PackDatabaseError> {
        if packs.is_empty() {
            return Err(PackDatabaseError::Empty);
        }

        let mut by_name = HashMap::with_capacity(packs.len());
        let mut labels = HashMap::with_capacity(packs.len());
        for (position, pack) in packs.iter().enumerate() {
            if labels.insert(pack.label().to_string(), position).is_some() {
                return Err(PackDatabaseError::DuplicateLabel(pack.label().to_string()));
            }
            if by_name.insert(pack.name().to_string(), position).is_some() {
                return Err(PackDatabaseError::DuplicateName(pack.name().to_string()));
            }
            debug!(label = pack.label(), "registered pack");
        }

        Ok(PackDatabase { packs, by_name })
    }

    /// Get a pack by name
    pub fn get_pack(&self, name: &str) -> Result<&Pack, PackDatabaseError> {
        self.by_name
            .get(name)
            .map(|&position| &self.packs[position])
            .ok_or_else(|| PackDatabaseError::PackNotFound(name.to_string()))
    }

    /// Get a pack by name or by display label
    pub fn find(&self, name_or_label: &str) -> Result<&Pack, PackDatabaseError> {
        self.get_pack(name_or_label).or_else(|_| {
            self.packs
                .iter()
                .find(|pack| pack.label() == name_or_label)
                .ok_or_else(|| PackDatabaseError::PackNotFound(name_or_label.to_string()))
        })
    }

    pub fn packs(&self) -> &[Pack] {
        &self.packs
    }

    /// Get total number of packs
    pub fn pack_count(&self) -> usize {
        self.packs.len()
    }
}
