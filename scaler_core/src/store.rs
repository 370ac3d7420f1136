//! RecordStore - Where character records live and how updates reach them

use crate::character::{Character, CharacterUpdate};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use thiserror::Error;

/// Record store error
#[derive(Error, Debug)]
pub enum StoreError {
    #[error("No actor with id '{0}'")]
    NotFound(String),
    #[error("Failed to access roster file: {0}")]
    IoError(#[from] std::io::Error),
    #[error("Failed to parse roster JSON: {0}")]
    ParseError(#[from] serde_json::Error),
}

/// Trait for anything that owns character records
pub trait RecordStore {
    fn get(&self, id: &str) -> Option<&Character>;

    /// Issue an update call against a record. The whole update lands or none of it does.
    fn update(&mut self, id: &str, update: &CharacterUpdate) -> Result<(), StoreError>;
}

/// On-disk roster layout
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RosterFile {
    pub actors: Vec<Character>,
}

/// In-memory store keeping records in insertion order
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    actors: Vec<Character>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_actors(actors: Vec<Character>) -> Self {
        MemoryStore { actors }
    }

    pub fn actors(&self) -> &[Character] {
        &self.actors
    }

    pub fn len(&self) -> usize {
        self.actors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.actors.is_empty()
    }

    /// Parse a roster from JSON text
    pub fn from_json(content: &str) -> Result<Self, StoreError> {
        let roster: RosterFile = serde_json::from_str(content)?;
        Ok(Self::from_actors(roster.actors))
    }

    pub fn to_json(&self) -> Result<String, StoreError> {
        let roster = RosterFile {
            actors: self.actors.clone(),
        };
        Ok(serde_json::to_string_pretty(&roster)?)
    }

    /// Load a roster file
    pub fn load(path: &Path) -> Result<Self, StoreError> {
        let content = fs::read_to_string(path)?;
        Self::from_json(&content)
    }

    /// Write the roster back to disk
    pub fn save(&self, path: &Path) -> Result<(), StoreError> {
        fs::write(path, self.to_json()?)?;
        Ok(())
    }

    fn get_mut(&mut self, id: &str) -> Result<&mut Character, StoreError> {
        self.actors
            .iter_mut()
            .find(|c| c.id == id)
            .ok_or_else(|| StoreError::NotFound(id.to_string()))
    }
}

impl RecordStore for MemoryStore {
    fn get(&self, id: &str) -> Option<&Character> {
        self.actors.iter().find(|c| c.id == id)
    }

    fn update(&mut self, id: &str, update: &CharacterUpdate) -> Result<(), StoreError> {
        self.get_mut(id)?.update(update);
        Ok(())
    }
}
