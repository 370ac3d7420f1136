//! scaler_core - Challenge-rating scaling for NPC records
//!
//! This library provides:
//! - TierTable: The fixed per-tier stat bundles and equipment lists
//! - TierResolver: Tier lookup and application onto a character record
//! - RecordStore: The seam where character updates are issued
//! - SetTier: The explicit user command that stores a tier and applies it

pub mod character;
pub mod command;
pub mod config;
pub mod prelude;
pub mod resolver;
pub mod store;
pub mod tier;
pub mod types;

// Re-export core types for convenience
pub use character::{Character, CharacterUpdate, Item};
pub use command::{ScaleError, SetTier};
pub use config::{ConfigError, Settings};
pub use resolver::{apply, resolve, TierResolver};
pub use store::{MemoryStore, RecordStore, StoreError};
pub use tier::{EquipmentSet, Tier, TierDefinition, TierTable};
pub use types::{Ability, AbilityScores, ActorKind, ItemType};
