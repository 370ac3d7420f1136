//! Prelude module for convenient imports
//!
//! ```rust
//! use scaler_core::prelude::*;
//! ```

// Core types
pub use crate::character::{Character, CharacterUpdate, Item};
pub use crate::tier::{EquipmentSet, Tier, TierDefinition, TierTable};
pub use crate::types::{Ability, AbilityScores, ActorKind, ItemType};

// Resolution
pub use crate::resolver::TierResolver;

// Commands
pub use crate::command::{current_tier, ScaleError, SetTier};

// Storage
pub use crate::store::{MemoryStore, RecordStore};
