//! CharacterUpdate - The field set written to a record in one call

use super::{Flags, Item};
use crate::tier::{EquipmentSet, TierDefinition};
use crate::types::AbilityScores;
use serde::{Deserialize, Serialize};

/// Partial write to a character record. `None` fields are left untouched.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CharacterUpdate {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hp_max: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ac: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub prof: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub abilities: Option<AbilityScores>,
    /// Replacement item list (full replace, never a merge)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub items: Option<Vec<Item>>,
    /// Flag values merged key by key into the record's flags
    #[serde(default, skip_serializing_if = "Flags::is_empty")]
    pub flags: Flags,
}

impl CharacterUpdate {
    /// Update carrying a tier's stats and its equipment as bare equipment items
    pub fn from_tier(definition: &TierDefinition, equipment: &EquipmentSet) -> Self {
        CharacterUpdate {
            hp_max: Some(definition.hp),
            ac: Some(definition.ac),
            prof: Some(definition.proficiency),
            abilities: Some(AbilityScores::from_array(definition.abilities)),
            items: Some(equipment.names().map(Item::equipment).collect()),
            flags: Flags::new(),
        }
    }

    /// Also write a flag as part of this update
    pub fn with_flag(mut self, scope: &str, key: &str, value: serde_json::Value) -> Self {
        self.flags
            .entry(scope.to_string())
            .or_default()
            .insert(key.to_string(), value);
        self
    }

    pub fn is_empty(&self) -> bool {
        *self == CharacterUpdate::default()
    }
}
