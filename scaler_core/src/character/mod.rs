//! Character - The host-owned actor record the scaler writes into

mod update;

pub use update::CharacterUpdate;

use crate::types::{AbilityScores, ActorKind, ItemType};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Flag storage: scope -> key -> value
pub type Flags = BTreeMap<String, BTreeMap<String, serde_json::Value>>;

/// Hit point pool
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct HitPoints {
    pub value: i32,
    pub max: i32,
}

/// Combat attributes on the sheet
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Attributes {
    pub hp: HitPoints,
    /// Armor class
    pub ac: i32,
    /// Proficiency bonus
    pub prof: i32,
}

/// An owned item
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    pub name: String,
    #[serde(rename = "type")]
    pub item_type: ItemType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub quantity: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub equipped: Option<bool>,
}

impl Item {
    /// Equipment entry carrying only a name
    pub fn equipment(name: impl Into<String>) -> Self {
        Item {
            name: name.into(),
            item_type: ItemType::Equipment,
            quantity: None,
            equipped: None,
        }
    }
}

/// Actor record (player character or NPC)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Character {
    pub id: String,
    pub name: String,
    pub kind: ActorKind,
    #[serde(default)]
    pub flags: Flags,
    #[serde(default)]
    pub attributes: Attributes,
    #[serde(default)]
    pub abilities: AbilityScores,
    #[serde(default)]
    pub items: Vec<Item>,
}

impl Character {
    /// Create a blank NPC
    pub fn npc(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self::with_kind(id, name, ActorKind::Npc)
    }

    pub fn with_kind(id: impl Into<String>, name: impl Into<String>, kind: ActorKind) -> Self {
        Character {
            id: id.into(),
            name: name.into(),
            kind,
            flags: Flags::new(),
            attributes: Attributes::default(),
            abilities: AbilityScores::default(),
            items: Vec::new(),
        }
    }

    pub fn is_npc(&self) -> bool {
        self.kind == ActorKind::Npc
    }

    pub fn get_flag(&self, scope: &str, key: &str) -> Option<&serde_json::Value> {
        self.flags.get(scope)?.get(key)
    }

    pub fn set_flag(&mut self, scope: &str, key: &str, value: serde_json::Value) {
        self.flags
            .entry(scope.to_string())
            .or_default()
            .insert(key.to_string(), value);
    }

    /// Apply an update call. Every field present in the update is overwritten.
    pub fn update(&mut self, update: &CharacterUpdate) {
        if let Some(max) = update.hp_max {
            self.attributes.hp.max = max;
        }
        if let Some(ac) = update.ac {
            self.attributes.ac = ac;
        }
        if let Some(prof) = update.prof {
            self.attributes.prof = prof;
        }
        if let Some(abilities) = update.abilities {
            self.abilities = abilities;
        }
        if let Some(ref items) = update.items {
            self.items = items.clone();
        }
        for (scope, values) in &update.flags {
            for (key, value) in values {
                self.set_flag(scope, key, value.clone());
            }
        }
    }
}
