//! TierResolver - Maps a tier to its stats and writes them onto a character

use crate::character::{Character, CharacterUpdate};
use crate::tier::{EquipmentSet, TierDefinition, TierTable};
use tracing::debug;

/// Resolves tiers against a table
#[derive(Debug, Clone, Copy)]
pub struct TierResolver<'a> {
    table: &'a TierTable,
}

impl TierResolver<'static> {
    /// Resolver over the built-in table
    pub fn builtin() -> Self {
        TierResolver {
            table: TierTable::builtin(),
        }
    }
}

impl Default for TierResolver<'static> {
    fn default() -> Self {
        Self::builtin()
    }
}

impl<'a> TierResolver<'a> {
    pub fn new(table: &'a TierTable) -> Self {
        TierResolver { table }
    }

    pub fn table(&self) -> &'a TierTable {
        self.table
    }

    /// Look up a tier. No side effects.
    pub fn resolve(&self, tier: i64) -> Option<(&'a TierDefinition, &'a EquipmentSet)> {
        self.table.resolve(tier)
    }

    /// The update call `apply` would issue for `tier`
    pub fn update_for(&self, tier: i64) -> Option<CharacterUpdate> {
        let (definition, equipment) = self.resolve(tier)?;
        Some(CharacterUpdate::from_tier(definition, equipment))
    }

    /// Overwrite max HP, AC, proficiency, abilities and items from `tier`.
    ///
    /// Unknown tiers leave `character` untouched and return `false`.
    pub fn apply(&self, character: &mut Character, tier: i64) -> bool {
        let Some(update) = self.update_for(tier) else {
            return false;
        };
        character.update(&update);
        debug!(actor = %character.id, tier, "applied tier scaling");
        true
    }
}

/// Look up a tier in the built-in table
pub fn resolve(tier: i64) -> Option<(&'static TierDefinition, &'static EquipmentSet)> {
    TierResolver::builtin().resolve(tier)
}

/// Apply a built-in tier to a character
pub fn apply(character: &mut Character, tier: i64) -> bool {
    TierResolver::builtin().apply(character, tier)
}
