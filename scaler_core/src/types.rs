//! Core types shared by the tier table and the character record

use serde::{Deserialize, Serialize};

/// The six ability scores, in sheet order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Ability {
    Strength,
    Dexterity,
    Constitution,
    Intelligence,
    Wisdom,
    Charisma,
}

impl Ability {
    /// Get all abilities in sheet order
    pub fn all() -> &'static [Ability; 6] {
        &[
            Ability::Strength,
            Ability::Dexterity,
            Ability::Constitution,
            Ability::Intelligence,
            Ability::Wisdom,
            Ability::Charisma,
        ]
    }

    pub fn abbreviation(&self) -> &'static str {
        match self {
            Ability::Strength => "STR",
            Ability::Dexterity => "DEX",
            Ability::Constitution => "CON",
            Ability::Intelligence => "INT",
            Ability::Wisdom => "WIS",
            Ability::Charisma => "CHA",
        }
    }

    /// Position in the six-score array
    pub fn index(&self) -> usize {
        match self {
            Ability::Strength => 0,
            Ability::Dexterity => 1,
            Ability::Constitution => 2,
            Ability::Intelligence => 3,
            Ability::Wisdom => 4,
            Ability::Charisma => 5,
        }
    }
}

/// Ability score values
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AbilityScores {
    pub strength: i32,
    pub dexterity: i32,
    pub constitution: i32,
    pub intelligence: i32,
    pub wisdom: i32,
    pub charisma: i32,
}

impl AbilityScores {
    /// Build from an array in sheet order (STR, DEX, CON, INT, WIS, CHA)
    pub const fn from_array(scores: [i32; 6]) -> Self {
        AbilityScores {
            strength: scores[0],
            dexterity: scores[1],
            constitution: scores[2],
            intelligence: scores[3],
            wisdom: scores[4],
            charisma: scores[5],
        }
    }

    pub fn to_array(&self) -> [i32; 6] {
        [
            self.strength,
            self.dexterity,
            self.constitution,
            self.intelligence,
            self.wisdom,
            self.charisma,
        ]
    }

    pub fn get(&self, ability: Ability) -> i32 {
        self.to_array()[ability.index()]
    }
}

impl Default for AbilityScores {
    fn default() -> Self {
        AbilityScores::from_array([10; 6])
    }
}

/// Kind of actor in the record store. Only NPCs are scaled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ActorKind {
    Npc,
    Character,
}

/// Item type tag carried by every owned item
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ItemType {
    Weapon,
    Equipment,
    Consumable,
    Loot,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ability_order_matches_array() {
        let scores = AbilityScores::from_array([18, 15, 15, 14, 14, 13]);
        for ability in Ability::all() {
            assert_eq!(scores.get(*ability), scores.to_array()[ability.index()]);
        }
        assert_eq!(scores.get(Ability::Strength), 18);
        assert_eq!(scores.get(Ability::Charisma), 13);
    }

    #[test]
    fn test_actor_kind_serde_names() {
        assert_eq!(serde_json::to_string(&ActorKind::Npc).unwrap(), "\"npc\"");
        assert_eq!(serde_json::to_string(&ItemType::Equipment).unwrap(), "\"equipment\"");
    }
}
