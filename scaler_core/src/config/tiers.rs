//! Tier table loading

use super::ConfigError;
use crate::tier::{EquipmentSet, Tier, TierDefinition, TierEntry, TierTable};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::path::Path;

/// Container for a tier table file
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TiersConfig {
    pub tiers: Vec<TierRecord>,
}

/// One `[[tiers]]` row as written in TOML
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TierRecord {
    pub tier: i64,
    pub hp: i32,
    pub ac: i32,
    #[serde(default)]
    pub attack_bonus: i32,
    pub proficiency: i32,
    pub abilities: Vec<i32>,
    #[serde(default)]
    pub equipment: Vec<String>,
}

impl TierRecord {
    fn into_entry(self) -> Result<TierEntry, ConfigError> {
        let tier = Tier::new(self.tier).ok_or_else(|| {
            ConfigError::ValidationError(format!("tier {} is outside 1..=10", self.tier))
        })?;
        let abilities: [i32; 6] = self.abilities.try_into().map_err(|v: Vec<i32>| {
            ConfigError::ValidationError(format!(
                "tier {} lists {} ability scores, expected 6",
                tier,
                v.len()
            ))
        })?;

        Ok(TierEntry {
            tier,
            definition: TierDefinition {
                hp: self.hp,
                ac: self.ac,
                attack_bonus: self.attack_bonus,
                proficiency: self.proficiency,
                abilities,
            },
            equipment: EquipmentSet(self.equipment),
        })
    }
}

impl TiersConfig {
    /// Validate and convert into a lookup table
    pub fn into_table(self) -> Result<TierTable, ConfigError> {
        let entries = self
            .tiers
            .into_iter()
            .map(TierRecord::into_entry)
            .collect::<Result<Vec<_>, _>>()?;

        let mut seen = BTreeSet::new();
        for entry in &entries {
            if !seen.insert(entry.tier) {
                return Err(ConfigError::ValidationError(format!(
                    "tier {} is defined more than once",
                    entry.tier
                )));
            }
        }
        if let Some(missing) = Tier::all().find(|t| !seen.contains(t)) {
            return Err(ConfigError::ValidationError(format!(
                "tier {} is missing",
                missing
            )));
        }

        TierTable::from_entries(entries)
            .ok_or_else(|| ConfigError::ValidationError("incomplete tier table".to_string()))
    }
}

/// Load a tier table from a TOML file
pub fn load_tier_table(path: &Path) -> Result<TierTable, ConfigError> {
    let config: TiersConfig = super::load_toml(path)?;
    config.into_table()
}

/// Load a tier table from a TOML string
pub fn parse_tier_table(content: &str) -> Result<TierTable, ConfigError> {
    let config: TiersConfig = super::parse_toml(content)?;
    config.into_table()
}

/// Table from the given file, or the built-in table when no file is configured
pub fn default_tier_table(path: Option<&Path>) -> Result<TierTable, ConfigError> {
    match path {
        Some(path) => load_tier_table(path),
        None => Ok(TierTable::builtin().clone()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SHIPPED: &str = include_str!("../../config/tiers.toml");

    fn shipped_with(edit: impl FnOnce(&mut TiersConfig)) -> Result<TierTable, ConfigError> {
        let mut config: TiersConfig = toml::from_str(SHIPPED).unwrap();
        edit(&mut config);
        config.into_table()
    }

    fn validation_message(result: Result<TierTable, ConfigError>) -> String {
        match result {
            Err(ConfigError::ValidationError(msg)) => msg,
            other => panic!("expected validation error, got {:?}", other),
        }
    }

    #[test]
    fn test_shipped_table_matches_builtin() {
        let table = parse_tier_table(SHIPPED).unwrap();
        assert_eq!(&table, TierTable::builtin());
    }

    #[test]
    fn test_default_without_path_is_builtin() {
        assert_eq!(&default_tier_table(None).unwrap(), TierTable::builtin());
    }

    #[test]
    fn test_rejects_out_of_range_tier() {
        let msg = validation_message(shipped_with(|c| c.tiers[0].tier = 11));
        assert!(msg.contains("outside"), "{}", msg);
    }

    #[test]
    fn test_rejects_wrong_ability_count() {
        let msg = validation_message(shipped_with(|c| {
            c.tiers[4].abilities.pop();
        }));
        assert!(msg.contains("expected 6"), "{}", msg);
    }

    #[test]
    fn test_rejects_missing_and_duplicate_tiers() {
        let msg = validation_message(shipped_with(|c| {
            c.tiers.remove(2);
        }));
        assert_eq!(msg, "tier 3 is missing");

        let msg = validation_message(shipped_with(|c| c.tiers[1].tier = 1));
        assert!(msg.contains("more than once"), "{}", msg);
    }

    #[test]
    fn test_parse_small_edit() {
        let table =
            shipped_with(|c| c.tiers[9].equipment = vec!["Vorpal Sword".to_string()]).unwrap();
        let (_, equipment) = table.resolve(10).unwrap();
        assert_eq!(equipment.names().collect::<Vec<_>>(), ["Vorpal Sword"]);
    }

    #[test]
    fn test_malformed_toml() {
        assert!(matches!(
            parse_tier_table("[[tiers]]\ntier = \"one\""),
            Err(ConfigError::ParseError(_))
        ));
    }
}
