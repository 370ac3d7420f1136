//! Tier - Challenge-rating tiers and their stat bundles

mod builtin;

pub use builtin::{BUILTIN_DEFINITIONS, BUILTIN_EQUIPMENT};

use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::OnceLock;

/// A validated tier label in `Tier::MIN..=Tier::MAX`
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "i64", into = "i64")]
pub struct Tier(u8);

impl Tier {
    pub const MIN: Tier = Tier(1);
    pub const MAX: Tier = Tier(10);

    /// Returns `None` for anything outside 1..=10
    pub fn new(value: i64) -> Option<Tier> {
        if (Self::MIN.0 as i64..=Self::MAX.0 as i64).contains(&value) {
            Some(Tier(value as u8))
        } else {
            None
        }
    }

    /// Clamp an arbitrary integer into range, as the sheet's number control does
    pub fn clamped(value: i64) -> Tier {
        Tier(value.clamp(Self::MIN.0 as i64, Self::MAX.0 as i64) as u8)
    }

    /// Iterate every tier in ascending order
    pub fn all() -> impl Iterator<Item = Tier> {
        (Self::MIN.0..=Self::MAX.0).map(Tier)
    }

    pub fn value(&self) -> u8 {
        self.0
    }

    /// Zero-based position in a tier table
    pub fn index(&self) -> usize {
        (self.0 - Self::MIN.0) as usize
    }

    pub fn next(&self) -> Tier {
        Tier::clamped(self.0 as i64 + 1)
    }

    pub fn prev(&self) -> Tier {
        Tier::clamped(self.0 as i64 - 1)
    }
}

impl TryFrom<i64> for Tier {
    type Error = String;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        Tier::new(value).ok_or_else(|| format!("tier {} is outside 1..=10", value))
    }
}

impl From<Tier> for i64 {
    fn from(tier: Tier) -> i64 {
        tier.0 as i64
    }
}

impl fmt::Display for Tier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Stat bundle for one tier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TierDefinition {
    /// Maximum hit points
    pub hp: i32,
    /// Armor class
    pub ac: i32,
    /// Attack bonus. Carried by the table, not written to the character.
    pub attack_bonus: i32,
    pub proficiency: i32,
    /// STR, DEX, CON, INT, WIS, CHA
    pub abilities: [i32; 6],
}

/// Ordered equipment names for one tier
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EquipmentSet(pub Vec<String>);

impl EquipmentSet {
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<&[&str]> for EquipmentSet {
    fn from(names: &[&str]) -> Self {
        EquipmentSet(names.iter().map(|n| n.to_string()).collect())
    }
}

/// One row of a tier table
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TierEntry {
    pub tier: Tier,
    pub definition: TierDefinition,
    pub equipment: EquipmentSet,
}

/// Complete table covering every tier exactly once, indexed by `Tier::index`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TierTable {
    entries: Vec<TierEntry>,
}

impl TierTable {
    /// Build a table from rows. Returns `None` unless every tier appears exactly once.
    pub fn from_entries(mut entries: Vec<TierEntry>) -> Option<Self> {
        entries.sort_by_key(|e| e.tier);
        let complete = entries.len() == Tier::all().count()
            && entries.iter().zip(Tier::all()).all(|(e, t)| e.tier == t);
        complete.then_some(TierTable { entries })
    }

    /// The built-in table, shared for the life of the process
    pub fn builtin() -> &'static TierTable {
        static TABLE: OnceLock<TierTable> = OnceLock::new();
        TABLE.get_or_init(|| TierTable {
            entries: Tier::all()
                .map(|tier| TierEntry {
                    tier,
                    definition: BUILTIN_DEFINITIONS[tier.index()],
                    equipment: EquipmentSet::from(BUILTIN_EQUIPMENT[tier.index()]),
                })
                .collect(),
        })
    }

    /// Look up a raw tier number. Anything that is not a tier resolves to `None`.
    pub fn resolve(&self, tier: i64) -> Option<(&TierDefinition, &EquipmentSet)> {
        let entry = self.entry(Tier::new(tier)?);
        Some((&entry.definition, &entry.equipment))
    }

    pub fn entry(&self, tier: Tier) -> &TierEntry {
        &self.entries[tier.index()]
    }

    pub fn entries(&self) -> &[TierEntry] {
        &self.entries
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tier_range() {
        assert_eq!(Tier::new(0), None);
        assert_eq!(Tier::new(11), None);
        assert_eq!(Tier::new(-3), None);
        assert_eq!(Tier::new(1), Some(Tier::MIN));
        assert_eq!(Tier::new(10), Some(Tier::MAX));
        assert_eq!(Tier::all().count(), 10);
    }

    #[test]
    fn test_tier_clamp_and_step() {
        assert_eq!(Tier::clamped(-50), Tier::MIN);
        assert_eq!(Tier::clamped(99), Tier::MAX);
        assert_eq!(Tier::MAX.next(), Tier::MAX);
        assert_eq!(Tier::MIN.prev(), Tier::MIN);
        assert_eq!(Tier::MIN.next().value(), 2);
    }

    #[test]
    fn test_tier_serde_rejects_out_of_range() {
        let tier: Tier = serde_json::from_str("7").unwrap();
        assert_eq!(tier.value(), 7);
        assert!(serde_json::from_str::<Tier>("11").is_err());
    }

    #[test]
    fn test_builtin_resolves_tier_five() {
        let (def, equipment) = TierTable::builtin().resolve(5).unwrap();
        assert_eq!(def.hp, 60);
        assert_eq!(def.ac, 16);
        assert_eq!(def.attack_bonus, 7);
        assert_eq!(def.proficiency, 3);
        assert_eq!(def.abilities, [18, 15, 15, 14, 14, 14]);
        assert_eq!(equipment.names().collect::<Vec<_>>(), ["Greatsword", "Splint Armor"]);
    }

    #[test]
    fn test_builtin_equipment_is_never_empty() {
        assert!(EquipmentSet::default().is_empty());
        for entry in TierTable::builtin().entries() {
            assert!(!entry.equipment.is_empty(), "tier {} has no equipment", entry.tier);
        }
    }

    #[test]
    fn test_builtin_rejects_unknown_tiers() {
        let table = TierTable::builtin();
        for tier in [0, 11, -1, i64::MIN, i64::MAX] {
            assert!(table.resolve(tier).is_none(), "tier {} should not resolve", tier);
        }
    }

    #[test]
    fn test_from_entries_requires_every_tier() {
        let mut rows = TierTable::builtin().entries().to_vec();
        rows.reverse();
        assert_eq!(TierTable::from_entries(rows.clone()).as_ref(), Some(TierTable::builtin()));

        rows.pop();
        assert!(TierTable::from_entries(rows.clone()).is_none());

        let duplicate = rows[0].clone();
        rows.push(duplicate);
        assert!(TierTable::from_entries(rows).is_none());
    }
}
