//! Built-in challenge-rating table

use super::TierDefinition;

const fn def(
    hp: i32,
    ac: i32,
    attack_bonus: i32,
    proficiency: i32,
    abilities: [i32; 6],
) -> TierDefinition {
    TierDefinition {
        hp,
        ac,
        attack_bonus,
        proficiency,
        abilities,
    }
}

/// Stat bundles for tiers 1 through 10
pub const BUILTIN_DEFINITIONS: [TierDefinition; 10] = [
    def(10, 12, 3, 2, [10, 10, 10, 10, 10, 10]),
    def(20, 13, 4, 2, [12, 11, 12, 11, 11, 11]),
    def(30, 14, 5, 2, [14, 12, 13, 12, 12, 12]),
    def(45, 15, 6, 3, [16, 14, 14, 13, 13, 13]),
    def(60, 16, 7, 3, [18, 15, 15, 14, 14, 14]),
    def(75, 17, 8, 4, [20, 16, 16, 15, 15, 15]),
    def(90, 18, 9, 4, [22, 18, 17, 16, 16, 16]),
    def(110, 19, 10, 5, [24, 19, 18, 17, 17, 17]),
    def(130, 20, 11, 5, [26, 20, 19, 18, 18, 18]),
    def(150, 21, 12, 6, [28, 22, 20, 19, 19, 19]),
];

/// Equipment names for tiers 1 through 10
pub const BUILTIN_EQUIPMENT: [&[&str]; 10] = [
    &["Dagger", "Leather Armor"],
    &["Shortsword", "Studded Leather Armor"],
    &["Mace", "Chain Shirt"],
    &["Longsword", "Chain Mail"],
    &["Greatsword", "Splint Armor"],
    &["Maul", "Plate Armor"],
    &["Magic Longsword", "Magical Half Plate"],
    &["Magic Greataxe", "Enchanted Plate Armor"],
    &["Legendary Weapon", "Adamantine Armor"],
    &["Artifact Weapon", "Artifact Armor"],
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_endpoints() {
        assert_eq!(BUILTIN_DEFINITIONS[0], def(10, 12, 3, 2, [10; 6]));
        assert_eq!(BUILTIN_DEFINITIONS[9].hp, 150);
        assert_eq!(BUILTIN_EQUIPMENT[9], &["Artifact Weapon", "Artifact Armor"]);
    }

    #[test]
    fn test_stats_never_decrease_with_tier() {
        for pair in BUILTIN_DEFINITIONS.windows(2) {
            assert!(pair[1].hp > pair[0].hp);
            assert!(pair[1].ac > pair[0].ac);
            assert!(pair[1].proficiency >= pair[0].proficiency);
        }
    }
}
