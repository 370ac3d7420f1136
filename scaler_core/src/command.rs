//! SetTier - The explicit user action that scales an NPC
//!
//! Scaling only ever runs from here. Nothing in this crate reacts to record
//! updates, so applying a tier can never re-trigger itself.

use crate::character::Character;
use crate::resolver::TierResolver;
use crate::store::{RecordStore, StoreError};
use crate::tier::Tier;
use thiserror::Error;
use tracing::{info, warn};

/// Default flag scope for the stored tier label
pub const DEFAULT_FLAG_SCOPE: &str = "npc-scaler";
/// Flag key for the stored tier label
pub const TIER_FLAG_KEY: &str = "challengeRating";

/// Why a set-tier command was rejected. Nothing is written in any of these cases.
#[derive(Error, Debug)]
pub enum ScaleError {
    #[error("'{0}' is not a whole number")]
    InvalidInput(String),
    #[error("Tier {0} is not in the table (expected 1-10)")]
    UnknownTier(i64),
    #[error("Actor '{0}' is not an NPC")]
    NotAnNpc(String),
    #[error(transparent)]
    Store(#[from] StoreError),
}

/// Parse a tier entered as text. Only a plain (optionally signed) integer is accepted.
pub fn parse_tier_input(input: &str) -> Result<i64, ScaleError> {
    input
        .trim()
        .parse::<i64>()
        .map_err(|_| ScaleError::InvalidInput(input.to_string()))
}

/// Tier label stored on a character, if it is a valid tier
pub fn stored_tier(character: &Character, scope: &str) -> Option<Tier> {
    character
        .get_flag(scope, TIER_FLAG_KEY)?
        .as_i64()
        .and_then(Tier::new)
}

/// Tier the sheet control should show: the stored label or `default`
pub fn current_tier(character: &Character, scope: &str, default: Tier) -> Tier {
    stored_tier(character, scope).unwrap_or(default)
}

/// Set an actor's tier and apply its stats
#[derive(Debug, Clone)]
pub struct SetTier<'a> {
    pub actor_id: &'a str,
    pub tier: i64,
}

impl<'a> SetTier<'a> {
    pub fn new(actor_id: &'a str, tier: i64) -> Self {
        SetTier { actor_id, tier }
    }

    /// Build from text input
    pub fn parse(actor_id: &'a str, input: &str) -> Result<Self, ScaleError> {
        Ok(SetTier::new(actor_id, parse_tier_input(input)?))
    }

    /// Validate, then write the tier flag and the stats in a single update call.
    pub fn execute<S: RecordStore>(
        &self,
        store: &mut S,
        resolver: &TierResolver<'_>,
        scope: &str,
    ) -> Result<Tier, ScaleError> {
        let result = self.try_execute(store, resolver, scope);
        match &result {
            Ok(tier) => info!(actor = self.actor_id, %tier, "tier set"),
            Err(e) => warn!(actor = self.actor_id, error = %e, "set tier rejected"),
        }
        result
    }

    fn try_execute<S: RecordStore>(
        &self,
        store: &mut S,
        resolver: &TierResolver<'_>,
        scope: &str,
    ) -> Result<Tier, ScaleError> {
        let actor = store
            .get(self.actor_id)
            .ok_or_else(|| StoreError::NotFound(self.actor_id.to_string()))?;
        if !actor.is_npc() {
            return Err(ScaleError::NotAnNpc(self.actor_id.to_string()));
        }

        let tier = Tier::new(self.tier).ok_or(ScaleError::UnknownTier(self.tier))?;
        let update = resolver
            .update_for(i64::from(tier))
            .ok_or(ScaleError::UnknownTier(self.tier))?
            .with_flag(scope, TIER_FLAG_KEY, i64::from(tier).into());

        // flag and stats travel in one update call so a failed write leaves neither
        store.update(self.actor_id, &update)?;
        Ok(tier)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::character::CharacterUpdate;
    use crate::store::MemoryStore;
    use crate::types::ActorKind;

    /// Store whose writes always fail
    struct ReadOnlyStore(MemoryStore);

    impl RecordStore for ReadOnlyStore {
        fn get(&self, id: &str) -> Option<&Character> {
            self.0.get(id)
        }

        fn update(&mut self, _id: &str, _update: &CharacterUpdate) -> Result<(), StoreError> {
            Err(StoreError::IoError(std::io::Error::new(
                std::io::ErrorKind::PermissionDenied,
                "roster is read-only",
            )))
        }
    }

    fn store() -> MemoryStore {
        MemoryStore::from_actors(vec![
            Character::npc("bandit", "Bandit"),
            Character::with_kind("hero", "Hero", ActorKind::Character),
        ])
    }

    fn run(store: &mut MemoryStore, id: &str, input: &str) -> Result<Tier, ScaleError> {
        SetTier::parse(id, input)?.execute(store, &TierResolver::builtin(), DEFAULT_FLAG_SCOPE)
    }

    #[test]
    fn test_parse_tier_input() {
        assert_eq!(parse_tier_input(" 7 ").unwrap(), 7);
        assert_eq!(parse_tier_input("-2").unwrap(), -2);
        for bad in ["", "abc", "5.5", "5x"] {
            assert!(matches!(parse_tier_input(bad), Err(ScaleError::InvalidInput(_))), "{bad}");
        }
    }

    #[test]
    fn test_set_tier_writes_flag_and_stats() {
        let mut store = store();
        let tier = run(&mut store, "bandit", "6").unwrap();
        assert_eq!(tier.value(), 6);

        let bandit = store.get("bandit").unwrap();
        assert_eq!(stored_tier(bandit, DEFAULT_FLAG_SCOPE), Some(tier));
        assert_eq!(bandit.attributes.hp.max, 75);
        assert_eq!(bandit.items[0].name, "Maul");
    }

    #[test]
    fn test_rejections_write_nothing() {
        let mut store = store();
        let before = store.actors().to_vec();

        assert!(matches!(run(&mut store, "bandit", "11"), Err(ScaleError::UnknownTier(11))));
        assert!(matches!(run(&mut store, "bandit", "0"), Err(ScaleError::UnknownTier(0))));
        assert!(matches!(run(&mut store, "bandit", "2.5"), Err(ScaleError::InvalidInput(_))));
        assert!(matches!(run(&mut store, "hero", "3"), Err(ScaleError::NotAnNpc(_))));
        assert!(matches!(
            run(&mut store, "nobody", "3"),
            Err(ScaleError::Store(StoreError::NotFound(_)))
        ));

        assert_eq!(store.actors(), before.as_slice());
    }

    #[test]
    fn test_failed_update_writes_neither_flag_nor_stats() {
        let mut store = ReadOnlyStore(store());
        let before = store.0.actors().to_vec();

        let result = SetTier::new("bandit", 6).execute(
            &mut store,
            &TierResolver::builtin(),
            DEFAULT_FLAG_SCOPE,
        );
        assert!(matches!(result, Err(ScaleError::Store(StoreError::IoError(_)))));

        let bandit = store.get("bandit").unwrap();
        assert_eq!(stored_tier(bandit, DEFAULT_FLAG_SCOPE), None);
        assert_eq!(bandit.attributes.hp.max, 0);
        assert_eq!(store.0.actors(), before.as_slice());
    }

    #[test]
    fn test_current_tier_defaults() {
        let mut bandit = Character::npc("bandit", "Bandit");
        assert_eq!(current_tier(&bandit, DEFAULT_FLAG_SCOPE, Tier::MIN), Tier::MIN);

        bandit.set_flag(DEFAULT_FLAG_SCOPE, TIER_FLAG_KEY, serde_json::json!(42));
        assert_eq!(stored_tier(&bandit, DEFAULT_FLAG_SCOPE), None);

        bandit.set_flag(DEFAULT_FLAG_SCOPE, TIER_FLAG_KEY, serde_json::json!(9));
        assert_eq!(current_tier(&bandit, DEFAULT_FLAG_SCOPE, Tier::MIN).value(), 9);
    }

    #[test]
    fn test_custom_scope() {
        let mut store = store();
        SetTier::new("bandit", 2)
            .execute(&mut store, &TierResolver::builtin(), "homebrew")
            .unwrap();
        let bandit = store.get("bandit").unwrap();
        assert!(stored_tier(bandit, DEFAULT_FLAG_SCOPE).is_none());
        assert_eq!(stored_tier(bandit, "homebrew").map(|t| t.value()), Some(2));
    }
}
