//! Scaler settings

use super::ConfigError;
use crate::command::DEFAULT_FLAG_SCOPE;
use crate::tier::{Tier, TierTable};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Top-level `scaler.toml`
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Settings {
    #[serde(default)]
    pub scaler: ScalerSettings,
    #[serde(default)]
    pub roster: RosterSettings,
}

impl Settings {
    /// Load settings, falling back to defaults when the file does not exist
    pub fn load_or_default(path: &Path) -> Result<Self, ConfigError> {
        if path.exists() {
            super::load_toml(path)
        } else {
            Ok(Settings::default())
        }
    }

    /// Resolve the configured tier table
    pub fn tier_table(&self) -> Result<TierTable, ConfigError> {
        super::default_tier_table(self.scaler.tier_table.as_deref())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScalerSettings {
    /// Flag scope the tier label is stored under
    #[serde(default = "default_flag_scope")]
    pub flag_scope: String,
    /// Tier shown for NPCs that have never been scaled
    #[serde(default = "default_tier")]
    pub default_tier: Tier,
    /// Optional homebrew tier table; the built-in table is used when unset
    #[serde(default)]
    pub tier_table: Option<PathBuf>,
}

impl Default for ScalerSettings {
    fn default() -> Self {
        ScalerSettings {
            flag_scope: default_flag_scope(),
            default_tier: default_tier(),
            tier_table: None,
        }
    }
}

fn default_flag_scope() -> String {
    DEFAULT_FLAG_SCOPE.to_string()
}
fn default_tier() -> Tier {
    Tier::MIN
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RosterSettings {
    /// JSON roster file
    #[serde(default = "default_roster_path")]
    pub path: PathBuf,
}

impl Default for RosterSettings {
    fn default() -> Self {
        RosterSettings {
            path: default_roster_path(),
        }
    }
}

fn default_roster_path() -> PathBuf {
    PathBuf::from("data/roster.json")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_settings() {
        let settings = Settings::default();
        assert_eq!(settings.scaler.flag_scope, "npc-scaler");
        assert_eq!(settings.scaler.default_tier, Tier::MIN);
        assert!(settings.scaler.tier_table.is_none());
        assert_eq!(settings.roster.path, PathBuf::from("data/roster.json"));
    }

    #[test]
    fn test_parse_partial_settings() {
        let toml = r#"
[scaler]
default_tier = 4
"#;

        let settings: Settings = super::super::parse_toml(toml).unwrap();
        assert_eq!(settings.scaler.default_tier.value(), 4);
        assert_eq!(settings.scaler.flag_scope, "npc-scaler");
        assert_eq!(settings.roster.path, PathBuf::from("data/roster.json"));
    }

    #[test]
    fn test_default_tier_must_be_in_range() {
        let toml = r#"
[scaler]
default_tier = 12
"#;

        assert!(matches!(
            super::super::parse_toml::<Settings>(toml),
            Err(ConfigError::ParseError(_))
        ));
    }

    #[test]
    fn test_missing_file_gives_defaults() {
        let settings = Settings::load_or_default(Path::new("does/not/exist/scaler.toml")).unwrap();
        assert_eq!(settings.scaler.flag_scope, "npc-scaler");
    }
}
