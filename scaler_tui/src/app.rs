//! Application state

use scaler_core::{
    command::{current_tier, stored_tier},
    config::Settings,
    store::{MemoryStore, StoreError},
    Character, ConfigError, SetTier, Tier, TierResolver, TierTable,
};
use std::path::Path;
use tracing::{info, warn};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tab {
    Roster,
    Sheet,
    Help,
}

impl Tab {
    pub fn all() -> &'static [Tab] {
        &[Tab::Roster, Tab::Sheet, Tab::Help]
    }

    pub fn name(&self) -> &'static str {
        match self {
            Tab::Roster => "Roster",
            Tab::Sheet => "Sheet",
            Tab::Help => "Help",
        }
    }
}

pub struct App {
    pub current_tab: Tab,
    pub settings: Settings,
    pub table: TierTable,
    pub store: MemoryStore,
    pub selected: usize,
    /// Tier shown in the sheet's number control, not yet applied
    pub pending_tier: Tier,
    pub log: Vec<String>,
    pub log_scroll: usize,
    /// Unsaved changes since the last load/save
    pub dirty: bool,
}

impl App {
    pub fn new(settings: Settings) -> Result<Self, ConfigError> {
        let table = settings.tier_table()?;
        let (store, loaded) = Self::load_roster(&settings.roster.path);
        Ok(Self::with_store(settings, table, store, loaded))
    }

    pub fn with_store(
        settings: Settings,
        table: TierTable,
        store: MemoryStore,
        message: String,
    ) -> Self {
        let mut app = App {
            current_tab: Tab::Roster,
            settings,
            table,
            store,
            selected: 0,
            pending_tier: Tier::MIN,
            log: vec![message],
            log_scroll: 0,
            dirty: false,
        };
        app.sync_pending_tier();
        app
    }

    fn load_roster(path: &Path) -> (MemoryStore, String) {
        match MemoryStore::load(path) {
            Ok(store) => {
                info!(path = %path.display(), actors = store.len(), "roster loaded");
                let msg = format!("Loaded {} actors from {}", store.len(), path.display());
                (store, msg)
            }
            Err(e) => {
                warn!(path = %path.display(), error = %e, "roster unavailable, starting empty");
                (MemoryStore::new(), format!("No roster loaded ({})", e))
            }
        }
    }

    pub fn selected_actor(&self) -> Option<&Character> {
        self.store.actors().get(self.selected)
    }

    /// Tier label currently stored on the selected actor
    pub fn selected_stored_tier(&self) -> Option<Tier> {
        let actor = self.selected_actor()?;
        stored_tier(actor, &self.settings.scaler.flag_scope)
    }

    fn sync_pending_tier(&mut self) {
        let default = self.settings.scaler.default_tier;
        self.pending_tier = self
            .selected_actor()
            .map(|a| current_tier(a, &self.settings.scaler.flag_scope, default))
            .unwrap_or(default);
    }

    pub fn next_tab(&mut self) {
        let tabs = Tab::all();
        let current_idx = tabs.iter().position(|t| *t == self.current_tab).unwrap_or(0);
        let next_idx = (current_idx + 1) % tabs.len();
        self.current_tab = tabs[next_idx];
    }

    pub fn prev_tab(&mut self) {
        let tabs = Tab::all();
        let current_idx = tabs.iter().position(|t| *t == self.current_tab).unwrap_or(0);
        let prev_idx = if current_idx == 0 {
            tabs.len() - 1
        } else {
            current_idx - 1
        };
        self.current_tab = tabs[prev_idx];
    }

    pub fn toggle_help(&mut self) {
        self.current_tab = if self.current_tab == Tab::Help {
            Tab::Roster
        } else {
            Tab::Help
        };
    }

    pub fn on_up(&mut self) {
        match self.current_tab {
            Tab::Roster | Tab::Sheet => {
                if self.selected > 0 {
                    self.selected -= 1;
                    self.sync_pending_tier();
                }
            }
            Tab::Help => {
                self.log_scroll = self.log_scroll.saturating_sub(1);
            }
        }
    }

    pub fn on_down(&mut self) {
        match self.current_tab {
            Tab::Roster | Tab::Sheet => {
                if self.selected < self.store.len().saturating_sub(1) {
                    self.selected += 1;
                    self.sync_pending_tier();
                }
            }
            Tab::Help => {
                self.log_scroll = self.log_scroll.saturating_add(1).min(self.log.len());
            }
        }
    }

    pub fn on_left(&mut self) {
        self.pending_tier = self.pending_tier.prev();
    }

    pub fn on_right(&mut self) {
        self.pending_tier = self.pending_tier.next();
    }

    /// Digit shortcut: 1-9 pick that tier, 0 picks 10
    pub fn on_digit(&mut self, digit: u32) {
        let value = if digit == 0 { 10 } else { digit as i64 };
        self.pending_tier = Tier::clamped(value);
    }

    /// Apply the pending tier to the selected actor
    pub fn apply_pending(&mut self) {
        let Some(id) = self.selected_actor().map(|a| a.id.clone()) else {
            self.log.push("No actor selected.".to_string());
            return;
        };

        let resolver = TierResolver::new(&self.table);
        let command = SetTier::new(&id, self.pending_tier.into());
        match command.execute(&mut self.store, &resolver, &self.settings.scaler.flag_scope) {
            Ok(tier) => {
                self.dirty = true;
                self.log.push(format!("{} scaled to CR {}", id, tier));
            }
            Err(e) => self.log.push(format!("{}: {}", id, e)),
        }
    }

    pub fn save(&mut self) {
        match self.save_to(&self.settings.roster.path.clone()) {
            Ok(()) => {
                self.dirty = false;
                self.log.push(format!("Saved roster to {}", self.settings.roster.path.display()));
            }
            Err(e) => {
                warn!(error = %e, "roster save failed");
                self.log.push(format!("Save failed: {}", e));
            }
        }
    }

    fn save_to(&self, path: &Path) -> Result<(), StoreError> {
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent)?;
        }
        self.store.save(path)
    }

    /// Reload the roster from disk, discarding unsaved changes
    pub fn reload(&mut self) {
        let (store, msg) = Self::load_roster(&self.settings.roster.path);
        self.store = store;
        self.selected = self.selected.min(self.store.len().saturating_sub(1));
        self.dirty = false;
        self.log.push(msg);
        self.sync_pending_tier();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use scaler_core::ActorKind;

    fn app() -> App {
        let store = MemoryStore::from_actors(vec![
            Character::npc("goblin", "Goblin"),
            Character::with_kind("hero", "Hero", ActorKind::Character),
        ]);
        App::with_store(
            Settings::default(),
            TierTable::builtin().clone(),
            store,
            "ready".to_string(),
        )
    }

    #[test]
    fn test_shipped_roster_parses() {
        let content =
            std::fs::read_to_string("data/roster.json").expect("Failed to read roster.json");
        let store = MemoryStore::from_json(&content).expect("Failed to parse roster.json");
        assert!(store.len() > 0, "Should have actors");
    }

    #[test]
    fn test_pending_tier_is_clamped() {
        let mut app = app();
        app.on_left();
        assert_eq!(app.pending_tier, Tier::MIN);

        app.on_digit(0);
        assert_eq!(app.pending_tier, Tier::MAX);
        app.on_right();
        assert_eq!(app.pending_tier, Tier::MAX);

        app.on_digit(5);
        assert_eq!(app.pending_tier.value(), 5);
    }

    #[test]
    fn test_apply_pending_scales_selected_npc() {
        let mut app = app();
        app.on_digit(5);
        app.apply_pending();

        let goblin = app.selected_actor().unwrap();
        assert_eq!(goblin.attributes.hp.max, 60);
        assert_eq!(app.selected_stored_tier().map(|t| t.value()), Some(5));
        assert!(app.dirty);
    }

    #[test]
    fn test_apply_pending_skips_player_characters() {
        let mut app = app();
        app.on_down();
        let before = app.selected_actor().unwrap().clone();

        app.apply_pending();
        assert_eq!(app.selected_actor().unwrap(), &before);
        assert!(!app.dirty);
        assert!(app.log.last().unwrap().contains("not an NPC"));
    }

    #[test]
    fn test_help_scroll_stops_at_log_end() {
        let mut app = app();
        app.current_tab = Tab::Help;
        app.log.push("second".to_string());

        for _ in 0..100_000 {
            app.on_down();
        }
        assert_eq!(app.log_scroll, app.log.len());

        app.on_up();
        assert_eq!(app.log_scroll, app.log.len() - 1);
    }

    #[test]
    fn test_selection_syncs_pending_tier() {
        let mut app = app();
        app.on_digit(7);
        app.apply_pending();

        app.on_down();
        assert_eq!(app.pending_tier, Tier::MIN);
        app.on_up();
        assert_eq!(app.pending_tier.value(), 7);
    }
}
