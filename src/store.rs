//! JSON state file holding the current roster and selection.
//!
//! The whole document is rewritten on every save.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::{debug, info};

use crate::config::Config;
use crate::error::{AppError, AppResult};
use crate::roster::Roster;
use crate::teams::Selection;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct State {
    pub roster: Roster,
    pub selection: Selection,
}

impl State {
    pub fn new(bucket_count: usize) -> Self {
        Self {
            roster: Roster::new(),
            selection: Selection::new(bucket_count),
        }
    }

    /// Swaps in a new roster and prunes the selection against it.
    /// Returns the names dropped from the selection.
    pub fn replace_roster(&mut self, roster: Roster) -> Vec<String> {
        self.roster = roster;
        self.selection.retain_known(&self.roster)
    }

    /// Checks the shell rules for a split and applies a requested team count.
    ///
    /// The effective count (requested, else stored) must be within the
    /// configured bounds and the selection must meet the participant floor.
    /// Nothing changes unless every check passes. Returns whether the stored
    /// team count changed.
    pub fn prepare_split(&mut self, config: &Config, count: Option<usize>) -> AppResult<bool> {
        if self.roster.is_empty() {
            return Err(AppError::NoRoster);
        }
        let teams = count.unwrap_or(self.selection.bucket_count());
        config.check_team_count(teams)?;
        config.check_participant_floor(self.selection.len())?;

        let changed = teams != self.selection.bucket_count();
        self.selection.set_bucket_count(teams);
        Ok(changed)
    }
}

pub struct StateStore {
    path: PathBuf,
}

impl StateStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Reads the state file. A missing file yields an empty state with
    /// `default_buckets` teams.
    pub fn load(&self, default_buckets: usize) -> AppResult<State> {
        if !self.path.exists() {
            debug!(path = %self.path.display(), "no state file, starting empty");
            return Ok(State::new(default_buckets));
        }

        let content = std::fs::read_to_string(&self.path)?;
        let stored: State = serde_json::from_str(&content)?;

        // Re-apply roster invariants in case the file was edited by hand
        let roster: Roster = stored.roster.iter().cloned().collect();
        let mut state = State {
            roster: Roster::new(),
            selection: stored.selection,
        };
        state.replace_roster(roster);
        debug!(
            path = %self.path.display(),
            participants = state.roster.len(),
            selected = state.selection.len(),
            "state loaded"
        );
        Ok(state)
    }

    pub fn save(&self, state: &State) -> AppResult<()> {
        let json = serde_json::to_string_pretty(state)?;
        std::fs::write(&self.path, json)?;
        info!(path = %self.path.display(), "state saved");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::roster::{Participant, SKILLS};

    fn roster(names: &[&str]) -> Roster {
        names
            .iter()
            .map(|name| {
                let skills = SKILLS.iter().map(|s| (s.to_string(), 5.0)).collect();
                Participant::new(*name, skills)
            })
            .collect()
    }

    #[test]
    fn missing_file_gives_empty_state() {
        let dir = tempfile::tempdir().unwrap();
        let store = StateStore::new(dir.path().join("state.json"));

        let state = store.load(3).unwrap();
        assert!(state.roster.is_empty());
        assert!(state.selection.is_empty());
        assert_eq!(state.selection.bucket_count(), 3);
    }

    #[test]
    fn save_then_load_restores_state() {
        let dir = tempfile::tempdir().unwrap();
        let store = StateStore::new(dir.path().join("state.json"));

        let mut state = State::new(2);
        state.replace_roster(roster(&["A", "B", "C"]));
        state.selection.toggle(&state.roster, "B").unwrap();
        state.selection.set_bucket_count(3);
        store.save(&state).unwrap();

        let loaded = store.load(2).unwrap();
        assert_eq!(loaded, state);
    }

    #[test]
    fn replace_roster_prunes_selection() {
        let mut state = State::new(2);
        state.replace_roster(roster(&["A", "B"]));
        state.selection.select_all(&state.roster);

        let pruned = state.replace_roster(roster(&["B", "C"]));
        assert_eq!(pruned, vec!["A".to_string()]);
        assert_eq!(state.selection.members().collect::<Vec<_>>(), vec!["B"]);
    }

    #[test]
    fn load_drops_selected_names_missing_from_roster() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("state.json");

        let mut state = State::new(2);
        state.replace_roster(roster(&["A", "B"]));
        state.selection.select_all(&state.roster);
        let mut json: serde_json::Value = serde_json::to_value(&state).unwrap();
        json["selection"]["members"] = serde_json::json!(["A", "B", "Ghost"]);
        std::fs::write(&path, json.to_string()).unwrap();

        let loaded = StateStore::new(path).load(2).unwrap();
        assert_eq!(loaded.selection.members().collect::<Vec<_>>(), vec!["A", "B"]);
    }

    fn selected_state(names: &[&str], teams: usize) -> State {
        let mut state = State::new(teams);
        state.replace_roster(roster(names));
        state.selection.select_all(&state.roster);
        state
    }

    #[test]
    fn prepare_split_applies_requested_count() {
        let config = Config::default();
        let mut state = selected_state(&["A", "B", "C", "D"], 2);

        assert!(state.prepare_split(&config, Some(3)).unwrap());
        assert_eq!(state.selection.bucket_count(), 3);
        assert!(!state.prepare_split(&config, None).unwrap());
        assert!(!state.prepare_split(&config, Some(3)).unwrap());
    }

    #[test]
    fn prepare_split_checks_stored_count() {
        let config = Config::default();
        let mut state = selected_state(&["A", "B", "C", "D"], 7);

        assert!(matches!(
            state.prepare_split(&config, None),
            Err(AppError::TeamCountOutOfRange { requested: 7, min: 2, max: 4 })
        ));
        assert_eq!(state.selection.bucket_count(), 7);
    }

    #[test]
    fn refused_split_keeps_stored_count() {
        let config = Config::default();
        let mut state = selected_state(&["A", "B", "C"], 2);

        assert!(matches!(
            state.prepare_split(&config, Some(3)),
            Err(AppError::NotEnoughParticipants { selected: 3, minimum: 4 })
        ));
        assert_eq!(state.selection.bucket_count(), 2);

        assert!(state.prepare_split(&config, Some(9)).is_err());
        assert_eq!(state.selection.bucket_count(), 2);
    }

    #[test]
    fn prepare_split_needs_a_roster() {
        let mut state = State::new(2);
        assert!(matches!(
            state.prepare_split(&Config::default(), None),
            Err(AppError::NoRoster)
        ));
    }

    #[test]
    fn corrupt_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("state.json");
        std::fs::write(&path, "{ not json").unwrap();

        assert!(StateStore::new(path).load(2).is_err());
    }
}
