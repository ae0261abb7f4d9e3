use std::collections::BTreeSet;
use serde::{Serialize, Deserialize};
use tracing::{debug, info};

use crate::error::{AppError, AppResult, CoreResult};
use crate::roster::Roster;

pub const DEFAULT_BUCKET_COUNT: usize = 2;

/// Chosen participants plus the number of teams to split them into
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Selection {
    members: BTreeSet<String>,
    bucket_count: usize,
}

impl Default for Selection {
    fn default() -> Self {
        Self::new(DEFAULT_BUCKET_COUNT)
    }
}

impl Selection {
    pub fn new(bucket_count: usize) -> Self {
        Self {
            members: BTreeSet::new(),
            bucket_count,
        }
    }

    pub fn bucket_count(&self) -> usize {
        self.bucket_count
    }

    pub fn set_bucket_count(&mut self, bucket_count: usize) {
        self.bucket_count = bucket_count;
    }

    pub fn contains(&self, name: &str) -> bool {
        self.members.contains(name)
    }

    pub fn len(&self) -> usize {
        self.members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    pub fn members(&self) -> impl Iterator<Item = &str> {
        self.members.iter().map(String::as_str)
    }

    /// Adds the name if absent, removes it if present.
    /// Returns whether the participant is selected afterwards.
    pub fn toggle(&mut self, roster: &Roster, name: &str) -> AppResult<bool> {
        if !roster.contains(name) {
            return Err(AppError::UnknownParticipant(name.to_string()));
        }
        let selected = if self.members.remove(name) {
            false
        } else {
            self.members.insert(name.to_string());
            true
        };
        debug!(participant = name, selected, "toggled");
        Ok(selected)
    }

    pub fn select_all(&mut self, roster: &Roster) {
        self.members = roster.names().map(str::to_string).collect();
    }

    pub fn clear(&mut self) {
        self.members.clear();
    }

    /// Drops members that are no longer in the roster and returns them
    pub fn retain_known(&mut self, roster: &Roster) -> Vec<String> {
        let pruned: Vec<String> = self
            .members
            .iter()
            .filter(|name| !roster.contains(name))
            .cloned()
            .collect();
        for name in &pruned {
            self.members.remove(name);
        }
        if !pruned.is_empty() {
            info!(pruned = pruned.len(), "dropped selected participants missing from roster");
        }
        pruned
    }

    /// Scores of the selected participants, in roster order
    pub fn scored(&self, roster: &Roster) -> CoreResult<Vec<(String, f64)>> {
        roster
            .iter()
            .filter(|p| self.members.contains(&p.name))
            .map(|p| Ok((p.name.clone(), p.score()?)))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CoreError;
    use crate::roster::{Participant, SKILLS};

    fn roster(entries: &[(&str, f64)]) -> Roster {
        entries
            .iter()
            .map(|(name, value)| {
                let skills = SKILLS.iter().map(|s| (s.to_string(), *value)).collect();
                Participant::new(*name, skills)
            })
            .collect()
    }

    #[test]
    fn toggle_adds_then_removes() {
        let roster = roster(&[("A", 1.0), ("B", 2.0)]);
        let mut selection = Selection::default();

        assert!(selection.toggle(&roster, "A").unwrap());
        assert!(selection.contains("A"));
        assert!(!selection.toggle(&roster, "A").unwrap());
        assert!(selection.is_empty());
    }

    #[test]
    fn toggle_unknown_name_fails() {
        let roster = roster(&[("A", 1.0)]);
        let mut selection = Selection::default();

        let err = selection.toggle(&roster, "Nobody").unwrap_err();
        assert!(matches!(err, AppError::UnknownParticipant(ref n) if n == "Nobody"));
        assert!(selection.is_empty());
    }

    #[test]
    fn select_all_and_clear() {
        let roster = roster(&[("A", 1.0), ("B", 2.0), ("C", 3.0)]);
        let mut selection = Selection::new(3);

        selection.select_all(&roster);
        assert_eq!(selection.len(), 3);
        assert_eq!(selection.bucket_count(), 3);

        selection.clear();
        assert!(selection.is_empty());
        assert_eq!(selection.bucket_count(), 3);
    }

    #[test]
    fn retain_known_prunes_missing_names() {
        let old = roster(&[("A", 1.0), ("B", 2.0), ("C", 3.0)]);
        let mut selection = Selection::default();
        selection.select_all(&old);

        let new = roster(&[("B", 2.0), ("D", 4.0)]);
        let pruned = selection.retain_known(&new);

        assert_eq!(pruned, vec!["A".to_string(), "C".to_string()]);
        assert_eq!(selection.members().collect::<Vec<_>>(), vec!["B"]);
    }

    #[test]
    fn scored_follows_roster_order() {
        let roster = roster(&[("C", 3.0), ("A", 1.0), ("B", 2.0)]);
        let mut selection = Selection::default();
        selection.toggle(&roster, "B").unwrap();
        selection.toggle(&roster, "C").unwrap();

        let scored = selection.scored(&roster).unwrap();
        assert_eq!(scored, vec![("C".to_string(), 3.0), ("B".to_string(), 2.0)]);
    }

    #[test]
    fn scored_fails_on_incomplete_profile() {
        let mut roster = roster(&[("A", 1.0)]);
        let mut skills = std::collections::BTreeMap::new();
        skills.insert(SKILLS[0].to_string(), 5.0);
        roster.insert(Participant::new("B", skills));

        let mut selection = Selection::default();
        selection.select_all(&roster);

        assert!(matches!(
            selection.scored(&roster),
            Err(CoreError::MissingAttribute { participant: Some(ref p), .. }) if p == "B"
        ));
    }
}
