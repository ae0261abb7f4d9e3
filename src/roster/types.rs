use std::collections::BTreeMap;
use serde::{Serialize, Deserialize};

use crate::error::{CoreError, CoreResult};
use super::scoring::score;

/// A named participant with raw skill values
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Participant {
    pub name: String,
    pub skills: BTreeMap<String, f64>,
}

impl Participant {
    pub fn new(name: impl Into<String>, skills: BTreeMap<String, f64>) -> Self {
        Self {
            name: name.into(),
            skills,
        }
    }

    /// Derived score; recomputed from the current skill values on every call
    pub fn score(&self) -> CoreResult<f64> {
        score(&self.skills).map_err(|err| match err {
            CoreError::MissingAttribute { skill, .. } => CoreError::MissingAttribute {
                participant: Some(self.name.clone()),
                skill,
            },
            other => other,
        })
    }
}

/// All known participants, kept in load order with unique names
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Roster {
    participants: Vec<Participant>,
}

impl Roster {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a participant. A participant with the same name is replaced in
    /// place, keeping the position of the first occurrence.
    pub fn insert(&mut self, participant: Participant) {
        if let Some(existing) = self.participants.iter_mut().find(|p| p.name == participant.name) {
            *existing = participant;
        } else {
            self.participants.push(participant);
        }
    }

    pub fn get(&self, name: &str) -> Option<&Participant> {
        self.participants.iter().find(|p| p.name == name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    pub fn len(&self) -> usize {
        self.participants.len()
    }

    pub fn is_empty(&self) -> bool {
        self.participants.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Participant> {
        self.participants.iter()
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.participants.iter().map(|p| p.name.as_str())
    }

    /// (name, score) for every participant in roster order
    pub fn score_all(&self) -> CoreResult<Vec<(String, f64)>> {
        self.participants
            .iter()
            .map(|p| Ok((p.name.clone(), p.score()?)))
            .collect()
    }
}

impl FromIterator<Participant> for Roster {
    fn from_iter<I: IntoIterator<Item = Participant>>(iter: I) -> Self {
        let mut roster = Roster::new();
        for participant in iter {
            roster.insert(participant);
        }
        roster
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::roster::SKILLS;

    fn player(name: &str, value: f64) -> Participant {
        let skills = SKILLS.iter().map(|s| (s.to_string(), value)).collect();
        Participant::new(name, skills)
    }

    #[test]
    fn duplicate_names_collapse_in_place() {
        let roster: Roster = vec![player("A", 1.0), player("B", 2.0), player("A", 9.0)]
            .into_iter()
            .collect();

        assert_eq!(roster.len(), 2);
        assert_eq!(roster.names().collect::<Vec<_>>(), vec!["A", "B"]);
        assert_eq!(roster.get("A").unwrap().score().unwrap(), 9.0);
    }

    #[test]
    fn score_follows_attribute_changes() {
        let mut p = player("A", 4.0);
        assert_eq!(p.score().unwrap(), 4.0);

        for value in p.skills.values_mut() {
            *value = 6.0;
        }
        assert_eq!(p.score().unwrap(), 6.0);
    }

    #[test]
    fn score_error_names_the_participant() {
        let mut p = player("Oleg", 5.0);
        p.skills.remove("На воротах");

        let roster: Roster = vec![player("A", 3.0), p].into_iter().collect();
        let err = roster.score_all().unwrap_err();
        assert_eq!(
            err,
            CoreError::MissingAttribute {
                participant: Some("Oleg".to_string()),
                skill: "На воротах".to_string(),
            }
        );
    }

    #[test]
    fn score_all_keeps_roster_order() {
        let roster: Roster = vec![player("C", 1.0), player("A", 3.0), player("B", 2.0)]
            .into_iter()
            .collect();
        let scored = roster.score_all().unwrap();
        assert_eq!(
            scored,
            vec![
                ("C".to_string(), 1.0),
                ("A".to_string(), 3.0),
                ("B".to_string(), 2.0)
            ]
        );
    }
}
