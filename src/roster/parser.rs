use csv::Reader;
use std::collections::BTreeMap;
use std::io::Read;
use std::path::Path;
use tracing::{debug, info, warn};

use crate::error::{AppError, AppResult};
use super::scoring::SKILLS;
use super::types::{Participant, Roster};

/// Header of the column holding participant names
pub const NAME_COLUMN: &str = "Игрок";

/// Parses a skill cell, accepting a decimal comma ("7,5").
/// Empty, non-numeric and non-finite ("nan", "inf") cells yield None so the
/// value stays absent.
fn parse_skill(value: &str) -> Option<f64> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return None;
    }
    trimmed
        .replace(',', ".")
        .parse()
        .ok()
        .filter(|v: &f64| v.is_finite())
}

/// Loads a roster from a CSV file
pub fn load_roster<P: AsRef<Path>>(csv_path: P) -> AppResult<Roster> {
    let path = csv_path.as_ref();
    let reader = Reader::from_path(path)?;
    let roster = read_from(reader)?;
    info!(path = %path.display(), participants = roster.len(), "roster loaded");
    Ok(roster)
}

/// Reads a roster from any CSV source.
///
/// The header row must name the participant column and every skill column;
/// other columns are ignored. Rows without a name are skipped. A blank or
/// unreadable skill cell is left out of the participant's skills rather than
/// defaulted, so scoring that participant fails later.
pub fn read_roster<R: Read>(source: R) -> AppResult<Roster> {
    read_from(Reader::from_reader(source))
}

fn read_from<R: Read>(mut reader: Reader<R>) -> AppResult<Roster> {
    let headers = reader.headers()?.clone();

    // Find column indices
    let name_col = headers
        .iter()
        .position(|h| h.trim() == NAME_COLUMN)
        .ok_or_else(|| AppError::MissingColumn(NAME_COLUMN.to_string()))?;
    let skill_cols: Vec<(&str, usize)> = SKILLS
        .iter()
        .map(|skill| {
            headers
                .iter()
                .position(|h| h.trim() == *skill)
                .map(|col| (*skill, col))
                .ok_or_else(|| AppError::MissingColumn(skill.to_string()))
        })
        .collect::<AppResult<_>>()?;

    let mut roster = Roster::new();
    for (row, result) in reader.records().enumerate() {
        let record = result?;

        let name = record.get(name_col).unwrap_or("").trim().to_string();
        if name.is_empty() {
            debug!(row = row + 1, "skipping row without a name");
            continue;
        }

        let mut skills = BTreeMap::new();
        for (skill, col) in &skill_cols {
            let raw = record.get(*col).unwrap_or("");
            match parse_skill(raw) {
                Some(value) => {
                    skills.insert(skill.to_string(), value);
                }
                None if raw.trim().is_empty() => {
                    debug!(participant = %name, skill, "blank skill value");
                }
                None => {
                    warn!(participant = %name, skill, value = raw, "unreadable skill value");
                }
            }
        }

        if roster.contains(&name) {
            debug!(participant = %name, "duplicate name, keeping the later row");
        }
        roster.insert(Participant::new(name, skills));
    }

    Ok(roster)
}
