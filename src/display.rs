use std::fmt;
use std::fs::File;
use std::io::Write;
use std::path::Path;

use crate::roster::Roster;
use crate::teams::{Assignment, Selection};

/// Teams as text: a header per team with its strength, then members
impl fmt::Display for Assignment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, bucket) in self.buckets.iter().enumerate() {
            writeln!(f, "Team {} (strength {:.1}):", i + 1, bucket.total)?;
            if bucket.members.is_empty() {
                writeln!(f, "  (empty)")?;
            }
            for member in &bucket.members {
                writeln!(f, "  • {}", member)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

/// Roster listing with a selection marker and score per participant
pub struct RosterView<'a> {
    pub roster: &'a Roster,
    pub selection: &'a Selection,
}

impl fmt::Display for RosterView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for participant in self.roster.iter() {
            let mark = if self.selection.contains(&participant.name) { "[x]" } else { "[ ]" };
            write!(f, "{} {} ", mark, participant.name)?;
            match participant.score() {
                Ok(score) => writeln!(f, "({:.1})", score)?,
                Err(_) => writeln!(f, "(incomplete)")?,
            }
        }
        writeln!(
            f,
            "Selected {} of {}, teams: {}",
            self.selection.len(),
            self.roster.len(),
            self.selection.bucket_count()
        )
    }
}

pub fn format_assignment(assignment: &Assignment) -> String {
    assignment.to_string()
}

pub fn format_roster(roster: &Roster, selection: &Selection) -> String {
    RosterView { roster, selection }.to_string()
}

/// Writes the rendered teams to a file
pub fn write_assignment_to_file(
    assignment: &Assignment,
    path: &Path,
) -> Result<(), std::io::Error> {
    let mut file = File::create(path)?;
    write!(file, "{}", assignment)?;
    Ok(())
}
