pub mod types;
pub mod balance;
pub mod selection;

pub use types::{Assignment, Bucket};
pub use balance::partition;
pub use selection::{Selection, DEFAULT_BUCKET_COUNT};

use tracing::info;

use crate::error::CoreResult;
use crate::roster::Roster;

/// Scores the selected participants and splits them into teams.
/// Always computed from the current roster and selection.
pub fn build_assignment(roster: &Roster, selection: &Selection) -> CoreResult<Assignment> {
    let scored = selection.scored(roster)?;
    let buckets = partition(&scored, selection.bucket_count())?;
    let assignment = Assignment { buckets };
    info!(
        participants = scored.len(),
        teams = assignment.buckets.len(),
        spread = assignment.spread(),
        "teams built"
    );
    Ok(assignment)
}
