//! Balanced team builder.
//!
//! Participants carry seven skill values; their score is the mean of those.
//! A selection of participants is split into teams with a greedy
//! highest-score-first, lightest-team-next assignment.

pub mod error;
pub mod roster;
pub mod teams;
pub mod config;
pub mod store;
pub mod display;

pub use error::{AppError, AppResult, CoreError, CoreResult};
pub use roster::{score, Participant, Roster, SKILLS};
pub use teams::{build_assignment, partition, Assignment, Bucket, Selection};
