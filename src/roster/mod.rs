pub mod types;
pub mod scoring;
pub mod parser;

pub use types::{Participant, Roster};
pub use scoring::{score, SKILLS};
pub use parser::{load_roster, read_roster, NAME_COLUMN};
