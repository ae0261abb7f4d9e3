//! Error types for scoring, partitioning and the command-line shell.

use thiserror::Error;

/// Failures the scoring and partitioning core can report.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CoreError {
    #[error("{}missing skill value: {}", participant_prefix(.participant), .skill)]
    MissingAttribute {
        participant: Option<String>,
        skill: String,
    },

    #[error("bucket count must be at least 1, got {0}")]
    InvalidBucketCount(usize),
}

fn participant_prefix(participant: &Option<String>) -> String {
    match participant {
        Some(name) => format!("{}: ", name),
        None => String::new(),
    }
}

pub type CoreResult<T> = Result<T, CoreError>;

/// Errors surfaced by the roster provider, state store and CLI.
#[derive(Debug, Error)]
pub enum AppError {
    #[error(transparent)]
    Core(#[from] CoreError),

    #[error("roster file is missing column: {0}")]
    MissingColumn(String),

    #[error("unknown participant: {0}")]
    UnknownParticipant(String),

    #[error("not enough participants selected: {selected} (need at least {minimum})")]
    NotEnoughParticipants { selected: usize, minimum: usize },

    #[error("team count {requested} is outside the allowed range {min}..={max}")]
    TeamCountOutOfRange {
        requested: usize,
        min: usize,
        max: usize,
    },

    #[error("invalid config: {0}")]
    InvalidConfig(String),

    #[error("no roster loaded")]
    NoRoster,

    #[error("csv error: {0}")]
    Csv(#[from] csv::Error),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("state file error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("config error: {0}")]
    Config(#[from] toml::de::Error),
}

pub type AppResult<T> = Result<T, AppError>;
