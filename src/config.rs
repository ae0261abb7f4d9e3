//! Shell configuration: file locations and team/participant limits.

use serde::{Deserialize, Serialize};
use std::ffi::OsString;
use std::path::{Path, PathBuf};
use tracing::debug;

use crate::error::{AppError, AppResult};

pub const CONFIG_ENV: &str = "TEAM_BUILDER_CONFIG";
pub const STATE_ENV: &str = "TEAM_BUILDER_STATE";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub roster_path: PathBuf,
    pub state_path: PathBuf,
    /// Fewest selected participants a split is attempted for
    pub min_participants: usize,
    pub min_teams: usize,
    pub max_teams: usize,
    pub default_teams: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            roster_path: PathBuf::from("players.csv"),
            state_path: PathBuf::from("team_builder_state.json"),
            min_participants: 4,
            min_teams: 2,
            max_teams: 4,
            default_teams: 2,
        }
    }
}

impl Config {
    pub fn from_file(path: &Path) -> AppResult<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml(&content)
    }

    pub fn from_toml(content: &str) -> AppResult<Self> {
        Ok(toml::from_str(content)?)
    }

    /// Loads the config from `path`, or from the file named by
    /// `TEAM_BUILDER_CONFIG`. A missing file means defaults.
    /// `TEAM_BUILDER_STATE` overrides the state file location.
    pub fn load(path: Option<&Path>) -> AppResult<Self> {
        Self::load_with(
            path,
            std::env::var_os(CONFIG_ENV),
            std::env::var_os(STATE_ENV),
        )
    }

    fn load_with(
        path: Option<&Path>,
        config_env: Option<OsString>,
        state_env: Option<OsString>,
    ) -> AppResult<Self> {
        let path = path.map(Path::to_path_buf).or(config_env.map(PathBuf::from));

        let mut config = match path {
            Some(ref p) if p.exists() => {
                debug!(path = %p.display(), "loading config");
                Self::from_file(p)?
            }
            Some(ref p) => {
                debug!(path = %p.display(), "config file not found, using defaults");
                Self::default()
            }
            None => Self::default(),
        };

        if let Some(state) = state_env {
            config.state_path = PathBuf::from(state);
        }
        config.validate()?;
        Ok(config)
    }

    /// Team bounds must be usable and the default must sit inside them
    pub fn validate(&self) -> AppResult<()> {
        if self.min_teams < 1 || self.min_teams > self.max_teams {
            return Err(AppError::InvalidConfig(format!(
                "team bounds {}..={} are empty or start below 1",
                self.min_teams, self.max_teams
            )));
        }
        self.check_team_count(self.default_teams)
    }

    pub fn check_team_count(&self, requested: usize) -> AppResult<()> {
        if requested < self.min_teams || requested > self.max_teams {
            return Err(AppError::TeamCountOutOfRange {
                requested,
                min: self.min_teams,
                max: self.max_teams,
            });
        }
        Ok(())
    }

    pub fn check_participant_floor(&self, selected: usize) -> AppResult<()> {
        if selected < self.min_participants {
            return Err(AppError::NotEnoughParticipants {
                selected,
                minimum: self.min_participants,
            });
        }
        Ok(())
    }
}
