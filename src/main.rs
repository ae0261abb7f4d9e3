use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use team_builder::config::Config;
use team_builder::display::{format_assignment, format_roster, write_assignment_to_file};
use team_builder::error::AppError;
use team_builder::roster::load_roster;
use team_builder::store::StateStore;
use team_builder::teams::build_assignment;

#[derive(Parser)]
#[command(name = "team-builder", about = "Split selected players into balanced teams")]
struct Cli {
    /// Config file (TOML). Falls back to $TEAM_BUILDER_CONFIG.
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Replace the roster with a CSV file (defaults to the configured roster path).
    Load {
        csv: Option<PathBuf>,
    },
    /// Show the roster and the current selection.
    List,
    /// Select or deselect players by name.
    Toggle {
        #[arg(required = true)]
        names: Vec<String>,
    },
    /// Select every player in the roster.
    SelectAll,
    /// Deselect everyone.
    Clear,
    /// Set the number of teams.
    Count {
        teams: usize,
    },
    /// Build teams from the current selection.
    Teams {
        /// Number of teams; also stored as the new default.
        #[arg(long)]
        count: Option<usize>,

        /// Also write the teams to this file.
        #[arg(long)]
        out: Option<PathBuf>,
    },
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("team_builder=info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let config = Config::load(cli.config.as_deref())?;
    let store = StateStore::new(&config.state_path);
    let mut state = store.load(config.default_teams)?;

    match cli.command {
        Command::Load { csv } => {
            let path = csv.unwrap_or_else(|| config.roster_path.clone());
            let roster = load_roster(&path)?;
            let pruned = state.replace_roster(roster);
            for name in &pruned {
                warn!(participant = %name, "deselected, no longer in roster");
            }
            store.save(&state)?;
            println!("Roster updated. Players loaded: {}", state.roster.len());
        }
        Command::List => {
            if state.roster.is_empty() {
                return Err(AppError::NoRoster.into());
            }
            print!("{}", format_roster(&state.roster, &state.selection));
        }
        Command::Toggle { names } => {
            for name in &names {
                let selected = state.selection.toggle(&state.roster, name)?;
                println!("{} {}", if selected { "+" } else { "-" }, name);
            }
            store.save(&state)?;
        }
        Command::SelectAll => {
            state.selection.select_all(&state.roster);
            store.save(&state)?;
            println!("Selected {} players", state.selection.len());
        }
        Command::Clear => {
            state.selection.clear();
            store.save(&state)?;
            println!("Selection cleared");
        }
        Command::Count { teams } => {
            config.check_team_count(teams)?;
            state.selection.set_bucket_count(teams);
            store.save(&state)?;
            println!("Teams: {}", teams);
        }
        Command::Teams { count, out } => {
            if state.prepare_split(&config, count)? {
                store.save(&state)?;
            }

            let assignment = build_assignment(&state.roster, &state.selection)?;
            print!("{}", format_assignment(&assignment));
            if let Some(path) = out {
                write_assignment_to_file(&assignment, &path)?;
                info!(path = %path.display(), "teams written");
            }
        }
    }

    Ok(())
}
