use crate::teams::TeamDirectory;
use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use std::path::PathBuf;

/// Ceiba, a ranked triage view over the lodges' maintenance requests.
#[derive(Parser, Debug)]
pub struct Cli {
    /// The address of the bridge endpoint from which to fetch requests.
    #[arg(long = "endpoint", default_value = "localhost:8080")]
    pub endpoint: String,
    /// Query the production base instead of the staging one.
    #[arg(long)]
    pub prod: bool,
    /// Read the raw payload from a JSON file instead of fetching it.
    #[arg(short, long)]
    pub input: Option<PathBuf>,
    /// Team ids to filter by (repeatable). Selecting a location team also
    /// narrows every other team by its name keyword; selecting none shows
    /// everything.
    #[arg(short, long = "team")]
    pub teams: Vec<u64>,
    /// The path to a JSON file overriding the built-in team tables (canonical
    /// names and location keywords).
    #[arg(long = "teams-json")]
    pub teams_json: Option<PathBuf>,
    /// Print the upstream team list (with canonical names applied) and exit.
    #[arg(long)]
    pub list_teams: bool,
    /// Which encoding to output.
    #[arg(short, long, default_value = "json")]
    pub encoding: Encoding,
    /// Re-run the whole fetch/normalize/rank pass every this many minutes.
    #[arg(long = "every")]
    pub every: Option<u64>,
}
impl Cli {
    /// Loads the team tables, from the override file if one was given. Keys
    /// missing from the file keep their built-in defaults.
    pub fn team_directory(&self) -> Result<TeamDirectory> {
        match &self.teams_json {
            Some(path) => {
                let contents = std::fs::read_to_string(path)
                    .with_context(|| "failed to read teams json file")?;
                serde_json::from_str(&contents).with_context(|| "failed to parse teams json file")
            }
            None => Ok(TeamDirectory::default()),
        }
    }
}

/// The encoding to use for the output of the CLI.
#[derive(ValueEnum, Clone, Debug)]
#[clap(rename_all = "snake_case")]
pub enum Encoding {
    /// JSON, the default encoding.
    Json,
    /// Bincode, which is *much* faster to handle if passing output to another
    /// Rust program.
    Bincode,
}
