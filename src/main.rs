mod cli;
mod parse;
mod rank;
mod teams;

use crate::parse::{get_raw_groups, get_teams, groups_from_value, normalize_requests};
use crate::teams::TeamDirectory;
use anyhow::{Context, Result};
use clap::Parser;
use cli::{Cli, Encoding};
use std::collections::HashSet;
use std::io::Write;
use std::time::Duration;
use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Diagnostics go to stderr so stdout stays a clean data stream
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .compact()
        .init();

    let args = Cli::parse();
    let teams = args.team_directory()?;

    if args.list_teams {
        let list = get_teams(&args.endpoint, args.prod, &teams)?;
        println!("{}", serde_json::to_string(&list)?);
        return Ok(());
    }

    let selected: HashSet<u64> = args.teams.iter().copied().collect();
    loop {
        run_pass(&args, &teams, &selected)?;
        match args.every {
            Some(minutes) if minutes > 0 => std::thread::sleep(Duration::from_secs(minutes * 60)),
            _ => break,
        }
    }

    Ok(())
}

/// One full fetch/normalize/rank pass, with `now` sampled exactly once
/// so every derived value in the pass is measured against the same instant.
fn run_pass(args: &Cli, teams: &TeamDirectory, selected: &HashSet<u64>) -> Result<()> {
    let groups = if let Some(path) = &args.input {
        let contents =
            std::fs::read_to_string(path).with_context(|| "failed to read input file")?;
        let payload =
            serde_json::from_str(&contents).with_context(|| "failed to parse input file")?;
        groups_from_value(payload)
    } else {
        get_raw_groups(&args.endpoint, args.prod)?
    };

    let now = chrono::Utc::now().timestamp();
    let items = normalize_requests(groups, teams, now);
    let total = items.len();
    let ranked = rank::rank(items, selected, teams, now);
    info!(total, shown = ranked.len(), "pass complete");

    match args.encoding {
        Encoding::Json => println!("{}", serde_json::to_string(&ranked)?),
        Encoding::Bincode => {
            let bytes = bincode::serialize(&ranked)?;
            std::io::stdout().write_all(&bytes)?;
            std::io::stdout().flush()?;
        }
    }

    Ok(())
}
