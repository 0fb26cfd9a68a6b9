//! Bang! simulator CLI
//!
//! Plays a batch of five-seat episodes with uniform-random participants and
//! reports how they ended.

use std::fs::File;
use std::io::BufWriter;
use std::path::PathBuf;
use std::process::ExitCode;

use bang_sim::core::{EffectSet, RulesConfig, SetupError};
use bang_sim::events::{JsonLinesSink, TracingSink};
use bang_sim::game::Role;
use bang_sim::rules::WinningSide;
use bang_sim::sim::{OutcomeTally, SimulationConfig, Simulator};
use clap::Parser;
use thiserror::Error;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

/// Bang! turn-engine simulator
#[derive(Parser, Debug)]
#[command(name = "bang-sim")]
#[command(about = "Simulate five-seat Bang! episodes with random play", long_about = None)]
struct Args {
    /// Number of episodes to play
    #[arg(short = 'n', long, default_value = "100")]
    episodes: u32,

    /// Seed of the first episode (episode i uses seed + i)
    #[arg(short, long, default_value = "42")]
    seed: u64,

    /// Turn ceiling per episode; reaching it abandons the episode
    #[arg(short = 't', long, default_value = "1000")]
    max_turns: u32,

    /// Also resolve equipment, Beer, Stagecoach, Wells Fargo, Dynamite and Jail
    #[arg(long)]
    extended: bool,

    /// Write every event as JSON lines to this file
    #[arg(long)]
    events: Option<PathBuf>,

    /// Print the final tally as JSON
    #[arg(long)]
    json: bool,

    /// Verbose output
    #[arg(short, long)]
    verbose: bool,
}

#[derive(Debug, Error)]
enum CliError {
    #[error("Game setup failed: {0}")]
    Setup(#[from] SetupError),

    #[error("Cannot write events to {path}: {source}")]
    Events {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Cannot encode tally: {0}")]
    Json(#[from] serde_json::Error),
}

fn main() -> ExitCode {
    let args = Args::parse();

    let default_level = if args.verbose { "debug" } else { "info" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(args: &Args) -> Result<(), CliError> {
    let effect_set = if args.extended {
        EffectSet::Extended
    } else {
        EffectSet::Core
    };
    let rules = RulesConfig::new()
        .with_effect_set(effect_set)
        .with_max_turns(args.max_turns);
    let config = SimulationConfig::new()
        .with_episodes(args.episodes)
        .with_seed(args.seed)
        .with_rules(rules);

    info!(
        episodes = config.episodes,
        seed = config.seed,
        max_turns = args.max_turns,
        effects = ?effect_set,
        "starting simulation"
    );

    let simulator = Simulator::new(config);
    let tally = match &args.events {
        Some(path) => {
            let file = File::create(path).map_err(|source| CliError::Events {
                path: path.clone(),
                source,
            })?;
            let mut sink = (TracingSink, JsonLinesSink::new(BufWriter::new(file)));
            let tally = simulator.run(&mut sink)?;

            let (_, json) = sink;
            let written = json.written();
            json.finish().map_err(|source| CliError::Events {
                path: path.clone(),
                source,
            })?;
            info!("Wrote {} events to {}", written, path.display());
            tally
        }
        None => simulator.run(&mut TracingSink)?,
    };

    if args.json {
        println!("{}", serde_json::to_string_pretty(&tally)?);
    } else {
        print_tally(&tally);
    }
    Ok(())
}

fn print_tally(tally: &OutcomeTally) {
    let pct = |side| tally.win_rate(side) * 100.0;

    info!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");
    info!("Episodes:           {}", tally.episodes);
    info!("Renegade wins:      {} ({:.1}%)", tally.renegade, pct(WinningSide::Renegade));
    info!("Outlaw wins:        {} ({:.1}%)", tally.outlaws, pct(WinningSide::Outlaws));
    info!("Sheriff/Deputy wins: {} ({:.1}%)", tally.law, pct(WinningSide::Law));
    info!("No outcome:         {}", tally.no_outcome);
    info!("Abandoned:          {}", tally.abandoned);
    info!("Mean turns:         {:.1}", tally.mean_turns());
    for role in [Role::Sheriff, Role::Deputy, Role::Outlaw, Role::Renegade] {
        info!("  {:<9} participant wins: {}", role.to_string(), tally.wins_for(role));
    }
}
