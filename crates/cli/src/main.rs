mod export;
mod output;

use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

use speed_meeting_schedule::engine;
use speed_meeting_shared::config::{
    ScheduleConfig, BASELINE_GROUP_SIZE, BASELINE_PARTICIPANTS, BASELINE_ROUNDS, BASELINE_SEED,
};

#[derive(Parser)]
#[command(name = "speed-meeting", version)]
#[command(about = "Generate a speed-meeting seating plan that maximizes unique encounters")]
struct Cli {
    /// Number of participants
    #[arg(long, default_value_t = BASELINE_PARTICIPANTS)]
    participants: u32,

    /// Seats per table
    #[arg(long, default_value_t = BASELINE_GROUP_SIZE)]
    group_size: u32,

    /// Number of rounds
    #[arg(long, default_value_t = BASELINE_ROUNDS)]
    rounds: u32,

    /// Random seed (fixed default for reproducible plans)
    #[arg(long, default_value_t = BASELINE_SEED)]
    seed: u64,

    /// Destination for the CSV export (overwritten if present)
    #[arg(long, default_value = "planning_speed_meeting.csv")]
    output: PathBuf,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let level = if cli.verbose { Level::DEBUG } else { Level::INFO };
    FmtSubscriber::builder()
        .with_max_level(level)
        .with_target(false)
        .compact()
        .init();

    let config = ScheduleConfig {
        participants: cli.participants,
        group_size: cli.group_size,
        rounds: cli.rounds,
        seed: cli.seed,
    };

    info!(
        participants = config.participants,
        group_size = config.group_size,
        rounds = config.rounds,
        seed = config.seed,
        "generating speed-meeting schedule"
    );
    let outcome = engine::run_schedule(&config)?;

    output::print_schedule(&outcome.rounds);
    output::print_stats(&outcome.stats);

    export::write_csv(&cli.output, &outcome.rounds)
        .with_context(|| format!("failed to export schedule to {}", cli.output.display()))?;
    println!("\nSchedule exported to '{}'", cli.output.display());

    Ok(())
}
