use tracing::debug;

use speed_meeting_shared::config::ScheduleConfig;
use speed_meeting_shared::plan::roster;
use speed_meeting_shared::result::ScheduleOutcome;

use crate::generator::RoundGenerator;
use crate::tracker::EncounterTracker;

/// Run a full schedule: validate the configuration, then generate and
/// record each round strictly in sequence, and snapshot the statistics at
/// the end. Deterministic for a fixed seed.
pub fn run_schedule(config: &ScheduleConfig) -> anyhow::Result<ScheduleOutcome> {
    config.validate()?;

    let roster = roster(config.participants);
    let mut generator = RoundGenerator::new(config.group_size, config.seed);
    let mut tracker = EncounterTracker::new(&roster);

    let mut rounds = Vec::with_capacity(config.rounds as usize);
    for n in 1..=config.rounds {
        let round = generator.next_round(&roster);
        tracker.record_round(&round);
        debug!(round = n, tables = round.tables.len(), "recorded round");
        rounds.push(round);
    }

    let stats = tracker.snapshot();
    Ok(ScheduleOutcome { rounds, stats })
}
