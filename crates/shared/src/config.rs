use thiserror::Error;

// Reference event parameters
pub const BASELINE_PARTICIPANTS: u32 = 50;
pub const BASELINE_GROUP_SIZE: u32 = 5;
pub const BASELINE_ROUNDS: u32 = 10; // can be raised for more unique encounters
pub const BASELINE_SEED: u64 = 42;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("population must be at least 1 (got {0})")]
    EmptyPopulation(u32),
    #[error("group size must be at least 1 (got {0})")]
    ZeroGroupSize(u32),
    #[error("round count must be at least 1 (got {0})")]
    ZeroRounds(u32),
}

#[derive(Debug, Clone)]
pub struct ScheduleConfig {
    pub participants: u32,
    pub group_size: u32,
    pub rounds: u32,
    pub seed: u64,
}

impl Default for ScheduleConfig {
    fn default() -> Self {
        Self {
            participants: BASELINE_PARTICIPANTS,
            group_size: BASELINE_GROUP_SIZE,
            rounds: BASELINE_ROUNDS,
            seed: BASELINE_SEED,
        }
    }
}

impl ScheduleConfig {
    /// Fail fast on configurations that cannot produce a usable schedule.
    /// A group size larger than the population is degenerate but valid:
    /// every round is a single undersized table.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.participants == 0 {
            return Err(ConfigError::EmptyPopulation(self.participants));
        }
        if self.group_size == 0 {
            return Err(ConfigError::ZeroGroupSize(self.group_size));
        }
        if self.rounds == 0 {
            return Err(ConfigError::ZeroRounds(self.rounds));
        }
        Ok(())
    }

    /// Tables per round, counting the ragged final table if any.
    pub fn group_count(&self) -> u32 {
        self.participants.div_ceil(self.group_size)
    }
}
