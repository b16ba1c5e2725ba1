use rand::seq::SliceRandom;
use rand::SeedableRng;
use rand_pcg::Pcg64;

use speed_meeting_shared::plan::{Group, ParticipantId, Round};

/// Produces one random repartition of the roster per call. The only state
/// carried between calls is the RNG, so every round is an independent
/// uniform permutation sliced into consecutive tables.
pub struct RoundGenerator {
    group_size: usize,
    rng: Pcg64,
}

impl RoundGenerator {
    pub fn new(group_size: u32, seed: u64) -> Self {
        Self {
            group_size: (group_size as usize).max(1),
            rng: Pcg64::seed_from_u64(seed),
        }
    }

    /// Shuffle a copy of the roster and slice it into tables of
    /// `group_size`, the final table holding any remainder.
    pub fn next_round(&mut self, roster: &[ParticipantId]) -> Round {
        let mut order = roster.to_vec();
        order.shuffle(&mut self.rng);
        let tables = order
            .chunks(self.group_size)
            .map(|members| Group { members: members.to_vec() })
            .collect();
        Round { tables }
    }
}
