use std::collections::{HashMap, HashSet};

use speed_meeting_shared::plan::{ParticipantId, Round};
use speed_meeting_shared::result::EncounterStats;

/// Cumulative record of who has shared a table with whom. The partner
/// relation is symmetric (every ordered pair is inserted) and irreflexive
/// (a participant never records itself), and only grows.
pub struct EncounterTracker {
    partners: HashMap<ParticipantId, HashSet<ParticipantId>>,
}

impl EncounterTracker {
    /// Every roster member gets an entry up front, so statistics cover
    /// participants who never met anyone.
    pub fn new(roster: &[ParticipantId]) -> Self {
        Self {
            partners: roster.iter().map(|&id| (id, HashSet::new())).collect(),
        }
    }

    /// Fold one round into the cumulative record. Set insertion makes
    /// repeated co-seatings (and repeated calls with the same round)
    /// harmless for the derived statistics.
    pub fn record_round(&mut self, round: &Round) {
        for table in &round.tables {
            for &a in &table.members {
                for &b in &table.members {
                    if a != b {
                        self.partners.entry(a).or_default().insert(b);
                    }
                }
            }
        }
    }

    pub fn partners(&self, id: ParticipantId) -> Option<&HashSet<ParticipantId>> {
        self.partners.get(&id)
    }

    /// Recompute statistics in full from the current sets. Pure read:
    /// callable at any point, including before the first round.
    pub fn snapshot(&self) -> EncounterStats {
        let counts: Vec<u64> = self.partners.values().map(|set| set.len() as u64).collect();
        EncounterStats::from_counts(&counts)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use speed_meeting_shared::plan::{roster, Group};

    fn round_of(tables: &[&[ParticipantId]]) -> Round {
        Round {
            tables: tables.iter().map(|m| Group { members: m.to_vec() }).collect(),
        }
    }

    #[test]
    fn test_symmetry_and_irreflexivity() {
        let roster = roster(6);
        let mut tracker = EncounterTracker::new(&roster);
        tracker.record_round(&round_of(&[&[1, 2, 3], &[4, 5, 6]]));

        for &a in &roster {
            let set = tracker.partners(a).unwrap();
            assert!(!set.contains(&a));
            for &b in set {
                assert!(tracker.partners(b).unwrap().contains(&a));
            }
        }
    }

    #[test]
    fn test_recording_same_round_twice_changes_nothing() {
        let roster = roster(6);
        let mut tracker = EncounterTracker::new(&roster);
        let round = round_of(&[&[1, 2, 3], &[4, 5, 6]]);

        tracker.record_round(&round);
        let first = tracker.snapshot();
        tracker.record_round(&round);
        assert_eq!(tracker.snapshot(), first);
    }

    #[test]
    fn test_monotonic_growth() {
        let roster = roster(4);
        let mut tracker = EncounterTracker::new(&roster);

        tracker.record_round(&round_of(&[&[1, 2], &[3, 4]]));
        let before: HashSet<ParticipantId> = tracker.partners(1).unwrap().clone();

        tracker.record_round(&round_of(&[&[1, 3], &[2, 4]]));
        let after = tracker.partners(1).unwrap();
        assert!(before.is_subset(after));
        assert!(after.len() > before.len());
    }

    #[test]
    fn test_snapshot_before_any_round() {
        let tracker = EncounterTracker::new(&roster(3));
        let stats = tracker.snapshot();
        assert_eq!(stats.total, 0);
        assert_eq!(stats.coverage_pct, 0.0);
    }

    #[test]
    fn test_snapshot_does_not_mutate() {
        let roster = roster(6);
        let mut tracker = EncounterTracker::new(&roster);
        tracker.record_round(&round_of(&[&[1, 2, 3], &[4, 5, 6]]));
        assert_eq!(tracker.snapshot(), tracker.snapshot());
    }

    #[test]
    fn test_full_table_saturates() {
        let roster = roster(5);
        let mut tracker = EncounterTracker::new(&roster);
        let everyone = round_of(&[&[1, 2, 3, 4, 5]]);

        tracker.record_round(&everyone);
        let stats = tracker.snapshot();
        assert_eq!(stats.min, 4);
        assert_eq!(stats.max, 4);
        assert!((stats.coverage_pct - 100.0).abs() < 1e-9);

        // further rounds cannot add anything
        tracker.record_round(&everyone);
        tracker.record_round(&everyone);
        assert_eq!(tracker.snapshot(), stats);
    }
}
