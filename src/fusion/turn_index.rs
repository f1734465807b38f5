// fusion/turn_index.rs
//
// Queryable ordered collection of speaker turns.

use std::cmp::Ordering;

use crate::error::{FusionError, Result};
use crate::fusion::interval::overlap;
use crate::fusion::types::SpeakerTurn;

/// Speaker turns sorted by start time, supporting range queries.
///
/// Turn counts per recording are small (tens to low hundreds), so queries are
/// a linear scan rather than an interval tree.
#[derive(Debug, Clone)]
pub struct TurnIndex {
    turns: Vec<SpeakerTurn>,
}

impl TurnIndex {
    /// Build an index from diarization output.
    ///
    /// Rejects any turn with non-positive duration; a malformed turn is fatal
    /// to this recording's fusion.
    pub fn new(mut turns: Vec<SpeakerTurn>) -> Result<Self> {
        for turn in &turns {
            if turn.end <= turn.start {
                return Err(FusionError::InvalidTurn {
                    speaker_index: turn.speaker_index,
                    start: turn.start,
                    end: turn.end,
                });
            }
        }

        turns.sort_by(|a, b| a.start.partial_cmp(&b.start).unwrap_or(Ordering::Equal));

        Ok(Self { turns })
    }

    /// All turns overlapping `[start, end)`, in ascending start order.
    pub fn turns_overlapping(&self, start: f64, end: f64) -> Vec<&SpeakerTurn> {
        self.turns
            .iter()
            .filter(|turn| overlap(start, end, turn.start, turn.end) > 0.0)
            .collect()
    }

    pub fn turns(&self) -> &[SpeakerTurn] {
        &self.turns
    }

    pub fn len(&self) -> usize {
        self.turns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.turns.is_empty()
    }

    /// Latest end time across all turns, 0.0 when empty.
    pub fn max_end(&self) -> f64 {
        self.turns.iter().fold(0.0, |acc, t| acc.max(t.end))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn turn(speaker: usize, start: f64, end: f64) -> SpeakerTurn {
        SpeakerTurn::new(speaker, start, end)
    }

    #[test]
    fn test_sorts_by_start() {
        let index = TurnIndex::new(vec![
            turn(1, 5.0, 8.0),
            turn(0, 0.0, 5.0),
            turn(2, 8.0, 9.0),
        ])
        .unwrap();

        let starts: Vec<f64> = index.turns().iter().map(|t| t.start).collect();
        assert_eq!(starts, vec![0.0, 5.0, 8.0]);
    }

    #[test]
    fn test_rejects_non_positive_duration() {
        let err = TurnIndex::new(vec![turn(0, 3.0, 3.0)]).unwrap_err();
        assert!(matches!(err, FusionError::InvalidTurn { speaker_index: 0, .. }));

        let err = TurnIndex::new(vec![turn(1, 4.0, 2.0)]).unwrap_err();
        assert!(matches!(err, FusionError::InvalidTurn { speaker_index: 1, .. }));
    }

    #[test]
    fn test_range_query_returns_overlapping_in_order() {
        let index = TurnIndex::new(vec![
            turn(2, 8.0, 12.0),
            turn(0, 0.0, 5.0),
            turn(1, 4.0, 8.0),
        ])
        .unwrap();

        // [4.5, 9.0) touches all three
        let hits = index.turns_overlapping(4.5, 9.0);
        let speakers: Vec<usize> = hits.iter().map(|t| t.speaker_index).collect();
        assert_eq!(speakers, vec![0, 1, 2]);

        // [5.0, 6.0) only overlaps the middle turn: [0,5) ends exactly there
        let hits = index.turns_overlapping(5.0, 6.0);
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].speaker_index, 1);
    }

    #[test]
    fn test_range_query_no_hits() {
        let index = TurnIndex::new(vec![turn(0, 0.0, 2.0)]).unwrap();
        assert!(index.turns_overlapping(3.0, 4.0).is_empty());
    }

    #[test]
    fn test_empty_index() {
        let index = TurnIndex::new(Vec::new()).unwrap();
        assert!(index.is_empty());
        assert!(index.turns_overlapping(0.0, 100.0).is_empty());
        assert_eq!(index.max_end(), 0.0);
    }
}
