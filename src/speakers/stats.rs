// Per-speaker statistics aggregation
// Always a projection of the fused segment list, recomputed on demand.

use std::collections::BTreeMap;

use log::debug;
use serde::{Deserialize, Serialize};

use crate::fusion::types::DiarizedTranscript;

/// Talk-time and confidence statistics for one speaker.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SpeakerStatistics {
    pub speaker_index: usize,
    pub segment_count: usize,
    /// Total attributed talk time in seconds
    pub total_time: f64,
    /// Arithmetic mean of segment confidences (0.0 to 1.0)
    pub mean_confidence: f32,
    /// Whitespace-token word count across this speaker's segments
    pub word_count: usize,
}

/// Statistics for a whole transcript: one row per attributed speaker plus
/// the unattributed tallies.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TranscriptStatistics {
    /// Per-speaker rows, ascending by speaker index
    pub speakers: Vec<SpeakerStatistics>,
    /// Segments no turn overlapped
    pub unattributed_count: usize,
    /// Total time of unattributed segments in seconds
    pub unattributed_time: f64,
}

impl TranscriptStatistics {
    pub fn for_speaker(&self, speaker_index: usize) -> Option<&SpeakerStatistics> {
        self.speakers.iter().find(|s| s.speaker_index == speaker_index)
    }
}

#[derive(Default)]
struct Accumulator {
    segment_count: usize,
    total_time: f64,
    confidence_sum: f64,
    word_count: usize,
}

/// Compute per-speaker statistics from the current fused segment list.
///
/// Never cached: fused segments are immutable, but callers may ask at any
/// point in the pipeline, so every call walks the list fresh.
pub fn compute_statistics(transcript: &DiarizedTranscript) -> TranscriptStatistics {
    let mut groups: BTreeMap<usize, Accumulator> = BTreeMap::new();
    let mut unattributed_count = 0;
    let mut unattributed_time = 0.0;

    for segment in &transcript.segments {
        match segment.speaker_index {
            Some(speaker_index) => {
                let acc = groups.entry(speaker_index).or_default();
                acc.segment_count += 1;
                acc.total_time += segment.duration();
                acc.confidence_sum += f64::from(segment.confidence);
                acc.word_count += segment.word_count();
            }
            None => {
                unattributed_count += 1;
                unattributed_time += segment.duration();
            }
        }
    }

    let speakers = groups
        .into_iter()
        .map(|(speaker_index, acc)| SpeakerStatistics {
            speaker_index,
            segment_count: acc.segment_count,
            total_time: acc.total_time,
            mean_confidence: (acc.confidence_sum / acc.segment_count as f64) as f32,
            word_count: acc.word_count,
        })
        .collect::<Vec<_>>();

    debug!(
        "Computed statistics: {} speakers, {} unattributed segments ({:.2}s)",
        speakers.len(),
        unattributed_count,
        unattributed_time
    );

    TranscriptStatistics {
        speakers,
        unattributed_count,
        unattributed_time,
    }
}
