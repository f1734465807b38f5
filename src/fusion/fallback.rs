// fusion/fallback.rs
//
// Single-speaker fallback for recordings where diarization is unavailable.
//
// Unavailability (no model loaded, feature disabled, timeout) is not the same
// as a diarization failure on a specific input: the former degrades to a
// single-speaker transcript here, the latter stays fatal and is never
// silently downgraded.

use log::warn;

use crate::error::Result;
use crate::fusion::engine::{distinct_speaker_count, fuse_against_index};
use crate::fusion::turn_index::TurnIndex;
use crate::fusion::types::{DiarizedTranscript, SpeakerTurn, TranscriptSegment};

/// Speaker index assigned to all speech when diarization is unavailable.
pub const FALLBACK_SPEAKER_INDEX: usize = 0;

/// Synthesize the fallback turn set: one turn spanning the whole recording.
///
/// The turn runs to `max(total_duration, last segment end)` so every segment
/// is fully contained even when a model reports a segment ending marginally
/// past the decoded audio duration.
pub fn fallback_turns(segments: &[TranscriptSegment], total_duration: f64) -> Vec<SpeakerTurn> {
    let end = segments
        .iter()
        .fold(total_duration, |acc, s| acc.max(s.end));

    vec![SpeakerTurn::new(FALLBACK_SPEAKER_INDEX, 0.0, end)]
}

/// Fuse without diarization: every segment is attributed to speaker 0 with
/// confidence 1.0 and the transcript is flagged `degraded`.
///
/// The 1.0 confidence means "fully contained in the only known turn", not
/// model certainty; callers surfacing confidence must surface `degraded`
/// alongside it.
pub fn fuse_degraded(
    segments: Vec<TranscriptSegment>,
    total_duration: f64,
) -> Result<DiarizedTranscript> {
    warn!(
        "Diarization unavailable: attributing all {} segments to speaker {} (degraded transcript)",
        segments.len(),
        FALLBACK_SPEAKER_INDEX
    );

    if segments.is_empty() {
        return Ok(DiarizedTranscript {
            segments: Vec::new(),
            speaker_count: 0,
            total_duration: total_duration.max(0.0),
            degraded: true,
        });
    }

    let turns = fallback_turns(&segments, total_duration);
    let total_duration = turns[0].end;
    let index = TurnIndex::new(turns)?;
    let fused = fuse_against_index(segments, &index)?;
    let speaker_count = distinct_speaker_count(&fused);

    Ok(DiarizedTranscript {
        segments: fused,
        speaker_count,
        total_duration,
        degraded: true,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fusion::types::TranscriptSegment;

    fn seg(text: &str, start: f64, end: f64) -> TranscriptSegment {
        TranscriptSegment::new(text, start, end, 0.8)
    }

    #[test]
    fn test_all_segments_go_to_speaker_zero_with_full_confidence() {
        let transcript = fuse_degraded(
            vec![
                seg("first", 0.0, 4.0),
                seg("second", 4.0, 9.0),
                seg("third", 9.0, 12.0),
            ],
            12.0,
        )
        .unwrap();

        assert!(transcript.degraded);
        assert_eq!(transcript.speaker_count, 1);
        assert!((transcript.total_duration - 12.0).abs() < 1e-9);
        for fused in &transcript.segments {
            assert_eq!(fused.speaker_index, Some(FALLBACK_SPEAKER_INDEX));
            assert!((fused.confidence - 1.0).abs() < 1e-6);
        }
    }

    #[test]
    fn test_fallback_turn_covers_overhanging_segment() {
        // Model reported a segment ending past the decoded duration
        let transcript = fuse_degraded(vec![seg("tail", 9.5, 12.4)], 12.0).unwrap();

        assert!((transcript.total_duration - 12.4).abs() < 1e-9);
        assert!((transcript.segments[0].confidence - 1.0).abs() < 1e-6);
    }

    #[test]
    fn test_empty_transcript_is_still_degraded() {
        let transcript = fuse_degraded(Vec::new(), 30.0).unwrap();
        assert!(transcript.degraded);
        assert!(transcript.is_empty());
        assert_eq!(transcript.speaker_count, 0);
        assert!((transcript.total_duration - 30.0).abs() < 1e-9);
    }
}
