// fusion/engine.rs
//
// The fusion algorithm: maps transcription segments onto diarization turns
// by temporal overlap, producing one speaker-attributed segment per input
// segment, in input order.

use std::collections::BTreeSet;

use log::{debug, info, warn};

use crate::error::{FusionError, Result};
use crate::fusion::interval::overlap;
use crate::fusion::turn_index::TurnIndex;
use crate::fusion::types::{DiarizedTranscript, FusedSegment, SpeakerTurn, TranscriptSegment};

/// Fuse transcription segments with diarization turns.
///
/// Each segment is attributed to the overlapping turn with the greatest
/// overlap duration (ties broken by earliest turn start), with
/// `confidence = overlap / segment_duration`. Segments with no overlapping
/// turn get `speaker_index = None` and `confidence = 0.0`. The mapping is
/// 1:1 and order-preserving: segments are never reordered, merged, split
/// across speakers, or dropped.
///
/// Fails with `InvalidTurn` on a malformed turn and `InvalidSegment` on a
/// non-positive-duration segment; use [`sanitize_segments`] first to drop
/// bad segments instead of failing.
pub fn fuse(
    segments: Vec<TranscriptSegment>,
    turns: Vec<SpeakerTurn>,
) -> Result<DiarizedTranscript> {
    let index = TurnIndex::new(turns)?;

    let total_duration = max_segment_end(&segments).max(index.max_end());
    let fused = fuse_against_index(segments, &index)?;
    let speaker_count = distinct_speaker_count(&fused);
    let attributed = fused.iter().filter(|s| s.speaker_index.is_some()).count();

    info!(
        "Fused {} segments against {} turns: {} attributed across {} speakers, {} unattributed",
        fused.len(),
        index.len(),
        attributed,
        speaker_count,
        fused.len() - attributed
    );

    Ok(DiarizedTranscript {
        segments: fused,
        speaker_count,
        total_duration,
        degraded: false,
    })
}

/// Drop segments the fusion contract rejects (non-positive duration),
/// logging each one.
///
/// For pipelines that prefer skipping malformed model output over failing
/// the whole recording.
pub fn sanitize_segments(segments: Vec<TranscriptSegment>) -> Vec<TranscriptSegment> {
    let before = segments.len();
    let kept: Vec<TranscriptSegment> = segments
        .into_iter()
        .filter(|segment| {
            if segment.has_positive_duration() {
                true
            } else {
                warn!(
                    "Dropping transcript segment with non-positive duration at {:.3}s: '{}'",
                    segment.start, segment.text
                );
                false
            }
        })
        .collect();

    if kept.len() < before {
        info!(
            "Sanitized transcript segments: kept {} of {}",
            kept.len(),
            before
        );
    }

    kept
}

/// Core sweep shared by the normal and degraded paths.
pub(crate) fn fuse_against_index(
    segments: Vec<TranscriptSegment>,
    index: &TurnIndex,
) -> Result<Vec<FusedSegment>> {
    let mut fused = Vec::with_capacity(segments.len());

    for segment in segments {
        if !segment.has_positive_duration() {
            return Err(FusionError::InvalidSegment {
                start: segment.start,
                end: segment.end,
            });
        }

        let candidates = index.turns_overlapping(segment.start, segment.end);

        let (speaker_index, confidence) = match best_turn(&candidates, segment.start, segment.end)
        {
            Some((turn, overlap_duration)) => {
                let confidence = (overlap_duration / segment.duration()).min(1.0) as f32;
                debug!(
                    "Segment [{:.2}, {:.2}) attributed to speaker {} ({:.2}s overlap, confidence {:.2})",
                    segment.start, segment.end, turn.speaker_index, overlap_duration, confidence
                );
                (Some(turn.speaker_index), confidence)
            }
            None => {
                debug!(
                    "Segment [{:.2}, {:.2}) has no overlapping turn, leaving unattributed",
                    segment.start, segment.end
                );
                (None, 0.0)
            }
        };

        fused.push(FusedSegment {
            text: segment.text,
            start: segment.start,
            end: segment.end,
            speaker_index,
            confidence,
        });
    }

    Ok(fused)
}

/// Pick the turn with the greatest overlap against `[start, end)`.
///
/// Candidates arrive in ascending start order; replacing the best only on
/// strictly greater overlap keeps the earliest-starting turn on ties, so
/// repeated runs on identical input yield identical output.
fn best_turn<'a>(
    candidates: &[&'a SpeakerTurn],
    start: f64,
    end: f64,
) -> Option<(&'a SpeakerTurn, f64)> {
    let mut best: Option<(&SpeakerTurn, f64)> = None;

    for &turn in candidates {
        let overlap_duration = overlap(start, end, turn.start, turn.end);
        match best {
            Some((_, best_overlap)) if overlap_duration <= best_overlap => {}
            _ => best = Some((turn, overlap_duration)),
        }
    }

    best
}

pub(crate) fn distinct_speaker_count(fused: &[FusedSegment]) -> usize {
    fused
        .iter()
        .filter_map(|s| s.speaker_index)
        .collect::<BTreeSet<usize>>()
        .len()
}

fn max_segment_end(segments: &[TranscriptSegment]) -> f64 {
    segments.iter().fold(0.0, |acc, s| acc.max(s.end))
}
