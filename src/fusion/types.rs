// fusion/types.rs
//
// Core transcript data types: transcription segments, speaker turns, and the
// fused speaker-attributed output.

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// A contiguous span of transcribed text with recording-relative timestamps.
///
/// Produced by the transcription collaborator; immutable once created.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TranscriptSegment {
    pub text: String,
    /// Start time in seconds from recording start
    pub start: f64,
    /// End time in seconds from recording start
    pub end: f64,
    /// Confidence reported by the transcription model (0.0 to 1.0)
    pub source_confidence: f32,
}

impl TranscriptSegment {
    pub fn new(text: impl Into<String>, start: f64, end: f64, source_confidence: f32) -> Self {
        Self {
            text: text.into(),
            start,
            end,
            source_confidence,
        }
    }

    /// Segment duration in seconds
    pub fn duration(&self) -> f64 {
        self.end - self.start
    }

    /// A segment is fusable only if it has positive duration
    pub fn has_positive_duration(&self) -> bool {
        self.end > self.start
    }
}

/// A time span attributed to one speaker by the diarization collaborator
/// (or by the fallback controller).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SpeakerTurn {
    pub speaker_index: usize,
    /// Start time in seconds from recording start
    pub start: f64,
    /// End time in seconds from recording start
    pub end: f64,
}

impl SpeakerTurn {
    pub fn new(speaker_index: usize, start: f64, end: f64) -> Self {
        Self {
            speaker_index,
            start,
            end,
        }
    }

    pub fn duration(&self) -> f64 {
        self.end - self.start
    }
}

/// A transcript segment with speaker attribution.
///
/// Created exclusively by the fusion engine, one per input segment, in input
/// order. Timing and text are carried over from the source segment unchanged.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FusedSegment {
    pub text: String,
    pub start: f64,
    pub end: f64,
    /// `None` when no diarization turn overlapped this segment
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub speaker_index: Option<usize>,
    /// Overlap with the winning turn divided by segment duration (0.0 to 1.0).
    /// Exactly 0.0 only for unattributed segments.
    pub confidence: f32,
}

impl FusedSegment {
    pub fn duration(&self) -> f64 {
        self.end - self.start
    }

    /// Whitespace-token count; a cheap approximation, not locale-aware.
    pub fn word_count(&self) -> usize {
        self.text.split_whitespace().count()
    }
}

/// A complete speaker-attributed transcript.
///
/// Owned by the caller; the fusion engine returns it and retains no reference.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DiarizedTranscript {
    /// Fused segments sorted non-decreasing by `start`, in transcription order
    pub segments: Vec<FusedSegment>,
    /// Number of distinct speakers attributed in `segments`
    pub speaker_count: usize,
    /// Recording duration in seconds
    pub total_duration: f64,
    /// True when the turns came from the single-speaker fallback rather than
    /// real diarization. Must be surfaced wherever confidence is surfaced.
    #[serde(default)]
    pub degraded: bool,
}

impl DiarizedTranscript {
    /// Distinct speaker indices attributed in this transcript, ascending.
    ///
    /// This is the valid set for identity assignment.
    pub fn speaker_indices(&self) -> BTreeSet<usize> {
        self.segments
            .iter()
            .filter_map(|s| s.speaker_index)
            .collect()
    }

    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    pub fn len(&self) -> usize {
        self.segments.len()
    }
}
