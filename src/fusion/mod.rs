// fusion/mod.rs
//
// Segment-speaker fusion: aligning transcription output with diarization
// output by temporal overlap.
//
// Module structure:
// - types.rs: TranscriptSegment, SpeakerTurn, FusedSegment, DiarizedTranscript
// - interval.rs: half-open interval overlap math
// - turn_index.rs: validated, queryable collection of speaker turns
// - engine.rs: the fusion sweep and segment sanitation
// - fallback.rs: single-speaker fallback when diarization is unavailable

pub mod engine;
pub mod fallback;
pub mod interval;
pub mod turn_index;
pub mod types;

pub use engine::{fuse, sanitize_segments};
pub use fallback::{fallback_turns, fuse_degraded, FALLBACK_SPEAKER_INDEX};
pub use interval::overlap;
pub use turn_index::TurnIndex;
pub use types::{DiarizedTranscript, FusedSegment, SpeakerTurn, TranscriptSegment};
