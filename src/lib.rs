// transcript-fusion - Segment-speaker fusion engine
//
// Fuses two independently produced model outputs - transcription segments
// (text + time span) and diarization turns (speaker + time span) - into one
// speaker-attributed transcript, with per-speaker statistics, post-hoc
// identity relabeling, and a single-speaker fallback for recordings where
// diarization is unavailable.

// Core modules
pub mod error;
pub mod export;
pub mod fusion;
pub mod pipeline;
pub mod providers;
pub mod render;
pub mod speakers;

// Re-export the public surface
pub use error::{FusionError, Result};
pub use export::{write_transcript_json, write_transcript_text};
pub use fusion::{
    fallback_turns, fuse, fuse_degraded, overlap, sanitize_segments, DiarizedTranscript,
    FusedSegment, SpeakerTurn, TranscriptSegment, TurnIndex, FALLBACK_SPEAKER_INDEX,
};
pub use pipeline::process_recording;
pub use providers::{DiarizationOutcome, DiarizationSource, ModelHandle, TranscriptionSource};
pub use render::{format_clock, render_segment, render_transcript, DEGRADED_NOTICE};
pub use speakers::{
    compute_statistics, SpeakerProfile, SpeakerRegistry, SpeakerStatistics, TranscriptStatistics,
};
