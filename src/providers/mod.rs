// providers/mod.rs
//
// Collaborator contracts: the transcription and diarization models live
// behind these traits and are swappable (real engines in production, fakes
// in tests).

pub mod handle;

use async_trait::async_trait;

use crate::error::Result;
use crate::fusion::types::{SpeakerTurn, TranscriptSegment};

pub use handle::ModelHandle;

/// Outcome of a diarization request.
///
/// Unavailability is a value, not an error, so the caller's fallback branch
/// is an explicit match. A failure on a specific input is returned as
/// `Err(FusionError::DiarizationFailed)` instead and stays fatal.
#[derive(Debug, Clone)]
pub enum DiarizationOutcome {
    /// Speaker turns for the recording. An empty list is a legitimate result
    /// for a valid input (silence, music) and does not trigger the fallback.
    Turns(Vec<SpeakerTurn>),
    /// No diarization is possible right now (model not loaded, feature
    /// disabled, timeout). Triggers the single-speaker fallback.
    Unavailable { reason: String },
}

/// A source of transcription segments for an audio buffer.
#[async_trait]
pub trait TranscriptionSource: Send + Sync {
    /// Transcribe the recording. An error is fatal to this recording.
    async fn transcribe(&self, samples: &[f32], sample_rate: u32)
        -> Result<Vec<TranscriptSegment>>;

    /// Name used in log lines to attribute output to a source.
    fn source_name(&self) -> &str;
}

/// A source of speaker turns for an audio buffer.
#[async_trait]
pub trait DiarizationSource: Send + Sync {
    /// Diarize the recording, or report unavailability.
    async fn diarize(&self, samples: &[f32], sample_rate: u32) -> Result<DiarizationOutcome>;

    fn source_name(&self) -> &str;
}
