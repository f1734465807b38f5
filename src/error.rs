// Error types for the fusion core
//
// Diarization *unavailability* is deliberately not an error: it is a value
// (`providers::DiarizationOutcome::Unavailable`) so the fallback branch is an
// explicit match. Only an input-specific diarization *failure* is fatal.

use thiserror::Error;

/// All errors produced by the fusion core.
#[derive(Debug, Error)]
pub enum FusionError {
    /// A diarization turn with non-positive duration. Fatal to this recording's fusion.
    #[error("invalid speaker turn for speaker {speaker_index}: [{start:.3}, {end:.3}) has non-positive duration")]
    InvalidTurn {
        speaker_index: usize,
        start: f64,
        end: f64,
    },

    /// A transcript segment with non-positive duration. Must be filtered or
    /// rejected before fusion: confidence divides by segment duration.
    #[error("invalid transcript segment: [{start:.3}, {end:.3}) has non-positive duration")]
    InvalidSegment { start: f64, end: f64 },

    /// Identity assignment referenced a speaker index absent from the transcript.
    #[error("speaker index {speaker_index} does not appear in this transcript")]
    UnknownSpeaker { speaker_index: usize },

    /// The transcription collaborator failed. Fatal to this recording.
    #[error("transcription failed ({source_name}): {message}")]
    Transcription { source_name: String, message: String },

    /// The diarization collaborator failed on this specific input. Fatal;
    /// never downgraded to the single-speaker fallback.
    #[error("diarization failed ({source_name}): {message}")]
    DiarizationFailed { source_name: String, message: String },

    /// A model handle was initialized twice.
    #[error("{what} is already initialized")]
    AlreadyInitialized { what: &'static str },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Escape hatch for collaborator implementations wrapping engine errors.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

pub type Result<T> = std::result::Result<T, FusionError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages_name_the_offending_values() {
        let err = FusionError::InvalidTurn {
            speaker_index: 2,
            start: 4.0,
            end: 4.0,
        };
        assert_eq!(
            err.to_string(),
            "invalid speaker turn for speaker 2: [4.000, 4.000) has non-positive duration"
        );

        let err = FusionError::UnknownSpeaker { speaker_index: 9 };
        assert_eq!(err.to_string(), "speaker index 9 does not appear in this transcript");
    }

    #[test]
    fn test_engine_errors_convert_via_anyhow() {
        let err: FusionError = anyhow::anyhow!("onnx session died").into();
        assert!(matches!(err, FusionError::Other(_)));
        assert_eq!(err.to_string(), "onnx session died");
    }
}
