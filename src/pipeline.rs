// pipeline.rs
//
// Orchestration of one recording: transcribe, diarize, fuse. The expensive,
// blocking work happens inside the collaborators; fusion itself is a pure,
// synchronous function of their outputs, so recordings can be processed
// concurrently with no coordination.

use log::{error, info, warn};

use crate::error::Result;
use crate::fusion::engine::{fuse, sanitize_segments};
use crate::fusion::fallback::fuse_degraded;
use crate::fusion::types::DiarizedTranscript;
use crate::providers::{DiarizationOutcome, DiarizationSource, TranscriptionSource};

/// Produce a speaker-attributed transcript for one recording.
///
/// A transcription error is fatal. Diarization unavailability degrades to
/// the single-speaker fallback; a diarization failure on this input is
/// fatal and is never downgraded to the fallback: silently falling back
/// would mask a real model defect behind confident-looking output.
///
/// No step is retried here: fusion is deterministic, and retry policy for
/// the model invocations belongs to the caller.
pub async fn process_recording(
    transcription: &dyn TranscriptionSource,
    diarization: &dyn DiarizationSource,
    samples: &[f32],
    sample_rate: u32,
) -> Result<DiarizedTranscript> {
    let audio_duration = samples.len() as f64 / f64::from(sample_rate);
    info!(
        "Processing recording: {} samples at {} Hz ({:.2}s)",
        samples.len(),
        sample_rate,
        audio_duration
    );

    let raw_segments = transcription
        .transcribe(samples, sample_rate)
        .await
        .map_err(|e| {
            error!("{} failed: {}", transcription.source_name(), e);
            e
        })?;
    info!(
        "{} produced {} segments",
        transcription.source_name(),
        raw_segments.len()
    );

    let segments = sanitize_segments(raw_segments);
    if segments.is_empty() {
        warn!("No usable transcript segments, returning empty transcript");
        return Ok(DiarizedTranscript {
            segments: Vec::new(),
            speaker_count: 0,
            total_duration: audio_duration,
            degraded: false,
        });
    }

    match diarization.diarize(samples, sample_rate).await.map_err(|e| {
        error!("{} failed: {}", diarization.source_name(), e);
        e
    })? {
        DiarizationOutcome::Turns(turns) => {
            info!(
                "{} produced {} turns",
                diarization.source_name(),
                turns.len()
            );
            let mut transcript = fuse(segments, turns)?;
            // Content can end before the recording does
            transcript.total_duration = transcript.total_duration.max(audio_duration);
            Ok(transcript)
        }
        DiarizationOutcome::Unavailable { reason } => {
            warn!(
                "{} unavailable ({}), using single-speaker fallback",
                diarization.source_name(),
                reason
            );
            fuse_degraded(segments, audio_duration)
        }
    }
}
