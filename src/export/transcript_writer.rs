// export/transcript_writer.rs
//
// Write fused transcripts to disk, plain text or structured JSON.

use std::path::{Path, PathBuf};

use chrono::Utc;
use log::info;
use serde_json::json;

use crate::error::Result;
use crate::fusion::types::DiarizedTranscript;
use crate::render::render_transcript;
use crate::speakers::registry::SpeakerRegistry;
use crate::speakers::stats::compute_statistics;

/// Sanitize a recording name for filesystem use.
pub fn sanitize_filename(name: &str) -> String {
    name.chars()
        .map(|c| match c {
            '/' | '\\' | ':' | '*' | '?' | '"' | '<' | '>' | '|' => '_',
            c if c.is_control() => '_',
            c => c,
        })
        .collect::<String>()
        .trim()
        .to_string()
}

fn output_folder(output_path: &Path, recording_name: Option<&str>) -> Result<PathBuf> {
    let folder = match recording_name {
        Some(name) => output_path.join(sanitize_filename(name)),
        None => output_path.to_path_buf(),
    };

    if !folder.exists() {
        std::fs::create_dir_all(&folder)?;
    }

    Ok(folder)
}

/// Write the rendered transcript as plain text alongside the recording.
///
/// Returns the path of the written file.
pub fn write_transcript_text(
    transcript: &DiarizedTranscript,
    registry: &SpeakerRegistry,
    output_path: &Path,
    recording_name: Option<&str>,
) -> Result<PathBuf> {
    let timestamp = Utc::now().format("%Y-%m-%d_%H-%M-%S").to_string();
    let folder = output_folder(output_path, recording_name)?;

    let file_path = folder.join(format!("transcript_{}.txt", timestamp));
    std::fs::write(&file_path, render_transcript(transcript, registry))?;

    info!("Wrote transcript text to {}", file_path.display());
    Ok(file_path)
}

/// Write the structured transcript to a JSON file: segments with speaker
/// attribution, resolved profiles, per-speaker statistics, and the degraded
/// flag (which must accompany the confidences).
pub fn write_transcript_json(
    transcript: &DiarizedTranscript,
    registry: &SpeakerRegistry,
    output_path: &Path,
    recording_name: Option<&str>,
) -> Result<PathBuf> {
    let timestamp = Utc::now().format("%Y-%m-%d_%H-%M-%S").to_string();
    let folder = output_folder(output_path, recording_name)?;

    let file_path = folder.join(format!("transcript_{}.json", timestamp));

    let speakers: Vec<_> = transcript
        .speaker_indices()
        .into_iter()
        .map(|index| registry.resolve(index))
        .collect();

    let transcript_json = json!({
        "version": "1.0",
        "created_at": Utc::now().to_rfc3339(),
        "recording_name": recording_name,
        "total_duration": transcript.total_duration,
        "speaker_count": transcript.speaker_count,
        "degraded": transcript.degraded,
        "speakers": speakers,
        "segments": transcript.segments,
        "statistics": compute_statistics(transcript),
    });

    let json_string = serde_json::to_string_pretty(&transcript_json)?;
    std::fs::write(&file_path, json_string)?;

    info!("Wrote transcript JSON to {}", file_path.display());
    Ok(file_path)
}
