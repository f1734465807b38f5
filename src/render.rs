// render.rs
//
// Human-readable transcript rendering.

use crate::fusion::types::{DiarizedTranscript, FusedSegment};
use crate::speakers::registry::SpeakerRegistry;

/// Notice prepended to degraded transcripts. Fallback confidences read as
/// 1.0, so the degraded flag has to travel with any rendered output.
pub const DEGRADED_NOTICE: &str =
    "(diarization unavailable - all speech attributed to a single speaker)";

/// Format recording-relative seconds as mm:ss.
///
/// Recordings past an hour keep counting minutes (90:05 rather than 1:30:05).
pub fn format_clock(seconds: f64) -> String {
    let total_seconds = seconds.max(0.0).floor() as u64;
    let minutes = total_seconds / 60;
    let secs = total_seconds % 60;

    format!("{:02}:{:02}", minutes, secs)
}

/// Render one fused segment as a transcript line:
/// `{resolved display name}: [{mm:ss}-{mm:ss}] {text}`
pub fn render_segment(segment: &FusedSegment, registry: &SpeakerRegistry) -> String {
    format!(
        "{}: [{}-{}] {}",
        registry.resolve_name(segment.speaker_index),
        format_clock(segment.start),
        format_clock(segment.end),
        segment.text
    )
}

/// Render the whole transcript, one line per segment in transcript order,
/// with the degraded notice prepended when applicable.
pub fn render_transcript(transcript: &DiarizedTranscript, registry: &SpeakerRegistry) -> String {
    let mut lines = Vec::with_capacity(transcript.segments.len() + 1);

    if transcript.degraded {
        lines.push(DEGRADED_NOTICE.to_string());
    }

    for segment in &transcript.segments {
        lines.push(render_segment(segment, registry));
    }

    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fusion::types::FusedSegment;

    fn fused(text: &str, start: f64, end: f64, speaker_index: Option<usize>) -> FusedSegment {
        FusedSegment {
            text: text.to_string(),
            start,
            end,
            speaker_index,
            confidence: if speaker_index.is_some() { 0.9 } else { 0.0 },
        }
    }

    #[test]
    fn test_format_clock() {
        assert_eq!(format_clock(0.0), "00:00");
        assert_eq!(format_clock(65.4), "01:05");
        assert_eq!(format_clock(3599.9), "59:59");
        // Minutes keep counting past an hour
        assert_eq!(format_clock(5405.0), "90:05");
    }

    #[test]
    fn test_render_segment_with_default_and_assigned_names() {
        let registry = SpeakerRegistry::new();
        let line = render_segment(&fused("good morning", 0.0, 2.5, Some(0)), &registry);
        assert_eq!(line, "Speaker 1: [00:00-00:02] good morning");

        let line = render_segment(&fused("who said this", 61.0, 64.0, None), &registry);
        assert_eq!(line, "Unknown: [01:01-01:04] who said this");
    }

    #[test]
    fn test_render_transcript_order_and_degraded_notice() {
        let registry = SpeakerRegistry::new();
        let transcript = DiarizedTranscript {
            segments: vec![
                fused("first", 0.0, 1.0, Some(0)),
                fused("second", 1.0, 2.0, Some(0)),
            ],
            speaker_count: 1,
            total_duration: 2.0,
            degraded: true,
        };

        let rendered = render_transcript(&transcript, &registry);
        let lines: Vec<&str> = rendered.lines().collect();
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[0], DEGRADED_NOTICE);
        assert!(lines[1].ends_with("first"));
        assert!(lines[2].ends_with("second"));
    }

    #[test]
    fn test_rendering_reflects_registry_without_touching_transcript() {
        use crate::fusion::{fuse, SpeakerTurn, TranscriptSegment};

        let transcript = fuse(
            vec![TranscriptSegment::new("hello there", 0.0, 2.0, 0.9)],
            vec![SpeakerTurn::new(0, 0.0, 2.0)],
        )
        .unwrap();
        let before = transcript.segments[0].clone();

        let mut registry = SpeakerRegistry::new();
        registry
            .assign(&transcript, 0, "Dana", None, None)
            .unwrap();

        let rendered = render_transcript(&transcript, &registry);
        assert!(rendered.starts_with("Dana: "));

        // Relabeling is rendering-only
        assert_eq!(transcript.segments[0].speaker_index, before.speaker_index);
        assert_eq!(transcript.segments[0].confidence, before.confidence);
    }
}
