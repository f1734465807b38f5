// Speaker identity registry
// Maps opaque speaker indices to human-assigned profiles; mutation never
// touches fused segments or statistics.

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use log::{debug, info};
use serde::{Deserialize, Serialize};

use crate::error::{FusionError, Result};
use crate::fusion::types::DiarizedTranscript;

/// A human-assigned identity for a speaker index.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SpeakerProfile {
    pub speaker_index: usize,
    pub display_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    /// When the profile was first assigned
    pub assigned_at: DateTime<Utc>,
    /// When the profile was last overwritten, if ever
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

/// Registry of speaker profiles for one transcript.
///
/// Entries are whole-profile replacements keyed by `speaker_index`: last
/// write wins, no history. A registry shared across concurrent callers needs
/// outside mutual exclusion (wrap it in `tokio::sync::RwLock`); a single
/// writer at a time is sufficient.
#[derive(Debug, Default)]
pub struct SpeakerRegistry {
    profiles: HashMap<usize, SpeakerProfile>,
}

impl SpeakerRegistry {
    pub fn new() -> Self {
        Self {
            profiles: HashMap::new(),
        }
    }

    /// Assign (or overwrite) the profile for a speaker index.
    ///
    /// The index is validated against the transcript's attributed speaker
    /// set; assigning to an index the transcript never attributed fails with
    /// `UnknownSpeaker` and leaves existing profiles untouched. Assignment
    /// never recomputes fused segments or statistics.
    pub fn assign(
        &mut self,
        transcript: &DiarizedTranscript,
        speaker_index: usize,
        display_name: &str,
        email: Option<&str>,
        title: Option<&str>,
    ) -> Result<()> {
        if !transcript.speaker_indices().contains(&speaker_index) {
            return Err(FusionError::UnknownSpeaker { speaker_index });
        }

        let now = Utc::now();
        let profile = SpeakerProfile {
            speaker_index,
            display_name: display_name.to_string(),
            email: email.map(str::to_string),
            title: title.map(str::to_string),
            assigned_at: self
                .profiles
                .get(&speaker_index)
                .map_or(now, |existing| existing.assigned_at),
            updated_at: self.profiles.contains_key(&speaker_index).then_some(now),
        };

        self.profiles.insert(speaker_index, profile);
        info!("Assigned speaker {} to '{}'", speaker_index, display_name);

        Ok(())
    }

    /// Resolve a speaker index to its profile. Never fails: unresolved
    /// indices get the positional default so rendering is always complete.
    pub fn resolve(&self, speaker_index: usize) -> SpeakerProfile {
        if let Some(profile) = self.profiles.get(&speaker_index) {
            return profile.clone();
        }

        debug!(
            "No profile for speaker {}, using default label",
            speaker_index
        );

        SpeakerProfile {
            speaker_index,
            display_name: Self::default_label(speaker_index),
            email: None,
            title: None,
            assigned_at: Utc::now(),
            updated_at: None,
        }
    }

    /// Display name for a fused segment's speaker: the resolved profile name,
    /// or "Unknown" for unattributed segments.
    pub fn resolve_name(&self, speaker_index: Option<usize>) -> String {
        match speaker_index {
            Some(index) => self.resolve(index).display_name,
            None => "Unknown".to_string(),
        }
    }

    /// Positional default label for an unassigned speaker index.
    pub fn default_label(speaker_index: usize) -> String {
        format!("Speaker {}", speaker_index + 1)
    }

    pub fn get(&self, speaker_index: usize) -> Option<&SpeakerProfile> {
        self.profiles.get(&speaker_index)
    }

    /// Remove an assigned profile, returning it if present.
    pub fn remove(&mut self, speaker_index: usize) -> Option<SpeakerProfile> {
        let removed = self.profiles.remove(&speaker_index);
        if removed.is_some() {
            info!("Removed profile for speaker {}", speaker_index);
        }
        removed
    }

    /// All assigned profiles, ascending by speaker index.
    pub fn profiles(&self) -> Vec<&SpeakerProfile> {
        let mut profiles: Vec<&SpeakerProfile> = self.profiles.values().collect();
        profiles.sort_by_key(|p| p.speaker_index);
        profiles
    }

    pub fn len(&self) -> usize {
        self.profiles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.profiles.is_empty()
    }
}
