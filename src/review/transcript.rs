// Review domain models - Transcript
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::ParticipantRole;

/// Who a transcript entry or prompt is attributed to: a human participant
/// role, or the voice assistant itself
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum SpeakerRole {
    Employee,
    Manager,
    Hr,
    Assistant,
}

impl SpeakerRole {
    pub fn as_str(&self) -> &'static str {
        match self {
            SpeakerRole::Employee => "employee",
            SpeakerRole::Manager => "manager",
            SpeakerRole::Hr => "hr",
            SpeakerRole::Assistant => "assistant",
        }
    }
}

impl From<ParticipantRole> for SpeakerRole {
    fn from(role: ParticipantRole) -> Self {
        match role {
            ParticipantRole::Employee => SpeakerRole::Employee,
            ParticipantRole::Manager => SpeakerRole::Manager,
            ParticipantRole::Hr => SpeakerRole::Hr,
        }
    }
}

/// One diarized line of the live transcript
///
/// Entries are append-only and insertion order doubles as chronological
/// order (timestamps from the transport are assumed monotonic). `is_final`
/// distinguishes interim streaming entries from finalized ones; the store
/// does not deduplicate an interim entry that is later finalized under a
/// new id - that is the appending caller's responsibility.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct TranscriptEntry {
    pub id: String,
    pub timestamp: DateTime<Utc>,
    pub speaker: String,
    pub role: SpeakerRole,
    pub text: String,
    pub is_final: bool,
}
