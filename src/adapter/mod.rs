//! Voice adapter boundary
//!
//! Defines the vendor-agnostic interface to the audio/voice SDK (join/leave,
//! recording, consent capture, diarized transcripts, event subscription).
//! The shipped implementation is a stub; a real SDK integration implements
//! `VoiceAdapter` and the rest of the crate is unaffected.

pub mod bridge;
mod stub;

pub use stub::StubVoiceAdapter;

use std::fmt;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tokio::sync::mpsc;

use crate::review::{ParticipantRole, SpeakerRole};

/// Error types for adapter operations
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AdapterError {
    /// `init` has not been called yet
    NotInitialized,
    /// The operation needs a joined session
    NotInSession,
    /// Transport/SDK failure
    Transport(String),
}

impl fmt::Display for AdapterError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AdapterError::NotInitialized => write!(f, "Audio adapter not initialized"),
            AdapterError::NotInSession => write!(f, "Not in an active session"),
            AdapterError::Transport(msg) => write!(f, "Transport error: {}", msg),
        }
    }
}

impl std::error::Error for AdapterError {}

/// Adapter-level configuration, all optional for the stub
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct AudioConfig {
    pub api_url: Option<String>,
    pub api_key: Option<String>,
    pub sample_rate: Option<u32>,
    pub channels: Option<u16>,
}

/// Who is joining the voice room, and as what
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SessionConfig {
    pub session_id: String,
    pub role: ParticipantRole,
    pub participant_name: String,
    pub participant_email: String,
}

/// Acknowledgement for a successful room join
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JoinAck {
    pub connection_id: String,
}

/// Metadata returned when recording starts or stops
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct RecordingMetadata {
    pub recording_id: String,
    pub start_time: DateTime<Utc>,
    pub participants: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub duration: Option<f64>,
}

/// A short captured consent clip
#[derive(Debug, Clone, PartialEq)]
pub struct ConsentCapture {
    pub audio: Vec<u8>,
    pub timestamp: DateTime<Utc>,
}

/// One diarized segment from the transcription service
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct TranscriptSegment {
    pub speaker: String,
    pub role: SpeakerRole,
    pub text: String,
    /// Offset from the start of the recording, in seconds
    pub timestamp: f64,
    pub confidence: Option<f64>,
}

/// A complete diarized transcript for a recording
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct DiarizedTranscript {
    pub recording_id: String,
    pub segments: Vec<TranscriptSegment>,
    pub total_duration: f64,
}

/// Snapshot of the adapter's connection state
#[derive(Debug, Clone, PartialEq)]
pub struct ConnectionStatus {
    pub initialized: bool,
    pub connected: bool,
    pub recording: bool,
    pub current_session: Option<SessionConfig>,
}

/// Push events from the voice SDK, consumed by `bridge::apply_adapter_event`
#[derive(Debug, Clone, PartialEq)]
pub enum AdapterEvent {
    SpeakingChange {
        participant_id: String,
        is_speaking: bool,
    },
    ParticipantJoined {
        participant_id: String,
        role: ParticipantRole,
    },
    ParticipantLeft {
        participant_id: String,
    },
    TranscriptUpdate(TranscriptSegment),
    Error(String),
}

/// Common interface for all voice/audio backends
///
/// Implementations own their connection state as an explicit handle; there
/// is no ambient module-level state to initialize or tear down.
#[async_trait]
pub trait VoiceAdapter: Send + Sync {
    /// Initialize the backend with configuration
    async fn init(&mut self, config: AudioConfig) -> Result<(), AdapterError>;

    /// Join the voice room for a session
    async fn join_session(&mut self, config: SessionConfig) -> Result<JoinAck, AdapterError>;

    /// Leave the current voice room
    async fn leave_session(&mut self) -> Result<(), AdapterError>;

    /// Start recording the session
    async fn start_recording(&mut self) -> Result<RecordingMetadata, AdapterError>;

    /// Stop recording the session
    async fn stop_recording(&mut self) -> Result<RecordingMetadata, AdapterError>;

    /// Record a short audio clip for consent verification
    async fn capture_consent_phrase(
        &mut self,
        participant_name: &str,
        consent_text: &str,
    ) -> Result<ConsentCapture, AdapterError>;

    /// Request a diarized transcript for a finished recording
    async fn request_transcript(
        &self,
        recording_id: &str,
    ) -> Result<DiarizedTranscript, AdapterError>;

    /// Mute or unmute the local participant
    async fn set_muted(&mut self, muted: bool) -> Result<(), AdapterError>;

    /// Current connection state
    fn connection_status(&self) -> ConnectionStatus;

    /// Subscribe to SDK events; the previous subscription, if any, stops
    /// receiving
    fn subscribe(&mut self) -> mpsc::UnboundedReceiver<AdapterEvent>;
}
