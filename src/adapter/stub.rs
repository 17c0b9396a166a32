//! Stub voice adapter
//!
//! A no-transport `VoiceAdapter` that acknowledges every call with canned
//! data. It keeps the real SDK's contract testable end to end: connection
//! state lives on the handle, and simulated SDK events can be injected with
//! `emit`.

use async_trait::async_trait;
use chrono::Utc;
use log::{debug, info};
use tokio::sync::mpsc;
use uuid::Uuid;

use crate::review::SpeakerRole;

use super::{
    AdapterError, AdapterEvent, AudioConfig, ConnectionStatus, ConsentCapture,
    DiarizedTranscript, JoinAck, RecordingMetadata, SessionConfig, TranscriptSegment,
    VoiceAdapter,
};

/// Voice adapter with no real transport behind it
pub struct StubVoiceAdapter {
    initialized: bool,
    current_session: Option<SessionConfig>,
    recording: bool,
    event_tx: Option<mpsc::UnboundedSender<AdapterEvent>>,
}

impl StubVoiceAdapter {
    pub fn new() -> Self {
        Self {
            initialized: false,
            current_session: None,
            recording: false,
            event_tx: None,
        }
    }

    /// Inject a simulated SDK event for subscribers
    pub fn emit(&self, event: AdapterEvent) {
        if let Some(ref tx) = self.event_tx {
            let _ = tx.send(event);
        }
    }
}

impl Default for StubVoiceAdapter {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl VoiceAdapter for StubVoiceAdapter {
    async fn init(&mut self, config: AudioConfig) -> Result<(), AdapterError> {
        debug!("Stub adapter init: {:?}", config);
        self.initialized = true;
        Ok(())
    }

    async fn join_session(&mut self, config: SessionConfig) -> Result<JoinAck, AdapterError> {
        if !self.initialized {
            return Err(AdapterError::NotInitialized);
        }
        info!(
            "Stub adapter joining session {} as {}",
            config.session_id,
            config.role.as_str()
        );
        let connection_id = format!("conn-{}", Uuid::new_v4());
        self.current_session = Some(config);
        Ok(JoinAck { connection_id })
    }

    async fn leave_session(&mut self) -> Result<(), AdapterError> {
        info!("Stub adapter leaving session");
        self.current_session = None;
        self.recording = false;
        Ok(())
    }

    async fn start_recording(&mut self) -> Result<RecordingMetadata, AdapterError> {
        let session = self
            .current_session
            .as_ref()
            .ok_or(AdapterError::NotInSession)?;
        info!("Stub adapter starting recording");
        self.recording = true;
        Ok(RecordingMetadata {
            recording_id: format!("rec-{}", Uuid::new_v4()),
            start_time: Utc::now(),
            participants: vec![session.participant_name.clone()],
            duration: None,
        })
    }

    async fn stop_recording(&mut self) -> Result<RecordingMetadata, AdapterError> {
        info!("Stub adapter stopping recording");
        self.recording = false;
        let participants = self
            .current_session
            .as_ref()
            .map(|s| vec![s.participant_name.clone()])
            .unwrap_or_default();
        Ok(RecordingMetadata {
            recording_id: format!("rec-{}", Uuid::new_v4()),
            start_time: Utc::now(),
            participants,
            duration: Some(0.0),
        })
    }

    async fn capture_consent_phrase(
        &mut self,
        participant_name: &str,
        consent_text: &str,
    ) -> Result<ConsentCapture, AdapterError> {
        debug!(
            "Stub adapter capturing consent for {}: {:?}",
            participant_name, consent_text
        );
        Ok(ConsentCapture {
            audio: vec![0, 0, 0, 0],
            timestamp: Utc::now(),
        })
    }

    async fn request_transcript(
        &self,
        recording_id: &str,
    ) -> Result<DiarizedTranscript, AdapterError> {
        debug!("Stub adapter requesting transcript for {}", recording_id);
        Ok(DiarizedTranscript {
            recording_id: recording_id.to_string(),
            segments: vec![TranscriptSegment {
                speaker: "TARA".to_string(),
                role: SpeakerRole::Assistant,
                text: "Welcome to this performance review session.".to_string(),
                timestamp: 0.0,
                confidence: Some(0.95),
            }],
            total_duration: 0.0,
        })
    }

    async fn set_muted(&mut self, muted: bool) -> Result<(), AdapterError> {
        if self.current_session.is_none() {
            return Err(AdapterError::NotInSession);
        }
        debug!("Stub adapter set muted: {}", muted);
        Ok(())
    }

    fn connection_status(&self) -> ConnectionStatus {
        ConnectionStatus {
            initialized: self.initialized,
            connected: self.current_session.is_some(),
            recording: self.recording,
            current_session: self.current_session.clone(),
        }
    }

    fn subscribe(&mut self) -> mpsc::UnboundedReceiver<AdapterEvent> {
        let (tx, rx) = mpsc::unbounded_channel();
        self.event_tx = Some(tx);
        rx
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::review::ParticipantRole;

    fn session_config() -> SessionConfig {
        SessionConfig {
            session_id: "session-1".to_string(),
            role: ParticipantRole::Employee,
            participant_name: "Jordan Reyes".to_string(),
            participant_email: "jordan@example.com".to_string(),
        }
    }

    #[tokio::test]
    async fn test_join_requires_init() {
        let mut adapter = StubVoiceAdapter::new();
        let err = adapter.join_session(session_config()).await.unwrap_err();
        assert_eq!(err, AdapterError::NotInitialized);
    }

    #[tokio::test]
    async fn test_lifecycle_init_join_record_leave() {
        let mut adapter = StubVoiceAdapter::new();
        adapter.init(AudioConfig::default()).await.unwrap();
        adapter.join_session(session_config()).await.unwrap();

        let metadata = adapter.start_recording().await.unwrap();
        assert_eq!(metadata.participants, vec!["Jordan Reyes".to_string()]);
        assert!(adapter.connection_status().recording);

        adapter.stop_recording().await.unwrap();
        assert!(!adapter.connection_status().recording);

        adapter.leave_session().await.unwrap();
        let status = adapter.connection_status();
        assert!(status.initialized);
        assert!(!status.connected);
    }

    #[tokio::test]
    async fn test_recording_requires_session() {
        let mut adapter = StubVoiceAdapter::new();
        adapter.init(AudioConfig::default()).await.unwrap();
        let err = adapter.start_recording().await.unwrap_err();
        assert_eq!(err, AdapterError::NotInSession);
    }

    #[tokio::test]
    async fn test_emit_reaches_subscriber() {
        let mut adapter = StubVoiceAdapter::new();
        let mut rx = adapter.subscribe();
        adapter.emit(AdapterEvent::SpeakingChange {
            participant_id: "p-1".to_string(),
            is_speaking: true,
        });
        let event = rx.recv().await.unwrap();
        assert_eq!(
            event,
            AdapterEvent::SpeakingChange {
                participant_id: "p-1".to_string(),
                is_speaking: true,
            }
        );
    }

    #[tokio::test]
    async fn test_canned_transcript_attributed_to_assistant() {
        let adapter = StubVoiceAdapter::new();
        let transcript = adapter.request_transcript("rec-1").await.unwrap();
        assert_eq!(transcript.recording_id, "rec-1");
        assert_eq!(transcript.segments[0].role, SpeakerRole::Assistant);
    }
}
