//! Adapter event bridge
//!
//! The session store is the sink for everything the voice adapter reports.
//! Each event maps onto one or two store transitions; errors surface as
//! `StoreError` so a stale event (e.g. for a participant who was removed)
//! is observable instead of silently dropped.

use chrono::Utc;
use log::error;
use uuid::Uuid;

use crate::review::{ParticipantStatus, ParticipantUpdate, SessionUpdate, TranscriptEntry};
use crate::store::{SessionStore, StoreError, Transition};

use super::{AdapterEvent, RecordingMetadata};

/// Translate one adapter event into store transitions
pub fn apply_adapter_event(
    store: &mut SessionStore,
    event: AdapterEvent,
) -> Result<(), StoreError> {
    match event {
        AdapterEvent::SpeakingChange {
            participant_id,
            is_speaking,
        } => store.apply(Transition::UpdateParticipant {
            id: participant_id,
            updates: ParticipantUpdate {
                is_speaking: Some(is_speaking),
                ..Default::default()
            },
        }),

        AdapterEvent::ParticipantJoined { participant_id, .. } => {
            // The participant record was created locally at join time; the
            // event confirms the transport connection.
            store.apply(Transition::UpdateParticipant {
                id: participant_id,
                updates: ParticipantUpdate {
                    status: Some(ParticipantStatus::Connected),
                    joined_at: Some(Utc::now()),
                    ..Default::default()
                },
            })
        }

        AdapterEvent::ParticipantLeft { participant_id } => {
            // Leaving the room is a connection change, not removal from the
            // review; removal stays an explicit UI action.
            store.apply(Transition::UpdateParticipant {
                id: participant_id,
                updates: ParticipantUpdate {
                    status: Some(ParticipantStatus::Disconnected),
                    is_speaking: Some(false),
                    ..Default::default()
                },
            })
        }

        AdapterEvent::TranscriptUpdate(segment) => {
            store.apply(Transition::AddTranscriptEntry(TranscriptEntry {
                id: Uuid::new_v4().to_string(),
                timestamp: Utc::now(),
                speaker: segment.speaker,
                role: segment.role,
                text: segment.text,
                is_final: true,
            }))
        }

        AdapterEvent::Error(message) => {
            error!("Voice adapter error: {}", message);
            Ok(())
        }
    }
}

/// Record the start of a recording on the session
pub fn apply_recording_started(
    store: &mut SessionStore,
    metadata: &RecordingMetadata,
) -> Result<(), StoreError> {
    store.apply(Transition::UpdateSession(SessionUpdate {
        recording_id: Some(metadata.recording_id.clone()),
        start_time: Some(metadata.start_time),
        ..Default::default()
    }))?;
    store.apply(Transition::SetRecording(true))
}

/// Record the end of a recording on the session
pub fn apply_recording_stopped(
    store: &mut SessionStore,
    metadata: &RecordingMetadata,
) -> Result<(), StoreError> {
    if let Some(duration) = metadata.duration {
        store.apply(Transition::UpdateSession(SessionUpdate {
            duration: Some(duration),
            ..Default::default()
        }))?;
    }
    store.apply(Transition::SetRecording(false))
}
