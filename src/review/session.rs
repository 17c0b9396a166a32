// Review domain models - Session
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::Participant;

/// Lifecycle status of a review session
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum SessionStatus {
    Pending,
    Active,
    Paused,
    Completed,
    Canceled,
}

impl SessionStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            SessionStatus::Pending => "pending",
            SessionStatus::Active => "active",
            SessionStatus::Paused => "paused",
            SessionStatus::Completed => "completed",
            SessionStatus::Canceled => "canceled",
        }
    }
}

/// One review meeting instance
///
/// A session always holds at least one participant: it is created by the first
/// join and only ever grows or shrinks through the participant transitions.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Session {
    pub id: String,
    pub code: String,
    pub status: SessionStatus,
    pub participants: Vec<Participant>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start_time: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_time: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub duration: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub recording_id: Option<String>,
}

impl Session {
    /// Create a pending session containing its first participant
    pub fn new(id: String, code: String, first_participant: Participant) -> Self {
        Self {
            id,
            code,
            status: SessionStatus::Pending,
            participants: vec![first_participant],
            start_time: None,
            end_time: None,
            duration: None,
            recording_id: None,
        }
    }

    /// Find a participant by id
    pub fn participant(&self, id: &str) -> Option<&Participant> {
        self.participants.iter().find(|p| p.id == id)
    }

    /// Find a participant by id, mutably
    pub fn participant_mut(&mut self, id: &str) -> Option<&mut Participant> {
        self.participants.iter_mut().find(|p| p.id == id)
    }
}

/// Updates that can be applied to a session
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SessionUpdate {
    pub code: Option<String>,
    pub status: Option<SessionStatus>,
    pub start_time: Option<DateTime<Utc>>,
    pub end_time: Option<DateTime<Utc>>,
    pub duration: Option<f64>,
    pub recording_id: Option<String>,
}

impl SessionUpdate {
    /// Apply the present fields onto a session (participants are managed by
    /// their own transitions, never through this path)
    pub fn apply_to(&self, session: &mut Session) {
        if let Some(ref code) = self.code {
            session.code = code.clone();
        }
        if let Some(status) = self.status {
            session.status = status;
        }
        if let Some(start_time) = self.start_time {
            session.start_time = Some(start_time);
        }
        if let Some(end_time) = self.end_time {
            session.end_time = Some(end_time);
        }
        if let Some(duration) = self.duration {
            session.duration = Some(duration);
        }
        if let Some(ref recording_id) = self.recording_id {
            session.recording_id = Some(recording_id.clone());
        }
    }
}
