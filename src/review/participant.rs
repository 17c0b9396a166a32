// Review domain models - Participant
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Role of a person in a review session
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ParticipantRole {
    Employee,
    Manager,
    Hr,
}

impl ParticipantRole {
    pub fn as_str(&self) -> &'static str {
        match self {
            ParticipantRole::Employee => "employee",
            ParticipantRole::Manager => "manager",
            ParticipantRole::Hr => "hr",
        }
    }
}

/// Connection status of a participant
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ParticipantStatus {
    Pending,
    Connected,
    Disconnected,
    Muted,
}

impl ParticipantStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            ParticipantStatus::Pending => "pending",
            ParticipantStatus::Connected => "connected",
            ParticipantStatus::Disconnected => "disconnected",
            ParticipantStatus::Muted => "muted",
        }
    }
}

/// One person in a review session
///
/// `consent_given` implies `consent_timestamp` is set; both are written together
/// exactly once by the consent operation.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Participant {
    pub id: String,
    pub name: String,
    pub email: String,
    pub role: ParticipantRole,
    pub status: ParticipantStatus,
    pub is_speaking: bool,
    pub consent_given: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub consent_timestamp: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub joined_at: Option<DateTime<Utc>>,
}

impl Participant {
    /// Create a participant as the join operation does: pending, not speaking,
    /// consent not yet given.
    pub fn new(id: String, name: String, email: String, role: ParticipantRole) -> Self {
        Self {
            id,
            name,
            email,
            role,
            status: ParticipantStatus::Pending,
            is_speaking: false,
            consent_given: false,
            consent_timestamp: None,
            joined_at: None,
        }
    }
}

/// Updates that can be applied to a participant
///
/// Role is deliberately absent: it is immutable after creation.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ParticipantUpdate {
    pub name: Option<String>,
    pub email: Option<String>,
    pub status: Option<ParticipantStatus>,
    pub is_speaking: Option<bool>,
    pub consent_given: Option<bool>,
    pub consent_timestamp: Option<DateTime<Utc>>,
    pub joined_at: Option<DateTime<Utc>>,
}

impl ParticipantUpdate {
    /// Apply the present fields onto a participant
    pub fn apply_to(&self, participant: &mut Participant) {
        if let Some(ref name) = self.name {
            participant.name = name.clone();
        }
        if let Some(ref email) = self.email {
            participant.email = email.clone();
        }
        if let Some(status) = self.status {
            participant.status = status;
        }
        if let Some(is_speaking) = self.is_speaking {
            participant.is_speaking = is_speaking;
        }
        if let Some(consent_given) = self.consent_given {
            participant.consent_given = consent_given;
        }
        if let Some(consent_timestamp) = self.consent_timestamp {
            participant.consent_timestamp = Some(consent_timestamp);
        }
        if let Some(joined_at) = self.joined_at {
            participant.joined_at = Some(joined_at);
        }
    }
}
