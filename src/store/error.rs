// Store errors
//
// Every transition either fully applies or returns one of these; a missing
// target is an observable `*NotFound`, never a silent no-op, so callers and
// tests can tell "nothing needed to change" from "target did not exist".

use std::fmt;

/// Error types for session store transitions
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreError {
    /// A transition needed an existing session and there is none
    NoSession,
    /// A derived operation needed a current participant and none is set
    NoCurrentParticipant,
    /// Consent was already recorded for the current participant
    ConsentAlreadyGiven,
    /// No participant with this id in the session
    ParticipantNotFound(String),
    /// No objective with this id
    ObjectiveNotFound(String),
    /// No key result with this id under the addressed objective
    KeyResultNotFound(String),
    /// No competency with this id
    CompetencyNotFound(String),
    /// No bias flag with this id
    BiasFlagNotFound(String),
    /// No action item with this id
    ActionItemNotFound(String),
    /// Input rejected at ingestion (rating out of scale, negative weight,
    /// malformed join code, ...)
    Validation(String),
}

impl fmt::Display for StoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StoreError::NoSession => write!(f, "No active session"),
            StoreError::NoCurrentParticipant => write!(f, "No current participant"),
            StoreError::ConsentAlreadyGiven => write!(f, "Consent already given"),
            StoreError::ParticipantNotFound(id) => write!(f, "Participant not found: {}", id),
            StoreError::ObjectiveNotFound(id) => write!(f, "Objective not found: {}", id),
            StoreError::KeyResultNotFound(id) => write!(f, "Key result not found: {}", id),
            StoreError::CompetencyNotFound(id) => write!(f, "Competency not found: {}", id),
            StoreError::BiasFlagNotFound(id) => write!(f, "Bias flag not found: {}", id),
            StoreError::ActionItemNotFound(id) => write!(f, "Action item not found: {}", id),
            StoreError::Validation(msg) => write!(f, "Validation failed: {}", msg),
        }
    }
}

impl std::error::Error for StoreError {}
