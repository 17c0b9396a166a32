// Transition vocabulary for the session store
use crate::review::{
    ActionItem, ActionItemUpdate, BiasFlag, BiasFlagUpdate, Competency, CompetencyUpdate,
    KeyResultUpdate, Objective, ObjectiveUpdate, Participant, ParticipantUpdate, ReviewDraft,
    Session, SessionUpdate, TranscriptEntry,
};

/// A named, atomic state transition
///
/// `SessionStore::apply` either applies one of these in full or rejects it
/// with a `StoreError` and leaves the snapshot untouched.
#[derive(Debug, Clone, PartialEq)]
pub enum Transition {
    /// Replace the whole session
    SetSession(Session),
    /// Partial-field update to the existing session
    UpdateSession(SessionUpdate),
    /// Point the "current participant" reference at a session member
    SetCurrentParticipant(String),
    /// Append a participant to the session
    AddParticipant(Participant),
    /// Partial-field update to a participant by id
    UpdateParticipant {
        id: String,
        updates: ParticipantUpdate,
    },
    /// Remove a participant by id
    RemoveParticipant(String),
    /// Replace all objectives
    SetObjectives(Vec<Objective>),
    /// Partial-field update to an objective by id
    UpdateObjective {
        id: String,
        updates: ObjectiveUpdate,
    },
    /// Partial-field update to a key result, addressed by owning objective
    UpdateKeyResult {
        objective_id: String,
        key_result_id: String,
        updates: KeyResultUpdate,
    },
    /// Replace all competencies
    SetCompetencies(Vec<Competency>),
    /// Partial-field update to a competency by id
    UpdateCompetency {
        id: String,
        updates: CompetencyUpdate,
    },
    /// Append a bias flag raised by the detector
    AddBiasFlag(BiasFlag),
    /// Partial-field update to a bias flag by id (acknowledge/reframe)
    UpdateBiasFlag {
        id: String,
        updates: BiasFlagUpdate,
    },
    /// Append an action item
    AddActionItem(ActionItem),
    /// Partial-field update to an action item by id
    UpdateActionItem {
        id: String,
        updates: ActionItemUpdate,
    },
    /// Remove an action item by id
    RemoveActionItem(String),
    /// Append a transcript entry (interim or final)
    AddTranscriptEntry(TranscriptEntry),
    /// Overwrite the assistant prompt text
    SetAssistantPrompt(String),
    /// Set the recording flag
    SetRecording(bool),
    /// Hydrate review content from a saved draft
    LoadDraft(ReviewDraft),
    /// Reset the whole store to its empty initial state
    Clear,
}
