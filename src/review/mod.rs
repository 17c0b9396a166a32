// Review domain models - Re-exports all domain-specific types
//
// This module is split into focused files by domain:
// - participant.rs: Participants and roles
// - session.rs: Review meeting sessions
// - okr.rs: Objectives and key results
// - competency.rs: Competencies and STAR examples
// - bias.rs: Bias flags raised during the conversation
// - action_item.rs: Follow-up action items
// - transcript.rs: Diarized transcript entries
// - draft.rs: Persistable review drafts

mod participant;
mod session;
mod okr;
mod competency;
mod bias;
mod action_item;
mod transcript;
mod draft;

pub use participant::{Participant, ParticipantStatus, ParticipantUpdate, ParticipantRole};
pub use session::{Session, SessionStatus, SessionUpdate};
pub use okr::{KeyResult, KeyResultUpdate, Objective, ObjectiveUpdate, RatingScale};
pub use competency::{Competency, CompetencyUpdate, StarExample};
pub use bias::{BiasFlag, BiasFlagUpdate, BiasType};
pub use action_item::{ActionItem, ActionItemStatus, ActionItemUpdate};
pub use transcript::{SpeakerRole, TranscriptEntry};
pub use draft::ReviewDraft;
