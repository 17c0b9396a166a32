// Session store - one in-memory snapshot, mutated by sequential transitions
use std::collections::HashMap;

use chrono::Utc;
use log::{info, warn};
use once_cell::sync::Lazy;
use regex::Regex;
use uuid::Uuid;

use crate::review::{
    ActionItem, BiasFlag, Competency, CompetencyUpdate, KeyResultUpdate, Objective, Participant,
    ParticipantRole, ParticipantUpdate, RatingScale, ReviewDraft, Session, SessionStatus,
    TranscriptEntry,
};
use crate::scoring::{self, ItemType, ScoringResult, ScoringWeights};

use super::{StoreError, Transition};

/// Join codes are short human-entered identifiers, e.g. "ABC123"
static JOIN_CODE_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[A-Za-z0-9-]{4,12}$").expect("join code pattern is valid"));

/// Hook consulted on every session status change; returns whether the change
/// follows the expected lifecycle graph. Illegal changes are logged, not
/// rejected.
pub type StatusPolicy = Box<dyn Fn(SessionStatus, SessionStatus) -> bool + Send + Sync>;

/// The expected lifecycle: pending -> active -> {paused <-> active}
/// -> {completed | canceled}; canceling before the session starts is allowed.
fn default_status_policy(from: SessionStatus, to: SessionStatus) -> bool {
    use SessionStatus::*;
    matches!(
        (from, to),
        (Pending, Active)
            | (Pending, Canceled)
            | (Active, Paused)
            | (Paused, Active)
            | (Active, Completed)
            | (Active, Canceled)
            | (Paused, Completed)
            | (Paused, Canceled)
    ) || from == to
}

/// Identity-free participant input for the join operation; id, status and
/// consent fields are synthesized by the store
#[derive(Debug, Clone, PartialEq)]
pub struct NewParticipant {
    pub name: String,
    pub email: String,
    pub role: ParticipantRole,
}

/// An immutable copy of the store's full state, for rendering and for
/// asserting that a failed transition changed nothing
#[derive(Debug, Clone, PartialEq)]
pub struct SessionSnapshot {
    pub session: Option<Session>,
    pub current_participant: Option<Participant>,
    pub objectives: Vec<Objective>,
    pub competencies: Vec<Competency>,
    pub bias_flags: Vec<BiasFlag>,
    pub action_items: Vec<ActionItem>,
    pub transcript: Vec<TranscriptEntry>,
    pub assistant_prompt: String,
    pub recording: bool,
    pub draft: Option<ReviewDraft>,
}

/// Single-writer aggregate for one review meeting
///
/// Participants live only inside the session; the "current" (local)
/// participant is an id reference resolved on read, so there is no second
/// copy to keep consistent.
pub struct SessionStore {
    session: Option<Session>,
    current_participant_id: Option<String>,
    objectives: Vec<Objective>,
    competencies: Vec<Competency>,
    bias_flags: Vec<BiasFlag>,
    action_items: Vec<ActionItem>,
    transcript: Vec<TranscriptEntry>,
    assistant_prompt: String,
    recording: bool,
    draft: Option<ReviewDraft>,
    rating_scale: RatingScale,
    /// key result id -> owning objective id, for O(1) nested addressing
    key_result_index: HashMap<String, String>,
    status_policy: StatusPolicy,
}

impl SessionStore {
    pub fn new() -> Self {
        Self::with_rating_scale(RatingScale::default())
    }

    pub fn with_rating_scale(rating_scale: RatingScale) -> Self {
        Self {
            session: None,
            current_participant_id: None,
            objectives: Vec::new(),
            competencies: Vec::new(),
            bias_flags: Vec::new(),
            action_items: Vec::new(),
            transcript: Vec::new(),
            assistant_prompt: String::new(),
            recording: false,
            draft: None,
            rating_scale,
            key_result_index: HashMap::new(),
            status_policy: Box::new(default_status_policy),
        }
    }

    /// Replace the status policy hook
    pub fn set_status_policy(&mut self, policy: StatusPolicy) {
        self.status_policy = policy;
    }

    // ---- read side ----

    pub fn session(&self) -> Option<&Session> {
        self.session.as_ref()
    }

    /// Resolve the current (local) participant against the session
    pub fn current_participant(&self) -> Option<&Participant> {
        let id = self.current_participant_id.as_deref()?;
        self.session.as_ref()?.participant(id)
    }

    pub fn objectives(&self) -> &[Objective] {
        &self.objectives
    }

    pub fn competencies(&self) -> &[Competency] {
        &self.competencies
    }

    pub fn bias_flags(&self) -> &[BiasFlag] {
        &self.bias_flags
    }

    pub fn action_items(&self) -> &[ActionItem] {
        &self.action_items
    }

    pub fn transcript(&self) -> &[TranscriptEntry] {
        &self.transcript
    }

    pub fn assistant_prompt(&self) -> &str {
        &self.assistant_prompt
    }

    pub fn is_recording(&self) -> bool {
        self.recording
    }

    pub fn draft(&self) -> Option<&ReviewDraft> {
        self.draft.as_ref()
    }

    pub fn rating_scale(&self) -> RatingScale {
        self.rating_scale
    }

    /// Full-state copy for rendering or comparison
    pub fn snapshot(&self) -> SessionSnapshot {
        SessionSnapshot {
            session: self.session.clone(),
            current_participant: self.current_participant().cloned(),
            objectives: self.objectives.clone(),
            competencies: self.competencies.clone(),
            bias_flags: self.bias_flags.clone(),
            action_items: self.action_items.clone(),
            transcript: self.transcript.clone(),
            assistant_prompt: self.assistant_prompt.clone(),
            recording: self.recording,
            draft: self.draft.clone(),
        }
    }

    /// Score the current objectives/competencies snapshot
    pub fn score(&self, weights: ScoringWeights) -> ScoringResult {
        scoring::scoring_result(&self.objectives, &self.competencies, weights)
    }

    // ---- transitions ----

    /// Apply one transition atomically: all validation happens before any
    /// mutation, so an `Err` leaves the snapshot exactly as it was.
    pub fn apply(&mut self, transition: Transition) -> Result<(), StoreError> {
        match transition {
            Transition::SetSession(session) => {
                if session.participants.is_empty() {
                    return Err(StoreError::Validation(
                        "session must contain at least one participant".to_string(),
                    ));
                }
                // Drop a current-participant reference the new session no
                // longer resolves
                if let Some(ref id) = self.current_participant_id {
                    if session.participant(id).is_none() {
                        self.current_participant_id = None;
                    }
                }
                self.session = Some(session);
                Ok(())
            }

            Transition::UpdateSession(updates) => {
                let session = self.session.as_mut().ok_or(StoreError::NoSession)?;
                if let Some(next) = updates.status {
                    if !(self.status_policy)(session.status, next) {
                        warn!(
                            "Session {} status change {} -> {} jumps the expected lifecycle",
                            session.id,
                            session.status.as_str(),
                            next.as_str()
                        );
                    }
                }
                updates.apply_to(session);
                Ok(())
            }

            Transition::SetCurrentParticipant(id) => {
                let session = self.session.as_ref().ok_or(StoreError::NoSession)?;
                if session.participant(&id).is_none() {
                    return Err(StoreError::ParticipantNotFound(id));
                }
                self.current_participant_id = Some(id);
                Ok(())
            }

            Transition::AddParticipant(participant) => {
                let session = self.session.as_mut().ok_or(StoreError::NoSession)?;
                session.participants.push(participant);
                Ok(())
            }

            Transition::UpdateParticipant { id, updates } => {
                let session = self.session.as_mut().ok_or(StoreError::NoSession)?;
                let participant = session
                    .participant_mut(&id)
                    .ok_or(StoreError::ParticipantNotFound(id))?;
                // consent_given implies a consent timestamp exists
                if updates.consent_given == Some(true)
                    && updates.consent_timestamp.is_none()
                    && participant.consent_timestamp.is_none()
                {
                    return Err(StoreError::Validation(
                        "consent requires a consent timestamp".to_string(),
                    ));
                }
                updates.apply_to(participant);
                Ok(())
            }

            Transition::RemoveParticipant(id) => {
                let session = self.session.as_mut().ok_or(StoreError::NoSession)?;
                if session.participant(&id).is_none() {
                    return Err(StoreError::ParticipantNotFound(id));
                }
                if session.participants.len() == 1 {
                    return Err(StoreError::Validation(
                        "session must keep at least one participant".to_string(),
                    ));
                }
                session.participants.retain(|p| p.id != id);
                if self.current_participant_id.as_deref() == Some(id.as_str()) {
                    self.current_participant_id = None;
                }
                Ok(())
            }

            Transition::SetObjectives(objectives) => {
                self.validate_objectives(&objectives)?;
                self.objectives = objectives;
                self.rebuild_key_result_index();
                Ok(())
            }

            Transition::UpdateObjective { id, updates } => {
                if let Some(weight) = updates.weight {
                    self.validate_weight(weight)?;
                }
                if let Some(ref key_results) = updates.key_results {
                    for kr in key_results {
                        self.validate_optional_rating(kr.employee_rating)?;
                        self.validate_optional_rating(kr.manager_rating)?;
                    }
                }
                let objective = self
                    .objectives
                    .iter_mut()
                    .find(|o| o.id == id)
                    .ok_or(StoreError::ObjectiveNotFound(id))?;
                updates.apply_to(objective);
                if updates.key_results.is_some() {
                    self.rebuild_key_result_index();
                }
                Ok(())
            }

            Transition::UpdateKeyResult {
                objective_id,
                key_result_id,
                updates,
            } => {
                self.validate_optional_rating(updates.employee_rating)?;
                self.validate_optional_rating(updates.manager_rating)?;
                let objective = self
                    .objectives
                    .iter_mut()
                    .find(|o| o.id == objective_id)
                    .ok_or(StoreError::ObjectiveNotFound(objective_id))?;
                let key_result = objective
                    .key_result_mut(&key_result_id)
                    .ok_or(StoreError::KeyResultNotFound(key_result_id))?;
                updates.apply_to(key_result);
                Ok(())
            }

            Transition::SetCompetencies(competencies) => {
                self.validate_competencies(&competencies)?;
                self.competencies = competencies;
                Ok(())
            }

            Transition::UpdateCompetency { id, updates } => {
                self.validate_optional_rating(updates.employee_rating)?;
                self.validate_optional_rating(updates.manager_rating)?;
                let competency = self
                    .competencies
                    .iter_mut()
                    .find(|c| c.id == id)
                    .ok_or(StoreError::CompetencyNotFound(id))?;
                updates.apply_to(competency);
                Ok(())
            }

            Transition::AddBiasFlag(flag) => {
                if !(0.0..=1.0).contains(&flag.confidence) {
                    return Err(StoreError::Validation(format!(
                        "bias flag confidence {} outside [0, 1]",
                        flag.confidence
                    )));
                }
                self.bias_flags.push(flag);
                Ok(())
            }

            Transition::UpdateBiasFlag { id, updates } => {
                let flag = self
                    .bias_flags
                    .iter_mut()
                    .find(|f| f.id == id)
                    .ok_or(StoreError::BiasFlagNotFound(id))?;
                updates.apply_to(flag);
                Ok(())
            }

            Transition::AddActionItem(item) => {
                self.action_items.push(item);
                Ok(())
            }

            Transition::UpdateActionItem { id, updates } => {
                let item = self
                    .action_items
                    .iter_mut()
                    .find(|i| i.id == id)
                    .ok_or(StoreError::ActionItemNotFound(id))?;
                updates.apply_to(item);
                Ok(())
            }

            Transition::RemoveActionItem(id) => {
                if !self.action_items.iter().any(|i| i.id == id) {
                    return Err(StoreError::ActionItemNotFound(id));
                }
                self.action_items.retain(|i| i.id != id);
                Ok(())
            }

            Transition::AddTranscriptEntry(entry) => {
                self.transcript.push(entry);
                Ok(())
            }

            Transition::SetAssistantPrompt(text) => {
                self.assistant_prompt = text;
                Ok(())
            }

            Transition::SetRecording(recording) => {
                self.recording = recording;
                Ok(())
            }

            Transition::LoadDraft(draft) => {
                self.validate_objectives(&draft.objectives)?;
                self.validate_competencies(&draft.competencies)?;
                info!("Loading draft {} for session {}", draft.id, draft.session_id);
                self.objectives = draft.objectives.clone();
                self.competencies = draft.competencies.clone();
                self.bias_flags = draft.bias_flags.clone();
                self.action_items = draft.action_items.clone();
                self.draft = Some(draft);
                self.rebuild_key_result_index();
                Ok(())
            }

            Transition::Clear => {
                let scale = self.rating_scale;
                let policy = std::mem::replace(
                    &mut self.status_policy,
                    Box::new(default_status_policy),
                );
                *self = Self::with_rating_scale(scale);
                self.status_policy = policy;
                Ok(())
            }
        }
    }

    // ---- derived operations ----

    /// Join a session: synthesize a participant and, when no session exists
    /// yet, a pending session containing only them; mark them current.
    ///
    /// Returns the synthesized participant so callers learn its id.
    pub fn join_session(
        &mut self,
        session_code: &str,
        new_participant: NewParticipant,
    ) -> Result<Participant, StoreError> {
        if !JOIN_CODE_PATTERN.is_match(session_code) {
            return Err(StoreError::Validation(format!(
                "malformed session code: {:?}",
                session_code
            )));
        }

        let participant = Participant::new(
            Uuid::new_v4().to_string(),
            new_participant.name,
            new_participant.email,
            new_participant.role,
        );

        if self.session.is_none() {
            let session = Session::new(
                Uuid::new_v4().to_string(),
                session_code.to_string(),
                participant.clone(),
            );
            info!(
                "Creating session {} for code {} ({} joining as {})",
                session.id,
                session_code,
                participant.name,
                participant.role.as_str()
            );
            self.apply(Transition::SetSession(session))?;
        } else {
            info!(
                "{} joining existing session as {}",
                participant.name,
                participant.role.as_str()
            );
            self.apply(Transition::AddParticipant(participant.clone()))?;
        }

        self.apply(Transition::SetCurrentParticipant(participant.id.clone()))?;
        Ok(participant)
    }

    /// Record consent for the current participant, exactly once
    pub fn give_consent(&mut self) -> Result<(), StoreError> {
        let id = self
            .current_participant_id
            .clone()
            .ok_or(StoreError::NoCurrentParticipant)?;
        let participant = self
            .current_participant()
            .ok_or(StoreError::ParticipantNotFound(id.clone()))?;
        if participant.consent_given {
            return Err(StoreError::ConsentAlreadyGiven);
        }

        info!("Recording consent for participant {}", id);
        self.apply(Transition::UpdateParticipant {
            id,
            updates: ParticipantUpdate {
                consent_given: Some(true),
                consent_timestamp: Some(Utc::now()),
                ..Default::default()
            },
        })
    }

    /// Route a rating to the addressed item's employee or manager side
    ///
    /// OKR items are reached through the key-result index (key result id ->
    /// owning objective). HR carries no rating side of its own.
    pub fn update_rating(
        &mut self,
        item_id: &str,
        item_type: ItemType,
        role: ParticipantRole,
        rating: f64,
    ) -> Result<(), StoreError> {
        self.validate_rating(rating)?;

        let (employee_rating, manager_rating) = match role {
            ParticipantRole::Employee => (Some(rating), None),
            ParticipantRole::Manager => (None, Some(rating)),
            ParticipantRole::Hr => {
                return Err(StoreError::Validation(
                    "hr does not rate review items".to_string(),
                ))
            }
        };

        match item_type {
            ItemType::Competency => self.apply(Transition::UpdateCompetency {
                id: item_id.to_string(),
                updates: CompetencyUpdate {
                    employee_rating,
                    manager_rating,
                    ..Default::default()
                },
            }),
            ItemType::Okr => {
                let objective_id = self
                    .key_result_index
                    .get(item_id)
                    .cloned()
                    .ok_or_else(|| StoreError::KeyResultNotFound(item_id.to_string()))?;
                self.apply(Transition::UpdateKeyResult {
                    objective_id,
                    key_result_id: item_id.to_string(),
                    updates: KeyResultUpdate {
                        employee_rating,
                        manager_rating,
                        ..Default::default()
                    },
                })
            }
        }
    }

    // ---- validation ----

    fn validate_rating(&self, rating: f64) -> Result<(), StoreError> {
        if !rating.is_finite() || !self.rating_scale.contains(rating) {
            return Err(StoreError::Validation(format!(
                "rating {} outside scale {}-{}",
                rating, self.rating_scale.min, self.rating_scale.max
            )));
        }
        Ok(())
    }

    fn validate_optional_rating(&self, rating: Option<f64>) -> Result<(), StoreError> {
        match rating {
            Some(r) => self.validate_rating(r),
            None => Ok(()),
        }
    }

    fn validate_weight(&self, weight: f64) -> Result<(), StoreError> {
        if !weight.is_finite() || weight < 0.0 {
            return Err(StoreError::Validation(format!(
                "objective weight {} must be non-negative",
                weight
            )));
        }
        Ok(())
    }

    fn validate_objectives(&self, objectives: &[Objective]) -> Result<(), StoreError> {
        for objective in objectives {
            self.validate_weight(objective.weight)?;
            for kr in &objective.key_results {
                self.validate_optional_rating(kr.employee_rating)?;
                self.validate_optional_rating(kr.manager_rating)?;
            }
        }
        Ok(())
    }

    fn validate_competencies(&self, competencies: &[Competency]) -> Result<(), StoreError> {
        for competency in competencies {
            self.validate_optional_rating(competency.employee_rating)?;
            self.validate_optional_rating(competency.manager_rating)?;
        }
        Ok(())
    }

    fn rebuild_key_result_index(&mut self) {
        self.key_result_index.clear();
        for objective in &self.objectives {
            for kr in &objective.key_results {
                self.key_result_index
                    .insert(kr.id.clone(), objective.id.clone());
            }
        }
    }
}

impl Default for SessionStore {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::review::{KeyResult, SessionUpdate};
    use chrono::Utc;

    fn employee() -> NewParticipant {
        NewParticipant {
            name: "Jordan Reyes".to_string(),
            email: "jordan@example.com".to_string(),
            role: ParticipantRole::Employee,
        }
    }

    fn manager() -> NewParticipant {
        NewParticipant {
            name: "Sam Okafor".to_string(),
            email: "sam@example.com".to_string(),
            role: ParticipantRole::Manager,
        }
    }

    fn rated_objectives() -> Vec<Objective> {
        let mut kr = KeyResult::new("kr-1".to_string(), "Ship the migration".to_string());
        kr.employee_rating = Some(4.0);
        let mut objective = Objective::new("obj-1".to_string(), "Platform".to_string(), 1.0);
        objective.key_results = vec![kr];
        vec![objective]
    }

    fn sample_competencies() -> Vec<Competency> {
        vec![Competency::new(
            "comp-1".to_string(),
            "Communication".to_string(),
            "Keeps stakeholders informed".to_string(),
        )]
    }

    #[test]
    fn test_join_creates_pending_session_with_one_participant() {
        let mut store = SessionStore::new();
        let joined = store.join_session("ABC123", employee()).unwrap();

        let session = store.session().unwrap();
        assert_eq!(session.code, "ABC123");
        assert_eq!(session.status, SessionStatus::Pending);
        assert_eq!(session.participants.len(), 1);

        let participant = &session.participants[0];
        assert_eq!(participant.id, joined.id);
        assert_eq!(participant.status, crate::review::ParticipantStatus::Pending);
        assert!(!participant.consent_given);
        assert!(participant.consent_timestamp.is_none());
    }

    #[test]
    fn test_second_join_adds_to_existing_session() {
        let mut store = SessionStore::new();
        store.join_session("ABC123", employee()).unwrap();
        let second = store.join_session("ABC123", manager()).unwrap();

        assert_eq!(store.session().unwrap().participants.len(), 2);
        // the most recent joiner becomes the local participant
        assert_eq!(store.current_participant().unwrap().id, second.id);
    }

    #[test]
    fn test_join_rejects_malformed_code() {
        let mut store = SessionStore::new();
        let err = store.join_session("a b c", employee()).unwrap_err();
        assert!(matches!(err, StoreError::Validation(_)));
        assert!(store.session().is_none());
    }

    #[test]
    fn test_join_generates_unique_ids() {
        let mut store = SessionStore::new();
        let first = store.join_session("ABC123", employee()).unwrap();
        let second = store.join_session("ABC123", manager()).unwrap();
        assert_ne!(first.id, second.id);
    }

    #[test]
    fn test_give_consent_stamps_both_views() {
        let mut store = SessionStore::new();
        store.join_session("ABC123", employee()).unwrap();
        store.give_consent().unwrap();

        let current = store.current_participant().unwrap().clone();
        assert!(current.consent_given);
        assert!(current.consent_timestamp.is_some());

        // the session-embedded record and the current-participant view are
        // the same record
        let embedded = store.session().unwrap().participants[0].clone();
        assert_eq!(current, embedded);
    }

    #[test]
    fn test_give_consent_without_participant() {
        let mut store = SessionStore::new();
        assert_eq!(store.give_consent().unwrap_err(), StoreError::NoCurrentParticipant);
    }

    #[test]
    fn test_give_consent_is_once_only() {
        let mut store = SessionStore::new();
        store.join_session("ABC123", employee()).unwrap();
        store.give_consent().unwrap();
        assert_eq!(store.give_consent().unwrap_err(), StoreError::ConsentAlreadyGiven);
    }

    #[test]
    fn test_update_competency_rating_sets_one_side() {
        let mut store = SessionStore::new();
        store
            .apply(Transition::SetCompetencies(sample_competencies()))
            .unwrap();

        store
            .update_rating("comp-1", ItemType::Competency, ParticipantRole::Employee, 4.0)
            .unwrap();

        let competency = &store.competencies()[0];
        assert_eq!(competency.employee_rating, Some(4.0));
        assert_eq!(competency.manager_rating, None);
    }

    #[test]
    fn test_update_rating_missing_id_leaves_state_unchanged() {
        let mut store = SessionStore::new();
        store
            .apply(Transition::SetCompetencies(sample_competencies()))
            .unwrap();
        let before = store.snapshot();

        let err = store
            .update_rating("nope", ItemType::Competency, ParticipantRole::Employee, 4.0)
            .unwrap_err();
        assert_eq!(err, StoreError::CompetencyNotFound("nope".to_string()));
        assert_eq!(store.snapshot(), before);
    }

    #[test]
    fn test_update_okr_rating_through_index() {
        let mut store = SessionStore::new();
        store
            .apply(Transition::SetObjectives(rated_objectives()))
            .unwrap();

        store
            .update_rating("kr-1", ItemType::Okr, ParticipantRole::Manager, 3.0)
            .unwrap();

        let kr = &store.objectives()[0].key_results[0];
        assert_eq!(kr.manager_rating, Some(3.0));
        assert_eq!(kr.employee_rating, Some(4.0));
    }

    #[test]
    fn test_update_okr_rating_unknown_key_result() {
        let mut store = SessionStore::new();
        store
            .apply(Transition::SetObjectives(rated_objectives()))
            .unwrap();
        let err = store
            .update_rating("kr-404", ItemType::Okr, ParticipantRole::Employee, 3.0)
            .unwrap_err();
        assert_eq!(err, StoreError::KeyResultNotFound("kr-404".to_string()));
    }

    #[test]
    fn test_update_rating_out_of_scale() {
        let mut store = SessionStore::new();
        store
            .apply(Transition::SetCompetencies(sample_competencies()))
            .unwrap();
        let err = store
            .update_rating("comp-1", ItemType::Competency, ParticipantRole::Employee, 6.0)
            .unwrap_err();
        assert!(matches!(err, StoreError::Validation(_)));
        assert_eq!(store.competencies()[0].employee_rating, None);
    }

    #[test]
    fn test_update_rating_hr_rejected() {
        let mut store = SessionStore::new();
        store
            .apply(Transition::SetCompetencies(sample_competencies()))
            .unwrap();
        let err = store
            .update_rating("comp-1", ItemType::Competency, ParticipantRole::Hr, 3.0)
            .unwrap_err();
        assert!(matches!(err, StoreError::Validation(_)));
    }

    #[test]
    fn test_set_objectives_rejects_negative_weight() {
        let mut store = SessionStore::new();
        let objectives = vec![Objective::new("obj-1".to_string(), "Bad".to_string(), -1.0)];
        let err = store.apply(Transition::SetObjectives(objectives)).unwrap_err();
        assert!(matches!(err, StoreError::Validation(_)));
        assert!(store.objectives().is_empty());
    }

    #[test]
    fn test_update_session_requires_session() {
        let mut store = SessionStore::new();
        let err = store
            .apply(Transition::UpdateSession(SessionUpdate {
                status: Some(SessionStatus::Active),
                ..Default::default()
            }))
            .unwrap_err();
        assert_eq!(err, StoreError::NoSession);
    }

    #[test]
    fn test_update_session_applies_even_off_graph_status() {
        // Off-graph changes are logged by the policy hook, not rejected
        let _ = env_logger::builder().is_test(true).try_init();
        let mut store = SessionStore::new();
        store.join_session("ABC123", employee()).unwrap();
        store
            .apply(Transition::UpdateSession(SessionUpdate {
                status: Some(SessionStatus::Completed),
                ..Default::default()
            }))
            .unwrap();
        assert_eq!(store.session().unwrap().status, SessionStatus::Completed);
    }

    #[test]
    fn test_remove_participant_keeps_last_one() {
        let mut store = SessionStore::new();
        let first = store.join_session("ABC123", employee()).unwrap();
        let err = store
            .apply(Transition::RemoveParticipant(first.id.clone()))
            .unwrap_err();
        assert!(matches!(err, StoreError::Validation(_)));
        assert_eq!(store.session().unwrap().participants.len(), 1);
    }

    #[test]
    fn test_remove_participant_clears_current_reference() {
        let mut store = SessionStore::new();
        store.join_session("ABC123", employee()).unwrap();
        let second = store.join_session("ABC123", manager()).unwrap();

        store
            .apply(Transition::RemoveParticipant(second.id.clone()))
            .unwrap();
        assert!(store.current_participant().is_none());
        assert_eq!(store.session().unwrap().participants.len(), 1);
    }

    #[test]
    fn test_remove_unknown_participant_is_not_found() {
        let mut store = SessionStore::new();
        store.join_session("ABC123", employee()).unwrap();
        let err = store
            .apply(Transition::RemoveParticipant("ghost".to_string()))
            .unwrap_err();
        assert_eq!(err, StoreError::ParticipantNotFound("ghost".to_string()));
    }

    #[test]
    fn test_transcript_appends_in_order_without_dedup() {
        let mut store = SessionStore::new();
        let interim = TranscriptEntry {
            id: "t-1".to_string(),
            timestamp: Utc::now(),
            speaker: "Jordan Reyes".to_string(),
            role: crate::review::SpeakerRole::Employee,
            text: "I led the".to_string(),
            is_final: false,
        };
        let finalized = TranscriptEntry {
            id: "t-2".to_string(),
            timestamp: Utc::now(),
            speaker: "Jordan Reyes".to_string(),
            role: crate::review::SpeakerRole::Employee,
            text: "I led the migration project".to_string(),
            is_final: true,
        };

        store.apply(Transition::AddTranscriptEntry(interim.clone())).unwrap();
        store.apply(Transition::AddTranscriptEntry(finalized.clone())).unwrap();

        // Both the interim and the finalized entry are retained; dedup is the
        // appending caller's job.
        assert_eq!(store.transcript(), &[interim, finalized]);
    }

    #[test]
    fn test_load_draft_hydrates_review_content() {
        let mut store = SessionStore::new();
        let draft = ReviewDraft {
            id: "draft-1".to_string(),
            session_id: "session-1".to_string(),
            last_saved: Utc::now(),
            objectives: rated_objectives(),
            competencies: sample_competencies(),
            bias_flags: Vec::new(),
            action_items: Vec::new(),
            scoring: None,
            rationale: Some("strong delivery year".to_string()),
        };

        store.apply(Transition::LoadDraft(draft.clone())).unwrap();

        assert_eq!(store.objectives(), draft.objectives.as_slice());
        assert_eq!(store.competencies(), draft.competencies.as_slice());
        assert_eq!(store.draft(), Some(&draft));

        // the key result index is rebuilt from the draft
        store
            .update_rating("kr-1", ItemType::Okr, ParticipantRole::Manager, 2.0)
            .unwrap();
        assert_eq!(store.objectives()[0].key_results[0].manager_rating, Some(2.0));
    }

    #[test]
    fn test_clear_resets_to_initial_state() {
        let mut store = SessionStore::new();
        store.join_session("ABC123", employee()).unwrap();
        store
            .apply(Transition::SetObjectives(rated_objectives()))
            .unwrap();
        store.apply(Transition::SetRecording(true)).unwrap();

        store.apply(Transition::Clear).unwrap();

        assert_eq!(store.snapshot(), SessionStore::new().snapshot());
    }

    #[test]
    fn test_bias_flag_confidence_validated_and_update_by_id() {
        let mut store = SessionStore::new();
        let mut flag = BiasFlag {
            id: "flag-1".to_string(),
            timestamp: Utc::now(),
            original_text: "He's just like the last guy we promoted".to_string(),
            bias_type: crate::review::BiasType::Similarity,
            confidence: 1.4,
            suggested_rephrase: "Compare against the role's criteria".to_string(),
            speaker: ParticipantRole::Manager,
            acknowledged: false,
            reframed: false,
        };

        let err = store.apply(Transition::AddBiasFlag(flag.clone())).unwrap_err();
        assert!(matches!(err, StoreError::Validation(_)));

        flag.confidence = 0.82;
        store.apply(Transition::AddBiasFlag(flag)).unwrap();
        store
            .apply(Transition::UpdateBiasFlag {
                id: "flag-1".to_string(),
                updates: crate::review::BiasFlagUpdate {
                    acknowledged: Some(true),
                    ..Default::default()
                },
            })
            .unwrap();
        assert!(store.bias_flags()[0].acknowledged);
        assert!(!store.bias_flags()[0].reframed);
    }

    #[test]
    fn test_action_item_lifecycle() {
        let mut store = SessionStore::new();
        let item = ActionItem {
            id: "ai-1".to_string(),
            description: "Schedule mentorship check-ins".to_string(),
            owner: ParticipantRole::Manager,
            metric: "2 sessions per month".to_string(),
            deadline: Utc::now(),
            status: crate::review::ActionItemStatus::Pending,
        };

        store.apply(Transition::AddActionItem(item)).unwrap();
        store
            .apply(Transition::UpdateActionItem {
                id: "ai-1".to_string(),
                updates: crate::review::ActionItemUpdate {
                    status: Some(crate::review::ActionItemStatus::InProgress),
                    ..Default::default()
                },
            })
            .unwrap();
        assert_eq!(
            store.action_items()[0].status,
            crate::review::ActionItemStatus::InProgress
        );

        store
            .apply(Transition::RemoveActionItem("ai-1".to_string()))
            .unwrap();
        assert!(store.action_items().is_empty());

        let err = store
            .apply(Transition::RemoveActionItem("ai-1".to_string()))
            .unwrap_err();
        assert_eq!(err, StoreError::ActionItemNotFound("ai-1".to_string()));
    }

    #[test]
    fn test_participant_role_is_immutable_through_updates() {
        let mut store = SessionStore::new();
        let joined = store.join_session("ABC123", employee()).unwrap();

        // ParticipantUpdate has no role field; a full update leaves it alone
        store
            .apply(Transition::UpdateParticipant {
                id: joined.id.clone(),
                updates: ParticipantUpdate {
                    name: Some("Jordan R.".to_string()),
                    status: Some(crate::review::ParticipantStatus::Connected),
                    ..Default::default()
                },
            })
            .unwrap();

        let participant = store.current_participant().unwrap();
        assert_eq!(participant.role, ParticipantRole::Employee);
        assert_eq!(participant.name, "Jordan R.");
    }

    #[test]
    fn test_score_uses_current_snapshot() {
        let mut store = SessionStore::new();
        store
            .apply(Transition::SetObjectives(rated_objectives()))
            .unwrap();
        store
            .apply(Transition::SetCompetencies(sample_competencies()))
            .unwrap();
        store
            .update_rating("kr-1", ItemType::Okr, ParticipantRole::Manager, 4.0)
            .unwrap();

        let result = store.score(ScoringWeights::default());
        assert_eq!(result.okr_score, 4.0);
    }
}
