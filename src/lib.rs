// tara-review - Session state and scoring core for a voice-assisted
// three-way (employee/manager/HR) performance-review meeting tool
//
// This crate holds the parts with real semantics:
// - The review data model (participants, sessions, OKRs, competencies,
//   bias flags, action items, transcript, drafts)
// - The pure scoring engine (weighted OKR/competency aggregation and
//   employee-vs-manager discrepancy detection)
// - The session state store (atomic named transitions plus derived
//   join/consent/rating operations)
// - The voice adapter boundary (trait + stub awaiting a real SDK) and the
//   bridge feeding its events into the store
// - Draft persistence for autosave and reload-on-rejoin
//
// UI rendering and real-time audio transport live outside this crate.

pub mod adapter;
pub mod database;
pub mod review;
pub mod scoring;
pub mod store;

pub use review::*;
pub use scoring::{ScoringResult, ScoringWeights};
pub use store::{NewParticipant, SessionStore, StoreError, Transition};
