// Session state store - the single mutable aggregate behind the UI
//
// All review/session data is read and mutated through `SessionStore`:
// a closed vocabulary of atomic transitions plus a few derived operations
// (join, consent, rating update) that compose them.

mod error;
mod session_store;
mod transition;

pub use error::StoreError;
pub use session_store::{NewParticipant, SessionSnapshot, SessionStore, StatusPolicy};
pub use transition::Transition;
