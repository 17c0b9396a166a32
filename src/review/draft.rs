// Review domain models - Review draft
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{ActionItem, BiasFlag, Competency, Objective};
use crate::scoring::ScoringResult;

/// A persistable snapshot of in-progress review content
///
/// Drafts are keyed by session id and written by periodic autosave; loading
/// one hydrates the store's objectives, competencies, bias flags and action
/// items for reload-on-rejoin.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ReviewDraft {
    pub id: String,
    pub session_id: String,
    pub last_saved: DateTime<Utc>,
    pub objectives: Vec<Objective>,
    pub competencies: Vec<Competency>,
    pub bias_flags: Vec<BiasFlag>,
    pub action_items: Vec<ActionItem>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scoring: Option<ScoringResult>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rationale: Option<String>,
}
