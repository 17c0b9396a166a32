// Review domain models - Action items
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::ParticipantRole;

/// Progress status of an action item
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ActionItemStatus {
    Pending,
    #[serde(rename = "in-progress")]
    InProgress,
    Completed,
}

impl ActionItemStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            ActionItemStatus::Pending => "pending",
            ActionItemStatus::InProgress => "in-progress",
            ActionItemStatus::Completed => "completed",
        }
    }
}

/// A follow-up commitment agreed during the review
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ActionItem {
    pub id: String,
    pub description: String,
    pub owner: ParticipantRole,
    pub metric: String,
    pub deadline: DateTime<Utc>,
    pub status: ActionItemStatus,
}

/// Updates that can be applied to an action item
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ActionItemUpdate {
    pub description: Option<String>,
    pub owner: Option<ParticipantRole>,
    pub metric: Option<String>,
    pub deadline: Option<DateTime<Utc>>,
    pub status: Option<ActionItemStatus>,
}

impl ActionItemUpdate {
    pub fn apply_to(&self, item: &mut ActionItem) {
        if let Some(ref description) = self.description {
            item.description = description.clone();
        }
        if let Some(owner) = self.owner {
            item.owner = owner;
        }
        if let Some(ref metric) = self.metric {
            item.metric = metric.clone();
        }
        if let Some(deadline) = self.deadline {
            item.deadline = deadline;
        }
        if let Some(status) = self.status {
            item.status = status;
        }
    }
}
