// Review domain models - Competencies
use serde::{Deserialize, Serialize};

use super::ParticipantRole;

/// Structured behavioral evidence for a competency
/// (Situation / Task / Action / Result)
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct StarExample {
    pub id: String,
    pub situation: String,
    pub task: String,
    pub action: String,
    pub result: String,
    pub submitted_by: ParticipantRole,
}

/// A named evaluated trait with independent employee/manager ratings
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Competency {
    pub id: String,
    pub name: String,
    pub description: String,
    pub employee_rating: Option<f64>,
    pub manager_rating: Option<f64>,
    pub examples: Vec<StarExample>,
    pub needs_review: bool,
}

impl Competency {
    /// Create an unrated competency
    pub fn new(id: String, name: String, description: String) -> Self {
        Self {
            id,
            name,
            description,
            employee_rating: None,
            manager_rating: None,
            examples: Vec::new(),
            needs_review: false,
        }
    }
}

/// Updates that can be applied to a competency
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CompetencyUpdate {
    pub name: Option<String>,
    pub description: Option<String>,
    pub employee_rating: Option<f64>,
    pub manager_rating: Option<f64>,
    pub examples: Option<Vec<StarExample>>,
    pub needs_review: Option<bool>,
}

impl CompetencyUpdate {
    pub fn apply_to(&self, competency: &mut Competency) {
        if let Some(ref name) = self.name {
            competency.name = name.clone();
        }
        if let Some(ref description) = self.description {
            competency.description = description.clone();
        }
        if let Some(rating) = self.employee_rating {
            competency.employee_rating = Some(rating);
        }
        if let Some(rating) = self.manager_rating {
            competency.manager_rating = Some(rating);
        }
        if let Some(ref examples) = self.examples {
            competency.examples = examples.clone();
        }
        if let Some(needs_review) = self.needs_review {
            competency.needs_review = needs_review;
        }
    }
}
