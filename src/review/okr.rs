// Review domain models - Objectives and key results
use serde::{Deserialize, Serialize};

/// Inclusive numeric range a rating must fall in
///
/// The default scale is 1-5. Out-of-range ratings are a caller error and are
/// rejected at ingestion, never clamped.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct RatingScale {
    pub min: f64,
    pub max: f64,
}

impl RatingScale {
    pub fn contains(&self, rating: f64) -> bool {
        rating >= self.min && rating <= self.max
    }
}

impl Default for RatingScale {
    fn default() -> Self {
        Self { min: 1.0, max: 5.0 }
    }
}

/// A single key result under an objective
///
/// Ratings are independent per side and start out absent; `None` means
/// "not yet rated", which the scoring engine excludes from averages.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct KeyResult {
    pub id: String,
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target_value: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub actual_value: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub unit: Option<String>,
    pub employee_rating: Option<f64>,
    pub manager_rating: Option<f64>,
    pub employee_evidence: String,
    pub manager_evidence: String,
    pub needs_review: bool,
}

impl KeyResult {
    /// Create an unrated key result
    pub fn new(id: String, title: String) -> Self {
        Self {
            id,
            title,
            description: None,
            target_value: None,
            actual_value: None,
            unit: None,
            employee_rating: None,
            manager_rating: None,
            employee_evidence: String::new(),
            manager_evidence: String::new(),
            needs_review: false,
        }
    }
}

/// Updates that can be applied to a key result
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct KeyResultUpdate {
    pub title: Option<String>,
    pub description: Option<String>,
    pub employee_rating: Option<f64>,
    pub manager_rating: Option<f64>,
    pub employee_evidence: Option<String>,
    pub manager_evidence: Option<String>,
    pub needs_review: Option<bool>,
}

impl KeyResultUpdate {
    pub fn apply_to(&self, key_result: &mut KeyResult) {
        if let Some(ref title) = self.title {
            key_result.title = title.clone();
        }
        if let Some(ref description) = self.description {
            key_result.description = Some(description.clone());
        }
        if let Some(rating) = self.employee_rating {
            key_result.employee_rating = Some(rating);
        }
        if let Some(rating) = self.manager_rating {
            key_result.manager_rating = Some(rating);
        }
        if let Some(ref evidence) = self.employee_evidence {
            key_result.employee_evidence = evidence.clone();
        }
        if let Some(ref evidence) = self.manager_evidence {
            key_result.manager_evidence = evidence.clone();
        }
        if let Some(needs_review) = self.needs_review {
            key_result.needs_review = needs_review;
        }
    }
}

/// An objective owning a weighted, ordered list of key results
///
/// Weight is relative across objectives and must be non-negative; a weight of
/// zero contributes nothing to the weighted score.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Objective {
    pub id: String,
    pub title: String,
    pub weight: f64,
    pub key_results: Vec<KeyResult>,
}

impl Objective {
    pub fn new(id: String, title: String, weight: f64) -> Self {
        Self {
            id,
            title,
            weight,
            key_results: Vec::new(),
        }
    }

    /// Find a key result by id, mutably
    pub fn key_result_mut(&mut self, id: &str) -> Option<&mut KeyResult> {
        self.key_results.iter_mut().find(|kr| kr.id == id)
    }
}

/// Updates that can be applied to an objective
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ObjectiveUpdate {
    pub title: Option<String>,
    pub weight: Option<f64>,
    pub key_results: Option<Vec<KeyResult>>,
}

impl ObjectiveUpdate {
    pub fn apply_to(&self, objective: &mut Objective) {
        if let Some(ref title) = self.title {
            objective.title = title.clone();
        }
        if let Some(weight) = self.weight {
            objective.weight = weight;
        }
        if let Some(ref key_results) = self.key_results {
            objective.key_results = key_results.clone();
        }
    }
}
