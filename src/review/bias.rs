// Review domain models - Bias flags
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::ParticipantRole;

/// Category of detected bias in a flagged utterance
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum BiasType {
    Recency,
    Halo,
    Horn,
    Similarity,
    Attribution,
    Contrast,
    Other,
}

impl BiasType {
    pub fn as_str(&self) -> &'static str {
        match self {
            BiasType::Recency => "recency",
            BiasType::Halo => "halo",
            BiasType::Horn => "horn",
            BiasType::Similarity => "similarity",
            BiasType::Attribution => "attribution",
            BiasType::Contrast => "contrast",
            BiasType::Other => "other",
        }
    }
}

/// An utterance flagged by the (external) bias detector
///
/// Flags are append-only: once raised they are acknowledged or reframed via
/// partial updates, never removed.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct BiasFlag {
    pub id: String,
    pub timestamp: DateTime<Utc>,
    pub original_text: String,
    pub bias_type: BiasType,
    /// Detector confidence in [0, 1]
    pub confidence: f64,
    pub suggested_rephrase: String,
    pub speaker: ParticipantRole,
    pub acknowledged: bool,
    pub reframed: bool,
}

/// Updates that can be applied to a bias flag
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct BiasFlagUpdate {
    pub acknowledged: Option<bool>,
    pub reframed: Option<bool>,
    pub suggested_rephrase: Option<String>,
}

impl BiasFlagUpdate {
    pub fn apply_to(&self, flag: &mut BiasFlag) {
        if let Some(acknowledged) = self.acknowledged {
            flag.acknowledged = acknowledged;
        }
        if let Some(reframed) = self.reframed {
            flag.reframed = reframed;
        }
        if let Some(ref rephrase) = self.suggested_rephrase {
            flag.suggested_rephrase = rephrase.clone();
        }
    }
}
