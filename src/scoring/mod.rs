// Scoring module - pure score aggregation and presentation constants
//
// Everything here is stateless and total: the same inputs always produce the
// same result, empty inputs score 0 rather than failing. Callers must treat
// a 0 as "no data", not as a valid lowest score.

mod engine;
mod labels;

pub use engine::{
    find_discrepancies, key_result_average, okr_score, competency_score, scoring_result,
    Discrepancy, ItemType, Perspective, RaterSide, ScoringResult, ScoringWeights,
    DEFAULT_DISCREPANCY_THRESHOLD,
};
pub use labels::{format_score, rating_label, score_band, ScoreBand};
