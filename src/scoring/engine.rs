// Scoring engine - weighted OKR/competency aggregation and discrepancy detection
use serde::{Deserialize, Serialize};

use crate::review::{Competency, KeyResult, Objective};

/// Rating gap above which an employee/manager disagreement is surfaced
pub const DEFAULT_DISCREPANCY_THRESHOLD: f64 = 1.5;

/// Which side's ratings a calculation reads
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RaterSide {
    Employee,
    Manager,
}

/// Perspective for aggregate scores: one side, or both sides combined
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Perspective {
    Employee,
    Manager,
    Combined,
}

/// Relative weights for the overall composite score
///
/// Not required to sum to 1 and never normalized; callers wanting a result
/// bounded by the rating scale must supply weights that sum to 1.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct ScoringWeights {
    pub okr: f64,
    pub competency: f64,
}

impl Default for ScoringWeights {
    fn default() -> Self {
        Self {
            okr: 0.6,
            competency: 0.4,
        }
    }
}

/// Type of item a discrepancy refers to
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ItemType {
    Okr,
    Competency,
}

/// An employee/manager rating gap on a single item
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Discrepancy {
    pub item_id: String,
    pub item_type: ItemType,
    pub difference: f64,
}

/// Derived scores for a review snapshot; never persisted as live state
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ScoringResult {
    pub okr_score: f64,
    pub competency_score: f64,
    pub overall_score: f64,
    pub employee_average: f64,
    pub manager_average: f64,
    pub discrepancies: Vec<Discrepancy>,
}

fn side_rating(key_result: &KeyResult, side: RaterSide) -> Option<f64> {
    match side {
        RaterSide::Employee => key_result.employee_rating,
        RaterSide::Manager => key_result.manager_rating,
    }
}

/// Average rating for a set of key results from one side's perspective
///
/// Key results that side has not rated are excluded; returns 0 when nothing
/// is rated.
pub fn key_result_average(key_results: &[KeyResult], side: RaterSide) -> f64 {
    let ratings: Vec<f64> = key_results
        .iter()
        .filter_map(|kr| side_rating(kr, side))
        .collect();

    if ratings.is_empty() {
        return 0.0;
    }

    ratings.iter().sum::<f64>() / ratings.len() as f64
}

/// Weighted OKR score across all objectives
///
/// Each objective contributes its key-result average scaled by its weight.
/// For `Combined`, an objective's value is the unweighted mean of its
/// separately computed employee and manager averages (average-of-averages,
/// not a pooled average over all individual ratings). A total weight of 0
/// yields 0.
pub fn okr_score(objectives: &[Objective], perspective: Perspective) -> f64 {
    if objectives.is_empty() {
        return 0.0;
    }

    let mut total_weight = 0.0;
    let mut weighted_sum = 0.0;

    for objective in objectives {
        total_weight += objective.weight;

        let value = match perspective {
            Perspective::Combined => {
                let employee_avg = key_result_average(&objective.key_results, RaterSide::Employee);
                let manager_avg = key_result_average(&objective.key_results, RaterSide::Manager);
                (employee_avg + manager_avg) / 2.0
            }
            Perspective::Employee => key_result_average(&objective.key_results, RaterSide::Employee),
            Perspective::Manager => key_result_average(&objective.key_results, RaterSide::Manager),
        };

        weighted_sum += value * objective.weight;
    }

    if total_weight > 0.0 {
        weighted_sum / total_weight
    } else {
        0.0
    }
}

/// Average competency score
///
/// For `Combined`, each competency contributes the mean of whichever sides
/// are rated; competencies with neither side rated are excluded. For a
/// single side, unrated competencies are excluded. Returns 0 when no
/// competency has a usable rating.
pub fn competency_score(competencies: &[Competency], perspective: Perspective) -> f64 {
    let ratings: Vec<f64> = competencies
        .iter()
        .filter_map(|c| match perspective {
            Perspective::Combined => {
                let sides: Vec<f64> = [c.employee_rating, c.manager_rating]
                    .into_iter()
                    .flatten()
                    .collect();
                if sides.is_empty() {
                    None
                } else {
                    Some(sides.iter().sum::<f64>() / sides.len() as f64)
                }
            }
            Perspective::Employee => c.employee_rating,
            Perspective::Manager => c.manager_rating,
        })
        .collect();

    if ratings.is_empty() {
        return 0.0;
    }

    ratings.iter().sum::<f64>() / ratings.len() as f64
}

/// Find rating discrepancies between employee and manager
///
/// Only items both sides have rated are considered. The result is
/// stable-sorted non-increasing by difference, so ties keep their encounter
/// order: key results in objective order first, then competencies.
pub fn find_discrepancies(
    objectives: &[Objective],
    competencies: &[Competency],
    threshold: f64,
) -> Vec<Discrepancy> {
    let mut discrepancies = Vec::new();

    for objective in objectives {
        for kr in &objective.key_results {
            if let (Some(employee), Some(manager)) = (kr.employee_rating, kr.manager_rating) {
                let difference = (employee - manager).abs();
                if difference >= threshold {
                    discrepancies.push(Discrepancy {
                        item_id: kr.id.clone(),
                        item_type: ItemType::Okr,
                        difference,
                    });
                }
            }
        }
    }

    for competency in competencies {
        if let (Some(employee), Some(manager)) =
            (competency.employee_rating, competency.manager_rating)
        {
            let difference = (employee - manager).abs();
            if difference >= threshold {
                discrepancies.push(Discrepancy {
                    item_id: competency.id.clone(),
                    item_type: ItemType::Competency,
                    difference,
                });
            }
        }
    }

    // Vec::sort_by is stable, which preserves encounter order for equal gaps
    discrepancies.sort_by(|a, b| b.difference.total_cmp(&a.difference));
    discrepancies
}

/// Complete scoring result for a review snapshot
///
/// Combines the combined OKR and competency scores under the given weights,
/// recomputes employee-only and manager-only composites independently, and
/// attaches discrepancies at the default threshold.
pub fn scoring_result(
    objectives: &[Objective],
    competencies: &[Competency],
    weights: ScoringWeights,
) -> ScoringResult {
    let okr = okr_score(objectives, Perspective::Combined);
    let competency = competency_score(competencies, Perspective::Combined);
    let overall_score = okr * weights.okr + competency * weights.competency;

    let employee_average = okr_score(objectives, Perspective::Employee) * weights.okr
        + competency_score(competencies, Perspective::Employee) * weights.competency;
    let manager_average = okr_score(objectives, Perspective::Manager) * weights.okr
        + competency_score(competencies, Perspective::Manager) * weights.competency;

    ScoringResult {
        okr_score: okr,
        competency_score: competency,
        overall_score,
        employee_average,
        manager_average,
        discrepancies: find_discrepancies(objectives, competencies, DEFAULT_DISCREPANCY_THRESHOLD),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key_result(id: &str, employee: Option<f64>, manager: Option<f64>) -> KeyResult {
        let mut kr = KeyResult::new(id.to_string(), format!("KR {}", id));
        kr.employee_rating = employee;
        kr.manager_rating = manager;
        kr
    }

    fn objective(id: &str, weight: f64, key_results: Vec<KeyResult>) -> Objective {
        let mut o = Objective::new(id.to_string(), format!("Objective {}", id), weight);
        o.key_results = key_results;
        o
    }

    fn competency(id: &str, employee: Option<f64>, manager: Option<f64>) -> Competency {
        let mut c = Competency::new(id.to_string(), format!("Comp {}", id), String::new());
        c.employee_rating = employee;
        c.manager_rating = manager;
        c
    }

    #[test]
    fn test_key_result_average_unrated_is_zero() {
        let krs = vec![key_result("a", None, None), key_result("b", None, None)];
        assert_eq!(key_result_average(&krs, RaterSide::Employee), 0.0);
        assert_eq!(key_result_average(&krs, RaterSide::Manager), 0.0);
    }

    #[test]
    fn test_key_result_average_skips_unrated() {
        let krs = vec![
            key_result("a", Some(4.0), None),
            key_result("b", None, Some(2.0)),
            key_result("c", Some(2.0), Some(3.0)),
        ];
        assert_eq!(key_result_average(&krs, RaterSide::Employee), 3.0);
        assert_eq!(key_result_average(&krs, RaterSide::Manager), 2.5);
    }

    #[test]
    fn test_okr_score_weighted_combined() {
        // Per-objective combined averages 4, 2, 3 under weights 2, 1, 1
        // -> (4*2 + 2*1 + 3*1) / 4 = 3.25
        let objectives = vec![
            objective("o1", 2.0, vec![key_result("k1", Some(4.0), Some(4.0))]),
            objective("o2", 1.0, vec![key_result("k2", Some(2.0), Some(2.0))]),
            objective("o3", 1.0, vec![key_result("k3", Some(3.0), Some(3.0))]),
        ];
        assert_eq!(okr_score(&objectives, Perspective::Combined), 3.25);
    }

    #[test]
    fn test_okr_score_combined_is_average_of_averages() {
        // Employee rated two key results (4, 2 -> avg 3), manager rated one (5).
        // Combined objective value must be (3 + 5) / 2 = 4, not the pooled
        // mean of all three ratings.
        let objectives = vec![objective(
            "o1",
            1.0,
            vec![
                key_result("k1", Some(4.0), Some(5.0)),
                key_result("k2", Some(2.0), None),
            ],
        )];
        assert_eq!(okr_score(&objectives, Perspective::Combined), 4.0);
    }

    #[test]
    fn test_okr_score_zero_total_weight() {
        let objectives = vec![objective("o1", 0.0, vec![key_result("k1", Some(5.0), Some(5.0))])];
        assert_eq!(okr_score(&objectives, Perspective::Combined), 0.0);
    }

    #[test]
    fn test_okr_score_empty() {
        assert_eq!(okr_score(&[], Perspective::Employee), 0.0);
    }

    #[test]
    fn test_competency_score_combined_mean_of_rated_sides() {
        let comps = vec![competency("c1", Some(5.0), Some(3.0))];
        assert_eq!(competency_score(&comps, Perspective::Combined), 4.0);
    }

    #[test]
    fn test_competency_score_single_sided_entries() {
        // One side rated -> that rating stands alone for Combined; unrated
        // competencies drop out entirely.
        let comps = vec![
            competency("c1", Some(4.0), None),
            competency("c2", None, None),
        ];
        assert_eq!(competency_score(&comps, Perspective::Combined), 4.0);
        assert_eq!(competency_score(&comps, Perspective::Employee), 4.0);
        assert_eq!(competency_score(&comps, Perspective::Manager), 0.0);
    }

    #[test]
    fn test_find_discrepancies_threshold_and_order() {
        let objectives = vec![objective(
            "o1",
            1.0,
            vec![
                key_result("k1", Some(5.0), Some(3.0)), // diff 2.0
                key_result("k2", Some(4.0), Some(3.0)), // diff 1.0, below threshold
                key_result("k3", Some(1.0), Some(4.0)), // diff 3.0
            ],
        )];
        let comps = vec![competency("c1", Some(5.0), Some(3.0))]; // diff 2.0

        let found = find_discrepancies(&objectives, &comps, DEFAULT_DISCREPANCY_THRESHOLD);
        let ids: Vec<&str> = found.iter().map(|d| d.item_id.as_str()).collect();
        // Descending by difference; the tie between k1 and c1 keeps encounter
        // order (key results before competencies).
        assert_eq!(ids, vec!["k3", "k1", "c1"]);
        assert_eq!(found[0].difference, 3.0);
        assert_eq!(found[1].item_type, ItemType::Okr);
        assert_eq!(found[2].item_type, ItemType::Competency);
    }

    #[test]
    fn test_find_discrepancies_requires_both_sides() {
        let objectives = vec![objective(
            "o1",
            1.0,
            vec![key_result("k1", Some(5.0), None)],
        )];
        assert!(find_discrepancies(&objectives, &[], 1.5).is_empty());
    }

    #[test]
    fn test_single_competency_gap_reported() {
        let comps = vec![competency("c1", Some(5.0), Some(3.0))];
        let found = find_discrepancies(&[], &comps, DEFAULT_DISCREPANCY_THRESHOLD);
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].difference, 2.0);
    }

    #[test]
    fn test_scoring_result_idempotent() {
        let objectives = vec![
            objective("o1", 2.0, vec![key_result("k1", Some(4.0), Some(2.0))]),
            objective("o2", 1.0, vec![key_result("k2", Some(3.0), None)]),
        ];
        let comps = vec![competency("c1", Some(5.0), Some(3.0))];

        let first = scoring_result(&objectives, &comps, ScoringWeights::default());
        let second = scoring_result(&objectives, &comps, ScoringWeights::default());
        assert_eq!(first, second);
    }

    #[test]
    fn test_scoring_result_composite_weights() {
        let objectives = vec![objective(
            "o1",
            1.0,
            vec![key_result("k1", Some(4.0), Some(4.0))],
        )];
        let comps = vec![competency("c1", Some(3.0), Some(3.0))];

        let result = scoring_result(&objectives, &comps, ScoringWeights::default());
        assert_eq!(result.okr_score, 4.0);
        assert_eq!(result.competency_score, 3.0);
        assert!((result.overall_score - (4.0 * 0.6 + 3.0 * 0.4)).abs() < 1e-12);
        assert_eq!(result.employee_average, result.manager_average);
    }
}
