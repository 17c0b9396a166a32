// Scoring labels - ordinal labels and severity bands for numeric scores
//
// Kept next to the engine so the breakpoint semantics stay centralized
// instead of being re-derived in every rendering surface.

/// Severity bucket for a score, from best to worst
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScoreBand {
    Success,
    Primary,
    Warning,
    Destructive,
}

impl ScoreBand {
    pub fn as_str(&self) -> &'static str {
        match self {
            ScoreBand::Success => "success",
            ScoreBand::Primary => "primary",
            ScoreBand::Warning => "warning",
            ScoreBand::Destructive => "destructive",
        }
    }
}

/// Ordinal label for a score, with upper-inclusive half-point breakpoints
pub fn rating_label(score: f64) -> &'static str {
    if score >= 4.5 {
        "Outstanding"
    } else if score >= 3.5 {
        "Exceeds Expectations"
    } else if score >= 2.5 {
        "Meets Expectations"
    } else if score >= 1.5 {
        "Partially Meets"
    } else {
        "Needs Improvement"
    }
}

/// Severity band for a score at whole-point breakpoints
pub fn score_band(score: f64) -> ScoreBand {
    if score >= 4.0 {
        ScoreBand::Success
    } else if score >= 3.0 {
        ScoreBand::Primary
    } else if score >= 2.0 {
        ScoreBand::Warning
    } else {
        ScoreBand::Destructive
    }
}

/// Format a score for display, e.g. 3.75 -> "3.8"
pub fn format_score(score: f64, decimals: usize) -> String {
    format!("{:.*}", decimals, score)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rating_label_breakpoints_inclusive() {
        assert_eq!(rating_label(4.5), "Outstanding");
        assert_eq!(rating_label(4.49), "Exceeds Expectations");
        assert_eq!(rating_label(3.5), "Exceeds Expectations");
        assert_eq!(rating_label(3.49), "Meets Expectations");
        assert_eq!(rating_label(2.5), "Meets Expectations");
        assert_eq!(rating_label(1.5), "Partially Meets");
        assert_eq!(rating_label(1.49), "Needs Improvement");
        assert_eq!(rating_label(0.0), "Needs Improvement");
    }

    #[test]
    fn test_score_band_breakpoints() {
        assert_eq!(score_band(4.0), ScoreBand::Success);
        assert_eq!(score_band(3.9), ScoreBand::Primary);
        assert_eq!(score_band(3.0), ScoreBand::Primary);
        assert_eq!(score_band(2.0), ScoreBand::Warning);
        assert_eq!(score_band(1.9), ScoreBand::Destructive);
    }

    #[test]
    fn test_format_score() {
        assert_eq!(format_score(3.75, 1), "3.8");
        assert_eq!(format_score(4.0, 1), "4.0");
        assert_eq!(format_score(3.333, 2), "3.33");
    }
}
