//! Table-driven rubric machinery.
//!
//! A rubric is a declarative list of criteria whose maximum points sum to
//! 100; one generic evaluator interprets every table.

use crate::domain::{CodeAnalysis, CriterionScore, Status};

/// Inputs shared by every criterion evaluator.
pub struct DocInput<'a> {
    /// Raw documentation text.
    pub text: &'a str,
    /// Lowercased copy for case-insensitive scans.
    pub lower: String,
    /// Structural analysis of the documented source.
    pub analysis: &'a CodeAnalysis,
}

impl<'a> DocInput<'a> {
    /// Prepare scoring input, lowercasing the text once up front.
    pub fn new(text: &'a str, analysis: &'a CodeAnalysis) -> Self {
        Self {
            text,
            lower: text.to_lowercase(),
            analysis,
        }
    }
}

/// One scored dimension within a rubric.
pub struct Criterion {
    /// Stable key used in breakdowns and summaries.
    pub key: &'static str,
    /// Maximum points the criterion can award.
    pub max_points: u8,
    /// Evaluator producing the criterion score.
    pub eval: fn(&DocInput<'_>) -> CriterionScore,
}

/// A named table of criteria.
pub struct Rubric {
    /// Documentation type the rubric scores.
    pub name: &'static str,
    /// Criteria in presentation order.
    pub criteria: &'static [Criterion],
}

impl Rubric {
    /// Evaluate every criterion in order.
    ///
    /// Awards are capped at each criterion's maximum and `present` is
    /// derived from the points actually earned.
    pub fn evaluate(&self, input: &DocInput<'_>) -> Vec<(&'static str, CriterionScore)> {
        self.criteria
            .iter()
            .map(|criterion| {
                let mut score = (criterion.eval)(input);
                score.max_points = criterion.max_points;
                score.points = score.points.min(criterion.max_points);
                score.present = score.points > 0;
                (criterion.key, score)
            })
            .collect()
    }

    /// Flat sum of awarded points, clamped to 0-100.
    pub fn total(results: &[(&'static str, CriterionScore)]) -> u8 {
        results
            .iter()
            .map(|(_, criterion)| u32::from(criterion.points))
            .sum::<u32>()
            .min(100) as u8
    }

    /// Sum of the table's maximum points. Always 100 for shipped rubrics.
    pub fn max_total(&self) -> u32 {
        self.criteria
            .iter()
            .map(|criterion| u32::from(criterion.max_points))
            .sum()
    }
}

/// Proportional award with round-half-up and the zero-denominator rule.
///
/// Returns `(points, coverage_percent, status)`. A zero denominator means
/// there is nothing to document, so full credit is awarded. Rounding is
/// half away from zero: a 50% ratio over 25 points awards 13.
pub fn coverage_points(max: u8, documented: usize, total: usize) -> (u8, u8, Status) {
    if total == 0 {
        return (max, 100, Status::Complete);
    }
    let documented = documented.min(total);
    let ratio = documented as f64 / total as f64;
    let points = (f64::from(max) * ratio).round() as u8;
    let percent = (ratio * 100.0).round() as u8;
    let status = if documented == total {
        Status::Complete
    } else if ratio < 0.5 {
        Status::Missing
    } else {
        Status::Partial
    };
    (points, percent, status)
}
