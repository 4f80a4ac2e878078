//! Strength, improvement, and suggestion summaries for a scored rubric.

use crate::domain::{CriterionScore, ScoreSummary, Status};

/// Fixed message used when no criterion carries a suggestion.
pub const ALL_CLEAR: &str = "Documentation looks good! No major improvements needed.";

/// Build the summary for an ordered list of criterion results.
pub fn summarize(results: &[(&'static str, CriterionScore)]) -> ScoreSummary {
    let strengths = keys_with_status(results, Status::Complete);
    let improvements = keys_with_status(results, Status::Missing);
    ScoreSummary {
        strengths,
        improvements,
        top_suggestion: top_suggestion(results),
    }
}

fn keys_with_status(results: &[(&'static str, CriterionScore)], status: Status) -> Vec<String> {
    results
        .iter()
        .filter(|(_, criterion)| criterion.status == status)
        .map(|(key, _)| (*key).to_string())
        .collect()
}

/// Pick the suggestion attached to the highest-scoring criterion.
///
/// The sort key is the points already awarded, not the points missing;
/// ties keep rubric order. A mostly complete criterion with a leftover
/// suggestion therefore outranks a fully missing one.
fn top_suggestion(results: &[(&'static str, CriterionScore)]) -> String {
    let mut ordered: Vec<&(&'static str, CriterionScore)> = results.iter().collect();
    ordered.sort_by(|a, b| b.1.points.cmp(&a.1.points));
    ordered
        .iter()
        .find_map(|(_, criterion)| criterion.suggestion.clone())
        .unwrap_or_else(|| ALL_CLEAR.to_string())
}
