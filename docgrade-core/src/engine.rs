//! Quality scoring entry point.

use crate::domain::{CodeAnalysis, Grade, QualityScore};
use crate::health;
use crate::router;
use crate::rubric::{DocInput, Rubric};
use crate::summary;
use crate::warnings::{LogSink, WarningSink};

/// Scores generated documentation against the rubric for its type.
///
/// The scorer is stateless; every call is an independent pure computation
/// and may run concurrently with any other call.
pub struct QualityScorer<W: WarningSink> {
    warnings: W,
}

impl QualityScorer<LogSink> {
    /// Create a scorer whose warnings go to the `log` facade.
    pub fn new() -> Self {
        Self {
            warnings: LogSink::new(),
        }
    }
}

impl Default for QualityScorer<LogSink> {
    fn default() -> Self {
        Self::new()
    }
}

impl<W: WarningSink> QualityScorer<W> {
    /// Create a scorer with a custom warning sink.
    pub fn with_sink(warnings: W) -> Self {
        Self { warnings }
    }

    /// Score documentation text against the rubric selected by `doc_type`.
    ///
    /// `analysis` supplies the functions and classes the documentation is
    /// expected to cover; an empty analysis awards coverage criteria in
    /// full. `input_code` is the raw source the documentation was
    /// generated from and drives the improvement delta; pass an empty
    /// string when it is unavailable. Never fails: malformed input
    /// degrades to conservative scores.
    pub fn score(
        &self,
        documentation: &str,
        analysis: &CodeAnalysis,
        doc_type: &str,
        input_code: &str,
    ) -> QualityScore {
        let rubric = router::route(doc_type, &self.warnings).rubric();
        let input = DocInput::new(documentation, analysis);
        let results = rubric.evaluate(&input);

        let score = Rubric::total(&results);
        let summary = summary::summarize(&results);
        let input_code_health = health::assess(input_code);
        let improvement = input_code_health
            .as_ref()
            .map(|health| i32::from(score) - i32::from(health.score));

        QualityScore {
            score,
            grade: Grade::from_score(score),
            breakdown: results
                .into_iter()
                .map(|(key, criterion)| (key.to_string(), criterion))
                .collect(),
            summary,
            doc_type: doc_type.to_string(),
            input_code_health,
            improvement,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::QualityScorer;
    use crate::domain::CodeAnalysis;
    use crate::warnings::MockWarningSink;

    fn silent_scorer() -> QualityScorer<MockWarningSink> {
        let mut warnings = MockWarningSink::new();
        warnings.expect_warn().times(0);
        QualityScorer::with_sink(warnings)
    }

    #[test]
    fn doc_type_case_is_preserved_while_routing_is_insensitive() {
        let analysis = CodeAnalysis::default();
        let result = silent_scorer().score("@example\n", &analysis, "jsdoc", "");

        assert_eq!(result.doc_type, "jsdoc");
        assert!(result.breakdown.contains_key("functionCoverage"));
    }

    #[test]
    fn unknown_doc_type_warns_and_uses_readme_rubric() {
        let mut warnings = MockWarningSink::new();
        warnings
            .expect_warn()
            .withf(|message| message.contains("CHANGELOG"))
            .times(1)
            .return_const(());
        let scorer = QualityScorer::with_sink(warnings);

        let analysis = CodeAnalysis::default();
        let result = scorer.score("# Log\n\nAll changes.\n", &analysis, "CHANGELOG", "");

        assert_eq!(result.doc_type, "CHANGELOG");
        assert!(result.breakdown.contains_key("apiDocs"));
    }

    #[test]
    fn improvement_delta_tracks_input_code_health() {
        let analysis = CodeAnalysis::default();
        let documentation = "# Tool\n\nGood docs.\n\n## Installation\n\n```\ninstall\n```\n";
        let result = silent_scorer().score(documentation, &analysis, "README", "a=1\nb=2\n");

        let health = result.input_code_health.expect("health report");
        assert_eq!(
            result.improvement,
            Some(i32::from(result.score) - i32::from(health.score))
        );
    }

    #[test]
    fn missing_input_code_leaves_health_and_improvement_unset() {
        let analysis = CodeAnalysis::default();
        let result = silent_scorer().score("", &analysis, "README", "");

        assert!(result.input_code_health.is_none());
        assert!(result.improvement.is_none());
    }

    #[test]
    fn identical_inputs_score_identically() {
        let analysis = CodeAnalysis::default();
        let documentation = "# Tool\n\nDocs.\n";
        let first = silent_scorer().score(documentation, &analysis, "README", "x = 1\n");
        let second = silent_scorer().score(documentation, &analysis, "README", "x = 1\n");

        assert_eq!(first, second);
    }

    #[test]
    fn score_stays_within_bounds_for_arbitrary_text() {
        let analysis = CodeAnalysis::default();
        let noisy = "### GET /x\n```\n```\n200 404 500\nparameters header body curl\n";
        for doc_type in ["README", "JSDOC", "API", "OPENAPI", "ARCHITECTURE"] {
            let result = silent_scorer().score(noisy, &analysis, doc_type, "");
            assert!(result.score <= 100, "{doc_type}");
        }
    }
}
