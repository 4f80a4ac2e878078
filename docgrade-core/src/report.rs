//! Report formatting utilities for docgrade outputs.

use std::fmt::Write;

use serde::{Deserialize, Serialize};

use crate::domain::{CodeHealthReport, CriterionScore, QualityScore, Status};

/// A scored document paired with its source label.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoredDocument {
    /// Document source (path or label).
    pub source: String,
    /// Scoring result for the document.
    pub result: QualityScore,
}

impl ScoredDocument {
    /// Pair a result with its source label.
    pub fn new(source: impl Into<String>, result: QualityScore) -> Self {
        Self {
            source: source.into(),
            result,
        }
    }
}

/// Render a list of scored documents as Markdown.
pub fn render_markdown(documents: &[ScoredDocument]) -> String {
    let mut output = String::new();
    let _ = writeln!(output, "# Documentation Quality Report\n");
    for document in documents {
        let _ = writeln!(output, "## {}\n", document.source);
        append_score_line(&mut output, &document.result);
        append_breakdown(&mut output, &document.result);
        append_summary(&mut output, &document.result);
        append_health(&mut output, document.result.input_code_health.as_ref());
        let _ = writeln!(output);
    }
    output
}

/// Render a compact one-line summary per document for terminal output.
pub fn render_text(documents: &[ScoredDocument]) -> String {
    let mut output = String::new();
    for document in documents {
        let result = &document.result;
        let _ = writeln!(
            output,
            "{}: {}/100 ({}) - {}",
            document.source, result.score, result.grade, result.summary.top_suggestion
        );
    }
    output
}

/// Render any serializable report payload as JSON.
pub fn render_json<T: Serialize + ?Sized>(payload: &T) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(payload)
}

fn append_score_line(output: &mut String, result: &QualityScore) {
    let _ = writeln!(
        output,
        "- Score: {}/100 ({})",
        result.score, result.grade
    );
    let _ = writeln!(output, "- Type: {}", result.doc_type);
    if let Some(improvement) = result.improvement {
        let _ = writeln!(output, "- Improvement over input code: {improvement:+}");
    }
    let _ = writeln!(output);
}

fn append_breakdown(output: &mut String, result: &QualityScore) {
    let _ = writeln!(output, "### Breakdown");
    let _ = writeln!(output, "| Criterion | Points | Status |");
    let _ = writeln!(output, "| --- | --- | --- |");
    for (key, criterion) in &result.breakdown {
        let _ = writeln!(
            output,
            "| {key} | {}/{} | {} |",
            criterion.points,
            criterion.max_points,
            status_label(criterion)
        );
    }
    let _ = writeln!(output);
}

fn append_summary(output: &mut String, result: &QualityScore) {
    append_key_list(output, "Strengths", &result.summary.strengths);
    append_key_list(output, "Improvements", &result.summary.improvements);
    let _ = writeln!(output, "### Top suggestion");
    let _ = writeln!(output, "{}\n", result.summary.top_suggestion);
}

fn append_key_list(output: &mut String, title: &str, keys: &[String]) {
    if keys.is_empty() {
        let _ = writeln!(output, "### {title}\nNone.\n");
        return;
    }
    let _ = writeln!(output, "### {title}");
    for key in keys {
        let _ = writeln!(output, "- {key}");
    }
    let _ = writeln!(output);
}

fn append_health(output: &mut String, health: Option<&CodeHealthReport>) {
    let Some(health) = health else {
        return;
    };
    let _ = writeln!(output, "### Input code health");
    let _ = writeln!(output, "- Score: {}/100 ({})", health.score, health.grade);
    let _ = writeln!(
        output,
        "- Comments: {}/20, naming: {}/20, existing docs: {}/25, structure: {}/35",
        health.breakdown.comments,
        health.breakdown.naming,
        health.breakdown.existing_docs,
        health.breakdown.code_structure
    );
    let _ = writeln!(output, "- {}\n", health.summary);
}

fn status_label(criterion: &CriterionScore) -> &'static str {
    match criterion.status {
        Status::Complete => "complete",
        Status::Partial => "partial",
        Status::Missing => "missing",
    }
}
