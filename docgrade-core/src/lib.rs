#![deny(missing_docs)]
//! Docgrade core library.
//!
//! Deterministic quality scoring for machine-generated documentation:
//! one weighted rubric per documentation type, letter grades,
//! per-criterion breakdowns with actionable suggestions, and a parallel
//! input-code health score used to report an improvement delta.

pub mod detectors;
pub mod domain;
pub mod engine;
pub mod health;
pub mod report;
pub mod router;
/// Table-driven rubric machinery shared by every documentation type.
pub mod rubric;
pub mod rubrics;
pub mod summary;
pub mod warnings;

pub use domain::{
    ClassInfo, CodeAnalysis, CodeHealthBreakdown, CodeHealthReport, CriterionScore, FunctionInfo,
    Grade, MethodInfo, QualityScore, ScoreSummary, Status,
};
pub use engine::QualityScorer;
pub use report::{ScoredDocument, render_json, render_markdown, render_text};
pub use router::DocType;
pub use summary::ALL_CLEAR;
pub use warnings::{LogSink, WarningSink};
