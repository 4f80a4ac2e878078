//! Domain entities for docgrade.

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Letter grade assigned to a 0-100 score.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub enum Grade {
    /// 90-100.
    A,
    /// 80-89.
    B,
    /// 70-79.
    C,
    /// 60-69.
    D,
    /// 0-59.
    F,
}

impl Grade {
    /// Classify a 0-100 score. Thresholds are inclusive at the lower edge.
    pub fn from_score(score: u8) -> Self {
        if score >= 90 {
            Self::A
        } else if score >= 80 {
            Self::B
        } else if score >= 70 {
            Self::C
        } else if score >= 60 {
            Self::D
        } else {
            Self::F
        }
    }
}

impl fmt::Display for Grade {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let letter = match self {
            Self::A => "A",
            Self::B => "B",
            Self::C => "C",
            Self::D => "D",
            Self::F => "F",
        };
        f.write_str(letter)
    }
}

/// Completion tier of a single criterion.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum Status {
    /// The criterion is fully satisfied.
    Complete,
    /// Some evidence was found, but the criterion is not fully satisfied.
    Partial,
    /// Little or no evidence was found.
    Missing,
}

/// Points awarded for one criterion of a rubric.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CriterionScore {
    /// Whether the criterion earned any points.
    pub present: bool,
    /// Points awarded, never above `max_points`.
    pub points: u8,
    /// Maximum points this criterion can award.
    pub max_points: u8,
    /// Completion tier.
    pub status: Status,
    /// Actionable suggestion when the criterion is not complete.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub suggestion: Option<String>,
    /// Detector-specific item count (code blocks, tags, endpoints).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub count: Option<usize>,
    /// Coverage percentage for proportional criteria.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub coverage_percent: Option<u8>,
    /// Number of headings found, for structure criteria.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub headers: Option<usize>,
    /// Whether a schema definition was found, for OpenAPI criteria.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub has_schema: Option<bool>,
}

impl CriterionScore {
    /// Create a score with no detector-specific fields set.
    pub fn new(points: u8, max_points: u8, status: Status) -> Self {
        Self {
            present: points > 0,
            points,
            max_points,
            status,
            suggestion: None,
            count: None,
            coverage_percent: None,
            headers: None,
            has_schema: None,
        }
    }
}

/// Strengths, improvements, and the single most relevant suggestion.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ScoreSummary {
    /// Keys of criteria with status complete, in rubric order.
    pub strengths: Vec<String>,
    /// Keys of criteria with status missing, in rubric order.
    pub improvements: Vec<String>,
    /// The suggestion from the highest-scoring criterion that carries one.
    pub top_suggestion: String,
}

/// Full scoring result for one document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct QualityScore {
    /// Aggregate score, 0-100.
    pub score: u8,
    /// Letter grade derived from the score.
    pub grade: Grade,
    /// Per-criterion results keyed by criterion.
    pub breakdown: BTreeMap<String, CriterionScore>,
    /// Derived strengths, improvements, and top suggestion.
    pub summary: ScoreSummary,
    /// The documentation type exactly as supplied by the caller.
    pub doc_type: String,
    /// Health of the original source, when it was supplied.
    pub input_code_health: Option<CodeHealthReport>,
    /// `score - input_code_health.score`, when the source was supplied.
    pub improvement: Option<i32>,
}

/// Structural analysis of the documented source, supplied by the parser.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase", default)]
pub struct CodeAnalysis {
    /// Free functions found in the source.
    pub functions: Vec<FunctionInfo>,
    /// Classes found in the source.
    pub classes: Vec<ClassInfo>,
}

impl CodeAnalysis {
    /// All function and method names the documentation should mention.
    pub fn documentable_names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self
            .functions
            .iter()
            .map(|function| function.name.as_str())
            .collect();
        for class in &self.classes {
            names.extend(class.methods.iter().map(|method| method.name.as_str()));
        }
        names
    }

    /// Total number of declared parameters across all functions.
    pub fn param_count(&self) -> usize {
        self.functions
            .iter()
            .map(|function| function.params.len())
            .sum()
    }
}

/// A function with its declared parameter names.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct FunctionInfo {
    /// Function name.
    pub name: String,
    /// Declared parameter names.
    #[serde(default)]
    pub params: Vec<String>,
}

/// A class with its method names.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ClassInfo {
    /// Class name.
    pub name: String,
    /// Methods declared on the class.
    #[serde(default)]
    pub methods: Vec<MethodInfo>,
}

/// A method declared on a class.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct MethodInfo {
    /// Method name.
    pub name: String,
}

/// Health assessment of the raw source documentation was generated from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CodeHealthReport {
    /// Aggregate health score, 0-100.
    pub score: u8,
    /// Letter grade derived from the score.
    pub grade: Grade,
    /// Points per health dimension.
    pub breakdown: CodeHealthBreakdown,
    /// One-line description of the assessment.
    pub summary: String,
}

/// Points per input-code health dimension.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CodeHealthBreakdown {
    /// Comment density, out of 20.
    pub comments: u8,
    /// Identifier naming quality, out of 20.
    pub naming: u8,
    /// Pre-existing documentation, out of 25.
    pub existing_docs: u8,
    /// Structural hygiene, out of 35.
    pub code_structure: u8,
}

#[cfg(test)]
mod tests {
    use super::{CodeAnalysis, CriterionScore, Grade, Status};

    #[test]
    fn grade_boundaries_are_inclusive_at_the_lower_edge() {
        assert_eq!(Grade::from_score(100), Grade::A);
        assert_eq!(Grade::from_score(90), Grade::A);
        assert_eq!(Grade::from_score(89), Grade::B);
        assert_eq!(Grade::from_score(80), Grade::B);
        assert_eq!(Grade::from_score(79), Grade::C);
        assert_eq!(Grade::from_score(70), Grade::C);
        assert_eq!(Grade::from_score(69), Grade::D);
        assert_eq!(Grade::from_score(60), Grade::D);
        assert_eq!(Grade::from_score(59), Grade::F);
        assert_eq!(Grade::from_score(0), Grade::F);
    }

    #[test]
    fn criterion_score_serializes_camel_case_and_omits_unset_fields() {
        let mut score = CriterionScore::new(15, 20, Status::Partial);
        score.coverage_percent = Some(75);
        let json = serde_json::to_value(&score).expect("serialize criterion");

        assert_eq!(json["maxPoints"], 20);
        assert_eq!(json["coveragePercent"], 75);
        assert_eq!(json["status"], "partial");
        assert!(json.get("count").is_none());
        assert!(json.get("hasSchema").is_none());
    }

    #[test]
    fn code_analysis_defaults_missing_fields() {
        let analysis: CodeAnalysis = serde_json::from_str("{}").expect("parse empty analysis");
        assert!(analysis.functions.is_empty());
        assert!(analysis.classes.is_empty());

        let analysis: CodeAnalysis =
            serde_json::from_str(r#"{"functions":[{"name":"run"}]}"#).expect("parse analysis");
        assert_eq!(analysis.functions[0].name, "run");
        assert!(analysis.functions[0].params.is_empty());
    }

    #[test]
    fn documentable_names_include_class_methods() {
        let analysis: CodeAnalysis = serde_json::from_str(
            r#"{
                "functions": [{"name": "fibonacci", "params": ["n"]}],
                "classes": [{"name": "DataProcessor", "methods": [{"name": "addData"}, {"name": "getAverage"}]}]
            }"#,
        )
        .expect("parse analysis");

        assert_eq!(
            analysis.documentable_names(),
            vec!["fibonacci", "addData", "getAverage"]
        );
        assert_eq!(analysis.param_count(), 1);
    }

    #[test]
    fn new_criterion_score_marks_presence_from_points() {
        assert!(CriterionScore::new(1, 20, Status::Partial).present);
        assert!(!CriterionScore::new(0, 20, Status::Missing).present);
    }
}
