//! JSDoc rubric: coverage, parameter/return tags, examples, type annotations.

use crate::detectors;
use crate::domain::{CriterionScore, Status};
use crate::rubric::{Criterion, DocInput, Rubric, coverage_points};

/// The JSDOC rubric.
pub static JSDOC: Rubric = Rubric {
    name: "JSDOC",
    criteria: &[
        Criterion {
            key: "functionCoverage",
            max_points: 30,
            eval: function_coverage,
        },
        Criterion {
            key: "parameters",
            max_points: 25,
            eval: parameters,
        },
        Criterion {
            key: "returns",
            max_points: 20,
            eval: returns,
        },
        Criterion {
            key: "examples",
            max_points: 15,
            eval: examples,
        },
        Criterion {
            key: "typeAnnotations",
            max_points: 10,
            eval: type_annotations,
        },
    ],
};

fn function_coverage(input: &DocInput<'_>) -> CriterionScore {
    let names = input.analysis.documentable_names();
    let documented = names
        .iter()
        .filter(|name| input.lower.contains(&name.to_lowercase()))
        .count();
    let (points, percent, status) = coverage_points(30, documented, names.len());
    let mut score = CriterionScore::new(points, 30, status);
    score.coverage_percent = Some(percent);
    if status != Status::Complete {
        score.suggestion = Some("Add JSDoc comments for every exported function".to_string());
    }
    score
}

fn parameters(input: &DocInput<'_>) -> CriterionScore {
    let expected = input.analysis.param_count();
    let tags = detectors::param_tag_count(input.text);
    let (points, percent, status) = coverage_points(25, tags, expected);
    let mut score = CriterionScore::new(points, 25, status);
    score.count = Some(tags);
    score.coverage_percent = Some(percent);
    if status != Status::Complete {
        score.suggestion = Some("Document every parameter with an @param tag".to_string());
    }
    score
}

fn returns(input: &DocInput<'_>) -> CriterionScore {
    let functions = input.analysis.documentable_names().len();
    let tags = detectors::return_tag_count(input.text);
    let (points, percent, status) = coverage_points(20, tags, functions);
    let mut score = CriterionScore::new(points, 20, status);
    score.count = Some(tags);
    score.coverage_percent = Some(percent);
    if status != Status::Complete {
        score.suggestion = Some("Describe return values with @returns tags".to_string());
    }
    score
}

fn examples(input: &DocInput<'_>) -> CriterionScore {
    let tags = detectors::example_tag_count(input.text);
    let (points, status) = match tags {
        0 => (0, Status::Missing),
        1 => (10, Status::Partial),
        _ => (15, Status::Complete),
    };
    let mut score = CriterionScore::new(points, 15, status);
    score.count = Some(tags);
    if status != Status::Complete {
        score.suggestion = Some("Add @example blocks showing typical usage".to_string());
    }
    score
}

fn type_annotations(input: &DocInput<'_>) -> CriterionScore {
    if detectors::has_typed_tags(input.text) {
        return CriterionScore::new(10, 10, Status::Complete);
    }
    let mut score = CriterionScore::new(0, 10, Status::Missing);
    score.suggestion = Some("Annotate @param and @returns tags with types in braces".to_string());
    score
}
