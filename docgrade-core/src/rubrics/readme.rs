//! README rubric: overview, installation, examples, API coverage, structure.

use crate::detectors;
use crate::domain::{CriterionScore, Status};
use crate::rubric::{Criterion, DocInput, Rubric, coverage_points};

/// The README rubric, also used as the fallback for unknown doc types.
pub static README: Rubric = Rubric {
    name: "README",
    criteria: &[
        Criterion {
            key: "overview",
            max_points: 20,
            eval: overview,
        },
        Criterion {
            key: "installation",
            max_points: 15,
            eval: installation,
        },
        Criterion {
            key: "examples",
            max_points: 20,
            eval: examples,
        },
        Criterion {
            key: "apiDocs",
            max_points: 25,
            eval: api_docs,
        },
        Criterion {
            key: "structure",
            max_points: 20,
            eval: structure,
        },
    ],
};

const OVERVIEW_HEADINGS: &[&str] = &["overview", "description", "about", "introduction", "what is"];
const INSTALL_HEADINGS: &[&str] = &[
    "installation",
    "setup",
    "getting started",
    "install",
    "requirements",
];

fn overview(input: &DocInput<'_>) -> CriterionScore {
    let found = detectors::has_heading(input.text, OVERVIEW_HEADINGS)
        || detectors::paragraph_after_title(input.text);
    if found {
        return CriterionScore::new(20, 20, Status::Complete);
    }
    let mut score = CriterionScore::new(0, 20, Status::Missing);
    score.suggestion = Some("Add an overview section explaining what the project does".to_string());
    score
}

fn installation(input: &DocInput<'_>) -> CriterionScore {
    if detectors::has_heading(input.text, INSTALL_HEADINGS) {
        return CriterionScore::new(15, 15, Status::Complete);
    }
    let mut score = CriterionScore::new(0, 15, Status::Missing);
    score.suggestion = Some("Add installation or setup instructions".to_string());
    score
}

fn examples(input: &DocInput<'_>) -> CriterionScore {
    let blocks = detectors::code_block_count(input.text);
    let (points, status) = match blocks {
        0 => (0, Status::Missing),
        1 => (10, Status::Partial),
        2 => (15, Status::Partial),
        _ => (20, Status::Complete),
    };
    let mut score = CriterionScore::new(points, 20, status);
    score.count = Some(blocks);
    if status != Status::Complete {
        score.suggestion = Some("Add more usage examples in fenced code blocks".to_string());
    }
    score
}

fn api_docs(input: &DocInput<'_>) -> CriterionScore {
    let names = input.analysis.documentable_names();
    let documented = names
        .iter()
        .filter(|name| input.lower.contains(&name.to_lowercase()))
        .count();
    let (points, percent, status) = coverage_points(25, documented, names.len());
    let mut score = CriterionScore::new(points, 25, status);
    score.coverage_percent = Some(percent);
    if status != Status::Complete {
        score.suggestion = Some(format!(
            "Document the remaining {} of {} functions and methods",
            names.len() - documented,
            names.len()
        ));
    }
    score
}

fn structure(input: &DocInput<'_>) -> CriterionScore {
    let headers = detectors::heading_count(input.text);
    let has_code = detectors::code_block_count(input.text) > 0;
    let has_bullets = detectors::has_bullets(input.text);

    let (points, status) = if headers >= 3 && has_code && has_bullets {
        (20, Status::Complete)
    } else if headers >= 2 {
        (12, Status::Partial)
    } else if headers >= 1 {
        (8, Status::Partial)
    } else {
        (0, Status::Missing)
    };
    let mut score = CriterionScore::new(points, 20, status);
    score.headers = Some(headers);
    if status != Status::Complete {
        score.suggestion =
            Some("Organize the document with headings, lists, and code blocks".to_string());
    }
    score
}

#[cfg(test)]
mod tests {
    use super::README;
    use crate::domain::{CodeAnalysis, FunctionInfo, Status};
    use crate::rubric::{DocInput, Rubric};

    fn score_readme(text: &str, analysis: &CodeAnalysis) -> Vec<(&'static str, crate::domain::CriterionScore)> {
        README.evaluate(&DocInput::new(text, analysis))
    }

    fn criterion<'a>(
        results: &'a [(&'static str, crate::domain::CriterionScore)],
        key: &str,
    ) -> &'a crate::domain::CriterionScore {
        &results.iter().find(|(k, _)| *k == key).expect("criterion").1
    }

    #[test]
    fn overview_accepts_alternate_section_names() {
        let analysis = CodeAnalysis::default();
        for heading in ["Overview", "About", "What is this?", "DESCRIPTION"] {
            let results = score_readme(&format!("## {heading}\n\nwords\n"), &analysis);
            assert_eq!(criterion(&results, "overview").points, 20, "{heading}");
        }
    }

    #[test]
    fn overview_accepts_paragraph_after_title() {
        let analysis = CodeAnalysis::default();
        let results = score_readme("# Tool\n\nA tool that does things.\n", &analysis);
        let overview = criterion(&results, "overview");
        assert_eq!(overview.points, 20);
        assert_eq!(overview.status, Status::Complete);
        assert!(overview.suggestion.is_none());
    }

    #[test]
    fn example_blocks_award_tiered_points() {
        let analysis = CodeAnalysis::default();
        let one = "```\na\n```\n";
        let two = "```\na\n```\n```\nb\n```\n";
        let three = "```\na\n```\n```\nb\n```\n```\nc\n```\n";

        let results = score_readme(one, &analysis);
        assert_eq!(criterion(&results, "examples").points, 10);
        assert_eq!(criterion(&results, "examples").status, Status::Partial);

        let results = score_readme(two, &analysis);
        assert_eq!(criterion(&results, "examples").points, 15);

        let results = score_readme(three, &analysis);
        assert_eq!(criterion(&results, "examples").points, 20);
        assert_eq!(criterion(&results, "examples").status, Status::Complete);
    }

    #[test]
    fn api_docs_award_full_credit_with_nothing_to_document() {
        let analysis = CodeAnalysis::default();
        let results = score_readme("", &analysis);
        let api_docs = criterion(&results, "apiDocs");
        assert_eq!(api_docs.points, 25);
        assert_eq!(api_docs.coverage_percent, Some(100));
        assert_eq!(api_docs.status, Status::Complete);
    }

    #[test]
    fn api_docs_match_names_case_insensitively() {
        let analysis = CodeAnalysis {
            functions: vec![
                FunctionInfo {
                    name: "getUser".to_string(),
                    params: vec![],
                },
                FunctionInfo {
                    name: "deleteUser".to_string(),
                    params: vec![],
                },
            ],
            classes: vec![],
        };
        let results = score_readme("## API\n\nCall GETUSER to fetch a user.\n", &analysis);
        let api_docs = criterion(&results, "apiDocs");
        assert_eq!(api_docs.coverage_percent, Some(50));
        assert_eq!(api_docs.points, 13);
        assert_eq!(api_docs.status, Status::Partial);
    }

    #[test]
    fn structure_requires_all_three_signals_for_full_credit() {
        let analysis = CodeAnalysis::default();
        let full = "# A\n## B\n## C\n\n- item\n\n```\ncode\n```\n";
        let results = score_readme(full, &analysis);
        assert_eq!(criterion(&results, "structure").points, 20);

        let headings_only = "# A\n## B\n## C\n\ntext\n";
        let results = score_readme(headings_only, &analysis);
        assert_eq!(criterion(&results, "structure").points, 12);

        let one_heading = "# A\n\ntext\n";
        let results = score_readme(one_heading, &analysis);
        assert_eq!(criterion(&results, "structure").points, 8);

        let results = score_readme("plain text\n", &analysis);
        assert_eq!(criterion(&results, "structure").points, 0);
        assert_eq!(criterion(&results, "structure").status, Status::Missing);
    }

    #[test]
    fn empty_document_scores_only_the_coverage_credit() {
        let analysis = CodeAnalysis::default();
        let results = score_readme("", &analysis);
        assert_eq!(Rubric::total(&results), 25);
    }
}
