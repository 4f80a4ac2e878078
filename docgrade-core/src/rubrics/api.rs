//! REST API rubric: endpoints, request/response docs, examples, errors.

use crate::detectors;
use crate::domain::{CriterionScore, Status};
use crate::rubric::{Criterion, DocInput, Rubric};

/// The API rubric.
pub static API: Rubric = Rubric {
    name: "API",
    criteria: &[
        Criterion {
            key: "endpoints",
            max_points: 25,
            eval: endpoints,
        },
        Criterion {
            key: "requestDocs",
            max_points: 20,
            eval: request_docs,
        },
        Criterion {
            key: "responseDocs",
            max_points: 20,
            eval: response_docs,
        },
        Criterion {
            key: "examples",
            max_points: 20,
            eval: examples,
        },
        Criterion {
            key: "errors",
            max_points: 15,
            eval: errors,
        },
    ],
};

fn endpoints(input: &DocInput<'_>) -> CriterionScore {
    // An explicit endpoints section is trusted even without per-route
    // headings; otherwise the `### METHOD /path` entries are counted.
    if detectors::has_heading(input.text, &["endpoint"]) {
        return CriterionScore::new(25, 25, Status::Complete);
    }
    let count = detectors::endpoint_heading_count(input.text);
    let (points, status) = match count {
        0 => (0, Status::Missing),
        1 | 2 => (15, Status::Partial),
        _ => (25, Status::Complete),
    };
    let mut score = CriterionScore::new(points, 25, status);
    score.count = Some(count);
    if status != Status::Complete {
        score.suggestion =
            Some("List every endpoint under a heading like `### GET /resource`".to_string());
    }
    score
}

fn request_docs(input: &DocInput<'_>) -> CriterionScore {
    let has_params = input.lower.contains("parameter");
    let has_headers = input.lower.contains("header");
    let has_body = input.lower.contains("body") || input.lower.contains("json");

    let (points, status) = if has_params && has_headers && has_body {
        (20, Status::Complete)
    } else if has_params || has_body {
        (12, Status::Partial)
    } else if has_headers {
        (8, Status::Partial)
    } else {
        (0, Status::Missing)
    };
    let mut score = CriterionScore::new(points, 20, status);
    if status != Status::Complete {
        score.suggestion =
            Some("Document request parameters, headers, and body formats".to_string());
    }
    score
}

fn response_docs(input: &DocInput<'_>) -> CriterionScore {
    let codes = detectors::status_code_count(input.text);
    let has_schema =
        detectors::code_block_count(input.text) > 0 || input.lower.contains("schema");

    let (points, status) = if codes >= 2 && has_schema {
        (20, Status::Complete)
    } else if codes >= 2 {
        (12, Status::Partial)
    } else if codes == 1 {
        (8, Status::Partial)
    } else {
        (0, Status::Missing)
    };
    let mut score = CriterionScore::new(points, 20, status);
    score.count = Some(codes);
    if status != Status::Complete {
        score.suggestion =
            Some("Document response status codes and an example response schema".to_string());
    }
    score
}

fn examples(input: &DocInput<'_>) -> CriterionScore {
    let blocks = detectors::code_block_count(input.text);
    let has_curl = input.lower.contains("curl");

    let (points, status) = if blocks >= 3 && has_curl {
        (20, Status::Complete)
    } else if blocks >= 3 {
        (15, Status::Partial)
    } else if blocks >= 1 {
        (12, Status::Partial)
    } else {
        (0, Status::Missing)
    };
    let mut score = CriterionScore::new(points, 20, status);
    score.count = Some(blocks);
    if status != Status::Complete {
        score.suggestion = Some("Add request examples, including curl commands".to_string());
    }
    score
}

fn errors(input: &DocInput<'_>) -> CriterionScore {
    let has_section = detectors::has_heading(input.text, &["error"]);
    let codes = detectors::error_code_count(input.text);

    let (points, status) = if has_section && codes >= 2 {
        (15, Status::Complete)
    } else if has_section || codes >= 2 {
        (8, Status::Partial)
    } else {
        (0, Status::Missing)
    };
    let mut score = CriterionScore::new(points, 15, status);
    if status != Status::Complete {
        score.suggestion =
            Some("Add an error section covering the error codes clients can expect".to_string());
    }
    score
}

#[cfg(test)]
mod tests {
    use super::API;
    use crate::domain::{CodeAnalysis, CriterionScore, Status};
    use crate::rubric::DocInput;

    fn score_api(text: &str) -> Vec<(&'static str, CriterionScore)> {
        let analysis = CodeAnalysis::default();
        API.evaluate(&DocInput::new(text, &analysis))
    }

    fn criterion<'a>(
        results: &'a [(&'static str, CriterionScore)],
        key: &str,
    ) -> &'a CriterionScore {
        &results.iter().find(|(k, _)| *k == key).expect("criterion").1
    }

    #[test]
    fn endpoints_section_grants_full_credit_without_route_headings() {
        let results = score_api("## Endpoints\n\nSee the table below.\n");
        let endpoints = criterion(&results, "endpoints");
        assert_eq!(endpoints.points, 25);
        assert_eq!(endpoints.status, Status::Complete);
    }

    #[test]
    fn route_headings_are_counted_when_no_section_exists() {
        let two = "### GET /users\n\n### POST /users\n";
        let results = score_api(two);
        assert_eq!(criterion(&results, "endpoints").points, 15);

        let three = "### GET /users\n\n### POST /users\n\n### DELETE /users/1\n";
        let results = score_api(three);
        assert_eq!(criterion(&results, "endpoints").points, 25);
    }

    #[test]
    fn request_docs_need_all_three_signals_for_full_credit() {
        let full = "Query parameters, request headers, and a JSON body.\n";
        let results = score_api(full);
        assert_eq!(criterion(&results, "requestDocs").points, 20);

        let results = score_api("The request body is JSON.\n");
        assert_eq!(criterion(&results, "requestDocs").points, 12);

        let results = score_api("Set the Authorization header.\n");
        assert_eq!(criterion(&results, "requestDocs").points, 8);

        let results = score_api("Nothing to see.\n");
        assert_eq!(criterion(&results, "requestDocs").points, 0);
    }

    #[test]
    fn response_docs_combine_codes_and_schema() {
        let full = "Returns 200 or 404.\n\n```json\n{\"id\": 1}\n```\n";
        let results = score_api(full);
        assert_eq!(criterion(&results, "responseDocs").points, 20);

        let codes_only = "Returns 200 or 404.\n";
        let results = score_api(codes_only);
        assert_eq!(criterion(&results, "responseDocs").points, 12);

        let one_code = "Returns 200.\n";
        let results = score_api(one_code);
        assert_eq!(criterion(&results, "responseDocs").points, 8);
    }

    #[test]
    fn curl_examples_reach_full_credit() {
        let full = concat!(
            "```bash\ncurl /users\n```\n",
            "```bash\ncurl -X POST /users\n```\n",
            "```json\n{}\n```\n",
        );
        let results = score_api(full);
        assert_eq!(criterion(&results, "examples").points, 20);

        let one_block = "```bash\nhttp GET /users\n```\n";
        let results = score_api(one_block);
        assert_eq!(criterion(&results, "examples").points, 12);
    }

    #[test]
    fn errors_need_section_and_codes() {
        let full = "## Errors\n\nReturns 404 and 500.\n";
        let results = score_api(full);
        assert_eq!(criterion(&results, "errors").points, 15);

        let section_only = "## Error Handling\n\nSee logs.\n";
        let results = score_api(section_only);
        assert_eq!(criterion(&results, "errors").points, 8);

        let results = score_api("All good.\n");
        assert_eq!(criterion(&results, "errors").points, 0);
        assert_eq!(criterion(&results, "errors").status, Status::Missing);
    }
}
