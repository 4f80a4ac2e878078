//! OpenAPI rubric: structure, endpoint coverage, schemas, parameters, descriptions.

use crate::detectors;
use crate::domain::{CriterionScore, Status};
use crate::rubric::{Criterion, DocInput, Rubric};

/// The OPENAPI rubric. Detectors scan YAML-shaped lines.
pub static OPENAPI: Rubric = Rubric {
    name: "OPENAPI",
    criteria: &[
        Criterion {
            key: "structure",
            max_points: 20,
            eval: structure,
        },
        Criterion {
            key: "endpoints",
            max_points: 25,
            eval: endpoints,
        },
        Criterion {
            key: "schemas",
            max_points: 20,
            eval: schemas,
        },
        Criterion {
            key: "parameters",
            max_points: 15,
            eval: parameters,
        },
        Criterion {
            key: "descriptions",
            max_points: 20,
            eval: descriptions,
        },
    ],
};

fn structure(input: &DocInput<'_>) -> CriterionScore {
    let has_version =
        detectors::has_yaml_key(input.text, "openapi") || detectors::has_yaml_key(input.text, "swagger");
    let has_info = detectors::has_yaml_key(input.text, "info");
    let has_paths = detectors::has_yaml_key(input.text, "paths");

    let (points, status) = if has_version && has_info && has_paths {
        (20, Status::Complete)
    } else if has_paths && has_info {
        (12, Status::Partial)
    } else if has_paths {
        (8, Status::Partial)
    } else {
        (0, Status::Missing)
    };
    let mut score = CriterionScore::new(points, 20, status);
    if status != Status::Complete {
        score.suggestion =
            Some("Declare the spec version, info block, and paths at the top level".to_string());
    }
    score
}

fn endpoints(input: &DocInput<'_>) -> CriterionScore {
    let paths = detectors::yaml_path_count(input.text);
    let methods = detectors::yaml_method_count(input.text);

    let (points, status) = if paths >= 3 && methods >= 3 {
        (25, Status::Complete)
    } else if paths >= 1 && methods >= 1 {
        (15, Status::Partial)
    } else if paths >= 1 {
        (8, Status::Partial)
    } else {
        (0, Status::Missing)
    };
    let mut score = CriterionScore::new(points, 25, status);
    score.count = Some(paths);
    if status != Status::Complete {
        score.suggestion = Some("Cover every route and HTTP method under paths".to_string());
    }
    score
}

fn schemas(input: &DocInput<'_>) -> CriterionScore {
    let has_components = detectors::has_yaml_key(input.text, "components");
    let named = detectors::yaml_named_schemas(input.text);
    let inline = detectors::yaml_key_count(input.text, "schema");

    let (points, status) = if has_components && named >= 3 {
        (20, Status::Complete)
    } else if has_components && named >= 1 {
        (15, Status::Partial)
    } else if inline >= 1 {
        (10, Status::Partial)
    } else {
        (0, Status::Missing)
    };
    let mut score = CriterionScore::new(points, 20, status);
    score.has_schema = Some(named > 0 || inline > 0);
    if status != Status::Complete {
        score.suggestion =
            Some("Define named schemas under components.schemas and reference them".to_string());
    }
    score
}

fn parameters(input: &DocInput<'_>) -> CriterionScore {
    let entries = detectors::yaml_key_count(input.text, "parameters");
    let locations = detectors::yaml_in_location_count(input.text);
    let has_required = detectors::yaml_key_count(input.text, "required") > 0;

    let (points, status) = if entries > 0 && locations >= 2 && has_required {
        (15, Status::Complete)
    } else if entries > 0 {
        (10, Status::Partial)
    } else {
        (0, Status::Missing)
    };
    let mut score = CriterionScore::new(points, 15, status);
    if status != Status::Complete {
        score.suggestion = Some(
            "Document parameters with their in: location and required: flag".to_string(),
        );
    }
    score
}

fn descriptions(input: &DocInput<'_>) -> CriterionScore {
    let description_count = detectors::yaml_key_count(input.text, "description");
    let has_example = detectors::yaml_key_count(input.text, "example") > 0
        || detectors::yaml_key_count(input.text, "examples") > 0;
    let summary_count = detectors::yaml_key_count(input.text, "summary");

    let (points, status) = if description_count >= 3 && has_example {
        (20, Status::Complete)
    } else if description_count >= 3 {
        (15, Status::Partial)
    } else if description_count >= 1 || summary_count >= 1 {
        (12, Status::Partial)
    } else {
        (0, Status::Missing)
    };
    let mut score = CriterionScore::new(points, 20, status);
    score.count = Some(description_count);
    if status != Status::Complete {
        score.suggestion =
            Some("Describe operations and add example values throughout the spec".to_string());
    }
    score
}
