//! Architecture rubric: overview, components, data flow, diagrams, decisions.

use crate::detectors;
use crate::domain::{CriterionScore, Status};
use crate::rubric::{Criterion, DocInput, Rubric};

/// The ARCHITECTURE rubric.
pub static ARCHITECTURE: Rubric = Rubric {
    name: "ARCHITECTURE",
    criteria: &[
        Criterion {
            key: "overview",
            max_points: 25,
            eval: overview,
        },
        Criterion {
            key: "components",
            max_points: 25,
            eval: components,
        },
        Criterion {
            key: "dataFlow",
            max_points: 20,
            eval: data_flow,
        },
        Criterion {
            key: "diagrams",
            max_points: 15,
            eval: diagrams,
        },
        Criterion {
            key: "designDecisions",
            max_points: 15,
            eval: design_decisions,
        },
    ],
};

const OVERVIEW_HEADINGS: &[&str] = &["overview", "purpose", "introduction"];
const DECISION_HEADINGS: &[&str] = &["decision", "rationale", "design choices", "trade-off"];
const PATTERN_NAMES: &[&str] = &[
    "singleton",
    "factory",
    "observer",
    "adapter",
    "facade",
    "strategy",
    "repository pattern",
    "mvc",
    "mvvm",
    "pub/sub",
    "event-driven",
    "microservice",
    "layered",
    "hexagonal",
    "cqrs",
];

fn overview(input: &DocInput<'_>) -> CriterionScore {
    let has_overview = detectors::has_heading(input.text, OVERVIEW_HEADINGS);
    let has_high_level =
        input.lower.contains("high-level") || input.lower.contains("high level");
    let has_tech_stack = input.lower.contains("tech stack")
        || input.lower.contains("technology stack")
        || input.lower.contains("technologies")
        || input.lower.contains("built with");

    let (points, status) = if has_overview && has_high_level && has_tech_stack {
        (25, Status::Complete)
    } else if has_overview {
        (15, Status::Partial)
    } else if has_tech_stack {
        (10, Status::Partial)
    } else {
        (0, Status::Missing)
    };
    let mut score = CriterionScore::new(points, 25, status);
    if status != Status::Complete {
        score.suggestion = Some(
            "Open with a high-level overview that names the technology stack".to_string(),
        );
    }
    score
}

fn components(input: &DocInput<'_>) -> CriterionScore {
    let has_section = detectors::has_heading(input.text, &["component"]);
    let sub_headers = detectors::subheading_count(input.text);
    let has_dependencies =
        input.lower.contains("depends on") || input.lower.contains("relies on");

    let (points, status) = if has_section && sub_headers >= 2 {
        (25, Status::Complete)
    } else if has_section && has_dependencies {
        (20, Status::Partial)
    } else if has_section {
        (15, Status::Partial)
    } else if has_dependencies {
        (10, Status::Partial)
    } else {
        (0, Status::Missing)
    };
    let mut score = CriterionScore::new(points, 25, status);
    if status != Status::Complete {
        score.suggestion = Some(
            "Describe each component in its own subsection, including dependencies".to_string(),
        );
    }
    score
}

fn data_flow(input: &DocInput<'_>) -> CriterionScore {
    let has_section = detectors::has_heading(input.text, &["data flow", "dataflow", "flow"]);
    let has_interaction =
        input.lower.contains("interact") || input.lower.contains("communicate");
    let has_steps = detectors::has_numbered_steps(input.text);

    let (points, status) = if has_section && has_interaction && has_steps {
        (20, Status::Complete)
    } else if has_section && has_interaction {
        (15, Status::Partial)
    } else if has_interaction {
        (12, Status::Partial)
    } else if has_section {
        (8, Status::Partial)
    } else {
        (0, Status::Missing)
    };
    let mut score = CriterionScore::new(points, 20, status);
    if status != Status::Complete {
        score.suggestion = Some(
            "Walk through the data flow step by step, showing how components interact".to_string(),
        );
    }
    score
}

fn diagrams(input: &DocInput<'_>) -> CriterionScore {
    if detectors::has_mermaid_block(input.text) {
        return CriterionScore::new(15, 15, Status::Complete);
    }
    let (points, status) = if detectors::has_ascii_diagram(input.text) {
        (10, Status::Partial)
    } else if detectors::has_heading(input.text, &["diagram"]) {
        (10, Status::Partial)
    } else {
        (0, Status::Missing)
    };
    let mut score = CriterionScore::new(points, 15, status);
    score.suggestion = Some("Add a mermaid diagram of the system structure".to_string());
    score
}

fn design_decisions(input: &DocInput<'_>) -> CriterionScore {
    let has_section = detectors::has_heading(input.text, DECISION_HEADINGS);
    let has_patterns = PATTERN_NAMES
        .iter()
        .any(|pattern| input.lower.contains(pattern));
    let has_constraints = input.lower.contains("constraint")
        || input.lower.contains("assumption")
        || input.lower.contains("limitation");

    let (points, status) = if has_section && has_patterns && has_constraints {
        (15, Status::Complete)
    } else if has_section || has_patterns {
        (10, Status::Partial)
    } else if has_constraints {
        (8, Status::Partial)
    } else {
        (0, Status::Missing)
    };
    let mut score = CriterionScore::new(points, 15, status);
    if status != Status::Complete {
        score.suggestion = Some(
            "Record key design decisions with their rationale and constraints".to_string(),
        );
    }
    score
}

#[cfg(test)]
mod tests {
    use super::ARCHITECTURE;
    use crate::domain::{CodeAnalysis, CriterionScore, Status};
    use crate::rubric::DocInput;

    fn score_architecture(text: &str) -> Vec<(&'static str, CriterionScore)> {
        let analysis = CodeAnalysis::default();
        ARCHITECTURE.evaluate(&DocInput::new(text, &analysis))
    }

    fn criterion<'a>(
        results: &'a [(&'static str, CriterionScore)],
        key: &str,
    ) -> &'a CriterionScore {
        &results.iter().find(|(k, _)| *k == key).expect("criterion").1
    }

    #[test]
    fn mermaid_diagram_earns_full_credit() {
        let results = score_architecture("```mermaid\ngraph TD;\nA-->B;\n```\n");
        let diagrams = criterion(&results, "diagrams");
        assert_eq!(diagrams.points, 15);
        assert_eq!(diagrams.status, Status::Complete);
    }

    #[test]
    fn ascii_diagram_earns_partial_credit() {
        let results = score_architecture("+-------+\n| cache |\n+-------+\n");
        let diagrams = criterion(&results, "diagrams");
        assert_eq!(diagrams.points, 10);
        assert_eq!(diagrams.status, Status::Partial);
    }

    #[test]
    fn diagram_section_without_art_earns_partial_credit() {
        let results = score_architecture("## Diagrams\n\nComing soon.\n");
        assert_eq!(criterion(&results, "diagrams").points, 10);
    }

    #[test]
    fn full_overview_needs_heading_framing_and_stack() {
        let text = "## Overview\n\nA high-level look at the system.\n\n## Tech Stack\n\n- Rust\n";
        let results = score_architecture(text);
        assert_eq!(criterion(&results, "overview").points, 25);

        let results = score_architecture("## Overview\n\nThe system.\n");
        assert_eq!(criterion(&results, "overview").points, 15);

        let results = score_architecture("Built with Rust and Postgres.\n");
        assert_eq!(criterion(&results, "overview").points, 10);
    }

    #[test]
    fn component_section_with_subsections_is_complete() {
        let text = "## Components\n\n### Ingest\n\ntext\n\n### Store\n\ntext\n";
        let results = score_architecture(text);
        assert_eq!(criterion(&results, "components").points, 25);

        let with_deps = "## Components\n\nThe ingester depends on the store.\n";
        let results = score_architecture(with_deps);
        assert_eq!(criterion(&results, "components").points, 20);

        let bare = "## Components\n\ntext\n";
        let results = score_architecture(bare);
        assert_eq!(criterion(&results, "components").points, 15);
    }

    #[test]
    fn data_flow_ladder_matches_evidence() {
        let full = "## Data Flow\n\nServices interact as follows:\n\n1. Ingest\n2. Store\n";
        let results = score_architecture(full);
        assert_eq!(criterion(&results, "dataFlow").points, 20);
        assert_eq!(criterion(&results, "dataFlow").status, Status::Complete);

        let interaction_only = "The services communicate over a queue.\n";
        let results = score_architecture(interaction_only);
        assert_eq!(criterion(&results, "dataFlow").points, 12);
    }

    #[test]
    fn design_decisions_need_all_signals_for_full_credit() {
        let full = concat!(
            "## Design Decisions\n\n",
            "We chose an event-driven layout given the latency constraint.\n",
        );
        let results = score_architecture(full);
        assert_eq!(criterion(&results, "designDecisions").points, 15);

        let pattern_only = "The pipeline follows an event-driven design.\n";
        let results = score_architecture(pattern_only);
        assert_eq!(criterion(&results, "designDecisions").points, 10);
    }
}
