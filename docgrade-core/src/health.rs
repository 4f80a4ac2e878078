//! Input code health assessment.
//!
//! Scores the raw source that documentation was generated from on a
//! parallel 100-point scale, so the pipeline can report a before/after
//! improvement delta. The heuristics are language-agnostic: they look at
//! comment density, identifier naming, pre-existing documentation, and
//! structural hygiene without parsing the code.

use std::collections::BTreeSet;

use once_cell::sync::Lazy;
use regex::Regex;

use crate::domain::{CodeHealthBreakdown, CodeHealthReport, Grade};

static IDENTIFIER: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[A-Za-z_][A-Za-z0-9_]*").expect("identifier regex"));
static DOC_TAG: Lazy<Regex> = Lazy::new(|| Regex::new(r"@(param|returns?)\b").expect("doc tag regex"));
static ANNOTATION: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\b(TODO|FIXME|NOTE)\b").expect("annotation regex"));
static TIGHT_OPERATOR: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[A-Za-z0-9_](=|\+|<|>)[A-Za-z0-9_]").expect("operator regex"));
static BRACE_BODY: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?m)^\s*(?:def|function|fn|class)\b[^\n]*\{.+\}\s*$").expect("brace body regex")
});
static COLON_BODY: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?m)^\s*(?:def|class)\b[^\n]*:\s*[^\s#].*$").expect("colon body regex")
});

/// Keywords excluded from identifier statistics; they appear in any
/// language's source without saying anything about naming quality.
const KEYWORDS: &[&str] = &[
    "and", "as", "async", "await", "bool", "boolean", "break", "case", "catch", "class", "const",
    "continue", "def", "default", "delete", "do", "elif", "else", "enum", "except", "export",
    "false", "finally", "float", "fn", "for", "from", "func", "function", "if", "impl", "import",
    "in", "int", "interface", "is", "lambda", "len", "let", "match", "mut", "new", "nil", "none",
    "not", "null", "of", "or", "pass", "print", "pub", "raise", "range", "return", "self",
    "static", "str", "string", "struct", "super", "switch", "this", "throw", "throws", "trait",
    "true", "try", "type", "undefined", "use", "var", "void", "while", "with", "yield",
];

/// Short identifiers that are acceptable despite their length.
const ABBREVIATIONS: &[&str] = &["id", "key", "url", "api", "db"];

/// Assess the health of raw source code on a 0-100 scale.
///
/// Returns `None` when the source is absent or blank, in which case no
/// improvement delta can be computed.
pub fn assess(input_code: &str) -> Option<CodeHealthReport> {
    if input_code.trim().is_empty() {
        return None;
    }

    let breakdown = CodeHealthBreakdown {
        comments: comment_score(input_code),
        naming: naming_score(input_code),
        existing_docs: existing_docs_score(input_code),
        code_structure: structure_score(input_code),
    };
    let score = breakdown.comments + breakdown.naming + breakdown.existing_docs
        + breakdown.code_structure;
    let grade = Grade::from_score(score);
    let summary = summarize(score, grade, &breakdown);

    Some(CodeHealthReport {
        score,
        grade,
        breakdown,
        summary,
    })
}

/// Comment density over non-blank lines, worth up to 20 points.
fn comment_score(code: &str) -> u8 {
    let mut comment_lines = 0usize;
    let mut other_lines = 0usize;
    let mut in_block = false;
    let mut docstring_delimiter: Option<&str> = None;

    for line in code.lines() {
        let trimmed = line.trim();
        if trimmed.is_empty() {
            continue;
        }
        if let Some(delimiter) = docstring_delimiter {
            comment_lines += 1;
            if trimmed.contains(delimiter) {
                docstring_delimiter = None;
            }
            continue;
        }
        if in_block {
            comment_lines += 1;
            if trimmed.contains("*/") {
                in_block = false;
            }
            continue;
        }
        if trimmed.starts_with("//") || trimmed.starts_with('#') || trimmed.starts_with('*') {
            comment_lines += 1;
        } else if trimmed.starts_with("/*") {
            comment_lines += 1;
            in_block = !trimmed.contains("*/");
        } else if trimmed.starts_with("\"\"\"") || trimmed.starts_with("'''") {
            comment_lines += 1;
            let delimiter = if trimmed.starts_with("\"\"\"") { "\"\"\"" } else { "'''" };
            if !trimmed[3..].contains(delimiter) {
                docstring_delimiter = Some(delimiter);
            }
        } else {
            other_lines += 1;
        }
    }

    let total = comment_lines + other_lines;
    if total == 0 {
        return 0;
    }
    let ratio = comment_lines as f64 / total as f64;
    if ratio >= 0.15 {
        20
    } else if ratio >= 0.08 {
        15
    } else if ratio >= 0.03 {
        8
    } else {
        0
    }
}

/// Identifier naming quality, worth up to 20 points.
fn naming_score(code: &str) -> u8 {
    let identifiers: BTreeSet<&str> = IDENTIFIER
        .find_iter(code)
        .map(|m| m.as_str())
        .filter(|ident| !KEYWORDS.contains(&ident.to_lowercase().as_str()))
        .collect();
    if identifiers.is_empty() {
        return 20;
    }

    let total = identifiers.len();
    let single_char = identifiers.iter().filter(|ident| ident.len() == 1).count();
    let short = identifiers
        .iter()
        .filter(|ident| {
            ident.len() <= 3
                && !ABBREVIATIONS
                    .iter()
                    .any(|allowed| allowed.eq_ignore_ascii_case(ident))
        })
        .count();
    let descriptive = identifiers.iter().filter(|ident| ident.len() >= 8).count();

    let mut score: i32 = 20;
    if single_char > 2 {
        score -= 8;
    }
    if short as f64 / total as f64 > 0.30 {
        score -= 7;
    }
    if (descriptive as f64 / total as f64) < 0.30 {
        score -= 5;
    }
    score.max(0) as u8
}

/// Credit for documentation already present in the source, up to 25 points.
fn existing_docs_score(code: &str) -> u8 {
    let mut score = 0u8;
    if code.contains("/**") {
        score += 10;
    }
    if code.contains("\"\"\"") || code.contains("'''") {
        score += 10;
    }
    let tags = DOC_TAG.find_iter(code).count();
    if tags >= 3 {
        score += 10;
    } else if tags > 0 {
        score += 5;
    }
    if ANNOTATION.is_match(code) {
        score += 5;
    }
    score.min(25)
}

/// Structural hygiene, worth up to 35 points.
fn structure_score(code: &str) -> u8 {
    let lines: Vec<&str> = code.lines().collect();
    let non_blank = lines.iter().filter(|line| !line.trim().is_empty()).count();
    let mut score: i32 = 35;

    let indented = lines
        .iter()
        .filter(|line| {
            !line.trim().is_empty() && (line.starts_with(' ') || line.starts_with('\t'))
        })
        .count();
    if non_blank > 0 && indented as f64 / non_blank as f64 <= 0.30 {
        score -= 10;
    }

    if TIGHT_OPERATOR.find_iter(code).count() > 5 {
        score -= 8;
    }

    let single_line_bodies =
        BRACE_BODY.find_iter(code).count() + COLON_BODY.find_iter(code).count();
    if single_line_bodies > 2 {
        score -= 7;
    }

    let blank_lines = lines.iter().filter(|line| line.trim().is_empty()).count();
    if blank_lines == 0 {
        score -= 5;
    } else if blank_runs(&lines) > 3 {
        score -= 3;
    }

    let long_lines = lines.iter().filter(|line| line.chars().count() > 120).count();
    if !lines.is_empty() && long_lines as f64 / lines.len() as f64 > 0.10 {
        score -= 5;
    }

    score.max(0) as u8
}

/// Number of runs of two or more consecutive blank lines.
fn blank_runs(lines: &[&str]) -> usize {
    let mut runs = 0;
    let mut current = 0;
    for line in lines {
        if line.trim().is_empty() {
            current += 1;
        } else {
            if current >= 2 {
                runs += 1;
            }
            current = 0;
        }
    }
    if current >= 2 {
        runs += 1;
    }
    runs
}

fn summarize(score: u8, grade: Grade, breakdown: &CodeHealthBreakdown) -> String {
    if score >= 90 {
        return format!("Input code scores {score}/100 ({grade}); already in good shape.");
    }
    let dimensions: [(&str, u8, u8); 4] = [
        ("inline comments", breakdown.comments, 20),
        ("identifier naming", breakdown.naming, 20),
        ("existing documentation", breakdown.existing_docs, 25),
        ("code structure", breakdown.code_structure, 35),
    ];
    let mut weakest = &dimensions[0];
    for dimension in &dimensions[1..] {
        if u32::from(dimension.1) * 100 / u32::from(dimension.2)
            < u32::from(weakest.1) * 100 / u32::from(weakest.2)
        {
            weakest = dimension;
        }
    }
    format!(
        "Input code scores {score}/100 ({grade}); the weakest area is {}.",
        weakest.0
    )
}
