//! Shared text detectors used by the scoring rubrics.
//!
//! Every detector is a pure function over the document text so it can be
//! unit-tested on its own and reused across rubrics.

use std::collections::BTreeSet;

use once_cell::sync::Lazy;
use regex::Regex;

static ENDPOINT_HEADING: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?m)^\s{0,3}#{2,4}\s+(?:GET|POST|PUT|PATCH|DELETE|HEAD|OPTIONS)\s+/\S*")
        .expect("endpoint heading regex")
});
static STATUS_CODE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\b[1-5][0-9]{2}\b").expect("status code regex"));
static ERROR_CODE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\b[45][0-9]{2}\b").expect("error code regex"));
static NUMBERED_STEP: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?m)^\s*\d+[.)]\s+\S").expect("numbered step regex"));
static PARAM_TAG: Lazy<Regex> = Lazy::new(|| Regex::new(r"@param\b").expect("param tag regex"));
static RETURN_TAG: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"@returns?\b").expect("return tag regex"));
static EXAMPLE_TAG: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"@example\b").expect("example tag regex"));
static TYPED_PARAM_TAG: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"@param\s*\{[^}]+\}").expect("typed param regex"));
static TYPED_RETURN_TAG: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"@returns?\s*\{[^}]+\}").expect("typed return regex"));
static YAML_PATH_KEY: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?m)^\s+(/[^\s:]*)\s*:").expect("yaml path key regex"));
static YAML_METHOD_KEY: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?mi)^\s+(get|post|put|patch|delete|head|options)\s*:").expect("yaml method regex")
});
static YAML_IN_LOCATION: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?mi)^\s*-?\s*in\s*:\s*(\w+)").expect("yaml in-location regex"));
static ASCII_BOX: Lazy<Regex> = Lazy::new(|| Regex::new(r"\+-{2,}").expect("ascii box regex"));

/// Heading lines (leading `#`s), stripped of markers and lowercased.
fn heading_texts(text: &str) -> impl Iterator<Item = String> + '_ {
    text.lines().filter_map(|line| {
        let trimmed = line.trim_start();
        if !trimmed.starts_with('#') {
            return None;
        }
        Some(trimmed.trim_start_matches('#').trim().to_lowercase())
    })
}

/// Whether any heading contains one of the given lowercase phrases.
pub fn has_heading(text: &str, phrases: &[&str]) -> bool {
    heading_texts(text).any(|heading| phrases.iter().any(|phrase| heading.contains(phrase)))
}

/// Number of markdown heading lines.
pub fn heading_count(text: &str) -> usize {
    text.lines()
        .filter(|line| line.trim_start().starts_with('#'))
        .count()
}

/// Number of third-level or deeper headings (`###` and beyond).
pub fn subheading_count(text: &str) -> usize {
    text.lines()
        .filter(|line| line.trim_start().starts_with("###"))
        .count()
}

/// Number of complete fenced code blocks (pairs of ``` fences).
pub fn code_block_count(text: &str) -> usize {
    let fences = text
        .lines()
        .filter(|line| line.trim_start().starts_with("```"))
        .count();
    fences / 2
}

/// Whether the text contains a fenced ```mermaid block.
pub fn has_mermaid_block(text: &str) -> bool {
    text.lines()
        .any(|line| line.trim_start().to_lowercase().starts_with("```mermaid"))
}

/// Whether the text contains ASCII or Unicode box-drawing art.
pub fn has_ascii_diagram(text: &str) -> bool {
    const BOX_CHARS: &[char] = &[
        '─', '│', '┌', '┐', '└', '┘', '├', '┤', '┬', '┴', '═', '║', '╔', '╗', '╚', '╝',
    ];
    ASCII_BOX.is_match(text) || text.contains(BOX_CHARS)
}

/// Whether any line is a bullet list item.
pub fn has_bullets(text: &str) -> bool {
    text.lines().any(|line| {
        let trimmed = line.trim_start();
        trimmed.starts_with("- ") || trimmed.starts_with("* ") || trimmed.starts_with("+ ")
    })
}

/// Whether the text contains a numbered step list (`1.` or `1)` lines).
pub fn has_numbered_steps(text: &str) -> bool {
    NUMBERED_STEP.is_match(text)
}

/// Whether a plain prose paragraph immediately follows the document title.
///
/// The first non-blank line must be a heading; the next non-blank line
/// counts as prose when it is not a heading, list item, or fence.
pub fn paragraph_after_title(text: &str) -> bool {
    let mut lines = text.lines().filter(|line| !line.trim().is_empty());
    let Some(title) = lines.next() else {
        return false;
    };
    if !title.trim_start().starts_with('#') {
        return false;
    }
    let Some(next) = lines.next() else {
        return false;
    };
    let trimmed = next.trim_start();
    !(trimmed.starts_with('#')
        || trimmed.starts_with("```")
        || trimmed.starts_with("- ")
        || trimmed.starts_with("* ")
        || trimmed.starts_with("+ ")
        || trimmed.starts_with('>'))
}

/// Number of `@param` tags.
pub fn param_tag_count(text: &str) -> usize {
    PARAM_TAG.find_iter(text).count()
}

/// Number of `@returns`/`@return` tags.
pub fn return_tag_count(text: &str) -> usize {
    RETURN_TAG.find_iter(text).count()
}

/// Number of `@example` tags.
pub fn example_tag_count(text: &str) -> usize {
    EXAMPLE_TAG.find_iter(text).count()
}

/// Whether both a typed `@param {T}` and a typed return tag are present.
pub fn has_typed_tags(text: &str) -> bool {
    TYPED_PARAM_TAG.is_match(text) && TYPED_RETURN_TAG.is_match(text)
}

/// Number of `### METHOD /path` style endpoint headings.
pub fn endpoint_heading_count(text: &str) -> usize {
    ENDPOINT_HEADING.find_iter(text).count()
}

/// Number of distinct three-digit HTTP status codes mentioned.
pub fn status_code_count(text: &str) -> usize {
    distinct_matches(&STATUS_CODE, text)
}

/// Number of distinct 4xx/5xx error codes mentioned.
pub fn error_code_count(text: &str) -> usize {
    distinct_matches(&ERROR_CODE, text)
}

fn distinct_matches(pattern: &Regex, text: &str) -> usize {
    let codes: BTreeSet<&str> = pattern.find_iter(text).map(|m| m.as_str()).collect();
    codes.len()
}

/// Whether a YAML mapping key appears at the start of a line.
pub fn has_yaml_key(text: &str, key: &str) -> bool {
    let prefix = format!("{key}:");
    text.lines()
        .any(|line| line.trim_start().to_lowercase().starts_with(&prefix))
}

/// Number of lines carrying the given YAML key (list entries included).
pub fn yaml_key_count(text: &str, key: &str) -> usize {
    let prefix = format!("{key}:");
    text.lines()
        .filter(|line| {
            let trimmed = line.trim_start().trim_start_matches("- ").trim_start();
            trimmed.to_lowercase().starts_with(&prefix)
        })
        .count()
}

/// Number of distinct path keys (`/users:` style) in an OpenAPI document.
pub fn yaml_path_count(text: &str) -> usize {
    let paths: BTreeSet<&str> = YAML_PATH_KEY
        .captures_iter(text)
        .filter_map(|captures| captures.get(1))
        .map(|m| m.as_str())
        .collect();
    paths.len()
}

/// Number of distinct HTTP method keys (`get:`, `post:` ...) in an OpenAPI document.
pub fn yaml_method_count(text: &str) -> usize {
    let methods: BTreeSet<String> = YAML_METHOD_KEY
        .captures_iter(text)
        .filter_map(|captures| captures.get(1))
        .map(|m| m.as_str().to_lowercase())
        .collect();
    methods.len()
}

/// Number of distinct `in:` parameter locations in an OpenAPI document.
pub fn yaml_in_location_count(text: &str) -> usize {
    let locations: BTreeSet<String> = YAML_IN_LOCATION
        .captures_iter(text)
        .filter_map(|captures| captures.get(1))
        .map(|m| m.as_str().to_lowercase())
        .collect();
    locations.len()
}

/// Number of named entries directly under a `schemas:` block.
pub fn yaml_named_schemas(text: &str) -> usize {
    let lines: Vec<&str> = text.lines().collect();
    let Some(start) = lines
        .iter()
        .position(|line| line.trim().eq_ignore_ascii_case("schemas:"))
    else {
        return 0;
    };
    let schemas_indent = indent_width(lines[start]);

    let mut entry_indent = None;
    let mut count = 0;
    for line in &lines[start + 1..] {
        if line.trim().is_empty() {
            continue;
        }
        let indent = indent_width(line);
        if indent <= schemas_indent {
            break;
        }
        let expected = *entry_indent.get_or_insert(indent);
        if indent == expected && is_yaml_name_key(line.trim()) {
            count += 1;
        }
    }
    count
}

fn indent_width(line: &str) -> usize {
    line.len() - line.trim_start().len()
}

fn is_yaml_name_key(trimmed: &str) -> bool {
    let Some(name) = trimmed.strip_suffix(':') else {
        return false;
    };
    !name.is_empty()
        && name
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '.' || c == '-')
}
