//! Parsing of the issue lines.
//!
//! The format is `text | tags | type | weight`. Only the text is required. Malformed
//! optional fields fall back to their defaults instead of failing.

use log::debug;

use crate::config::*;

pub const DEFAULT_WEIGHT: f64 = 1.0;

/// Parses one line of the issues file.
///
/// ```
/// use election_sim::{parse_issue_line, IssueKind};
///
/// let issue = parse_issue_line("Declare cereal a soup|food|funny|2");
/// assert_eq!(issue.text, "Declare cereal a soup");
/// assert_eq!(issue.tags, vec!["food".to_string()]);
/// assert_eq!(issue.kind, IssueKind::Funny);
/// assert_eq!(issue.weight, 2.0);
/// ```
pub fn parse_issue_line(line: &str) -> Issue {
    let parts: Vec<&str> = line.split('|').map(|p| p.trim()).collect();
    let text = parts.first().map(|s| s.to_string()).unwrap_or_default();

    let tags: Vec<String> = match parts.get(1) {
        Some(s) if !s.is_empty() => s
            .replace(',', ";")
            .split(';')
            .map(|t| t.trim())
            .filter(|t| !t.is_empty())
            .map(|t| t.to_string())
            .collect(),
        _ => vec![],
    };

    let kind = match parts.get(2) {
        Some(s) if !s.is_empty() => IssueKind::from_label(s),
        _ => IssueKind::Mixed,
    };

    let weight = match parts.get(3) {
        // inf and nan parse as f64 but have no JSON representation.
        Some(s) if !s.is_empty() => s
            .parse::<f64>()
            .ok()
            .filter(|w| w.is_finite())
            .unwrap_or_else(|| {
                debug!(
                    "parse_issue_line: weight {:?} is not a finite number, using {}",
                    s, DEFAULT_WEIGHT
                );
                DEFAULT_WEIGHT
            }),
        _ => DEFAULT_WEIGHT,
    };

    Issue {
        text,
        tags,
        kind,
        weight,
    }
}

pub fn parse_issue_lines(lines: &[String]) -> Vec<Issue> {
    lines.iter().map(|l| parse_issue_line(l)).collect()
}
