//! Repeated page header/footer removal.
//!
//! RTC/MR scans commonly repeat a department letterhead line on every page
//! ("GOVERNMENT OF KARNATAKA", page numbers, a watermark notice). These are
//! not part of the record and must not influence extraction or scoring.

use once_cell::sync::Lazy;
use regex::Regex;

/// Lines matching any of these patterns are dropped wholesale before
/// whitespace collapsing. Compiled once per process, matching the
/// lazily-initialized-regex idiom used throughout this codebase.
static BOILERPLATE_PATTERNS: Lazy<Vec<Regex>> = Lazy::new(|| {
    vec![
        Regex::new(r"(?i)^\s*government of karnataka\s*$").unwrap(),
        Regex::new(r"(?i)^\s*page\s+\d+\s*(of\s*\d+)?\s*$").unwrap(),
        Regex::new(r"(?i)^\s*computer generated.*no signature required\s*$").unwrap(),
        Regex::new(r"^\s*-{3,}\s*$").unwrap(),
    ]
});

/// Removes any line matching a known boilerplate pattern, preserving the
/// relative order of the remaining lines.
pub fn strip_boilerplate(text: &str) -> String {
    text.lines()
        .filter(|line| !BOILERPLATE_PATTERNS.iter().any(|re| re.is_match(line)))
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn drops_letterhead_and_page_numbers() {
        let input = "GOVERNMENT OF KARNATAKA\nOwner: Ravi Kumar\nPage 1 of 2\nSurvey: 45/2A";
        let out = strip_boilerplate(input);
        assert_eq!(out, "Owner: Ravi Kumar\nSurvey: 45/2A");
    }

    #[test]
    fn leaves_ordinary_text_alone() {
        let input = "Owner: Ravi Kumar\nSurvey: 45/2A";
        assert_eq!(strip_boilerplate(input), input);
    }
}
