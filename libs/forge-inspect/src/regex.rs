//! Regex testing
//!
//! Compiles a pattern with the familiar flag set, runs it over a test
//! string and reports every match with byte offsets and capture groups.
//! Without the `global` flag only the first match is reported, matching
//! how the interactive tool behaves.

use regex::RegexBuilder;
use serde::{Deserialize, Serialize};

use crate::error::Result;

/// Flags applied when compiling the pattern
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct RegexFlags {
    /// `i` - case insensitive
    pub ignore_case: bool,
    /// `m` - `^`/`$` match line boundaries
    pub multi_line: bool,
    /// `s` - `.` matches newlines
    pub dot_matches_new_line: bool,
    /// `x` - ignore whitespace in the pattern
    pub ignore_whitespace: bool,
    /// `U` - swap greedy and lazy quantifiers
    pub swap_greed: bool,
    /// `g` - report all matches instead of the first
    pub global: bool,
}

/// One capture group inside a match
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GroupMatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// None when the group did not participate in the match
    pub text: Option<String>,
}

/// One match with its position and groups
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchReport {
    pub index: usize,
    /// Byte offsets into the test string
    pub start: usize,
    pub end: usize,
    pub text: String,
    pub groups: Vec<GroupMatch>,
}

/// Run a pattern over a test string
///
/// # Examples
/// ```
/// use forge_inspect::regex::{find_matches, RegexFlags};
///
/// let flags = RegexFlags { global: true, ..Default::default() };
/// let matches = find_matches(r"\b\w+@\w+\.com\b", flags, "a@b.com c@d.com").unwrap();
/// assert_eq!(matches.len(), 2);
/// assert_eq!(matches[1].text, "c@d.com");
/// ```
pub fn find_matches(pattern: &str, flags: RegexFlags, haystack: &str) -> Result<Vec<MatchReport>> {
    let re = RegexBuilder::new(pattern)
        .case_insensitive(flags.ignore_case)
        .multi_line(flags.multi_line)
        .dot_matches_new_line(flags.dot_matches_new_line)
        .ignore_whitespace(flags.ignore_whitespace)
        .swap_greed(flags.swap_greed)
        .build()?;

    let names: Vec<Option<String>> = re
        .capture_names()
        .map(|n| n.map(str::to_string))
        .collect();

    let limit = if flags.global { usize::MAX } else { 1 };
    let reports = re
        .captures_iter(haystack)
        .take(limit)
        .enumerate()
        .map(|(index, caps)| {
            // Group 0 is the whole match and always present
            let whole = caps.get(0).map(|m| (m.start(), m.end())).unwrap_or((0, 0));
            let groups = (1..caps.len())
                .map(|i| GroupMatch {
                    name: names.get(i).cloned().flatten(),
                    text: caps.get(i).map(|m| m.as_str().to_string()),
                })
                .collect();
            MatchReport {
                index,
                start: whole.0,
                end: whole.1,
                text: haystack[whole.0..whole.1].to_string(),
                groups,
            }
        })
        .collect();

    Ok(reports)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn global() -> RegexFlags {
        RegexFlags {
            global: true,
            ..Default::default()
        }
    }

    #[test]
    fn test_all_matches_with_positions() {
        let matches = find_matches(r"\d+", global(), "a1b22c333").unwrap();
        assert_eq!(matches.len(), 3);
        assert_eq!(matches[0].text, "1");
        assert_eq!(matches[0].start, 1);
        assert_eq!(matches[2].text, "333");
        assert_eq!(matches[2].index, 2);
    }

    #[test]
    fn test_first_match_only_without_global() {
        let matches = find_matches(r"\d+", RegexFlags::default(), "a1b22").unwrap();
        assert_eq!(matches.len(), 1);
        assert_eq!(matches[0].text, "1");
    }

    #[test]
    fn test_case_insensitive() {
        let flags = RegexFlags {
            ignore_case: true,
            ..global()
        };
        assert_eq!(find_matches("abc", flags, "ABC abc AbC").unwrap().len(), 3);
        assert_eq!(
            find_matches("abc", global(), "ABC abc AbC").unwrap().len(),
            1
        );
    }

    #[test]
    fn test_capture_groups() {
        let matches = find_matches(r"(\w+)@(?P<domain>\w+)", global(), "joe@example").unwrap();
        assert_eq!(matches[0].groups.len(), 2);
        assert_eq!(matches[0].groups[0].text.as_deref(), Some("joe"));
        assert_eq!(matches[0].groups[0].name, None);
        assert_eq!(matches[0].groups[1].text.as_deref(), Some("example"));
        assert_eq!(matches[0].groups[1].name.as_deref(), Some("domain"));
    }

    #[test]
    fn test_optional_group_absent() {
        let matches = find_matches(r"a(b)?", global(), "a").unwrap();
        assert_eq!(matches[0].groups[0].text, None);
    }

    #[test]
    fn test_multiline_anchors() {
        let flags = RegexFlags {
            multi_line: true,
            ..global()
        };
        assert_eq!(find_matches("^b$", flags, "a\nb\nb").unwrap().len(), 2);
        assert_eq!(find_matches("^b$", global(), "a\nb\nb").unwrap().len(), 0);
    }

    #[test]
    fn test_invalid_pattern() {
        assert!(find_matches("(unclosed", global(), "x").is_err());
    }

    #[test]
    fn test_no_matches() {
        assert!(find_matches("zzz", global(), "abc").unwrap().is_empty());
    }
}
