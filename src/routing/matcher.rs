//! Path match classification.
//!
//! # Responsibilities
//! - Decide whether a route path is a literal or a pattern
//! - Turn a path into the URI match used by a derived route
//!
//! # Design Decisions
//! - Purely syntactic: a path is a pattern if it contains any regex
//!   metacharacter; the pattern itself is never compiled or validated
//! - `.` alone does not make a pattern (it is common in literal paths)
//! - A trailing `.*` on a stem free of every regex metacharacter (including
//!   `.`, `{` and `}`) degrades to a prefix match

use serde::{Deserialize, Serialize};

/// Characters that mark a path as a pattern.
pub const PATTERN_METACHARACTERS: &[char] =
    &['*', '+', '?', '[', ']', '(', ')', '^', '$', '|', '\\'];

/// Characters with regex meaning that do not make a path a pattern on
/// their own, but do rule out turning a pattern into a prefix match.
const STEM_METACHARACTERS: &[char] = &['.', '{', '}'];

const WILDCARD_SUFFIX: &str = ".*";

/// How a route path must be matched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MatchKind {
    /// Exact or prefix string comparison.
    Literal,
    /// Pattern matching.
    Pattern,
}

/// Classify a route path as literal or pattern.
pub fn classify_path_match(path: &str) -> MatchKind {
    if path.contains(PATTERN_METACHARACTERS) {
        MatchKind::Pattern
    } else {
        MatchKind::Literal
    }
}

/// URI condition of a derived route.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum UriMatch {
    Exact(String),
    Prefix(String),
    Regex(String),
}

impl UriMatch {
    /// Build the URI condition for a path, or `None` when the path is empty.
    pub fn from_path(path: &str) -> Option<Self> {
        if path.is_empty() {
            return None;
        }

        let uri = match classify_path_match(path) {
            MatchKind::Literal => UriMatch::Exact(path.to_string()),
            MatchKind::Pattern => match path.strip_suffix(WILDCARD_SUFFIX) {
                Some(stem) if is_plain_prefix(stem) => UriMatch::Prefix(stem.to_string()),
                _ => UriMatch::Regex(path.to_string()),
            },
        };
        Some(uri)
    }

    pub fn kind(&self) -> MatchKind {
        match self {
            UriMatch::Exact(_) | UriMatch::Prefix(_) => MatchKind::Literal,
            UriMatch::Regex(_) => MatchKind::Pattern,
        }
    }
}

/// True when `stem` matches only itself when read as a regex.
fn is_plain_prefix(stem: &str) -> bool {
    classify_path_match(stem) == MatchKind::Literal && !stem.contains(STEM_METACHARACTERS)
}
