//! Reversible identity codec for derived config object names.
//!
//! # Responsibilities
//! - Pack (origin name, rule index, path index) into a single store key
//! - Recover the exact triple from a key
//!
//! # Design Decisions
//! - Indices are appended as plain decimal tokens: `origin-rule-path`
//! - Decoding strips exactly two trailing tokens, so dashes inside the
//!   origin name survive the round trip
//! - Index tokens must be ASCII digits only; a sign or empty token is rejected

use std::fmt;

use thiserror::Error;

use super::SEPARATOR;

/// Identity of one path within one rule of an originating resource.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ResourceIdentity {
    /// Name of the originating cluster resource.
    pub origin_name: String,
    /// Index of the rule within the resource.
    pub rule_index: usize,
    /// Index of the path within the rule.
    pub path_index: usize,
}

impl ResourceIdentity {
    pub fn new(origin_name: impl Into<String>, rule_index: usize, path_index: usize) -> Self {
        Self {
            origin_name: origin_name.into(),
            rule_index,
            path_index,
        }
    }

    /// Encode this identity as a config object name.
    pub fn encode(&self) -> String {
        encode_identity(&self.origin_name, self.rule_index, self.path_index)
    }
}

impl fmt::Display for ResourceIdentity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} (rule {}, path {})",
            self.origin_name, self.rule_index, self.path_index
        )
    }
}

/// A name that was not produced by [`encode_identity`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormatError {
    /// Fewer than three dash-separated tokens.
    #[error("encoded name {name:?} has {found} tokens, expected at least 3")]
    TooFewTokens { name: String, found: usize },

    /// One of the two trailing tokens is not a non-negative integer.
    #[error("encoded name {name:?} has non-numeric {field} token {token:?}")]
    InvalidIndex {
        name: String,
        field: &'static str,
        token: String,
    },
}

/// Encode an identity as `origin_name-rule_index-path_index`.
pub fn encode_identity(origin_name: &str, rule_index: usize, path_index: usize) -> String {
    format!("{origin_name}{SEPARATOR}{rule_index}{SEPARATOR}{path_index}")
}

/// Decode a name produced by [`encode_identity`].
pub fn decode_identity(encoded: &str) -> Result<ResourceIdentity, FormatError> {
    // origin names may contain the separator, so only the last two splits count
    let tokens: Vec<&str> = encoded.rsplitn(3, SEPARATOR).collect();
    let [path, rule, origin] = tokens[..] else {
        return Err(FormatError::TooFewTokens {
            name: encoded.to_string(),
            found: tokens.len(),
        });
    };

    let rule_index = parse_index(encoded, "rule", rule)?;
    let path_index = parse_index(encoded, "path", path)?;

    Ok(ResourceIdentity {
        origin_name: origin.to_string(),
        rule_index,
        path_index,
    })
}

fn parse_index(encoded: &str, field: &'static str, token: &str) -> Result<usize, FormatError> {
    let invalid = || FormatError::InvalidIndex {
        name: encoded.to_string(),
        field,
        token: token.to_string(),
    };
    // usize::from_str accepts a leading '+'
    if token.is_empty() || !token.bytes().all(|b| b.is_ascii_digit()) {
        return Err(invalid());
    }
    token.parse().map_err(|_| invalid())
}
