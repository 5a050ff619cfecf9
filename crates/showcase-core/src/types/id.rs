//! Project identifiers and route matching.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifier of a project record.
///
/// The document store does not enforce a type: some records carry numeric
/// ids, others strings. Both are accepted as-is.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ProjectId {
    /// A JSON number id, e.g. `42`
    Number(i64),
    /// A JSON string id, e.g. `"42"` or `"portfolio-site"`
    Text(String),
}

impl ProjectId {
    /// Returns `true` if this id matches a route parameter under `matching`.
    ///
    /// # Examples
    ///
    /// ```
    /// use showcase_core::{IdMatching, ProjectId};
    ///
    /// let id = ProjectId::Number(42);
    /// assert!(id.matches_route("42", IdMatching::Numeric));
    /// assert!(!id.matches_route("42", IdMatching::Exact));
    /// assert!(id.matches_route("42", IdMatching::Canonical));
    /// ```
    pub fn matches_route(&self, route: &str, matching: IdMatching) -> bool {
        match matching {
            IdMatching::Numeric => match (self, parse_route_number(route)) {
                (ProjectId::Number(n), Some(r)) => (*n as f64) == r,
                _ => false,
            },
            IdMatching::Exact => match self {
                ProjectId::Text(s) => s == route,
                ProjectId::Number(_) => false,
            },
            IdMatching::Canonical => self.to_string() == route.trim(),
        }
    }
}

/// Parses a route segment the way a numeric coercion would.
///
/// Surrounding whitespace is ignored and a blank segment counts as zero.
/// Unsigned `0x`, `0o` and `0b` literals are read in their radix. Anything
/// else that is not a finite decimal yields `None`.
fn parse_route_number(route: &str) -> Option<f64> {
    let trimmed = route.trim();
    if trimmed.is_empty() {
        return Some(0.0);
    }
    let radix = match trimmed.get(..2) {
        Some("0x" | "0X") => Some(16),
        Some("0o" | "0O") => Some(8),
        Some("0b" | "0B") => Some(2),
        _ => None,
    };
    if let Some(radix) = radix {
        return u64::from_str_radix(&trimmed[2..], radix)
            .ok()
            .map(|n| n as f64);
    }
    if trimmed.chars().any(|c| c.is_ascii_alphabetic() && !matches!(c, 'e' | 'E')) {
        return None;
    }
    trimmed.parse::<f64>().ok().filter(|n| n.is_finite())
}

impl fmt::Display for ProjectId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProjectId::Number(n) => write!(f, "{n}"),
            ProjectId::Text(s) => write!(f, "{s}"),
        }
    }
}

impl From<i64> for ProjectId {
    fn from(n: i64) -> Self {
        ProjectId::Number(n)
    }
}

impl From<i32> for ProjectId {
    fn from(n: i32) -> Self {
        ProjectId::Number(i64::from(n))
    }
}

impl From<&str> for ProjectId {
    fn from(s: &str) -> Self {
        ProjectId::Text(s.to_string())
    }
}

impl From<String> for ProjectId {
    fn from(s: String) -> Self {
        ProjectId::Text(s)
    }
}

/// How a route parameter is compared against record ids.
///
/// The two detail layouts historically disagreed: the compact one coerced
/// the route to a number, the full one compared raw strings. Both are kept
/// so each layout behaves as it always has; `Canonical` compares the
/// rendered forms and matches either kind of id.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum IdMatching {
    /// Route is parsed as a number and compared with numeric ids only.
    Numeric,
    /// Route is compared byte-for-byte with string ids only.
    Exact,
    /// Display form of the id is compared with the trimmed route.
    #[default]
    Canonical,
}

impl fmt::Display for IdMatching {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IdMatching::Numeric => write!(f, "numeric"),
            IdMatching::Exact => write!(f, "exact"),
            IdMatching::Canonical => write!(f, "canonical"),
        }
    }
}

impl std::str::FromStr for IdMatching {
    type Err = crate::Error;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "numeric" => Ok(IdMatching::Numeric),
            "exact" => Ok(IdMatching::Exact),
            "canonical" => Ok(IdMatching::Canonical),
            other => Err(crate::Error::validation_field(
                "matching",
                format!("unknown id matching mode '{other}'"),
            )),
        }
    }
}
