//! Repository pattern matching.
//!
//! Projects list the repositories they own as patterns. A pattern is either
//! an exact `org/repo` name or an `org/*` wildcard covering every repository
//! of an organisation. Matching is case-sensitive and performs no trimming
//! or normalisation.

use std::fmt;

use serde::{Deserialize, Serialize};

const WILDCARD_SUFFIX: &str = "/*";

/// Anything that lives at an `(org, repository)` coordinate on GitHub.
pub trait RepositoryCoordinates {
    /// GitHub organisation or user that owns the repository.
    fn org(&self) -> &str;

    /// Repository name within the organisation.
    fn repository(&self) -> &str;
}

/// A parsed repository pattern.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum RepositoryPattern {
    /// `org/*`: every repository owned by the organisation.
    Organization(String),
    /// `org/repo`: exactly one repository, compared as a whole string.
    Exact(String),
}

impl RepositoryPattern {
    /// Parses a pattern string. Every string is a valid pattern.
    #[must_use]
    pub fn parse(pattern: &str) -> Self {
        pattern.strip_suffix(WILDCARD_SUFFIX).map_or_else(
            || Self::Exact(pattern.to_owned()),
            |org| Self::Organization(org.to_owned()),
        )
    }

    /// Returns true when the target sits at a coordinate covered by this
    /// pattern.
    #[must_use]
    pub fn matches<T>(&self, target: &T) -> bool
    where
        T: RepositoryCoordinates + ?Sized,
    {
        match self {
            Self::Organization(org) => target.org() == org,
            Self::Exact(full_name) => full_name
                .strip_prefix(target.org())
                .and_then(|rest| rest.strip_prefix('/'))
                .is_some_and(|repository| repository == target.repository()),
        }
    }
}

impl From<String> for RepositoryPattern {
    fn from(value: String) -> Self {
        Self::parse(&value)
    }
}

impl From<&str> for RepositoryPattern {
    fn from(value: &str) -> Self {
        Self::parse(value)
    }
}

impl From<RepositoryPattern> for String {
    fn from(value: RepositoryPattern) -> Self {
        value.to_string()
    }
}

impl fmt::Display for RepositoryPattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Organization(org) => write!(f, "{org}{WILDCARD_SUFFIX}"),
            Self::Exact(full_name) => f.write_str(full_name),
        }
    }
}

/// Decides whether `pattern` covers the target's `(org, repository)` pair.
#[must_use]
pub fn matches<T>(pattern: &str, target: &T) -> bool
where
    T: RepositoryCoordinates + ?Sized,
{
    RepositoryPattern::parse(pattern).matches(target)
}
