//! Builders for record fixtures used in tests.
//!
//! # Examples
//!
//! ```
//! use opendata_dashboard::model::test_support::{project, pull_request, timestamp};
//!
//! let pr = pull_request("pr1", "OpenElements", "sdk");
//! assert_eq!(pr.org, "OpenElements");
//!
//! let sdk = project("p1", "SDK", &["OpenElements/sdk"]);
//! assert!(sdk.covers(&pr));
//!
//! assert_eq!(timestamp("2024-12-01T00:00:00Z").to_rfc3339(), "2024-12-01T00:00:00+00:00");
//! ```

use chrono::{DateTime, Utc};

use super::{Project, PullRequest};
use crate::matching::RepositoryPattern;

/// Parses an RFC 3339 timestamp.
///
/// # Panics
///
/// Panics when `value` is not valid RFC 3339.
#[must_use]
pub fn timestamp(value: &str) -> DateTime<Utc> {
    DateTime::parse_from_rfc3339(value)
        .unwrap_or_else(|error| panic!("invalid test timestamp {value}: {error}"))
        .with_timezone(&Utc)
}

/// Builds an open, unmerged pull request at `org/repository`.
///
/// Both timestamps default to `2025-01-01T00:00:00Z`.
#[must_use]
pub fn pull_request(uuid: &str, org: &str, repository: &str) -> PullRequest {
    let at = timestamp("2025-01-01T00:00:00Z");
    PullRequest {
        uuid: uuid.to_owned(),
        org: org.to_owned(),
        repository: repository.to_owned(),
        github_id: 1,
        title: format!("Pull request {uuid}"),
        created_at: at,
        last_updated_at: at,
        open: true,
        draft: false,
        merged: false,
        author: "octocat".to_owned(),
    }
}

/// Builds a merged pull request at `org/repository`.
#[must_use]
pub fn merged_pull_request(uuid: &str, org: &str, repository: &str) -> PullRequest {
    PullRequest {
        open: false,
        merged: true,
        ..pull_request(uuid, org, repository)
    }
}

/// Builds a pull request created at the given RFC 3339 time.
#[must_use]
pub fn pull_request_created_at(uuid: &str, created_at: &str) -> PullRequest {
    PullRequest {
        created_at: timestamp(created_at),
        ..pull_request(uuid, "OpenElements", "sdk")
    }
}

/// Builds a project owning the given patterns.
#[must_use]
pub fn project(uuid: &str, name: &str, patterns: &[&str]) -> Project {
    Project {
        uuid: uuid.to_owned(),
        name: name.to_owned(),
        description: format!("{name} description"),
        matching_repos: Some(patterns.iter().copied().map(RepositoryPattern::from).collect()),
        svg_logo_for_bright_background: None,
        svg_logo_for_dark_background: None,
        png_logo_for_bright_background: None,
        png_logo_for_dark_background: None,
    }
}

/// Builds a project with no `matchingRepos` at all.
#[must_use]
pub fn project_without_patterns(uuid: &str, name: &str) -> Project {
    Project {
        matching_repos: None,
        ..project(uuid, name, &[])
    }
}
