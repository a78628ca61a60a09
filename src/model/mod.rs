//! Record types served by the open-data endpoints.
//!
//! Every collection is decoded into these explicit types at the fetch
//! boundary. Field names on the wire are camelCase, matching the JSON the
//! endpoints emit. Records are immutable snapshots; nothing here is cached
//! between requests.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::matching::{RepositoryCoordinates, RepositoryPattern};

pub(crate) mod github_time;
mod validation;

#[cfg(any(test, feature = "test-support"))]
pub mod test_support;

pub use validation::{Record, RecordViolation};

/// A member of staff.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Employee {
    /// Stable identifier.
    pub uuid: String,
    /// Given name.
    pub first_name: String,
    /// Family name.
    pub last_name: String,
    /// Job title.
    pub role: String,
    /// GitHub login.
    #[serde(rename = "gitHubUsername")]
    pub github_username: String,
}

impl Employee {
    /// Returns `first last`.
    #[must_use]
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

/// Legal and contact details of an organisation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Organization {
    /// Stable identifier.
    pub uuid: String,
    /// Display name.
    pub name: String,
    /// Registered legal name.
    pub legal_name: String,
    /// Street and house number.
    pub street_address: String,
    /// Postal code.
    pub postal_code: String,
    /// City.
    pub city: String,
    /// Country.
    pub country: String,
    /// Contact e-mail address.
    pub email: String,
    /// Contact telephone number.
    pub telephone: String,
    /// Founder's name.
    pub founder: String,
    /// Commercial register number.
    pub register_number: String,
    /// Court keeping the commercial register.
    pub register_court: String,
    /// VAT identification number.
    pub vat_number: String,
    /// Website.
    pub url: String,
}

/// An open-source project and the repositories that belong to it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    /// Stable identifier.
    pub uuid: String,
    /// Display name.
    pub name: String,
    /// Short description.
    pub description: String,
    /// Repository patterns owned by the project, in declaration order.
    ///
    /// A missing list matches nothing.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub matching_repos: Option<Vec<RepositoryPattern>>,
    /// SVG logo for light themes.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub svg_logo_for_bright_background: Option<String>,
    /// SVG logo for dark themes.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub svg_logo_for_dark_background: Option<String>,
    /// PNG logo for light themes.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub png_logo_for_bright_background: Option<String>,
    /// PNG logo for dark themes.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub png_logo_for_dark_background: Option<String>,
}

impl Project {
    /// Returns the declared patterns, or an empty slice when none are set.
    #[must_use]
    pub fn patterns(&self) -> &[RepositoryPattern] {
        self.matching_repos.as_deref().unwrap_or_default()
    }

    /// Returns true when any declared pattern covers the target.
    #[must_use]
    pub fn covers<T>(&self, target: &T) -> bool
    where
        T: RepositoryCoordinates + ?Sized,
    {
        self.patterns()
            .iter()
            .any(|pattern| pattern.matches(target))
    }
}

/// A GitHub repository the organisation has contributed to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Repository {
    /// Stable identifier.
    pub uuid: String,
    /// Owning organisation.
    pub org: String,
    /// Repository name.
    pub repository: String,
}

impl Repository {
    /// Returns the repository's GitHub URL.
    #[must_use]
    pub fn html_url(&self) -> String {
        format!("https://github.com/{}/{}", self.org, self.repository)
    }
}

impl RepositoryCoordinates for Repository {
    fn org(&self) -> &str {
        &self.org
    }

    fn repository(&self) -> &str {
        &self.repository
    }
}

/// A pull request authored by the organisation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PullRequest {
    /// Stable identifier.
    pub uuid: String,
    /// Owning organisation of the target repository.
    pub org: String,
    /// Target repository name.
    pub repository: String,
    /// Pull request number on GitHub.
    #[serde(rename = "gitHubId")]
    pub github_id: u64,
    /// Title.
    pub title: String,
    /// Creation time on GitHub.
    #[serde(rename = "createdAtInGitHub", serialize_with = "github_time::serialize")]
    pub created_at: DateTime<Utc>,
    /// Last update time on GitHub.
    #[serde(rename = "lastUpdateInGitHub", serialize_with = "github_time::serialize")]
    pub last_updated_at: DateTime<Utc>,
    /// Whether the pull request is open.
    pub open: bool,
    /// Whether the pull request is a draft.
    #[serde(default)]
    pub draft: bool,
    /// Whether the pull request was merged.
    pub merged: bool,
    /// GitHub login of the author.
    pub author: String,
}

impl PullRequest {
    /// Derives the display state.
    ///
    /// `merged` is checked before `open`, so a record flagged as both is
    /// reported as merged.
    #[must_use]
    pub const fn state(&self) -> PullRequestState {
        if self.merged {
            PullRequestState::Merged
        } else if self.open {
            PullRequestState::Open
        } else {
            PullRequestState::Closed
        }
    }

    /// Returns the pull request's GitHub URL.
    #[must_use]
    pub fn html_url(&self) -> String {
        format!(
            "https://github.com/{}/{}/pull/{}",
            self.org, self.repository, self.github_id
        )
    }
}

impl RepositoryCoordinates for PullRequest {
    fn org(&self) -> &str {
        &self.org
    }

    fn repository(&self) -> &str {
        &self.repository
    }
}

/// Display state of a pull request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PullRequestState {
    /// Merged into the target branch.
    Merged,
    /// Still open.
    Open,
    /// Closed without merging.
    Closed,
}

impl PullRequestState {
    /// Lowercase label used in JSON and text output.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Merged => "merged",
            Self::Open => "open",
            Self::Closed => "closed",
        }
    }
}

impl std::fmt::Display for PullRequestState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::test_support::{pull_request, timestamp};
    use super::{Project, PullRequest, PullRequestState};
    use crate::matching::RepositoryPattern;

    #[rstest]
    #[case::merged_wins_over_open(true, true, PullRequestState::Merged)]
    #[case::merged(false, true, PullRequestState::Merged)]
    #[case::open(true, false, PullRequestState::Open)]
    #[case::closed(false, false, PullRequestState::Closed)]
    fn state_checks_merged_first(
        #[case] open: bool,
        #[case] merged: bool,
        #[case] expected: PullRequestState,
    ) {
        let pr = PullRequest {
            open,
            merged,
            ..pull_request("pr", "OpenElements", "sdk")
        };

        assert_eq!(pr.state(), expected);
    }

    #[rstest]
    fn html_url_points_at_pull_request() {
        let pr = PullRequest {
            github_id: 1003,
            ..pull_request("pr", "OpenElements", "support-care")
        };

        assert_eq!(
            pr.html_url(),
            "https://github.com/OpenElements/support-care/pull/1003"
        );
    }

    #[rstest]
    fn pull_request_decodes_wire_format() {
        let json = serde_json::json!({
            "uuid": "pr1",
            "org": "OpenElements",
            "repository": "open-elements-sdk",
            "gitHubId": 1001,
            "title": "Add authentication support",
            "createdAtInGitHub": "2025-03-23T21:03:13.123Z",
            "lastUpdateInGitHub": "2025-03-24T12:45:00.000Z",
            "open": true,
            "merged": false,
            "author": "octocat"
        });

        let pr: PullRequest = serde_json::from_value(json).expect("pull request should decode");

        assert_eq!(pr.github_id, 1001);
        assert_eq!(pr.created_at, timestamp("2025-03-23T21:03:13.123Z"));
        assert!(!pr.draft, "draft should default to false");
    }

    #[rstest]
    fn pull_request_rejects_non_rfc3339_timestamps() {
        let json = serde_json::json!({
            "uuid": "pr1",
            "org": "OpenElements",
            "repository": "sdk",
            "gitHubId": 1,
            "title": "t",
            "createdAtInGitHub": "yesterday",
            "lastUpdateInGitHub": "2025-03-24T12:45:00Z",
            "open": true,
            "merged": false,
            "author": "octocat"
        });

        let result = serde_json::from_value::<PullRequest>(json);

        assert!(result.is_err(), "expected decode failure, got {result:?}");
    }

    #[rstest]
    fn project_without_matching_repos_covers_nothing() {
        let json = serde_json::json!({
            "uuid": "p1",
            "name": "Docs",
            "description": "No repositories yet"
        });

        let project: Project = serde_json::from_value(json).expect("project should decode");

        assert!(project.patterns().is_empty());
        assert!(!project.covers(&pull_request("pr", "OpenElements", "docs")));
    }

    #[rstest]
    fn project_covers_any_listed_pattern() {
        let json = serde_json::json!({
            "uuid": "p1",
            "name": "Maven",
            "description": "Build tooling",
            "matchingRepos": ["apache/maven", "OpenElements/*"]
        });

        let project: Project = serde_json::from_value(json).expect("project should decode");

        assert_eq!(
            project.patterns().first(),
            Some(&RepositoryPattern::Exact("apache/maven".to_owned()))
        );
        assert!(project.covers(&pull_request("a", "apache", "maven")));
        assert!(project.covers(&pull_request("b", "OpenElements", "anything")));
        assert!(!project.covers(&pull_request("c", "apache", "maven-site")));
    }
}
