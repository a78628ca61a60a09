//! Pull requests attributed to the support-and-care offering.

use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime, Utc};
use serde::{Deserialize, Serialize};

use crate::matching::RepositoryPattern;
use crate::model::{Project, PullRequest, PullRequestState, github_time};

/// Projects whose repositories make up the support-and-care offering.
pub const SUPPORT_CARE_PROJECT_UUIDS: [&str; 3] = [
    "Project-support-and-care",
    "Project-maven",
    "Project-maven-plugins",
];

/// Start of the support-and-care window, 2024-12-01T00:00:00 UTC.
pub const SUPPORT_CARE_UPDATED_SINCE: NaiveDateTime =
    match NaiveDate::from_ymd_opt(2024, 12, 1) {
        Some(date) => date.and_time(NaiveTime::MIN),
        None => panic!("support-and-care cut-off is not a calendar date"),
    };

/// One row of the support-and-care table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SupportCarePullRequest {
    /// Pull request title.
    pub title: String,
    /// Last update time on GitHub.
    #[serde(rename = "lastUpdateInGitHub", serialize_with = "github_time::serialize")]
    pub last_updated_at: DateTime<Utc>,
    /// Display state.
    pub state: PullRequestState,
    /// GitHub URL of the pull request.
    pub link: String,
}

impl From<&PullRequest> for SupportCarePullRequest {
    fn from(pr: &PullRequest) -> Self {
        Self {
            title: pr.title.clone(),
            last_updated_at: pr.last_updated_at,
            state: pr.state(),
            link: pr.html_url(),
        }
    }
}

/// Which projects and which update window the support-and-care view covers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SupportCarePolicy {
    project_uuids: Vec<String>,
    updated_since: DateTime<Utc>,
}

impl Default for SupportCarePolicy {
    fn default() -> Self {
        Self {
            project_uuids: SUPPORT_CARE_PROJECT_UUIDS
                .iter()
                .map(|uuid| (*uuid).to_owned())
                .collect(),
            updated_since: SUPPORT_CARE_UPDATED_SINCE.and_utc(),
        }
    }
}

impl SupportCarePolicy {
    /// Creates a policy for custom project identifiers and cut-off.
    #[must_use]
    pub const fn new(project_uuids: Vec<String>, updated_since: DateTime<Utc>) -> Self {
        Self {
            project_uuids,
            updated_since,
        }
    }

    /// Inclusive lower bound on `lastUpdateInGitHub`.
    #[must_use]
    pub const fn updated_since(&self) -> DateTime<Utc> {
        self.updated_since
    }

    /// Collects the patterns of every selected project, duplicates included.
    #[must_use]
    pub fn patterns<'a>(&self, projects: &'a [Project]) -> Vec<&'a RepositoryPattern> {
        projects
            .iter()
            .filter(|project| self.project_uuids.iter().any(|uuid| *uuid == project.uuid))
            .flat_map(Project::patterns)
            .collect()
    }

    /// Selects and maps the pull requests covered by this policy.
    ///
    /// The result keeps the order of `prs`.
    #[must_use]
    pub fn select(&self, prs: &[PullRequest], projects: &[Project]) -> Vec<SupportCarePullRequest> {
        let patterns = self.patterns(projects);
        prs.iter()
            .filter(|pr| pr.last_updated_at >= self.updated_since)
            .filter(|pr| patterns.iter().any(|pattern| pattern.matches(*pr)))
            .map(SupportCarePullRequest::from)
            .collect()
    }
}

/// Pull requests in support-and-care repositories updated since
/// 2024-12-01T00:00:00Z.
#[must_use]
pub fn support_and_care_prs(
    prs: &[PullRequest],
    projects: &[Project],
) -> Vec<SupportCarePullRequest> {
    SupportCarePolicy::default().select(prs, projects)
}
