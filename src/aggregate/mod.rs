//! Derived views over pull request and project collections.
//!
//! All functions here are pure: they read their arguments, allocate their
//! output, and keep no state between calls.

use serde::{Deserialize, Serialize};

use crate::model::{Project, PullRequest};

mod overview;
mod stats;
mod support_care;

pub use overview::{DEFAULT_TOP_PROJECTS, DashboardOverview};
pub use stats::DashboardStats;
pub use support_care::{
    SUPPORT_CARE_PROJECT_UUIDS, SUPPORT_CARE_UPDATED_SINCE, SupportCarePolicy,
    SupportCarePullRequest, support_and_care_prs,
};

/// Number of merged pull requests attributed to one project.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MergedPullRequestsPerProject {
    /// Project display name.
    pub name: String,
    /// Merged pull requests in any repository the project covers.
    pub merged_count: usize,
}

impl MergedPullRequestsPerProject {
    /// Share of `max` as a whole percentage, or 0 when `max` is 0.
    #[must_use]
    pub fn percent_of(&self, max: usize) -> usize {
        self.merged_count
            .saturating_mul(100)
            .checked_div(max)
            .unwrap_or(0)
    }
}

/// Counts merged pull requests per project.
///
/// Returns one row per project in input order, including projects with no
/// matches. A pull request counts towards every project with a pattern that
/// covers it.
#[must_use]
pub fn merged_counts_by_project(
    prs: &[PullRequest],
    projects: &[Project],
) -> Vec<MergedPullRequestsPerProject> {
    projects
        .iter()
        .map(|project| MergedPullRequestsPerProject {
            name: project.name.clone(),
            merged_count: prs
                .iter()
                .filter(|pr| pr.merged && project.covers(*pr))
                .count(),
        })
        .collect()
}

/// Orders rows by merged count, highest first, keeping input order for ties.
///
/// When `limit` is set only the first `limit` rows are kept.
#[must_use]
pub fn rank_by_merged_count(
    mut rows: Vec<MergedPullRequestsPerProject>,
    limit: Option<usize>,
) -> Vec<MergedPullRequestsPerProject> {
    rows.sort_by(|left, right| right.merged_count.cmp(&left.merged_count));
    if let Some(limit) = limit {
        rows.truncate(limit);
    }
    rows
}

/// Highest merged count across rows, or 0 for no rows.
#[must_use]
pub fn max_merged_count(rows: &[MergedPullRequestsPerProject]) -> usize {
    rows.iter().map(|row| row.merged_count).max().unwrap_or(0)
}
