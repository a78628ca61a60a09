//! Headline counts shown on the dashboard overview.

use serde::{Deserialize, Serialize};

use crate::model::{Employee, Project, PullRequest, Repository};

/// Collection sizes plus the number of merged pull requests.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardStats {
    /// Number of employees.
    pub employees: usize,
    /// Number of projects.
    pub projects: usize,
    /// Number of repositories.
    pub repositories: usize,
    /// Number of pull requests.
    pub pull_requests: usize,
    /// Number of merged pull requests.
    pub merged_pull_requests: usize,
}

impl DashboardStats {
    /// Computes the overview counts from full collections.
    #[must_use]
    pub fn from_collections(
        employees: &[Employee],
        projects: &[Project],
        repositories: &[Repository],
        prs: &[PullRequest],
    ) -> Self {
        Self {
            employees: employees.len(),
            projects: projects.len(),
            repositories: repositories.len(),
            pull_requests: prs.len(),
            merged_pull_requests: prs.iter().filter(|pr| pr.merged).count(),
        }
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::DashboardStats;
    use crate::model::test_support::{merged_pull_request, project, pull_request};

    #[rstest]
    fn counts_every_collection_and_merged_prs() {
        let prs = vec![
            merged_pull_request("a", "OpenElements", "sdk"),
            pull_request("b", "OpenElements", "sdk"),
            merged_pull_request("c", "apache", "maven"),
        ];
        let projects = vec![project("p1", "SDK", &["OpenElements/sdk"])];

        let stats = DashboardStats::from_collections(&[], &projects, &[], &prs);

        assert_eq!(
            stats,
            DashboardStats {
                employees: 0,
                projects: 1,
                repositories: 0,
                pull_requests: 3,
                merged_pull_requests: 2,
            }
        );
    }
}
