//! Everything the landing page shows, computed from one set of fetches.

use serde::{Deserialize, Serialize};

use crate::model::{Employee, Project, PullRequest, Repository};
use crate::timeline::{MonthBucket, group_by_month, year_ticks};

use super::{
    DashboardStats, MergedPullRequestsPerProject, max_merged_count, merged_counts_by_project,
    rank_by_merged_count,
};

/// Projects listed in the overview's ranking when no limit is configured.
pub const DEFAULT_TOP_PROJECTS: usize = 5;

/// Headline counts, the top projects, and the monthly series.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardOverview {
    /// Collection sizes.
    pub stats: DashboardStats,
    /// Projects with the most merged pull requests, highest first.
    pub top_projects: Vec<MergedPullRequestsPerProject>,
    /// Scale of the progress bars: the highest count among all projects.
    pub max_merged_count: usize,
    /// Pull requests per creation month.
    pub months: Vec<MonthBucket>,
    /// Month keys that open a new year on the chart axis.
    pub year_ticks: Vec<String>,
}

impl DashboardOverview {
    /// Builds the overview, keeping at most `top` ranked projects.
    #[must_use]
    pub fn from_collections(
        employees: &[Employee],
        projects: &[Project],
        repositories: &[Repository],
        prs: &[PullRequest],
        top: usize,
    ) -> Self {
        let counts = merged_counts_by_project(prs, projects);
        let max_merged_count = max_merged_count(&counts);
        let months = group_by_month(prs);
        let year_ticks = year_ticks(&months);

        Self {
            stats: DashboardStats::from_collections(employees, projects, repositories, prs),
            top_projects: rank_by_merged_count(counts, Some(top)),
            max_merged_count,
            months,
            year_ticks,
        }
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::DashboardOverview;
    use crate::fixtures::MockDataset;

    #[rstest]
    fn bundled_overview_ranks_the_top_projects() {
        let dataset = MockDataset::bundled().expect("bundled fixtures should decode");

        let overview = DashboardOverview::from_collections(
            &dataset.employees,
            &dataset.projects,
            &dataset.repositories,
            &dataset.pull_requests,
            2,
        );
        let names: Vec<&str> = overview
            .top_projects
            .iter()
            .map(|row| row.name.as_str())
            .collect();

        assert_eq!(names, vec!["Apache Maven", "Hiero"]);
        assert_eq!(overview.max_merged_count, 2);
        assert_eq!(overview.stats.merged_pull_requests, 6);
        assert_eq!(overview.year_ticks, vec!["2024-09", "2025-01"]);
    }
}
