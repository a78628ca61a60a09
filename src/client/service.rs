//! Display-ready views assembled from gateway collections.

use crate::aggregate::{
    DashboardOverview, DashboardStats, MergedPullRequestsPerProject, SupportCarePullRequest,
    merged_counts_by_project, support_and_care_prs,
};
use crate::error::DashboardError;
use crate::timeline::{MonthBucket, group_by_month};

use super::OpenDataGateway;

/// Combines gateway fetches with the aggregation functions.
///
/// Views that need more than one collection request them concurrently and
/// fail as a whole when any request fails.
pub struct DashboardService<'client, Gateway>
where
    Gateway: OpenDataGateway,
{
    client: &'client Gateway,
}

impl<'client, Gateway> DashboardService<'client, Gateway>
where
    Gateway: OpenDataGateway,
{
    /// Create a new service using the provided gateway.
    #[must_use]
    pub const fn new(client: &'client Gateway) -> Self {
        Self { client }
    }

    /// The gateway backing this service.
    #[must_use]
    pub const fn gateway(&self) -> &'client Gateway {
        self.client
    }

    /// Merged pull request counts per project, in project order.
    ///
    /// # Errors
    ///
    /// Propagates the first failure of the pull request or project fetch.
    pub async fn merged_pull_requests_per_project(
        &self,
    ) -> Result<Vec<MergedPullRequestsPerProject>, DashboardError> {
        let (prs, projects) =
            tokio::try_join!(self.client.pull_requests(), self.client.projects())?;
        Ok(merged_counts_by_project(&prs, &projects))
    }

    /// Recent pull requests in support-and-care repositories.
    ///
    /// # Errors
    ///
    /// Propagates the first failure of the pull request or project fetch.
    pub async fn support_and_care_pull_requests(
        &self,
    ) -> Result<Vec<SupportCarePullRequest>, DashboardError> {
        let (prs, projects) =
            tokio::try_join!(self.client.pull_requests(), self.client.projects())?;
        Ok(support_and_care_prs(&prs, &projects))
    }

    /// Pull requests bucketed by creation month.
    ///
    /// # Errors
    ///
    /// Propagates a failed pull request fetch.
    pub async fn pull_requests_over_time(&self) -> Result<Vec<MonthBucket>, DashboardError> {
        let prs = self.client.pull_requests().await?;
        Ok(group_by_month(&prs))
    }

    /// Headline counts for the overview page.
    ///
    /// # Errors
    ///
    /// Propagates the first failure of any of the four fetches.
    pub async fn stats(&self) -> Result<DashboardStats, DashboardError> {
        let (employees, projects, repositories, prs) = tokio::try_join!(
            self.client.employees(),
            self.client.projects(),
            self.client.repositories(),
            self.client.pull_requests(),
        )?;
        Ok(DashboardStats::from_collections(
            &employees,
            &projects,
            &repositories,
            &prs,
        ))
    }

    /// Landing-page overview with at most `top` ranked projects.
    ///
    /// # Errors
    ///
    /// Propagates the first failure of any of the four fetches.
    pub async fn overview(&self, top: usize) -> Result<DashboardOverview, DashboardError> {
        let (employees, projects, repositories, prs) = tokio::try_join!(
            self.client.employees(),
            self.client.projects(),
            self.client.repositories(),
            self.client.pull_requests(),
        )?;
        Ok(DashboardOverview::from_collections(
            &employees,
            &projects,
            &repositories,
            &prs,
            top,
        ))
    }
}
