//! Gateway that serves an in-memory dataset without any network traffic.

use std::sync::Arc;

use async_trait::async_trait;

use crate::error::DashboardError;
use crate::fixtures::MockDataset;
use crate::model::{Employee, Organization, Project, PullRequest, Repository};

use super::OpenDataGateway;

/// Serves clones of a shared [`MockDataset`].
#[derive(Debug, Clone)]
pub struct StaticOpenDataGateway {
    dataset: Arc<MockDataset>,
}

impl StaticOpenDataGateway {
    /// Wraps a shared dataset.
    #[must_use]
    pub const fn new(dataset: Arc<MockDataset>) -> Self {
        Self { dataset }
    }

    /// Gateway over the bundled fixtures.
    ///
    /// # Errors
    ///
    /// Propagates fixture decoding failures from [`MockDataset::bundled`].
    pub fn bundled() -> Result<Self, DashboardError> {
        Ok(Self::new(Arc::new(MockDataset::bundled()?)))
    }
}

#[async_trait]
impl OpenDataGateway for StaticOpenDataGateway {
    async fn employees(&self) -> Result<Vec<Employee>, DashboardError> {
        Ok(self.dataset.employees.clone())
    }

    async fn organizations(&self) -> Result<Vec<Organization>, DashboardError> {
        Ok(self.dataset.organizations.clone())
    }

    async fn projects(&self) -> Result<Vec<Project>, DashboardError> {
        Ok(self.dataset.projects.clone())
    }

    async fn pull_requests(&self) -> Result<Vec<PullRequest>, DashboardError> {
        Ok(self.dataset.pull_requests.clone())
    }

    async fn repositories(&self) -> Result<Vec<Repository>, DashboardError> {
        Ok(self.dataset.repositories.clone())
    }
}
