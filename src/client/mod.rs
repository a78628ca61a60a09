//! Data access facade for the open-data endpoints.
//!
//! [`OpenDataGateway`] is the only boundary between the aggregation logic
//! and the data source. The HTTP implementation talks to the JSON endpoints;
//! the static implementation serves the bundled fixtures directly. Callers
//! receive a gateway explicitly and wrap it in a [`DashboardService`] to get
//! display-ready views.

mod endpoint;
mod http_gateway;
mod service;
mod static_data;

pub use endpoint::Endpoint;
pub use http_gateway::HttpOpenDataGateway;
pub use service::DashboardService;
pub use static_data::StaticOpenDataGateway;

use async_trait::async_trait;

use crate::error::DashboardError;
use crate::model::{Employee, Organization, Project, PullRequest, Record, Repository};

/// Gateway that can load the open-data collections.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait OpenDataGateway: Send + Sync {
    /// Fetch all employees.
    async fn employees(&self) -> Result<Vec<Employee>, DashboardError>;

    /// Fetch all organisations.
    async fn organizations(&self) -> Result<Vec<Organization>, DashboardError>;

    /// Fetch all projects.
    async fn projects(&self) -> Result<Vec<Project>, DashboardError>;

    /// Fetch all pull requests.
    async fn pull_requests(&self) -> Result<Vec<PullRequest>, DashboardError>;

    /// Fetch all repositories.
    async fn repositories(&self) -> Result<Vec<Repository>, DashboardError>;
}

/// Rejects a collection when any of its records fails validation.
pub(crate) fn validate_collection<T: Record>(
    endpoint: Endpoint,
    records: &[T],
) -> Result<(), DashboardError> {
    records
        .iter()
        .try_for_each(T::validate)
        .map_err(|violation| DashboardError::InvalidRecord {
            endpoint,
            message: violation.to_string(),
        })
}
