//! Bundled mock collections served by the open-data endpoints.
//!
//! The JSON documents are compiled into the binary and decoded through the
//! same validation path as fetched data, so a broken fixture fails loudly at
//! start-up instead of producing a half-empty dashboard.

use serde::de::DeserializeOwned;

use crate::client::{Endpoint, validate_collection};
use crate::error::DashboardError;
use crate::model::{Employee, Organization, Project, PullRequest, Record, Repository};

const EMPLOYEES_JSON: &str = include_str!("data/employees.json");
const ORGANIZATIONS_JSON: &str = include_str!("data/organizations.json");
const PROJECTS_JSON: &str = include_str!("data/projects.json");
const PULL_REQUESTS_JSON: &str = include_str!("data/pullrequests.json");
const REPOSITORIES_JSON: &str = include_str!("data/repositories.json");

/// Every collection the endpoints serve.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MockDataset {
    /// Employees.
    pub employees: Vec<Employee>,
    /// Organisations.
    pub organizations: Vec<Organization>,
    /// Projects.
    pub projects: Vec<Project>,
    /// Pull requests.
    pub pull_requests: Vec<PullRequest>,
    /// Repositories.
    pub repositories: Vec<Repository>,
}

impl MockDataset {
    /// Decodes the bundled fixtures.
    ///
    /// # Errors
    ///
    /// Returns [`DashboardError::Decode`] or [`DashboardError::InvalidRecord`]
    /// when a bundled document is malformed.
    pub fn bundled() -> Result<Self, DashboardError> {
        Ok(Self {
            employees: decode(Endpoint::Employees, EMPLOYEES_JSON)?,
            organizations: decode(Endpoint::Organizations, ORGANIZATIONS_JSON)?,
            projects: decode(Endpoint::Projects, PROJECTS_JSON)?,
            pull_requests: decode(Endpoint::PullRequests, PULL_REQUESTS_JSON)?,
            repositories: decode(Endpoint::Repositories, REPOSITORIES_JSON)?,
        })
    }
}

fn decode<T>(endpoint: Endpoint, raw: &str) -> Result<Vec<T>, DashboardError>
where
    T: DeserializeOwned + Record,
{
    let records: Vec<T> = serde_json::from_str(raw).map_err(|error| DashboardError::Decode {
        endpoint,
        message: error.to_string(),
    })?;
    validate_collection(endpoint, &records)?;
    Ok(records)
}
