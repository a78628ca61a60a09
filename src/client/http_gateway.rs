//! Gateway that fetches collections from the JSON endpoints over HTTP.

use async_trait::async_trait;
use http::StatusCode;
use serde::de::DeserializeOwned;
use url::Url;

use crate::error::DashboardError;
use crate::model::{Employee, Organization, Project, PullRequest, Record, Repository};

use super::{Endpoint, OpenDataGateway, validate_collection};

/// Reqwest-backed gateway rooted at an API base URL such as
/// `http://127.0.0.1:3000/api`.
#[derive(Debug, Clone)]
pub struct HttpOpenDataGateway {
    client: reqwest::Client,
    base_url: Url,
}

impl HttpOpenDataGateway {
    /// Creates a gateway with a default HTTP client.
    ///
    /// # Errors
    ///
    /// Returns [`DashboardError::InvalidUrl`] when `base_url` is not an
    /// absolute URL that can carry path segments.
    pub fn new(base_url: &str) -> Result<Self, DashboardError> {
        Self::with_client(reqwest::Client::new(), base_url)
    }

    /// Creates a gateway using the provided HTTP client.
    ///
    /// # Errors
    ///
    /// Returns [`DashboardError::InvalidUrl`] when `base_url` is not an
    /// absolute URL that can carry path segments.
    pub fn with_client(client: reqwest::Client, base_url: &str) -> Result<Self, DashboardError> {
        Ok(Self {
            client,
            base_url: parse_base_url(base_url)?,
        })
    }

    /// Base URL every endpoint path is joined onto, with a trailing slash.
    #[must_use]
    pub const fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Full URL of an endpoint.
    ///
    /// # Errors
    ///
    /// Returns [`DashboardError::InvalidUrl`] if the join fails.
    pub fn endpoint_url(&self, endpoint: Endpoint) -> Result<Url, DashboardError> {
        self.base_url
            .join(endpoint.path())
            .map_err(|error| DashboardError::InvalidUrl(error.to_string()))
    }

    async fn fetch<T>(&self, endpoint: Endpoint) -> Result<Vec<T>, DashboardError>
    where
        T: DeserializeOwned + Record,
    {
        self.fetch_unlogged(endpoint).await.inspect_err(|error| {
            tracing::warn!(%endpoint, %error, "open-data request failed");
        })
    }

    async fn fetch_unlogged<T>(&self, endpoint: Endpoint) -> Result<Vec<T>, DashboardError>
    where
        T: DeserializeOwned + Record,
    {
        let url = self.endpoint_url(endpoint)?;
        tracing::debug!(%endpoint, %url, "fetching open-data collection");

        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|error| network_error(endpoint, &error))?;

        let status: StatusCode = response.status();
        if !status.is_success() {
            return Err(DashboardError::Http {
                endpoint,
                status: status.as_u16(),
            });
        }

        let body = response
            .text()
            .await
            .map_err(|error| network_error(endpoint, &error))?;
        let records: Vec<T> =
            serde_json::from_str(&body).map_err(|error| DashboardError::Decode {
                endpoint,
                message: error.to_string(),
            })?;

        validate_collection(endpoint, &records)?;
        tracing::debug!(%endpoint, count = records.len(), "fetched open-data collection");
        Ok(records)
    }
}

#[async_trait]
impl OpenDataGateway for HttpOpenDataGateway {
    async fn employees(&self) -> Result<Vec<Employee>, DashboardError> {
        self.fetch(Endpoint::Employees).await
    }

    async fn organizations(&self) -> Result<Vec<Organization>, DashboardError> {
        self.fetch(Endpoint::Organizations).await
    }

    async fn projects(&self) -> Result<Vec<Project>, DashboardError> {
        self.fetch(Endpoint::Projects).await
    }

    async fn pull_requests(&self) -> Result<Vec<PullRequest>, DashboardError> {
        self.fetch(Endpoint::PullRequests).await
    }

    async fn repositories(&self) -> Result<Vec<Repository>, DashboardError> {
        self.fetch(Endpoint::Repositories).await
    }
}

fn parse_base_url(raw: &str) -> Result<Url, DashboardError> {
    let with_slash = if raw.ends_with('/') {
        raw.to_owned()
    } else {
        format!("{raw}/")
    };
    let url =
        Url::parse(&with_slash).map_err(|error| DashboardError::InvalidUrl(error.to_string()))?;
    if url.cannot_be_a_base() {
        return Err(DashboardError::InvalidUrl(format!(
            "{raw} cannot be used as a base URL"
        )));
    }
    Ok(url)
}

fn network_error(endpoint: Endpoint, error: &reqwest::Error) -> DashboardError {
    DashboardError::Network {
        endpoint,
        message: error.to_string(),
    }
}
