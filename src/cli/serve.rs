//! Serving the bundled collections as HTTP endpoints.

use std::sync::Arc;

use opendata_dashboard::{DashboardConfig, DashboardError, MockDataset, server};

/// Serves the bundled collections on the configured address until stopped.
///
/// # Errors
///
/// Returns [`DashboardError::Configuration`] for an invalid bind address and
/// [`DashboardError::Server`] when binding or serving fails.
pub async fn run(config: &DashboardConfig) -> Result<(), DashboardError> {
    let address = config.bind_address()?;
    let dataset = Arc::new(MockDataset::bundled()?);
    let (listener, _) = server::bind(address).await?;
    server::serve(listener, dataset).await
}
