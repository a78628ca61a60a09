//! HTTP endpoints serving the mock collections.
//!
//! Each route returns its full collection as one JSON array. Query
//! parameters are ignored; filtering happens client-side.

use std::net::SocketAddr;
use std::sync::Arc;

use axum::extract::State;
use axum::routing::get;
use axum::{Json, Router};
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;

use crate::error::DashboardError;
use crate::fixtures::MockDataset;
use crate::model::{Employee, Organization, Project, PullRequest, Repository};

type SharedDataset = Arc<MockDataset>;

/// Builds the `/api` router over a shared dataset.
#[must_use]
pub fn router(dataset: SharedDataset) -> Router {
    Router::new()
        .route("/api/employees", get(list_employees))
        .route("/api/organizations", get(list_organizations))
        .route("/api/projects", get(list_projects))
        .route("/api/pullrequests", get(list_pull_requests))
        .route("/api/repositories", get(list_repositories))
        .layer(TraceLayer::new_for_http())
        .with_state(dataset)
}

/// Binds `address` and returns the listener with its resolved local address.
///
/// # Errors
///
/// Returns [`DashboardError::Server`] when the address cannot be bound.
pub async fn bind(address: SocketAddr) -> Result<(TcpListener, SocketAddr), DashboardError> {
    let listener = TcpListener::bind(address)
        .await
        .map_err(|error| server_error(&format!("bind {address}"), &error))?;
    let local = listener
        .local_addr()
        .map_err(|error| server_error("read local address", &error))?;
    Ok((listener, local))
}

/// Serves the endpoints on an already bound listener until the task ends.
///
/// # Errors
///
/// Returns [`DashboardError::Server`] when the accept loop fails.
pub async fn serve(listener: TcpListener, dataset: SharedDataset) -> Result<(), DashboardError> {
    if let Ok(local) = listener.local_addr() {
        tracing::info!(%local, "serving open-data endpoints under /api");
    }
    axum::serve(listener, router(dataset))
        .await
        .map_err(|error| server_error("serve", &error))
}

fn server_error(operation: &str, error: &std::io::Error) -> DashboardError {
    DashboardError::Server {
        message: format!("{operation} failed: {error}"),
    }
}

async fn list_employees(State(dataset): State<SharedDataset>) -> Json<Vec<Employee>> {
    Json(dataset.employees.clone())
}

async fn list_organizations(State(dataset): State<SharedDataset>) -> Json<Vec<Organization>> {
    Json(dataset.organizations.clone())
}

async fn list_projects(State(dataset): State<SharedDataset>) -> Json<Vec<Project>> {
    Json(dataset.projects.clone())
}

async fn list_pull_requests(State(dataset): State<SharedDataset>) -> Json<Vec<PullRequest>> {
    Json(dataset.pull_requests.clone())
}

async fn list_repositories(State(dataset): State<SharedDataset>) -> Json<Vec<Repository>> {
    Json(dataset.repositories.clone())
}
