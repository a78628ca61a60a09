//! Scenario state and mock endpoint set-up for the dashboard report BDD tests.

use std::rc::Rc;

use opendata_dashboard::{
    DashboardError, DashboardService, Endpoint, HttpOpenDataGateway, MergedPullRequestsPerProject,
    MockDataset, MonthBucket, SupportCarePullRequest,
};
use rstest_bdd::Slot;
use rstest_bdd_macros::ScenarioState;
use serde::Serialize;
use tokio::runtime::Runtime;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// Result of whichever view the scenario loaded.
#[derive(Debug, Clone)]
pub(crate) enum DashboardView {
    MergedPerProject(Vec<MergedPullRequestsPerProject>),
    SupportCare(Vec<SupportCarePullRequest>),
    Months(Vec<MonthBucket>),
}

/// Wiremock server serving the bundled collections under `/api`, plus the
/// runtime that drives it.
#[derive(Clone)]
pub(crate) struct MockEndpoints {
    server: Rc<MockServer>,
    runtime: Rc<Runtime>,
}

impl MockEndpoints {
    /// Starts a server answering `failing` with an error status and every
    /// other endpoint with its bundled collection.
    fn start(failing: Option<(Endpoint, u16)>) -> Self {
        let runtime = Runtime::new()
            .unwrap_or_else(|error| panic!("failed to create Tokio runtime: {error}"));
        let dataset = MockDataset::bundled()
            .unwrap_or_else(|error| panic!("bundled fixtures should decode: {error}"));

        let server = runtime.block_on(async {
            let server = MockServer::start().await;
            for endpoint in Endpoint::ALL {
                let response = match failing {
                    Some((failed, status)) if failed == endpoint => ResponseTemplate::new(status),
                    _ => collection_response(&dataset, endpoint),
                };
                Mock::given(method("GET"))
                    .and(path(format!("/api/{}", endpoint.path())))
                    .respond_with(response)
                    .mount(&server)
                    .await;
            }
            server
        });

        Self {
            server: Rc::new(server),
            runtime: Rc::new(runtime),
        }
    }

    fn gateway(&self) -> HttpOpenDataGateway {
        HttpOpenDataGateway::new(&format!("{}/api", self.server.uri()))
            .unwrap_or_else(|error| panic!("mock server URL should parse: {error}"))
    }
}

#[derive(ScenarioState, Default)]
pub(crate) struct DashboardState {
    pub(crate) endpoints: Slot<MockEndpoints>,
    pub(crate) view: Slot<DashboardView>,
    pub(crate) error: Slot<DashboardError>,
}

/// Resolves a quoted endpoint path such as `"pullrequests"`.
pub(crate) fn parse_endpoint(raw: &str) -> Endpoint {
    let cleaned = raw.trim_matches('"');
    Endpoint::ALL
        .into_iter()
        .find(|endpoint| endpoint.path() == cleaned)
        .unwrap_or_else(|| panic!("unknown endpoint {cleaned}"))
}

/// Serves every bundled collection, answering `failing` with an error status.
pub(crate) fn mount_dataset(state: &DashboardState, failing: Option<(Endpoint, u16)>) {
    state.endpoints.set(MockEndpoints::start(failing));
}

fn collection_response(dataset: &MockDataset, endpoint: Endpoint) -> ResponseTemplate {
    match endpoint {
        Endpoint::Employees => json_response(&dataset.employees),
        Endpoint::Organizations => json_response(&dataset.organizations),
        Endpoint::Projects => json_response(&dataset.projects),
        Endpoint::PullRequests => json_response(&dataset.pull_requests),
        Endpoint::Repositories => json_response(&dataset.repositories),
    }
}

fn json_response<T: Serialize>(body: &T) -> ResponseTemplate {
    ResponseTemplate::new(200).set_body_json(body)
}

/// Loads one view through the HTTP gateway and records the outcome.
pub(crate) fn run_view(state: &DashboardState, view: &str) {
    let endpoints = state
        .endpoints
        .get()
        .unwrap_or_else(|| panic!("mock endpoints not started"));
    let gateway = endpoints.gateway();
    let service = DashboardService::new(&gateway);

    let result = endpoints.runtime.block_on(async {
        match view {
            "merged-per-project" => service
                .merged_pull_requests_per_project()
                .await
                .map(DashboardView::MergedPerProject),
            "support-care" => service
                .support_and_care_pull_requests()
                .await
                .map(DashboardView::SupportCare),
            "months" => service
                .pull_requests_over_time()
                .await
                .map(DashboardView::Months),
            other => panic!("unknown view {other}"),
        }
    });

    match result {
        Ok(loaded) => state.view.set(loaded),
        Err(error) => state.error.set(error),
    }
}
