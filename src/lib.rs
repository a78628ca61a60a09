//! Open-data dashboard library crate.
//!
//! The library loads employees, organisations, projects, repositories, and
//! pull requests from a set of read-only JSON endpoints, then derives the
//! dashboard views: merged pull requests per project, recent support-and-care
//! work, and pull requests per creation month. The bundled mock collections
//! can be served over HTTP with [`server`].

pub mod aggregate;
pub mod client;
pub mod config;
pub mod error;
pub mod fixtures;
pub mod matching;
pub mod model;
pub mod server;
pub mod telemetry;
pub mod timeline;

pub use aggregate::{
    DEFAULT_TOP_PROJECTS, DashboardOverview, DashboardStats, MergedPullRequestsPerProject,
    SupportCarePolicy, SupportCarePullRequest, merged_counts_by_project, rank_by_merged_count,
    support_and_care_prs,
};
pub use client::{
    DashboardService, Endpoint, HttpOpenDataGateway, OpenDataGateway, StaticOpenDataGateway,
};
pub use config::{DashboardConfig, OperationMode, OutputFormat, ReportKind};
pub use error::DashboardError;
pub use fixtures::MockDataset;
pub use matching::{RepositoryCoordinates, RepositoryPattern, matches};
pub use model::{
    Employee, Organization, Project, PullRequest, PullRequestState, Record, RecordViolation,
    Repository,
};
pub use timeline::{MonthBucket, group_by_month};
