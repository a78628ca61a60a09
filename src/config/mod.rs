//! Application configuration loaded from CLI, environment, and files.
//!
//! This module provides a unified configuration struct that merges values
//! from command-line arguments, environment variables, and configuration
//! files using ortho-config's layered approach.
//!
//! # Precedence
//!
//! Configuration values are loaded with the following precedence (lowest to
//! highest):
//!
//! 1. **Defaults** – Built-in application defaults
//! 2. **Configuration file** – `.opendata-dashboard.toml` in the current
//!    directory, home directory, or XDG config directory
//! 3. **Environment variables** – `OPENDATA_API_BASE_URL`,
//!    `OPENDATA_REPORT`, ...
//! 4. **Command-line arguments** – `--api-base-url`/`-a`, `--report`/`-r`, ...
//!
//! # Configuration File
//!
//! ```toml
//! api_base_url = "http://127.0.0.1:3000/api"
//! bind_address = "127.0.0.1:3000"
//! report = "merged-per-project"
//! format = "json"
//! limit = 5
//! ```

use std::fmt;
use std::net::SocketAddr;
use std::str::FromStr;

use ortho_config::OrthoConfig;
use serde::{Deserialize, Serialize};

use crate::error::DashboardError;

/// API base URL used when none is configured.
pub const DEFAULT_API_BASE_URL: &str = "http://127.0.0.1:3000/api";

/// Listen address used by `--serve` when none is configured.
pub const DEFAULT_BIND_ADDRESS: &str = "127.0.0.1:3000";

/// Operation mode determined by configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OperationMode {
    /// Serve the mock endpoints over HTTP.
    Serve,
    /// Render one report and exit.
    Report,
}

/// Dashboard view rendered by the report mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReportKind {
    /// Headline counts, top projects, and the monthly chart.
    Dashboard,
    /// Merged pull requests per project, highest first.
    MergedPerProject,
    /// Recent pull requests in support-and-care repositories.
    SupportCare,
    /// Pull requests per creation month.
    PullRequestsOverTime,
    /// Plain employee listing.
    Employees,
    /// Plain organisation listing.
    Organizations,
    /// Plain project listing.
    Projects,
    /// Plain repository listing.
    Repositories,
    /// Plain pull request listing.
    PullRequests,
}

impl ReportKind {
    /// Every report, in navigation order.
    pub const ALL: [Self; 9] = [
        Self::Dashboard,
        Self::Organizations,
        Self::Employees,
        Self::Projects,
        Self::Repositories,
        Self::PullRequests,
        Self::MergedPerProject,
        Self::PullRequestsOverTime,
        Self::SupportCare,
    ];

    /// Name accepted on the command line.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Dashboard => "dashboard",
            Self::MergedPerProject => "merged-per-project",
            Self::SupportCare => "support-care",
            Self::PullRequestsOverTime => "prs-over-time",
            Self::Employees => "employees",
            Self::Organizations => "organizations",
            Self::Projects => "projects",
            Self::Repositories => "repositories",
            Self::PullRequests => "pullrequests",
        }
    }
}

impl fmt::Display for ReportKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ReportKind {
    type Err = DashboardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.as_str() == s)
            .ok_or_else(|| DashboardError::UnknownReport { name: s.to_owned() })
    }
}

/// Output encoding of a report.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OutputFormat {
    /// Human-readable text.
    #[default]
    Text,
    /// Pretty-printed JSON.
    Json,
}

impl FromStr for OutputFormat {
    type Err = DashboardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "text" => Ok(Self::Text),
            "json" => Ok(Self::Json),
            other => Err(DashboardError::Configuration {
                message: format!("unsupported output format '{other}' (use text or json)"),
            }),
        }
    }
}

/// Application configuration supporting CLI, environment, and file sources.
///
/// # Environment Variables
///
/// - `OPENDATA_API_BASE_URL` or `--api-base-url`: Base URL of the endpoints
/// - `OPENDATA_BIND_ADDRESS` or `--bind-address`: Listen address for `--serve`
/// - `OPENDATA_REPORT` or `--report`: Report to render
/// - `OPENDATA_FORMAT` or `--format`: `text` or `json`
/// - `OPENDATA_LIMIT` or `--limit`: Maximum rows in ranked views
///
/// # Example
///
/// ```no_run
/// use opendata_dashboard::DashboardConfig;
/// use ortho_config::OrthoConfig;
///
/// let config = DashboardConfig::load().expect("failed to load configuration");
/// let report = config.report_kind().expect("known report");
/// ```
#[derive(Debug, Clone, Default, Deserialize, Serialize, OrthoConfig)]
#[serde(default)]
#[ortho_config(
    prefix = "OPENDATA",
    discovery(
        dotfile_name = ".opendata-dashboard.toml",
        config_file_name = "opendata-dashboard.toml",
        app_name = "opendata-dashboard"
    )
)]
pub struct DashboardConfig {
    /// Base URL of the open-data endpoints.
    ///
    /// Can be provided via:
    /// - CLI: `--api-base-url <URL>` or `-a <URL>`
    /// - Environment: `OPENDATA_API_BASE_URL`
    /// - Config file: `api_base_url = "..."`
    #[ortho_config(cli_short = 'a')]
    pub api_base_url: Option<String>,

    /// Socket address the endpoints listen on when serving.
    ///
    /// Can be provided via:
    /// - CLI: `--bind-address <ADDR>` or `-b <ADDR>`
    /// - Environment: `OPENDATA_BIND_ADDRESS`
    /// - Config file: `bind_address = "..."`
    #[ortho_config(cli_short = 'b')]
    pub bind_address: Option<String>,

    /// Serves the mock endpoints instead of rendering a report.
    ///
    /// Can be provided via:
    /// - CLI: `--serve` / `-s`
    /// - Config file: `serve = true`
    #[ortho_config(cli_short = 's')]
    pub serve: bool,

    /// Reads the bundled fixtures directly instead of calling the endpoints.
    ///
    /// Can be provided via:
    /// - CLI: `--offline` / `-o`
    /// - Config file: `offline = true`
    #[ortho_config(cli_short = 'o')]
    pub offline: bool,

    /// Report to render, `dashboard` by default.
    ///
    /// Can be provided via:
    /// - CLI: `--report <NAME>` or `-r <NAME>`
    /// - Environment: `OPENDATA_REPORT`
    /// - Config file: `report = "..."`
    #[ortho_config(cli_short = 'r')]
    pub report: Option<String>,

    /// Output format, `text` by default.
    ///
    /// Can be provided via:
    /// - CLI: `--format <FORMAT>` or `-f <FORMAT>`
    /// - Environment: `OPENDATA_FORMAT`
    /// - Config file: `format = "json"`
    #[ortho_config(cli_short = 'f')]
    pub format: Option<String>,

    /// Maximum number of rows in ranked views.
    ///
    /// Can be provided via:
    /// - CLI: `--limit <N>` or `-l <N>`
    /// - Environment: `OPENDATA_LIMIT`
    /// - Config file: `limit = 5`
    #[ortho_config(cli_short = 'l')]
    pub limit: Option<usize>,
}

impl DashboardConfig {
    /// Returns the configured API base URL or the default.
    #[must_use]
    pub fn api_base_url(&self) -> &str {
        self.api_base_url.as_deref().unwrap_or(DEFAULT_API_BASE_URL)
    }

    /// Parses the listen address.
    ///
    /// # Errors
    ///
    /// Returns [`DashboardError::Configuration`] when the address is not a
    /// valid `host:port` socket address.
    pub fn bind_address(&self) -> Result<SocketAddr, DashboardError> {
        let raw = self.bind_address.as_deref().unwrap_or(DEFAULT_BIND_ADDRESS);
        raw.parse()
            .map_err(|error| DashboardError::Configuration {
                message: format!("bind address '{raw}' is invalid: {error}"),
            })
    }

    /// Parses the requested report, defaulting to the dashboard overview.
    ///
    /// # Errors
    ///
    /// Returns [`DashboardError::UnknownReport`] for unrecognised names.
    pub fn report_kind(&self) -> Result<ReportKind, DashboardError> {
        self.report
            .as_deref()
            .map_or(Ok(ReportKind::Dashboard), str::parse)
    }

    /// Parses the requested output format, defaulting to text.
    ///
    /// # Errors
    ///
    /// Returns [`DashboardError::Configuration`] for unsupported formats.
    pub fn output_format(&self) -> Result<OutputFormat, DashboardError> {
        self.format
            .as_deref()
            .map_or(Ok(OutputFormat::default()), str::parse)
    }

    /// Determines the operation mode based on provided configuration.
    #[must_use]
    pub const fn operation_mode(&self) -> OperationMode {
        if self.serve {
            OperationMode::Serve
        } else {
            OperationMode::Report
        }
    }

    /// Checks that the configured values are mutually consistent.
    ///
    /// # Errors
    ///
    /// Returns [`DashboardError::Configuration`] when `serve` is combined with
    /// report options, or when `limit` is zero.
    pub fn validate(&self) -> Result<(), DashboardError> {
        if self.serve && (self.report.is_some() || self.offline) {
            return Err(DashboardError::Configuration {
                message: "--serve cannot be combined with --report or --offline".to_owned(),
            });
        }
        if self.limit == Some(0) {
            return Err(DashboardError::Configuration {
                message: "limit must be at least 1".to_owned(),
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests;
