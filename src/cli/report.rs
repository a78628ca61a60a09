//! Report rendering operation.

use std::io::{self, Write};

use opendata_dashboard::aggregate::max_merged_count;
use opendata_dashboard::{
    DEFAULT_TOP_PROJECTS, DashboardConfig, DashboardError, DashboardService, HttpOpenDataGateway,
    OpenDataGateway, ReportKind, StaticOpenDataGateway, rank_by_merged_count,
};

use super::output::{
    io_error, write_employees, write_merged_per_project, write_months, write_organizations,
    write_overview, write_projects, write_pull_requests, write_repositories, write_support_care,
};

/// Renders the configured report to stdout.
///
/// Data comes from the bundled fixtures when `offline` is set and from the
/// configured API base URL otherwise.
///
/// # Errors
///
/// Returns [`DashboardError::Configuration`] or [`DashboardError::UnknownReport`]
/// for invalid options, and propagates fetch and write failures.
pub async fn run(config: &DashboardConfig) -> Result<(), DashboardError> {
    let rendered = if config.offline {
        render(config, &StaticOpenDataGateway::bundled()?).await?
    } else {
        render(config, &HttpOpenDataGateway::new(config.api_base_url())?).await?
    };

    io::stdout()
        .lock()
        .write_all(&rendered)
        .map_err(|e| io_error(&e))
}

/// Renders the configured report into memory.
///
/// Nothing is returned unless every fetch succeeded, so a failed report
/// never leaves partial output behind.
///
/// # Errors
///
/// Same as [`run_with_gateway`].
pub async fn render<G>(config: &DashboardConfig, gateway: &G) -> Result<Vec<u8>, DashboardError>
where
    G: OpenDataGateway,
{
    let mut buffer = Vec::new();
    run_with_gateway(config, gateway, &mut buffer).await?;
    Ok(buffer)
}

/// Renders the configured report using a custom gateway.
///
/// This function is exposed for testing with in-memory gateways.
pub async fn run_with_gateway<G, W>(
    config: &DashboardConfig,
    gateway: &G,
    writer: &mut W,
) -> Result<(), DashboardError>
where
    G: OpenDataGateway,
    W: Write,
{
    let kind = config.report_kind()?;
    let format = config.output_format()?;
    let service = DashboardService::new(gateway);
    tracing::debug!(report = %kind, "rendering report");

    match kind {
        ReportKind::Dashboard => {
            let top = config.limit.unwrap_or(DEFAULT_TOP_PROJECTS);
            write_overview(writer, &service.overview(top).await?, format)
        }
        ReportKind::MergedPerProject => {
            let rows = service.merged_pull_requests_per_project().await?;
            let max = max_merged_count(&rows);
            let ranked = rank_by_merged_count(rows, config.limit);
            write_merged_per_project(writer, &ranked, max, format)
        }
        ReportKind::SupportCare => {
            let rows = service.support_and_care_pull_requests().await?;
            write_support_care(writer, &rows, format)
        }
        ReportKind::PullRequestsOverTime => {
            write_months(writer, &service.pull_requests_over_time().await?, format)
        }
        ReportKind::Employees => write_employees(writer, &gateway.employees().await?, format),
        ReportKind::Organizations => {
            write_organizations(writer, &gateway.organizations().await?, format)
        }
        ReportKind::Projects => write_projects(writer, &gateway.projects().await?, format),
        ReportKind::Repositories => {
            write_repositories(writer, &gateway.repositories().await?, format)
        }
        ReportKind::PullRequests => {
            write_pull_requests(writer, &gateway.pull_requests().await?, format)
        }
    }
}
