//! Output formatting utilities for CLI reports.
//!
//! Every writer takes the target as a generic [`Write`] so reports can be
//! rendered into a buffer under test. JSON output is pretty-printed and uses
//! the same field names as the endpoints.

use std::io::{self, Write};

use opendata_dashboard::{
    DashboardError, DashboardOverview, Employee, MergedPullRequestsPerProject, MonthBucket,
    Organization, OutputFormat, Project, PullRequest, Repository, SupportCarePullRequest,
};
use serde::Serialize;

/// Writes `value` as JSON or runs `text` to render it for humans.
fn emit<W, T, F>(
    writer: &mut W,
    format: OutputFormat,
    value: &T,
    text: F,
) -> Result<(), DashboardError>
where
    W: Write,
    T: Serialize + ?Sized,
    F: FnOnce(&mut W) -> io::Result<()>,
{
    match format {
        OutputFormat::Json => {
            serde_json::to_writer_pretty(&mut *writer, value).map_err(|error| {
                DashboardError::Io {
                    message: error.to_string(),
                }
            })?;
            writeln!(writer).map_err(|e| io_error(&e))
        }
        OutputFormat::Text => text(writer).map_err(|e| io_error(&e)),
    }
}

/// Writes the landing-page overview.
pub fn write_overview<W: Write>(
    writer: &mut W,
    overview: &DashboardOverview,
    format: OutputFormat,
) -> Result<(), DashboardError> {
    emit(writer, format, overview, |out| {
        let stats = &overview.stats;
        writeln!(out, "Employees: {}", stats.employees)?;
        writeln!(out, "Projects: {}", stats.projects)?;
        writeln!(out, "Repositories: {}", stats.repositories)?;
        writeln!(
            out,
            "Pull requests: {} ({} merged)",
            stats.pull_requests, stats.merged_pull_requests
        )?;
        writeln!(out)?;
        writeln!(out, "Top projects by merged pull requests:")?;
        merged_rows(out, &overview.top_projects, overview.max_merged_count)?;
        writeln!(out)?;
        writeln!(out, "Pull requests per month:")?;
        month_rows(out, &overview.months)
    })
}

/// Writes merged pull request counts, scaled against the highest count.
pub fn write_merged_per_project<W: Write>(
    writer: &mut W,
    rows: &[MergedPullRequestsPerProject],
    max: usize,
    format: OutputFormat,
) -> Result<(), DashboardError> {
    emit(writer, format, rows, |out| {
        writeln!(out, "Merged pull requests per project:")?;
        merged_rows(out, rows, max)
    })
}

fn merged_rows<W: Write>(
    out: &mut W,
    rows: &[MergedPullRequestsPerProject],
    max: usize,
) -> io::Result<()> {
    if rows.is_empty() {
        return writeln!(out, "  (no projects)");
    }
    for row in rows {
        writeln!(
            out,
            "  {}: {} ({}%)",
            row.name,
            row.merged_count,
            row.percent_of(max)
        )?;
    }
    Ok(())
}

/// Writes the support-and-care table.
pub fn write_support_care<W: Write>(
    writer: &mut W,
    rows: &[SupportCarePullRequest],
    format: OutputFormat,
) -> Result<(), DashboardError> {
    emit(writer, format, rows, |out| {
        writeln!(out, "Support & care pull requests:")?;
        if rows.is_empty() {
            return writeln!(out, "  (none updated recently)");
        }
        for row in rows {
            writeln!(
                out,
                "  [{}] {} (updated {}) {}",
                row.state,
                row.title,
                row.last_updated_at.format("%Y-%m-%d"),
                row.link
            )?;
        }
        Ok(())
    })
}

/// Writes pull request counts per creation month.
pub fn write_months<W: Write>(
    writer: &mut W,
    buckets: &[MonthBucket],
    format: OutputFormat,
) -> Result<(), DashboardError> {
    emit(writer, format, buckets, |out| {
        writeln!(out, "Pull requests per month:")?;
        month_rows(out, buckets)
    })
}

fn month_rows<W: Write>(out: &mut W, buckets: &[MonthBucket]) -> io::Result<()> {
    if buckets.is_empty() {
        return writeln!(out, "  (no pull requests)");
    }
    for bucket in buckets {
        writeln!(
            out,
            "  {} {}: {}",
            bucket.axis_label(),
            bucket.tooltip_label(),
            bucket.count
        )?;
    }
    Ok(())
}

/// Writes the employee listing.
pub fn write_employees<W: Write>(
    writer: &mut W,
    employees: &[Employee],
    format: OutputFormat,
) -> Result<(), DashboardError> {
    emit(writer, format, employees, |out| {
        writeln!(out, "Employees:")?;
        for employee in employees {
            writeln!(
                out,
                "  {} ({}) @{}",
                employee.full_name(),
                employee.role,
                employee.github_username
            )?;
        }
        Ok(())
    })
}

/// Writes the organisation listing.
pub fn write_organizations<W: Write>(
    writer: &mut W,
    organizations: &[Organization],
    format: OutputFormat,
) -> Result<(), DashboardError> {
    emit(writer, format, organizations, |out| {
        writeln!(out, "Organizations:")?;
        for organization in organizations {
            writeln!(
                out,
                "  {} ({}), {} {}, {} {}",
                organization.name,
                organization.legal_name,
                organization.postal_code,
                organization.city,
                organization.country,
                organization.url
            )?;
        }
        Ok(())
    })
}

/// Writes the project listing with each project's repository patterns.
pub fn write_projects<W: Write>(
    writer: &mut W,
    projects: &[Project],
    format: OutputFormat,
) -> Result<(), DashboardError> {
    emit(writer, format, projects, |out| {
        writeln!(out, "Projects:")?;
        for project in projects {
            let patterns: Vec<String> = project
                .patterns()
                .iter()
                .map(ToString::to_string)
                .collect();
            let covered = if patterns.is_empty() {
                "(no repositories)".to_owned()
            } else {
                patterns.join(", ")
            };
            writeln!(out, "  {}: {covered}", project.name)?;
        }
        Ok(())
    })
}

/// Writes the repository listing.
pub fn write_repositories<W: Write>(
    writer: &mut W,
    repositories: &[Repository],
    format: OutputFormat,
) -> Result<(), DashboardError> {
    emit(writer, format, repositories, |out| {
        writeln!(out, "Repositories:")?;
        for repository in repositories {
            writeln!(
                out,
                "  {}/{} {}",
                repository.org,
                repository.repository,
                repository.html_url()
            )?;
        }
        Ok(())
    })
}

/// Writes the pull request listing.
pub fn write_pull_requests<W: Write>(
    writer: &mut W,
    prs: &[PullRequest],
    format: OutputFormat,
) -> Result<(), DashboardError> {
    emit(writer, format, prs, |out| {
        writeln!(out, "Pull requests:")?;
        for pr in prs {
            let draft = if pr.draft { " (draft)" } else { "" };
            writeln!(
                out,
                "  {}/{}#{} [{}]{draft} {} (@{})",
                pr.org,
                pr.repository,
                pr.github_id,
                pr.state(),
                pr.title,
                pr.author
            )?;
        }
        Ok(())
    })
}

/// Converts an I/O error to a [`DashboardError::Io`].
pub(crate) fn io_error(error: &io::Error) -> DashboardError {
    DashboardError::Io {
        message: error.to_string(),
    }
}
