//! Monthly pull request buckets for the time-series chart.
//!
//! Months are derived from `createdAtInGitHub` in UTC. Only months that
//! contain at least one pull request appear; gaps are not filled.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::model::PullRequest;

const GERMAN_MONTH_ABBREVIATIONS: [&str; 12] = [
    "Jan", "Feb", "Mär", "Apr", "Mai", "Jun", "Jul", "Aug", "Sep", "Okt", "Nov", "Dez",
];

/// Number of pull requests created in one calendar month.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MonthBucket {
    /// Zero-padded `YYYY-MM` key.
    pub month: String,
    /// Pull requests created during the month.
    pub count: usize,
}

impl MonthBucket {
    fn parts(&self) -> Option<(&str, &str)> {
        self.month.split_once('-')
    }

    /// Year component of the key.
    #[must_use]
    pub fn year(&self) -> Option<&str> {
        self.parts().map(|(year, _)| year)
    }

    /// Compact axis label, `MM/YY`.
    #[must_use]
    pub fn axis_label(&self) -> String {
        match self.parts() {
            Some((year, month)) => {
                let short_year = year.get(year.len().saturating_sub(2)..).unwrap_or(year);
                format!("{month}/{short_year}")
            }
            None => self.month.clone(),
        }
    }

    /// Tooltip label with the German month abbreviation, e.g. `Mär 2025`.
    #[must_use]
    pub fn tooltip_label(&self) -> String {
        let name = self
            .parts()
            .and_then(|(year, month)| {
                let index = month.parse::<usize>().ok()?.checked_sub(1)?;
                GERMAN_MONTH_ABBREVIATIONS
                    .get(index)
                    .map(|name| format!("{name} {year}"))
            });
        name.unwrap_or_else(|| self.month.clone())
    }
}

/// Groups pull requests by creation month, ascending.
#[must_use]
pub fn group_by_month(prs: &[PullRequest]) -> Vec<MonthBucket> {
    let mut counts: BTreeMap<String, usize> = BTreeMap::new();
    for pr in prs {
        *counts
            .entry(pr.created_at.format("%Y-%m").to_string())
            .or_insert(0) += 1;
    }

    counts
        .into_iter()
        .map(|(month, count)| MonthBucket { month, count })
        .collect()
}

/// Keys of the first bucket of each year, used as chart ticks.
#[must_use]
pub fn year_ticks(buckets: &[MonthBucket]) -> Vec<String> {
    let mut last_year: Option<&str> = None;
    let mut ticks = Vec::new();
    for bucket in buckets {
        let year = bucket.year();
        if year != last_year {
            ticks.push(bucket.month.clone());
            last_year = year;
        }
    }
    ticks
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::{MonthBucket, group_by_month, year_ticks};
    use crate::model::test_support::pull_request_created_at;

    fn bucket(month: &str, count: usize) -> MonthBucket {
        MonthBucket {
            month: month.to_owned(),
            count,
        }
    }

    #[rstest]
    fn groups_without_filling_gaps() {
        let prs = vec![
            pull_request_created_at("a", "2024-01-05T10:00:00Z"),
            pull_request_created_at("b", "2024-01-20T10:00:00Z"),
            pull_request_created_at("c", "2024-03-01T10:00:00Z"),
        ];

        assert_eq!(
            group_by_month(&prs),
            vec![bucket("2024-01", 2), bucket("2024-03", 1)]
        );
    }

    #[rstest]
    fn output_is_sorted_regardless_of_input_order() {
        let prs = vec![
            pull_request_created_at("a", "2025-02-15T14:30:00Z"),
            pull_request_created_at("b", "2023-11-01T00:00:00Z"),
            pull_request_created_at("c", "2025-01-10T08:15:00Z"),
        ];

        let months: Vec<String> = group_by_month(&prs).into_iter().map(|b| b.month).collect();

        assert_eq!(months, vec!["2023-11", "2025-01", "2025-02"]);
    }

    #[rstest]
    fn months_are_taken_in_utc() {
        let prs = vec![pull_request_created_at("a", "2024-02-01T00:30:00+02:00")];

        assert_eq!(group_by_month(&prs), vec![bucket("2024-01", 1)]);
    }

    #[rstest]
    fn empty_input_yields_no_buckets() {
        assert!(group_by_month(&[]).is_empty());
    }

    #[rstest]
    fn grouping_is_idempotent() {
        let prs = vec![
            pull_request_created_at("a", "2024-01-05T10:00:00Z"),
            pull_request_created_at("b", "2024-06-05T10:00:00Z"),
        ];

        assert_eq!(group_by_month(&prs), group_by_month(&prs));
    }

    #[rstest]
    fn year_ticks_pick_first_month_of_each_year() {
        let buckets = vec![
            bucket("2023-11", 1),
            bucket("2023-12", 2),
            bucket("2024-03", 1),
            bucket("2024-04", 1),
            bucket("2025-01", 4),
        ];

        assert_eq!(year_ticks(&buckets), vec!["2023-11", "2024-03", "2025-01"]);
    }

    #[rstest]
    #[case("2024-09", "09/24", "Sep 2024")]
    #[case("2025-03", "03/25", "Mär 2025")]
    #[case("2025-12", "12/25", "Dez 2025")]
    fn labels(#[case] month: &str, #[case] axis: &str, #[case] tooltip: &str) {
        let value = bucket(month, 1);

        assert_eq!(value.axis_label(), axis);
        assert_eq!(value.tooltip_label(), tooltip);
    }
}
