//! Names of the open-data collections.

use std::fmt;

/// One of the collections served under the API base path.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Endpoint {
    /// `GET /api/employees`.
    Employees,
    /// `GET /api/organizations`.
    Organizations,
    /// `GET /api/projects`.
    Projects,
    /// `GET /api/pullrequests`.
    PullRequests,
    /// `GET /api/repositories`.
    Repositories,
}

impl Endpoint {
    /// Every endpoint, in navigation order.
    pub const ALL: [Self; 5] = [
        Self::Organizations,
        Self::Employees,
        Self::Projects,
        Self::Repositories,
        Self::PullRequests,
    ];

    /// Path segment below the API base.
    #[must_use]
    pub const fn path(self) -> &'static str {
        match self {
            Self::Employees => "employees",
            Self::Organizations => "organizations",
            Self::Projects => "projects",
            Self::PullRequests => "pullrequests",
            Self::Repositories => "repositories",
        }
    }
}

impl fmt::Display for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.path())
    }
}
