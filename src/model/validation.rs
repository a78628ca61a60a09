//! Field-level checks applied to decoded records.

use std::fmt;

use super::{Employee, Organization, Project, PullRequest, Repository};

/// Describes why a record was rejected.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordViolation {
    uuid: String,
    field: &'static str,
}

impl RecordViolation {
    const fn new(uuid: String, field: &'static str) -> Self {
        Self { uuid, field }
    }

    /// Identifier of the offending record (may be empty).
    #[must_use]
    pub fn uuid(&self) -> &str {
        &self.uuid
    }

    /// Name of the offending field.
    #[must_use]
    pub const fn field(&self) -> &'static str {
        self.field
    }
}

impl fmt::Display for RecordViolation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.uuid.is_empty() {
            write!(f, "record without uuid has an empty `{}`", self.field)
        } else {
            write!(f, "record {} has an empty `{}`", self.uuid, self.field)
        }
    }
}

/// A record served by one of the open-data endpoints.
pub trait Record {
    /// Stable identifier of the record.
    fn uuid(&self) -> &str;

    /// Required text fields as `(name, value)` pairs beyond the uuid.
    fn required_fields(&self) -> Vec<(&'static str, &str)> {
        Vec::new()
    }

    /// Checks that the uuid and every required field are non-empty.
    ///
    /// # Errors
    ///
    /// Returns the first [`RecordViolation`] found.
    fn validate(&self) -> Result<(), RecordViolation> {
        if self.uuid().is_empty() {
            return Err(RecordViolation::new(String::new(), "uuid"));
        }

        match self
            .required_fields()
            .into_iter()
            .find(|(_, value)| value.is_empty())
        {
            Some((field, _)) => Err(RecordViolation::new(self.uuid().to_owned(), field)),
            None => Ok(()),
        }
    }
}

impl Record for Employee {
    fn uuid(&self) -> &str {
        &self.uuid
    }
}

impl Record for Organization {
    fn uuid(&self) -> &str {
        &self.uuid
    }
}

impl Record for Project {
    fn uuid(&self) -> &str {
        &self.uuid
    }
}

impl Record for Repository {
    fn uuid(&self) -> &str {
        &self.uuid
    }

    fn required_fields(&self) -> Vec<(&'static str, &str)> {
        vec![("org", &self.org), ("repository", &self.repository)]
    }
}

impl Record for PullRequest {
    fn uuid(&self) -> &str {
        &self.uuid
    }

    fn required_fields(&self) -> Vec<(&'static str, &str)> {
        vec![("org", &self.org), ("repository", &self.repository)]
    }
}
