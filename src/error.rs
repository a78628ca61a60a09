//! Error types exposed by the dashboard library.

use thiserror::Error;

use crate::client::Endpoint;

/// Errors surfaced while loading, validating, or presenting open data.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum DashboardError {
    /// The endpoint answered with a non-success status.
    #[error("GET {endpoint} failed with status {status}")]
    Http {
        /// Endpoint that was requested.
        endpoint: Endpoint,
        /// HTTP status code returned by the server.
        status: u16,
    },

    /// The request never produced a response.
    #[error("network error calling {endpoint}: {message}")]
    Network {
        /// Endpoint that was requested.
        endpoint: Endpoint,
        /// Transport-level error detail.
        message: String,
    },

    /// The response body was not the expected JSON collection.
    #[error("could not decode {endpoint} response: {message}")]
    Decode {
        /// Endpoint whose payload failed to decode.
        endpoint: Endpoint,
        /// Deserialisation error detail.
        message: String,
    },

    /// A record decoded but failed validation.
    #[error("invalid record in {endpoint}: {message}")]
    InvalidRecord {
        /// Endpoint that served the record.
        endpoint: Endpoint,
        /// Description of the offending field.
        message: String,
    },

    /// The configured API base URL could not be parsed.
    #[error("API base URL is invalid: {0}")]
    InvalidUrl(String),

    /// Configuration could not be loaded or is inconsistent.
    #[error("configuration error: {message}")]
    Configuration {
        /// Details about the configuration failure.
        message: String,
    },

    /// The requested report name is not known.
    #[error("unknown report '{name}'")]
    UnknownReport {
        /// Name supplied by the user.
        name: String,
    },

    /// Local I/O operation failed.
    #[error("I/O error: {message}")]
    Io {
        /// Error detail from the underlying I/O operation.
        message: String,
    },

    /// The HTTP server could not start or stopped unexpectedly.
    #[error("server error: {message}")]
    Server {
        /// Error detail reported by the listener or router.
        message: String,
    },
}

impl DashboardError {
    /// Returns the endpoint involved in a fetch failure, if any.
    #[must_use]
    pub const fn endpoint(&self) -> Option<Endpoint> {
        match self {
            Self::Http { endpoint, .. }
            | Self::Network { endpoint, .. }
            | Self::Decode { endpoint, .. }
            | Self::InvalidRecord { endpoint, .. } => Some(*endpoint),
            Self::InvalidUrl(_)
            | Self::Configuration { .. }
            | Self::UnknownReport { .. }
            | Self::Io { .. }
            | Self::Server { .. } => None,
        }
    }
}
