//! Error types for Kino Core

use thiserror::Error;

/// Result type alias for environment operations
pub type Result<T> = std::result::Result<T, Error>;

/// Environment error types
///
/// Capability detection itself never fails. These errors surface from the
/// fallible edges: host probes, publisher configuration, and endpoint
/// resolution.
#[derive(Error, Debug)]
pub enum Error {
    // Probe errors
    #[error("Probe '{capability}' failed: {reason}")]
    ProbeFailed {
        capability: &'static str,
        reason: String,
    },

    #[error("Probe '{capability}' is not available on this host")]
    ProbeUnavailable { capability: &'static str },

    // Configuration errors
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("Invalid {name} endpoint: {value}")]
    InvalidEndpoint {
        name: &'static str,
        value: String,
        #[source]
        source: url::ParseError,
    },
}

impl Error {
    /// Create a probe failure
    pub fn probe(capability: &'static str, reason: impl Into<String>) -> Self {
        Error::ProbeFailed {
            capability,
            reason: reason.into(),
        }
    }

    /// Returns true if a retry could produce a different result
    pub fn is_recoverable(&self) -> bool {
        matches!(self, Error::ProbeFailed { .. })
    }

    /// Returns the error code for analytics
    pub fn error_code(&self) -> &'static str {
        match self {
            Error::ProbeFailed { .. } => "PROBE_FAILED",
            Error::ProbeUnavailable { .. } => "PROBE_UNAVAILABLE",
            Error::InvalidConfig(_) => "INVALID_CONFIG",
            Error::InvalidEndpoint { .. } => "INVALID_ENDPOINT",
        }
    }
}
