//! Error types for the Kuksa event API client
//!
//! This module defines the error hierarchy for the whole crate.
//! All public APIs return `Result<T, Error>` where Error is defined here.
//!
//! Nothing here is retried or recovered internally: a fetch is
//! all-or-nothing, and every failure is surfaced as a distinguishable
//! variant so the caller can decide policy.

use crate::schema::ValidationError;
use thiserror::Error;

/// The main error type for the Kuksa event API client
#[derive(Error, Debug)]
pub enum Error {
    // ============================================================================
    // Configuration Errors (fail at construction, before any network activity)
    // ============================================================================
    #[error("Configuration error: {message}")]
    Config { message: String },

    #[error("Missing required config field: {field}")]
    MissingConfigField { field: String },

    #[error("Invalid endpoint URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    // ============================================================================
    // Request Errors
    // ============================================================================
    /// Network-level failure (DNS, connection refused, timeout),
    /// propagated unchanged from the transport.
    #[error("Transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// A response arrived but its status indicates failure.
    #[error("Request for '{resource}' failed with HTTP {status}")]
    RequestFailed { resource: String, status: u16 },

    /// The response body is not valid JSON.
    #[error("Malformed response for '{resource}': {message}")]
    MalformedResponse { resource: String, message: String },

    // ============================================================================
    // Validation Errors
    // ============================================================================
    /// The response body decoded but does not conform to the resource schema.
    #[error(transparent)]
    Validation(#[from] ValidationError),
}

impl Error {
    /// Create a config error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// Create a missing field error
    pub fn missing_field(field: impl Into<String>) -> Self {
        Self::MissingConfigField {
            field: field.into(),
        }
    }

    /// Create a request-failed error
    pub fn request_failed(resource: impl Into<String>, status: u16) -> Self {
        Self::RequestFailed {
            resource: resource.into(),
            status,
        }
    }

    /// Create a malformed-response error
    pub fn malformed(resource: impl Into<String>, message: impl ToString) -> Self {
        Self::MalformedResponse {
            resource: resource.into(),
            message: message.to_string(),
        }
    }

    /// Check whether this error was raised before any network activity
    pub fn is_configuration(&self) -> bool {
        matches!(
            self,
            Error::Config { .. } | Error::MissingConfigField { .. } | Error::InvalidUrl(_)
        )
    }
}

/// Result type alias for the Kuksa event API client
pub type Result<T> = std::result::Result<T, Error>;
