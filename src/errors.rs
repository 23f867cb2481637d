//! # Error Handling
//!
//! Parsing a query string never fails: malformed percent-encoding, non-numeric
//! page numbers and missing fields all degrade to defaults. The errors in this
//! module cover the few places where a caller made a mistake:
//!
//! - Looking up a field that is not present without supplying a default
//! - Configuring a separator with a regular expression that does not compile
//! - Extracting [`ParsedQuery`](crate::middleware::ParsedQuery) in a handler
//!   that is not wrapped by the query middleware
//!
//! ## Usage
//!
//! ```rust,ignore
//! use querycrate::{FlatStrategy, ParseStrategy, QueryError};
//!
//! fn page_title(query: &str) -> Result<String, QueryError> {
//!     let results = FlatStrategy::default().parse(query);
//!     Ok(results.fetch("title")?.to_string())
//! }
//! ```
//!
//! ## Logging
//!
//! When an error is turned into an HTTP response the details are logged with
//! `tracing` and only a sanitized message is sent to the client.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use std::fmt;

/// Errors surfaced by result lookups, separator configuration and the
/// request extractor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QueryError {
    /// A field was fetched without a default and is not present
    KeyNotFound {
        /// The field name that was requested
        key: String,
    },

    /// A separator pattern failed to compile
    InvalidPattern {
        /// The pattern as configured
        pattern: String,
        /// Compiler message from the regex engine
        message: String,
    },

    /// `ParsedQuery` was extracted but the query middleware never ran
    MissingExtension,
}

impl QueryError {
    /// Create a key-not-found error
    ///
    /// # Example
    /// ```rust,ignore
    /// return Err(QueryError::key_not_found("page"));
    /// ```
    pub fn key_not_found(key: impl Into<String>) -> Self {
        Self::KeyNotFound { key: key.into() }
    }

    /// Create an invalid-pattern error from a regex compile failure
    pub fn invalid_pattern(pattern: impl Into<String>, err: &regex::Error) -> Self {
        Self::InvalidPattern {
            pattern: pattern.into(),
            message: err.to_string(),
        }
    }

    /// Get the HTTP status code for this error
    fn status_code(&self) -> StatusCode {
        match self {
            Self::KeyNotFound { .. } | Self::InvalidPattern { .. } | Self::MissingExtension => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    /// Get the user-facing error message
    fn user_message(&self) -> String {
        match self {
            Self::KeyNotFound { key } => format!("key not found: \"{key}\""),
            Self::InvalidPattern { pattern, message } => {
                format!("invalid separator pattern \"{pattern}\": {message}")
            }
            Self::MissingExtension => {
                "query parameters were not parsed for this request".to_string()
            }
        }
    }

    /// Log error details (not sent to user)
    fn log_internal(&self) {
        match self {
            Self::MissingExtension => {
                tracing::error!(
                    "ParsedQuery extracted without the query middleware installed"
                );
            }
            Self::InvalidPattern { pattern, message } => {
                tracing::error!(
                    pattern = %pattern,
                    details = %message,
                    "Invalid separator pattern"
                );
            }
            Self::KeyNotFound { .. } => {
                tracing::debug!(
                    error = %self.user_message(),
                    status = %self.status_code(),
                    "Query error"
                );
            }
        }
    }
}

/// Error response sent to users
#[derive(Serialize)]
struct ErrorResponse {
    error: String,
}

impl IntoResponse for QueryError {
    fn into_response(self) -> Response {
        self.log_internal();

        let status = self.status_code();
        let body = match &self {
            // Configuration details stay in the logs
            Self::InvalidPattern { .. } | Self::MissingExtension => ErrorResponse {
                error: "An internal error occurred".to_string(),
            },
            Self::KeyNotFound { .. } => ErrorResponse {
                error: self.user_message(),
            },
        };

        (status, Json(body)).into_response()
    }
}

impl fmt::Display for QueryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.user_message())
    }
}

impl std::error::Error for QueryError {}
