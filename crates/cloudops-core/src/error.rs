//! Unified error handling for cloudops-core
//!
//! Operations never classify failures: whatever the client library reports
//! comes back as [`CoreError::Remote`]. The helper predicates exist for the presentation
//! layer, which uses them to pick suggestions.
//!
//! # Example
//!
//! ```rust
//! use cloudops_core::{CoreError, RemoteError};
//!
//! let err: CoreError = RemoteError::new("GetParameterVersion", "Parameter version not found")
//!     .with_status(404)
//!     .with_reason("NOT_FOUND")
//!     .into();
//! assert!(err.is_not_found());
//! assert!(err.is_remote());
//! ```

use std::fmt;
use thiserror::Error;

/// Core error type
#[derive(Error, Debug)]
pub enum CoreError {
    /// The single remote call failed (auth, not-found, invalid mask, network...)
    #[error("Remote call failed: {0}")]
    Remote(#[from] RemoteError),

    /// A client could not be constructed from the supplied settings
    #[error("Configuration error: {0}")]
    Config(String),

    /// An argument that cannot be turned into a request at all
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
}

/// Result type alias for core operations
pub type Result<T> = std::result::Result<T, CoreError>;

/// Opaque description of a failed remote call
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RemoteError {
    /// RPC-style name of the call that failed, e.g. `UpdateParameterVersion`
    pub operation: String,
    /// HTTP status, absent when the request never got a response
    pub status: Option<u16>,
    /// Canonical status string from the error envelope, e.g. `NOT_FOUND`
    pub reason: Option<String>,
    /// Human-readable message
    pub message: String,
}

impl RemoteError {
    pub fn new(operation: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            operation: operation.into(),
            status: None,
            reason: None,
            message: message.into(),
        }
    }

    #[must_use]
    pub fn with_status(mut self, status: u16) -> Self {
        self.status = Some(status);
        self
    }

    #[must_use]
    pub fn with_reason(mut self, reason: impl Into<String>) -> Self {
        self.reason = Some(reason.into());
        self
    }

    /// Flatten a client library error into its status and message
    pub fn from_sdk(operation: impl Into<String>, err: google_cloud_gax::error::Error) -> Self {
        let message = match err.status() {
            Some(status) if !status.message.is_empty() => status.message.clone(),
            _ => err.to_string(),
        };
        let mut remote = RemoteError::new(operation, message);
        if let Some(code) = err.http_status_code() {
            remote = remote.with_status(code);
        }
        if let Some(status) = err.status() {
            remote = remote.with_reason(status.code.name());
        } else if err.is_authentication() {
            remote = remote.with_reason("UNAUTHENTICATED");
        }
        remote
    }
}

impl fmt::Display for RemoteError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.operation)?;
        match (self.status, &self.reason) {
            (Some(status), Some(reason)) => write!(f, " ({} {})", status, reason)?,
            (Some(status), None) => write!(f, " ({})", status)?,
            (None, Some(reason)) => write!(f, " ({})", reason)?,
            (None, None) => {}
        }
        write!(f, ": {}", self.message)
    }
}

impl std::error::Error for RemoteError {}

impl CoreError {
    /// Returns true if the failure came from a remote call
    #[must_use]
    pub fn is_remote(&self) -> bool {
        matches!(self, CoreError::Remote(_))
    }

    /// Returns true if this is a "not found" error (404 or `NOT_FOUND`)
    #[must_use]
    pub fn is_not_found(&self) -> bool {
        match self {
            CoreError::Remote(e) => {
                e.status == Some(404) || e.reason.as_deref() == Some("NOT_FOUND")
            }
            _ => false,
        }
    }

    /// Returns true if this is an authentication/authorization error
    #[must_use]
    pub fn is_unauthorized(&self) -> bool {
        match self {
            CoreError::Remote(e) => {
                matches!(e.status, Some(401) | Some(403))
                    || matches!(
                        e.reason.as_deref(),
                        Some("UNAUTHENTICATED") | Some("PERMISSION_DENIED")
                    )
            }
            _ => false,
        }
    }

    /// Returns true if the request itself was rejected, e.g. an unknown mask path
    #[must_use]
    pub fn is_bad_request(&self) -> bool {
        match self {
            CoreError::Remote(e) => {
                e.status == Some(400) || e.reason.as_deref() == Some("INVALID_ARGUMENT")
            }
            CoreError::InvalidArgument(_) => true,
            _ => false,
        }
    }
}
