//! Settings shared by the service clients
//!
//! Authentication, retries and the wire protocol belong to the Google Cloud
//! client libraries. This module only decides which endpoint a client talks
//! to and which credentials it presents.

use crate::error::{CoreError, Result};
use google_cloud_auth::credentials::{Credentials, anonymous, service_account};
use std::fmt;

/// Remote services cloudops talks to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Service {
    ParameterManager,
    ServiceDirectory,
    Storage,
}

impl Service {
    pub const ALL: [Service; 3] = [
        Service::ParameterManager,
        Service::ServiceDirectory,
        Service::Storage,
    ];

    /// Environment variable that overrides the endpoint
    pub fn endpoint_env_var(&self) -> &'static str {
        match self {
            Service::ParameterManager => "CLOUDOPS_PARAMETER_MANAGER_ENDPOINT",
            Service::ServiceDirectory => "CLOUDOPS_SERVICE_DIRECTORY_ENDPOINT",
            Service::Storage => "CLOUDOPS_STORAGE_ENDPOINT",
        }
    }
}

impl fmt::Display for Service {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Service::ParameterManager => write!(f, "parameter_manager"),
            Service::ServiceDirectory => write!(f, "service_directory"),
            Service::Storage => write!(f, "storage"),
        }
    }
}

/// How a client authenticates
#[derive(Clone, Default, PartialEq)]
pub enum AuthMode {
    /// Application Default Credentials, resolved by the client library
    #[default]
    ApplicationDefault,
    /// No credentials at all, for emulators and local test servers
    Anonymous,
    /// A parsed service account key file
    ServiceAccountKey(serde_json::Value),
}

// Keys carry a private key; never print them
impl fmt::Debug for AuthMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AuthMode::ApplicationDefault => write!(f, "ApplicationDefault"),
            AuthMode::Anonymous => write!(f, "Anonymous"),
            AuthMode::ServiceAccountKey(_) => write!(f, "ServiceAccountKey(<redacted>)"),
        }
    }
}

impl fmt::Display for AuthMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AuthMode::ApplicationDefault => write!(f, "application default credentials"),
            AuthMode::Anonymous => write!(f, "anonymous"),
            AuthMode::ServiceAccountKey(_) => write!(f, "service account key"),
        }
    }
}

/// Settings a client is built from
///
/// `endpoint` of `None` leaves the choice to the client library.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ClientSettings {
    pub endpoint: Option<String>,
    pub auth: AuthMode,
}

impl ClientSettings {
    #[must_use]
    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = Some(endpoint.into());
        self
    }

    #[must_use]
    pub fn with_auth(mut self, auth: AuthMode) -> Self {
        self.auth = auth;
        self
    }

    /// Credentials to hand to a client builder
    ///
    /// `None` means the builder's default, which is Application Default Credentials.
    pub fn credentials(&self) -> Result<Option<Credentials>> {
        match &self.auth {
            AuthMode::ApplicationDefault => Ok(None),
            AuthMode::Anonymous => Ok(Some(anonymous::Builder::new().build())),
            AuthMode::ServiceAccountKey(key) => service_account::Builder::new(key.clone())
                .build()
                .map(Some)
                .map_err(|e| CoreError::Config(format!("Invalid service account key: {}", e))),
        }
    }
}
