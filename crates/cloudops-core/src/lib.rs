//! # cloudops-core
//!
//! Shared engine for the `cloudops` CLI. Each supported operation follows the
//! same shape:
//!
//! 1. Build a fully-qualified resource name from caller-supplied ids ([`names`])
//! 2. Build a request value, optionally with a [`FieldMask`]
//! 3. Invoke exactly one call on an injected client trait
//! 4. Return a [`Report`] that renders the confirmation line
//!
//! Clients are traits ([`ParameterManager`], [`RegistrationService`],
//! [`Storage`]) implemented over the Google Cloud client libraries, which own
//! authentication, retry and transport. Tests swap in mocks; nothing in an
//! operation classifies errors, so any failure from the client reaches the
//! caller unchanged.
//!
//! ## Example
//!
//! ```rust,ignore
//! use cloudops_core::parametermanager::{ParameterManagerClient, get_param_version};
//! use cloudops_core::{ClientSettings, Report};
//!
//! let client = ParameterManagerClient::new(&ClientSettings::default(), "global").await?;
//! let found = get_param_version(&client, "my-project", "global", "my-param", "v1").await?;
//! found.write_text(&mut std::io::stdout())?;
//! ```

pub mod config;
pub mod error;
pub mod field_mask;
pub mod names;
pub mod parametermanager;
pub mod report;
pub mod servicedirectory;
pub mod settings;
pub mod storage;

pub use config::{Config, ConfigError, CredentialStore, Endpoints, Profile};
pub use error::{CoreError, RemoteError, Result};
pub use field_mask::FieldMask;
pub use names::{
    GLOBAL_LOCATION, LocationName, NamespaceName, ObjectName, ParameterName, ParameterVersionName,
    ensure_addressable,
};
pub use parametermanager::ParameterManager;
pub use report::Report;
pub use servicedirectory::RegistrationService;
pub use settings::{AuthMode, ClientSettings, Service};
pub use storage::Storage;
