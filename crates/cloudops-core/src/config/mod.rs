//! Configuration and profile management
//!
// Allow nested config module - this is intentional for the config subsystem

#![allow(clippy::module_inception)]
//!
//! Profiles hold what a client needs besides the ids on the command line:
//! how to authenticate and where to send requests.
//!
//! # Features
//!
//! - Multiple named profiles with a default
//! - Service account keys stored in the OS keyring (optional, `secure-storage`)
//! - Environment variable expansion in config files
//! - Platform-specific config file locations

pub mod config;
pub mod credential;
pub mod error;

pub use config::{Config, Endpoints, Profile};
pub use credential::CredentialStore;
pub use error::{ConfigError, Result};
