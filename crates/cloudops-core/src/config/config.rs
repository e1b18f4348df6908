//! Configuration management for cloudops
//!
//! Handles configuration loading from files and environment variables.
//! Configuration is stored in TOML format with support for multiple named profiles.

#[cfg(target_os = "macos")]
use directories::BaseDirs;
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

use super::credential::CredentialStore;
use super::error::{ConfigError, Result};
use crate::settings::{AuthMode, ClientSettings, Service};

/// Main configuration structure
#[derive(Debug, Serialize, Deserialize, Default, Clone)]
pub struct Config {
    /// Profile used when `--profile` is not given
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_profile: Option<String>,
    /// Map of profile name -> profile configuration
    #[serde(default)]
    pub profiles: HashMap<String, Profile>,
}

/// Individual profile configuration
///
/// With neither `anonymous` nor `service_account_key` set, clients use
/// Application Default Credentials.
#[derive(Debug, Serialize, Deserialize, Default, Clone, PartialEq)]
pub struct Profile {
    /// Send requests without credentials, e.g. to an emulator
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub anonymous: bool,
    /// Path to a service account key file, or `keyring:<key>` holding its JSON
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub service_account_key: Option<String>,
    /// Endpoint overrides, e.g. for emulators or private service connect
    #[serde(default, skip_serializing_if = "Endpoints::is_empty")]
    pub endpoints: Endpoints,
}

/// Per-service endpoint overrides
#[derive(Debug, Serialize, Deserialize, Default, Clone, PartialEq)]
pub struct Endpoints {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parameter_manager: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub service_directory: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub storage: Option<String>,
}

impl Endpoints {
    pub fn get(&self, service: Service) -> Option<&str> {
        match service {
            Service::ParameterManager => self.parameter_manager.as_deref(),
            Service::ServiceDirectory => self.service_directory.as_deref(),
            Service::Storage => self.storage.as_deref(),
        }
    }

    pub fn set(&mut self, service: Service, endpoint: Option<String>) {
        match service {
            Service::ParameterManager => self.parameter_manager = endpoint,
            Service::ServiceDirectory => self.service_directory = endpoint,
            Service::Storage => self.storage = endpoint,
        }
    }

    pub fn is_empty(&self) -> bool {
        Service::ALL.iter().all(|s| self.get(*s).is_none())
    }
}

impl Profile {
    /// Resolve how clients built from this profile authenticate
    ///
    /// `anonymous` wins over a configured key. A key stored in the keyring
    /// holds the JSON itself; anything else is read as a file path.
    pub fn auth_mode(&self) -> Result<AuthMode> {
        if self.anonymous {
            return Ok(AuthMode::Anonymous);
        }
        let Some(key) = self.service_account_key.as_deref() else {
            return Ok(AuthMode::ApplicationDefault);
        };

        let (source, json) = if CredentialStore::is_keyring_reference(key) {
            (key.to_string(), CredentialStore::new().get_credential(key, None)?)
        } else {
            let path = shellexpand::tilde(key).into_owned();
            let json = fs::read_to_string(&path).map_err(|e| {
                ConfigError::CredentialError(format!(
                    "Failed to read service account key {}: {}",
                    path, e
                ))
            })?;
            (path, json)
        };

        let value = serde_json::from_str(&json).map_err(|e| {
            ConfigError::CredentialError(format!(
                "Service account key {} is not valid JSON: {}",
                source, e
            ))
        })?;
        Ok(AuthMode::ServiceAccountKey(value))
    }

    /// Get the resolved endpoint override for `service`, if any
    pub fn resolve_endpoint(&self, service: Service, use_env: bool) -> Result<Option<String>> {
        let env_var = use_env.then(|| service.endpoint_env_var());
        CredentialStore::new()
            .resolve_optional(self.endpoints.get(service), env_var)
            .map_err(|e| {
                ConfigError::CredentialError(format!(
                    "Failed to resolve {} endpoint: {}",
                    service, e
                ))
            })
    }

    /// Everything a client for `service` needs from this profile
    pub fn client_settings(&self, service: Service, use_env: bool) -> Result<ClientSettings> {
        Ok(ClientSettings {
            endpoint: self.resolve_endpoint(service, use_env)?,
            auth: self.auth_mode()?,
        })
    }
}

impl Config {
    /// Resolve the profile to use
    ///
    /// Resolution order:
    /// 1. Explicit profile (must exist)
    /// 2. `default_profile`
    /// 3. First profile alphabetically
    /// 4. None - run with built-in defaults
    pub fn resolve_profile(&self, explicit_profile: Option<&str>) -> Result<Option<String>> {
        if let Some(name) = explicit_profile {
            if !self.profiles.contains_key(name) {
                return Err(ConfigError::ProfileNotFound {
                    name: name.to_string(),
                });
            }
            return Ok(Some(name.to_string()));
        }

        if let Some(ref default) = self.default_profile {
            return Ok(Some(default.clone()));
        }

        Ok(self.list_profiles().first().map(|(name, _)| (*name).clone()))
    }

    /// Look up a profile by name
    pub fn profile(&self, name: &str) -> Result<&Profile> {
        self.profiles
            .get(name)
            .ok_or_else(|| ConfigError::ProfileNotFound {
                name: name.to_string(),
            })
    }

    /// Load configuration from the standard location
    pub fn load() -> Result<Self> {
        let config_path = Self::config_path()?;
        Self::load_from_path(&config_path)
    }

    /// Load configuration from a specific path
    pub fn load_from_path(config_path: &Path) -> Result<Self> {
        if !config_path.exists() {
            return Ok(Config::default());
        }

        let content = fs::read_to_string(config_path).map_err(|e| ConfigError::LoadError {
            path: config_path.display().to_string(),
            source: e,
        })?;

        let expanded_content = Self::expand_env_vars(&content);

        let config: Config = toml::from_str(&expanded_content)?;

        Ok(config)
    }

    /// Save configuration to the standard location
    pub fn save(&self) -> Result<()> {
        let config_path = Self::config_path()?;
        self.save_to_path(&config_path)
    }

    /// Save configuration to a specific path
    pub fn save_to_path(&self, config_path: &Path) -> Result<()> {
        if let Some(parent) = config_path.parent() {
            fs::create_dir_all(parent).map_err(|e| ConfigError::SaveError {
                path: parent.display().to_string(),
                source: e,
            })?;
        }

        let content = toml::to_string_pretty(self)?;

        fs::write(config_path, content).map_err(|e| ConfigError::SaveError {
            path: config_path.display().to_string(),
            source: e,
        })?;

        Ok(())
    }

    /// Set or update a profile
    pub fn set_profile(&mut self, name: String, profile: Profile) {
        self.profiles.insert(name, profile);
    }

    /// Remove a profile by name
    pub fn remove_profile(&mut self, name: &str) -> Option<Profile> {
        if self.default_profile.as_deref() == Some(name) {
            self.default_profile = None;
        }
        self.profiles.remove(name)
    }

    /// List all profiles sorted by name
    pub fn list_profiles(&self) -> Vec<(&String, &Profile)> {
        let mut profiles: Vec<_> = self.profiles.iter().collect();
        profiles.sort_by_key(|(name, _)| *name);
        profiles
    }

    /// Get the path to the configuration file
    ///
    /// On macOS, this supports both the standard macOS path and Linux-style ~/.config path:
    /// 1. Check ~/.config/cloudops/config.toml (Linux-style, preferred for consistency)
    /// 2. Fall back to ~/Library/Application Support/dev.cloudops.cloudops/config.toml
    ///
    /// On Linux: ~/.config/cloudops/config.toml
    /// On Windows: %APPDATA%\cloudops\cloudops\config\config.toml
    pub fn config_path() -> Result<PathBuf> {
        #[cfg(target_os = "macos")]
        {
            if let Some(base_dirs) = BaseDirs::new() {
                let linux_style_path = base_dirs
                    .home_dir()
                    .join(".config")
                    .join("cloudops")
                    .join("config.toml");

                if linux_style_path
                    .parent()
                    .map(|p| p.exists())
                    .unwrap_or(false)
                {
                    return Ok(linux_style_path);
                }
            }
        }

        let proj_dirs =
            ProjectDirs::from("dev", "cloudops", "cloudops").ok_or(ConfigError::ConfigDirError)?;

        Ok(proj_dirs.config_dir().join("config.toml"))
    }

    /// Expand environment variables in configuration content
    ///
    /// Supports ${VAR} and ${VAR:-default} syntax. Unset variables without a
    /// default are left as-is so profiles you don't use never fail to load.
    ///
    /// Example:
    /// ```toml
    /// service_account_key = "${CLOUDOPS_KEY_FILE}"
    /// [profiles.dev.endpoints]
    /// storage = "${STORAGE_EMULATOR_HOST:-http://localhost:9023}"
    /// ```
    fn expand_env_vars(content: &str) -> String {
        let expanded =
            shellexpand::env_with_context_no_errors(content, |var| std::env::var(var).ok());
        expanded.to_string()
    }
}
