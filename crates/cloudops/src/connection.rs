//! Connection management for the service clients

use crate::error::Result as CliResult;
use anyhow::Context;
use cloudops_core::parametermanager::ParameterManagerClient;
use cloudops_core::servicedirectory::RegistrationServiceClient;
use cloudops_core::storage::StorageClient;
use cloudops_core::{ClientSettings, Config, Profile, Service};
use std::path::PathBuf;
use tracing::{debug, info, trace};

/// Connection manager for creating authenticated clients
#[derive(Clone)]
pub struct ConnectionManager {
    pub config: Config,
    pub config_path: Option<PathBuf>,
}

impl ConnectionManager {
    /// Create a new connection manager with a custom config path
    pub fn with_config_path(config: Config, config_path: Option<PathBuf>) -> Self {
        Self {
            config,
            config_path,
        }
    }

    /// Save `config` to the location this manager was loaded from
    pub fn save_config(&self, config: &Config) -> CliResult<()> {
        if let Some(ref path) = self.config_path {
            config
                .save_to_path(path)
                .context("Failed to save configuration")?;
        } else {
            config.save().context("Failed to save configuration")?;
        }
        Ok(())
    }

    /// Resolve client settings for `service` from the selected profile
    ///
    /// When --config-file is explicitly specified, environment variables are
    /// ignored so the file is the only source of settings.
    pub fn client_settings(
        &self,
        service: Service,
        profile_name: Option<&str>,
    ) -> CliResult<ClientSettings> {
        debug!("Resolving {} client settings", service);
        trace!("Profile name: {:?}", profile_name);

        let use_env_vars = self.config_path.is_none();
        if !use_env_vars {
            info!("--config-file specified explicitly, ignoring environment variables");
        }

        let profile = match self.config.resolve_profile(profile_name)? {
            Some(name) => {
                info!("Using profile: {}", name);
                self.config.profile(&name)?.clone()
            }
            None => {
                debug!("No profile configured, using built-in defaults");
                Profile::default()
            }
        };

        let settings = profile.client_settings(service, use_env_vars)?;
        debug!("Authenticating with {}", settings.auth);
        if let Some(endpoint) = &settings.endpoint {
            debug!("Using endpoint override: {}", endpoint);
        }
        Ok(settings)
    }

    /// Parameter Manager client for parameters in `location`
    pub async fn parameter_manager_client(
        &self,
        profile_name: Option<&str>,
        location: &str,
    ) -> CliResult<ParameterManagerClient> {
        let settings = self.client_settings(Service::ParameterManager, profile_name)?;
        Ok(ParameterManagerClient::new(&settings, location).await?)
    }

    pub async fn registration_client(
        &self,
        profile_name: Option<&str>,
    ) -> CliResult<RegistrationServiceClient> {
        let settings = self.client_settings(Service::ServiceDirectory, profile_name)?;
        Ok(RegistrationServiceClient::new(&settings).await?)
    }

    pub async fn storage_client(&self, profile_name: Option<&str>) -> CliResult<StorageClient> {
        let settings = self.client_settings(Service::Storage, profile_name)?;
        Ok(StorageClient::new(&settings).await?)
    }
}
