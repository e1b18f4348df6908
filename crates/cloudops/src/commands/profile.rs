//! Profile management command implementations

use crate::cli::{OutputFormat, ProfileCommands, ProfileSetArgs};
use crate::connection::ConnectionManager;
use crate::error::{CloudOpsError, Result};
use crate::output::print_report;
use cloudops_core::{Config, CredentialStore, Endpoints, Profile, Report, Service};
use serde::Serialize;
use std::{fs, io};
use tracing::{debug, info, trace};

/// Handle profile management commands
pub async fn handle_profile_command(
    profile_cmd: &ProfileCommands,
    conn_mgr: &ConnectionManager,
    output_format: OutputFormat,
) -> Result<()> {
    match profile_cmd {
        ProfileCommands::List => print_report(&list_profiles(conn_mgr), output_format),
        ProfileCommands::Show { name } => {
            print_report(&show_profile(&conn_mgr.config, name)?, output_format)
        }
        ProfileCommands::Set(args) => {
            let changed = set_profile(conn_mgr, args)?;
            print_report(&changed, output_format)
        }
        ProfileCommands::Remove { name } => {
            let changed = remove_profile(conn_mgr, name)?;
            print_report(&changed, output_format)
        }
        ProfileCommands::Default { name } => {
            let changed = set_default_profile(conn_mgr, name)?;
            print_report(&changed, output_format)
        }
    }
}

#[derive(Debug, Serialize)]
struct ProfileSummary {
    name: String,
    is_default: bool,
    credentials: &'static str,
    #[serde(skip_serializing_if = "Endpoints::is_empty")]
    endpoints: Endpoints,
}

#[derive(Debug, Serialize)]
struct ProfileList {
    #[serde(skip_serializing_if = "Option::is_none")]
    config_path: Option<String>,
    profiles: Vec<ProfileSummary>,
}

impl Report for ProfileList {
    fn write_text(&self, out: &mut dyn io::Write) -> io::Result<()> {
        if self.profiles.is_empty() {
            writeln!(out, "No profiles configured.")?;
            return writeln!(out, "Use 'cloudops profile set' to create a profile.");
        }
        for profile in &self.profiles {
            let marker = if profile.is_default { " (default)" } else { "" };
            writeln!(out, "{}{}", profile.name, marker)?;
        }
        Ok(())
    }
}

fn list_profiles(conn_mgr: &ConnectionManager) -> ProfileList {
    debug!("Listing all configured profiles");
    let config = &conn_mgr.config;
    let profiles: Vec<ProfileSummary> = config
        .list_profiles()
        .into_iter()
        .map(|(name, profile)| ProfileSummary {
            name: name.clone(),
            is_default: config.default_profile.as_deref() == Some(name.as_str()),
            credentials: credentials_label(profile),
            endpoints: profile.endpoints.clone(),
        })
        .collect();
    trace!("Found {} profiles", profiles.len());

    let config_path = conn_mgr
        .config_path
        .clone()
        .or_else(|| Config::config_path().ok())
        .map(|p| p.display().to_string());

    ProfileList {
        config_path,
        profiles,
    }
}

#[derive(Debug, Serialize)]
struct ProfileDetails {
    name: String,
    is_default: bool,
    credentials: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    service_account_key: Option<String>,
    #[serde(skip_serializing_if = "Endpoints::is_empty")]
    endpoints: Endpoints,
}

impl Report for ProfileDetails {
    fn write_text(&self, out: &mut dyn io::Write) -> io::Result<()> {
        writeln!(out, "Profile: {}", self.name)?;
        if self.is_default {
            writeln!(out, "Default: yes")?;
        }
        writeln!(out, "Credentials: {}", self.credentials)?;
        if let Some(key) = &self.service_account_key {
            writeln!(out, "Service account key: {}", key)?;
        }
        for service in Service::ALL {
            if let Some(endpoint) = self.endpoints.get(service) {
                writeln!(out, "Endpoint ({}): {}", service, endpoint)?;
            }
        }
        Ok(())
    }
}

fn show_profile(config: &Config, name: &str) -> Result<ProfileDetails> {
    let profile = config.profile(name)?;
    Ok(ProfileDetails {
        name: name.to_string(),
        is_default: config.default_profile.as_deref() == Some(name),
        credentials: credentials_label(profile),
        service_account_key: profile.service_account_key.clone(),
        endpoints: profile.endpoints.clone(),
    })
}

/// How clients built from `profile` will authenticate, without resolving secrets
fn credentials_label(profile: &Profile) -> &'static str {
    if profile.anonymous {
        "anonymous"
    } else if profile.service_account_key.is_some() {
        "service account key"
    } else {
        "application default credentials"
    }
}

/// The keyring entry `old` leaves behind once `new` takes its place
fn superseded_reference<'a>(old: Option<&'a str>, new: &str) -> Option<&'a str> {
    old.filter(|old| *old != new && CredentialStore::is_keyring_reference(old))
}

#[derive(Debug, Serialize)]
struct ProfileChanged {
    name: String,
    action: &'static str,
}

impl Report for ProfileChanged {
    fn write_text(&self, out: &mut dyn io::Write) -> io::Result<()> {
        writeln!(out, "Profile '{}' {}.", self.name, self.action)
    }
}

fn set_profile(conn_mgr: &ConnectionManager, args: &ProfileSetArgs) -> Result<ProfileChanged> {
    let name = args.name.as_str();
    debug!("Setting profile: {}", name);

    let mut config = conn_mgr.config.clone();
    let existed = config.profiles.contains_key(name);
    let mut profile: Profile = config.profiles.get(name).cloned().unwrap_or_default();

    if let Some(key_path) = &args.service_account_key {
        let store = CredentialStore::new();
        let value = if args.keyring {
            let json = fs::read_to_string(key_path).map_err(|e| CloudOpsError::InvalidInput {
                message: format!("Cannot read service account key '{}': {}", key_path, e),
            })?;
            let key = format!("{}-service-account-key", name);
            let reference = store.store_credential(&key, &json)?;
            info!("Stored service account key for '{}' in the keyring", name);
            reference
        } else {
            key_path.clone()
        };

        if let Some(stale) = superseded_reference(profile.service_account_key.as_deref(), &value)
        {
            store.delete_credential(stale)?;
            info!("Deleted superseded keyring entry {}", stale);
        }
        profile.service_account_key = Some(value);
    }

    if let Some(anonymous) = args.anonymous {
        profile.anonymous = anonymous;
    }

    let overrides = [
        (Service::ParameterManager, &args.parameter_manager_endpoint),
        (Service::ServiceDirectory, &args.service_directory_endpoint),
        (Service::Storage, &args.storage_endpoint),
    ];
    for (service, endpoint) in overrides {
        if let Some(endpoint) = endpoint {
            url::Url::parse(endpoint).map_err(|e| CloudOpsError::InvalidInput {
                message: format!("Invalid {} endpoint '{}': {}", service, endpoint, e),
            })?;
            profile.endpoints.set(service, Some(endpoint.clone()));
        }
    }

    config.set_profile(name.to_string(), profile);
    if args.default {
        config.default_profile = Some(name.to_string());
    }
    conn_mgr.save_config(&config)?;

    Ok(ProfileChanged {
        name: name.to_string(),
        action: if existed { "updated" } else { "created" },
    })
}

fn remove_profile(conn_mgr: &ConnectionManager, name: &str) -> Result<ProfileChanged> {
    debug!("Removing profile: {}", name);

    let mut config = conn_mgr.config.clone();
    let removed = config
        .remove_profile(name)
        .ok_or_else(|| CloudOpsError::ProfileNotFound {
            name: name.to_string(),
        })?;

    if let Some(key) = &removed.service_account_key {
        CredentialStore::new().delete_credential(key)?;
    }
    conn_mgr.save_config(&config)?;

    Ok(ProfileChanged {
        name: name.to_string(),
        action: "removed",
    })
}

fn set_default_profile(conn_mgr: &ConnectionManager, name: &str) -> Result<ProfileChanged> {
    let mut config = conn_mgr.config.clone();
    config.profile(name)?;
    config.default_profile = Some(name.to_string());
    conn_mgr.save_config(&config)?;

    Ok(ProfileChanged {
        name: name.to_string(),
        action: "set as default",
    })
}
