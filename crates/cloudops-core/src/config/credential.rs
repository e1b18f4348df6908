//! Credential storage abstraction with optional keyring support
//!
//! Values in the config are either plaintext or a `keyring:<key>` reference.
//! An environment variable, when supplied and set, overrides both.

use super::error::{ConfigError, Result};
use std::env;

/// Prefix that indicates a value should be retrieved from the keyring
const KEYRING_PREFIX: &str = "keyring:";

/// Service name for keyring entries
#[cfg(feature = "secure-storage")]
const SERVICE_NAME: &str = "cloudops";

/// Credential store abstraction
#[derive(Debug, Default, Clone, Copy)]
pub struct CredentialStore;

impl CredentialStore {
    pub fn new() -> Self {
        Self
    }

    /// Store a credential in the keyring and return the reference to put in the config
    pub fn store_credential(&self, key: &str, value: &str) -> Result<String> {
        #[cfg(feature = "secure-storage")]
        {
            let entry = keyring::Entry::new(SERVICE_NAME, key)
                .map_err(|e| ConfigError::KeyringError(e.to_string()))?;
            entry.set_password(value).map_err(|e| {
                ConfigError::KeyringError(format!("Failed to store credential in keyring: {}", e))
            })?;
            Ok(format!("{}{}", KEYRING_PREFIX, key))
        }
        #[cfg(not(feature = "secure-storage"))]
        {
            let _ = (key, value);
            Err(ConfigError::CredentialError(
                "Keyring storage requested but secure-storage feature is not enabled".to_string(),
            ))
        }
    }

    /// Retrieve a credential value
    ///
    /// Resolution order:
    /// 1. Check environment variable (if env_var provided)
    /// 2. If value starts with "keyring:", retrieve from keyring
    /// 3. Otherwise, return the value as-is (plaintext)
    pub fn get_credential(&self, value: &str, env_var: Option<&str>) -> Result<String> {
        if let Some(var) = env_var
            && let Ok(env_value) = env::var(var)
        {
            return Ok(env_value);
        }

        if let Some(key) = value.strip_prefix(KEYRING_PREFIX) {
            #[cfg(feature = "secure-storage")]
            {
                let entry = keyring::Entry::new(SERVICE_NAME, key)
                    .map_err(|e| ConfigError::KeyringError(e.to_string()))?;
                entry.get_password().map_err(|e| {
                    ConfigError::KeyringError(format!(
                        "Failed to retrieve credential '{}' from keyring: {}",
                        key, e
                    ))
                })
            }
            #[cfg(not(feature = "secure-storage"))]
            {
                Err(ConfigError::CredentialError(format!(
                    "Credential '{}' references keyring but secure-storage feature is not enabled",
                    key
                )))
            }
        } else {
            Ok(value.to_string())
        }
    }

    /// Like [`get_credential`](Self::get_credential) for settings that may be absent
    ///
    /// A set environment variable still wins when the config has no value.
    pub fn resolve_optional(
        &self,
        value: Option<&str>,
        env_var: Option<&str>,
    ) -> Result<Option<String>> {
        if let Some(var) = env_var
            && let Ok(env_value) = env::var(var)
        {
            return Ok(Some(env_value));
        }
        value.map(|v| self.get_credential(v, None)).transpose()
    }

    /// Delete a keyring entry; plaintext values have nothing to delete
    pub fn delete_credential(&self, value: &str) -> Result<()> {
        let Some(key) = value.strip_prefix(KEYRING_PREFIX) else {
            return Ok(());
        };
        #[cfg(feature = "secure-storage")]
        {
            let entry = keyring::Entry::new(SERVICE_NAME, key)
                .map_err(|e| ConfigError::KeyringError(e.to_string()))?;
            match entry.delete_credential() {
                Ok(()) => Ok(()),
                Err(keyring::Error::NoEntry) => Ok(()), // Already deleted
                Err(e) => Err(ConfigError::KeyringError(format!(
                    "Failed to delete credential from keyring: {}",
                    e
                ))),
            }
        }
        #[cfg(not(feature = "secure-storage"))]
        {
            let _ = key;
            Ok(())
        }
    }

    /// Check if a value is a keyring reference
    pub fn is_keyring_reference(value: &str) -> bool {
        value.starts_with(KEYRING_PREFIX)
    }
}
