//! Error types for cloudops
//!
//! Everything a command can fail with ends up as a [`CloudOpsError`], which
//! knows how to print itself as a cargo-style diagnostic.

use cloudops_core::{ConfigError, CoreError};
use colored::Colorize;
use thiserror::Error;

/// Cargo-style diagnostic formatter for CLI errors.
///
/// Produces structured output like:
/// ```text
/// error: Profile 'staging' not found
///
///   tip: List available profiles: cloudops profile list
/// ```
pub struct CliDiagnostic {
    message: String,
    detail: Option<String>,
    tips: Vec<String>,
}

impl CliDiagnostic {
    /// Start a new error diagnostic with the given message.
    pub fn error(message: &str) -> Self {
        Self {
            message: message.to_string(),
            detail: None,
            tips: Vec::new(),
        }
    }

    /// Add a detail line below the error message.
    pub fn detail(mut self, text: &str) -> Self {
        self.detail = Some(text.to_string());
        self
    }

    pub fn tip(mut self, description: &str) -> Self {
        self.tips.push(description.to_string());
        self
    }

    /// Print the diagnostic to stderr with colored formatting.
    pub fn print(&self) {
        eprint!("{}{}", "error".red().bold(), ": ".bold());
        eprintln!("{}", self.message);

        if let Some(detail) = &self.detail {
            eprintln!("  {}", detail);
        }

        for description in &self.tips {
            eprintln!();
            eprint!("  {}{}", "tip".yellow().bold(), ": ".bold());
            eprintln!("{}", description);
        }
    }
}

/// Main error type for the cloudops application
#[derive(Error, Debug)]
pub enum CloudOpsError {
    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("Profile '{name}' not found")]
    ProfileNotFound { name: String },

    /// The one remote call failed; carried as the core reported it
    #[error(transparent)]
    Remote(CoreError),

    #[error("Invalid input: {message}")]
    InvalidInput { message: String },

    #[error("Output formatting error: {message}")]
    OutputError { message: String },
}

/// Result type for cloudops commands
pub type Result<T> = std::result::Result<T, CloudOpsError>;

impl CloudOpsError {
    /// Get helpful suggestions for resolving this error
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            CloudOpsError::ProfileNotFound { name } => vec![
                "List available profiles: cloudops profile list".to_string(),
                format!("Create profile '{}': cloudops profile set {}", name, name),
            ],
            CloudOpsError::Remote(err) if err.is_unauthorized() => vec![
                "Refresh Application Default Credentials: gcloud auth application-default login"
                    .to_string(),
                "Or use a key file: cloudops profile set <name> --service-account-key <path>"
                    .to_string(),
            ],
            CloudOpsError::Remote(err) if err.is_not_found() => vec![
                "Verify the project, location and resource IDs".to_string(),
                "Check that you're using the correct profile".to_string(),
            ],
            CloudOpsError::InvalidInput { .. } => {
                vec!["Check the command syntax: cloudops <command> --help".to_string()]
            }
            _ => vec![],
        }
    }

    /// Print a cargo-style diagnostic to stderr using colored formatting.
    pub fn print_diagnostic(&self) {
        let mut diag = CliDiagnostic::error(&self.to_string());

        if let CloudOpsError::Configuration(_) = self
            && let Ok(path) = cloudops_core::Config::config_path()
        {
            diag = diag.detail(&format!("Default config file: {}", path.display()));
        }

        for suggestion in self.suggestions() {
            diag = diag.tip(&suggestion);
        }

        diag.print();
    }
}

impl From<CoreError> for CloudOpsError {
    fn from(err: CoreError) -> Self {
        match err {
            CoreError::Config(msg) => CloudOpsError::Configuration(msg),
            CoreError::InvalidArgument(message) => CloudOpsError::InvalidInput { message },
            remote => CloudOpsError::Remote(remote),
        }
    }
}

impl From<ConfigError> for CloudOpsError {
    fn from(err: ConfigError) -> Self {
        match err {
            ConfigError::ProfileNotFound { name } => CloudOpsError::ProfileNotFound { name },
            other => CloudOpsError::Configuration(other.to_string()),
        }
    }
}

impl From<serde_json::Error> for CloudOpsError {
    fn from(err: serde_json::Error) -> Self {
        CloudOpsError::OutputError {
            message: format!("JSON error: {}", err),
        }
    }
}

impl From<serde_yaml::Error> for CloudOpsError {
    fn from(err: serde_yaml::Error) -> Self {
        CloudOpsError::OutputError {
            message: format!("YAML error: {}", err),
        }
    }
}

impl From<std::io::Error> for CloudOpsError {
    fn from(err: std::io::Error) -> Self {
        CloudOpsError::OutputError {
            message: format!("IO error: {}", err),
        }
    }
}

impl From<anyhow::Error> for CloudOpsError {
    fn from(err: anyhow::Error) -> Self {
        CloudOpsError::Configuration(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cloudops_core::RemoteError;

    fn remote(status: u16, reason: &str) -> CoreError {
        CoreError::Remote(
            RemoteError::new("GetParameterVersion", "boom")
                .with_status(status)
                .with_reason(reason),
        )
    }

    #[test]
    fn test_remote_failures_stay_one_variant() {
        for (status, reason) in [
            (404, "NOT_FOUND"),
            (403, "PERMISSION_DENIED"),
            (400, "INVALID_ARGUMENT"),
            (409, "ALREADY_EXISTS"),
        ] {
            let err = CloudOpsError::from(remote(status, reason));
            assert!(matches!(err, CloudOpsError::Remote(_)), "{reason}");
            assert!(err.to_string().starts_with("Remote call failed: "));
        }
    }

    #[test]
    fn test_remote_message_is_kept() {
        let err = CloudOpsError::from(remote(409, "ALREADY_EXISTS"));
        assert_eq!(
            err.to_string(),
            "Remote call failed: GetParameterVersion (409 ALREADY_EXISTS): boom"
        );
        assert!(err.suggestions().is_empty());
    }

    #[test]
    fn test_unauthorized_suggests_adc() {
        let err = CloudOpsError::from(remote(403, "PERMISSION_DENIED"));
        let tips = err.suggestions();
        assert!(tips.iter().any(|t| t.contains("application-default login")));
        assert!(tips.iter().any(|t| t.contains("--service-account-key")));
    }

    #[test]
    fn test_not_found_suggests_checking_ids() {
        let err = CloudOpsError::from(remote(404, "NOT_FOUND"));
        assert!(err.suggestions().iter().any(|t| t.contains("resource IDs")));
    }

    #[test]
    fn test_local_core_errors_keep_their_kind() {
        let err = CloudOpsError::from(CoreError::InvalidArgument("bad generation".to_string()));
        assert!(matches!(err, CloudOpsError::InvalidInput { .. }));
        assert_eq!(err.to_string(), "Invalid input: bad generation");

        let err = CloudOpsError::from(CoreError::Config("bad endpoint".to_string()));
        assert!(matches!(err, CloudOpsError::Configuration(_)));
    }

    #[test]
    fn test_profile_not_found_suggestions() {
        let err = CloudOpsError::from(ConfigError::ProfileNotFound {
            name: "staging".to_string(),
        });
        assert_eq!(err.to_string(), "Profile 'staging' not found");
        assert!(err.suggestions().iter().any(|s| s.contains("profile set staging")));
    }
}
