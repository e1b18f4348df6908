//! CLI structure and command definitions
//!
//! One subcommand group per service, plus profile management.

use clap::{Parser, Subcommand};

pub mod profile;
pub mod services;

pub use profile::*;
pub use services::*;

/// One-shot operations against Parameter Manager, Service Directory and Cloud Storage
#[derive(Parser, Debug)]
#[command(name = "cloudops")]
#[command(
    version,
    about = "One-shot cloud resource operations from the command line"
)]
#[command(long_about = "
One-shot cloud resource operations from the command line

Each command builds a resource name from its arguments, makes exactly one
call through the Google Cloud client libraries and prints a confirmation
line. Failures are reported as-is.

EXAMPLES:
    # Read a parameter version
    cloudops parameter-manager get-version my-project my-param v1

    # Disable it
    cloudops parameter-manager disable-version my-project my-param v1

    # Create a Service Directory namespace
    cloudops service-directory create-namespace my-project us-east1 my-namespace

    # Restore a soft-deleted object generation
    cloudops storage restore-object my-bucket my-object 1712345678901234

    # Configure a profile pointing at a local emulator
    cloudops profile set local --anonymous true --service-directory-endpoint http://localhost:8085

Credentials are Application Default Credentials unless the active profile
names a service account key or turns on anonymous access.
")]
pub struct Cli {
    /// Profile to use for this command
    #[arg(long, short, global = true, env = "CLOUDOPS_PROFILE")]
    pub profile: Option<String>,

    /// Path to alternate configuration file
    #[arg(long, global = true, env = "CLOUDOPS_CONFIG_FILE")]
    pub config_file: Option<String>,

    /// Output format
    #[arg(long, short = 'o', global = true, value_enum, default_value = "text")]
    pub output: OutputFormat,

    /// Enable verbose logging
    #[arg(long, short, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

/// Output format options
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// Confirmation lines
    #[default]
    Text,
    /// JSON output
    Json,
    /// YAML output
    Yaml,
}

/// Top-level commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Parameter Manager operations
    #[command(subcommand, visible_alias = "pm")]
    ParameterManager(ParameterManagerCommands),

    /// Service Directory operations
    #[command(subcommand, visible_alias = "sd")]
    ServiceDirectory(ServiceDirectoryCommands),

    /// Cloud Storage operations
    #[command(subcommand, visible_alias = "gcs")]
    Storage(StorageCommands),

    /// Profile management
    #[command(subcommand, visible_alias = "prof")]
    Profile(ProfileCommands),
}
