//! Profile subcommands

use clap::{Args, Subcommand};

/// Profile management commands
#[derive(Subcommand, Debug)]
pub enum ProfileCommands {
    /// List configured profiles
    #[command(visible_alias = "ls")]
    List,

    /// Show a profile
    Show {
        /// Profile name
        name: String,
    },

    /// Create or update a profile
    Set(ProfileSetArgs),

    /// Remove a profile
    #[command(visible_alias = "rm")]
    Remove {
        /// Profile name
        name: String,
    },

    /// Make a profile the default
    Default {
        /// Profile name
        name: String,
    },
}

#[derive(Args, Debug)]
pub struct ProfileSetArgs {
    /// Profile name
    pub name: String,

    /// Service account key file to authenticate with instead of ADC
    #[arg(long, value_name = "PATH")]
    pub service_account_key: Option<String>,

    /// Copy the key file into the OS keyring (requires secure-storage)
    #[arg(long, requires = "service_account_key")]
    pub keyring: bool,

    /// Send requests without credentials, e.g. to an emulator
    #[arg(long, value_name = "BOOL", conflicts_with = "service_account_key")]
    pub anonymous: Option<bool>,

    /// Parameter Manager endpoint override
    #[arg(long)]
    pub parameter_manager_endpoint: Option<String>,

    /// Service Directory endpoint override
    #[arg(long)]
    pub service_directory_endpoint: Option<String>,

    /// Cloud Storage endpoint override
    #[arg(long)]
    pub storage_endpoint: Option<String>,

    /// Also make this the default profile
    #[arg(long)]
    pub default: bool,
}
