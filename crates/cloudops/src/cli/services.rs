//! Service subcommands

use clap::{Args, Subcommand};
use cloudops_core::GLOBAL_LOCATION;

/// Identifies one parameter version
#[derive(Args, Debug, Clone)]
pub struct ParameterVersionArgs {
    /// Project ID (e.g. 'my-project')
    pub project_id: String,

    /// Parameter ID (e.g. 'my-param')
    pub parameter_id: String,

    /// Version ID (e.g. 'my-param-version')
    pub version_id: String,

    /// Location of the parameter; regional parameters use their region
    #[arg(long, default_value = GLOBAL_LOCATION)]
    pub location: String,
}

/// Parameter Manager commands
#[derive(Subcommand, Debug)]
pub enum ParameterManagerCommands {
    /// Fetch a parameter version; prints the payload when enabled
    GetVersion(ParameterVersionArgs),

    /// Disable a parameter version
    DisableVersion(ParameterVersionArgs),

    /// Enable a previously disabled parameter version
    EnableVersion(ParameterVersionArgs),
}

/// Identifies one namespace
#[derive(Args, Debug, Clone)]
pub struct NamespaceArgs {
    /// Project ID
    pub project_id: String,

    /// Region (e.g. 'us-east1')
    pub location_id: String,

    /// Namespace ID
    pub namespace_id: String,
}

/// Service Directory commands
#[derive(Subcommand, Debug)]
pub enum ServiceDirectoryCommands {
    /// Create an empty namespace
    CreateNamespace(NamespaceArgs),

    /// Delete a namespace and everything registered in it
    DeleteNamespace(NamespaceArgs),
}

/// Cloud Storage commands
#[derive(Subcommand, Debug)]
pub enum StorageCommands {
    /// Restore a soft-deleted object generation
    RestoreObject {
        /// Bucket name (e.g. 'my-bucket')
        bucket_name: String,

        /// Object name (e.g. 'my-object')
        object_name: String,

        /// Generation to restore (e.g. '123456789')
        generation: String,
    },
}
