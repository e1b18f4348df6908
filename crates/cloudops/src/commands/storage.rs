//! Cloud Storage command implementations

use crate::cli::{OutputFormat, StorageCommands};
use crate::connection::ConnectionManager;
use crate::error::Result;
use crate::output::print_report;
use cloudops_core::storage::{parse_generation, restore_soft_deleted_object};

pub async fn handle_storage_command(
    cmd: &StorageCommands,
    conn_mgr: &ConnectionManager,
    profile: Option<&str>,
    output_format: OutputFormat,
) -> Result<()> {
    match cmd {
        StorageCommands::RestoreObject {
            bucket_name,
            object_name,
            generation,
        } => {
            // A bad generation fails before any client or credentials are set up
            parse_generation(generation)?;
            let client = conn_mgr.storage_client(profile).await?;
            let restored =
                restore_soft_deleted_object(&client, bucket_name, object_name, generation).await?;
            print_report(&restored, output_format)
        }
    }
}
