//! Service Directory command implementations

use crate::cli::{OutputFormat, ServiceDirectoryCommands};
use crate::connection::ConnectionManager;
use crate::error::Result;
use crate::output::print_report;
use cloudops_core::servicedirectory::{create_namespace, delete_namespace};

pub async fn handle_service_directory_command(
    cmd: &ServiceDirectoryCommands,
    conn_mgr: &ConnectionManager,
    profile: Option<&str>,
    output_format: OutputFormat,
) -> Result<()> {
    let client = conn_mgr.registration_client(profile).await?;

    match cmd {
        ServiceDirectoryCommands::CreateNamespace(args) => {
            let created = create_namespace(
                &client,
                &args.project_id,
                &args.location_id,
                &args.namespace_id,
            )
            .await?;
            print_report(&created, output_format)
        }
        ServiceDirectoryCommands::DeleteNamespace(args) => {
            let deleted = delete_namespace(
                &client,
                &args.project_id,
                &args.location_id,
                &args.namespace_id,
            )
            .await?;
            print_report(&deleted, output_format)
        }
    }
}
