//! Parameter Manager command implementations

use crate::cli::{OutputFormat, ParameterManagerCommands, ParameterVersionArgs};
use crate::connection::ConnectionManager;
use crate::error::Result;
use crate::output::print_report;
use cloudops_core::parametermanager::{
    disable_param_version, enable_param_version, get_param_version,
};
use tracing::debug;

pub async fn handle_parameter_manager_command(
    cmd: &ParameterManagerCommands,
    conn_mgr: &ConnectionManager,
    profile: Option<&str>,
    output_format: OutputFormat,
) -> Result<()> {
    let args = match cmd {
        ParameterManagerCommands::GetVersion(args)
        | ParameterManagerCommands::DisableVersion(args)
        | ParameterManagerCommands::EnableVersion(args) => args,
    };
    debug!("Parameter Manager command {:?}", cmd);

    let ParameterVersionArgs {
        project_id,
        parameter_id,
        version_id,
        location,
    } = args;
    let client = conn_mgr
        .parameter_manager_client(profile, location)
        .await?;

    match cmd {
        ParameterManagerCommands::GetVersion(_) => {
            let found =
                get_param_version(&client, project_id, location, parameter_id, version_id).await?;
            print_report(&found, output_format)
        }
        ParameterManagerCommands::DisableVersion(_) => {
            let disabled =
                disable_param_version(&client, project_id, location, parameter_id, version_id)
                    .await?;
            print_report(&disabled, output_format)
        }
        ParameterManagerCommands::EnableVersion(_) => {
            let enabled =
                enable_param_version(&client, project_id, location, parameter_id, version_id)
                    .await?;
            print_report(&enabled, output_format)
        }
    }
}
