use clap::Parser;
use cloudops_core::Config;
use tracing::{debug, info, trace};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod cli;
mod commands;
mod connection;
mod error;
mod output;

use cli::{Cli, Commands};
use connection::ConnectionManager;
use error::CloudOpsError;

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    // Initialize tracing based on verbosity level
    init_tracing(cli.verbose);

    // The client libraries use rustls; pick its provider before any client is built
    if rustls::crypto::aws_lc_rs::default_provider()
        .install_default()
        .is_err()
    {
        debug!("A crypto provider was already installed");
    }

    let conn_mgr = match load_connection_manager(&cli) {
        Ok(conn_mgr) => conn_mgr,
        Err(e) => {
            e.print_diagnostic();
            std::process::exit(1);
        }
    };

    if let Err(e) = execute_command(&cli, &conn_mgr).await {
        e.print_diagnostic();
        std::process::exit(1);
    }
}

fn init_tracing(verbose: u8) {
    // Check for RUST_LOG env var first, then fall back to verbosity flag
    let filter = if std::env::var("RUST_LOG").is_ok() {
        tracing_subscriber::EnvFilter::from_default_env()
    } else {
        let level = match verbose {
            0 => "cloudops=warn,cloudops_core=warn",
            1 => "cloudops=info,cloudops_core=info",
            2 => "cloudops=debug,cloudops_core=debug",
            _ => "cloudops=trace,cloudops_core=trace,google_cloud_gax=debug",
        };
        tracing_subscriber::EnvFilter::new(level)
    };

    // stdout carries command output only
    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(true)
                .with_thread_ids(false)
                .with_thread_names(false)
                .compact(),
        )
        .init();

    debug!("Tracing initialized with verbosity level: {}", verbose);
}

/// Load configuration from the specified path or the default location
fn load_connection_manager(cli: &Cli) -> Result<ConnectionManager, CloudOpsError> {
    let (config, config_path) = if let Some(config_file) = &cli.config_file {
        let path = std::path::PathBuf::from(config_file);
        debug!("Loading config from explicit path: {:?}", path);
        let config = Config::load_from_path(&path)?;
        (config, Some(path))
    } else {
        debug!("Loading config from default location");
        (Config::load()?, None)
    };
    Ok(ConnectionManager::with_config_path(config, config_path))
}

async fn execute_command(cli: &Cli, conn_mgr: &ConnectionManager) -> Result<(), CloudOpsError> {
    trace!("Executing command: {:?}", cli.command);
    info!("Command: {}", format_command(&cli.command));

    let profile = cli.profile.as_deref();
    let start = std::time::Instant::now();
    let result = match &cli.command {
        Commands::ParameterManager(cmd) => {
            commands::parameter_manager::handle_parameter_manager_command(
                cmd, conn_mgr, profile, cli.output,
            )
            .await
        }
        Commands::ServiceDirectory(cmd) => {
            commands::service_directory::handle_service_directory_command(
                cmd, conn_mgr, profile, cli.output,
            )
            .await
        }
        Commands::Storage(cmd) => {
            commands::storage::handle_storage_command(cmd, conn_mgr, profile, cli.output).await
        }
        Commands::Profile(cmd) => {
            commands::profile::handle_profile_command(cmd, conn_mgr, cli.output).await
        }
    };

    let duration = start.elapsed();
    match &result {
        Ok(_) => info!("Command completed successfully in {:?}", duration),
        Err(e) => debug!("Command failed after {:?}: {}", duration, e),
    }

    result
}

/// Short command label for logs; arguments may include key paths
fn format_command(command: &Commands) -> &'static str {
    match command {
        Commands::ParameterManager(_) => "parameter-manager",
        Commands::ServiceDirectory(_) => "service-directory",
        Commands::Storage(_) => "storage",
        Commands::Profile(_) => "profile",
    }
}
