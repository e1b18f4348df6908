//! Parameter version operations
//!
//! Each function issues exactly one call on the injected client and returns a
//! [`Report`]. Client errors are returned untouched.

use super::client::ParameterManager;
use super::model::{
    GetParameterVersionRequest, ParameterVersion, UpdateParameterVersionRequest,
};
use crate::error::Result;
use crate::field_mask::FieldMask;
use crate::names::{ParameterVersionName, ensure_addressable};
use crate::report::Report;
use serde::Serialize;
use std::io;
use tracing::info;

/// Outcome of [`get_param_version`]
#[derive(Debug, Clone, Serialize)]
pub struct ParameterVersionFound {
    pub parameter_version: ParameterVersion,
}

impl Report for ParameterVersionFound {
    fn write_text(&self, out: &mut dyn io::Write) -> io::Result<()> {
        let version = &self.parameter_version;
        writeln!(
            out,
            "Found parameter version {} with state {}",
            version.name,
            version.state()
        )?;
        if !version.disabled {
            let payload = version
                .payload
                .as_ref()
                .map(|p| p.as_text())
                .unwrap_or_default();
            writeln!(out, "Payload: {}", payload)?;
        }
        Ok(())
    }
}

/// Outcome of [`disable_param_version`]
#[derive(Debug, Clone, Serialize)]
pub struct ParameterVersionDisabled {
    pub parameter_id: String,
    pub version_id: String,
}

impl Report for ParameterVersionDisabled {
    fn write_text(&self, out: &mut dyn io::Write) -> io::Result<()> {
        writeln!(
            out,
            "Disabled parameter version {} for parameter {}",
            self.version_id, self.parameter_id
        )
    }
}

/// Outcome of [`enable_param_version`]
#[derive(Debug, Clone, Serialize)]
pub struct ParameterVersionEnabled {
    pub parameter_id: String,
    pub version_id: String,
}

impl Report for ParameterVersionEnabled {
    fn write_text(&self, out: &mut dyn io::Write) -> io::Result<()> {
        writeln!(
            out,
            "Enabled parameter version {} for parameter {}",
            self.version_id, self.parameter_id
        )
    }
}

/// Fetch a parameter version
///
/// # Example
///
/// ```rust,ignore
/// let found = get_param_version(&client, "my-project", "global", "my-param", "v1").await?;
/// found.write_text(&mut std::io::stdout())?;
/// // Found parameter version projects/my-project/.../versions/v1 with state enabled
/// // Payload: ...
/// ```
pub async fn get_param_version<C: ParameterManager + ?Sized>(
    client: &C,
    project_id: &str,
    location: &str,
    parameter_id: &str,
    version_id: &str,
) -> Result<ParameterVersionFound> {
    ensure_addressable(&[project_id, location, parameter_id, version_id])?;
    let name = ParameterVersionName::new(project_id, location, parameter_id, version_id);
    info!("Fetching parameter version {}", name);

    let parameter_version = client
        .get_parameter_version(GetParameterVersionRequest::new(&name))
        .await?;

    Ok(ParameterVersionFound { parameter_version })
}

/// Disable a parameter version
pub async fn disable_param_version<C: ParameterManager + ?Sized>(
    client: &C,
    project_id: &str,
    location: &str,
    parameter_id: &str,
    version_id: &str,
) -> Result<ParameterVersionDisabled> {
    ensure_addressable(&[project_id, location, parameter_id, version_id])?;
    let name = ParameterVersionName::new(project_id, location, parameter_id, version_id);
    info!("Disabling parameter version {}", name);

    client
        .update_parameter_version(set_disabled_request(&name, true))
        .await?;

    Ok(ParameterVersionDisabled {
        parameter_id: parameter_id.to_string(),
        version_id: version_id.to_string(),
    })
}

/// Re-enable a disabled parameter version
pub async fn enable_param_version<C: ParameterManager + ?Sized>(
    client: &C,
    project_id: &str,
    location: &str,
    parameter_id: &str,
    version_id: &str,
) -> Result<ParameterVersionEnabled> {
    ensure_addressable(&[project_id, location, parameter_id, version_id])?;
    let name = ParameterVersionName::new(project_id, location, parameter_id, version_id);
    info!("Enabling parameter version {}", name);

    client
        .update_parameter_version(set_disabled_request(&name, false))
        .await?;

    Ok(ParameterVersionEnabled {
        parameter_id: parameter_id.to_string(),
        version_id: version_id.to_string(),
    })
}

/// Update touching only the `disabled` field
fn set_disabled_request(
    name: &ParameterVersionName,
    disabled: bool,
) -> UpdateParameterVersionRequest {
    UpdateParameterVersionRequest {
        parameter_version: ParameterVersion {
            name: name.to_string(),
            disabled,
            ..Default::default()
        },
        update_mask: FieldMask::new(["disabled"]),
    }
}
