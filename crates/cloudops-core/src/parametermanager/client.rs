//! Parameter Manager client trait and its implementation over the client library

use super::model::{GetParameterVersionRequest, ParameterVersion, UpdateParameterVersionRequest};
use crate::error::{CoreError, RemoteError, Result};
use crate::names::GLOBAL_LOCATION;
use crate::settings::ClientSettings;
use async_trait::async_trait;
use google_cloud_parametermanager_v1::client::ParameterManager as ParameterManagerApi;
use tracing::debug;

/// Calls the operations in this crate need from Parameter Manager
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ParameterManager: Send + Sync {
    async fn get_parameter_version(
        &self,
        request: GetParameterVersionRequest,
    ) -> Result<ParameterVersion>;

    async fn update_parameter_version(
        &self,
        request: UpdateParameterVersionRequest,
    ) -> Result<ParameterVersion>;
}

/// [`ParameterManager`] backed by `google-cloud-parametermanager-v1`
///
/// Regional parameters live behind `parametermanager.{location}.rep.googleapis.com`,
/// so a client is bound to one location when it is built.
pub struct ParameterManagerClient {
    inner: ParameterManagerApi,
}

impl ParameterManagerClient {
    pub async fn new(settings: &ClientSettings, location: &str) -> Result<Self> {
        let mut builder = ParameterManagerApi::builder();
        if let Some(endpoint) = endpoint_for(settings, location) {
            debug!("Using Parameter Manager endpoint {}", endpoint);
            builder = builder.with_endpoint(endpoint);
        }
        if let Some(credentials) = settings.credentials()? {
            builder = builder.with_credentials(credentials);
        }
        let inner = builder.build().await.map_err(|e| {
            CoreError::Config(format!("Failed to build Parameter Manager client: {}", e))
        })?;
        Ok(Self { inner })
    }
}

#[async_trait]
impl ParameterManager for ParameterManagerClient {
    async fn get_parameter_version(
        &self,
        request: GetParameterVersionRequest,
    ) -> Result<ParameterVersion> {
        let version = self
            .inner
            .get_parameter_version()
            .set_name(request.name)
            .send()
            .await
            .map_err(|e| RemoteError::from_sdk("GetParameterVersion", e))?;
        Ok(version.into())
    }

    async fn update_parameter_version(
        &self,
        request: UpdateParameterVersionRequest,
    ) -> Result<ParameterVersion> {
        let version = self
            .inner
            .update_parameter_version()
            .set_parameter_version(request.wire_version())
            .set_update_mask(google_cloud_wkt::FieldMask::from(request.update_mask))
            .send()
            .await
            .map_err(|e| RemoteError::from_sdk("UpdateParameterVersion", e))?;
        Ok(version.into())
    }
}

/// Endpoint override for `location`; `None` keeps the library default
///
/// A configured endpoint always wins over the regional one.
fn endpoint_for(settings: &ClientSettings, location: &str) -> Option<String> {
    match &settings.endpoint {
        Some(endpoint) => Some(endpoint.clone()),
        None if location != GLOBAL_LOCATION => Some(regional_endpoint(location)),
        None => None,
    }
}

fn regional_endpoint(location: &str) -> String {
    format!("https://parametermanager.{}.rep.googleapis.com", location)
}
