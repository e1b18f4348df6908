//! Service Directory registration client trait and its implementation

use super::model::{CreateNamespaceRequest, DeleteNamespaceRequest, Namespace};
use crate::error::{CoreError, RemoteError, Result};
use crate::settings::ClientSettings;
use async_trait::async_trait;
use google_cloud_servicedirectory_v1::client::RegistrationService as RegistrationServiceApi;
use google_cloud_servicedirectory_v1::model as wire;

/// Calls the operations in this crate need from the registration service
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait RegistrationService: Send + Sync {
    async fn create_namespace(&self, request: CreateNamespaceRequest) -> Result<Namespace>;

    async fn delete_namespace(&self, request: DeleteNamespaceRequest) -> Result<()>;
}

/// [`RegistrationService`] backed by `google-cloud-servicedirectory-v1`
pub struct RegistrationServiceClient {
    inner: RegistrationServiceApi,
}

impl RegistrationServiceClient {
    pub async fn new(settings: &ClientSettings) -> Result<Self> {
        let mut builder = RegistrationServiceApi::builder();
        if let Some(endpoint) = &settings.endpoint {
            builder = builder.with_endpoint(endpoint.clone());
        }
        if let Some(credentials) = settings.credentials()? {
            builder = builder.with_credentials(credentials);
        }
        let inner = builder.build().await.map_err(|e| {
            CoreError::Config(format!("Failed to build Service Directory client: {}", e))
        })?;
        Ok(Self { inner })
    }
}

#[async_trait]
impl RegistrationService for RegistrationServiceClient {
    async fn create_namespace(&self, request: CreateNamespaceRequest) -> Result<Namespace> {
        let namespace = self
            .inner
            .create_namespace()
            .set_parent(request.parent)
            .set_namespace_id(request.namespace_id)
            .set_namespace(wire::Namespace::from(request.namespace))
            .send()
            .await
            .map_err(|e| RemoteError::from_sdk("CreateNamespace", e))?;
        Ok(namespace.into())
    }

    async fn delete_namespace(&self, request: DeleteNamespaceRequest) -> Result<()> {
        self.inner
            .delete_namespace()
            .set_name(request.name)
            .send()
            .await
            .map_err(|e| RemoteError::from_sdk("DeleteNamespace", e))?;
        Ok(())
    }
}
