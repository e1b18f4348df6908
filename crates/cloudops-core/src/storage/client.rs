//! Cloud Storage client trait and its implementation over the control-plane client

use super::model::{Object, RestoreObjectRequest};
use crate::error::{CoreError, RemoteError, Result};
use crate::settings::ClientSettings;
use async_trait::async_trait;
use google_cloud_storage::client::StorageControl;

/// Calls the operations in this crate need from Cloud Storage
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait Storage: Send + Sync {
    async fn restore_object(&self, request: RestoreObjectRequest) -> Result<Object>;
}

/// [`Storage`] backed by the `StorageControl` client of `google-cloud-storage`
pub struct StorageClient {
    inner: StorageControl,
}

impl StorageClient {
    pub async fn new(settings: &ClientSettings) -> Result<Self> {
        let mut builder = StorageControl::builder();
        if let Some(endpoint) = &settings.endpoint {
            builder = builder.with_endpoint(endpoint.clone());
        }
        if let Some(credentials) = settings.credentials()? {
            builder = builder.with_credentials(credentials);
        }
        let inner = builder
            .build()
            .await
            .map_err(|e| CoreError::Config(format!("Failed to build Storage client: {}", e)))?;
        Ok(Self { inner })
    }
}

#[async_trait]
impl Storage for StorageClient {
    async fn restore_object(&self, request: RestoreObjectRequest) -> Result<Object> {
        let object = self
            .inner
            .restore_object()
            .set_bucket(request.bucket_resource())
            .set_object(request.object)
            .set_generation(request.generation)
            .send()
            .await
            .map_err(|e| RemoteError::from_sdk("RestoreObject", e))?;
        Ok(object.into())
    }
}
