//! Cloud Storage values as the operations see them

use google_cloud_storage::model as wire;
use serde::Serialize;

/// Object metadata
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Object {
    pub name: String,
    pub bucket: String,
    pub generation: i64,
    pub metageneration: i64,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub content_type: String,
    pub size: i64,
}

impl From<wire::Object> for Object {
    fn from(object: wire::Object) -> Self {
        Self {
            name: object.name,
            bucket: object.bucket,
            generation: object.generation,
            metageneration: object.metageneration,
            content_type: object.content_type,
            size: object.size,
        }
    }
}

/// Restore the soft-deleted `generation` of `object` in `bucket`
#[derive(Debug, Clone, PartialEq)]
pub struct RestoreObjectRequest {
    /// Bare bucket id, e.g. `my-bucket`
    pub bucket: String,
    pub object: String,
    pub generation: i64,
}

impl RestoreObjectRequest {
    /// Bucket in the `projects/_/buckets/{bucket}` form the API expects
    pub fn bucket_resource(&self) -> String {
        format!("projects/_/buckets/{}", self.bucket)
    }
}
