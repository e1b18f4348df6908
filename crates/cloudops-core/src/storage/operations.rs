//! Object operations

use super::client::Storage;
use super::model::{Object, RestoreObjectRequest};
use crate::error::{CoreError, Result};
use crate::names::ObjectName;
use crate::report::Report;
use serde::Serialize;
use std::io;
use tracing::info;

/// Outcome of [`restore_soft_deleted_object`]
#[derive(Debug, Clone, Serialize)]
pub struct ObjectRestored {
    pub object_name: String,
    pub object: Object,
}

impl Report for ObjectRestored {
    fn write_text(&self, out: &mut dyn io::Write) -> io::Result<()> {
        writeln!(out, "Soft deleted object {} was restored.", self.object_name)
    }
}

/// Restore a soft-deleted generation of an object
///
/// `generation` is taken as text and must parse as a signed 64-bit integer.
pub async fn restore_soft_deleted_object<C: Storage + ?Sized>(
    client: &C,
    bucket_name: &str,
    object_name: &str,
    generation: &str,
) -> Result<ObjectRestored> {
    let generation = parse_generation(generation)?;
    info!(
        "Restoring {} at generation {}",
        ObjectName::new(bucket_name, object_name),
        generation
    );

    let object = client
        .restore_object(RestoreObjectRequest {
            bucket: bucket_name.to_string(),
            object: object_name.to_string(),
            generation,
        })
        .await?;

    Ok(ObjectRestored {
        object_name: object_name.to_string(),
        object,
    })
}

/// Parse a generation given as text
pub fn parse_generation(generation: &str) -> Result<i64> {
    generation.trim().parse().map_err(|_| {
        CoreError::InvalidArgument(format!(
            "generation must be an integer, got '{}'",
            generation
        ))
    })
}
