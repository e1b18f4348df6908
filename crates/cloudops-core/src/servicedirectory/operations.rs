//! Namespace operations

use super::client::RegistrationService;
use super::model::{CreateNamespaceRequest, DeleteNamespaceRequest, Namespace};
use crate::error::Result;
use crate::names::{LocationName, NamespaceName, ensure_addressable};
use crate::report::Report;
use serde::Serialize;
use std::io;
use tracing::info;

/// Outcome of [`create_namespace`]
#[derive(Debug, Clone, Serialize)]
pub struct NamespaceCreated {
    pub namespace: Namespace,
}

impl Report for NamespaceCreated {
    fn write_text(&self, out: &mut dyn io::Write) -> io::Result<()> {
        writeln!(out, "Created Namespace: {}", self.namespace.name)
    }
}

/// Outcome of [`delete_namespace`]
#[derive(Debug, Clone, Serialize)]
pub struct NamespaceDeleted {
    pub name: String,
}

impl Report for NamespaceDeleted {
    fn write_text(&self, out: &mut dyn io::Write) -> io::Result<()> {
        writeln!(out, "Deleted Namespace: {}", self.name)
    }
}

/// Create an empty namespace under `projects/{project}/locations/{location}`
///
/// The printed name is whatever the service returns, not one built locally.
pub async fn create_namespace<C: RegistrationService + ?Sized>(
    client: &C,
    project_id: &str,
    location_id: &str,
    namespace_id: &str,
) -> Result<NamespaceCreated> {
    ensure_addressable(&[project_id, location_id, namespace_id])?;
    let parent = LocationName::new(project_id, location_id);
    info!("Creating namespace {} under {}", namespace_id, parent);

    let namespace = client
        .create_namespace(CreateNamespaceRequest::new(
            &parent,
            namespace_id,
            Namespace::default(),
        ))
        .await?;

    Ok(NamespaceCreated { namespace })
}

/// Delete a namespace and everything registered in it
pub async fn delete_namespace<C: RegistrationService + ?Sized>(
    client: &C,
    project_id: &str,
    location_id: &str,
    namespace_id: &str,
) -> Result<NamespaceDeleted> {
    ensure_addressable(&[project_id, location_id, namespace_id])?;
    let name = NamespaceName::new(project_id, location_id, namespace_id);
    info!("Deleting namespace {}", name);

    client
        .delete_namespace(DeleteNamespaceRequest::new(&name))
        .await?;

    Ok(NamespaceDeleted {
        name: name.to_string(),
    })
}
