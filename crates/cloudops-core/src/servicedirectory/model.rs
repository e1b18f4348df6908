//! Service Directory values as the operations see them

use crate::names::{LocationName, NamespaceName};
use google_cloud_servicedirectory_v1::model as wire;
use serde::Serialize;
use std::collections::BTreeMap;

/// A namespace groups services within a project and region
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Namespace {
    /// Assigned by the service; left empty on create
    pub name: String,
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub labels: BTreeMap<String, String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub uid: Option<String>,
}

impl From<wire::Namespace> for Namespace {
    fn from(namespace: wire::Namespace) -> Self {
        Self {
            name: namespace.name,
            labels: namespace.labels.into_iter().collect(),
            uid: Some(namespace.uid).filter(|uid| !uid.is_empty()),
        }
    }
}

impl From<Namespace> for wire::Namespace {
    fn from(namespace: Namespace) -> Self {
        wire::Namespace::new()
            .set_name(namespace.name)
            .set_labels(namespace.labels)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct CreateNamespaceRequest {
    /// `projects/{project}/locations/{location}`
    pub parent: String,
    pub namespace_id: String,
    pub namespace: Namespace,
}

impl CreateNamespaceRequest {
    pub fn new(
        parent: &LocationName,
        namespace_id: impl Into<String>,
        namespace: Namespace,
    ) -> Self {
        Self {
            parent: parent.to_string(),
            namespace_id: namespace_id.into(),
            namespace,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct DeleteNamespaceRequest {
    pub name: String,
}

impl DeleteNamespaceRequest {
    pub fn new(name: &NamespaceName) -> Self {
        Self {
            name: name.to_string(),
        }
    }
}
