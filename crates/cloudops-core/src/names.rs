//! Resource-name builders
//!
//! Pure formatting of hierarchical resource names. Each id is percent-encoded
//! as a single path segment, so `#`, `?` or `/` inside an id cannot change
//! which resource the name points at. Beyond that nothing is validated; a
//! malformed name is rejected by the remote service.

use crate::error::{CoreError, Result};
use std::fmt;
use urlencoding::encode;

/// Location segment used by parameters that are not regional
pub const GLOBAL_LOCATION: &str = "global";

/// `projects/{project}/locations/{location}`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocationName {
    pub project: String,
    pub location: String,
}

impl LocationName {
    pub fn new(project: impl Into<String>, location: impl Into<String>) -> Self {
        Self {
            project: project.into(),
            location: location.into(),
        }
    }
}

impl fmt::Display for LocationName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "projects/{}/locations/{}",
            encode(&self.project),
            encode(&self.location)
        )
    }
}

/// `projects/{project}/locations/{location}/parameters/{parameter}`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParameterName {
    pub location: LocationName,
    pub parameter: String,
}

impl ParameterName {
    pub fn new(
        project: impl Into<String>,
        location: impl Into<String>,
        parameter: impl Into<String>,
    ) -> Self {
        Self {
            location: LocationName::new(project, location),
            parameter: parameter.into(),
        }
    }
}

impl fmt::Display for ParameterName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/parameters/{}", self.location, encode(&self.parameter))
    }
}

/// `projects/{project}/locations/{location}/parameters/{parameter}/versions/{version}`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParameterVersionName {
    pub parameter: ParameterName,
    pub version: String,
}

impl ParameterVersionName {
    pub fn new(
        project: impl Into<String>,
        location: impl Into<String>,
        parameter: impl Into<String>,
        version: impl Into<String>,
    ) -> Self {
        Self {
            parameter: ParameterName::new(project, location, parameter),
            version: version.into(),
        }
    }

    /// The parameter this version belongs to
    pub fn parameter(&self) -> &ParameterName {
        &self.parameter
    }

    /// Location segment, used to pick a regional endpoint
    pub fn location(&self) -> &str {
        &self.parameter.location.location
    }
}

impl fmt::Display for ParameterVersionName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/versions/{}", self.parameter, encode(&self.version))
    }
}

/// `projects/{project}/locations/{location}/namespaces/{namespace}`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NamespaceName {
    pub location: LocationName,
    pub namespace: String,
}

impl NamespaceName {
    pub fn new(
        project: impl Into<String>,
        location: impl Into<String>,
        namespace: impl Into<String>,
    ) -> Self {
        Self {
            location: LocationName::new(project, location),
            namespace: namespace.into(),
        }
    }

    pub fn parent(&self) -> &LocationName {
        &self.location
    }
}

impl fmt::Display for NamespaceName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/namespaces/{}", self.location, encode(&self.namespace))
    }
}

/// Reject ids that would collapse as `.`/`..` dot segments in a request path
///
/// Percent-encoding cannot help here since `%2E` is still a dot segment.
pub fn ensure_addressable(ids: &[&str]) -> Result<()> {
    match ids.iter().find(|id| matches!(**id, "." | "..")) {
        Some(id) => Err(CoreError::InvalidArgument(format!(
            "'{}' cannot be used as a resource id",
            id
        ))),
        None => Ok(()),
    }
}

/// `projects/_/buckets/{bucket}/objects/{object}`
///
/// Storage addresses bucket and object as separate request fields; this form
/// is only used in logs and is left unencoded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ObjectName {
    pub bucket: String,
    pub object: String,
}

impl ObjectName {
    pub fn new(bucket: impl Into<String>, object: impl Into<String>) -> Self {
        Self {
            bucket: bucket.into(),
            object: object.into(),
        }
    }
}

impl fmt::Display for ObjectName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "projects/_/buckets/{}/objects/{}", self.bucket, self.object)
    }
}
