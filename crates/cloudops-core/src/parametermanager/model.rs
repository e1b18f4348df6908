//! Parameter Manager values as the operations see them
//!
//! The client library types are converted at the client boundary so the
//! operations and their test doubles never depend on them.

use crate::field_mask::FieldMask;
use crate::names::ParameterVersionName;
use google_cloud_parametermanager_v1::model as wire;
use serde::Serialize;

/// A single version of a parameter
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ParameterVersion {
    /// Full resource name
    pub name: String,
    /// Disabled versions are never served, and their payload is withheld
    pub disabled: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub payload: Option<ParameterVersionPayload>,
}

impl ParameterVersion {
    /// Human-readable state, as printed by the CLI
    pub fn state(&self) -> &'static str {
        if self.disabled { "disabled" } else { "enabled" }
    }
}

impl From<wire::ParameterVersion> for ParameterVersion {
    fn from(version: wire::ParameterVersion) -> Self {
        Self {
            name: version.name,
            disabled: version.disabled,
            payload: version.payload.map(|p| ParameterVersionPayload::new(p.data.to_vec())),
        }
    }
}

/// Payload bytes, base64-encoded in JSON and YAML output
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ParameterVersionPayload {
    #[serde(serialize_with = "base64_bytes")]
    pub data: Vec<u8>,
}

impl ParameterVersionPayload {
    pub fn new(data: impl Into<Vec<u8>>) -> Self {
        Self { data: data.into() }
    }

    /// Payload as text; invalid UTF-8 is replaced rather than rejected
    pub fn as_text(&self) -> String {
        String::from_utf8_lossy(&self.data).into_owned()
    }
}

fn base64_bytes<S: serde::Serializer>(bytes: &[u8], serializer: S) -> Result<S::Ok, S::Error> {
    use base64::{Engine, engine::general_purpose::STANDARD};
    serializer.serialize_str(&STANDARD.encode(bytes))
}

/// Get one parameter version
#[derive(Debug, Clone, PartialEq)]
pub struct GetParameterVersionRequest {
    pub name: String,
}

impl GetParameterVersionRequest {
    pub fn new(name: &ParameterVersionName) -> Self {
        Self {
            name: name.to_string(),
        }
    }
}

/// Update the fields of `parameter_version` listed in `update_mask`
#[derive(Debug, Clone, PartialEq)]
pub struct UpdateParameterVersionRequest {
    pub parameter_version: ParameterVersion,
    pub update_mask: FieldMask,
}

impl UpdateParameterVersionRequest {
    /// The resource sent with the update; only masked fields are meaningful
    pub(crate) fn wire_version(&self) -> wire::ParameterVersion {
        wire::ParameterVersion::new()
            .set_name(self.parameter_version.name.clone())
            .set_disabled(self.parameter_version.disabled)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn test_from_wire_enabled_version_with_payload() {
        let version: ParameterVersion = wire::ParameterVersion::new()
            .set_name("projects/p1/locations/global/parameters/param1/versions/v1")
            .set_payload(wire::ParameterVersionPayload::new().set_data("hello"))
            .into();

        assert_eq!(
            version.name,
            "projects/p1/locations/global/parameters/param1/versions/v1"
        );
        assert!(!version.disabled);
        assert_eq!(version.state(), "enabled");
        assert_eq!(version.payload.unwrap().as_text(), "hello");
    }

    #[test]
    fn test_from_wire_disabled_version_without_payload() {
        let version: ParameterVersion = wire::ParameterVersion::new()
            .set_name("n")
            .set_disabled(true)
            .into();
        assert!(version.disabled);
        assert_eq!(version.state(), "disabled");
        assert!(version.payload.is_none());
    }

    #[test]
    fn test_update_carries_only_name_and_flag() {
        let request = UpdateParameterVersionRequest {
            parameter_version: ParameterVersion {
                name: "projects/p1/locations/global/parameters/param1/versions/v1".to_string(),
                disabled: true,
                payload: Some(ParameterVersionPayload::new("ignored")),
            },
            update_mask: FieldMask::new(["disabled"]),
        };
        let wire = request.wire_version();
        assert_eq!(
            wire.name,
            "projects/p1/locations/global/parameters/param1/versions/v1"
        );
        assert!(wire.disabled);
        assert!(wire.payload.is_none());
    }

    #[test]
    fn test_output_encodes_payload_as_base64() {
        let version = ParameterVersion {
            name: "n".to_string(),
            disabled: false,
            payload: Some(ParameterVersionPayload::new("hello")),
        };
        assert_eq!(
            serde_json::to_value(&version).unwrap(),
            json!({ "name": "n", "disabled": false, "payload": { "data": "aGVsbG8=" } })
        );
    }

    #[test]
    fn test_invalid_utf8_payload_is_replaced() {
        let payload = ParameterVersionPayload::new(vec![0x68, 0x69, 0xff]);
        assert_eq!(payload.as_text(), "hi\u{fffd}");
    }
}
