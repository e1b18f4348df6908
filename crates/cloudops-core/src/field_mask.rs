//! Field masks for partial updates

use std::fmt;

/// Set of field paths an update is allowed to modify
///
/// Displayed as a comma-separated list, which is also how it travels as the
/// `updateMask` query value. Paths are not checked locally; the service
/// rejects ones it does not know.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldMask {
    paths: Vec<String>,
}

impl FieldMask {
    pub fn new<I, S>(paths: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            paths: paths.into_iter().map(Into::into).collect(),
        }
    }

    pub fn paths(&self) -> &[String] {
        &self.paths
    }

    pub fn contains(&self, path: &str) -> bool {
        self.paths.iter().any(|p| p == path)
    }

    pub fn is_empty(&self) -> bool {
        self.paths.is_empty()
    }
}

impl fmt::Display for FieldMask {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.paths.join(","))
    }
}

impl From<FieldMask> for google_cloud_wkt::FieldMask {
    fn from(mask: FieldMask) -> Self {
        google_cloud_wkt::FieldMask::default().set_paths(mask.paths)
    }
}
