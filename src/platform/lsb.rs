use serde::{Deserialize, Serialize};

/// Distribution identity reported by the host's LSB subsystem.
///
/// Sourced upstream (typically from `lsb_release`) before detection runs.
/// An empty descriptor means LSB information was unavailable and the
/// detector falls back to well-known release files.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LsbDescriptor {
    pub id: Option<String>,
    pub release: Option<String>,
}

impl LsbDescriptor {
    pub fn new(id: impl Into<String>, release: impl Into<String>) -> Self {
        Self {
            id: Some(id.into()),
            release: Some(release.into()),
        }
    }

    /// Descriptor to pass when no LSB data is available.
    pub fn empty() -> Self {
        Self::default()
    }
}
