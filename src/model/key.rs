//! Normalized lookup keys for waypoint names.

use serde::{Deserialize, Serialize};

/// Canonical lookup key for a location name.
///
/// The only way to obtain one is [`WaypointKey::normalize`], so every key in
/// the system went through the same normalization: registration, navigation
/// requests and the solver all compare the same form. Deserialization
/// normalizes as well.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct WaypointKey(String);

impl WaypointKey {
    /// Trim, lower-case, and join internal spaces with underscores.
    ///
    /// Blank input has no key; lookups with it fail as "not found".
    pub fn normalize(raw: &str) -> Option<Self> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return None;
        }
        Some(Self(trimmed.to_lowercase().replace(' ', "_")))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for WaypointKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl TryFrom<String> for WaypointKey {
    type Error = crate::Error;

    fn try_from(raw: String) -> crate::Result<Self> {
        Self::normalize(&raw).ok_or(crate::Error::WaypointNotFound { key: raw })
    }
}

impl From<WaypointKey> for String {
    fn from(key: WaypointKey) -> Self {
        key.0
    }
}

impl AsRef<str> for WaypointKey {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
