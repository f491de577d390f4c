//! JSON scene description.
//!
//! A serialized set of waypoints that loads into a [`MemoryScene`]:
//!
//! ```text
//! {"waypoints": [
//!   {"id": 1, "name": "Main Gate", "position": [0.0, 0.0, 0.0], "neighbors": [2]},
//!   {"id": 2, "name": "Lib2",      "position": [4.0, 0.0, 3.0], "neighbors": [1, null]}
//! ]}
//! ```
//!
//! `null` neighbor entries are unset references and are kept as such.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::model::Waypoint;
use crate::{Error, Result};
use super::{MemoryScene, SceneProvider};

/// Serializable scene contents.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SceneDocument {
    pub waypoints: Vec<Waypoint>,
}

impl SceneDocument {
    pub fn from_json_str(json: &str) -> Result<Self> {
        let doc: Self = serde_json::from_str(json)?;
        doc.validate()?;
        Ok(doc)
    }

    pub fn from_json_file(path: impl AsRef<std::path::Path>) -> Result<Self> {
        let text = std::fs::read_to_string(path)?;
        Self::from_json_str(&text)
    }

    /// Snapshot any provider's current waypoints.
    pub fn from_provider(provider: &dyn SceneProvider) -> Self {
        Self { waypoints: provider.waypoints() }
    }

    pub fn to_json_string(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Entity ids must be unique; names may repeat.
    pub fn validate(&self) -> Result<()> {
        let mut seen = HashSet::new();
        for wp in &self.waypoints {
            if !seen.insert(wp.id) {
                return Err(Error::Scene(format!("duplicate waypoint id {}", wp.id)));
            }
        }
        Ok(())
    }

    pub fn into_scene(self) -> Result<MemoryScene> {
        let mut scene = MemoryScene::new();
        for wp in self.waypoints {
            scene.insert(wp)?;
        }
        Ok(scene)
    }
}
