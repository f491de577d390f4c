//! A named, positioned node of the walkable graph.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::{Vec3, WaypointKey};

/// Opaque identity of a discovered waypoint entity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct WaypointId(pub u64);

impl std::fmt::Display for WaypointId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A waypoint as authored in the scene.
///
/// Neighbor links are directed: `a` listing `b` does not imply `b` lists `a`.
/// A `None` entry is a reference whose target was destroyed or never set.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Waypoint {
    pub id: WaypointId,
    /// Name exactly as authored (not normalized).
    pub name: String,
    pub position: Vec3,
    #[serde(default)]
    pub neighbors: SmallVec<[Option<WaypointId>; 4]>,
}

impl Waypoint {
    pub fn new(id: WaypointId, name: impl Into<String>, position: Vec3) -> Self {
        Self {
            id,
            name: name.into(),
            position,
            neighbors: SmallVec::new(),
        }
    }

    pub fn with_neighbor(mut self, neighbor: WaypointId) -> Self {
        self.neighbors.push(Some(neighbor));
        self
    }

    /// Append an unset neighbor slot.
    pub fn with_missing_neighbor(mut self) -> Self {
        self.neighbors.push(None);
        self
    }

    /// Lookup key for this waypoint, `None` for blank names.
    pub fn key(&self) -> Option<WaypointKey> {
        WaypointKey::normalize(&self.name)
    }

    /// Neighbor ids that are still set.
    pub fn linked(&self) -> impl Iterator<Item = WaypointId> + '_ {
        self.neighbors.iter().flatten().copied()
    }
}
