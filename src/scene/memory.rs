//! In-memory scene provider.
//!
//! This is the reference implementation of `SceneProvider`: a flat list of
//! waypoints in insertion order plus the set of waypoints whose visuals were
//! hidden.
//!
//! ## Limitations
//!
//! - **Destroy leaves dangling links**: `destroy()` drops the waypoint from
//!   the scan but neighbor lists that named it keep the stale id, the same
//!   way a host scene keeps references to deleted entities.
//! - **No visuals**: `hide_visual()` only records the id.

use std::collections::HashSet;

use crate::model::{Vec3, Waypoint, WaypointId};
use crate::{Error, Result};
use super::SceneProvider;

// ============================================================================
// MemoryScene
// ============================================================================

/// In-memory waypoint scene.
#[derive(Debug, Clone, Default)]
pub struct MemoryScene {
    waypoints: Vec<Waypoint>,
    hidden: HashSet<WaypointId>,
    next_id: u64,
}

impl MemoryScene {
    pub fn new() -> Self {
        Self {
            waypoints: Vec::new(),
            hidden: HashSet::new(),
            next_id: 1,
        }
    }

    /// Add a waypoint with no neighbors. Returns its fresh id.
    pub fn add_waypoint(&mut self, name: impl Into<String>, position: Vec3) -> WaypointId {
        let id = self.fresh_id();
        self.next_id = self.next_id.max(id.0.saturating_add(1));
        self.waypoints.push(Waypoint::new(id, name, position));
        id
    }

    /// Insert a fully-formed waypoint, keeping its id.
    ///
    /// Fails with `Error::Scene` if the id is already present.
    pub fn insert(&mut self, waypoint: Waypoint) -> Result<()> {
        if self.contains(waypoint.id) {
            return Err(Error::Scene(format!("duplicate waypoint id {}", waypoint.id)));
        }
        self.next_id = self.next_id.max(waypoint.id.0.saturating_add(1));
        self.waypoints.push(waypoint);
        Ok(())
    }

    /// Next id from the counter, or the lowest free id once the counter
    /// has saturated.
    fn fresh_id(&self) -> WaypointId {
        let next = WaypointId(self.next_id.max(1));
        if !self.contains(next) {
            return next;
        }
        (1..u64::MAX)
            .map(WaypointId)
            .find(|id| !self.contains(*id))
            .unwrap_or(next)
    }

    pub fn contains(&self, id: WaypointId) -> bool {
        self.waypoints.iter().any(|w| w.id == id)
    }

    /// Link two waypoints in both directions.
    pub fn link(&mut self, a: WaypointId, b: WaypointId) {
        self.link_one_way(a, b);
        self.link_one_way(b, a);
    }

    /// Make `to` a neighbor of `from` only.
    pub fn link_one_way(&mut self, from: WaypointId, to: WaypointId) {
        if let Some(wp) = self.get_mut(from) {
            wp.neighbors.push(Some(to));
        }
    }

    /// Remove every link between two waypoints, in both directions.
    pub fn unlink(&mut self, a: WaypointId, b: WaypointId) {
        if let Some(wp) = self.get_mut(a) {
            wp.neighbors.retain(|n| *n != Some(b));
        }
        if let Some(wp) = self.get_mut(b) {
            wp.neighbors.retain(|n| *n != Some(a));
        }
    }

    /// Append an unset neighbor slot to a waypoint.
    pub fn add_missing_neighbor(&mut self, id: WaypointId) {
        if let Some(wp) = self.get_mut(id) {
            wp.neighbors.push(None);
        }
    }

    /// Remove a waypoint from the scene. Returns true if it existed.
    pub fn destroy(&mut self, id: WaypointId) -> bool {
        let before = self.waypoints.len();
        self.waypoints.retain(|w| w.id != id);
        self.hidden.remove(&id);
        self.waypoints.len() != before
    }

    pub fn get(&self, id: WaypointId) -> Option<&Waypoint> {
        self.waypoints.iter().find(|w| w.id == id)
    }

    fn get_mut(&mut self, id: WaypointId) -> Option<&mut Waypoint> {
        self.waypoints.iter_mut().find(|w| w.id == id)
    }

    pub fn len(&self) -> usize {
        self.waypoints.len()
    }

    pub fn is_empty(&self) -> bool {
        self.waypoints.is_empty()
    }

    pub fn is_hidden(&self, id: WaypointId) -> bool {
        self.hidden.contains(&id)
    }

    pub fn hidden_count(&self) -> usize {
        self.hidden.len()
    }
}

// ============================================================================
// SceneProvider impl
// ============================================================================

impl SceneProvider for MemoryScene {
    fn waypoints(&self) -> Vec<Waypoint> {
        self.waypoints.clone()
    }

    fn hide_visual(&mut self, id: WaypointId) {
        self.hidden.insert(id);
    }
}

// ============================================================================
// Tests
// ============================================================================
