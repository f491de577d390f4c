//! # Waypoint Graph Store
//!
//! Maps normalized location names to waypoints. Built once from a
//! [`SceneProvider`] scan and read-only afterwards; rebuilding means a fresh
//! scan.
//!
//! Registration rules:
//!
//! - blank names are skipped silently, they never get a key
//! - the first waypoint to claim a key keeps it, later ones are dropped
//! - every waypoint with a name has its visuals hidden, dropped ones included
//!
//! Neighbor links are resolved lazily by id during a solve. Links to
//! waypoints that are not registered (destroyed, blank, shadowed) resolve to
//! nothing and are skipped.

pub mod dijkstra;

use hashbrown::HashMap;

use crate::model::{Path, Waypoint, WaypointId, WaypointKey};
use crate::scene::SceneProvider;
use crate::{Error, Result};

pub use dijkstra::{DijkstraResult, DijkstraState, shortest_path};

// ============================================================================
// Build report
// ============================================================================

/// What happened during the one-shot scene scan.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct GraphBuildReport {
    /// Waypoints discovered in the scene.
    pub scanned: usize,
    /// Waypoints reachable by key.
    pub registered: usize,
    /// Waypoints with a blank name.
    pub skipped_blank: usize,
    /// Waypoints whose key was already taken.
    pub shadowed: usize,
    /// Waypoints whose visuals were hidden.
    pub hidden: usize,
}

// ============================================================================
// WaypointGraph
// ============================================================================

/// Read-only waypoint lookup table plus the adjacency it implies.
#[derive(Debug, Clone, Default)]
pub struct WaypointGraph {
    /// Registered waypoints in registration order. Indices are stable.
    nodes: Vec<Waypoint>,
    keys: Vec<WaypointKey>,
    by_key: HashMap<WaypointKey, usize>,
    by_id: HashMap<WaypointId, usize>,
    report: GraphBuildReport,
}

impl WaypointGraph {
    /// Scan the scene and register every named waypoint.
    ///
    /// An empty scene is not an error; every later lookup simply fails.
    pub fn build<S: SceneProvider + ?Sized>(scene: &mut S) -> Self {
        let mut graph = Self::default();
        let discovered = scene.waypoints();
        graph.report.scanned = discovered.len();

        for wp in discovered {
            let Some(key) = wp.key() else {
                graph.report.skipped_blank += 1;
                continue;
            };

            scene.hide_visual(wp.id);
            graph.report.hidden += 1;

            if graph.by_key.contains_key(&key) {
                tracing::warn!(key = %key, id = %wp.id, "duplicate waypoint name, keeping the first one");
                graph.report.shadowed += 1;
                continue;
            }

            let index = graph.nodes.len();
            graph.by_key.insert(key.clone(), index);
            graph.by_id.insert(wp.id, index);
            graph.keys.push(key);
            graph.nodes.push(wp);
        }

        graph.report.registered = graph.nodes.len();
        tracing::info!(
            registered = graph.report.registered,
            hidden = graph.report.hidden,
            "initialized waypoint graph and hid waypoint visuals"
        );
        graph
    }

    /// Exact key match. No fuzzy or partial matching.
    pub fn lookup(&self, key: &WaypointKey) -> Option<&Waypoint> {
        self.index_of(key).map(|i| &self.nodes[i])
    }

    /// Normalize a raw name, then look it up.
    pub fn lookup_name(&self, raw: &str) -> Option<&Waypoint> {
        WaypointKey::normalize(raw).and_then(|key| self.lookup(&key))
    }

    pub fn contains(&self, key: &WaypointKey) -> bool {
        self.by_key.contains_key(key)
    }

    pub fn index_of(&self, key: &WaypointKey) -> Option<usize> {
        self.by_key.get(key).copied()
    }

    pub fn node(&self, index: usize) -> Option<&Waypoint> {
        self.nodes.get(index)
    }

    pub fn key_of(&self, index: usize) -> Option<&WaypointKey> {
        self.keys.get(index)
    }

    /// Registered neighbors of a node, in authored order. Unset and
    /// unregistered references are skipped.
    pub fn neighbors(&self, index: usize) -> impl Iterator<Item = usize> + '_ {
        self.nodes
            .get(index)
            .into_iter()
            .flat_map(|wp| wp.neighbors.iter())
            .filter_map(move |&link| {
                let resolved = link.and_then(|id| self.by_id.get(&id).copied());
                if resolved.is_none() {
                    tracing::debug!(from = index, link = ?link, "skipping absent neighbor");
                }
                resolved
            })
    }

    /// Registered keys in registration order.
    pub fn keys(&self) -> impl Iterator<Item = &WaypointKey> {
        self.keys.iter()
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn report(&self) -> GraphBuildReport {
        self.report
    }

    /// Shortest walkable route between two keys.
    ///
    /// Fails with `WaypointNotFound` when either key is unknown. An
    /// unreachable destination is not an error here: the result is an empty
    /// [`Path`], and the caller decides how to surface it.
    pub fn find_path(&self, start: &WaypointKey, destination: &WaypointKey) -> Result<Path> {
        let from = self.index_of(start).ok_or_else(|| Error::WaypointNotFound {
            key: start.to_string(),
        })?;
        let to = self.index_of(destination).ok_or_else(|| Error::WaypointNotFound {
            key: destination.to_string(),
        })?;

        match shortest_path(self, from, to) {
            Some(result) => {
                tracing::info!(
                    from = %start,
                    to = %destination,
                    nodes = result.path.len(),
                    length = result.distance,
                    "path found"
                );
                Ok(Path::new(result.path.iter().map(|&i| self.nodes[i].clone()).collect()))
            }
            None => {
                tracing::warn!(from = %start, to = %destination, "no path found");
                Ok(Path::empty())
            }
        }
    }
}

// ============================================================================
// Tests
// ============================================================================
