//! The ordered waypoints of one resolved route.

use serde::{Deserialize, Serialize};

use super::{Vec3, Waypoint, distance};

/// A route from start (inclusive) to destination (inclusive).
///
/// An empty path is the "no route" value. Paths are built fresh per request
/// and consumed read-only by the delivery consumers and the traveler.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Path {
    pub waypoints: Vec<Waypoint>,
}

impl Path {
    pub fn empty() -> Self {
        Self { waypoints: Vec::new() }
    }

    pub fn new(waypoints: Vec<Waypoint>) -> Self {
        Self { waypoints }
    }

    pub fn is_empty(&self) -> bool {
        self.waypoints.is_empty()
    }

    /// Number of waypoints.
    pub fn len(&self) -> usize {
        self.waypoints.len()
    }

    /// Number of legs between consecutive waypoints.
    pub fn segment_count(&self) -> usize {
        self.waypoints.len().saturating_sub(1)
    }

    pub fn start(&self) -> Option<&Waypoint> {
        self.waypoints.first()
    }

    pub fn destination(&self) -> Option<&Waypoint> {
        self.waypoints.last()
    }

    /// Waypoint positions in traversal order.
    pub fn positions(&self) -> Vec<Vec3> {
        self.waypoints.iter().map(|w| w.position).collect()
    }

    /// Cumulative Euclidean length.
    pub fn length(&self) -> f32 {
        self.waypoints
            .windows(2)
            .map(|pair| distance(pair[0].position, pair[1].position))
            .sum()
    }

    /// Waypoint names in traversal order, as authored.
    pub fn names(&self) -> Vec<&str> {
        self.waypoints.iter().map(|w| w.name.as_str()).collect()
    }
}
