//! Dijkstra's shortest path over the waypoint graph.
//!
//! Edge weights are the Euclidean distance between neighbor positions,
//! computed on the fly from each node's neighbor list. The frontier is a
//! binary heap ordered by `(distance, registration index)`, so equal-cost
//! candidates always resolve the same way for a fixed graph.

use std::cmp::Ordering;
use std::collections::BinaryHeap;

use crate::model::distance;
use super::WaypointGraph;

/// Frontier entry.
#[derive(Clone, Copy, Debug)]
pub struct DijkstraState {
    /// Best known cumulative distance when pushed.
    pub cost: f32,
    /// Node index in the graph.
    pub node: usize,
}

impl PartialEq for DijkstraState {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for DijkstraState {}

impl Ord for DijkstraState {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reversed for a min-heap; lower index wins ties.
        other
            .cost
            .total_cmp(&self.cost)
            .then_with(|| other.node.cmp(&self.node))
    }
}

impl PartialOrd for DijkstraState {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Result of a successful search.
#[derive(Clone, Debug)]
pub struct DijkstraResult {
    /// Node indices from start to goal, both inclusive.
    pub path: Vec<usize>,
    /// Total path distance.
    pub distance: f32,
}

/// Find the minimum-distance route from `start` to `goal`.
///
/// Returns `None` when the goal is unreachable or either index is out of
/// range. `start == goal` yields the single-node route.
///
/// The search stops as soon as the goal is taken off the frontier; its
/// distance is final at that point.
pub fn shortest_path(graph: &WaypointGraph, start: usize, goal: usize) -> Option<DijkstraResult> {
    let n = graph.len();

    if n == 0 || start >= n || goal >= n {
        return None;
    }

    if start == goal {
        return Some(DijkstraResult {
            path: vec![start],
            distance: 0.0,
        });
    }

    let mut dist: Vec<f32> = vec![f32::INFINITY; n];
    let mut prev: Vec<Option<usize>> = vec![None; n];
    let mut done: Vec<bool> = vec![false; n];
    dist[start] = 0.0;

    let mut heap = BinaryHeap::new();
    heap.push(DijkstraState {
        cost: 0.0,
        node: start,
    });

    while let Some(DijkstraState { cost, node }) = heap.pop() {
        // Stale entry
        if done[node] || cost > dist[node] {
            continue;
        }
        done[node] = true;

        if node == goal {
            break;
        }

        let here = graph.nodes[node].position;
        for neighbor in graph.neighbors(node) {
            if done[neighbor] {
                continue;
            }
            let candidate = dist[node] + distance(here, graph.nodes[neighbor].position);
            if candidate < dist[neighbor] {
                dist[neighbor] = candidate;
                prev[neighbor] = Some(node);
                heap.push(DijkstraState {
                    cost: candidate,
                    node: neighbor,
                });
            }
        }
    }

    prev[goal]?;

    // Walk predecessors back from the goal
    let mut path = Vec::new();
    let mut current = goal;
    while current != start {
        path.push(current);
        current = prev[current]?;
    }
    path.push(start);
    path.reverse();

    Some(DijkstraResult {
        path,
        distance: dist[goal],
    })
}
