//! # Scene Provider Trait
//!
//! The contract between the navigation core and whatever hosts the waypoint
//! entities. The core asks once, at startup, for every waypoint in the
//! active scene; it never subscribes to changes.
//!
//! ## Implementations
//!
//! | Provider | Module | Description |
//! |----------|--------|-------------|
//! | `MemoryScene` | `memory` | In-memory scene for testing/embedding |
//! | `SceneDocument` | `document` | JSON scene description, loads into a `MemoryScene` |

pub mod document;
pub mod memory;

use crate::model::{Waypoint, WaypointId};

pub use document::SceneDocument;
pub use memory::MemoryScene;

/// Entity discovery for the graph builder.
pub trait SceneProvider {
    /// Every waypoint present in the scene, in discovery order.
    ///
    /// Discovery order decides which waypoint wins when two names normalize
    /// to the same key.
    fn waypoints(&self) -> Vec<Waypoint>;

    /// Suppress the visuals attached to a waypoint. Graph nodes are logical
    /// markers, not scene furniture.
    fn hide_visual(&mut self, id: WaypointId);
}

impl<S: SceneProvider + ?Sized> SceneProvider for &mut S {
    fn waypoints(&self) -> Vec<Waypoint> {
        (**self).waypoints()
    }

    fn hide_visual(&mut self, id: WaypointId) {
        (**self).hide_visual(id)
    }
}
