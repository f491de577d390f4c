//! # Waypoint Model
//!
//! Plain data that crosses every boundary: scene ↔ graph store ↔ solver ↔
//! delivery consumers ↔ traveler animation.
//!
//! Design rule: no renderer handles, no scheduler state here.
//! Pure data: no I/O or async.

pub mod key;
pub mod path;
pub mod vector;
pub mod waypoint;

pub use key::WaypointKey;
pub use path::Path;
pub use vector::{Vec3, distance, move_towards};
pub use waypoint::{Waypoint, WaypointId};
