//! # waypoint-nav: Waypoint-Graph Wayfinding
//!
//! Guides a user through a physical space: named locations on a predefined
//! waypoint graph, the shortest walkable route between two of them, and the
//! hand-off of that route to whatever draws it and animates a traveler
//! along it.
//!
//! ## Design Principles
//!
//! 1. **Trait-first seams**: `SceneProvider` is the contract with the host
//!    scene, the delivery traits are the contract with its renderers
//! 2. **One key form**: every name goes through `WaypointKey::normalize`
//! 3. **Synchronous core**: lookup, solve and delivery finish within one call
//! 4. **Ticked animation**: the traveler is a state machine the host advances
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use waypoint_nav::{MemoryScene, NavigationSession, NavigatorConfig, PathDelivery, SceneRecorder, Vec3};
//!
//! # fn example() -> waypoint_nav::Result<()> {
//! let mut scene = MemoryScene::new();
//! let gate = scene.add_waypoint("Main Gate", Vec3::ZERO);
//! let lib = scene.add_waypoint("Lib2", Vec3::new(4.0, 0.0, 3.0));
//! scene.link(gate, lib);
//!
//! let config = NavigatorConfig::default();
//! let recorder = SceneRecorder::new();
//! let delivery = PathDelivery::recording(&config, &recorder);
//! let mut session = NavigationSession::new(&mut scene, config, delivery)?;
//!
//! let outcome = session.request_navigation("main gate", "LIB2")?;
//! println!("{} stops, {:.1} m", outcome.path.len(), outcome.path.length());
//!
//! // Once per frame
//! while let Some(update) = session.tick(1.0 / 60.0) {
//!     if update.state.is_finished() {
//!         break;
//!     }
//! }
//! # Ok(())
//! # }
//! ```
//!
//! ## Scene Providers
//!
//! | Provider | Description |
//! |----------|-------------|
//! | `MemoryScene` | In-memory scene for testing/embedding |
//! | `SceneDocument` | JSON scene description, loads into a `MemoryScene` |

// ============================================================================
// Modules
// ============================================================================

pub mod model;
pub mod config;
pub mod scene;
pub mod graph;
pub mod delivery;
pub mod animation;
pub mod session;
pub mod launch;

// ============================================================================
// Re-exports: Model
// ============================================================================

pub use model::{Path, Vec3, Waypoint, WaypointId, WaypointKey};

// ============================================================================
// Re-exports: Scene, graph, delivery
// ============================================================================

pub use config::{NavigatorConfig, PinConfig, PreviewConfig, RouteStyle, TravelerConfig};
pub use scene::{MemoryScene, SceneDocument, SceneProvider};
pub use graph::{GraphBuildReport, WaypointGraph};
pub use delivery::{
    DeliveryReport, ObserverRig, PathDelivery, PinRenderer, RouteRenderer,
    SceneRecorder, TravelerRenderer,
};

// ============================================================================
// Re-exports: Session
// ============================================================================

pub use animation::{CancellationToken, TravelState, TravelUpdate, Traveler};
pub use session::{NavigationOutcome, NavigationSession};
pub use launch::{LaunchParameters, StaticLaunch, apply_launch_destination};

// ============================================================================
// Error Types
// ============================================================================

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Start or end waypoint not found: '{key}'")]
    WaypointNotFound { key: String },

    #[error("No route from '{start}' to '{destination}'")]
    RouteUnreachable { start: String, destination: String },

    #[error("Missing collaborator: {0}")]
    MissingCollaborator(&'static str),

    #[error("{consumer} failed: {message}")]
    Collaborator { consumer: String, message: String },

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Scene error: {0}")]
    Scene(String),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
