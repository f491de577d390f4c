//! # Path Delivery
//!
//! Hands a resolved [`Path`] to the rendering collaborators. Consumers run
//! in a fixed order:
//!
//! 1. route visualization (clears the previous route first)
//! 2. destination pin (removes the previous pin first)
//! 3. observer snap to the start (preview mode only)
//! 4. traveler spawn at the start
//!
//! Every consumer is optional and runs independently. A missing or failing
//! consumer is logged and recorded in the [`DeliveryReport`]; the ones after
//! it still run.

pub mod pin;
pub mod recorder;

use crate::config::{NavigatorConfig, RouteStyle};
use crate::model::{Path, Vec3};
use crate::{Error, Result};

pub use pin::PinSpawner;
pub use recorder::{RecordedScene, SceneRecorder};

// ============================================================================
// Consumer traits
// ============================================================================

/// Draws the connecting line of a route. At most one route is shown.
pub trait RouteRenderer: Send {
    /// Remove whatever route was drawn before.
    fn clear(&mut self);

    /// Draw a polyline through `points`.
    fn draw(&mut self, points: &[Vec3], style: &RouteStyle) -> Result<()>;
}

/// Places the single destination indicator.
pub trait PinRenderer: Send {
    fn remove_pin(&mut self);

    fn place_pin(&mut self, position: Vec3) -> Result<()>;
}

/// The viewer's rig, moved to the route start in preview mode.
pub trait ObserverRig: Send {
    fn move_to(&mut self, position: Vec3) -> Result<()>;
}

/// Visual for the animated traveler.
pub trait TravelerRenderer: Send {
    /// Create a fresh traveler, replacing any previous one.
    fn spawn(&mut self, position: Vec3) -> Result<()>;

    fn move_to(&mut self, position: Vec3);
}

// ============================================================================
// Delivery report
// ============================================================================

/// Which consumer a failure belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Consumer {
    Route,
    Pin,
    Observer,
    Traveler,
}

impl std::fmt::Display for Consumer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Consumer::Route => "route renderer",
            Consumer::Pin => "pin renderer",
            Consumer::Observer => "observer rig",
            Consumer::Traveler => "traveler renderer",
        };
        f.write_str(name)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct DeliveryFailure {
    pub consumer: Consumer,
    pub message: String,
}

/// Outcome of one delivery.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DeliveryReport {
    pub drawn: bool,
    /// Where the pin went, if one was placed.
    pub pin: Option<Vec3>,
    pub observer_moved: bool,
    pub traveler_spawned: bool,
    pub failures: Vec<DeliveryFailure>,
}

impl DeliveryReport {
    pub fn is_complete(&self) -> bool {
        self.failures.is_empty()
    }

    fn record(&mut self, consumer: Consumer, err: Error) {
        match &err {
            Error::MissingCollaborator(_) => {
                tracing::warn!(%consumer, "{err}");
            }
            _ => {
                tracing::error!(%consumer, "delivery failed: {err}");
            }
        }
        self.failures.push(DeliveryFailure {
            consumer,
            message: err.to_string(),
        });
    }
}

// ============================================================================
// PathDelivery
// ============================================================================

/// The registered consumers of resolved routes.
pub struct PathDelivery {
    route: Option<Box<dyn RouteRenderer>>,
    pins: PinSpawner,
    observer: Option<Box<dyn ObserverRig>>,
    traveler: Option<Box<dyn TravelerRenderer>>,
    style: RouteStyle,
}

impl PathDelivery {
    /// No consumers registered yet.
    pub fn new(config: &NavigatorConfig) -> Self {
        Self {
            route: None,
            pins: PinSpawner::new(config.pin.clone()),
            observer: None,
            traveler: None,
            style: config.route.clone(),
        }
    }

    /// Register every consumer on one recorder.
    pub fn recording(config: &NavigatorConfig, recorder: &SceneRecorder) -> Self {
        Self::new(config)
            .with_route_renderer(Box::new(recorder.clone()))
            .with_pin_renderer(Box::new(recorder.clone()))
            .with_observer(Box::new(recorder.clone()))
            .with_traveler_renderer(Box::new(recorder.clone()))
    }

    pub fn with_route_renderer(mut self, renderer: Box<dyn RouteRenderer>) -> Self {
        self.route = Some(renderer);
        self
    }

    pub fn with_pin_renderer(mut self, renderer: Box<dyn PinRenderer>) -> Self {
        self.pins.set_renderer(renderer);
        self
    }

    pub fn with_observer(mut self, observer: Box<dyn ObserverRig>) -> Self {
        self.observer = Some(observer);
        self
    }

    pub fn with_traveler_renderer(mut self, renderer: Box<dyn TravelerRenderer>) -> Self {
        self.traveler = Some(renderer);
        self
    }

    pub fn has_traveler_renderer(&self) -> bool {
        self.traveler.is_some()
    }

    /// Run every consumer on a non-empty path.
    ///
    /// `preview` enables the observer snap.
    pub fn deliver(&mut self, path: &Path, preview: bool) -> DeliveryReport {
        let mut report = DeliveryReport::default();
        let Some(start) = path.start().map(|w| w.position) else {
            tracing::warn!("no path provided to deliver");
            return report;
        };

        match self.draw_route(path) {
            Ok(()) => report.drawn = true,
            Err(err) => report.record(Consumer::Route, err),
        }

        match self.pins.spawn_destination_pin(path) {
            Ok(pin) => report.pin = pin,
            Err(err) => report.record(Consumer::Pin, err),
        }

        if preview {
            match self.snap_observer(start) {
                Ok(()) => report.observer_moved = true,
                Err(err) => report.record(Consumer::Observer, err),
            }
        }

        match self.spawn_traveler(start) {
            Ok(()) => report.traveler_spawned = true,
            Err(err) => report.record(Consumer::Traveler, err),
        }

        report
    }

    /// Forward an animated position to the traveler visual.
    pub fn move_traveler(&mut self, position: Vec3) {
        if let Some(traveler) = self.traveler.as_mut() {
            traveler.move_to(position);
        }
    }

    fn draw_route(&mut self, path: &Path) -> Result<()> {
        let renderer = self
            .route
            .as_mut()
            .ok_or(Error::MissingCollaborator("route renderer"))?;

        let lift = Vec3::Y * self.style.lift;
        let points: Vec<Vec3> = path.positions().into_iter().map(|p| p + lift).collect();

        renderer.clear();
        renderer.draw(&points, &self.style)?;
        tracing::info!(points = points.len(), "route rendered");
        Ok(())
    }

    fn snap_observer(&mut self, start: Vec3) -> Result<()> {
        let observer = self
            .observer
            .as_mut()
            .ok_or(Error::MissingCollaborator("observer rig"))?;
        observer.move_to(start)?;
        tracing::info!(x = start.x, y = start.y, z = start.z, "moved observer to route start");
        Ok(())
    }

    fn spawn_traveler(&mut self, start: Vec3) -> Result<()> {
        let traveler = self
            .traveler
            .as_mut()
            .ok_or(Error::MissingCollaborator("traveler renderer"))?;
        traveler.spawn(start)
    }
}

// ============================================================================
// Tests
// ============================================================================
