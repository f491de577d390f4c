//! The context object that owns one navigation setup.
//!
//! A session holds the graph store, the configuration, the registered
//! delivery consumers, the most recent route and the active traveler.
//! Nothing is process-global: independent sessions never share state.
//!
//! Requests run synchronously: lookup, solve, and delivery all finish inside
//! one call. Only the traveler spans several host ticks, driven by
//! [`NavigationSession::tick`].

use crate::animation::{CancellationToken, TravelState, TravelUpdate, Traveler};
use crate::config::NavigatorConfig;
use crate::delivery::{DeliveryReport, PathDelivery};
use crate::graph::WaypointGraph;
use crate::model::{Path, WaypointKey};
use crate::scene::SceneProvider;
use crate::{Error, Result};

/// A delivered route.
#[derive(Debug, Clone)]
pub struct NavigationOutcome {
    pub path: Path,
    pub report: DeliveryReport,
}

pub struct NavigationSession {
    graph: WaypointGraph,
    config: NavigatorConfig,
    delivery: PathDelivery,
    route: Option<Path>,
    traveler: Option<Traveler>,
}

impl NavigationSession {
    /// Validate the config and build the graph from a one-shot scene scan.
    pub fn new<S: SceneProvider + ?Sized>(
        scene: &mut S,
        config: NavigatorConfig,
        delivery: PathDelivery,
    ) -> Result<Self> {
        config.validate()?;
        let graph = WaypointGraph::build(scene);
        Ok(Self {
            graph,
            config,
            delivery,
            route: None,
            traveler: None,
        })
    }

    pub fn graph(&self) -> &WaypointGraph {
        &self.graph
    }

    pub fn config(&self) -> &NavigatorConfig {
        &self.config
    }

    /// Last successfully delivered route.
    pub fn current_route(&self) -> Option<&Path> {
        self.route.as_ref()
    }

    pub fn traveler(&self) -> Option<&Traveler> {
        self.traveler.as_ref()
    }

    pub fn traveler_state(&self) -> TravelState {
        self.traveler.as_ref().map_or(TravelState::Idle, Traveler::state)
    }

    /// Resolve, solve and deliver a route between two free-form names.
    ///
    /// Failures are logged and returned; they leave the graph, the previous
    /// route and the running traveler untouched. On success the previous
    /// traveler is cancelled and replaced.
    pub fn request_navigation(&mut self, start: &str, destination: &str) -> Result<NavigationOutcome> {
        let path = match self.solve(start, destination) {
            Ok(path) => path,
            Err(err) => {
                tracing::error!("navigation aborted: {err}");
                return Err(err);
            }
        };

        let report = self.delivery.deliver(&path, self.config.preview.enabled);

        if let Some(previous) = self.traveler.take() {
            previous.token().cancel();
        }
        if report.traveler_spawned {
            self.traveler = Some(Traveler::new(
                &path,
                self.config.traveler.clone(),
                CancellationToken::new(),
            ));
        }

        self.route = Some(path.clone());
        Ok(NavigationOutcome { path, report })
    }

    /// Entry point for a UI trigger. Forwards both names unchanged.
    pub fn start_navigation(&mut self, start: &str, destination: &str) -> Result<NavigationOutcome> {
        self.request_navigation(start, destination)
    }

    /// Navigate from the configured default start to a host-supplied destination.
    pub fn receive_launch_destination(&mut self, destination: &str) -> Result<NavigationOutcome> {
        tracing::info!(destination, "received destination from host platform");
        let start = self.config.default_start.clone();
        self.request_navigation(&start, destination)
    }

    /// Startup navigation in preview mode. `None` when preview is off.
    pub fn run_preview(&mut self) -> Option<Result<NavigationOutcome>> {
        if !self.config.preview.enabled {
            return None;
        }
        let start = self.config.preview.start.clone();
        let destination = self.config.preview.destination.clone();
        Some(self.request_navigation(&start, &destination))
    }

    /// Advance the active traveler by `dt` seconds and move its visual.
    pub fn tick(&mut self, dt: f32) -> Option<TravelUpdate> {
        let traveler = self.traveler.as_mut()?;
        let before = traveler.position();
        let update = traveler.tick(dt);
        if update.position != before {
            self.delivery.move_traveler(update.position);
        }
        Some(update)
    }

    fn solve(&self, start: &str, destination: &str) -> Result<Path> {
        let start_key = normalize_or_missing(start)?;
        let end_key = normalize_or_missing(destination)?;

        tracing::info!(from = %start_key, to = %end_key, "computing path");
        let path = self.graph.find_path(&start_key, &end_key)?;
        if path.is_empty() {
            return Err(Error::RouteUnreachable {
                start: start_key.to_string(),
                destination: end_key.to_string(),
            });
        }
        Ok(path)
    }
}

fn normalize_or_missing(raw: &str) -> Result<WaypointKey> {
    WaypointKey::normalize(raw).ok_or_else(|| Error::WaypointNotFound {
        key: raw.to_string(),
    })
}
