//! Traveler animation along a resolved path.
//!
//! An explicit state machine advanced by the host's frame tick. Each call to
//! [`Traveler::tick`] does one unit of work, either one movement step or
//! one dwell countdown, and returns the new state. Nothing here sleeps or
//! spawns; the host decides when ticks happen.
//!
//! ```text
//! Traveling(0) ─reach─▶ Dwelling(0) ─dwell─▶ Traveling(1) ─ … ─▶ Arrived
//!       └──────────── token cancelled ───────────▶ Cancelled
//! ```

pub mod cancel;

use crate::config::TravelerConfig;
use crate::model::{Path, Vec3, distance, move_towards};

pub use cancel::CancellationToken;

/// Where a traversal stands.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TravelState {
    /// No traversal.
    Idle,
    /// Moving toward the target of `segment` (waypoint `segment + 1`).
    Traveling { segment: usize },
    /// Paused at the target of `segment`.
    Dwelling { segment: usize, remaining: f32 },
    Arrived,
    Cancelled,
}

impl TravelState {
    /// True once no further tick will change anything.
    pub fn is_finished(&self) -> bool {
        matches!(self, TravelState::Arrived | TravelState::Cancelled)
    }
}

/// Result of one tick.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TravelUpdate {
    pub state: TravelState,
    pub position: Vec3,
    /// Set on the single tick that completed the final segment.
    pub arrived: bool,
}

/// Animates one traveler along one path.
#[derive(Debug, Clone)]
pub struct Traveler {
    stops: Vec<Vec3>,
    position: Vec3,
    state: TravelState,
    config: TravelerConfig,
    token: CancellationToken,
}

impl Traveler {
    /// Start at the first waypoint, heading for the second.
    pub fn new(path: &Path, config: TravelerConfig, token: CancellationToken) -> Self {
        let stops = path.positions();
        let position = stops.first().copied().unwrap_or(Vec3::ZERO);
        let state = if stops.is_empty() {
            TravelState::Idle
        } else {
            TravelState::Traveling { segment: 0 }
        };
        Self {
            stops,
            position,
            state,
            config,
            token,
        }
    }

    pub fn position(&self) -> Vec3 {
        self.position
    }

    pub fn state(&self) -> TravelState {
        self.state
    }

    pub fn segment_count(&self) -> usize {
        self.stops.len().saturating_sub(1)
    }

    pub fn token(&self) -> &CancellationToken {
        &self.token
    }

    /// Advance by `dt` seconds.
    pub fn tick(&mut self, dt: f32) -> TravelUpdate {
        let dt = dt.max(0.0);
        let mut arrived = false;

        match self.state {
            TravelState::Idle | TravelState::Arrived | TravelState::Cancelled => {}
            _ if self.token.is_cancelled() => {
                tracing::warn!(state = ?self.state, "traversal cancelled");
                self.state = TravelState::Cancelled;
            }
            TravelState::Traveling { segment } => match self.stops.get(segment + 1).copied() {
                None => {
                    arrived = self.arrive();
                }
                Some(target) => {
                    if distance(self.position, target) > self.config.arrival_tolerance {
                        self.position = move_towards(self.position, target, self.config.speed * dt);
                    } else {
                        tracing::debug!(segment, total = self.segment_count(), "segment reached");
                        self.state = TravelState::Dwelling {
                            segment,
                            remaining: self.config.dwell_seconds,
                        };
                    }
                }
            },
            TravelState::Dwelling { segment, remaining } => {
                let remaining = remaining - dt;
                if remaining > 0.0 {
                    self.state = TravelState::Dwelling { segment, remaining };
                } else if segment + 1 >= self.segment_count() {
                    arrived = self.arrive();
                } else {
                    self.state = TravelState::Traveling { segment: segment + 1 };
                }
            }
        }

        TravelUpdate {
            state: self.state,
            position: self.position,
            arrived,
        }
    }

    fn arrive(&mut self) -> bool {
        self.state = TravelState::Arrived;
        tracing::info!(x = self.position.x, y = self.position.y, z = self.position.z, "traveler reached the destination");
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Waypoint, WaypointId};

    fn path(points: &[Vec3]) -> Path {
        Path::new(
            points
                .iter()
                .enumerate()
                .map(|(i, &p)| Waypoint::new(WaypointId(i as u64 + 1), format!("w{i}"), p))
                .collect(),
        )
    }

    fn config() -> TravelerConfig {
        TravelerConfig {
            speed: 1.0,
            arrival_tolerance: 0.1,
            dwell_seconds: 0.2,
        }
    }

    #[test]
    fn test_starts_at_first_waypoint() {
        let traveler = Traveler::new(&path(&[Vec3::X, Vec3::Z]), config(), CancellationToken::new());
        assert_eq!(traveler.position(), Vec3::X);
        assert_eq!(traveler.state(), TravelState::Traveling { segment: 0 });
    }

    #[test]
    fn test_step_is_speed_times_dt() {
        let mut traveler = Traveler::new(
            &path(&[Vec3::ZERO, Vec3::new(10.0, 0.0, 0.0)]),
            config(),
            CancellationToken::new(),
        );
        let update = traveler.tick(0.5);
        assert!((update.position.x - 0.5).abs() < 1e-6);
        assert!(!update.arrived);
    }

    #[test]
    fn test_single_segment_arrival() {
        let mut traveler = Traveler::new(&path(&[Vec3::ZERO, Vec3::X]), config(), CancellationToken::new());

        // Covers the whole leg in one step
        assert_eq!(traveler.tick(2.0).position, Vec3::X);
        // Reach check
        assert!(matches!(traveler.tick(0.0).state, TravelState::Dwelling { segment: 0, .. }));
        // Dwell elapses
        let update = traveler.tick(0.25);
        assert_eq!(update.state, TravelState::Arrived);
        assert!(update.arrived);
        // Completion is signalled once
        assert!(!traveler.tick(1.0).arrived);
    }

    #[test]
    fn test_single_waypoint_arrives_immediately() {
        let mut traveler = Traveler::new(&path(&[Vec3::ONE]), config(), CancellationToken::new());
        let update = traveler.tick(0.016);
        assert!(update.arrived);
        assert_eq!(update.position, Vec3::ONE);
    }

    #[test]
    fn test_empty_path_stays_idle() {
        let mut traveler = Traveler::new(&Path::empty(), config(), CancellationToken::new());
        let update = traveler.tick(1.0);
        assert_eq!(update.state, TravelState::Idle);
        assert!(!update.arrived);
    }

    #[test]
    fn test_cancel_stops_movement() {
        let token = CancellationToken::new();
        let mut traveler = Traveler::new(
            &path(&[Vec3::ZERO, Vec3::new(5.0, 0.0, 0.0)]),
            config(),
            token.clone(),
        );
        let before = traveler.tick(1.0).position;
        token.cancel();

        let update = traveler.tick(1.0);
        assert_eq!(update.state, TravelState::Cancelled);
        assert_eq!(update.position, before);
        assert!(traveler.state().is_finished());
    }

    #[test]
    fn test_negative_dt_does_not_move_backwards() {
        let mut traveler = Traveler::new(
            &path(&[Vec3::ZERO, Vec3::new(5.0, 0.0, 0.0)]),
            config(),
            CancellationToken::new(),
        );
        assert_eq!(traveler.tick(-1.0).position, Vec3::ZERO);
    }
}
