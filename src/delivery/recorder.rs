//! In-memory delivery consumer.
//!
//! `SceneRecorder` implements every consumer trait against one shared
//! record, so a test (or a headless host) can hand out boxed consumers and
//! still inspect what was drawn. Clones share the same record.

use std::sync::Arc;

use parking_lot::Mutex;

use crate::config::RouteStyle;
use crate::model::Vec3;
use crate::{Error, Result};
use super::{ObserverRig, PinRenderer, RouteRenderer, TravelerRenderer};

/// Everything the consumers were asked to show.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RecordedScene {
    /// Currently drawn route points.
    pub route: Option<Vec<Vec3>>,
    pub route_draws: usize,
    pub route_clears: usize,
    /// Currently placed pin.
    pub pin: Option<Vec3>,
    pub pins_placed: usize,
    pub pins_removed: usize,
    pub observer: Option<Vec3>,
    /// Current traveler position.
    pub traveler: Option<Vec3>,
    pub traveler_spawns: usize,
    /// Every position the current traveler was moved to.
    pub traveler_trail: Vec<Vec3>,
}

#[derive(Debug, Default)]
struct RecorderInner {
    scene: RecordedScene,
    fail_pins: bool,
}

#[derive(Debug, Clone, Default)]
pub struct SceneRecorder {
    inner: Arc<Mutex<RecorderInner>>,
}

impl SceneRecorder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn snapshot(&self) -> RecordedScene {
        self.inner.lock().scene.clone()
    }

    /// Make every later pin placement fail.
    pub fn fail_pins(&self, fail: bool) {
        self.inner.lock().fail_pins = fail;
    }
}

impl RouteRenderer for SceneRecorder {
    fn clear(&mut self) {
        let mut inner = self.inner.lock();
        inner.scene.route = None;
        inner.scene.route_clears += 1;
    }

    fn draw(&mut self, points: &[Vec3], _style: &RouteStyle) -> Result<()> {
        let mut inner = self.inner.lock();
        inner.scene.route = Some(points.to_vec());
        inner.scene.route_draws += 1;
        Ok(())
    }
}

impl PinRenderer for SceneRecorder {
    fn remove_pin(&mut self) {
        let mut inner = self.inner.lock();
        if inner.scene.pin.take().is_some() {
            inner.scene.pins_removed += 1;
        }
    }

    fn place_pin(&mut self, position: Vec3) -> Result<()> {
        let mut inner = self.inner.lock();
        if inner.fail_pins {
            return Err(Error::MissingCollaborator("pin prefab"));
        }
        inner.scene.pin = Some(position);
        inner.scene.pins_placed += 1;
        Ok(())
    }
}

impl ObserverRig for SceneRecorder {
    fn move_to(&mut self, position: Vec3) -> Result<()> {
        self.inner.lock().scene.observer = Some(position);
        Ok(())
    }
}

impl TravelerRenderer for SceneRecorder {
    fn spawn(&mut self, position: Vec3) -> Result<()> {
        let mut inner = self.inner.lock();
        inner.scene.traveler = Some(position);
        inner.scene.traveler_spawns += 1;
        inner.scene.traveler_trail.clear();
        Ok(())
    }

    fn move_to(&mut self, position: Vec3) {
        let mut inner = self.inner.lock();
        inner.scene.traveler = Some(position);
        inner.scene.traveler_trail.push(position);
    }
}
