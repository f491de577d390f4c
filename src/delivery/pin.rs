//! Destination pin placement.

use crate::config::PinConfig;
use crate::model::{Path, Vec3};
use crate::{Error, Result};
use super::PinRenderer;

/// Keeps at most one pin in the scene, above the latest route's destination.
pub struct PinSpawner {
    renderer: Option<Box<dyn PinRenderer>>,
    config: PinConfig,
    current: Option<Vec3>,
}

impl PinSpawner {
    pub fn new(config: PinConfig) -> Self {
        Self {
            renderer: None,
            config,
            current: None,
        }
    }

    pub fn set_renderer(&mut self, renderer: Box<dyn PinRenderer>) {
        self.renderer = Some(renderer);
    }

    /// Position of the pin currently placed, if any.
    pub fn current(&self) -> Option<Vec3> {
        self.current
    }

    /// Replace the previous pin with one above the path's last waypoint.
    ///
    /// The old pin is removed even when the new one cannot be placed.
    /// Returns `Ok(None)` for an empty path.
    pub fn spawn_destination_pin(&mut self, path: &Path) -> Result<Option<Vec3>> {
        let renderer = self
            .renderer
            .as_mut()
            .ok_or(Error::MissingCollaborator("pin renderer"))?;

        if self.current.take().is_some() {
            renderer.remove_pin();
        }

        let Some(destination) = path.destination() else {
            tracing::warn!("no path provided for pin placement");
            return Ok(None);
        };

        let position = destination.position + Vec3::Y * self.config.height_offset;
        renderer.place_pin(position)?;
        self.current = Some(position);
        tracing::info!(x = position.x, y = position.y, z = position.z, "destination pin spawned");
        Ok(Some(position))
    }
}
