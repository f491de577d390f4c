//! Navigator configuration.
//!
//! Every field has a default, so an empty JSON object is a valid config.

use serde::{Deserialize, Serialize};

use crate::{Error, Result};

/// Top-level configuration for a navigation session.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct NavigatorConfig {
    /// Start location for destinations injected by the host platform.
    #[serde(default = "default_start")]
    pub default_start: String,

    #[serde(default)]
    pub preview: PreviewConfig,

    #[serde(default)]
    pub traveler: TravelerConfig,

    #[serde(default)]
    pub pin: PinConfig,

    #[serde(default)]
    pub route: RouteStyle,
}

/// Simulation/preview mode.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PreviewConfig {
    /// Navigate on startup and snap the observer to each route start.
    #[serde(default = "default_true")]
    pub enabled: bool,

    #[serde(default = "default_start")]
    pub start: String,

    #[serde(default = "default_preview_destination")]
    pub destination: String,
}

/// Traveler animation parameters.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TravelerConfig {
    /// Distance per second (default: 1.5)
    #[serde(default = "default_speed")]
    pub speed: f32,

    /// A segment target counts as reached within this distance (default: 0.1)
    #[serde(default = "default_arrival_tolerance")]
    pub arrival_tolerance: f32,

    /// Pause after reaching each segment target, in seconds (default: 0.2)
    #[serde(default = "default_dwell")]
    pub dwell_seconds: f32,
}

/// Destination pin placement.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PinConfig {
    /// Height above the destination (default: 0.2)
    #[serde(default = "default_pin_height")]
    pub height_offset: f32,
}

/// Look of the drawn route.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RouteStyle {
    /// Line width (default: 0.5)
    #[serde(default = "default_route_width")]
    pub width: f32,

    /// RGBA (default: navy)
    #[serde(default = "default_route_color")]
    pub color: [f32; 4],

    /// Vertical lift applied to every route point (default: 0.1)
    #[serde(default = "default_route_lift")]
    pub lift: f32,

    #[serde(default = "default_round_vertices")]
    pub cap_vertices: u32,

    #[serde(default = "default_round_vertices")]
    pub corner_vertices: u32,
}

// Default value functions
fn default_start() -> String {
    "LUNAR_START_MAIN_GATE".to_string()
}
fn default_preview_destination() -> String {
    "LIB2".to_string()
}
fn default_true() -> bool {
    true
}
fn default_speed() -> f32 {
    1.5
}
fn default_arrival_tolerance() -> f32 {
    0.1
}
fn default_dwell() -> f32 {
    0.2
}
fn default_pin_height() -> f32 {
    0.2
}
fn default_route_width() -> f32 {
    0.5
}
fn default_route_color() -> [f32; 4] {
    [0.0, 0.0, 0.5, 1.0]
}
fn default_route_lift() -> f32 {
    0.1
}
fn default_round_vertices() -> u32 {
    2
}

impl Default for NavigatorConfig {
    fn default() -> Self {
        Self {
            default_start: default_start(),
            preview: PreviewConfig::default(),
            traveler: TravelerConfig::default(),
            pin: PinConfig::default(),
            route: RouteStyle::default(),
        }
    }
}

impl Default for PreviewConfig {
    fn default() -> Self {
        Self {
            enabled: default_true(),
            start: default_start(),
            destination: default_preview_destination(),
        }
    }
}

impl Default for TravelerConfig {
    fn default() -> Self {
        Self {
            speed: default_speed(),
            arrival_tolerance: default_arrival_tolerance(),
            dwell_seconds: default_dwell(),
        }
    }
}

impl Default for PinConfig {
    fn default() -> Self {
        Self {
            height_offset: default_pin_height(),
        }
    }
}

impl Default for RouteStyle {
    fn default() -> Self {
        Self {
            width: default_route_width(),
            color: default_route_color(),
            lift: default_route_lift(),
            cap_vertices: default_round_vertices(),
            corner_vertices: default_round_vertices(),
        }
    }
}

impl NavigatorConfig {
    /// Parse and validate a JSON config.
    pub fn from_json_str(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_json_file(path: impl AsRef<std::path::Path>) -> Result<Self> {
        let text = std::fs::read_to_string(path)?;
        Self::from_json_str(&text)
    }

    pub fn validate(&self) -> Result<()> {
        let t = &self.traveler;
        check_finite("traveler.speed", t.speed)?;
        check_finite("traveler.arrival_tolerance", t.arrival_tolerance)?;
        check_finite("traveler.dwell_seconds", t.dwell_seconds)?;
        check_finite("pin.height_offset", self.pin.height_offset)?;
        check_finite("route.width", self.route.width)?;
        check_finite("route.lift", self.route.lift)?;
        for c in self.route.color {
            check_finite("route.color", c)?;
        }

        if t.speed <= 0.0 {
            return Err(Error::Config(format!("traveler.speed must be positive, got {}", t.speed)));
        }
        let non_negative = [
            ("traveler.arrival_tolerance", t.arrival_tolerance),
            ("traveler.dwell_seconds", t.dwell_seconds),
            ("pin.height_offset", self.pin.height_offset),
            ("route.width", self.route.width),
            ("route.lift", self.route.lift),
        ];
        for (name, value) in non_negative {
            if value < 0.0 {
                return Err(Error::Config(format!("{name} must not be negative, got {value}")));
            }
        }
        Ok(())
    }
}

fn check_finite(name: &str, value: f32) -> Result<()> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(Error::Config(format!("{name} must be finite, got {value}")))
    }
}
