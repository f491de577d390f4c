//! Vector helpers shared by the solver and the traveler.

pub use glam::Vec3;

/// Euclidean distance between two points.
#[inline]
pub fn distance(a: Vec3, b: Vec3) -> f32 {
    (b - a).length()
}

/// Moves `current` toward `target` by at most `max_delta`.
///
/// Never overshoots: when the remaining distance is within `max_delta`
/// the target itself is returned.
pub fn move_towards(current: Vec3, target: Vec3, max_delta: f32) -> Vec3 {
    let delta = target - current;
    let remaining = delta.length();

    if remaining <= max_delta || remaining <= f32::EPSILON {
        return target;
    }

    current + delta / remaining * max_delta
}
