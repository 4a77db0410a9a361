//! 2D vector type for the simulation
//!
//! Positions, velocities and forces are all `NVec2` (an `nalgebra`
//! `Vector2<f64>`). Arithmetic returns new vectors; equality is exact
//! component-wise float comparison, which keeps deterministic test
//! trajectories bit-comparable.

use nalgebra::Vector2;
pub type NVec2 = Vector2<f64>;

/// Euclidean distance between two points:
/// `sqrt((b.x - a.x)^2 + (b.y - a.y)^2)`
///
/// NaN or infinite components propagate; inputs are physics state that
/// was validated at spawn time.
pub fn distance(a: &NVec2, b: &NVec2) -> f64 {
    let dx = b.x - a.x;
    let dy = b.y - a.y;
    (dx * dx + dy * dy).sqrt()
}
