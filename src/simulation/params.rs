//! Physical constants and fixed defaults for the simulation
//!
//! All values are fixed for reproducibility:
//! - gravitational constant `G` and the one-day step `TIMESTEP`,
//! - the anchor body's mass/radius and the default spawn radius,
//! - fallback canvas dimensions when a scenario omits them

// Astronomical unit in meters
pub const AU: f64 = 149.6e6 * 1000.0;

// Gravitational constant
pub const G: f64 = 6.67428e-11;

// 1 day time step, in seconds
pub const TIMESTEP: f64 = 3600.0 * 24.0;

// Mass of the sun, used for every spawned anchor
pub const SOLAR_MASS: f64 = 1.98892e30;

// Render radii; no effect on the physics
pub const SPAWN_RADIUS: f64 = 10.0;
pub const ANCHOR_RADIUS: f64 = 20.0;

pub const ANCHOR_LABEL: &str = "Sun";

// Default canvas dimensions
pub const CANVAS_WIDTH: f64 = 1200.0;
pub const CANVAS_HEIGHT: f64 = 675.0;
