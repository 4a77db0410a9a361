//! A single massive body: pairwise gravity and the integration step
//!
//! `CelestialObject` owns its position, velocity, mass and orbit trail.
//! Forces are evaluated against a [`BodySnapshot`] slice the manager
//! captures before any body moves, so every force in a tick sees the
//! previous tick's positions regardless of iteration order.

use crate::simulation::error::SimError;
use crate::simulation::params::{G, TIMESTEP};
use crate::simulation::vector::{distance, NVec2};

/// Immutable per-body state captured at the start of a tick
#[derive(Debug, Clone)]
pub struct BodySnapshot {
    pub position: NVec2,
    pub mass: f64,
    pub is_anchor: bool,
    pub label: String,
}

#[derive(Debug, Clone)]
pub struct CelestialObject {
    pub position: NVec2, // current center, advanced every tick
    pub velocity: NVec2,
    pub mass: f64,   // > 0, enforced at spawn
    pub radius: f64, // rendering only, no effect on gravity
    pub is_anchor: bool, // designated reference body ("sun")
    pub distance_to_anchor: f64, // cached during force computation, 0 until an anchor is seen
    pub trail: Vec<NVec2>, // every position ever occupied, unbounded
    pub label: String,
}

impl CelestialObject {
    /// New body at rest. The trail starts with the initial position.
    pub fn new(position: NVec2, radius: f64, mass: f64, label: impl Into<String>) -> Self {
        Self {
            position,
            velocity: NVec2::zeros(),
            mass,
            radius,
            is_anchor: false,
            distance_to_anchor: 0.0,
            trail: vec![position],
            label: label.into(),
        }
    }

    /// State the manager freezes for this body before a tick
    pub fn snapshot(&self) -> BodySnapshot {
        BodySnapshot {
            position: self.position,
            mass: self.mass,
            is_anchor: self.is_anchor,
            label: self.label.clone(),
        }
    }

    /// Gravitational force exerted on `self` by `other`, as (x, y)
    /// components.
    ///
    /// The angle convention is `theta = atan2(dx, dy)`, axis order
    /// (dx, dy) and not (dy, dx). The order is part of this system's
    /// coordinate convention; changing it changes every trajectory.
    ///
    /// As a side effect the cached `distance_to_anchor` is refreshed
    /// whenever `other` is the anchor.
    pub fn attraction(&mut self, other: &BodySnapshot) -> Result<NVec2, SimError> {
        let dx = other.position.x - self.position.x;
        let dy = other.position.y - self.position.y;
        let d = distance(&self.position, &other.position);

        if other.is_anchor {
            self.distance_to_anchor = d;
        }

        // A coincident pair would divide by zero and push NaN into every
        // later velocity; abort the tick instead.
        if d == 0.0 {
            return Err(SimError::DegenerateGeometry {
                a: self.label.clone(),
                b: other.label.clone(),
            });
        }

        let force = G * self.mass * other.mass / (d * d);
        let theta = dx.atan2(dy);
        Ok(NVec2::new(theta.cos() * force, theta.sin() * force))
    }

    /// Sum the attraction from every other body in the snapshot.
    /// `index` is this body's own slot; the self-pair is skipped by index,
    /// never by comparing positions.
    pub fn net_force(&mut self, index: usize, snapshot: &[BodySnapshot]) -> Result<NVec2, SimError> {
        let mut total = NVec2::zeros();
        for (j, other) in snapshot.iter().enumerate() {
            if j == index {
                continue;
            }
            total += self.attraction(other)?;
        }
        Ok(total)
    }

    /// Advance one `TIMESTEP` with semi-implicit Euler: velocity is
    /// updated from the accumulated force first, then position from the
    /// new velocity. The new position is appended to the trail.
    pub fn integrate(&mut self, total_force: NVec2) {
        let acceleration = total_force / self.mass;
        self.velocity += acceleration * TIMESTEP;
        self.position += self.velocity * TIMESTEP;
        self.trail.push(self.position);
    }
}
