//! Ownership and per-tick driving of the body collection
//!
//! `ObjectManager` is the single source of truth for every body that
//! exerts force: no body exists outside its collection once spawned, and
//! all access goes through its methods. Insertion order is spawn order
//! and fixes iteration order; trajectories do not depend on it because
//! ticks are snapshot-based.

use tracing::{debug, info};

use crate::boundary::{RenderFrame, SpawnRequest};
use crate::simulation::body::{BodySnapshot, CelestialObject};
use crate::simulation::error::SimError;
use crate::simulation::params::{ANCHOR_LABEL, ANCHOR_RADIUS, SOLAR_MASS, SPAWN_RADIUS};
use crate::simulation::vector::NVec2;

#[derive(Debug, Default)]
pub struct ObjectManager {
    objects: Vec<CelestialObject>,
}

impl ObjectManager {
    pub fn new() -> Self {
        Self {
            objects: Vec::new(),
        }
    }

    pub fn len(&self) -> usize {
        self.objects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.objects.is_empty()
    }

    pub fn objects(&self) -> &[CelestialObject] {
        &self.objects
    }

    /// First body with a matching label, if any. Labels are not unique.
    pub fn find(&self, label: &str) -> Option<&CelestialObject> {
        self.objects.iter().find(|o| o.label == label)
    }

    /// Validate and append a user-spawned body (radius fixed at
    /// `SPAWN_RADIUS`, starting at rest). Rejected spawns leave the
    /// collection untouched.
    pub fn spawn_object(
        &mut self,
        position: NVec2,
        mass: f64,
        label: impl Into<String>,
    ) -> Result<&CelestialObject, SimError> {
        let label = label.into();
        if label.is_empty() {
            return Err(SimError::Validation("object must have a label".into()));
        }
        if !mass.is_finite() || mass <= 0.0 {
            return Err(SimError::Validation(format!(
                "object mass must be a positive number, got {mass}"
            )));
        }

        let object = CelestialObject::new(position, SPAWN_RADIUS, mass, label);
        info!(label = %object.label, mass, "spawned object");
        self.objects.push(object);
        Ok(&self.objects[self.objects.len() - 1])
    }

    /// Spawn the reference body ("sun") at the geometric center of the
    /// canvas, with solar mass and `ANCHOR_RADIUS`. Calling this twice
    /// creates two anchors; nothing enforces uniqueness.
    pub fn spawn_anchor(&mut self, canvas_width: f64, canvas_height: f64) -> &CelestialObject {
        let center = NVec2::new(canvas_width / 2.0, canvas_height / 2.0);
        let mut anchor = CelestialObject::new(center, ANCHOR_RADIUS, SOLAR_MASS, ANCHOR_LABEL);
        anchor.is_anchor = true;
        info!(x = center.x, y = center.y, "spawned anchor");
        self.objects.push(anchor);
        &self.objects[self.objects.len() - 1]
    }

    /// Parse a spawn request from the UI boundary and spawn on success.
    /// Empty or non-numeric mass text maps to a validation error before
    /// any body is constructed.
    pub fn handle_spawn_request(
        &mut self,
        request: &SpawnRequest,
    ) -> Result<&CelestialObject, SimError> {
        let mass = request.mass()?;
        self.spawn_object(request.position, mass, request.label.clone())
    }

    /// Overwrite a body's velocity. Scenario files use this to start
    /// bodies in motion; boundary spawns always start at rest.
    pub fn set_velocity(&mut self, index: usize, velocity: NVec2) {
        if let Some(object) = self.objects.get_mut(index) {
            object.velocity = velocity;
        }
    }

    /// Advance every body by one step and emit one frame per body.
    ///
    /// All forces are computed against a snapshot frozen before any body
    /// moves, and every integration is applied only after every force sum
    /// is complete; partially-updated positions are never observable
    /// within a tick. A degenerate pair aborts the tick before any state
    /// is integrated.
    pub fn tick(&mut self) -> Result<Vec<RenderFrame>, SimError> {
        let snapshot: Vec<BodySnapshot> =
            self.objects.iter().map(CelestialObject::snapshot).collect();

        let mut forces = vec![NVec2::zeros(); self.objects.len()];
        for (i, object) in self.objects.iter_mut().enumerate() {
            forces[i] = object.net_force(i, &snapshot)?;
        }

        for (object, force) in self.objects.iter_mut().zip(forces.iter()) {
            object.integrate(*force);
        }

        debug!(bodies = self.objects.len(), "tick complete");
        Ok(self.objects.iter().map(RenderFrame::from).collect())
    }
}
