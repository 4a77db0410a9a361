//! Types crossing the UI boundary
//!
//! The window/canvas layer lives outside this crate. It sends
//! [`SpawnRequest`]s in and consumes one [`RenderFrame`] per body per
//! tick through a [`Renderer`]; the core never touches a display
//! surface.

use crate::simulation::body::CelestialObject;
use crate::simulation::error::SimError;
use crate::simulation::vector::NVec2;

/// A spawn command from the UI layer. Mass arrives as raw text (the UI
/// reads it straight from an input field) and is parsed here before any
/// body is constructed.
#[derive(Debug, Clone)]
pub struct SpawnRequest {
    pub position: NVec2, // click position in canvas coordinates
    pub mass_text: String,
    pub label: String,
}

impl SpawnRequest {
    /// Parse the mass text. Empty or non-numeric text is a validation
    /// error, not a NaN trajectory.
    pub fn mass(&self) -> Result<f64, SimError> {
        let text = self.mass_text.trim();
        if text.is_empty() {
            return Err(SimError::Validation("object must have a mass".into()));
        }
        text.parse::<f64>().map_err(|_| {
            SimError::Validation(format!("mass {:?} is not a number", self.mass_text))
        })
    }
}

/// Everything the external renderer needs to draw one body for one tick
#[derive(Debug, Clone)]
pub struct RenderFrame {
    pub position: NVec2,
    pub radius: f64,
    pub label: String,
    pub trail: Vec<NVec2>, // full orbit history, for path drawing
}

impl From<&CelestialObject> for RenderFrame {
    fn from(object: &CelestialObject) -> Self {
        Self {
            position: object.position,
            radius: object.radius,
            label: object.label.clone(),
            trail: object.trail.clone(),
        }
    }
}

/// Sink for per-tick frames, implemented by the external drawing layer
pub trait Renderer {
    fn render(&mut self, frames: &[RenderFrame]);
}
