//! Configuration types for loading simulation scenarios from YAML.
//!
//! A scenario consists of:
//!
//! - [`CanvasConfig`]   – canvas dimensions, anchor goes at the center
//! - [`ObjectConfig`]   – one entry per spawned body
//! - [`ScenarioConfig`] – top-level wrapper used to load a scenario
//!
//! # YAML format
//!
//! ```yaml
//! canvas:
//!   width: 1200.0
//!   height: 675.0
//!
//! ticks: 365
//!
//! objects:
//!   - position: [1.06e11, 1.06e11]
//!     mass: 5.972e24
//!     label: Earth
//!   - position: [7.5e10, 7.5e10]
//!     velocity: [-1000.0, -1000.0]   # optional, rest if omitted
//!     mass: 4.8685e24
//!     label: Venus
//! ```
//!
//! [`ScenarioConfig::build`] maps this into a running [`ObjectManager`]:
//! the anchor is spawned first at the canvas center, then each configured
//! body in file order.

use serde::Deserialize;

use crate::simulation::error::SimError;
use crate::simulation::manager::ObjectManager;
use crate::simulation::params::{CANVAS_HEIGHT, CANVAS_WIDTH};
use crate::simulation::vector::NVec2;

/// Canvas dimensions the excluded UI layer reports at startup
#[derive(Deserialize, Debug, Clone)]
pub struct CanvasConfig {
    pub width: f64,
    pub height: f64,
}

impl Default for CanvasConfig {
    fn default() -> Self {
        Self {
            width: CANVAS_WIDTH,
            height: CANVAS_HEIGHT,
        }
    }
}

/// Initial state for a single spawned body
#[derive(Deserialize, Debug)]
pub struct ObjectConfig {
    pub position: Vec<f64>, // [x, y] in canvas coordinates
    #[serde(default)]
    pub velocity: Option<Vec<f64>>, // [vx, vy]; bodies start at rest if omitted
    pub mass: f64,
    pub label: String,
}

/// Top-level scenario configuration loaded from YAML
#[derive(Deserialize, Debug)]
pub struct ScenarioConfig {
    #[serde(default)]
    pub canvas: CanvasConfig,
    #[serde(default = "default_ticks")]
    pub ticks: u64,
    pub objects: Vec<ObjectConfig>,
}

fn default_ticks() -> u64 {
    365
}

fn pair(values: &[f64], what: &str, label: &str) -> Result<NVec2, SimError> {
    if values.len() != 2 {
        return Err(SimError::Validation(format!(
            "{what} of {label:?} must have exactly 2 components, got {}",
            values.len()
        )));
    }
    Ok(NVec2::new(values[0], values[1]))
}

impl ScenarioConfig {
    /// Build a running manager from this configuration
    pub fn build(&self) -> Result<ObjectManager, SimError> {
        let mut manager = ObjectManager::new();
        manager.spawn_anchor(self.canvas.width, self.canvas.height);

        for oc in &self.objects {
            let position = pair(&oc.position, "position", &oc.label)?;
            manager.spawn_object(position, oc.mass, oc.label.clone())?;
            if let Some(v) = &oc.velocity {
                let velocity = pair(v, "velocity", &oc.label)?;
                manager.set_velocity(manager.len() - 1, velocity);
            }
        }

        Ok(manager)
    }
}
