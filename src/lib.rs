pub mod simulation;
pub mod configuration;
pub mod boundary;

pub use simulation::vector::{distance, NVec2};
pub use simulation::params::{ANCHOR_RADIUS, AU, G, SOLAR_MASS, SPAWN_RADIUS, TIMESTEP};
pub use simulation::error::SimError;
pub use simulation::body::{BodySnapshot, CelestialObject};
pub use simulation::manager::ObjectManager;

pub use boundary::{RenderFrame, Renderer, SpawnRequest};

pub use configuration::config::{CanvasConfig, ObjectConfig, ScenarioConfig};
