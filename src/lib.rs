pub mod advance;
pub mod body;
pub mod error;
pub mod force;
pub mod logging;
pub mod palette;
#[cfg(feature = "gui")]
pub mod render;
pub mod simulation;
pub mod world_gen;

pub use body::{Body, NetForce, Trail, TRAIL_CAPACITY};
pub use error::{SimError, SimResult};
pub use force::{pairwise_force, Aggregation};
pub use palette::{Palette, Rgb};
pub use simulation::{FrameClock, Simulation, SimulationConfig, SpawnOutcome, UpdateMode};

#[cfg(test)]
mod force_test;
