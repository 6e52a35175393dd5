use legion::*;
use legion::EntityStore;
use log::{debug, info, warn};
use nalgebra::Vector2;
use std::time::{Duration, Instant};

use crate::{
    advance::{accumulate_forces_system, advance_bodies_system, sequential_step_system},
    body::{Body, NetForce, Trail},
    error::{SimError, SimResult},
    force::Aggregation,
    palette::{Palette, Rgb},
};

/// Velocity given to bodies spawned by the user.
pub const SPAWN_VELOCITY: [f64; 2] = [0.1, 0.1];

/// Per-step parameters handed to the step systems as a resource.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct StepParams {
    pub g: f64,
    pub aggregation: Aggregation,
}

/// Whether bodies in a step see each other's old or freshly updated positions.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum UpdateMode {
    Snapshot,
    Sequential,
}

impl Default for UpdateMode {
    fn default() -> Self {
        UpdateMode::Snapshot
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct SimulationConfig {
    pub width: u32,
    pub height: u32,
    pub max_bodies: usize,
    pub restitution: f64,
    pub mass: f64,
    pub g: f64,
    pub fps: u32,
    pub aggregation: Aggregation,
    pub update_mode: UpdateMode,
    pub palette: Palette,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        SimulationConfig {
            width: 800,
            height: 600,
            max_bodies: 10,
            restitution: 0.5,
            mass: 10.,
            g: 9.8,
            fps: 60,
            aggregation: Aggregation::default(),
            update_mode: UpdateMode::default(),
            palette: Palette::default(),
        }
    }
}

impl SimulationConfig {
    /// Parity-split aggregation with in-order updates.
    pub fn compatible(self) -> SimulationConfig {
        SimulationConfig {
            aggregation: Aggregation::ParitySplit,
            update_mode: UpdateMode::Sequential,
            ..self
        }
    }

    pub fn bounds(&self) -> Vector2<f64> {
        Vector2::new(self.width as f64, self.height as f64)
    }

    pub fn validate(&self) -> SimResult<()> {
        if self.width == 0 || self.height == 0 {
            return Err(SimError::InvalidBounds {
                width: self.width as f64,
                height: self.height as f64,
            });
        }
        if self.max_bodies == 0 {
            return Err(SimError::ZeroCapacity);
        }
        if self.fps == 0 {
            return Err(SimError::InvalidFps);
        }
        if !(self.mass.is_finite() && self.mass > 0.) {
            return Err(SimError::InvalidMass { mass: self.mass });
        }
        Ok(())
    }
}

/// Result of asking for a new body.
#[must_use]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SpawnOutcome {
    Added(Entity),
    AtCapacity { max_bodies: usize },
}

impl SpawnOutcome {
    pub fn is_added(&self) -> bool {
        matches!(self, SpawnOutcome::Added(_))
    }
}

pub struct Simulation {
    config: SimulationConfig,
    world: World,
    resources: Resources,
    schedule: Schedule,
}

impl Simulation {
    pub fn new(config: SimulationConfig) -> SimResult<Simulation> {
        config.validate()?;
        let mut resources = Resources::default();
        resources.insert(StepParams {
            g: config.g,
            aggregation: config.aggregation,
        });
        let schedule = match config.update_mode {
            UpdateMode::Snapshot => Schedule::builder()
                .add_system(accumulate_forces_system())
                .add_system(advance_bodies_system())
                .build(),
            UpdateMode::Sequential => Schedule::builder()
                .add_system(sequential_step_system())
                .build(),
        };
        info!(
            "Simulation {}x{}, up to {} bodies, {:?} aggregation, {:?} updates",
            config.width, config.height, config.max_bodies, config.aggregation, config.update_mode
        );
        Ok(Simulation {
            config,
            world: World::default(),
            resources,
            schedule,
        })
    }

    pub fn config(&self) -> &SimulationConfig {
        &self.config
    }

    pub fn len(&self) -> usize {
        self.world.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn is_full(&self) -> bool {
        self.len() >= self.config.max_bodies
    }

    /// Inserts a fully built body, or reports that the simulation is full.
    pub fn add_body(
        &mut self,
        position: Vector2<f64>,
        velocity: Vector2<f64>,
        mass: f64,
        color: Rgb,
        restitution: f64,
    ) -> SimResult<SpawnOutcome> {
        if self.is_full() {
            warn!(
                "Maximum number of bodies reached ({}), ignoring body at ({}, {})",
                self.config.max_bodies, position.x, position.y
            );
            return Ok(SpawnOutcome::AtCapacity {
                max_bodies: self.config.max_bodies,
            });
        }
        let body = Body::new(
            position,
            velocity,
            mass,
            color,
            restitution,
            self.config.bounds(),
        )?;
        let entity = self
            .world
            .push((body, Trail::with_capacity(), NetForce::default()));
        debug!(
            "Added body {} at ({}, {}) with mass {}",
            self.len(),
            position.x,
            position.y,
            mass
        );
        Ok(SpawnOutcome::Added(entity))
    }

    /// Spawns a body with the configured mass and restitution, coloured by
    /// how many bodies already exist.
    pub fn spawn_at(&mut self, position: Vector2<f64>) -> SimResult<SpawnOutcome> {
        let color = self.config.palette.color_for(self.len());
        self.add_body(
            position,
            Vector2::from(SPAWN_VELOCITY),
            self.config.mass,
            color,
            self.config.restitution,
        )
    }

    /// Advances every body by one frame under gravitational constant `g`.
    pub fn step(&mut self, g: f64) {
        if let Some(mut params) = self.resources.get_mut::<StepParams>() {
            params.g = g;
        }
        self.schedule.execute(&mut self.world, &mut self.resources);
    }

    /// Bodies in insertion order.
    pub fn bodies(&self) -> Vec<Body> {
        <&Body>::query().iter(&self.world).copied().collect()
    }

    pub fn body(&self, entity: Entity) -> Option<Body> {
        let entry = self.world.entry_ref(entity).ok()?;
        let body = entry.get_component::<Body>().ok()?;
        Some(*body)
    }

    pub fn trail(&self, entity: Entity) -> Option<Vec<Vector2<f64>>> {
        let entry = self.world.entry_ref(entity).ok()?;
        let trail = entry.get_component::<Trail>().ok()?;
        Some(trail.iter().copied().collect())
    }

    pub fn for_each_body<F>(&self, mut f: F)
    where
        F: FnMut(&Body, &Trail),
    {
        let mut query = <(&Body, &Trail)>::query();
        for (body, trail) in query.iter(&self.world) {
            f(body, trail);
        }
    }
}

/// Holds the frame loop to a target rate.
pub struct FrameClock {
    frame_time: Duration,
    last_tick: Instant,
}

impl FrameClock {
    pub fn new(fps: u32) -> FrameClock {
        FrameClock {
            frame_time: Duration::from_secs(1) / fps.max(1),
            last_tick: Instant::now(),
        }
    }

    pub fn frame_time(&self) -> Duration {
        self.frame_time
    }

    /// Sleeps off whatever is left of the current frame and returns how long
    /// the frame's work took.
    pub fn tick(&mut self) -> Duration {
        let elapsed = self.last_tick.elapsed();
        debug!("Frame time: {} ms", elapsed.as_millis());
        if let Some(remaining) = self.frame_time.checked_sub(elapsed) {
            std::thread::sleep(remaining);
        }
        self.last_tick = Instant::now();
        elapsed
    }
}
