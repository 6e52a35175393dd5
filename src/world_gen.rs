use log::info;
use nalgebra::Vector2;

use crate::{
    error::SimResult,
    simulation::{Simulation, SpawnOutcome},
};

pub const TRIANGLE_SIDE: f64 = 200.;

/// Places three bodies on an equilateral triangle near the bottom third of
/// the world, each drifting slightly.
pub fn init_bodies(simulation: &mut Simulation) -> SimResult<Vec<SpawnOutcome>> {
    let config = simulation.config().clone();
    let apex_height = (TRIANGLE_SIDE * TRIANGLE_SIDE - (TRIANGLE_SIDE / 2.).powi(2)).sqrt();
    let left = config.width as f64 / 2. - TRIANGLE_SIDE / 2.;
    let base = config.height as f64 * 2. / 3.;

    let seeds = [
        (Vector2::new(left, base), Vector2::new(0.1, 0.1)),
        (
            Vector2::new(left + TRIANGLE_SIDE / 2., base - apex_height),
            Vector2::new(-0.1, 0.1),
        ),
        (
            Vector2::new(left + TRIANGLE_SIDE, base),
            Vector2::new(0.1, -0.1),
        ),
    ];

    let mut outcomes = Vec::with_capacity(seeds.len());
    for (position, velocity) in seeds.iter() {
        let color = config.palette.color_for(simulation.len());
        outcomes.push(simulation.add_body(
            *position,
            *velocity,
            config.mass,
            color,
            config.restitution,
        )?);
    }
    info!(
        "Seeded {} bodies on a triangle of side {}",
        outcomes.iter().filter(|o| o.is_added()).count(),
        TRIANGLE_SIDE
    );
    Ok(outcomes)
}
