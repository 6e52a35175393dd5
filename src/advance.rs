use legion::*;
use legion::world::SubWorld;
use nalgebra::Vector2;

use crate::{
    body::{Body, NetForce, Trail},
    force::net_force,
    simulation::StepParams,
};

/// Gathers every body's net force against the positions at the start of the step.
#[system]
#[read_component(Body)]
#[write_component(NetForce)]
pub fn accumulate_forces(world: &mut SubWorld, #[resource] params: &StepParams) {
    let (entities, bodies): (Vec<Entity>, Vec<Body>) = <(Entity, &Body)>::query()
        .iter(world)
        .map(|(entity, body)| (*entity, *body))
        .unzip();

    let mut force_query = <&mut NetForce>::query();
    for (idx, entity) in entities.iter().enumerate() {
        let force = net_force(idx, &bodies, params.g, params.aggregation);
        if let Ok(net) = force_query.get_mut(world, *entity) {
            net.force = force;
        }
    }
}

#[system(for_each)]
pub fn advance_bodies(body: &mut Body, trail: &mut Trail, net: &NetForce) {
    advance_single_body(body, trail, net.force);
}

/// Advances bodies one at a time in insertion order. Later bodies feel the
/// already-moved earlier ones.
#[system]
#[write_component(Body)]
#[write_component(Trail)]
pub fn sequential_step(world: &mut SubWorld, #[resource] params: &StepParams) {
    let entities: Vec<Entity> = <(Entity, &Body)>::query()
        .iter(world)
        .map(|(entity, _)| *entity)
        .collect();

    let mut advance_query = <(&mut Body, &mut Trail)>::query();
    for (idx, entity) in entities.iter().enumerate() {
        let bodies: Vec<Body> = <&Body>::query().iter(world).copied().collect();
        let force = net_force(idx, &bodies, params.g, params.aggregation);
        if let Ok((body, trail)) = advance_query.get_mut(world, *entity) {
            advance_single_body(body, trail, force);
        }
    }
}

pub fn advance_single_body(body: &mut Body, trail: &mut Trail, force: Vector2<f64>) {
    body.integrate(force);
    body.bounce_off_bounds();
    trail.push(body.position);
}
