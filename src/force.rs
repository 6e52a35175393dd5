use nalgebra::Vector2;

use crate::body::Body;

/// Floor applied to the distance between two bodies.
pub const MIN_DISTANCE: f64 = 1.;
/// Pairs closer than this exert no force at all.
pub const CUTOFF_DISTANCE: f64 = 40.;

/// Gravitational pull exerted on `a` by `b`, pointing from `a` toward `b`.
pub fn pairwise_force(a: &Body, b: &Body, g: f64) -> Vector2<f64> {
    let delta = b.position - a.position;
    let distance = delta.norm().max(MIN_DISTANCE);
    if distance < CUTOFF_DISTANCE {
        return Vector2::zeros();
    }
    let magnitude = g * a.mass * b.mass / (distance * distance);
    let angle = delta.y.atan2(delta.x);
    Vector2::new(magnitude * angle.cos(), magnitude * angle.sin())
}

/// How the pairwise forces acting on one body are folded into its net force.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Aggregation {
    /// Sum every x component and every y component.
    Componentwise,
    /// Flatten `[0, 0, fx1, fy1, fx2, fy2, ..]` and sum even slots into x,
    /// odd slots into y.
    ParitySplit,
}

impl Default for Aggregation {
    fn default() -> Self {
        Aggregation::Componentwise
    }
}

impl Aggregation {
    pub fn combine<I>(self, forces: I) -> Vector2<f64>
    where
        I: IntoIterator<Item = Vector2<f64>>,
    {
        match self {
            Aggregation::Componentwise => forces
                .into_iter()
                .fold(Vector2::zeros(), |acc, force| acc + force),
            Aggregation::ParitySplit => {
                let mut flat = vec![0., 0.];
                for force in forces {
                    flat.push(force.x);
                    flat.push(force.y);
                }
                let mut even = 0.;
                let mut odd = 0.;
                for (i, value) in flat.iter().enumerate() {
                    if i % 2 == 0 {
                        even += value;
                    } else {
                        odd += value;
                    }
                }
                Vector2::new(even, odd)
            }
        }
    }
}

/// Net force on `bodies[idx]` from every other entry, skipping `idx` itself
/// by position in the slice rather than by value.
pub fn net_force(idx: usize, bodies: &[Body], g: f64, aggregation: Aggregation) -> Vector2<f64> {
    let body = &bodies[idx];
    aggregation.combine(
        bodies
            .iter()
            .enumerate()
            .filter(|(i, _)| *i != idx)
            .map(|(_, other)| pairwise_force(body, other, g)),
    )
}
