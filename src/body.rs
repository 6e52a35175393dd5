use std::collections::VecDeque;

use nalgebra::Vector2;

use crate::error::{SimError, SimResult};
use crate::palette::Rgb;

pub const TRAIL_CAPACITY: usize = 100;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Body {
    pub position: Vector2<f64>,
    pub velocity: Vector2<f64>,
    pub mass: f64,
    pub radius: f64,
    pub color: Rgb,
    pub restitution: f64,
    pub bounds: Vector2<f64>,
}

impl Body {
    /// Builds a body, rejecting masses that would poison the force law.
    pub fn new(
        position: Vector2<f64>,
        velocity: Vector2<f64>,
        mass: f64,
        color: Rgb,
        restitution: f64,
        bounds: Vector2<f64>,
    ) -> SimResult<Body> {
        if !(mass.is_finite() && mass > 0.) {
            return Err(SimError::InvalidMass { mass });
        }
        Ok(Body {
            position,
            velocity,
            mass,
            radius: radius_for_mass(mass),
            color,
            restitution,
            bounds,
        })
    }

    /// Semi-implicit Euler over one frame: velocity first, then position.
    pub fn integrate(&mut self, force: Vector2<f64>) {
        let acceleration = force / self.mass;
        self.velocity += acceleration;
        self.position += self.velocity;
    }

    /// Clamps each axis into `[0, bound]`, reflecting and damping the
    /// velocity on that axis when a wall was crossed.
    pub fn bounce_off_bounds(&mut self) {
        for axis in 0..2 {
            let bound = self.bounds[axis];
            if self.position[axis] < 0. {
                self.position[axis] = 0.;
                self.velocity[axis] *= -self.restitution;
            } else if self.position[axis] > bound {
                self.position[axis] = bound;
                self.velocity[axis] *= -self.restitution;
            }
        }
    }

    pub fn in_bounds(&self) -> bool {
        (0..2).all(|axis| self.position[axis] >= 0. && self.position[axis] <= self.bounds[axis])
    }
}

pub fn radius_for_mass(mass: f64) -> f64 {
    2. * mass.sqrt()
}

/// Recent positions of a body, oldest first.
#[derive(Clone, Debug, PartialEq, Default)]
pub struct Trail {
    pub points: VecDeque<Vector2<f64>>,
}

impl Trail {
    pub fn with_capacity() -> Trail {
        Trail {
            points: VecDeque::with_capacity(TRAIL_CAPACITY),
        }
    }

    pub fn push(&mut self, point: Vector2<f64>) {
        if self.points.len() == TRAIL_CAPACITY {
            self.points.pop_front();
        }
        self.points.push_back(point);
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn oldest(&self) -> Option<&Vector2<f64>> {
        self.points.front()
    }

    pub fn newest(&self) -> Option<&Vector2<f64>> {
        self.points.back()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Vector2<f64>> {
        self.points.iter()
    }
}

/// Net force gathered for a body before it is advanced.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct NetForce {
    pub force: Vector2<f64>,
}

impl Default for NetForce {
    fn default() -> Self {
        NetForce {
            force: Vector2::zeros(),
        }
    }
}
