//! Collision detection and resolution between two bodies
//!
//! Two bodies collide when their separation is below the mean of their radii.
//! The policy runs in a fixed order:
//! 1. a colliding planet is destroyed (first, then second)
//! 2. two suns merge into a brand-new sun at their midpoint, at rest, with the
//!    summed mass and the dominant type; both originals are destroyed
//! 3. otherwise a single sun absorbs the other body's mass (radius unchanged)

use log::{debug, info};

use crate::geometry::vector::Vector;
use crate::simulation::states::{Body, BodyId, SolarSystem};

/// What a collision check did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Collision {
    /// Two planets destroyed each other
    Planets { first: BodyId, second: BodyId },
    /// A sun swallowed the mass of a planet
    Absorbed { sun: BodyId, planet: BodyId },
    /// Two suns were replaced by a new one
    Merged {
        first: BodyId,
        second: BodyId,
        into: BodyId,
    },
}

pub fn overlapping(first: &Body, second: &Body) -> bool {
    first.distance(second) < (first.radius() + second.radius()) / 2.0
}

impl SolarSystem {
    pub fn handle_collisions(&mut self, a: BodyId, b: BodyId) -> Option<Collision> {
        let (first, second) = self.pair_mut(a, b);
        if !overlapping(first, second) {
            return None;
        }

        if first.is_planet() {
            first.exists = false;
        }
        if second.is_planet() {
            second.exists = false;
        }

        if first.is_sun() && second.is_sun() {
            let mass = first.mass + second.mass;
            let body_type = first.body_type().dominant(second.body_type());

            let mut position = first.position;
            let half_way = position.offset_to(&second.position).scaled(0.5);
            position.move_by(&half_way);

            first.exists = false;
            second.exists = false;

            let name = self.names.next_name();
            info!("merging {} and {} into {} ({}, mass {})", a, b, name, body_type, mass);
            let merged = Body::new(name, mass, position, Vector::zeros(), body_type);
            let into = self.insert(merged);
            return Some(Collision::Merged { first: a, second: b, into });
        }

        let outcome = if first.is_sun() {
            first.mass += second.mass;
            Collision::Absorbed { sun: a, planet: b }
        } else if second.is_sun() {
            second.mass += first.mass;
            Collision::Absorbed { sun: b, planet: a }
        } else {
            Collision::Planets { first: a, second: b }
        };
        debug!("collision: {:?}", outcome);
        Some(outcome)
    }
}
