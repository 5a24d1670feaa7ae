//! Pairwise gravitational acceleration
//!
//! Unit-less law with no gravitational constant: `f = m_a * m_b / d^2`.
//! The force direction lives in the xy-plane (z is ignored for the angle),
//! and one tick is one unit of time, so the acceleration is added straight
//! into the velocity.

use log::warn;

use crate::geometry::vector::Vector;
use crate::simulation::states::{Body, BodyId, SolarSystem};

/// Velocity change applied to each body of a pair
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Impulse {
    pub first: Vector,
    pub second: Vector,
}

/// Apply the mutual attraction of `first` and `second` to their velocities.
///
/// Returns `None` without touching either body when their separation is
/// below `min_distance`; such pairs are always inside the collision radius,
/// so the collision pass resolves them right after.
pub fn accelerate(first: &mut Body, second: &mut Body, min_distance: f64) -> Option<Impulse> {
    let d = first.distance(second);
    if d < min_distance {
        warn!(
            "skipping gravity between {} and {}: separation {} below {}",
            first.name(),
            second.name(),
            d,
            min_distance
        );
        return None;
    }

    let f = first.mass * second.mass / (d * d);

    // direction from first towards second, 2D only
    let ang = (second.position.y() - first.position.y()).atan2(second.position.x() - first.position.x());
    let (sin, cos) = ang.sin_cos();

    // first is pulled along +dir, second along -dir
    let a_first = f / first.mass;
    let a_second = f / second.mass;
    let impulse = Impulse {
        first: Vector::planar(a_first * cos, a_first * sin),
        second: Vector::planar(-a_second * cos, -a_second * sin),
    };

    first.velocity = first.velocity.plus(&impulse.first);
    second.velocity = second.velocity.plus(&impulse.second);
    Some(impulse)
}

impl SolarSystem {
    /// Gravitational interaction of one pair, see [`accelerate`]
    pub fn accelerate(&mut self, a: BodyId, b: BodyId) -> Option<Impulse> {
        let min_distance = self.parameters.min_distance;
        let (first, second) = self.pair_mut(a, b);
        accelerate(first, second, min_distance)
    }
}
