//! Core state types for the solar system simulation.
//!
//! - `Body`        one simulated mass (planet or one of the star kinds)
//! - `BodyId`      stable slot index of a body inside its system
//! - `SolarSystem` insertion-ordered arena of bodies
//!
//! Bodies are never removed from the arena. Destroying a body clears its
//! `exists` flag, so every `BodyId` stays valid for the lifetime of the
//! system and renderers can key their own state by it.

use std::fmt;

use crate::geometry::point::Point;
use crate::geometry::vector::Vector;
use crate::simulation::body_type::BodyType;
use crate::simulation::naming::NameGenerator;
use crate::simulation::params::Parameters;

/// Radius is `max(log_{RADIUS_LOG_BASE}(mass), MIN_RADIUS)`
pub const RADIUS_LOG_BASE: f64 = 1.1;
pub const MIN_RADIUS: f64 = 10.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct BodyId(usize);

impl BodyId {
    pub fn index(self) -> usize {
        self.0
    }
}

impl fmt::Display for BodyId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

#[derive(Debug, Clone)]
pub struct Body {
    name: String,
    pub mass: f64, // grows when absorbing planets
    radius: f64, // fixed at construction, not refreshed when mass changes
    pub position: Point,
    pub velocity: Vector,
    body_type: BodyType,
    pub exists: bool,
}

impl Body {
    pub fn new(
        name: impl Into<String>,
        mass: f64,
        position: Point,
        velocity: Vector,
        body_type: BodyType,
    ) -> Self {
        Self {
            name: name.into(),
            mass,
            radius: radius_for_mass(mass),
            position,
            velocity,
            body_type,
            exists: true,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn radius(&self) -> f64 {
        self.radius
    }

    pub fn body_type(&self) -> BodyType {
        self.body_type
    }

    pub fn is_planet(&self) -> bool {
        self.body_type.is_planet()
    }

    pub fn is_sun(&self) -> bool {
        self.body_type.is_sun()
    }

    pub fn distance(&self, other: &Body) -> f64 {
        self.position.distance(&other.position)
    }
}

impl fmt::Display for Body {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "<{}, {}, {}, {}> (mass={} | radius={})",
            self.body_type, self.name, self.position, self.velocity, self.mass, self.radius
        )
    }
}

pub fn radius_for_mass(mass: f64) -> f64 {
    mass.log(RADIUS_LOG_BASE).max(MIN_RADIUS)
}

#[derive(Debug, Clone, Default)]
pub struct SolarSystem {
    bodies: Vec<Body>, // every body ever added, insertion order
    initial: Vec<Body>, // snapshot taken before the first tick
    pub(crate) names: NameGenerator,
    pub(crate) parameters: Parameters,
    pub(crate) ticks: u64,
}

impl SolarSystem {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_parameters(parameters: Parameters) -> Self {
        Self {
            parameters,
            ..Self::default()
        }
    }

    /// Append a body, chaining
    pub fn add(&mut self, body: Body) -> &mut Self {
        self.insert(body);
        self
    }

    /// Append a body and return its id
    pub fn insert(&mut self, body: Body) -> BodyId {
        let id = BodyId(self.bodies.len());
        self.bodies.push(body);
        id
    }

    /// Logical removal: the slot stays, `exists` is cleared
    pub fn remove(&mut self, id: BodyId) -> &mut Self {
        if let Some(body) = self.bodies.get_mut(id.0) {
            body.exists = false;
        }
        self
    }

    pub fn get(&self, id: BodyId) -> Option<&Body> {
        self.bodies.get(id.0)
    }

    pub fn get_mut(&mut self, id: BodyId) -> Option<&mut Body> {
        self.bodies.get_mut(id.0)
    }

    /// All bodies ever added, destroyed ones included, in insertion order
    pub fn iter(&self) -> impl Iterator<Item = (BodyId, &Body)> {
        self.bodies.iter().enumerate().map(|(i, b)| (BodyId(i), b))
    }

    pub fn live(&self) -> impl Iterator<Item = (BodyId, &Body)> {
        self.iter().filter(|(_, b)| b.exists)
    }

    pub fn live_ids(&self) -> Vec<BodyId> {
        self.live().map(|(id, _)| id).collect()
    }

    pub fn len(&self) -> usize {
        self.bodies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bodies.is_empty()
    }

    pub fn live_count(&self) -> usize {
        self.live().count()
    }

    pub fn parameters(&self) -> &Parameters {
        &self.parameters
    }

    /// Number of completed ticks
    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    pub fn capture_initial_conditions(&mut self) {
        self.initial = self.bodies.clone();
    }

    pub fn initial_conditions(&self) -> &[Body] {
        &self.initial
    }

    pub(crate) fn bodies_mut(&mut self) -> &mut [Body] {
        &mut self.bodies
    }

    /// Two distinct bodies borrowed mutably at once
    pub(crate) fn pair_mut(&mut self, a: BodyId, b: BodyId) -> (&mut Body, &mut Body) {
        debug_assert_ne!(a, b, "a body cannot interact with itself");
        if a.0 < b.0 {
            let (left, right) = self.bodies.split_at_mut(b.0);
            (&mut left[a.0], &mut right[0])
        } else {
            let (left, right) = self.bodies.split_at_mut(a.0);
            (&mut right[0], &mut left[b.0])
        }
    }
}
