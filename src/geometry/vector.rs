//! Immutable 3D vector with its length and unit direction computed at construction
//!
//! A vector shorter than [`NORMALIZE_EPSILON`] has no meaningful direction; in that
//! case the "normalized" form keeps the raw components instead of dividing by a
//! near-zero length, so nothing downstream ever sees a NaN.

use std::fmt;

use super::NVec3;

/// Below this length a vector is not normalized
pub const NORMALIZE_EPSILON: f64 = 1e-6;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Vector {
    raw: NVec3,  // components as given
    unit: NVec3, // unit direction, or `raw` when too short to normalize
    len: f64,    // euclidean norm of `raw`
}

impl Vector {
    pub fn new(x: f64, y: f64, z: f64) -> Self {
        Self::from_nvec(NVec3::new(x, y, z))
    }

    /// Vector in the xy-plane (z = 0)
    pub fn planar(x: f64, y: f64) -> Self {
        Self::new(x, y, 0.0)
    }

    pub fn zeros() -> Self {
        Self::from_nvec(NVec3::zeros())
    }

    pub fn from_nvec(raw: NVec3) -> Self {
        let len = raw.norm();
        let unit = if len < NORMALIZE_EPSILON { raw } else { raw / len };
        Self { raw, unit, len }
    }

    /// Build a vector from a 2 or 3 element slice, z defaults to 0
    pub fn from_slice(c: &[f64]) -> Option<Self> {
        match *c {
            [x, y] => Some(Self::planar(x, y)),
            [x, y, z] => Some(Self::new(x, y, z)),
            _ => None,
        }
    }

    /// Replace the components, returning a new vector with fresh derived values
    pub fn set(&self, x: f64, y: f64, z: f64) -> Self {
        Self::new(x, y, z)
    }

    pub fn x(&self) -> f64 {
        self.raw.x
    }

    pub fn y(&self) -> f64 {
        self.raw.y
    }

    pub fn z(&self) -> f64 {
        self.raw.z
    }

    pub fn as_nvec(&self) -> &NVec3 {
        &self.raw
    }

    pub fn to_array(&self) -> [f64; 3] {
        [self.raw.x, self.raw.y, self.raw.z]
    }

    pub fn length(&self) -> f64 {
        self.len
    }

    /// Unit direction (raw components when shorter than `NORMALIZE_EPSILON`)
    pub fn normalized(&self) -> &NVec3 {
        &self.unit
    }

    pub fn dot(&self, other: &Vector) -> f64 {
        self.raw.dot(&other.raw)
    }

    /// Dot product of the two normalized forms
    pub fn normalized_dot(&self, other: &Vector) -> f64 {
        self.unit.dot(&other.unit)
    }

    /// Signed angle in (-pi, pi] rotating `self` onto `other`, measured in the xy-plane
    pub fn angle_towards(&self, other: &Vector) -> f64 {
        let cross_z = self.unit.x * other.unit.y - self.unit.y * other.unit.x;
        cross_z.atan2(self.normalized_dot(other))
    }

    pub fn scaled(&self, k: f64) -> Self {
        Self::from_nvec(self.raw * k)
    }

    pub fn plus(&self, other: &Vector) -> Self {
        Self::from_nvec(self.raw + other.raw)
    }
}

impl Default for Vector {
    fn default() -> Self {
        Self::zeros()
    }
}

impl From<NVec3> for Vector {
    fn from(raw: NVec3) -> Self {
        Self::from_nvec(raw)
    }
}

impl fmt::Display for Vector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "<{}, {}, {}>", self.raw.x, self.raw.y, self.raw.z)
    }
}

/// Free-function form of [`Vector::dot`]
pub fn dot(a: &Vector, b: &Vector) -> f64 {
    a.dot(b)
}

/// Free-function form of [`Vector::normalized_dot`]
pub fn normalized_dot(a: &Vector, b: &Vector) -> f64 {
    a.normalized_dot(b)
}
