//! Mutable absolute position

use std::fmt;

use super::vector::Vector;
use super::NPoint3;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    p: NPoint3,
}

impl Point {
    pub fn new(x: f64, y: f64, z: f64) -> Self {
        Self { p: NPoint3::new(x, y, z) }
    }

    pub fn planar(x: f64, y: f64) -> Self {
        Self::new(x, y, 0.0)
    }

    pub fn origin() -> Self {
        Self { p: NPoint3::origin() }
    }

    /// Build a point from a 2 or 3 element slice, z defaults to 0
    pub fn from_slice(c: &[f64]) -> Option<Self> {
        match *c {
            [x, y] => Some(Self::planar(x, y)),
            [x, y, z] => Some(Self::new(x, y, z)),
            _ => None,
        }
    }

    pub fn x(&self) -> f64 {
        self.p.x
    }

    pub fn y(&self) -> f64 {
        self.p.y
    }

    pub fn z(&self) -> f64 {
        self.p.z
    }

    pub fn to_array(&self) -> [f64; 3] {
        [self.p.x, self.p.y, self.p.z]
    }

    /// Translate in place and return `self` for chaining
    pub fn move_by(&mut self, by: &Vector) -> &mut Self {
        self.p += *by.as_nvec();
        self
    }

    /// Translated copy, `self` is left untouched
    pub fn translate(&self, by: &Vector) -> Point {
        Point { p: self.p + *by.as_nvec() }
    }

    /// Offset from `self` to `to`
    pub fn offset_to(&self, to: &Point) -> Vector {
        Vector::from_nvec(to.p - self.p)
    }

    pub fn distance(&self, to: &Point) -> f64 {
        to.offset_to(self).length()
    }
}

impl Default for Point {
    fn default() -> Self {
        Self::origin()
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "<{}, {}, {}>", self.p.x, self.p.y, self.p.z)
    }
}

/// Free-function form of [`Point::distance`]
pub fn distance(p: &Point, q: &Point) -> f64 {
    p.distance(q)
}
