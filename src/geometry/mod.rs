//! Vector and point primitives used by the simulation engine
//!
//! Both types wrap `nalgebra` storage:
//! - `Vector` (velocity, directional offset) over `NVec3`
//! - `Point`  (absolute position) over `NPoint3`

pub mod vector;
pub mod point;

pub type NVec3 = nalgebra::Vector3<f64>;
pub type NPoint3 = nalgebra::Point3<f64>;
