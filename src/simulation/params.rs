//! Numerical parameters for the simulation
//!
//! `Parameters` holds runtime settings:
//! - `min_distance`: pairs closer than this skip the force computation,
//!   collision resolution still runs for them

use crate::error::{Result, SimError};

pub const DEFAULT_MIN_DISTANCE: f64 = 1e-9;

#[derive(Debug, Clone, PartialEq)]
pub struct Parameters {
    pub min_distance: f64, // guard against division by a zero separation
}

impl Default for Parameters {
    fn default() -> Self {
        Self {
            min_distance: DEFAULT_MIN_DISTANCE,
        }
    }
}

impl Parameters {
    pub fn validate(self) -> Result<Self> {
        if !self.min_distance.is_finite() || self.min_distance < 0.0 {
            return Err(SimError::InvalidParameter {
                name: "min_distance",
                value: self.min_distance,
            });
        }
        Ok(self)
    }
}
