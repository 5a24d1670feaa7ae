//! Error types for scenario loading and saving
//!
//! The engine itself never fails; every error here comes from the boundary
//! where presets are read, validated, or written back.

use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum SimError {
    /// Body type ordinal outside the closed enumeration
    #[error("Unknown body type ordinal: {0}")]
    UnknownBodyType(u8),

    /// Radius is derived from log(mass), so mass must be a positive finite number
    #[error("Body {name:?} has invalid mass {mass}")]
    InvalidMass { name: String, mass: f64 },

    /// Position or velocity with other than 2 or 3 components
    #[error("Body {name:?}: {field} needs 2 or 3 components, got {len}")]
    BadVectorLength {
        name: String,
        field: &'static str,
        len: usize,
    },

    /// A planet ordinal found in the `suns` list
    #[error("Body {0:?} is listed under suns but has the planet type")]
    PlanetListedAsSun(String),

    #[error("Unknown simulation {0:?}")]
    UnknownSimulation(String),

    #[error("Invalid parameter {name}: {value}")]
    InvalidParameter { name: &'static str, value: f64 },

    #[error("Cannot access {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Bad scenario file format: {0}")]
    Format(#[from] serde_yaml::Error),
}

pub type Result<T> = std::result::Result<T, SimError>;
