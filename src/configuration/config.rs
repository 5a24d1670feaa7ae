//! Configuration types for loading and saving scenario presets as YAML.
//!
//! One file holds any number of named simulations:
//!
//! - [`ScenarioFile`]       – top-level wrapper, `simulations` keyed by name
//! - [`SimulationConfig`]   – one preset: optional parameters, planets, suns
//! - [`ParametersConfig`]   – numerical parameters overriding the defaults
//! - [`BodyConfig`]         – initial state of one body
//!
//! # YAML format
//!
//! ```yaml
//! simulations:
//!   default:
//!     parameters:
//!       min_distance: 1.0e-9
//!     planets:
//!       - name: Terra
//!         mass: 20.0
//!         body_type: 0
//!         initial_position: [ 200.0, 0.0 ]
//!         velocity: [ 0.0, 0.7 ]
//!     suns:
//!       - name: Sol
//!         mass: 100.0
//!         body_type: 1          # 1 star, 2 white dwarf, 3 giant, 4 super giant
//!         initial_position: [ 0.0, 0.0, 0.0 ]
//!         velocity: [ 0.0, 0.0, 0.0 ]
//! ```
//!
//! The scenario builder maps these into runtime bodies and validates them.

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{Result, SimError};

/// Parameter overrides, missing fields keep their defaults
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
pub struct ParametersConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min_distance: Option<f64>, // force is skipped below this separation
}

/// Initial state of a single body
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct BodyConfig {
    pub name: String,
    pub mass: f64,
    #[serde(default)]
    pub body_type: u8, // ordinal, 0 = planet
    pub initial_position: Vec<f64>, // 2 or 3 components
    pub velocity: Vec<f64>, // 2 or 3 components
}

/// One named simulation preset
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
pub struct SimulationConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parameters: Option<ParametersConfig>,
    #[serde(default)]
    pub planets: Vec<BodyConfig>,
    #[serde(default)]
    pub suns: Vec<BodyConfig>,
}

/// Top-level preset file
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
pub struct ScenarioFile {
    pub simulations: BTreeMap<String, SimulationConfig>,
}

impl ScenarioFile {
    pub fn from_yaml_str(text: &str) -> Result<Self> {
        Ok(serde_yaml::from_str(text)?)
    }

    pub fn to_yaml_string(&self) -> Result<String> {
        Ok(serde_yaml::to_string(self)?)
    }

    pub fn load(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path).map_err(|source| SimError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_yaml_str(&text)
    }

    /// Load `path` for updating: a missing or unreadable file yields an empty table
    pub fn load_or_default(path: &Path) -> Self {
        match Self::load(path) {
            Ok(file) => file,
            Err(err) => {
                if path.exists() {
                    log::warn!("replacing unreadable scenario file {}: {}", path.display(), err);
                }
                Self::default()
            }
        }
    }

    pub fn save(&self, path: &Path) -> Result<()> {
        let text = self.to_yaml_string()?;
        fs::write(path, text).map_err(|source| SimError::Io {
            path: path.to_path_buf(),
            source,
        })
    }

    pub fn simulation(&self, name: &str) -> Result<&SimulationConfig> {
        self.simulations
            .get(name)
            .ok_or_else(|| SimError::UnknownSimulation(name.to_string()))
    }

    /// Insert or replace a simulation, other entries are kept
    pub fn insert(&mut self, name: impl Into<String>, simulation: SimulationConfig) -> &mut Self {
        self.simulations.insert(name.into(), simulation);
        self
    }
}
