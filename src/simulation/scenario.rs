//! Build fully-initialized simulation scenarios from configuration
//!
//! Takes a `SimulationConfig` (YAML-facing) and produces the runtime bundle:
//! - numerical parameters (`Parameters`)
//! - system state (`SolarSystem` with every body at tick 0)
//!
//! All validation of preset data happens here, so the engine only ever sees
//! known body types, positive masses and well-formed vectors.

use log::info;

use crate::configuration::config::{BodyConfig, ParametersConfig, SimulationConfig};
use crate::error::{Result, SimError};
use crate::geometry::point::Point;
use crate::geometry::vector::Vector;
use crate::simulation::body_type::BodyType;
use crate::simulation::params::Parameters;
use crate::simulation::states::{Body, SolarSystem};

/// A named, ready-to-run simulation
#[derive(Debug, Clone)]
pub struct Scenario {
    pub name: String,
    pub system: SolarSystem,
}

impl Scenario {
    /// Planets are added first, then suns, each in file order
    pub fn build_scenario(name: &str, cfg: &SimulationConfig) -> Result<Self> {
        let parameters = build_parameters(cfg.parameters.as_ref())?;
        let mut system = SolarSystem::with_parameters(parameters);

        for planet in &cfg.planets {
            system.add(build_body(planet, BodyType::Planet)?);
        }
        for sun in &cfg.suns {
            let body_type = BodyType::try_from(sun.body_type)?;
            if body_type.is_planet() {
                return Err(SimError::PlanetListedAsSun(sun.name.clone()));
            }
            system.add(build_body(sun, body_type)?);
        }

        // saving before the first tick must still see the preset bodies
        system.capture_initial_conditions();

        info!(
            "scenario {:?}: {} planets, {} suns",
            name,
            cfg.planets.len(),
            cfg.suns.len()
        );
        Ok(Self {
            name: name.to_string(),
            system,
        })
    }

    /// Preset holding the captured initial conditions of this scenario
    pub fn to_config(&self) -> SimulationConfig {
        let mut cfg = SimulationConfig {
            parameters: Some(ParametersConfig {
                min_distance: Some(self.system.parameters().min_distance),
            }),
            ..SimulationConfig::default()
        };
        for body in self.system.initial_conditions() {
            let entry = body_config(body);
            if body.is_sun() {
                cfg.suns.push(entry);
            } else {
                cfg.planets.push(entry);
            }
        }
        cfg
    }
}

fn build_parameters(cfg: Option<&ParametersConfig>) -> Result<Parameters> {
    let mut parameters = Parameters::default();
    if let Some(min_distance) = cfg.and_then(|p| p.min_distance) {
        parameters.min_distance = min_distance;
    }
    parameters.validate()
}

fn build_body(bc: &BodyConfig, body_type: BodyType) -> Result<Body> {
    if !bc.mass.is_finite() || bc.mass <= 0.0 {
        return Err(SimError::InvalidMass {
            name: bc.name.clone(),
            mass: bc.mass,
        });
    }
    let position = Point::from_slice(&bc.initial_position).ok_or_else(|| SimError::BadVectorLength {
        name: bc.name.clone(),
        field: "initial_position",
        len: bc.initial_position.len(),
    })?;
    let velocity = Vector::from_slice(&bc.velocity).ok_or_else(|| SimError::BadVectorLength {
        name: bc.name.clone(),
        field: "velocity",
        len: bc.velocity.len(),
    })?;
    Ok(Body::new(bc.name.clone(), bc.mass, position, velocity, body_type))
}

fn body_config(body: &Body) -> BodyConfig {
    BodyConfig {
        name: body.name().to_string(),
        mass: body.mass,
        body_type: body.body_type().ordinal(),
        initial_position: body.position.to_array().to_vec(),
        velocity: body.velocity.to_array().to_vec(),
    }
}
