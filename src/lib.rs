pub mod error;
pub mod geometry;
pub mod simulation;
pub mod configuration;
pub mod visualization;
pub mod benchmark;

pub use error::{Result, SimError};

pub use geometry::point::{distance, Point};
pub use geometry::vector::{dot, normalized_dot, Vector};
pub use geometry::{NPoint3, NVec3};

pub use simulation::body_type::BodyType;
pub use simulation::naming::NameGenerator;
pub use simulation::states::{Body, BodyId, SolarSystem};
pub use simulation::params::Parameters;
pub use simulation::forces::{accelerate, Impulse};
pub use simulation::collisions::Collision;
pub use simulation::engine::StepReport;
pub use simulation::scenario::Scenario;
pub use simulation::simulator::{Display, Simulator};

pub use configuration::config::{BodyConfig, ParametersConfig, ScenarioFile, SimulationConfig};

pub use visualization::console::{ConsoleDisplay, DisplayInfo};

pub use benchmark::benchmark::bench_step;
