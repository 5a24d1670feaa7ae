pub mod body_type;
pub mod naming;
pub mod states;
pub mod params;
pub mod forces;
pub mod collisions;
pub mod engine;
pub mod scenario;
pub mod simulator;
