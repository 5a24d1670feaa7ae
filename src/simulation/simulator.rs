//! Cooperative driving loop
//!
//! Each iteration honours a pending save request, advances the system one
//! tick unless the display reports a pause, and hands the result to the
//! display. Stop conditions are only checked between ticks.

use std::path::{Path, PathBuf};

use log::{error, info};

use crate::configuration::config::ScenarioFile;
use crate::error::Result;
use crate::simulation::scenario::Scenario;
use crate::simulation::states::SolarSystem;

/// Receives the body snapshot every iteration and supplies the control signals
pub trait Display {
    fn init(&mut self, _system: &SolarSystem) {}

    fn draw(&mut self, system: &SolarSystem);

    /// Skip the tick but still draw
    fn paused(&self) -> bool {
        false
    }

    fn save_requested(&self) -> bool {
        false
    }

    fn reset_save_marker(&mut self) {}

    fn stop_requested(&self) -> bool {
        false
    }

    fn deinit(&mut self) {}
}

pub struct Simulator {
    scenario: Scenario,
    preset_path: PathBuf, // where save requests are written
    max_iterations: Option<u64>, // computed ticks, paused iterations do not count
}

impl Simulator {
    pub fn new(scenario: Scenario, preset_path: impl Into<PathBuf>) -> Self {
        Self {
            scenario,
            preset_path: preset_path.into(),
            max_iterations: None,
        }
    }

    /// Load simulation `name` from the preset file at `path`
    pub fn load(path: &Path, name: &str) -> Result<Self> {
        let file = ScenarioFile::load(path)?;
        let scenario = Scenario::build_scenario(name, file.simulation(name)?)?;
        Ok(Self::new(scenario, path))
    }

    pub fn with_max_iterations(mut self, max_iterations: Option<u64>) -> Self {
        self.max_iterations = max_iterations;
        self
    }

    pub fn scenario(&self) -> &Scenario {
        &self.scenario
    }

    pub fn system(&self) -> &SolarSystem {
        &self.scenario.system
    }

    pub fn system_mut(&mut self) -> &mut SolarSystem {
        &mut self.scenario.system
    }

    /// Store the captured initial conditions under the scenario name,
    /// keeping every other simulation already in the preset file
    pub fn save(&self) -> Result<()> {
        self.save_as(&self.scenario.name)
    }

    pub fn save_as(&self, name: &str) -> Result<()> {
        let mut file = ScenarioFile::load_or_default(&self.preset_path);
        file.insert(name, self.scenario.to_config());
        file.save(&self.preset_path)?;
        info!("saved simulation {:?} to {}", name, self.preset_path.display());
        Ok(())
    }

    /// Run until the display asks to stop or `max_iterations` ticks were computed.
    /// Returns the number of computed ticks.
    pub fn run(&mut self, display: &mut dyn Display) -> Result<u64> {
        self.scenario.system.capture_initial_conditions();
        display.init(&self.scenario.system);
        info!("running simulation {:?}", self.scenario.name);

        let mut computed = 0u64;
        loop {
            let limit_reached = self.max_iterations.is_some_and(|max| computed >= max);
            if limit_reached || display.stop_requested() {
                break;
            }

            if display.save_requested() {
                if let Err(err) = self.save() {
                    error!("saving simulation {:?} failed: {}", self.scenario.name, err);
                    display.deinit();
                    return Err(err);
                }
                display.reset_save_marker();
            }

            if !display.paused() {
                self.scenario.system.compute_next_step();
                computed += 1;
            }
            display.draw(&self.scenario.system);
        }

        display.deinit();
        info!(
            "simulation {:?} stopped after {} ticks, {} live bodies",
            self.scenario.name,
            computed,
            self.scenario.system.live_count()
        );
        Ok(computed)
    }
}
