use solarsim::{
    BodyType, ConsoleDisplay, Display, DisplayInfo, Point, Scenario, ScenarioFile, SimError, Simulator,
    SolarSystem, Vector,
};

use std::fs;
use std::path::PathBuf;

const PRESETS: &str = r#"
simulations:
  default:
    planets:
      - name: Terra
        mass: 20.0
        body_type: 0
        initial_position: [200.0, 0.0]
        velocity: [0.0, 0.7]
    suns:
      - name: Sol
        mass: 100.0
        body_type: 1
        initial_position: [0.0, 0.0, 0.0]
        velocity: [0.0, 0.0, 0.0]
      - name: Rigel
        mass: 90.0
        body_type: 4
        initial_position: [-5000.0, 0.0, 10.0]
        velocity: [0.0, 0.0]
  collide:
    parameters:
      min_distance: 0.5
    suns:
      - name: Left
        mass: 100.0
        body_type: 2
        initial_position: [-4.0, 0.0]
        velocity: [0.0, 0.0]
      - name: Right
        mass: 50.0
        body_type: 3
        initial_position: [4.0, 0.0]
        velocity: [0.0, 0.0]
"#;

/// Parse the shared presets
pub fn presets() -> ScenarioFile {
    ScenarioFile::from_yaml_str(PRESETS).expect("presets parse")
}

/// Write the shared presets into a fresh temporary directory
pub fn preset_file() -> (tempfile::TempDir, PathBuf) {
    let dir = tempfile::tempdir().expect("temp dir");
    let path = dir.path().join("presets.yaml");
    fs::write(&path, PRESETS).expect("write presets");
    (dir, path)
}

/// Display driven by a fixed script of pause flags, stops when the script runs out
pub struct ScriptedDisplay {
    pauses: Vec<bool>,
    draws: usize,
    pub save_requested: bool,
    pub saves: usize,
    pub live_per_draw: Vec<usize>,
}

impl ScriptedDisplay {
    pub fn new(pauses: Vec<bool>) -> Self {
        Self {
            pauses,
            draws: 0,
            save_requested: false,
            saves: 0,
            live_per_draw: Vec::new(),
        }
    }
}

impl Display for ScriptedDisplay {
    fn draw(&mut self, system: &SolarSystem) {
        self.draws += 1;
        self.live_per_draw.push(system.live_count());
    }

    fn paused(&self) -> bool {
        self.pauses.get(self.draws).copied().unwrap_or(false)
    }

    fn save_requested(&self) -> bool {
        self.save_requested
    }

    fn reset_save_marker(&mut self) {
        self.save_requested = false;
        self.saves += 1;
    }

    fn stop_requested(&self) -> bool {
        self.draws >= self.pauses.len()
    }
}

// ==================================================================================
// Loading tests
// ==================================================================================

#[test]
fn build_adds_planets_then_suns() {
    let file = presets();
    let scenario = Scenario::build_scenario("default", file.simulation("default").unwrap()).unwrap();

    let bodies: Vec<(&str, BodyType)> = scenario.system.iter().map(|(_, b)| (b.name(), b.body_type())).collect();
    assert_eq!(
        bodies,
        [("Terra", BodyType::Planet), ("Sol", BodyType::Star), ("Rigel", BodyType::SuperGiantStar)]
    );

    let (_, terra) = scenario.system.iter().next().unwrap();
    assert_eq!(terra.position, Point::new(200.0, 0.0, 0.0));
    assert_eq!(terra.velocity, Vector::planar(0.0, 0.7));
    assert_eq!(scenario.system.parameters().min_distance, 1e-9);
}

#[test]
fn parameters_override_defaults() {
    let file = presets();
    let scenario = Scenario::build_scenario("collide", file.simulation("collide").unwrap()).unwrap();
    assert_eq!(scenario.system.parameters().min_distance, 0.5);
}

#[test]
fn unknown_simulation_is_rejected() {
    let err = presets().simulation("nope").unwrap_err();
    assert!(matches!(err, SimError::UnknownSimulation(ref n) if n == "nope"), "unexpected error {:?}", err);
}

#[test]
fn missing_simulations_table_is_a_format_error() {
    let err = ScenarioFile::from_yaml_str("planets: []\n").unwrap_err();
    assert!(matches!(err, SimError::Format(_)), "unexpected error {:?}", err);
}

#[test]
fn sun_with_planet_ordinal_is_rejected() {
    let text = r#"
simulations:
  bad:
    suns:
      - { name: Fake, mass: 10.0, body_type: 0, initial_position: [0.0, 0.0], velocity: [0.0, 0.0] }
"#;
    let file = ScenarioFile::from_yaml_str(text).unwrap();
    let err = Scenario::build_scenario("bad", file.simulation("bad").unwrap()).unwrap_err();
    assert!(matches!(err, SimError::PlanetListedAsSun(ref n) if n == "Fake"), "unexpected error {:?}", err);
}

#[test]
fn unknown_ordinal_is_rejected_at_load() {
    let text = r#"
simulations:
  bad:
    suns:
      - { name: Odd, mass: 10.0, body_type: 9, initial_position: [0.0, 0.0], velocity: [0.0, 0.0] }
"#;
    let file = ScenarioFile::from_yaml_str(text).unwrap();
    let err = Scenario::build_scenario("bad", file.simulation("bad").unwrap()).unwrap_err();
    assert!(matches!(err, SimError::UnknownBodyType(9)), "unexpected error {:?}", err);
}

#[test]
fn malformed_bodies_are_rejected() {
    let text = r#"
simulations:
  short:
    planets:
      - { name: Flat, mass: 10.0, initial_position: [1.0], velocity: [0.0, 0.0] }
  weightless:
    planets:
      - { name: Ghost, mass: 0.0, initial_position: [0.0, 0.0], velocity: [0.0, 0.0] }
"#;
    let file = ScenarioFile::from_yaml_str(text).unwrap();

    let err = Scenario::build_scenario("short", file.simulation("short").unwrap()).unwrap_err();
    assert!(
        matches!(err, SimError::BadVectorLength { field: "initial_position", len: 1, .. }),
        "unexpected error {:?}",
        err
    );

    let err = Scenario::build_scenario("weightless", file.simulation("weightless").unwrap()).unwrap_err();
    assert!(matches!(err, SimError::InvalidMass { .. }), "unexpected error {:?}", err);
}

#[test]
fn load_reports_missing_file() {
    let dir = tempfile::tempdir().unwrap();
    let err = ScenarioFile::load(&dir.path().join("missing.yaml")).unwrap_err();
    assert!(matches!(err, SimError::Io { .. }), "unexpected error {:?}", err);
}

// ==================================================================================
// Simulator tests
// ==================================================================================

#[test]
fn run_stops_at_max_iterations() {
    let (_dir, path) = preset_file();
    let mut simulator = Simulator::load(&path, "default").unwrap().with_max_iterations(Some(3));
    let mut display = ConsoleDisplay::new(Vec::new(), 1);

    let ticks = simulator.run(&mut display).unwrap();

    assert_eq!(ticks, 3);
    assert_eq!(simulator.system().ticks(), 3);
    let out = String::from_utf8(display.into_inner()).unwrap();
    assert!(out.contains("+ #1 Sol (Star, size 48)"), "missing body announcement in {out}");
    assert!(out.contains("tick 3: 3 live bodies"), "missing frame in {out}");
}

#[test]
fn paused_iterations_skip_the_tick() {
    let (_dir, path) = preset_file();
    let mut simulator = Simulator::load(&path, "default").unwrap();
    let mut display = ScriptedDisplay::new(vec![false, true, true, false, false]);

    let ticks = simulator.run(&mut display).unwrap();

    assert_eq!(ticks, 3);
    assert_eq!(simulator.system().ticks(), 3);
    assert_eq!(display.live_per_draw.len(), 5, "paused iterations are still drawn");
}

#[test]
fn save_request_keeps_other_simulations() {
    let (_dir, path) = preset_file();
    let mut simulator = Simulator::load(&path, "collide").unwrap().with_max_iterations(Some(2));
    let mut display = ScriptedDisplay::new(vec![false; 10]);
    display.save_requested = true;

    simulator.run(&mut display).unwrap();
    assert_eq!(display.saves, 1);

    let saved = ScenarioFile::load(&path).unwrap();
    assert!(saved.simulation("default").is_ok(), "other simulations must survive a save");

    // the initial conditions are stored, not the merged state
    let collide = saved.simulation("collide").unwrap();
    let names: Vec<&str> = collide.suns.iter().map(|s| s.name.as_str()).collect();
    assert_eq!(names, ["Left", "Right"]);
    assert_eq!(collide.suns[0].initial_position, vec![-4.0, 0.0, 0.0]);
    assert_eq!(collide.suns[1].body_type, 3);
    assert!(collide.planets.is_empty());
}

#[test]
fn save_before_run_keeps_preset_bodies() {
    let (_dir, path) = preset_file();
    let simulator = Simulator::load(&path, "default").unwrap();

    simulator.save().unwrap();

    let saved = ScenarioFile::load(&path).unwrap();
    let default = saved.simulation("default").unwrap();
    assert_eq!(default.planets.len(), 1, "planets lost by saving before the first tick");
    assert_eq!(default.suns.len(), 2, "suns lost by saving before the first tick");
    assert_eq!(default.planets[0].name, "Terra");
    assert_eq!(default.suns[1].body_type, 4);
}

#[test]
fn save_as_replaces_unreadable_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("broken.yaml");
    fs::write(&path, "{{ not yaml").unwrap();

    let scenario = Scenario::build_scenario("collide", presets().simulation("collide").unwrap()).unwrap();
    let simulator = Simulator::new(scenario, &path);
    simulator.save_as("copy").unwrap();

    let saved = ScenarioFile::load(&path).unwrap();
    assert_eq!(saved.simulations.len(), 1);
    assert_eq!(saved.simulation("copy").unwrap().suns.len(), 2);
}

// ==================================================================================
// Console display tests
// ==================================================================================

#[test]
fn console_reports_merges_once() {
    let (_dir, path) = preset_file();
    let mut simulator = Simulator::load(&path, "collide").unwrap().with_max_iterations(Some(3));
    let mut display = ConsoleDisplay::new(Vec::new(), 10);

    simulator.run(&mut display).unwrap();
    assert_eq!(display.known_bodies(), 3, "both originals and the merged sun keep a view");

    let out = String::from_utf8(display.into_inner()).unwrap();
    assert_eq!(out.matches("- #0 Left").count(), 1, "removal announced once in {out}");
    assert!(out.contains("- #1 Right"));
    assert!(out.contains("+ #2 BDY01 (Giant Star"), "merged sun not announced in {out}");
    assert!(out.contains("tick 1: 1 live bodies"), "frame missing in {out}");
}

#[test]
fn overlay_formats_enabled_fields() {
    let mut system = SolarSystem::new();
    system.add(solarsim::Body::new(
        "Sol",
        100.0,
        Point::planar(1.234, 2.5),
        Vector::planar(-0.5, 0.126),
        BodyType::Star,
    ));
    let (_, sol) = system.iter().next().unwrap();

    let mut info = DisplayInfo::default();
    assert_eq!(info.describe(sol), None);

    info.names = true;
    info.positions = true;
    assert_eq!(info.describe(sol).as_deref(), Some("Sol 1.23 2.50"));

    info.velocities = true;
    assert_eq!(info.describe(sol).as_deref(), Some("Sol 1.23 2.50 -0.50 0.13"));
}

#[test]
fn toggles_flip_overlay_flags() {
    let mut display = ConsoleDisplay::new(Vec::new(), 1);
    display.toggle_names();
    display.toggle_velocities();
    display.toggle_velocities();
    display.toggle_pause();

    assert_eq!(display.info(), DisplayInfo { names: true, positions: false, velocities: false });
    assert!(display.paused());
}
