//! Headless text display
//!
//! Keeps one view per `BodyId`, announces bodies the first time they show up
//! and once when they disappear, and prints a frame of the live bodies every
//! `every` draws with an optional overlay of names, positions and velocities.

use std::collections::HashMap;
use std::io::{self, Write};

use log::warn;

use crate::simulation::body_type::BodyType;
use crate::simulation::simulator::Display;
use crate::simulation::states::{Body, BodyId, SolarSystem};

/// Which per-body details a frame shows
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DisplayInfo {
    pub names: bool,
    pub positions: bool,
    pub velocities: bool,
}

impl DisplayInfo {
    pub fn any(&self) -> bool {
        self.names || self.positions || self.velocities
    }

    /// Overlay text for one body, `None` when nothing is enabled
    pub fn describe(&self, body: &Body) -> Option<String> {
        let mut parts = Vec::new();
        if self.names {
            parts.push(body.name().to_string());
        }
        if self.positions {
            parts.push(format!("{:.2} {:.2}", body.position.x(), body.position.y()));
        }
        if self.velocities {
            parts.push(format!("{:.2} {:.2}", body.velocity.x(), body.velocity.y()));
        }
        if parts.is_empty() {
            return None;
        }
        Some(parts.join(" "))
    }
}

#[derive(Debug, Clone)]
struct BodyView {
    name: String,
    body_type: BodyType,
    size: u32, // radius truncated, as drawn
    removed: bool,
}

pub struct ConsoleDisplay<W: Write> {
    out: W,
    info: DisplayInfo,
    every: u64,
    draws: u64,
    views: HashMap<BodyId, BodyView>,
    paused: bool,
    save_requested: bool,
    stop_requested: bool,
}

impl ConsoleDisplay<io::Stdout> {
    pub fn stdout(every: u64) -> Self {
        Self::new(io::stdout(), every)
    }
}

impl<W: Write> ConsoleDisplay<W> {
    pub fn new(out: W, every: u64) -> Self {
        Self {
            out,
            info: DisplayInfo::default(),
            every: every.max(1),
            draws: 0,
            views: HashMap::new(),
            paused: false,
            save_requested: false,
            stop_requested: false,
        }
    }

    pub fn with_info(mut self, info: DisplayInfo) -> Self {
        self.info = info;
        self
    }

    pub fn info(&self) -> DisplayInfo {
        self.info
    }

    pub fn toggle_names(&mut self) {
        self.info.names = !self.info.names;
    }

    pub fn toggle_positions(&mut self) {
        self.info.positions = !self.info.positions;
    }

    pub fn toggle_velocities(&mut self) {
        self.info.velocities = !self.info.velocities;
    }

    pub fn toggle_pause(&mut self) {
        self.paused = !self.paused;
    }

    pub fn request_save(&mut self) {
        self.save_requested = true;
    }

    pub fn request_stop(&mut self) {
        self.stop_requested = true;
    }

    /// Number of bodies ever seen
    pub fn known_bodies(&self) -> usize {
        self.views.len()
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    fn sync_views(&mut self, system: &SolarSystem) -> io::Result<()> {
        for (id, body) in system.iter() {
            if !self.views.contains_key(&id) {
                let view = BodyView {
                    name: body.name().to_string(),
                    body_type: body.body_type(),
                    size: body.radius() as u32,
                    removed: false,
                };
                writeln!(self.out, "+ {} {} ({}, size {})", id, view.name, view.body_type, view.size)?;
                self.views.insert(id, view);
            }
            if let Some(view) = self.views.get_mut(&id) {
                if !body.exists && !view.removed {
                    view.removed = true;
                    writeln!(self.out, "- {} {}", id, view.name)?;
                }
            }
        }
        Ok(())
    }

    fn frame(&mut self, system: &SolarSystem) -> io::Result<()> {
        let state = if self.paused { " (paused)" } else { "" };
        writeln!(self.out, "tick {}{}: {} live bodies", system.ticks(), state, system.live_count())?;
        if !self.info.any() {
            return Ok(());
        }
        for (id, body) in system.live() {
            if let Some(text) = self.info.describe(body) {
                writeln!(self.out, "  {} {}", id, text)?;
            }
        }
        Ok(())
    }
}

impl<W: Write> Display for ConsoleDisplay<W> {
    fn init(&mut self, system: &SolarSystem) {
        if let Err(err) = self.sync_views(system) {
            warn!("console display: {}", err);
        }
    }

    fn draw(&mut self, system: &SolarSystem) {
        let mut result = self.sync_views(system);
        if result.is_ok() && self.draws % self.every == 0 {
            result = self.frame(system);
        }
        self.draws += 1;
        if let Err(err) = result.and_then(|_| self.out.flush()) {
            warn!("console display: {}", err);
        }
    }

    fn paused(&self) -> bool {
        self.paused
    }

    fn save_requested(&self) -> bool {
        self.save_requested
    }

    fn reset_save_marker(&mut self) {
        self.save_requested = false;
    }

    fn stop_requested(&self) -> bool {
        self.stop_requested
    }

    fn deinit(&mut self) {
        if let Err(err) = self.out.flush() {
            warn!("console display: {}", err);
        }
    }
}
