//! One simulation tick
//!
//! The set of pairs is fixed by the bodies alive when the tick starts.
//! A body destroyed or merged early in the scan still takes part in the
//! remaining pairs of that tick; suns created by a merge join from the next tick.

use log::trace;

use crate::simulation::collisions::Collision;
use crate::simulation::states::SolarSystem;

/// Summary of a completed tick
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StepReport {
    pub tick: u64,
    pub pairs: usize,
    pub collisions: Vec<Collision>,
}

impl SolarSystem {
    pub fn compute_next_step(&mut self) -> StepReport {
        let snapshot = self.live_ids();
        let mut report = StepReport::default();

        for (idx, &first) in snapshot.iter().enumerate() {
            for &second in &snapshot[idx + 1..] {
                self.accelerate(first, second);
                if let Some(collision) = self.handle_collisions(first, second) {
                    report.collisions.push(collision);
                }
                report.pairs += 1;
            }
        }

        // every slot drifts, destroyed ones included
        for body in self.bodies_mut() {
            let velocity = body.velocity;
            body.position.move_by(&velocity);
        }

        self.ticks += 1;
        report.tick = self.ticks;
        trace!("tick {}: {} pairs, {} collisions", report.tick, report.pairs, report.collisions.len());
        report
    }
}
