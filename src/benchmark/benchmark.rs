use std::time::Instant;

use crate::geometry::point::Point;
use crate::geometry::vector::Vector;
use crate::simulation::body_type::BodyType;
use crate::simulation::states::{Body, SolarSystem};

/// Deterministic system of `n` bodies spread far enough apart that the
/// first ticks see no collisions, every tenth body a star
pub fn spread_system(n: usize) -> SolarSystem {
    let mut system = SolarSystem::new();
    for i in 0..n {
        let i_f = i as f64;
        // deterministic positions, no rand needed
        let position = Point::new(
            (i_f * 0.37).sin() * 1.0e5 + i_f * 100.0,
            (i_f * 0.13).cos() * 1.0e5,
            0.0,
        );
        let body_type = if i % 10 == 0 { BodyType::Star } else { BodyType::Planet };
        system.add(Body::new(format!("B{i}"), 50.0, position, Vector::zeros(), body_type));
    }
    system
}

/// Time `compute_next_step` for growing system sizes
pub fn bench_step() {
    let ns = [50, 100, 200, 400, 800];
    let steps = 5; // ticks per size

    for n in ns {
        let mut system = spread_system(n);

        // Warm up
        system.compute_next_step();

        let t0 = Instant::now();
        let mut pairs = 0;
        for _ in 0..steps {
            pairs += system.compute_next_step().pairs;
        }
        let per_step = t0.elapsed().as_secs_f64() / steps as f64;

        println!(
            "N = {n:5}, step = {:8.6} s, pairs/step = {:8}, live = {}",
            per_step,
            pairs / steps,
            system.live_count()
        );
    }
}
