use std::time::Instant;

use crate::simulation::forces::{Force, ForceSet, NewtonianGravity};
use crate::simulation::integrator::euler_semi_implicit;
use crate::simulation::params::Parameters;
use crate::simulation::states::{NVec2, System};

/// Helper to build a well-spaced System of size `n`.
/// Deterministic positions, no rand needed, no coincident pairs.
fn make_system(n: usize) -> System {
    let mut sys = System::new();
    for i in 0..n {
        let i_f = i as f64;
        let x = NVec2::new((i_f * 0.37).sin() * 5.0 + i_f * 1e-3, (i_f * 0.13).cos() * 5.0);
        sys.add_body(x, NVec2::zeros(), 1.0)
            .expect("benchmark mass is positive");
    }
    sys
}

fn make_params() -> Parameters {
    Parameters {
        t_end: 100.0,
        h0: 0.001,
        G: 0.1,
    }
}

/// Time one direct-gravity force evaluation for a range of n.
pub fn bench_gravity() {
    let ns = [200, 400, 800, 1600, 3200, 6400];

    for n in ns {
        let sys = make_system(n);
        let params = make_params();
        let gravity = NewtonianGravity { G: params.G };
        let mut out = vec![NVec2::zeros(); n];

        // Warm up
        gravity
            .accumulate(&sys, &mut out)
            .expect("benchmark bodies are well separated");

        let t0 = Instant::now();
        gravity
            .accumulate(&sys, &mut out)
            .expect("benchmark bodies are well separated");
        let dt = t0.elapsed().as_secs_f64();

        println!("N = {n:5}, direct force eval = {dt:8.6} s");
    }
}

/// Benchmark full semi-implicit Euler steps for a range of n.
/// Paste output directly into a spreadsheet to graph.
pub fn bench_step_curve() {
    println!("N,step_ms");

    for n in (200..=6400).step_by(200) {
        // Small n: average over a few steps to smooth noise
        let steps = if n <= 800 { 5 } else { 1 };

        let mut sys = make_system(n);
        let params = make_params();
        let forces = ForceSet::new().with(NewtonianGravity { G: params.G });

        // Warm-up one step
        euler_semi_implicit(&mut sys, &forces, &params)
            .expect("benchmark bodies are well separated");

        let t0 = Instant::now();
        for _ in 0..steps {
            euler_semi_implicit(&mut sys, &forces, &params)
                .expect("benchmark bodies are well separated");
        }
        let ms = t0.elapsed().as_secs_f64() * 1000.0 / steps as f64;

        println!("{n},{ms:.6}");
    }
}
