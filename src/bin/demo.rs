//! Interactive-session walkthrough over generated data.
//!
//! Usage: `cargo run --features demo --bin demo [k] [seed]`
//!
//! Scatters points around three centers, steps until convergence (logging
//! each centroid shift to stderr), demonstrates a revert + re-step, and
//! prints the final session view as JSON on stdout.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use stepmeans::{ClusterStore, EngineConfig, IterationController};

const POINT_COUNT: usize = 60;
const MAX_STEPS: usize = 100;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let args: Vec<String> = std::env::args().collect();
    let k: usize = args.get(1).map(|arg| arg.parse()).transpose()?.unwrap_or(3);
    let seed: u64 = args.get(2).map(|arg| arg.parse()).transpose()?.unwrap_or(42);

    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let centers = [(-5.0, -5.0), (0.0, 5.0), (5.0, -5.0)];
    let mut store = ClusterStore::new();
    for i in 0..POINT_COUNT {
        let (cx, cy) = centers[i % centers.len()];
        store.add_point(
            cx + rng.gen_range(-1.5..1.5),
            cy + rng.gen_range(-1.5..1.5),
        );
    }

    let mut controller = IterationController::with_config(EngineConfig::new().with_seed(seed));
    controller.initialize(&mut store, k)?;
    eprintln!("clustering {} points into k = {} (seed {})", POINT_COUNT, k, seed);

    for _ in 0..MAX_STEPS {
        let outcome = controller.step(&mut store)?;
        eprintln!(
            "iteration {:>3}  max shift {:>10.6}{}",
            outcome.iteration,
            outcome.max_shift,
            if outcome.converged { "  (converged)" } else { "" }
        );
        if outcome.converged {
            break;
        }
    }

    // Walk one step back and forward again to exercise the undo path.
    controller.revert(&mut store)?;
    eprintln!("reverted to iteration {}", store.iterations());
    let outcome = controller.step(&mut store)?;
    eprintln!("re-stepped to iteration {}", outcome.iteration);

    println!("{}", serde_json::to_string_pretty(&store.view())?);
    Ok(())
}
