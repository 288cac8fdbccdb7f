//! Headless batch run: a set of seeded scenarios, each integrated for a fixed
//! number of ticks, with a drift and energy report per scenario.

use planets_core::{DVec2, SimConfig, SimError};
use planets_physics::{GravityModel, Integrator, StepOutcome, diagnostics, scenario};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

const NUM_SCENARIOS: u64 = 10;
const TICKS: u64 = 3_600;
/// One frame at 60 fps
const DT: f64 = 1.0 / 60.0;

struct Report {
    seed: u64,
    bodies: usize,
    ticks: u64,
    simulated: f64,
    momentum_drift: f64,
    kinetic: f64,
    min_separation: Option<f64>,
    fault: Option<SimError>,
}

fn run_scenario(config: &SimConfig, seed: u64) -> Result<Report, SimError> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let mut bodies = scenario::generate_bodies(config, &mut rng)?;
    let mut integrator = Integrator::new(GravityModel::from_config(config), &bodies);

    let initial_momentum = diagnostics::total_momentum(&bodies);
    let mut ticks = 0;
    let mut fault = None;

    for _ in 0..TICKS {
        match integrator.step(&mut bodies, DT) {
            Ok(StepOutcome::Advanced) => ticks += 1,
            Ok(StepOutcome::Skipped) => {}
            Err(e) => {
                fault = Some(e);
                break;
            }
        }
    }

    let drift: DVec2 = diagnostics::total_momentum(&bodies) - initial_momentum;

    Ok(Report {
        seed,
        bodies: bodies.len(),
        ticks,
        simulated: ticks as f64 * DT,
        momentum_drift: drift.length(),
        kinetic: diagnostics::kinetic_energy(&bodies),
        min_separation: diagnostics::min_separation(&bodies),
        fault,
    })
}

fn main() {
    let config = SimConfig {
        body_count: 200,
        ..SimConfig::default()
    };

    eprintln!(
        "Running {} scenarios: {} bodies, {} ticks at dt = {:.4}s",
        NUM_SCENARIOS, config.body_count, TICKS, DT
    );

    let mut reports = Vec::new();
    for i in 0..NUM_SCENARIOS {
        let seed = 1000 + i * 7919;
        match run_scenario(&config, seed) {
            Ok(report) => reports.push(report),
            Err(e) => eprintln!("  seed {seed}: generation failed: {e}"),
        }
        eprint!("  {}/{}...\r", i + 1, NUM_SCENARIOS);
    }
    eprintln!("Done.");

    println!();
    println!(
        "{:>8} {:>7} {:>7} {:>9} {:>12} {:>12} {:>10}  {}",
        "seed", "bodies", "ticks", "time (s)", "|dp|", "kinetic", "min sep", "fault"
    );
    for r in &reports {
        let separation = r
            .min_separation
            .map_or_else(|| "-".to_string(), |d| format!("{d:.2}"));
        let fault = r
            .fault
            .as_ref()
            .map_or_else(|| "-".to_string(), ToString::to_string);
        println!(
            "{:>8} {:>7} {:>7} {:>9.2} {:>12.3e} {:>12.3e} {:>10}  {}",
            r.seed, r.bodies, r.ticks, r.simulated, r.momentum_drift, r.kinetic, separation, fault
        );
    }

    let faulted = reports.iter().filter(|r| r.fault.is_some()).count();
    println!();
    println!("{}/{} scenarios completed without a fault", reports.len() - faulted, reports.len());
}
