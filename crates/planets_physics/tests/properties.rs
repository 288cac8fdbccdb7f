use approx::assert_relative_eq;
use planets_core::{Body, DVec2, ForceLaw, SimConfig};
use planets_physics::{diagnostics, generate_bodies, rng_for, GravityModel, Integrator, StepOutcome};

const G: f64 = 6.67e-11;

fn at_rest(x: f64, y: f64, radius: f64, mass: f64) -> Body {
    Body::with_mass(DVec2::new(x, y), DVec2::ZERO, radius, mass).unwrap()
}

fn mass_squared() -> GravityModel {
    GravityModel::new(G, ForceLaw::MassSquared)
}

#[test]
fn symmetric_pair_accelerates_equal_and_opposite() {
    let mid = DVec2::new(640.0, 360.0);
    let offset = DVec2::new(37.5, -21.25);
    let mut bodies = vec![
        at_rest(mid.x - offset.x, mid.y - offset.y, 4.0, 2e6),
        at_rest(mid.x + offset.x, mid.y + offset.y, 4.0, 2e6),
    ];
    let mut integrator = Integrator::new(mass_squared(), &bodies);
    integrator.step(&mut bodies, 0.5).unwrap();

    let acc = integrator.last_accelerations();
    assert_eq!(acc[0], -acc[1]);
    assert_eq!(bodies[0].velocity, -bodies[1].velocity);
    assert_eq!(diagnostics::total_momentum(&bodies), DVec2::ZERO);
}

#[test]
fn overlapping_pair_uses_collision_floor() {
    let mut bodies = vec![at_rest(0.0, 0.0, 5.0, 1e6), at_rest(3.0, 0.0, 5.0, 1e6)];
    let mut integrator = Integrator::new(mass_squared(), &bodies);
    integrator.step(&mut bodies, 1.0).unwrap();

    let constant = 1e6f64.powi(2) * G;
    let floor = 10.0f64;
    let expected = constant / floor.powi(2) * 3.0 / floor;

    let acc = integrator.last_accelerations();
    assert!(acc[0].is_finite());
    assert_eq!(acc[0], DVec2::new(expected, 0.0));
    assert_eq!(acc[1], DVec2::new(-expected, 0.0));
}

#[test]
fn zero_dt_leaves_generated_scenario_untouched() {
    let config = SimConfig {
        body_count: 50,
        seed: Some(11),
        ..SimConfig::default()
    };
    let mut bodies = generate_bodies(&config, &mut rng_for(&config)).unwrap();
    let mut integrator = Integrator::new(GravityModel::from_config(&config), &bodies);

    // Get everything moving first
    integrator.step(&mut bodies, 0.016).unwrap();
    let before = bodies.clone();

    assert_eq!(integrator.step(&mut bodies, 0.0), Ok(StepOutcome::Skipped));
    for (after, before) in bodies.iter().zip(&before) {
        assert_eq!(after.position.x.to_bits(), before.position.x.to_bits());
        assert_eq!(after.position.y.to_bits(), before.position.y.to_bits());
        assert_eq!(after.velocity.x.to_bits(), before.velocity.x.to_bits());
        assert_eq!(after.velocity.y.to_bits(), before.velocity.y.to_bits());
    }
}

#[test]
fn single_body_does_not_move() {
    let mut bodies = vec![at_rest(120.0, 45.0, 7.0, 3e8)];
    let before = bodies.clone();
    let mut integrator = Integrator::new(mass_squared(), &bodies);
    for dt in [0.001, 0.5, 1.0, 250.0] {
        assert_eq!(integrator.step(&mut bodies, dt), Ok(StepOutcome::Advanced));
        assert_eq!(integrator.last_accelerations(), &[DVec2::ZERO]);
        assert_eq!(bodies, before);
    }
}

#[test]
fn two_planets_one_second() {
    let mut bodies = vec![at_rest(0.0, 0.0, 5.0, 1e6), at_rest(100.0, 0.0, 5.0, 1e6)];
    let mut integrator = Integrator::new(mass_squared(), &bodies);
    integrator.step(&mut bodies, 1.0).unwrap();

    // m²G / R² = 1e12 * 6.67e-11 / 1e4
    let a = 6.67e-3;
    assert_relative_eq!(integrator.last_accelerations()[0].x, a, max_relative = 1e-12);

    assert!(bodies[0].position.x > 0.0);
    assert!(bodies[1].position.x < 100.0);
    let moved_0 = bodies[0].position.x - 0.0;
    let moved_1 = 100.0 - bodies[1].position.x;
    assert_relative_eq!(moved_0, moved_1, max_relative = 1e-9);

    for _ in 0..50 {
        integrator.step(&mut bodies, 1.0).unwrap();
        assert_eq!(bodies[0].position.y, 0.0);
        assert_eq!(bodies[1].position.y, 0.0);
        assert_eq!(bodies[0].velocity.y, 0.0);
        assert_eq!(bodies[1].velocity.y, 0.0);
    }
}

#[test]
fn separation_shrinks_until_floor() {
    let mut bodies = vec![at_rest(0.0, 0.0, 5.0, 1e6), at_rest(100.0, 0.0, 5.0, 1e6)];
    let floor = 10.0;
    let mut integrator = Integrator::new(mass_squared(), &bodies);

    let mut previous = bodies[0].position.distance(bodies[1].position);
    let mut ticks = 0;
    while previous > floor {
        integrator.step(&mut bodies, 1.0).unwrap();
        let separation = bodies[0].position.distance(bodies[1].position);
        assert!(separation < previous, "tick {ticks}: {separation} >= {previous}");
        previous = separation;
        ticks += 1;
        assert!(ticks < 10_000, "never reached the floor");
    }
}

#[test]
fn newtonian_law_scales_with_mass_not_mass_squared() {
    let bodies = vec![at_rest(0.0, 0.0, 1.0, 10.0), at_rest(10.0, 0.0, 1.0, 10.0)];
    let squared = Integrator::new(GravityModel::new(1.0, ForceLaw::MassSquared), &bodies);
    let newton = Integrator::new(GravityModel::new(1.0, ForceLaw::Newtonian), &bodies);
    assert_eq!(squared.source_constants(), &[100.0, 100.0]);
    assert_eq!(newton.source_constants(), &[10.0, 10.0]);
}
