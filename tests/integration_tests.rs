use ascent_simulation::{
    errors::SimulationError, plan_transfer, simulate_ascent, simulate_transfer, write_csv_file,
    AscentSimulation, CelestialBody, Environment, FinalStagePolicy, MissionConfig,
    SimulationTrace, StageTable, Telemetry, TerminationReason, TransferVehicle, VehicleState,
    PAYLOAD_MASS,
};

// Payload stacked on a fully fuelled first stage, at rest on the pad
fn reference_initial_state(stages: &StageTable) -> VehicleState {
    VehicleState::on_pad(PAYLOAD_MASS + stages.stage(0).total_mass())
}

fn run_reference_ascent(horizon: f64, altitude_ceiling: f64) -> SimulationTrace {
    let stages = StageTable::default();
    simulate_ascent(
        reference_initial_state(&stages),
        &stages,
        &Environment::default(),
        horizon,
        altitude_ceiling,
        0.1,
    )
    .expect("reference ascent should run")
}

#[test]
fn test_reference_ascent_stops_at_ceiling() {
    println!("INTEGRATION TEST: Reference ascent to 200 km");

    let trace = run_reference_ascent(500.0, 200_000.0);
    let last = trace.last();
    println!(
        "Stopped at t={:.1}s | Alt: {:.1}m | Vel: {:.1}m/s | Mass: {:.1}kg",
        last.time, last.state.altitude, last.state.velocity, last.state.mass
    );

    assert_eq!(trace.termination(), TerminationReason::CeilingReached);
    assert!(last.time < 500.0, "Ceiling should be reached before the horizon");
    assert!(last.state.altitude >= 200_000.0);
    assert!(trace.len() <= 5_001);
    assert_eq!(trace.initial().state, VehicleState::on_pad(170_000.0));

    // Heavy first stage starts below unit thrust-to-weight and sinks before climbing
    assert!(trace.samples()[1].state.velocity < 0.0);
    assert!(trace.staging_events().len() < StageTable::default().len());
}

#[test]
fn test_full_burn_visits_every_stage_in_order() {
    let trace = run_reference_ascent(1_000.0, f64::INFINITY);
    let stages = StageTable::default();

    let transitions: Vec<(usize, usize)> = trace
        .staging_events()
        .iter()
        .map(|event| (event.from_stage, event.to_stage))
        .collect();
    assert_eq!(transitions, vec![(0, 1), (1, 2), (2, 3)]);

    let times: Vec<f64> = trace.staging_events().iter().map(|e| e.time).collect();
    assert!(times.windows(2).all(|pair| pair[0] < pair[1]));

    let indices: Vec<usize> = trace.stage_indices().collect();
    assert!(indices.windows(2).all(|pair| pair[0] <= pair[1]));

    // Each staging resets mass to the new stage's propellant plus structure
    for event in trace.staging_events() {
        let sample = trace
            .samples()
            .iter()
            .find(|sample| sample.time > event.time)
            .unwrap();
        let stage = stages.stage(event.to_stage);
        assert!(sample.state.mass < stage.total_mass());
        assert!(sample.state.mass > stage.total_mass() - stage.mass_flow_rate() * 0.2);
    }

    assert_eq!(trace.last().state.mass, stages.stage(3).dry_mass);
    assert_eq!(trace.termination(), TerminationReason::HorizonReached);
}

#[test]
fn test_mass_never_negative() {
    let ascent = run_reference_ascent(1_000.0, f64::INFINITY);
    assert!(ascent.samples().iter().all(|s| s.state.mass >= 0.0));

    let coasting = AscentSimulation {
        horizon: 1_000.0,
        altitude_ceiling: f64::INFINITY,
        final_stage_policy: FinalStagePolicy::CutOff,
        ..AscentSimulation::default()
    };
    let stages = StageTable::default();
    let trace = coasting.run(reference_initial_state(&stages), &stages).unwrap();
    assert!(trace.samples().iter().all(|s| s.state.mass >= 0.0));

    let body = CelestialBody::default();
    let plan = plan_transfer(200_000.0, 384_394_000.0, 100_000.0, &body).unwrap();
    let lightweight = TransferVehicle {
        initial_mass: 5_000.0,
        propellant_per_delta_v: 15.0,
    };
    let transfer = simulate_transfer(&plan, 10.0, &lightweight).unwrap();
    assert!(transfer.samples().iter().all(|s| s.mass >= 0.0));
}

#[test]
fn test_zero_horizon_is_initial_state_only() {
    let trace = run_reference_ascent(0.0, 200_000.0);

    assert_eq!(trace.len(), 1);
    assert_eq!(trace.initial().state, VehicleState::on_pad(170_000.0));
    assert!(trace.staging_events().is_empty());
}

#[test]
fn test_ascent_is_deterministic() {
    assert_eq!(run_reference_ascent(100.0, 200_000.0), run_reference_ascent(100.0, 200_000.0));
}

#[test]
fn test_invalid_inputs_fail_fast() {
    let stages = StageTable::default();
    let initial = reference_initial_state(&stages);
    let env = Environment::default();

    assert_eq!(
        simulate_ascent(initial, &stages, &env, 500.0, 200_000.0, 0.0),
        Err(SimulationError::InvalidStepSize(0.0))
    );
    assert_eq!(StageTable::new(Vec::new()), Err(SimulationError::EmptyStageTable));

    let body = CelestialBody::default();
    assert!(matches!(
        plan_transfer(100_000.0, -body.radius - 1.0, 100_000.0, &body),
        Err(SimulationError::NonPositiveRadius { .. })
    ));
}

#[test]
fn test_transfer_horizon_is_sum_of_maneuver_times() {
    let body = CelestialBody::default();
    let plan = plan_transfer(200_000.0, 384_400_000.0 - 6_000.0, 100_000.0, &body).unwrap();

    for value in [plan.delta_v_1, plan.delta_v_2, plan.burn_time_1, plan.burn_time_2] {
        assert!(value.is_finite() && value > 0.0);
    }

    let [a1, a2] = plan.semi_major_axes;
    let horizon = body.maneuver_time(a1) + body.maneuver_time(a2);
    assert_eq!(horizon, plan.total_time());

    let trace = simulate_transfer(&plan, 10.0, &TransferVehicle::default()).unwrap();
    assert_eq!(trace.horizon(), horizon);
    assert!(trace.samples()[trace.len() - 2].time < horizon);
    assert!(trace.last().time >= horizon);
}

#[test]
fn test_default_transfer_reaches_target_distance() {
    let mission = MissionConfig::default();
    let altitudes = mission.transfer.altitudes;
    let plan = plan_transfer(
        altitudes.initial_orbit,
        altitudes.apoapsis,
        altitudes.final_orbit,
        &mission.transfer.body,
    )
    .unwrap();

    assert_eq!(plan.radii[0], 206_000.0);
    assert_eq!(plan.radii[1], 384_400_000.0);
    assert_eq!(plan.radii[2], 106_000.0);
}

#[test]
fn test_shipped_mission_matches_reference_scenario() {
    let path = concat!(env!("CARGO_MANIFEST_DIR"), "/missions/reference.toml");
    let mission = MissionConfig::load(path).unwrap();

    assert_eq!(mission, MissionConfig::default());

    let trace = mission
        .ascent_simulation()
        .run(mission.initial_state(), &mission.stages)
        .unwrap();
    assert_eq!(trace, run_reference_ascent(500.0, 200_000.0));
}

#[test]
fn test_mission_run_exports_both_traces() {
    let mission = MissionConfig::default();
    let ascent = mission
        .ascent_simulation()
        .run(mission.initial_state(), &mission.stages)
        .unwrap();

    let altitudes = mission.transfer.altitudes;
    let plan = plan_transfer(
        altitudes.initial_orbit,
        altitudes.apoapsis,
        altitudes.final_orbit,
        &mission.transfer.body,
    )
    .unwrap();
    // Coarser step keeps the file small
    let transfer = simulate_transfer(&plan, 1_000.0, &mission.transfer.vehicle).unwrap();

    let dir = tempfile::tempdir().unwrap();
    let ascent_path = dir.path().join("ascent.csv");
    let transfer_path = dir.path().join("transfer.csv");
    write_csv_file(&ascent, &ascent_path).unwrap();
    write_csv_file(&transfer, &transfer_path).unwrap();

    let ascent_csv = std::fs::read_to_string(&ascent_path).unwrap();
    assert_eq!(ascent_csv.lines().count(), ascent.len() + 1);
    let transfer_csv = std::fs::read_to_string(&transfer_path).unwrap();
    assert_eq!(transfer_csv.lines().count(), transfer.len() + 1);

    let telemetry = Telemetry::from_trace(&ascent, 30.0);
    assert!(telemetry.max_altitude() >= 200_000.0);
    assert!(!telemetry.log.is_empty());
}
