//! Fixed-step ascent of a staged vehicle under thrust, gravity and drag.
//!
//! The run owns a [`StagingCursor`] that advances through the [`StageTable`]
//! as each stage's burning mass is exhausted. Staging is decided from the
//! mass at the start of a step, so a transition always takes effect for the
//! whole step in which it is detected.

use serde::Deserialize;

use super::aerodynamics::Aerodynamics;
use super::integrator::{fixed_step_count, EquationsOfMotion, RK4};
use super::state::VehicleState;
use crate::constants::{ALTITUDE_CEILING, GRAVITY, MAX_SIMULATION_TIME, TIME_STEP};
use crate::control::environment::Environment;
use crate::control::launch_stages::{StageParameters, StageTable};
use crate::errors::SimulationError;

const PREALLOCATED_SAMPLES: usize = 8_192;

/// What the last stage does once its burning mass is gone.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FinalStagePolicy {
    /// Thrust keeps acting on the vehicle with mass held at the floor.
    #[default]
    SustainThrust,
    /// Engine shuts down; the vehicle coasts under gravity and drag.
    CutOff,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StagingCursor {
    pub stage_index: usize,
    pub stage: StageParameters,
}

impl StagingCursor {
    pub fn new(stages: &StageTable) -> Self {
        StagingCursor {
            stage_index: 0,
            stage: *stages.stage(0),
        }
    }

    pub fn is_final(&self, stages: &StageTable) -> bool {
        self.stage_index >= stages.last_index()
    }

    /// Mass still available to burn in the active stage.
    pub fn burning_mass(&self, state: &VehicleState) -> f64 {
        state.mass - self.stage.dry_mass
    }

    pub fn is_depleted(&self, state: &VehicleState) -> bool {
        self.burning_mass(state) <= 0.0
    }

    /// Moves to the next stage. Returns `None` on the final stage.
    pub fn advance(&self, stages: &StageTable) -> Option<StagingCursor> {
        if self.is_final(stages) {
            return None;
        }
        let stage_index = self.stage_index + 1;
        Some(StagingCursor {
            stage_index,
            stage: *stages.stage(stage_index),
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StagingEvent {
    pub time: f64,
    pub from_stage: usize,
    pub to_stage: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TerminationReason {
    HorizonReached,
    CeilingReached,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AscentSample {
    pub time: f64,
    pub state: VehicleState,
    pub stage_index: usize,
}

#[derive(Debug, Clone, PartialEq)]
pub struct SimulationTrace {
    samples: Vec<AscentSample>,
    staging_events: Vec<StagingEvent>,
    termination: TerminationReason,
}

impl SimulationTrace {
    pub fn samples(&self) -> &[AscentSample] {
        &self.samples
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    pub fn initial(&self) -> &AscentSample {
        &self.samples[0]
    }

    pub fn last(&self) -> &AscentSample {
        &self.samples[self.samples.len() - 1]
    }

    pub fn staging_events(&self) -> &[StagingEvent] {
        &self.staging_events
    }

    pub fn termination(&self) -> TerminationReason {
        self.termination
    }

    pub fn stage_indices(&self) -> impl Iterator<Item = usize> + '_ {
        self.samples.iter().map(|sample| sample.stage_index)
    }
}

/// Right-hand side of the ascent equations for one active stage.
pub struct AscentDynamics<'a> {
    stage: &'a StageParameters,
    aerodynamics: Aerodynamics,
    environment: &'a Environment,
    thrust_enabled: bool,
}

impl<'a> AscentDynamics<'a> {
    pub fn new(stage: &'a StageParameters, environment: &'a Environment) -> Self {
        AscentDynamics {
            stage,
            aerodynamics: Aerodynamics::new(stage.drag_coefficient, stage.reference_area),
            environment,
            thrust_enabled: true,
        }
    }

    pub fn coasting(stage: &'a StageParameters, environment: &'a Environment) -> Self {
        AscentDynamics {
            thrust_enabled: false,
            ..AscentDynamics::new(stage, environment)
        }
    }
}

impl EquationsOfMotion for AscentDynamics<'_> {
    type State = VehicleState;

    fn compute_derivative(&self, state: &VehicleState) -> VehicleState {
        let (thrust, mass_flow) = if self.thrust_enabled {
            (self.stage.thrust, self.stage.thrust / (self.stage.specific_impulse * GRAVITY))
        } else {
            (0.0, 0.0)
        };

        let acceleration = thrust / state.mass
            - self.environment.gravity(state.altitude)
            - self.aerodynamics.drag_acceleration(
                state.velocity,
                state.altitude,
                state.mass,
                self.environment,
            );

        VehicleState {
            velocity: acceleration,
            altitude: state.velocity,
            mass: -mass_flow,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AscentSimulation {
    pub environment: Environment,
    pub horizon: f64,
    pub altitude_ceiling: f64,
    pub dt: f64,
    pub final_stage_policy: FinalStagePolicy,
}

impl Default for AscentSimulation {
    fn default() -> Self {
        AscentSimulation {
            environment: Environment::default(),
            horizon: MAX_SIMULATION_TIME,
            altitude_ceiling: ALTITUDE_CEILING,
            dt: TIME_STEP,
            final_stage_policy: FinalStagePolicy::default(),
        }
    }
}

impl AscentSimulation {
    pub fn validate(&self) -> Result<(), SimulationError> {
        if !self.dt.is_finite() || self.dt <= 0.0 {
            return Err(SimulationError::InvalidStepSize(self.dt));
        }
        if !self.horizon.is_finite() || self.horizon < 0.0 {
            return Err(SimulationError::InvalidHorizon(self.horizon));
        }
        if self.altitude_ceiling.is_nan() {
            return Err(SimulationError::InvalidAltitudeCeiling(self.altitude_ceiling));
        }
        self.max_steps()?;
        Ok(())
    }

    /// Upper bound on the number of integration steps.
    pub fn max_steps(&self) -> Result<usize, SimulationError> {
        fixed_step_count(self.horizon, self.dt)
    }

    pub fn run(
        &self,
        initial_state: VehicleState,
        stages: &StageTable,
    ) -> Result<SimulationTrace, SimulationError> {
        self.validate()?;
        if !initial_state.mass.is_finite() || initial_state.mass <= 0.0 {
            return Err(SimulationError::NonPositiveMass(initial_state.mass));
        }
        if stages.is_empty() {
            return Err(SimulationError::EmptyStageTable);
        }

        let max_steps = self.max_steps()?;
        // The ceiling usually ends the run long before the horizon
        let capacity = max_steps.saturating_add(1).min(PREALLOCATED_SAMPLES);
        let mut samples = Vec::with_capacity(capacity);
        let mut staging_events = Vec::new();

        let mut cursor = StagingCursor::new(stages);
        let mut state = initial_state;
        samples.push(AscentSample {
            time: 0.0,
            state,
            stage_index: cursor.stage_index,
        });

        for step in 0..max_steps {
            if state.altitude >= self.altitude_ceiling {
                break;
            }
            let time = step as f64 * self.dt;

            if cursor.is_depleted(&state) {
                if let Some(next) = cursor.advance(stages) {
                    staging_events.push(StagingEvent {
                        time,
                        from_stage: cursor.stage_index,
                        to_stage: next.stage_index,
                    });
                    cursor = next;
                    state.mass = cursor.stage.total_mass();
                }
            }

            let is_final = cursor.is_final(stages);
            let dynamics = if is_final
                && self.final_stage_policy == FinalStagePolicy::CutOff
                && cursor.is_depleted(&state)
            {
                AscentDynamics::coasting(&cursor.stage, &self.environment)
            } else {
                AscentDynamics::new(&cursor.stage, &self.environment)
            };

            let mass_floor = if is_final {
                cursor.stage.dry_mass.min(state.mass).max(0.0)
            } else {
                0.0
            };
            state = RK4::new(dynamics)
                .integrate(&state, self.dt)
                .with_mass_floor(mass_floor);

            samples.push(AscentSample {
                time: (step + 1) as f64 * self.dt,
                state,
                stage_index: cursor.stage_index,
            });
        }

        let termination = if state.altitude >= self.altitude_ceiling {
            TerminationReason::CeilingReached
        } else {
            TerminationReason::HorizonReached
        };

        Ok(SimulationTrace {
            samples,
            staging_events,
            termination,
        })
    }
}

/// Integrates the ascent with the default final-stage policy.
pub fn simulate_ascent(
    initial_state: VehicleState,
    stages: &StageTable,
    environment: &Environment,
    horizon: f64,
    altitude_ceiling: f64,
    dt: f64,
) -> Result<SimulationTrace, SimulationError> {
    AscentSimulation {
        environment: *environment,
        horizon,
        altitude_ceiling,
        dt,
        final_stage_policy: FinalStagePolicy::default(),
    }
    .run(initial_state, stages)
}
