//! Two-burn transfer between circular orbits via two half-ellipses, and a
//! coarse velocity/mass profile of the maneuver for visualization.

use serde::Deserialize;

use crate::constants::{
    FINAL_ORBIT_ALTITUDE, PARKING_ORBIT_ALTITUDE, PROPELLANT_PER_DELTA_V,
    TRANSFER_APOAPSIS_ALTITUDE, TRANSFER_INITIAL_MASS,
};
use super::integrator::fixed_step_count;
use crate::control::mission::CelestialBody;
use crate::errors::SimulationError;

const PREALLOCATED_SAMPLES: usize = 8_192;

/// Altitudes above the surface of the central body.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct TransferAltitudes {
    pub initial_orbit: f64,
    pub apoapsis: f64,
    pub final_orbit: f64,
}

impl Default for TransferAltitudes {
    fn default() -> Self {
        TransferAltitudes {
            initial_orbit: PARKING_ORBIT_ALTITUDE,
            apoapsis: TRANSFER_APOAPSIS_ALTITUDE,
            final_orbit: FINAL_ORBIT_ALTITUDE,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TransferPlan {
    pub altitudes: TransferAltitudes,
    /// Orbital radii r1, r2, r3.
    pub radii: [f64; 3],
    /// Semi-major axes of the outbound and capture ellipses.
    pub semi_major_axes: [f64; 2],
    pub initial_velocity: f64,
    pub delta_v_1: f64,
    pub delta_v_2: f64,
    pub burn_time_1: f64,
    pub burn_time_2: f64,
}

impl TransferPlan {
    pub fn total_delta_v(&self) -> f64 {
        self.delta_v_1.abs() + self.delta_v_2.abs()
    }

    /// Combined maneuver time t1 + t2, the transfer simulation's horizon.
    pub fn total_time(&self) -> f64 {
        self.burn_time_1 + self.burn_time_2
    }

    /// Checks a plan that may have been assembled by hand rather than by
    /// [`plan_transfer`].
    pub fn validate(&self) -> Result<(), SimulationError> {
        for (name, value) in [
            ("maneuver 1 time", self.burn_time_1),
            ("maneuver 2 time", self.burn_time_2),
            ("total maneuver time", self.total_time()),
        ] {
            if !value.is_finite() || value <= 0.0 {
                return Err(SimulationError::InvalidTransferPlan(format!(
                    "{name} must be positive and finite, got {value}"
                )));
            }
        }
        for (name, value) in [
            ("initial velocity", self.initial_velocity),
            ("delta-v 1", self.delta_v_1),
            ("delta-v 2", self.delta_v_2),
        ] {
            if !value.is_finite() {
                return Err(SimulationError::InvalidTransferPlan(format!(
                    "{name} must be finite, got {value}"
                )));
            }
        }
        Ok(())
    }
}

pub fn plan_transfer(
    initial_orbit: f64,
    apoapsis: f64,
    final_orbit: f64,
    body: &CelestialBody,
) -> Result<TransferPlan, SimulationError> {
    body.validate()?;

    let altitudes = TransferAltitudes {
        initial_orbit,
        apoapsis,
        final_orbit,
    };
    let r1 = orbit_radius(body, "initial orbit", initial_orbit)?;
    let r2 = orbit_radius(body, "transfer apoapsis", apoapsis)?;
    let r3 = orbit_radius(body, "final orbit", final_orbit)?;

    let a1 = (r1 + r2) / 2.0;
    let a2 = (r2 + r3) / 2.0;

    let initial_velocity = body.circular_velocity(r1);
    let delta_v_1 = body.vis_viva(r1, a1) - initial_velocity;
    let delta_v_2 = body.circular_velocity(r3) - body.vis_viva(r2, a2);

    Ok(TransferPlan {
        altitudes,
        radii: [r1, r2, r3],
        semi_major_axes: [a1, a2],
        initial_velocity,
        delta_v_1,
        delta_v_2,
        burn_time_1: body.maneuver_time(a1),
        burn_time_2: body.maneuver_time(a2),
    })
}

fn orbit_radius(
    body: &CelestialBody,
    name: &'static str,
    altitude: f64,
) -> Result<f64, SimulationError> {
    let radius = body.orbit_radius(altitude);
    if !radius.is_finite() || radius <= 0.0 {
        return Err(SimulationError::NonPositiveRadius {
            name,
            value: radius,
        });
    }
    Ok(radius)
}

#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct TransferVehicle {
    pub initial_mass: f64,
    /// Propellant proxy, kg consumed per m/s of velocity change.
    pub propellant_per_delta_v: f64,
}

impl Default for TransferVehicle {
    fn default() -> Self {
        TransferVehicle {
            initial_mass: TRANSFER_INITIAL_MASS,
            propellant_per_delta_v: PROPELLANT_PER_DELTA_V,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransferPhase {
    Departure,
    Capture,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TransferSample {
    pub time: f64,
    pub velocity: f64,
    pub mass: f64,
    pub phase: TransferPhase,
    /// Altitude of the orbit the phase is anchored to (h1, then h3).
    pub reference_altitude: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct TransferTrace {
    samples: Vec<TransferSample>,
    horizon: f64,
}

impl TransferTrace {
    pub fn samples(&self) -> &[TransferSample] {
        &self.samples
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    pub fn last(&self) -> &TransferSample {
        &self.samples[self.samples.len() - 1]
    }

    pub fn horizon(&self) -> f64 {
        self.horizon
    }
}

/// Linearly ramps velocity through both burns of `plan`. Not a physical
/// integration; mass drops by a fixed amount per m/s gained.
pub fn simulate_transfer(
    plan: &TransferPlan,
    dt: f64,
    vehicle: &TransferVehicle,
) -> Result<TransferTrace, SimulationError> {
    if !dt.is_finite() || dt <= 0.0 {
        return Err(SimulationError::InvalidStepSize(dt));
    }
    plan.validate()?;
    let horizon = plan.total_time();
    let steps = fixed_step_count(horizon, dt)?;
    if !vehicle.initial_mass.is_finite() || vehicle.initial_mass < 0.0 {
        return Err(SimulationError::NegativeMass(vehicle.initial_mass));
    }
    if !vehicle.propellant_per_delta_v.is_finite() || vehicle.propellant_per_delta_v < 0.0 {
        return Err(SimulationError::InvalidVehicle(format!(
            "propellant per delta-v must be non-negative, got {}",
            vehicle.propellant_per_delta_v
        )));
    }

    let phase_at = |time: f64| {
        if time < plan.burn_time_1 {
            TransferPhase::Departure
        } else {
            TransferPhase::Capture
        }
    };
    let reference_altitude = |phase: TransferPhase| match phase {
        TransferPhase::Departure => plan.altitudes.initial_orbit,
        TransferPhase::Capture => plan.altitudes.final_orbit,
    };

    let mut velocity = plan.initial_velocity;
    let mut mass = vehicle.initial_mass;
    let capacity = steps.saturating_add(2).min(PREALLOCATED_SAMPLES);
    let mut samples = Vec::with_capacity(capacity);
    samples.push(TransferSample {
        time: 0.0,
        velocity,
        mass,
        phase: phase_at(0.0),
        reference_altitude: reference_altitude(phase_at(0.0)),
    });

    let mut step = 0usize;
    let mut time = 0.0;
    while time < horizon {
        let phase = phase_at(time);
        let dv = match phase {
            TransferPhase::Departure => plan.delta_v_1 / plan.burn_time_1 * dt,
            TransferPhase::Capture => plan.delta_v_2 / plan.burn_time_2 * dt,
        };

        velocity += dv;
        mass = (mass - vehicle.propellant_per_delta_v * dv.abs()).max(0.0);

        step += 1;
        time = step as f64 * dt;
        samples.push(TransferSample {
            time,
            velocity,
            mass,
            phase,
            reference_altitude: reference_altitude(phase),
        });
    }

    Ok(TransferTrace { samples, horizon })
}
