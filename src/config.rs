//! Mission file loading. Every section is optional and falls back to the
//! reference scenario in [`crate::constants`].

use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::constants::{
    ALTITUDE_CEILING, MAX_SIMULATION_TIME, PAYLOAD_MASS, TIME_STEP, TRANSFER_TIME_STEP,
};
use crate::control::environment::Environment;
use crate::control::launch_stages::StageTable;
use crate::control::mission::CelestialBody;
use crate::errors::{ConfigError, SimulationError};
use crate::trajectory_system::ascent::{AscentSimulation, FinalStagePolicy};
use crate::trajectory_system::state::VehicleState;
use crate::trajectory_system::transfer::{TransferAltitudes, TransferVehicle};

#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(default)]
pub struct MissionConfig {
    pub environment: Environment,
    pub stages: StageTable,
    pub ascent: AscentConfig,
    pub transfer: TransferConfig,
}

#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(default)]
pub struct AscentConfig {
    pub payload_mass: f64,
    pub initial_velocity: f64,
    pub initial_altitude: f64,
    pub dt: f64,
    pub horizon: f64,
    pub altitude_ceiling: f64,
    pub final_stage_policy: FinalStagePolicy,
}

impl Default for AscentConfig {
    fn default() -> Self {
        AscentConfig {
            payload_mass: PAYLOAD_MASS,
            initial_velocity: 0.0,
            initial_altitude: 0.0,
            dt: TIME_STEP,
            horizon: MAX_SIMULATION_TIME,
            altitude_ceiling: ALTITUDE_CEILING,
            final_stage_policy: FinalStagePolicy::default(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct TransferConfig {
    pub dt: f64,
    pub body: CelestialBody,
    pub altitudes: TransferAltitudes,
    pub vehicle: TransferVehicle,
}

impl Default for TransferConfig {
    fn default() -> Self {
        TransferConfig {
            dt: TRANSFER_TIME_STEP,
            body: CelestialBody::default(),
            altitudes: TransferAltitudes::default(),
            vehicle: TransferVehicle::default(),
        }
    }
}

impl MissionConfig {
    pub fn from_toml_str(text: &str) -> Result<Self, ConfigError> {
        let config: MissionConfig = toml::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let text = fs::read_to_string(path)?;
        Self::from_toml_str(&text)
    }

    pub fn validate(&self) -> Result<(), SimulationError> {
        self.ascent_simulation().validate()?;
        if !self.ascent.payload_mass.is_finite() || self.ascent.payload_mass < 0.0 {
            return Err(SimulationError::NegativeMass(self.ascent.payload_mass));
        }
        self.transfer.body.validate()?;
        if !self.transfer.dt.is_finite() || self.transfer.dt <= 0.0 {
            return Err(SimulationError::InvalidStepSize(self.transfer.dt));
        }
        Ok(())
    }

    pub fn ascent_simulation(&self) -> AscentSimulation {
        AscentSimulation {
            environment: self.environment,
            horizon: self.ascent.horizon,
            altitude_ceiling: self.ascent.altitude_ceiling,
            dt: self.ascent.dt,
            final_stage_policy: self.ascent.final_stage_policy,
        }
    }

    /// Payload on top of the fully fuelled first stage.
    pub fn initial_state(&self) -> VehicleState {
        VehicleState::new(
            self.ascent.initial_velocity,
            self.ascent.initial_altitude,
            self.ascent.payload_mass + self.stages.stage(0).total_mass(),
        )
    }
}
