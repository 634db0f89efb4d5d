use serde::Deserialize;

use crate::constants::GRAVITY;
use crate::errors::SimulationError;

#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct StageParameters {
    pub thrust: f64,
    pub propellant_mass: f64,
    pub dry_mass: f64,
    pub drag_coefficient: f64,
    pub reference_area: f64,
    pub specific_impulse: f64,
}

impl StageParameters {
    pub fn new(
        thrust: f64,
        propellant_mass: f64,
        dry_mass: f64,
        drag_coefficient: f64,
        reference_area: f64,
        specific_impulse: f64,
    ) -> Self {
        StageParameters {
            thrust,
            propellant_mass,
            dry_mass,
            drag_coefficient,
            reference_area,
            specific_impulse,
        }
    }

    /// Propellant consumed per second at full thrust, kg/s.
    pub fn mass_flow_rate(&self) -> f64 {
        self.thrust / (self.specific_impulse * GRAVITY)
    }

    pub fn total_mass(&self) -> f64 {
        self.propellant_mass + self.dry_mass
    }

    pub fn burn_time(&self) -> f64 {
        self.propellant_mass / self.mass_flow_rate()
    }

    fn validate(&self, index: usize) -> Result<(), SimulationError> {
        let fields = [
            ("thrust", self.thrust),
            ("propellant mass", self.propellant_mass),
            ("drag coefficient", self.drag_coefficient),
            ("reference area", self.reference_area),
        ];
        for (name, value) in fields {
            if !value.is_finite() || value < 0.0 {
                return Err(SimulationError::InvalidVehicle(format!(
                    "stage {index} has invalid {name}: {value}"
                )));
            }
        }
        if !self.dry_mass.is_finite() || self.dry_mass <= 0.0 {
            return Err(SimulationError::InvalidVehicle(format!(
                "stage {index} has non-positive dry mass: {}",
                self.dry_mass
            )));
        }
        if !self.specific_impulse.is_finite() || self.specific_impulse <= 0.0 {
            return Err(SimulationError::InvalidVehicle(format!(
                "stage {index} has non-positive specific impulse: {}",
                self.specific_impulse
            )));
        }
        Ok(())
    }
}

/// Ordered stages of a launch vehicle, first to burn at index 0.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(try_from = "Vec<StageParameters>")]
pub struct StageTable {
    stages: Vec<StageParameters>,
}

impl StageTable {
    pub fn new(stages: Vec<StageParameters>) -> Result<Self, SimulationError> {
        if stages.is_empty() {
            return Err(SimulationError::EmptyStageTable);
        }
        for (index, stage) in stages.iter().enumerate() {
            stage.validate(index)?;
        }
        Ok(StageTable { stages })
    }

    /// Panics on an out-of-range index; the integrator owns indexing.
    pub fn stage(&self, index: usize) -> &StageParameters {
        &self.stages[index]
    }

    pub fn get(&self, index: usize) -> Option<&StageParameters> {
        self.stages.get(index)
    }

    pub fn len(&self) -> usize {
        self.stages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stages.is_empty()
    }

    pub fn last_index(&self) -> usize {
        self.stages.len() - 1
    }

    pub fn iter(&self) -> impl Iterator<Item = &StageParameters> {
        self.stages.iter()
    }

    /// Mass on the pad: every stage fully fuelled plus the payload.
    pub fn stacked_mass(&self, payload_mass: f64) -> f64 {
        payload_mass + self.stages.iter().map(StageParameters::total_mass).sum::<f64>()
    }
}

impl Default for StageTable {
    fn default() -> Self {
        StageTable {
            stages: vec![
                StageParameters::new(1_500_000.0, 150_000.0, 10_000.0, 0.5, 10.0, 300.0),
                StageParameters::new(800_000.0, 50_000.0, 5_000.0, 0.5, 8.0, 320.0),
                StageParameters::new(300_000.0, 20_000.0, 3_000.0, 0.5, 6.0, 340.0),
                StageParameters::new(100_000.0, 5_000.0, 1_000.0, 0.5, 4.0, 350.0),
            ],
        }
    }
}

impl TryFrom<Vec<StageParameters>> for StageTable {
    type Error = SimulationError;

    fn try_from(stages: Vec<StageParameters>) -> Result<Self, Self::Error> {
        StageTable::new(stages)
    }
}
