use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum SimulationError {
    #[error("Step size must be positive and finite, got {0}")]
    InvalidStepSize(f64),

    #[error("Time horizon must be non-negative and finite, got {0}")]
    InvalidHorizon(f64),

    #[error("Horizon {horizon} s at step {dt} s needs more steps than can be counted")]
    TooManySteps { horizon: f64, dt: f64 },

    #[error("Altitude ceiling must not be NaN")]
    InvalidAltitudeCeiling(f64),

    #[error("Stage table must contain at least one stage")]
    EmptyStageTable,

    #[error("Radius of {name} must be positive, got {value} m")]
    NonPositiveRadius { name: &'static str, value: f64 },

    #[error("Gravitational parameter must be positive, got {0}")]
    InvalidGravitationalParameter(f64),

    #[error("Vehicle mass must be non-negative, got {0} kg")]
    NegativeMass(f64),

    #[error("Initial vehicle mass must be positive, got {0} kg")]
    NonPositiveMass(f64),

    #[error("Invalid transfer plan: {0}")]
    InvalidTransferPlan(String),

    #[error("Invalid vehicle: {0}")]
    InvalidVehicle(String),
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read mission file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse mission file: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Invalid mission: {0}")]
    Invalid(#[from] SimulationError),
}

#[derive(Debug, Error)]
pub enum ExportError {
    #[error("Export I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
}
