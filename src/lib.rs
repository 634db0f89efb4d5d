pub mod config;
pub mod constants;
pub mod control;
pub mod errors;
pub mod telemetry_system;
pub mod trajectory_system;

pub use constants::*;
pub use control::environment::{air_density, gravity, Environment};
pub use control::launch_stages::{StageParameters, StageTable};
pub use control::mission::CelestialBody;

// Re-export the simulation entry points from trajectory_system
pub use trajectory_system::ascent::{
    simulate_ascent, AscentSample, AscentSimulation, FinalStagePolicy, SimulationTrace,
    StagingCursor, StagingEvent, TerminationReason,
};
pub use trajectory_system::state::VehicleState;
pub use trajectory_system::transfer::{
    plan_transfer, simulate_transfer, TransferAltitudes, TransferPhase, TransferPlan,
    TransferSample, TransferTrace, TransferVehicle,
};

// Re-export commonly used items from telemetry_system
pub use telemetry_system::export::{write_csv, write_csv_file, TraceSeries};
pub use telemetry_system::telemetry::{Telemetry, TransferReport};

pub use config::MissionConfig;
