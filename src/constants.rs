// Physical Constants
pub const GRAVITY: f64 = 9.81; // m/s², also the reference for propellant flow
pub const GRAVITATIONAL_CONSTANT: f64 = 6.67430e-11; // N⋅m²/kg²

// Launch Environment
pub const LAUNCH_BODY_RADIUS: f64 = 6_000_000.0; // meters
pub const AIR_DENSITY_SEA_LEVEL: f64 = 1.225; // kg/m³
pub const ATMOSPHERE_SCALE_HEIGHT: f64 = 8_500.0; // meters

// Transfer Body (Kerbin-like)
pub const TRANSFER_BODY_MASS: f64 = 5.2915793e22; // kg
pub const TRANSFER_BODY_RADIUS: f64 = 6_000.0; // meters
pub const TRANSFER_TARGET_DISTANCE: f64 = 384_400_000.0; // m, from the body's centre

// Ascent Parameters
pub const PAYLOAD_MASS: f64 = 10_000.0; // kg
pub const TIME_STEP: f64 = 0.1; // s
pub const MAX_SIMULATION_TIME: f64 = 500.0; // s
pub const ALTITUDE_CEILING: f64 = 200_000.0; // m

// Transfer Parameters
pub const PARKING_ORBIT_ALTITUDE: f64 = 200_000.0; // m
pub const TRANSFER_APOAPSIS_ALTITUDE: f64 = TRANSFER_TARGET_DISTANCE - TRANSFER_BODY_RADIUS; // m
pub const FINAL_ORBIT_ALTITUDE: f64 = 100_000.0; // m
pub const TRANSFER_TIME_STEP: f64 = 10.0; // s
pub const TRANSFER_INITIAL_MASS: f64 = 100_000.0; // kg
pub const PROPELLANT_PER_DELTA_V: f64 = 15.0; // kg per m/s
