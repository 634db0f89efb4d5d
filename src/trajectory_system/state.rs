use std::ops::{Add, Mul};

/// One-dimensional vehicle state. Also used as its own time derivative
/// (dv/dt, dh/dt, dm/dt) inside the integrator.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct VehicleState {
    pub velocity: f64,
    pub altitude: f64,
    pub mass: f64,
}

impl VehicleState {
    pub fn new(velocity: f64, altitude: f64, mass: f64) -> Self {
        VehicleState {
            velocity,
            altitude,
            mass,
        }
    }

    /// At rest on the surface.
    pub fn on_pad(mass: f64) -> Self {
        VehicleState::new(0.0, 0.0, mass)
    }

    pub fn with_mass_floor(self, floor: f64) -> Self {
        VehicleState {
            mass: self.mass.max(floor),
            ..self
        }
    }
}

impl Add for VehicleState {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        VehicleState {
            velocity: self.velocity + other.velocity,
            altitude: self.altitude + other.altitude,
            mass: self.mass + other.mass,
        }
    }
}

impl Mul<f64> for VehicleState {
    type Output = Self;

    fn mul(self, scalar: f64) -> Self {
        VehicleState {
            velocity: self.velocity * scalar,
            altitude: self.altitude * scalar,
            mass: self.mass * scalar,
        }
    }
}
