use crate::control::environment::Environment;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Aerodynamics {
    pub drag_coefficient: f64,
    pub surface_area: f64,
}

impl Aerodynamics {
    pub fn new(drag_coefficient: f64, surface_area: f64) -> Self {
        Aerodynamics {
            drag_coefficient,
            surface_area,
        }
    }

    pub fn calculate_dynamic_pressure(&self, velocity: f64, air_density: f64) -> f64 {
        0.5 * air_density * velocity.powi(2)
    }

    /// Drag force magnitude in newtons. Uses v², so it always opposes
    /// upward acceleration regardless of the sign of the velocity.
    pub fn calculate_drag(&self, velocity: f64, altitude: f64, environment: &Environment) -> f64 {
        let dynamic_pressure =
            self.calculate_dynamic_pressure(velocity, environment.air_density(altitude));
        dynamic_pressure * self.drag_coefficient * self.surface_area
    }

    pub fn drag_acceleration(
        &self,
        velocity: f64,
        altitude: f64,
        mass: f64,
        environment: &Environment,
    ) -> f64 {
        self.calculate_drag(velocity, altitude, environment) / mass
    }
}
