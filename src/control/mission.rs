use serde::Deserialize;
use std::f64::consts::PI;

use crate::constants::{GRAVITATIONAL_CONSTANT, TRANSFER_BODY_MASS, TRANSFER_BODY_RADIUS};
use crate::errors::SimulationError;

/// Central body for orbital transfers.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct CelestialBody {
    pub name: String,
    #[serde(default = "default_gravitational_constant")]
    pub gravitational_constant: f64,
    pub mass: f64,
    pub radius: f64,
}

fn default_gravitational_constant() -> f64 {
    GRAVITATIONAL_CONSTANT
}

impl Default for CelestialBody {
    fn default() -> Self {
        CelestialBody::new(
            "Kerbin".to_string(),
            TRANSFER_BODY_RADIUS,
            TRANSFER_BODY_MASS,
        )
    }
}

impl CelestialBody {
    pub fn new(name: String, radius: f64, mass: f64) -> Self {
        CelestialBody {
            name,
            gravitational_constant: GRAVITATIONAL_CONSTANT,
            mass,
            radius,
        }
    }

    /// Standard gravitational parameter μ = G·M.
    pub fn mu(&self) -> f64 {
        self.gravitational_constant * self.mass
    }

    pub fn validate(&self) -> Result<(), SimulationError> {
        let mu = self.mu();
        if !mu.is_finite() || mu <= 0.0 {
            return Err(SimulationError::InvalidGravitationalParameter(mu));
        }
        if !self.radius.is_finite() || self.radius <= 0.0 {
            return Err(SimulationError::NonPositiveRadius {
                name: "central body",
                value: self.radius,
            });
        }
        Ok(())
    }

    /// Orbital radius for an altitude above the surface.
    pub fn orbit_radius(&self, altitude: f64) -> f64 {
        self.radius + altitude
    }

    pub fn circular_velocity(&self, radius: f64) -> f64 {
        (self.mu() / radius).sqrt()
    }

    /// Speed at `radius` on an orbit with semi-major axis `semi_major_axis`.
    pub fn vis_viva(&self, radius: f64, semi_major_axis: f64) -> f64 {
        (self.mu() * (2.0 / radius - 1.0 / semi_major_axis)).sqrt()
    }

    /// Half the period of an orbit, i.e. the periapsis-to-apoapsis flight time.
    pub fn maneuver_time(&self, semi_major_axis: f64) -> f64 {
        PI * (semi_major_axis.powi(3) / self.mu()).sqrt()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::{assert_abs_diff_eq, assert_relative_eq};

    #[test]
    fn test_kerbin_parameters() {
        let kerbin = CelestialBody::default();

        assert_eq!(kerbin.name, "Kerbin");
        assert_eq!(kerbin.radius, 6_000.0);
        assert_relative_eq!(kerbin.mu(), 3.5316e12, max_relative = 1e-4);
        assert!(kerbin.validate().is_ok());
    }

    #[test]
    fn test_circular_orbit_is_vis_viva_with_equal_axis() {
        let kerbin = CelestialBody::default();
        let r = kerbin.orbit_radius(80_000.0);

        assert_relative_eq!(
            kerbin.vis_viva(r, r),
            kerbin.circular_velocity(r),
            max_relative = 1e-12
        );
        // v = 1 km/s where r = μ / v²
        assert_abs_diff_eq!(kerbin.circular_velocity(kerbin.mu() / 1.0e6), 1_000.0, epsilon = 1e-9);
    }

    #[test]
    fn test_maneuver_time_is_half_period() {
        let kerbin = CelestialBody::default();
        let a = kerbin.orbit_radius(100_000.0);
        let period = 2.0 * PI * (a.powi(3) / kerbin.mu()).sqrt();

        assert_relative_eq!(kerbin.maneuver_time(a), period / 2.0, max_relative = 1e-12);
    }

    #[test]
    fn test_invalid_bodies_are_rejected() {
        let massless = CelestialBody::new("Void".to_string(), 1_000.0, 0.0);
        assert!(matches!(
            massless.validate(),
            Err(SimulationError::InvalidGravitationalParameter(_))
        ));

        let flat = CelestialBody::new("Flat".to_string(), 0.0, 1.0e22);
        assert!(matches!(
            flat.validate(),
            Err(SimulationError::NonPositiveRadius { .. })
        ));
    }
}
