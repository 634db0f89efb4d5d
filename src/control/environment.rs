use serde::Deserialize;

use crate::constants::{
    AIR_DENSITY_SEA_LEVEL, ATMOSPHERE_SCALE_HEIGHT, GRAVITY, LAUNCH_BODY_RADIUS,
};

/// Altitude-dependent gravity and isothermal atmosphere of the launch body.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct Environment {
    pub surface_gravity: f64,
    pub planet_radius: f64,
    pub sea_level_density: f64,
    pub scale_height: f64,
}

impl Default for Environment {
    fn default() -> Self {
        Environment {
            surface_gravity: GRAVITY,
            planet_radius: LAUNCH_BODY_RADIUS,
            sea_level_density: AIR_DENSITY_SEA_LEVEL,
            scale_height: ATMOSPHERE_SCALE_HEIGHT,
        }
    }
}

impl Environment {
    pub fn new(
        surface_gravity: f64,
        planet_radius: f64,
        sea_level_density: f64,
        scale_height: f64,
    ) -> Self {
        Environment {
            surface_gravity,
            planet_radius,
            sea_level_density,
            scale_height,
        }
    }

    /// Vacuum with no gravity; thrust is the only force acting.
    pub fn vacuum() -> Self {
        Environment {
            surface_gravity: 0.0,
            sea_level_density: 0.0,
            ..Environment::default()
        }
    }

    /// Inverse-square falloff from the surface value. Negative altitudes extrapolate.
    pub fn gravity(&self, altitude: f64) -> f64 {
        let ratio = self.planet_radius / (self.planet_radius + altitude);
        self.surface_gravity * ratio * ratio
    }

    pub fn air_density(&self, altitude: f64) -> f64 {
        self.sea_level_density * (-altitude / self.scale_height).exp()
    }
}

/// Gravity of the default launch body.
pub fn gravity(altitude: f64) -> f64 {
    Environment::default().gravity(altitude)
}

/// Air density of the default launch body.
pub fn air_density(altitude: f64) -> f64 {
    Environment::default().air_density(altitude)
}
