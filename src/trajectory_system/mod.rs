pub mod aerodynamics;
pub mod ascent;
pub mod integrator;
pub mod state;
pub mod transfer;
