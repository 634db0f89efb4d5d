use std::ops::{Add, Mul};

use crate::errors::SimulationError;

pub trait EquationsOfMotion {
    type State;

    fn compute_derivative(&self, state: &Self::State) -> Self::State;
}

/// Classic fourth-order Runge-Kutta with a fixed step.
pub struct RK4<T: EquationsOfMotion> {
    eom: T,
}

impl<T: EquationsOfMotion> RK4<T>
where
    T::State: Copy + Add<Output = T::State> + Mul<f64, Output = T::State>,
{
    pub fn new(eom: T) -> Self {
        RK4 { eom }
    }

    pub fn integrate(&self, state: &T::State, dt: f64) -> T::State {
        let k1 = self.eom.compute_derivative(state);

        let state2 = *state + k1 * (dt / 2.0);
        let k2 = self.eom.compute_derivative(&state2);

        let state3 = *state + k2 * (dt / 2.0);
        let k3 = self.eom.compute_derivative(&state3);

        let state4 = *state + k3 * dt;
        let k4 = self.eom.compute_derivative(&state4);

        *state + (k1 + k2 * 2.0 + k3 * 2.0 + k4) * (dt / 6.0)
    }
}

/// Number of fixed steps of `dt` needed to cover `horizon`, `ceil(horizon / dt)`.
pub fn fixed_step_count(horizon: f64, dt: f64) -> Result<usize, SimulationError> {
    let steps = (horizon / dt).ceil();
    // usize::MAX as f64 rounds up to 2^64, so anything below it fits
    if !steps.is_finite() || steps < 0.0 || steps >= usize::MAX as f64 {
        return Err(SimulationError::TooManySteps { horizon, dt });
    }
    Ok(steps as usize)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::trajectory_system::state::VehicleState;
    use approx::assert_relative_eq;

    #[test]
    fn test_fixed_step_count_rounds_up() {
        assert_eq!(fixed_step_count(1.05, 0.1), Ok(11));
        assert_eq!(fixed_step_count(0.0, 0.1), Ok(0));
        assert_eq!(fixed_step_count(1.0e9, 0.1), Ok(10_000_000_000));
    }

    #[test]
    fn test_fixed_step_count_rejects_uncountable_horizons() {
        assert!(matches!(
            fixed_step_count(1.0e300, 0.1),
            Err(SimulationError::TooManySteps { .. })
        ));
        assert!(matches!(
            fixed_step_count(1.0, 1.0e-320),
            Err(SimulationError::TooManySteps { .. })
        ));
    }

    struct ExponentialDecay(f64);

    impl EquationsOfMotion for ExponentialDecay {
        type State = VehicleState;

        fn compute_derivative(&self, state: &VehicleState) -> VehicleState {
            *state * -self.0
        }
    }

    struct ConstantAcceleration(f64);

    impl EquationsOfMotion for ConstantAcceleration {
        type State = VehicleState;

        fn compute_derivative(&self, state: &VehicleState) -> VehicleState {
            VehicleState::new(self.0, state.velocity, 0.0)
        }
    }

    #[test]
    fn test_rk4_tracks_exponential_decay() {
        let integrator = RK4::new(ExponentialDecay(0.5));
        let dt = 0.01;
        let mut state = VehicleState::new(1.0, 2.0, 3.0);

        for _ in 0..200 {
            state = integrator.integrate(&state, dt);
        }

        let decay = (-0.5f64 * 2.0).exp();
        assert_relative_eq!(state.velocity, decay, max_relative = 1e-9);
        assert_relative_eq!(state.altitude, 2.0 * decay, max_relative = 1e-9);
        assert_relative_eq!(state.mass, 3.0 * decay, max_relative = 1e-9);
    }

    #[test]
    fn test_rk4_is_exact_for_quadratic_motion() {
        let integrator = RK4::new(ConstantAcceleration(3.0));
        let state = integrator.integrate(&VehicleState::new(1.0, 0.0, 10.0), 2.0);

        assert_relative_eq!(state.velocity, 7.0, max_relative = 1e-12);
        assert_relative_eq!(state.altitude, 8.0, max_relative = 1e-12);
        assert_eq!(state.mass, 10.0);
    }
}
