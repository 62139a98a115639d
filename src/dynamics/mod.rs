/*
    Schwarzschild orbit, relativistic orbit propagation
    Copyright (C) 2023 The schwarzschild-orbit contributors

    This program is free software: you can redistribute it and/or modify
    it under the terms of the GNU Affero General Public License as published
    by the Free Software Foundation, either version 3 of the License, or
    (at your option) any later version.

    This program is distributed in the hope that it will be useful,
    but WITHOUT ANY WARRANTY; without even the implied warranty of
    MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
    GNU Affero General Public License for more details.

    You should have received a copy of the GNU Affero General Public License
    along with this program.  If not, see <https://www.gnu.org/licenses/>.
*/

use crate::linalg::allocator::Allocator;
use crate::linalg::{DefaultAllocator, OVector};
use crate::State;
use snafu::Snafu;

/// Geodesic motion of a test particle in a Schwarzschild spacetime.
pub mod schwarzschild;
pub use self::schwarzschild::*;

/// A model whose equations of motion a [Propagator](crate::propagators::Propagator) integrates.
///
/// The independent variable is the proper time λ, in seconds.
pub trait Dynamics: Clone + Sync + Send
where
    DefaultAllocator: Allocator<<Self::StateType as State>::VecLength>,
{
    type StateType: State;

    /// Derivative of the state vector with respect to the proper time.
    ///
    /// - `delta_lambda`: Proper time in seconds past the context state.
    /// - `state_vec`: The state vector, which changes at each integration stage.
    /// - `state_ctx`: The state at the start of the step, the stages only differ from it by `state_vec`.
    fn eom(
        &self,
        delta_lambda: f64,
        state_vec: &OVector<f64, <Self::StateType as State>::VecLength>,
        state_ctx: &Self::StateType,
    ) -> Result<OVector<f64, <Self::StateType as State>::VecLength>, DynamicsError>;

    /// Validates (and may adjust) each accepted state.
    ///
    /// Also called before the first integration step to validate the initial state.
    fn finally(&self, next_state: Self::StateType) -> Result<Self::StateType, DynamicsError> {
        Ok(next_state)
    }
}

/// Failures of the equations of motion, fatal to the propagation.
#[derive(Debug, Clone, PartialEq, Snafu)]
#[snafu(visibility(pub(crate)))]
pub enum DynamicsError {
    /// The particle reached or crossed the event horizon.
    #[snafu(display("particle at r = {r_m} m crossed the horizon at r_s = {rs_m} m"))]
    HorizonCrossed { r_m: f64, rs_m: f64 },
    /// The state is no longer finite.
    #[snafu(display("state is not finite after λ = {lambda_s} s"))]
    NonFinite { lambda_s: f64 },
    /// The particle reached a pole of the spherical coordinates where cotθ is undefined.
    #[snafu(display("particle reached the coordinate pole (θ = {theta_rad} rad)"))]
    PolarSingularity { theta_rad: f64 },
}
