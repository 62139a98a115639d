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

use crate::cosmic::{CartesianState, GeodesicState, SchwarzschildBody, SphericalState};
use crate::dynamics::SchwarzschildDynamics;
use crate::md::trajectory::Traj;
use crate::propagators::{
    Dormand45, ErrorCtrl, InitialStateSnafu, PropOpts, PropagationError, Propagator, RK,
};
use crate::time::Duration;
use snafu::ResultExt;

/// The output of the Trajectory Solver: the states ordered by strictly increasing proper time,
/// in the coordinates requested from the solver.
#[derive(Clone, Debug, PartialEq)]
pub enum Trajectory {
    Spherical(Traj<GeodesicState>),
    Cartesian(Traj<CartesianState>),
}

impl Trajectory {
    pub fn len(&self) -> usize {
        match self {
            Self::Spherical(traj) => traj.len(),
            Self::Cartesian(traj) => traj.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Proper time of each sample.
    pub fn lambdas(&self) -> Vec<Duration> {
        match self {
            Self::Spherical(traj) => traj.iter().map(|s| s.lambda).collect(),
            Self::Cartesian(traj) => traj.iter().map(|s| s.lambda).collect(),
        }
    }

    /// Returns this trajectory in Cartesian coordinates, converting it if needed.
    pub fn into_cartesian(self) -> Traj<CartesianState> {
        match self {
            Self::Spherical(traj) => traj.to_cartesian(),
            Self::Cartesian(traj) => traj,
        }
    }

    pub fn as_cartesian(&self) -> Option<&Traj<CartesianState>> {
        match self {
            Self::Cartesian(traj) => Some(traj),
            Self::Spherical(_) => None,
        }
    }

    pub fn as_spherical(&self) -> Option<&Traj<GeodesicState>> {
        match self {
            Self::Spherical(traj) => Some(traj),
            Self::Cartesian(_) => None,
        }
    }
}

/// A trajectory solver integrates the equations of motion from an initial state until the requested proper time.
///
/// Incomplete spans are errors: no partial trajectory is ever returned.
pub trait TrajectorySolver {
    fn solve(
        &self,
        initial: &SphericalState,
        end_lambda: Duration,
        step: Duration,
        return_cartesian: bool,
    ) -> Result<Trajectory, PropagationError>;
}

impl TrajectorySolver for SchwarzschildDynamics {
    fn solve(
        &self,
        initial: &SphericalState,
        end_lambda: Duration,
        step: Duration,
        return_cartesian: bool,
    ) -> Result<Trajectory, PropagationError> {
        calculate_trajectory(&self.body, initial, end_lambda, step, return_cartesian)
    }
}

/// Integrates the Schwarzschild geodesic from `initial` (at λ = 0) until `end_lambda` with an adaptive Dormand Prince 45,
/// using the default propagator options seeded with `step` as the initial step.
///
/// The first sample of the returned trajectory is the initial state and the last one is exactly at `end_lambda`.
pub fn calculate_trajectory(
    body: &SchwarzschildBody,
    initial: &SphericalState,
    end_lambda: Duration,
    step: Duration,
    return_cartesian: bool,
) -> Result<Trajectory, PropagationError> {
    check_step(step)?;
    let mut opts = PropOpts::default();
    opts.set_init_step(step);
    calculate_trajectory_with::<Dormand45, _>(body, initial, end_lambda, opts, return_cartesian)
}

/// Same as [calculate_trajectory] with the integrator and the propagator options chosen by the caller.
///
/// With fixed step options, the trajectory has ⌈span/step⌉ + 1 samples.
pub fn calculate_trajectory_with<T: RK, E: ErrorCtrl>(
    body: &SchwarzschildBody,
    initial: &SphericalState,
    end_lambda: Duration,
    opts: PropOpts<E>,
    return_cartesian: bool,
) -> Result<Trajectory, PropagationError> {
    if end_lambda.is_negative() {
        return Err(PropagationError::InvalidSpan {
            msg: format!("end λ must not be negative, got {end_lambda}"),
        });
    }
    check_step(opts.init_step)?;

    let start = GeodesicState::from_spherical(body, initial).context(InitialStateSnafu)?;
    debug!(
        "Solving {} from {} until λ = {} ({})",
        body, initial, end_lambda, opts
    );

    let prop = Propagator::new::<T>(SchwarzschildDynamics::new(*body), opts);
    let (end_state, traj) = prop.with(start).for_duration_with_traj(end_lambda)?;
    debug!("{traj} ending at {end_state}");

    if return_cartesian {
        Ok(Trajectory::Cartesian(traj.to_cartesian()))
    } else {
        Ok(Trajectory::Spherical(traj))
    }
}

fn check_step(step: Duration) -> Result<(), PropagationError> {
    if step <= Duration::ZERO {
        return Err(PropagationError::InvalidSpan {
            msg: format!("step must be strictly positive, got {step}"),
        });
    }
    Ok(())
}
