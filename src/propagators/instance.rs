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

use super::error_ctrl::ErrorCtrl;
use super::{DynamicsSnafu, IntegrationDetails, PropagationError, Propagator};
use crate::dynamics::Dynamics;
use crate::linalg::allocator::Allocator;
use crate::linalg::{DefaultAllocator, OVector};
use crate::md::trajectory::Traj;
use crate::time::{Duration, Unit};
use crate::State;
use rayon::iter::ParallelBridge;
use rayon::prelude::ParallelIterator;
use snafu::ResultExt;
use std::sync::mpsc::{channel, Sender};
use std::time::Instant;

type StateVector<D> = OVector<f64, <<D as Dynamics>::StateType as State>::VecLength>;

/// A [Propagator] bound to a state. It owns the current state, the step to try next, and the
/// stage derivatives reused from one step to the next.
#[derive(Debug)]
pub struct PropInstance<'a, D: Dynamics, E: ErrorCtrl>
where
    DefaultAllocator: Allocator<<D::StateType as State>::VecLength>,
{
    /// Current state, updated after each accepted step
    pub state: D::StateType,
    pub prop: &'a Propagator<D, E>,
    /// Step, error and attempts of the last accepted step
    pub details: IntegrationDetails,
    /// Step tried first on the next call
    pub(crate) step_size: Duration,
    pub(crate) fixed_step: bool,
    /// Stage derivatives k_1 ... k_s
    pub(crate) k: Vec<StateVector<D>>,
}

impl<'a, D: Dynamics, E: ErrorCtrl> PropInstance<'a, D, E>
where
    DefaultAllocator: Allocator<<D::StateType as State>::VecLength>,
{
    pub fn set_step(&mut self, step_size: Duration, fixed: bool) {
        self.step_size = step_size;
        self.fixed_step = fixed;
    }

    fn publish(&self, tx_chan: &Option<Sender<D::StateType>>) {
        if let Some(chan) = tx_chan {
            if let Err(e) = chan.send(self.state) {
                warn!("could not publish state at λ = {}: {e}", self.state.lambda());
            }
        }
    }

    fn propagate(
        &mut self,
        duration: Duration,
        tx_chan: Option<Sender<D::StateType>>,
    ) -> Result<D::StateType, PropagationError> {
        if duration.is_negative() {
            return Err(PropagationError::InvalidSpan {
                msg: format!("cannot propagate backward in proper time ({duration})"),
            });
        }
        // The starting state must itself be valid for the dynamics
        self.state = self.prop.dynamics.finally(self.state).context(DynamicsSnafu)?;
        if duration == Duration::ZERO {
            return Ok(self.state);
        }

        let stop_lambda = self.state.lambda() + duration;
        let verbose = duration >= 2 * Unit::Minute;
        let tick = Instant::now();
        if verbose {
            info!("Propagating for {duration} until λ = {stop_lambda}");
        }

        while self.state.lambda() < stop_lambda {
            let remaining = stop_lambda - self.state.lambda();
            if self.step_size > remaining {
                // Land exactly on the stop time, then resume with the adapted step
                let (next_step, next_fixed) = (self.step_size, self.fixed_step);
                self.set_step(remaining, true);
                self.single_step()?;
                self.set_step(next_step, next_fixed);
            } else {
                self.single_step()?;
            }
            self.publish(&tx_chan);
        }

        if verbose {
            let tock: Duration = tick.elapsed().into();
            info!("Reached λ = {stop_lambda} in {tock}");
        }
        Ok(self.state)
    }

    /// Propagates for the provided proper time span and returns the final state.
    pub fn for_duration(&mut self, duration: Duration) -> Result<D::StateType, PropagationError> {
        self.propagate(duration, None)
    }

    /// Same as [Self::for_duration], also sending every accepted state (including the final one) on `tx_chan`.
    pub fn for_duration_with_channel(
        &mut self,
        duration: Duration,
        tx_chan: Sender<D::StateType>,
    ) -> Result<D::StateType, PropagationError> {
        self.propagate(duration, Some(tx_chan))
    }

    /// Propagates until the provided proper time.
    pub fn until_lambda(&mut self, end_lambda: Duration) -> Result<D::StateType, PropagationError> {
        let duration: Duration = end_lambda - self.state.lambda();
        self.for_duration(duration)
    }

    /// Propagates for the provided span and collects the trajectory, which starts with the current state.
    /// Returns the final state and the trajectory.
    pub fn for_duration_with_traj(
        &mut self,
        duration: Duration,
    ) -> Result<(D::StateType, Traj<D::StateType>), PropagationError> {
        let start_state = self.state;
        let (tx, rx) = channel();
        // The sender is moved in and dropped on return, which closes the channel
        let end_state = self.for_duration_with_channel(duration, tx)?;

        let mut traj = Traj::new();
        traj.states = rx.into_iter().par_bridge().collect();
        traj.states.push(start_state);
        traj.finalize();

        Ok((end_state, traj))
    }

    /// Takes one accepted step and validates the resulting state.
    pub fn single_step(&mut self) -> Result<(), PropagationError> {
        let (step, next) = self.derive()?;
        let lambda = self.state.lambda() + step;
        self.state.set(lambda, &next);
        self.state = self.prop.dynamics.finally(self.state).context(DynamicsSnafu)?;
        Ok(())
    }

    /// Evaluates the stages for a step of `h` seconds and returns the candidate state and the error estimate
    /// (zero when the step is fixed).
    fn stages(
        &mut self,
        h: f64,
        y0: &StateVector<D>,
    ) -> Result<(StateVector<D>, StateVector<D>), PropagationError> {
        let ctx = &self.state;
        let dynamics = &self.prop.dynamics;
        let stages = self.prop.stages;

        self.k[0] = dynamics.eom(0.0, y0, ctx).context(DynamicsSnafu)?;
        let mut a_idx = 0;
        for i in 1..stages {
            // Row i of the Butcher table: c_i is the sum of the a_ij
            let mut c_i = 0.0;
            let mut slope = StateVector::<D>::zeros();
            for k_j in &self.k[..i] {
                let a_ij = self.prop.a_coeffs[a_idx];
                c_i += a_ij;
                slope += a_ij * k_j;
                a_idx += 1;
            }
            self.k[i] = dynamics
                .eom(c_i * h, &(y0 + h * slope), ctx)
                .context(DynamicsSnafu)?;
        }

        let mut next = y0.clone();
        let mut error = StateVector::<D>::zeros();
        let (b, b_star) = self.prop.b_coeffs.split_at(stages);
        for (i, k_i) in self.k.iter().enumerate() {
            next += h * b[i] * k_i;
            if !self.fixed_step {
                error += h * (b[i] - b_star[i]) * k_i;
            }
        }
        Ok((next, error))
    }

    /// Integrates one step from the current state.
    ///
    /// With a fixed step, the step is taken as is. Otherwise the step is shrunk until the error estimate is
    /// within tolerance, the minimum step is reached, or the attempts are exhausted; an accepted step with
    /// margin proposes a larger step for the next call. Returns the step taken and the new state vector.
    fn derive(&mut self) -> Result<(Duration, StateVector<D>), PropagationError> {
        let y0 = self.state.to_vector();
        let opts = &self.prop.opts;
        let (tol, min_step, max_step) = (
            opts.tolerance,
            opts.min_step.to_seconds(),
            opts.max_step.to_seconds(),
        );
        let (max_attempts, order) = (opts.attempts, f64::from(self.prop.order));

        let mut h = self.step_size.to_seconds();
        self.details.attempts = 1;
        loop {
            let (next, error_est) = self.stages(h, &y0)?;
            if self.fixed_step {
                self.details.step = self.step_size;
                return Ok((self.step_size, next));
            }

            let err = E::estimate(&error_est, &next, &y0);
            self.details.error = err;
            let finite = err.is_finite();
            let exhausted = self.details.attempts >= max_attempts;

            if (finite && err <= tol) || h <= min_step || exhausted {
                if exhausted {
                    warn!(
                        "step of {h} s accepted with error {err:e} after {} attempts",
                        self.details.attempts
                    );
                }
                self.details.step = h * Unit::Second;
                // A zero error proposes an infinite step, capped below
                let next_h = if finite && err < tol {
                    (0.9 * h * (tol / err).powf(1.0 / order)).min(max_step)
                } else {
                    h
                };
                self.step_size = next_h * Unit::Second;
                return Ok((self.details.step, next));
            }

            self.details.attempts += 1;
            let shrunk = if finite {
                0.9 * h * (tol / err).powf(1.0 / (order - 1.0))
            } else {
                0.1 * h
            };
            h = shrunk.max(min_step);
        }
    }

    /// Details of the last accepted step.
    pub fn latest_details(&self) -> IntegrationDetails {
        self.details
    }
}
