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

use super::error_ctrl::{ErrorCtrl, LargestState};
use super::{Dormand45, IntegrationDetails, PropInstance, PropOpts, RK};
use crate::dynamics::Dynamics;
use crate::linalg::allocator::Allocator;
use crate::linalg::{DefaultAllocator, OVector};
use crate::State;

/// An embedded Runge Kutta integrator of some dynamics: the Butcher table of the chosen [RK] method and the step control.
///
/// Bind it to a state with [Propagator::with] to propagate.
#[derive(Clone, Debug)]
pub struct Propagator<D: Dynamics, E: ErrorCtrl>
where
    DefaultAllocator: Allocator<<D::StateType as State>::VecLength>,
{
    pub dynamics: D,
    pub opts: PropOpts<E>,
    pub(crate) order: u8,
    /// Evaluations of the equations of motion per step
    pub(crate) stages: usize,
    pub(crate) a_coeffs: &'static [f64],
    pub(crate) b_coeffs: &'static [f64],
}

impl<D: Dynamics, E: ErrorCtrl> Propagator<D, E>
where
    DefaultAllocator: Allocator<<D::StateType as State>::VecLength>,
{
    /// Builds a propagator from the Butcher table of `T`.
    pub fn new<T: RK>(dynamics: D, opts: PropOpts<E>) -> Self {
        Self {
            dynamics,
            opts,
            stages: T::STAGES,
            order: T::ORDER,
            a_coeffs: T::A_COEFFS,
            b_coeffs: T::B_COEFFS,
        }
    }

    pub fn set_tolerance(&mut self, tol: f64) {
        self.opts.tolerance = tol;
    }

    pub fn with(&self, state: D::StateType) -> PropInstance<'_, D, E> {
        let k = (0..self.stages)
            .map(|_| OVector::<f64, <D::StateType as State>::VecLength>::zeros())
            .collect();
        PropInstance {
            state,
            prop: self,
            details: IntegrationDetails {
                step: self.opts.init_step,
                error: 0.0,
                attempts: 1,
            },
            step_size: self.opts.init_step,
            fixed_step: self.opts.fixed_step,
            k,
        }
    }
}

impl<D: Dynamics> Propagator<D, LargestState>
where
    DefaultAllocator: Allocator<<D::StateType as State>::VecLength>,
{
    /// Dormand Prince 45 with the default adaptive options.
    pub fn default(dynamics: D) -> Self {
        Self::new::<Dormand45>(dynamics, PropOpts::default())
    }
}
