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
use crate::linalg::{DefaultAllocator, DimName, OVector};
use std::fmt;

/// Below this magnitude a component's error is measured absolutely rather than relatively.
pub const REL_ERR_THRESH: f64 = 0.1;

/// Reduces the embedded error estimate of a step to the scalar compared against the tolerance.
pub trait ErrorCtrl: Copy + Send + Sync + fmt::Debug {
    /// `error_est` is the difference between the propagated and the embedded solutions, `candidate` the
    /// proposed next state and `cur_state` the state at the start of the step. NaN must be returned as is.
    fn estimate<N: DimName>(
        error_est: &OVector<f64, N>,
        candidate: &OVector<f64, N>,
        cur_state: &OVector<f64, N>,
    ) -> f64
    where
        DefaultAllocator: Allocator<N>;
}

/// Absolute L-infinity norm of the error estimate.
#[derive(Clone, Copy, Debug, Default)]
pub struct LargestError;

impl ErrorCtrl for LargestError {
    fn estimate<N: DimName>(
        error_est: &OVector<f64, N>,
        _candidate: &OVector<f64, N>,
        _cur_state: &OVector<f64, N>,
    ) -> f64
    where
        DefaultAllocator: Allocator<N>,
    {
        error_est.amax()
    }
}

/// A largest state error control, component by component.
///
/// Each component error is relative to the mean magnitude of that component over the step when that magnitude
/// exceeds `REL_ERR_THRESH`, and absolute otherwise. The largest of these is the error of the step.
#[derive(Clone, Copy, Debug, Default)]
pub struct LargestState;

impl ErrorCtrl for LargestState {
    fn estimate<N: DimName>(
        error_est: &OVector<f64, N>,
        candidate: &OVector<f64, N>,
        cur_state: &OVector<f64, N>,
    ) -> f64
    where
        DefaultAllocator: Allocator<N>,
    {
        let mut max_err = 0.0;
        for i in 0..N::dim() {
            let mag = 0.5 * (candidate[i] + cur_state[i]).abs();
            let err = if mag > REL_ERR_THRESH {
                (error_est[i] / mag).abs()
            } else {
                error_est[i].abs()
            };
            // A NaN error must not be masked by the comparison
            if err.is_nan() {
                return f64::NAN;
            }
            if err > max_err {
                max_err = err;
            }
        }
        max_err
    }
}

/// An RSS state error control: the L2 norm of the error relative to the L2 norm of the mean state over the step.
///
/// Only meaningful when all the components of the state share a unit.
#[derive(Clone, Copy, Debug, Default)]
pub struct RSSState;

impl ErrorCtrl for RSSState {
    fn estimate<N: DimName>(
        error_est: &OVector<f64, N>,
        candidate: &OVector<f64, N>,
        cur_state: &OVector<f64, N>,
    ) -> f64
    where
        DefaultAllocator: Allocator<N>,
    {
        let mag = 0.5 * (candidate + cur_state).norm();
        let err = error_est.norm();
        if mag > REL_ERR_THRESH {
            err / mag
        } else {
            err
        }
    }
}

#[cfg(test)]
mod ut_error_ctrl {
    use super::*;
    use crate::linalg::Vector3;

    #[test]
    fn estimates() {
        let err = Vector3::new(1e-3, -2e-3, 0.0);
        let cur = Vector3::new(10.0, 0.01, 0.0);
        let cand = Vector3::new(10.0, 0.01, 0.0);

        assert_eq!(LargestError::estimate(&err, &cand, &cur), 2e-3);
        // First component is relative to 10, second is absolute
        assert_eq!(LargestState::estimate(&err, &cand, &cur), 2e-3);
        let err = Vector3::new(1.0, 0.0, 0.0);
        assert_eq!(LargestState::estimate(&err, &cand, &cur), 0.1);
        let rss = RSSState::estimate(&err, &cand, &cur);
        assert!((rss - 1.0 / (10.0_f64.powi(2) + 0.01_f64.powi(2)).sqrt()).abs() < 1e-15);

        let nan = Vector3::new(f64::NAN, 0.0, 0.0);
        assert!(LargestState::estimate(&nan, &cand, &cur).is_nan());
    }
}
