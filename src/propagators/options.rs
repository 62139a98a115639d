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

use std::fmt;

use crate::time::{Duration, Unit};

use super::{ErrorCtrl, LargestState};
use typed_builder::TypedBuilder;

/// Step control of a propagator, in proper time.
///
/// Adaptive integrators keep the step between `min_step` and `max_step` and retry a rejected step at most
/// `attempts` times. With `fixed_step`, every step is `init_step` (except a shortened last one) and no error is estimated.
#[derive(Clone, Copy, Debug, TypedBuilder)]
#[builder(doc)]
pub struct PropOpts<E: ErrorCtrl> {
    /// First step, adapted afterwards unless the step is fixed
    #[builder(default_code = "1.0 * Unit::Minute")]
    pub init_step: Duration,
    #[builder(default_code = "1.0 * Unit::Millisecond")]
    pub min_step: Duration,
    /// Three quarters of an hour
    #[builder(default_code = "45.0 * Unit::Minute")]
    pub max_step: Duration,
    /// Largest accepted local error, as measured by the error control
    #[builder(default = 1e-12)]
    pub tolerance: f64,
    #[builder(default = 50)]
    pub attempts: u8,
    #[builder(default = false)]
    pub fixed_step: bool,
    pub error_ctrl: E,
}

impl<E: ErrorCtrl> PropOpts<E> {
    /// Adaptive options starting at the largest allowed step.
    pub fn with_adaptive_step(
        min_step: Duration,
        max_step: Duration,
        tolerance: f64,
        error_ctrl: E,
    ) -> Self {
        Self {
            init_step: max_step,
            min_step,
            max_step,
            tolerance,
            attempts: 50,
            fixed_step: false,
            error_ctrl,
        }
    }

    /// Clamps the first step into [min_step, max_step].
    pub fn set_init_step(&mut self, init_step: Duration) {
        self.init_step = init_step.max(self.min_step).min(self.max_step);
    }

    /// Lowers the first step too when it exceeds the new bound.
    pub fn set_max_step(&mut self, max_step: Duration) {
        self.max_step = max_step;
        self.init_step = self.init_step.min(max_step);
    }

    /// Raises the first step too when it is below the new bound.
    pub fn set_min_step(&mut self, min_step: Duration) {
        self.min_step = min_step;
        self.init_step = self.init_step.max(min_step);
    }
}

impl<E: ErrorCtrl> fmt::Display for PropOpts<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.fixed_step {
            return write!(f, "fixed Δλ = {}", self.init_step);
        }
        write!(
            f,
            "Δλ₀ = {} in [{}, {}], tol = {:e} ({} attempts)",
            self.init_step, self.min_step, self.max_step, self.tolerance, self.attempts
        )
    }
}

impl PropOpts<LargestState> {
    /// Fixed step options: the error control is never consulted.
    pub fn with_fixed_step(step: Duration) -> Self {
        Self {
            init_step: step,
            min_step: step,
            max_step: step,
            tolerance: 0.0,
            attempts: 0,
            fixed_step: true,
            error_ctrl: LargestState,
        }
    }
}

impl Default for PropOpts<LargestState> {
    /// Adaptive from one minute, between a millisecond and 45 minutes, with a tolerance of 1e-12.
    fn default() -> Self {
        Self::builder().error_ctrl(LargestState).build()
    }
}

#[cfg(test)]
mod ut_options {
    use super::*;
    use crate::propagators::RSSState;

    #[test]
    fn fixed_and_adaptive() {
        let fixed = PropOpts::with_fixed_step(5.0 * Unit::Minute);
        assert!(fixed.fixed_step);
        assert_eq!(fixed.min_step, fixed.max_step);
        assert_eq!(fixed.init_step, 300.0 * Unit::Second);
        assert_eq!(format!("{fixed}"), format!("fixed Δλ = {}", 5.0 * Unit::Minute));

        let adaptive = PropOpts::with_adaptive_step(1.0 * Unit::Second, 1.0 * Unit::Hour, 1e-10, RSSState);
        assert!(!adaptive.fixed_step);
        assert_eq!(adaptive.init_step, 1.0 * Unit::Hour);
        assert_eq!(adaptive.tolerance, 1e-10);
    }

    #[test]
    fn defaults() {
        let opts = PropOpts::default();
        assert_eq!(opts.init_step.to_seconds(), 60.0);
        assert_eq!(opts.min_step, 1.0 * Unit::Millisecond);
        assert_eq!(opts.max_step.to_seconds(), 2700.0);
        assert_eq!(opts.tolerance, 1e-12);
        assert_eq!(opts.attempts, 50);
        assert!(!opts.fixed_step);

        let opts = PropOpts::builder()
            .tolerance(1e-9)
            .error_ctrl(RSSState)
            .build();
        assert_eq!(opts.max_step, 45.0 * Unit::Minute);
        assert_eq!(opts.tolerance, 1e-9);
    }

    #[test]
    fn step_clamping() {
        let mut opts = PropOpts::default();
        opts.set_init_step(2.0 * Unit::Hour);
        assert_eq!(opts.init_step, opts.max_step);
        opts.set_init_step(1.0 * Unit::Microsecond);
        assert_eq!(opts.init_step, opts.min_step);

        opts.set_init_step(10.0 * Unit::Minute);
        opts.set_max_step(1.0 * Unit::Minute);
        assert_eq!(opts.init_step, 1.0 * Unit::Minute);
        opts.set_min_step(2.0 * Unit::Minute);
        assert_eq!(opts.init_step, 2.0 * Unit::Minute);
    }
}
