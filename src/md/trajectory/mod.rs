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

use snafu::prelude::*;

mod traj;

pub use traj::Traj;

use crate::time::Duration;

#[derive(Clone, PartialEq, Debug, Snafu)]
#[snafu(visibility(pub(crate)))]
pub enum TrajError {
    #[snafu(display("trajectory is empty"))]
    Empty,
    #[snafu(display(
        "proper time is not strictly increasing at state #{index}: {lambda} follows {prev_lambda}"
    ))]
    NonMonotonic {
        index: usize,
        prev_lambda: Duration,
        lambda: Duration,
    },
    #[snafu(display("state #{index} cannot be used: {msg}"))]
    DegenerateSample { index: usize, msg: String },
}
