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

use crate::cosmic::InputError;
use crate::dynamics::DynamicsError;
use crate::io::ConfigError;
use crate::md::trajectory::TrajError;
use crate::plot::PlotError;
use crate::propagators::PropagationError;
use crate::units::UnitError;
use snafu::prelude::*;

/// The crate level error: every module error converts into it with `?`.
#[derive(Debug, Snafu)]
#[snafu(visibility(pub(crate)))]
pub enum OrbitError {
    #[snafu(context(false), display("invalid input: {source}"))]
    Input { source: InputError },
    #[snafu(context(false), display("unit error: {source}"))]
    Unit { source: UnitError },
    #[snafu(context(false), display("dynamics error: {source}"))]
    Dynamics { source: DynamicsError },
    #[snafu(context(false), display("solver failure: {source}"))]
    Propagation { source: PropagationError },
    #[snafu(context(false), display("trajectory error: {source}"))]
    Trajectory { source: TrajError },
    #[snafu(context(false), display("configuration error: {source}"))]
    Config { source: ConfigError },
    #[snafu(context(false), display("plotting error: {source}"))]
    Plot { source: PlotError },
}
