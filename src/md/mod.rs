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

use crate::cosmic::{CartesianState, GeodesicState};

pub mod trajectory;

/// The Orbital Parameter Extractor.
pub mod apsides;
pub use apsides::OrbitalParameters;

/// The Trajectory Solver boundary.
pub mod solver;
pub use solver::{calculate_trajectory, calculate_trajectory_with, Trajectory, TrajectorySolver};

/// Configuration driven scenarios.
pub mod scenario;
pub use scenario::OrbitScenario;

pub type GeodesicTraj = trajectory::Traj<GeodesicState>;
pub type CartesianTraj = trajectory::Traj<CartesianState>;
