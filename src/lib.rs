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

/*! # schwarzschild-orbit

Propagation of a test particle around a non-rotating, uncharged central body by integration of the
geodesic equations of the Schwarzschild metric, and extraction of orbital parameters (aphelion
distance, aphelion speed, eccentricity) from the resulting trajectory.

The pipeline is:
1. build a [`cosmic::SphericalState`] at perihelion from the central mass, the perihelion distance and speed;
2. propagate it with [`md::solver::calculate_trajectory`] (an embedded Runge Kutta from [`propagators`]
   driving the [`dynamics::SchwarzschildDynamics`]);
3. extract the [`md::apsides::OrbitalParameters`];
4. optionally render the orbit with [`plot::OrbitPlotter`].
*/

/// Provides all the propagators / integrators available in this crate.
pub mod propagators;

/// Provides the equations of motion of a test particle in a Schwarzschild spacetime.
pub mod dynamics;

/// Provides the central body, the physical constants, and the state representations.
pub mod cosmic;

/// Typed physical quantities and their conversions.
pub mod units;

mod errors;
/// Functions which may fail will return an error, and all errors can be converted into an `OrbitError`.
pub use self::errors::OrbitError;

/// Configuration loading.
pub mod io;

/// Mission design: trajectories, the trajectory solver, the scenario setup, and the orbital parameters.
pub mod md;

/// Static rendering of trajectories.
pub mod plot;

#[macro_use]
extern crate log;
extern crate hifitime;
extern crate nalgebra as na;

/// Proper time, from hifitime
pub mod time {
    pub use hifitime::*;
}

/// Vectors and allocators, from nalgebra
pub mod linalg {
    pub use na::base::*;
}

pub use self::cosmic::{CartesianState, GeodesicState, SchwarzschildBody, SphericalState, State};
