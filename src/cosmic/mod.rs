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
use crate::time::Duration;
use snafu::prelude::*;
use std::fmt;

mod body;
pub use self::body::*;

mod spherical;
pub use self::spherical::*;

mod geodesic;
pub use self::geodesic::*;

mod cartesian;
pub use self::cartesian::*;

/// A trait for propagated states, tagged by the proper time λ elapsed since the start of the propagation.
pub trait State: Copy + PartialEq + fmt::Display + fmt::LowerExp + Send + Sync
where
    Self: Sized,
    DefaultAllocator: Allocator<Self::VecLength>,
{
    /// Size of the propagated vector
    type VecLength: DimName;

    /// Return this state as a vector for the propagation
    fn to_vector(&self) -> OVector<f64, Self::VecLength>;

    /// Overwrites this state from a propagated vector at proper time `lambda`.
    fn set(&mut self, lambda: Duration, vector: &OVector<f64, Self::VecLength>);

    /// Retrieve the proper time since the start of the propagation
    fn lambda(&self) -> Duration;
}

/// Errors raised when building a central body or an initial state.
#[derive(Debug, Clone, PartialEq, Snafu)]
#[snafu(visibility(pub(crate)))]
pub enum InputError {
    #[snafu(display("invalid {param}: {msg}"))]
    InvalidInput { param: &'static str, msg: String },
}

/// c in m/s
pub const SPEED_OF_LIGHT: f64 = 299_792_458.0;

/// Newtonian constant of gravitation, CODATA 2018, in m^3 kg^-1 s^-2
pub const GRAVITATIONAL_CONSTANT: f64 = 6.674_30e-11;

/// Astronomical unit, in meters, according to the [IAU](https://www.iau.org/public/themes/measuring/).
pub const AU: f64 = 149_597_870_700.0;

/// Mass of the Sun as used in the reference Earth orbit scenario, in kilograms
pub const SUN_MASS_KG: f64 = 1.989e30;
