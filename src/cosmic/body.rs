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

use super::{InputError, GRAVITATIONAL_CONSTANT, SPEED_OF_LIGHT, SUN_MASS_KG};
use crate::units::{Kilograms, Meters};
use serde_derive::{Deserialize, Serialize};
use std::fmt;

/// A non-rotating, uncharged, spherically symmetric central body.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "BodyRepr")]
pub struct SchwarzschildBody {
    mass_kg: f64,
}

/// Unvalidated serialized form of a [SchwarzschildBody].
#[derive(Deserialize)]
struct BodyRepr {
    mass_kg: f64,
}

impl TryFrom<BodyRepr> for SchwarzschildBody {
    type Error = InputError;

    fn try_from(repr: BodyRepr) -> Result<Self, Self::Error> {
        Self::new(Kilograms::new(repr.mass_kg))
    }
}

impl SchwarzschildBody {
    /// Initializes a new body of the provided mass, which must be finite and strictly positive.
    pub fn new(mass: Kilograms) -> Result<Self, InputError> {
        let mass_kg = mass.value();
        if !mass_kg.is_finite() || mass_kg <= 0.0 {
            return Err(InputError::InvalidInput {
                param: "central mass",
                msg: format!("must be finite and strictly positive, got {mass}"),
            });
        }
        Ok(Self { mass_kg })
    }

    /// The Sun, with a mass of 1.989e30 kg.
    pub fn sun() -> Self {
        Self {
            mass_kg: SUN_MASS_KG,
        }
    }

    pub fn mass(&self) -> Kilograms {
        Kilograms::new(self.mass_kg)
    }

    /// Gravitational parameter GM in m^3/s^2
    pub fn gm(&self) -> f64 {
        GRAVITATIONAL_CONSTANT * self.mass_kg
    }

    /// Schwarzschild radius r_s = 2GM/c^2
    pub fn schwarzschild_radius(&self) -> Meters {
        Meters::new(2.0 * self.gm() / SPEED_OF_LIGHT.powi(2))
    }

    /// Returns true if the provided radius is at or inside the event horizon.
    pub fn is_within_horizon(&self, radius: Meters) -> bool {
        radius.value() <= self.schwarzschild_radius().value()
    }
}

impl fmt::Display for SchwarzschildBody {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Schwarzschild body of mass {:e} kg (r_s = {:.3})",
            self.mass_kg,
            self.schwarzschild_radius()
        )
    }
}
