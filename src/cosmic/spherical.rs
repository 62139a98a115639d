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

use super::{InputError, SchwarzschildBody, SPEED_OF_LIGHT};
use crate::units::{Meters, MetersPerSecond, Radians, RadiansPerSecond};
use serde_derive::{Deserialize, Serialize};
use std::f64::consts::{FRAC_PI_2, PI};
use std::fmt;

/// An orbital state in spherical coordinates, in SI units.
///
/// The rates are derivatives with respect to the proper time λ.
#[derive(Copy, Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct SphericalState {
    /// Radial distance in meters
    pub r_m: f64,
    /// Polar angle in radians
    pub theta_rad: f64,
    /// Azimuth in radians
    pub phi_rad: f64,
    /// dr/dλ in m/s
    pub r_dot_m_s: f64,
    /// dθ/dλ in rad/s
    pub theta_dot_rad_s: f64,
    /// dφ/dλ in rad/s
    pub phi_dot_rad_s: f64,
}

impl SphericalState {
    /// Builds the state of a particle at perihelion in the equatorial plane (θ = π/2) at the reference azimuth φ = π,
    /// moving tangentially at `v0`.
    ///
    /// ```
    /// use schwarzschild_orbit::units::{Kilometers, KilometersPerSecond};
    /// use schwarzschild_orbit::{SchwarzschildBody, SphericalState};
    ///
    /// let state = SphericalState::from_perihelion(
    ///     &SchwarzschildBody::sun(),
    ///     Kilometers::new(147.09e6).into(),
    ///     KilometersPerSecond::new(30.29).into(),
    /// )
    /// .unwrap();
    /// assert_eq!(state.r_dot_m_s, 0.0);
    /// assert!((state.phi_dot_rad_s - 30.29e3 / 147.09e9).abs() < 1e-20);
    /// ```
    pub fn from_perihelion(
        body: &SchwarzschildBody,
        r0: Meters,
        v0: MetersPerSecond,
    ) -> Result<Self, InputError> {
        Self::from_perihelion_at_azimuth(body, r0, v0, Radians::new(PI))
    }

    /// Same as `from_perihelion` with a caller chosen azimuth.
    pub fn from_perihelion_at_azimuth(
        body: &SchwarzschildBody,
        r0: Meters,
        v0: MetersPerSecond,
        phi: Radians,
    ) -> Result<Self, InputError> {
        if !r0.value().is_finite() || r0.value() <= 0.0 {
            return Err(InputError::InvalidInput {
                param: "perihelion distance",
                msg: format!("must be finite and strictly positive, got {r0}"),
            });
        }
        if body.is_within_horizon(r0) {
            return Err(InputError::InvalidInput {
                param: "perihelion distance",
                msg: format!(
                    "{r0} is within the Schwarzschild radius {}",
                    body.schwarzschild_radius()
                ),
            });
        }
        if !v0.value().is_finite() || v0.value() < 0.0 {
            return Err(InputError::InvalidInput {
                param: "perihelion speed",
                msg: format!("must be finite and non-negative, got {v0}"),
            });
        }
        if v0.value() >= SPEED_OF_LIGHT {
            return Err(InputError::InvalidInput {
                param: "perihelion speed",
                msg: format!("{v0} is not slower than light"),
            });
        }
        if !phi.value().is_finite() {
            return Err(InputError::InvalidInput {
                param: "azimuth",
                msg: format!("must be finite, got {phi}"),
            });
        }

        // ω = v0 / r0, the radian multiplier is implicit in the unit division
        let omega: RadiansPerSecond = v0 / r0;

        Ok(Self {
            r_m: r0.value(),
            theta_rad: FRAC_PI_2,
            phi_rad: phi.value(),
            r_dot_m_s: 0.0,
            theta_dot_rad_s: 0.0,
            phi_dot_rad_s: omega.value(),
        })
    }

    pub fn radius(&self) -> Meters {
        Meters::new(self.r_m)
    }

    /// dφ/dλ
    pub fn angular_velocity(&self) -> RadiansPerSecond {
        RadiansPerSecond::new(self.phi_dot_rad_s)
    }

    /// Local tangential speed r·sinθ·dφ/dλ
    pub fn tangential_speed(&self) -> MetersPerSecond {
        MetersPerSecond::new(self.r_m * self.theta_rad.sin() * self.phi_dot_rad_s)
    }
}

impl fmt::Display for SphericalState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let prec = f.precision().unwrap_or(6);
        write!(
            f,
            "r = {:.*} m  θ = {:.*} rad  φ = {:.*} rad  dr = {:.*} m/s  dθ = {:.*e} rad/s  dφ = {:.*e} rad/s",
            prec,
            self.r_m,
            prec,
            self.theta_rad,
            prec,
            self.phi_rad,
            prec,
            self.r_dot_m_s,
            prec,
            self.theta_dot_rad_s,
            prec,
            self.phi_dot_rad_s
        )
    }
}
