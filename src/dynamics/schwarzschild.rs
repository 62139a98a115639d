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

use super::{Dynamics, DynamicsError};
use crate::cosmic::{GeodesicState, SchwarzschildBody, SPEED_OF_LIGHT};
use crate::linalg::{Const, OVector};
use crate::State;
use std::fmt;

/// The non-zero Christoffel symbols of the Schwarzschild metric at a given (r, θ), in SI units.
/// Symbols symmetric in their lower indices are only stored once.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct ChristoffelSymbols {
    /// Γᵗ_tr = Γᵗ_rt
    pub t_tr: f64,
    /// Γʳ_tt
    pub r_tt: f64,
    /// Γʳ_rr
    pub r_rr: f64,
    /// Γʳ_θθ
    pub r_thth: f64,
    /// Γʳ_φφ
    pub r_phph: f64,
    /// Γᶿ_rθ = Γᶿ_θr
    pub th_rth: f64,
    /// Γᶿ_φφ
    pub th_phph: f64,
    /// Γᵠ_rφ = Γᵠ_φr
    pub ph_rph: f64,
    /// Γᵠ_θφ = Γᵠ_φθ
    pub ph_thph: f64,
}

impl ChristoffelSymbols {
    /// Computes the symbols at radius `r` (meters) and polar angle `theta` (radians) for a Schwarzschild radius `rs` (meters).
    pub fn at(rs: f64, r: f64, theta: f64) -> Self {
        let (sin_t, cos_t) = theta.sin_cos();
        let r_minus_rs = r - rs;
        Self {
            t_tr: rs / (2.0 * r * r_minus_rs),
            r_tt: SPEED_OF_LIGHT.powi(2) * rs * r_minus_rs / (2.0 * r.powi(3)),
            r_rr: -rs / (2.0 * r * r_minus_rs),
            r_thth: -r_minus_rs,
            r_phph: -r_minus_rs * sin_t.powi(2),
            th_rth: 1.0 / r,
            th_phph: -sin_t * cos_t,
            ph_rph: 1.0 / r,
            ph_thph: cos_t / sin_t,
        }
    }
}

/// `SchwarzschildDynamics` provides the geodesic equations of a test particle around a [SchwarzschildBody].
///
/// The state vector is [t, r, θ, φ, dt/dλ, dr/dλ, dθ/dλ, dφ/dλ] and its derivative with respect to the proper time λ is
/// d²xᵘ/dλ² = -Γᵘ_αβ (dxᵅ/dλ)(dxᵝ/dλ).
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct SchwarzschildDynamics {
    pub body: SchwarzschildBody,
    rs_m: f64,
}

impl SchwarzschildDynamics {
    pub fn new(body: SchwarzschildBody) -> Self {
        Self {
            body,
            rs_m: body.schwarzschild_radius().value(),
        }
    }

    /// Schwarzschild radius of the central body, in meters
    pub fn rs_m(&self) -> f64 {
        self.rs_m
    }

    fn check(&self, lambda_s: f64, vector: &OVector<f64, Const<8>>) -> Result<(), DynamicsError> {
        if vector.iter().any(|v| !v.is_finite()) {
            return Err(DynamicsError::NonFinite { lambda_s });
        }
        if vector[1] <= self.rs_m {
            return Err(DynamicsError::HorizonCrossed {
                r_m: vector[1],
                rs_m: self.rs_m,
            });
        }
        if vector[2].sin() == 0.0 {
            return Err(DynamicsError::PolarSingularity {
                theta_rad: vector[2],
            });
        }
        Ok(())
    }
}

impl fmt::Display for SchwarzschildDynamics {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Schwarzschild geodesic dynamics around {}", self.body)
    }
}

impl Dynamics for SchwarzschildDynamics {
    type StateType = GeodesicState;

    fn eom(
        &self,
        delta_lambda: f64,
        state_vec: &OVector<f64, Const<8>>,
        state_ctx: &GeodesicState,
    ) -> Result<OVector<f64, Const<8>>, DynamicsError> {
        self.check(state_ctx.lambda.to_seconds() + delta_lambda, state_vec)?;

        let (r, theta) = (state_vec[1], state_vec[2]);
        let (ut, ur, uth, uph) = (state_vec[4], state_vec[5], state_vec[6], state_vec[7]);
        let gamma = ChristoffelSymbols::at(self.rs_m, r, theta);

        let at = -2.0 * gamma.t_tr * ut * ur;
        let ar = -(gamma.r_tt * ut.powi(2)
            + gamma.r_rr * ur.powi(2)
            + gamma.r_thth * uth.powi(2)
            + gamma.r_phph * uph.powi(2));
        let ath = -2.0 * gamma.th_rth * ur * uth - gamma.th_phph * uph.powi(2);
        let aph = -2.0 * gamma.ph_rph * ur * uph - 2.0 * gamma.ph_thph * uth * uph;

        Ok(OVector::<f64, Const<8>>::from_column_slice(&[
            ut, ur, uth, uph, at, ar, ath, aph,
        ]))
    }

    fn finally(&self, next_state: GeodesicState) -> Result<GeodesicState, DynamicsError> {
        self.check(next_state.lambda().to_seconds(), &next_state.to_vector())?;
        Ok(next_state)
    }
}
