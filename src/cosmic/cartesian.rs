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

use super::State;
use crate::linalg::{Const, OVector, Vector3};
use crate::time::Duration;
use crate::units::{Meters, MetersPerSecond};
use std::fmt;

/// A geodesic state expressed in Cartesian coordinates centered on the central body.
///
/// The vector is organized as [t, x, y, z, dt/dλ, dx/dλ, dy/dλ, dz/dλ], in seconds and meters.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct CartesianState {
    pub lambda: Duration,
    pub t_s: f64,
    pub x_m: f64,
    pub y_m: f64,
    pub z_m: f64,
    pub t_dot: f64,
    pub vx_m_s: f64,
    pub vy_m_s: f64,
    pub vz_m_s: f64,
}

impl Default for CartesianState {
    fn default() -> Self {
        Self {
            lambda: Duration::ZERO,
            t_s: 0.0,
            x_m: 0.0,
            y_m: 0.0,
            z_m: 0.0,
            t_dot: 0.0,
            vx_m_s: 0.0,
            vy_m_s: 0.0,
            vz_m_s: 0.0,
        }
    }
}

impl CartesianState {
    pub fn radius(&self) -> Vector3<f64> {
        Vector3::new(self.x_m, self.y_m, self.z_m)
    }

    pub fn velocity(&self) -> Vector3<f64> {
        Vector3::new(self.vx_m_s, self.vy_m_s, self.vz_m_s)
    }

    /// Radius projected on the x-y plane, sqrt(x² + y²).
    pub fn planar_radius(&self) -> Meters {
        Meters::new(self.x_m.hypot(self.y_m))
    }

    pub fn rmag(&self) -> Meters {
        Meters::new(self.radius().norm())
    }

    pub fn vmag(&self) -> MetersPerSecond {
        MetersPerSecond::new(self.velocity().norm())
    }
}

impl State for CartesianState {
    type VecLength = Const<8>;

    fn to_vector(&self) -> OVector<f64, Const<8>> {
        OVector::<f64, Const<8>>::from_column_slice(&[
            self.t_s,
            self.x_m,
            self.y_m,
            self.z_m,
            self.t_dot,
            self.vx_m_s,
            self.vy_m_s,
            self.vz_m_s,
        ])
    }

    fn set(&mut self, lambda: Duration, vector: &OVector<f64, Const<8>>) {
        self.lambda = lambda;
        self.t_s = vector[0];
        self.x_m = vector[1];
        self.y_m = vector[2];
        self.z_m = vector[3];
        self.t_dot = vector[4];
        self.vx_m_s = vector[5];
        self.vy_m_s = vector[6];
        self.vz_m_s = vector[7];
    }

    fn lambda(&self) -> Duration {
        self.lambda
    }
}

impl fmt::Display for CartesianState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let prec = f.precision().unwrap_or(3);
        write!(
            f,
            "[λ = {}] position = [{:.*}, {:.*}, {:.*}] km  velocity = [{:.*}, {:.*}, {:.*}] km/s",
            self.lambda,
            prec,
            self.x_m * 1e-3,
            prec,
            self.y_m * 1e-3,
            prec,
            self.z_m * 1e-3,
            prec,
            self.vx_m_s * 1e-3,
            prec,
            self.vy_m_s * 1e-3,
            prec,
            self.vz_m_s * 1e-3
        )
    }
}

impl fmt::LowerExp for CartesianState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let prec = f.precision().unwrap_or(6);
        write!(
            f,
            "[λ = {}] position = [{:.*e}, {:.*e}, {:.*e}] m  velocity = [{:.*e}, {:.*e}, {:.*e}] m/s",
            self.lambda,
            prec,
            self.x_m,
            prec,
            self.y_m,
            prec,
            self.z_m,
            prec,
            self.vx_m_s,
            prec,
            self.vy_m_s,
            prec,
            self.vz_m_s
        )
    }
}
