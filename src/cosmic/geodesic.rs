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

use super::{CartesianState, InputError, SchwarzschildBody, SphericalState, State, SPEED_OF_LIGHT};
use crate::linalg::{Const, OVector};
use crate::time::Duration;
use crate::units::Meters;
use std::fmt;

/// The propagated state of a test particle on a Schwarzschild geodesic.
///
/// The vector is organized as [t, r, θ, φ, dt/dλ, dr/dλ, dθ/dλ, dφ/dλ], in seconds, meters and radians.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct GeodesicState {
    /// Proper time elapsed since the start of the propagation
    pub lambda: Duration,
    /// Coordinate time in seconds
    pub t_s: f64,
    pub r_m: f64,
    pub theta_rad: f64,
    pub phi_rad: f64,
    /// dt/dλ, dimensionless
    pub t_dot: f64,
    pub r_dot_m_s: f64,
    pub theta_dot_rad_s: f64,
    pub phi_dot_rad_s: f64,
}

impl Default for GeodesicState {
    fn default() -> Self {
        Self {
            lambda: Duration::ZERO,
            t_s: 0.0,
            r_m: 0.0,
            theta_rad: 0.0,
            phi_rad: 0.0,
            t_dot: 0.0,
            r_dot_m_s: 0.0,
            theta_dot_rad_s: 0.0,
            phi_dot_rad_s: 0.0,
        }
    }
}

impl GeodesicState {
    /// Builds the initial geodesic state from a spherical state, at λ = 0 and t = 0.
    ///
    /// dt/dλ is solved from the timelike normalization g_μν u^μ u^ν = -c².
    pub fn from_spherical(
        body: &SchwarzschildBody,
        state: &SphericalState,
    ) -> Result<Self, InputError> {
        let rs = body.schwarzschild_radius().value();
        let r = state.r_m;
        if !r.is_finite() || body.is_within_horizon(Meters::new(r)) {
            return Err(InputError::InvalidInput {
                param: "radius",
                msg: format!("{r} m is not outside the horizon at {rs} m"),
            });
        }
        let a = 1.0 - rs / r;
        let sin_theta = state.theta_rad.sin();
        let spatial = state.r_dot_m_s.powi(2) / a
            + r.powi(2) * state.theta_dot_rad_s.powi(2)
            + (r * sin_theta * state.phi_dot_rad_s).powi(2);
        let t_dot_sq = (1.0 + spatial / SPEED_OF_LIGHT.powi(2)) / a;
        if !t_dot_sq.is_finite() || t_dot_sq <= 0.0 {
            return Err(InputError::InvalidInput {
                param: "velocity",
                msg: format!("no timelike solution for dt/dλ from {state}"),
            });
        }

        Ok(Self {
            lambda: Duration::ZERO,
            t_s: 0.0,
            r_m: r,
            theta_rad: state.theta_rad,
            phi_rad: state.phi_rad,
            t_dot: t_dot_sq.sqrt(),
            r_dot_m_s: state.r_dot_m_s,
            theta_dot_rad_s: state.theta_dot_rad_s,
            phi_dot_rad_s: state.phi_dot_rad_s,
        })
    }

    /// Returns the spatial part of this state.
    pub fn to_spherical(&self) -> SphericalState {
        SphericalState {
            r_m: self.r_m,
            theta_rad: self.theta_rad,
            phi_rad: self.phi_rad,
            r_dot_m_s: self.r_dot_m_s,
            theta_dot_rad_s: self.theta_dot_rad_s,
            phi_dot_rad_s: self.phi_dot_rad_s,
        }
    }

    /// Relative departure from the timelike normalization, (g_μν u^μ u^ν + c²) / c².
    /// Zero for an exact geodesic of a massive particle.
    pub fn norm_residual(&self, body: &SchwarzschildBody) -> f64 {
        let a = 1.0 - body.schwarzschild_radius().value() / self.r_m;
        let c2 = SPEED_OF_LIGHT.powi(2);
        let g_uu = -a * c2 * self.t_dot.powi(2)
            + self.r_dot_m_s.powi(2) / a
            + (self.r_m * self.theta_dot_rad_s).powi(2)
            + (self.r_m * self.theta_rad.sin() * self.phi_dot_rad_s).powi(2);
        (g_uu + c2) / c2
    }

    /// Conserved specific angular momentum r² sin²θ dφ/dλ, in m²/s.
    pub fn specific_angular_momentum(&self) -> f64 {
        (self.r_m * self.theta_rad.sin()).powi(2) * self.phi_dot_rad_s
    }

    /// Conserved specific energy (1 - r_s/r) dt/dλ, dimensionless.
    pub fn specific_energy(&self, body: &SchwarzschildBody) -> f64 {
        (1.0 - body.schwarzschild_radius().value() / self.r_m) * self.t_dot
    }

    /// Converts this state to Cartesian coordinates using the chain rule for the velocities.
    pub fn to_cartesian(&self) -> CartesianState {
        let (r, theta, phi) = (self.r_m, self.theta_rad, self.phi_rad);
        let (sin_t, cos_t) = theta.sin_cos();
        let (sin_p, cos_p) = phi.sin_cos();
        let (ur, ut, up) = (self.r_dot_m_s, self.theta_dot_rad_s, self.phi_dot_rad_s);

        CartesianState {
            lambda: self.lambda,
            t_s: self.t_s,
            x_m: r * sin_t * cos_p,
            y_m: r * sin_t * sin_p,
            z_m: r * cos_t,
            t_dot: self.t_dot,
            vx_m_s: sin_t * cos_p * ur + r * cos_t * cos_p * ut - r * sin_t * sin_p * up,
            vy_m_s: sin_t * sin_p * ur + r * cos_t * sin_p * ut + r * sin_t * cos_p * up,
            vz_m_s: cos_t * ur - r * sin_t * ut,
        }
    }
}

impl State for GeodesicState {
    type VecLength = Const<8>;

    fn to_vector(&self) -> OVector<f64, Const<8>> {
        OVector::<f64, Const<8>>::from_column_slice(&[
            self.t_s,
            self.r_m,
            self.theta_rad,
            self.phi_rad,
            self.t_dot,
            self.r_dot_m_s,
            self.theta_dot_rad_s,
            self.phi_dot_rad_s,
        ])
    }

    fn set(&mut self, lambda: Duration, vector: &OVector<f64, Const<8>>) {
        self.lambda = lambda;
        self.t_s = vector[0];
        self.r_m = vector[1];
        self.theta_rad = vector[2];
        self.phi_rad = vector[3];
        self.t_dot = vector[4];
        self.r_dot_m_s = vector[5];
        self.theta_dot_rad_s = vector[6];
        self.phi_dot_rad_s = vector[7];
    }

    fn lambda(&self) -> Duration {
        self.lambda
    }
}

impl fmt::Display for GeodesicState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let prec = f.precision().unwrap_or(6);
        write!(
            f,
            "[λ = {}] t = {:.*} s  r = {:.*} m  θ = {:.*} rad  φ = {:.*} rad  dt = {:.*}  dr = {:.*} m/s  dθ = {:.*e} rad/s  dφ = {:.*e} rad/s",
            self.lambda,
            prec,
            self.t_s,
            prec,
            self.r_m,
            prec,
            self.theta_rad,
            prec,
            self.phi_rad,
            prec,
            self.t_dot,
            prec,
            self.r_dot_m_s,
            prec,
            self.theta_dot_rad_s,
            prec,
            self.phi_dot_rad_s
        )
    }
}

impl fmt::LowerExp for GeodesicState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let prec = f.precision().unwrap_or(6);
        write!(
            f,
            "[λ = {}] t = {:.*e} s  r = {:.*e} m  θ = {:.*e} rad  φ = {:.*e} rad  dt = {:.*e}  dr = {:.*e} m/s  dθ = {:.*e} rad/s  dφ = {:.*e} rad/s",
            self.lambda,
            prec,
            self.t_s,
            prec,
            self.r_m,
            prec,
            self.theta_rad,
            prec,
            self.phi_rad,
            prec,
            self.t_dot,
            prec,
            self.r_dot_m_s,
            prec,
            self.theta_dot_rad_s,
            prec,
            self.phi_dot_rad_s
        )
    }
}

#[cfg(test)]
mod ut_geodesic {
    use super::*;
    use crate::units::{Kilometers, KilometersPerSecond};
    use approx::assert_relative_eq;

    fn earth() -> (SchwarzschildBody, GeodesicState) {
        let sun = SchwarzschildBody::sun();
        let sph = SphericalState::from_perihelion(
            &sun,
            Kilometers::new(147.09e6).into(),
            KilometersPerSecond::new(30.29).into(),
        )
        .unwrap();
        let geo = GeodesicState::from_spherical(&sun, &sph).unwrap();
        (sun, geo)
    }

    #[test]
    fn normalization() {
        let (sun, geo) = earth();
        assert!(geo.t_dot > 1.0);
        // Gravitational and kinematic time dilation are both of order 1e-8 for the Earth
        assert!(geo.t_dot - 1.0 < 1e-7);
        assert!(geo.norm_residual(&sun).abs() < 1e-14);
        assert_eq!(geo.to_spherical().r_m, geo.r_m);
    }

    #[test]
    fn vector_round_trip() {
        let (_, geo) = earth();
        let mut other = GeodesicState::default();
        other.set(geo.lambda, &geo.to_vector());
        assert_eq!(other, geo);
    }

    #[test]
    fn cartesian_at_reference_azimuth() {
        let (_, geo) = earth();
        let cart = geo.to_cartesian();
        // φ = π, θ = π/2: the particle sits on the negative x axis moving along -y
        assert_relative_eq!(cart.x_m, -geo.r_m, max_relative = 1e-12);
        assert!(cart.y_m.abs() < 1e-3);
        assert!(cart.z_m.abs() < 1e-3);
        assert_relative_eq!(cart.vy_m_s, -30_290.0, max_relative = 1e-9);
        assert!(cart.vx_m_s.abs() < 1e-6);
        assert_relative_eq!(cart.planar_radius().value(), geo.r_m, max_relative = 1e-12);
    }

    #[test]
    fn inside_horizon() {
        let sun = SchwarzschildBody::sun();
        let sph = SphericalState {
            r_m: 1_000.0,
            theta_rad: std::f64::consts::FRAC_PI_2,
            ..Default::default()
        };
        assert!(GeodesicState::from_spherical(&sun, &sph).is_err());
    }
}
