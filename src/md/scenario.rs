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

use super::apsides::OrbitalParameters;
use super::solver::{calculate_trajectory_with, Trajectory};
use crate::cosmic::{SchwarzschildBody, SphericalState, SUN_MASS_KG};
use crate::errors::OrbitError;
use crate::io::{
    maybe_quantity_from_str, maybe_quantity_to_str, quantity_from_str, quantity_to_str,
    ConfigError, ConfigRepr,
};
use crate::propagators::{Dormand45, PropOpts, RK4Fixed};
use crate::time::Duration;
use crate::units::{Quantity, QuantityUnit, Radians};
use serde_derive::{Deserialize, Serialize};
use std::f64::consts::PI;
use std::fmt;

/// An orbit propagation scenario: the central body, the perihelion of the orbiting particle,
/// and the propagation span and step.
///
/// Quantities are written with their units, e.g.
/// ```yaml
/// central_mass: 1.989e30 kg
/// perihelion_distance: 147.09e6 km
/// perihelion_speed: 30.29 km/s
/// span: 1 year
/// step: 5 min
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct OrbitScenario {
    #[serde(serialize_with = "quantity_to_str", deserialize_with = "quantity_from_str")]
    pub central_mass: Quantity,
    #[serde(serialize_with = "quantity_to_str", deserialize_with = "quantity_from_str")]
    pub perihelion_distance: Quantity,
    #[serde(serialize_with = "quantity_to_str", deserialize_with = "quantity_from_str")]
    pub perihelion_speed: Quantity,
    /// Azimuth of the perihelion, defaults to π
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        serialize_with = "maybe_quantity_to_str",
        deserialize_with = "maybe_quantity_from_str"
    )]
    pub azimuth: Option<Quantity>,
    /// Proper time span of the propagation
    #[serde(serialize_with = "quantity_to_str", deserialize_with = "quantity_from_str")]
    pub span: Quantity,
    /// Initial step of the adaptive integrator, or the step of the fixed step integrator
    #[serde(serialize_with = "quantity_to_str", deserialize_with = "quantity_from_str")]
    pub step: Quantity,
    /// Tolerance of the adaptive integrator, defaults to 1e-12
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tolerance: Option<f64>,
    #[serde(default)]
    pub fixed_step: bool,
}

impl ConfigRepr for OrbitScenario {}

impl OrbitScenario {
    /// The Earth at perihelion around the Sun, propagated for one Julian year with a five minute step.
    pub fn earth_around_sun() -> Self {
        Self {
            central_mass: Quantity::new(SUN_MASS_KG, QuantityUnit::Kilogram),
            perihelion_distance: Quantity::new(147.09e6, QuantityUnit::Kilometer),
            perihelion_speed: Quantity::new(30.29, QuantityUnit::KilometerPerSecond),
            azimuth: None,
            span: Quantity::new(1.0, QuantityUnit::JulianYear),
            step: Quantity::new(5.0, QuantityUnit::Minute),
            tolerance: None,
            fixed_step: false,
        }
    }

    pub fn body(&self) -> Result<SchwarzschildBody, OrbitError> {
        Ok(SchwarzschildBody::new(self.central_mass.to_kilograms()?)?)
    }

    /// Builds the initial state at perihelion.
    pub fn initial_state(&self) -> Result<SphericalState, OrbitError> {
        let azimuth = match self.azimuth {
            Some(azimuth) => azimuth.to_radians()?,
            None => Radians::new(PI),
        };
        Ok(SphericalState::from_perihelion_at_azimuth(
            &self.body()?,
            self.perihelion_distance.to_meters()?,
            self.perihelion_speed.to_meters_per_second()?,
            azimuth,
        )?)
    }

    pub fn span_duration(&self) -> Result<Duration, OrbitError> {
        Ok(self.span.to_duration()?)
    }

    pub fn step_duration(&self) -> Result<Duration, OrbitError> {
        Ok(self.step.to_duration()?)
    }

    /// Builds the initial state, solves the trajectory in Cartesian coordinates and extracts the orbital parameters.
    pub fn run(&self) -> Result<(Trajectory, OrbitalParameters), OrbitError> {
        let body = self.body()?;
        let initial = self.initial_state()?;
        let span = self.span_duration()?;
        let step = self.step_duration()?;
        if let Some(tol) = self.tolerance {
            if !(tol.is_finite() && tol > 0.0) {
                return Err(ConfigError::InvalidConfig {
                    msg: format!("tolerance must be strictly positive, got {tol}"),
                }
                .into());
            }
        }
        debug!("Running scenario {self}");

        let traj = if self.fixed_step {
            calculate_trajectory_with::<RK4Fixed, _>(
                &body,
                &initial,
                span,
                PropOpts::with_fixed_step(step),
                true,
            )?
        } else {
            let mut opts = PropOpts::default();
            opts.set_init_step(step);
            if let Some(tol) = self.tolerance {
                opts.tolerance = tol;
            }
            calculate_trajectory_with::<Dormand45, _>(&body, &initial, span, opts, true)?
        };

        let params = match traj.as_cartesian() {
            Some(cartesian) => OrbitalParameters::from_traj(cartesian)?,
            None => OrbitalParameters::from_traj(&traj.clone().into_cartesian())?,
        };
        Ok((traj, params))
    }
}

impl fmt::Display for OrbitScenario {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "M = {}, r0 = {}, v0 = {}, span = {}, step = {}{}",
            self.central_mass,
            self.perihelion_distance,
            self.perihelion_speed,
            self.span,
            self.step,
            if self.fixed_step { " (fixed)" } else { "" }
        )
    }
}

#[cfg(test)]
mod ut_scenario {
    use super::*;

    #[test]
    fn yaml_round_trip() {
        let scenario = OrbitScenario::earth_around_sun();
        let yaml = serde_yaml::to_string(&scenario).unwrap();
        assert!(yaml.contains("perihelion_distance: 147090000 km"));
        assert!(!yaml.contains("azimuth"));
        let back = OrbitScenario::loads(&yaml).unwrap();
        assert_eq!(back, scenario);
    }

    #[test]
    fn literal_values() {
        let scenario = OrbitScenario::earth_around_sun();
        assert_eq!(scenario.span_duration().unwrap().to_seconds(), 31_557_600.0);
        assert_eq!(scenario.step_duration().unwrap().to_seconds(), 300.0);
        let state = scenario.initial_state().unwrap();
        assert_eq!(state.phi_rad, PI);
        assert!((state.phi_dot_rad_s - 30.29e3 / 147.09e9).abs() < 1e-20);
    }

    #[test]
    fn wrong_dimensions() {
        let yaml = r#"
central_mass: 1.989e30 kg
perihelion_distance: 147.09e6 km/s
perihelion_speed: 30.29 km/s
span: 1 year
step: 5 min
"#;
        let scenario = OrbitScenario::loads(yaml).unwrap();
        assert!(matches!(
            scenario.initial_state(),
            Err(OrbitError::Unit { .. })
        ));

        let bad_unit = yaml.replace("147.09e6 km/s", "147.09e6 parsecs");
        assert!(OrbitScenario::loads(&bad_unit).is_err());
    }
}
