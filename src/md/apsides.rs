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

//! Orbital parameters extracted from a Cartesian trajectory.
//!
//! All the queries are pure functions of the trajectory: calling them twice yields the same result.
//!
//! The aphelion speed and the single-sample eccentricity are geometric shortcuts which assume the orbit
//! starts at perihelion on the negative x axis (azimuth φ = π) in the x-y plane:
//! - the aphelion speed is dy/dλ at the aphelion sample, which is the full speed only when the aphelion lies on the x axis;
//! - the eccentricity is x / sqrt(x² + y²) at the sample of largest y.
//!
//! [eccentricity_from_apsides] is the general estimate (r_a − r_p) / (r_a + r_p).

use super::trajectory::{Traj, TrajError};
use crate::cosmic::CartesianState;
use crate::units::{Kilometers, KilometersPerSecond, Meters, MetersPerSecond};
use std::fmt;

/// Index of the first sample with the largest value of `key`, which must not be NaN.
fn first_max_by<F>(traj: &Traj<CartesianState>, key: F) -> Result<usize, TrajError>
where
    F: Fn(&CartesianState) -> f64,
{
    let mut best: Option<(usize, f64)> = None;
    for (index, state) in traj.iter().enumerate() {
        let value = key(state);
        if value.is_nan() {
            return Err(TrajError::DegenerateSample {
                index,
                msg: "not a number".to_string(),
            });
        }
        match best {
            // Strict comparison: the first extremum wins on ties
            Some((_, best_value)) if value <= best_value => {}
            _ => best = Some((index, value)),
        }
    }
    best.map(|(index, _)| index).ok_or(TrajError::Empty)
}

/// Index of the aphelion, the sample of largest planar radius sqrt(x² + y²). The first maximum wins on ties.
pub fn aphelion_index(traj: &Traj<CartesianState>) -> Result<usize, TrajError> {
    first_max_by(traj, |s| s.planar_radius().value())
}

/// Index of the perihelion, the sample of smallest planar radius. The first minimum wins on ties.
pub fn perihelion_index(traj: &Traj<CartesianState>) -> Result<usize, TrajError> {
    first_max_by(traj, |s| -s.planar_radius().value())
}

/// Planar radius at the aphelion, in the unit requested by the caller.
///
/// ```
/// use schwarzschild_orbit::md::apsides::aphelion_distance;
/// use schwarzschild_orbit::md::CartesianTraj;
/// use schwarzschild_orbit::units::Kilometers;
/// use schwarzschild_orbit::time::Unit;
/// use schwarzschild_orbit::CartesianState;
///
/// let states = (0..3)
///     .map(|i| CartesianState {
///         lambda: f64::from(i) * Unit::Second,
///         x_m: 1e3 * f64::from(i),
///         y_m: 0.0,
///         ..Default::default()
///     })
///     .collect();
/// let traj = CartesianTraj::from_states(states).unwrap();
/// let ra: Kilometers = aphelion_distance(&traj).unwrap();
/// assert_eq!(ra.value(), 2.0);
/// ```
pub fn aphelion_distance<U: From<Meters>>(traj: &Traj<CartesianState>) -> Result<U, TrajError> {
    let index = aphelion_index(traj)?;
    Ok(traj.states[index].planar_radius().into())
}

/// dy/dλ at the aphelion, in the unit requested by the caller.
pub fn aphelion_speed<U: From<MetersPerSecond>>(
    traj: &Traj<CartesianState>,
) -> Result<U, TrajError> {
    let index = aphelion_index(traj)?;
    Ok(MetersPerSecond::new(traj.states[index].vy_m_s).into())
}

/// Planar radius at the perihelion, in the unit requested by the caller.
pub fn perihelion_distance<U: From<Meters>>(traj: &Traj<CartesianState>) -> Result<U, TrajError> {
    let index = perihelion_index(traj)?;
    Ok(traj.states[index].planar_radius().into())
}

/// Single-sample eccentricity estimate: x / sqrt(x² + y²) at the first sample of largest y.
pub fn eccentricity(traj: &Traj<CartesianState>) -> Result<f64, TrajError> {
    let index = first_max_by(traj, |s| s.y_m)?;
    let state = &traj.states[index];
    let radius = state.planar_radius().value();
    if radius == 0.0 {
        return Err(TrajError::DegenerateSample {
            index,
            msg: "sample of largest y is at the origin".to_string(),
        });
    }
    Ok(state.x_m / radius)
}

/// Eccentricity from the apsides, (r_a − r_p) / (r_a + r_p).
pub fn eccentricity_from_apsides(traj: &Traj<CartesianState>) -> Result<f64, TrajError> {
    let ra: Meters = aphelion_distance(traj)?;
    let rp: Meters = perihelion_distance(traj)?;
    let sum = (ra + rp).value();
    if sum == 0.0 {
        return Err(TrajError::DegenerateSample {
            index: 0,
            msg: "all samples are at the origin".to_string(),
        });
    }
    Ok((ra - rp).value() / sum)
}

/// The orbital parameters of a trajectory.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct OrbitalParameters {
    pub aphelion: Kilometers,
    pub aphelion_speed: KilometersPerSecond,
    /// Single-sample estimate, see [eccentricity]
    pub eccentricity: f64,
    pub perihelion: Kilometers,
    /// See [eccentricity_from_apsides]
    pub apsides_eccentricity: f64,
    /// Number of samples of the trajectory
    pub samples: usize,
}

impl OrbitalParameters {
    pub fn from_traj(traj: &Traj<CartesianState>) -> Result<Self, TrajError> {
        Ok(Self {
            aphelion: aphelion_distance(traj)?,
            aphelion_speed: aphelion_speed(traj)?,
            eccentricity: eccentricity(traj)?,
            perihelion: perihelion_distance(traj)?,
            apsides_eccentricity: eccentricity_from_apsides(traj)?,
            samples: traj.len(),
        })
    }
}

impl fmt::Display for OrbitalParameters {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "aphelion distance:   {:.6e}", self.aphelion)?;
        writeln!(f, "aphelion speed:      {:.3}", self.aphelion_speed)?;
        writeln!(f, "eccentricity:        {:.6}", self.eccentricity)?;
        writeln!(f, "perihelion distance: {:.6e}", self.perihelion)?;
        writeln!(f, "apsides eccentricity: {:.6}", self.apsides_eccentricity)?;
        write!(f, "samples:             {}", self.samples)
    }
}

#[cfg(test)]
mod ut_apsides {
    use super::*;
    use crate::time::Unit;

    fn traj(points: &[(f64, f64, f64)]) -> Traj<CartesianState> {
        let states = points
            .iter()
            .enumerate()
            .map(|(i, (x, y, vy))| CartesianState {
                lambda: (i as f64) * Unit::Minute,
                x_m: *x,
                y_m: *y,
                vy_m_s: *vy,
                z_m: 1e12,
                ..Default::default()
            })
            .collect();
        Traj::from_states(states).unwrap()
    }

    #[test]
    fn aphelion_is_strict_planar_max() {
        // z is large but excluded from the planar radius
        let t = traj(&[
            (-3.0, 0.0, -1.0),
            (0.0, -4.0, 2.0),
            (5.0, 0.0, 7.0),
            (0.0, 5.0, 3.0),
            (-1.0, 2.0, 0.0),
        ]);
        assert_eq!(aphelion_index(&t).unwrap(), 2);
        let ra: Meters = aphelion_distance(&t).unwrap();
        assert_eq!(ra.value(), 5.0);
        let va: MetersPerSecond = aphelion_speed(&t).unwrap();
        assert_eq!(va.value(), 7.0);
        let ra_km: Kilometers = aphelion_distance(&t).unwrap();
        assert_eq!(ra_km.value(), 5e-3);
        assert_eq!(perihelion_index(&t).unwrap(), 4);
        // Largest y at index 3, where x = 0
        assert_eq!(eccentricity(&t).unwrap(), 0.0);
        // Idempotent
        assert_eq!(
            OrbitalParameters::from_traj(&t).unwrap(),
            OrbitalParameters::from_traj(&t).unwrap()
        );
    }

    #[test]
    fn ties_and_single_sample() {
        let single = traj(&[(3.0, 4.0, 1.0)]);
        assert_eq!(aphelion_index(&single).unwrap(), 0);
        assert_eq!(eccentricity(&single).unwrap(), 0.6);
        assert_eq!(eccentricity_from_apsides(&single).unwrap(), 0.0);

        let tie = traj(&[(1.0, 0.0, 0.0), (0.0, 2.0, 0.0), (2.0, 0.0, 0.0)]);
        assert_eq!(aphelion_index(&tie).unwrap(), 1);
        let ecc = eccentricity_from_apsides(&tie).unwrap();
        assert!((ecc - 1.0 / 3.0).abs() < 1e-15);
    }

    #[test]
    fn empty_and_degenerate() {
        let empty = Traj::<CartesianState>::new();
        assert_eq!(aphelion_index(&empty), Err(TrajError::Empty));
        assert_eq!(eccentricity(&empty), Err(TrajError::Empty));
        assert!(OrbitalParameters::from_traj(&empty).is_err());

        let origin = traj(&[(0.0, 0.0, 0.0)]);
        assert!(matches!(
            eccentricity(&origin),
            Err(TrajError::DegenerateSample { index: 0, .. })
        ));
    }
}
