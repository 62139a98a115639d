use rstest::*;
use schwarzschild_orbit::dynamics::SchwarzschildDynamics;
use schwarzschild_orbit::md::trajectory::TrajError;
use schwarzschild_orbit::md::{GeodesicTraj, OrbitalParameters};
use schwarzschild_orbit::propagators::Propagator;
use schwarzschild_orbit::time::Unit;
use schwarzschild_orbit::{GeodesicState, SchwarzschildBody, SphericalState};

use super::{earth, sun};

#[rstest]
fn traj_from_instance(sun: SchwarzschildBody, earth: SphericalState) {
    let start = GeodesicState::from_spherical(&sun, &earth).unwrap();
    let prop = Propagator::default(SchwarzschildDynamics::new(sun));
    let (end, traj) = prop.with(start).for_duration_with_traj(3 * Unit::Day).unwrap();

    assert_eq!(*traj.first().unwrap(), start);
    assert_eq!(*traj.last().unwrap(), end);
    assert_eq!(traj.span().unwrap(), 3 * Unit::Day);
    // Rebuilding from the states passes the validation
    let rebuilt = GeodesicTraj::from_states(traj.states.clone()).unwrap();
    assert_eq!(rebuilt, traj);

    let cartesian = traj.to_cartesian();
    assert_eq!(cartesian.len(), traj.len());
    for (geo, cart) in traj.iter().zip(cartesian.iter()) {
        assert_eq!(geo.lambda, cart.lambda);
        assert!((cart.rmag().value() - geo.r_m).abs() < 1e-3);
        // In the equatorial plane, the speed only has radial and azimuthal components
        let planar_speed = geo.r_dot_m_s.hypot(geo.r_m * geo.phi_dot_rad_s);
        assert!((cart.vmag().value() - planar_speed).abs() < 1e-6);
        assert!((29_000.0..31_000.0).contains(&cart.vmag().value()));
    }
}

#[test]
fn empty_trajectory() {
    let traj = GeodesicTraj::new();
    assert!(traj.is_empty());
    assert_eq!(traj.first(), Err(TrajError::Empty));
    assert_eq!(format!("{traj}"), "Empty trajectory");
    assert_eq!(
        OrbitalParameters::from_traj(&traj.to_cartesian()),
        Err(TrajError::Empty)
    );
    assert!(matches!(
        GeodesicTraj::from_states(vec![]),
        Err(TrajError::Empty)
    ));
}

#[rstest]
fn unordered_states_rejected(sun: SchwarzschildBody, earth: SphericalState) {
    let start = GeodesicState::from_spherical(&sun, &earth).unwrap();
    let mut later = start;
    later.lambda = 1 * Unit::Minute;
    assert!(matches!(
        GeodesicTraj::from_states(vec![later, start]),
        Err(TrajError::NonMonotonic { index: 1, .. })
    ));
    assert!(matches!(
        GeodesicTraj::from_states(vec![start, start]),
        Err(TrajError::NonMonotonic { index: 1, .. })
    ));
}
