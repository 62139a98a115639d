use approx::assert_abs_diff_eq;
use rstest::*;
use schwarzschild_orbit::dynamics::{DynamicsError, SchwarzschildDynamics};
use schwarzschild_orbit::md::apsides::{aphelion_index, OrbitalParameters};
use schwarzschild_orbit::md::{calculate_trajectory, calculate_trajectory_with, TrajectorySolver};
use schwarzschild_orbit::propagators::{PropOpts, PropagationError, RK4Fixed};
use schwarzschild_orbit::time::Unit;
use schwarzschild_orbit::units::{julian_years, minutes, Kilometers, Meters, MetersPerSecond};
use schwarzschild_orbit::{GeodesicState, SchwarzschildBody, SphericalState};

use super::{earth, sun};

#[rstest]
fn earth_one_year(sun: SchwarzschildBody, earth: SphericalState) {
    let span = julian_years(1.0);
    let traj = calculate_trajectory(&sun, &earth, span, minutes(5.0), true)
        .unwrap()
        .into_cartesian();
    println!("{traj}");

    // Strictly increasing proper time, from the initial state to exactly one year
    let first = traj.first().unwrap();
    assert_eq!(first.lambda, 0.0 * Unit::Second);
    assert_abs_diff_eq!(first.x_m, -earth.r_m, epsilon = 1e-3);
    assert_eq!(traj.last().unwrap().lambda, span);
    for pair in traj.states.windows(2) {
        assert!(pair[1].lambda > pair[0].lambda);
    }

    let params = OrbitalParameters::from_traj(&traj).unwrap();
    println!("{params}");
    assert_abs_diff_eq!(params.aphelion.value(), 152.06e6, epsilon = 0.05e6);
    assert_abs_diff_eq!(params.aphelion_speed.value(), 29.30, epsilon = 0.01);
    // The single sample estimate is cos(φ) at the sample of largest y. Adaptive steps reach 45 minutes,
    // i.e. about 5e-4 rad of azimuth, so that sample may be off the true maximum by as much.
    // The dense fixed step run below checks it tightly.
    assert_abs_diff_eq!(params.eccentricity, 0.0166, epsilon = 5e-4);
    assert_abs_diff_eq!(params.apsides_eccentricity, 0.0166, epsilon = 1e-4);
    // The perihelion is the initial state, to within one step of the adaptive integrator
    assert_abs_diff_eq!(params.perihelion.value(), 147.09e6, epsilon = 1.0);

    // The reported aphelion is the planar radius at the aphelion index
    let idx = aphelion_index(&traj).unwrap();
    let ra: Kilometers = traj.states[idx].planar_radius().into();
    assert_eq!(params.aphelion, ra);
    // Idempotent
    assert_eq!(params, OrbitalParameters::from_traj(&traj).unwrap());
}

#[rstest]
fn conserved_quantities(sun: SchwarzschildBody, earth: SphericalState) {
    let traj = calculate_trajectory(&sun, &earth, julian_years(1.0), minutes(5.0), false)
        .unwrap();
    let traj = traj.as_spherical().unwrap();
    let start = traj.first().unwrap();
    let l0 = start.specific_angular_momentum();
    let e0 = start.specific_energy(&sun);
    assert!(start.norm_residual(&sun).abs() < 1e-14);

    for state in traj {
        // Equatorial orbit: the polar angle does not move
        assert_abs_diff_eq!(state.theta_rad, std::f64::consts::FRAC_PI_2, epsilon = 1e-12);
        assert!(((state.specific_angular_momentum() - l0) / l0).abs() < 1e-8);
        assert!(((state.specific_energy(&sun) - e0) / e0).abs() < 1e-9);
        assert!(state.norm_residual(&sun).abs() < 1e-8);
    }
}

#[rstest]
fn eccentricity_with_dense_sampling(sun: SchwarzschildBody, earth: SphericalState) {
    let traj = calculate_trajectory_with::<RK4Fixed, _>(
        &sun,
        &earth,
        julian_years(1.0),
        PropOpts::with_fixed_step(minutes(5.0)),
        true,
    )
    .unwrap()
    .into_cartesian();
    let params = OrbitalParameters::from_traj(&traj).unwrap();
    println!("{params}");

    // Five minutes is about 6e-5 rad of azimuth, so both estimates converge
    assert_abs_diff_eq!(params.eccentricity, params.apsides_eccentricity, epsilon = 1e-4);
    assert_abs_diff_eq!(params.eccentricity, 0.0166, epsilon = 1e-4);
    assert_abs_diff_eq!(params.aphelion.value(), 152.06e6, epsilon = 0.05e6);
    assert_abs_diff_eq!(params.aphelion_speed.value(), 29.30, epsilon = 0.01);
}

#[rstest]
fn fixed_step_sample_count(sun: SchwarzschildBody, earth: SphericalState) {
    let step = minutes(5.0);
    let traj = calculate_trajectory_with::<RK4Fixed, _>(
        &sun,
        &earth,
        1.0 * Unit::Day,
        PropOpts::with_fixed_step(step),
        true,
    )
    .unwrap();
    // 288 steps and the initial state
    assert_eq!(traj.len(), 289);
    for (i, lambda) in traj.lambdas().iter().enumerate() {
        assert_eq!(*lambda, step * (i as f64));
    }

    // The last step is shortened to land on the requested proper time
    let end = 1.0 * Unit::Day + 1.0 * Unit::Minute;
    let traj = calculate_trajectory_with::<RK4Fixed, _>(
        &sun,
        &earth,
        end,
        PropOpts::with_fixed_step(step),
        false,
    )
    .unwrap();
    assert_eq!(traj.len(), 290);
    assert_eq!(*traj.lambdas().last().unwrap(), end);
}

#[rstest]
fn solver_trait(sun: SchwarzschildBody, earth: SphericalState) {
    let dynamics = SchwarzschildDynamics::new(sun);
    let direct = calculate_trajectory(&sun, &earth, 2.0 * Unit::Day, minutes(5.0), true).unwrap();
    let solved = dynamics
        .solve(&earth, 2.0 * Unit::Day, minutes(5.0), true)
        .unwrap();
    assert_eq!(direct, solved);

    // A zero span yields only the initial state
    let single = dynamics
        .solve(&earth, 0.0 * Unit::Second, minutes(5.0), true)
        .unwrap()
        .into_cartesian();
    assert_eq!(single.len(), 1);
    assert_eq!(aphelion_index(&single).unwrap(), 0);
}

#[rstest]
fn invalid_spans(sun: SchwarzschildBody, earth: SphericalState) {
    assert!(matches!(
        calculate_trajectory(&sun, &earth, -1.0 * Unit::Day, minutes(5.0), true),
        Err(PropagationError::InvalidSpan { .. })
    ));
    assert!(matches!(
        calculate_trajectory(&sun, &earth, 1.0 * Unit::Day, 0.0 * Unit::Second, true),
        Err(PropagationError::InvalidSpan { .. })
    ));
    // Initial state inside the horizon
    let inside = SphericalState {
        r_m: 0.5 * sun.schwarzschild_radius().value(),
        ..earth
    };
    assert!(matches!(
        calculate_trajectory(&sun, &inside, 1.0 * Unit::Day, minutes(5.0), true),
        Err(PropagationError::InitialState { .. })
    ));
}

#[rstest]
fn radial_infall_crosses_horizon(sun: SchwarzschildBody) {
    let rs = sun.schwarzschild_radius();
    let start = SphericalState::from_perihelion(&sun, rs * 3.0, MetersPerSecond::new(0.0)).unwrap();
    assert_eq!(start.phi_dot_rad_s, 0.0);

    // Falling from rest at 3 r_s reaches the horizon in well under a millisecond of proper time
    let rslt = calculate_trajectory_with::<RK4Fixed, _>(
        &sun,
        &start,
        1.0 * Unit::Millisecond,
        PropOpts::with_fixed_step(1.0 * Unit::Microsecond),
        false,
    );
    match rslt {
        Err(PropagationError::Dynamics { source }) => {
            println!("{source}");
            assert!(matches!(
                source,
                DynamicsError::HorizonCrossed { .. } | DynamicsError::NonFinite { .. }
            ))
        }
        other => panic!("expected a solver failure, got {other:?}"),
    }
}

#[rstest]
fn weak_field_matches_newton(sun: SchwarzschildBody) {
    // Circular Newtonian speed at 1 AU: the geodesic stays circular to within relativistic corrections
    let r0 = Meters::new(schwarzschild_orbit::cosmic::AU);
    let v0 = MetersPerSecond::new((sun.gm() / r0.value()).sqrt());
    let start = SphericalState::from_perihelion(&sun, r0, v0).unwrap();
    let geo = GeodesicState::from_spherical(&sun, &start).unwrap();
    assert!(geo.t_dot > 1.0);

    let traj = calculate_trajectory(&sun, &start, 30.0 * Unit::Day, minutes(5.0), true)
        .unwrap()
        .into_cartesian();
    for state in &traj {
        let r = state.planar_radius().value();
        assert!(((r - r0.value()) / r0.value()).abs() < 1e-6, "r = {r}");
    }
}
