use approx::assert_relative_eq;
use rstest::*;
use schwarzschild_orbit::dynamics::SchwarzschildDynamics;
use schwarzschild_orbit::propagators::{
    CashKarp45, Dormand45, PropOpts, Propagator, RSSState, RK4Fixed, RKF45, RK,
};
use schwarzschild_orbit::time::{Duration, Unit};
use schwarzschild_orbit::{GeodesicState, SchwarzschildBody, SphericalState};

use super::{earth, sun};

fn propagate<T: RK>(body: SchwarzschildBody, start: GeodesicState, span: Duration) -> GeodesicState {
    let mut opts = PropOpts::default();
    opts.set_init_step(5 * Unit::Minute);
    Propagator::new::<T>(SchwarzschildDynamics::new(body), opts)
        .with(start)
        .for_duration(span)
        .unwrap()
}

#[rstest]
fn adaptive_integrators_agree(sun: SchwarzschildBody, earth: SphericalState) {
    let start = GeodesicState::from_spherical(&sun, &earth).unwrap();
    let span = 10 * Unit::Day;

    let dp45 = propagate::<Dormand45>(sun, start, span);
    let rkf45 = propagate::<RKF45>(sun, start, span);
    let ck45 = propagate::<CashKarp45>(sun, start, span);

    for other in [rkf45, ck45] {
        assert_eq!(other.lambda, span);
        assert_relative_eq!(other.r_m, dp45.r_m, max_relative = 1e-9);
        assert_relative_eq!(other.phi_rad, dp45.phi_rad, max_relative = 1e-9);
        assert_relative_eq!(other.t_s, dp45.t_s, max_relative = 1e-12);
    }
    // Ten days of proper time are slightly less than ten days of coordinate time
    assert!(dp45.t_s > span.to_seconds());
}

#[rstest]
fn fixed_step_matches_adaptive(sun: SchwarzschildBody, earth: SphericalState) {
    let start = GeodesicState::from_spherical(&sun, &earth).unwrap();
    let span = 1 * Unit::Day;

    let adaptive = propagate::<Dormand45>(sun, start, span);
    let mut prop = Propagator::new::<RK4Fixed>(
        SchwarzschildDynamics::new(sun),
        PropOpts::with_fixed_step(1 * Unit::Minute),
    );
    let mut instance = prop.with(start);
    let fixed = instance.for_duration(span).unwrap();

    assert_eq!(instance.latest_details().step, 1 * Unit::Minute);
    assert_relative_eq!(fixed.r_m, adaptive.r_m, max_relative = 1e-10);
    assert_relative_eq!(fixed.phi_rad, adaptive.phi_rad, max_relative = 1e-10);

    prop.set_tolerance(1e-10);
    assert_eq!(prop.opts.tolerance, 1e-10);
}

#[rstest]
fn rss_error_control(sun: SchwarzschildBody, earth: SphericalState) {
    let start = GeodesicState::from_spherical(&sun, &earth).unwrap();
    let opts = PropOpts::<RSSState>::with_adaptive_step(
        1 * Unit::Second,
        1 * Unit::Hour,
        1e-12,
        RSSState,
    );
    let end = Propagator::new::<Dormand45>(SchwarzschildDynamics::new(sun), opts)
        .with(start)
        .until_lambda(2 * Unit::Day)
        .unwrap();
    let reference = propagate::<Dormand45>(sun, start, 2 * Unit::Day);
    assert_relative_eq!(end.r_m, reference.r_m, max_relative = 1e-9);
}
