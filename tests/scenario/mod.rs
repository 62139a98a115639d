use approx::assert_abs_diff_eq;
use schwarzschild_orbit::io::{ConfigError, ConfigRepr};
use schwarzschild_orbit::md::OrbitScenario;
use schwarzschild_orbit::plot::{OrbitPlotter, PlotError};
use schwarzschild_orbit::time::Unit;
use schwarzschild_orbit::units::{minutes, Kilometers, KilometersPerSecond};
use schwarzschild_orbit::{CartesianState, OrbitError, SchwarzschildBody, SphericalState};

use crate::data_path;

#[test]
fn load_earth_scenario() {
    let _ = pretty_env_logger::try_init();
    let scenario = OrbitScenario::load(data_path("earth_orbit.yaml")).unwrap();
    assert_eq!(scenario, OrbitScenario::earth_around_sun());
    assert_eq!(scenario.span_duration().unwrap(), 365.25 * Unit::Day);
}

#[test]
fn named_scenarios() {
    let _ = pretty_env_logger::try_init();
    let scenarios = OrbitScenario::load_named(data_path("scenarios.yaml")).unwrap();
    assert_eq!(scenarios.len(), 3);
    assert_eq!(scenarios["earth"], OrbitScenario::earth_around_sun());

    // One solar mass and an explicit azimuth of π give the same initial state as the default
    let fixed = &scenarios["earth_one_day_fixed"];
    assert!(fixed.fixed_step);
    let expected = OrbitScenario::earth_around_sun().initial_state().unwrap();
    let initial = fixed.initial_state().unwrap();
    assert_abs_diff_eq!(initial.phi_rad, expected.phi_rad, epsilon = 1e-15);
    assert_eq!(initial.r_m, expected.r_m);

    let (traj, params) = fixed.run().unwrap();
    assert_eq!(traj.len(), 289);
    assert_eq!(params.samples, 289);
    assert_eq!(*traj.lambdas().last().unwrap(), 1 * Unit::Day);

    let mercury = &scenarios["mercury"];
    assert_eq!(mercury.tolerance, Some(1e-11));
    assert_eq!(mercury.step_duration().unwrap(), 1 * Unit::Hour);
}

#[test]
fn many_scenarios_from_str() {
    let yaml = r#"
- central_mass: 1 Msun
  perihelion_distance: 1 AU
  perihelion_speed: 29.78 km/s
  span: 10 days
  step: 1 h
- central_mass: 1.989e30 kg
  perihelion_distance: 46.0e6 km
  perihelion_speed: 58.98 km/s
  azimuth: 90 deg
  span: 1 day
  step: 10 min
  fixed_step: true
"#;
    let scenarios = OrbitScenario::loads_many(yaml).unwrap();
    assert_eq!(scenarios.len(), 2);
    assert_eq!(scenarios[0].azimuth, None);
    assert!(!scenarios[0].fixed_step);
    assert_abs_diff_eq!(
        scenarios[1].initial_state().unwrap().phi_rad,
        std::f64::consts::FRAC_PI_2,
        epsilon = 1e-15
    );
    let (traj, _) = scenarios[1].run().unwrap();
    assert_eq!(traj.len(), 145);

    let path = std::env::temp_dir().join("schwarzschild_orbit_scenario_list.yaml");
    std::fs::write(&path, yaml).unwrap();
    assert_eq!(OrbitScenario::load_many(&path).unwrap(), scenarios);
    let _ = std::fs::remove_file(&path);
}

#[test]
fn invalid_scenarios() {
    assert!(matches!(
        OrbitScenario::load(data_path("does_not_exist.yaml")),
        Err(ConfigError::ReadError { .. })
    ));
    assert!(matches!(
        OrbitScenario::loads("central_mass: 1 Msun"),
        Err(ConfigError::ParseError { .. })
    ));

    // Inside the horizon of the central body
    let mut scenario = OrbitScenario::earth_around_sun();
    scenario.perihelion_distance = "1 km".parse().unwrap();
    assert!(matches!(scenario.run(), Err(OrbitError::Input { .. })));

    let mut scenario = OrbitScenario::earth_around_sun();
    scenario.tolerance = Some(-1.0);
    assert!(matches!(scenario.run(), Err(OrbitError::Config { .. })));
}

#[test]
fn plot_orbit() {
    let _ = pretty_env_logger::try_init();
    let sun = SchwarzschildBody::sun();
    let earth = SphericalState::from_perihelion(
        &sun,
        Kilometers::new(147.09e6).into(),
        KilometersPerSecond::new(30.29).into(),
    )
    .unwrap();

    let path = std::env::temp_dir().join("schwarzschild_orbit_plot_test.svg");
    let plotter = OrbitPlotter::builder().width(400).height(400).build();
    let written = plotter
        .plot(&sun, &earth, 30 * Unit::Day, minutes(60.0), &path)
        .unwrap();
    assert_eq!(written, path);
    let svg = std::fs::read_to_string(&path).unwrap();
    assert!(svg.starts_with("<svg"));
    let _ = std::fs::remove_file(&path);

    let empty = schwarzschild_orbit::md::trajectory::Traj::<CartesianState>::new();
    assert!(matches!(
        plotter.plot_traj(&empty, std::env::temp_dir().join("empty.svg")),
        Err(PlotError::NothingToPlot)
    ));
}
