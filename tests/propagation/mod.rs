use rstest::*;
use schwarzschild_orbit::units::{Kilometers, KilometersPerSecond};
use schwarzschild_orbit::{SchwarzschildBody, SphericalState};

mod geodesic;
mod propagators;
mod trajectory;

#[fixture]
pub(crate) fn sun() -> SchwarzschildBody {
    let _ = pretty_env_logger::try_init();
    SchwarzschildBody::sun()
}

/// The Earth at perihelion
#[fixture]
pub(crate) fn earth(sun: SchwarzschildBody) -> SphericalState {
    SphericalState::from_perihelion(
        &sun,
        Kilometers::new(147.09e6).into(),
        KilometersPerSecond::new(30.29).into(),
    )
    .unwrap()
}
