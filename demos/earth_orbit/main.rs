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

extern crate log;
extern crate pretty_env_logger as pel;
extern crate schwarzschild_orbit as orbit;

use log::info;
use orbit::io::ConfigRepr;
use orbit::md::OrbitScenario;
use orbit::plot::OrbitPlotter;
use orbit::units::{Kilometers, KilometersPerSecond};

use std::env;
use std::error::Error;
use std::fs;
use std::path::PathBuf;

fn main() -> Result<(), Box<dyn Error>> {
    pel::init();

    // Use the scenario file passed as the first argument, or the Earth around the Sun
    let scenario = match env::args().nth(1) {
        Some(path) => OrbitScenario::load(path)?,
        None => OrbitScenario::earth_around_sun(),
    };
    println!("Scenario: {scenario}");

    let body = scenario.body()?;
    let initial = scenario.initial_state()?;
    println!("{body}");
    println!("Initial state: {initial}");
    println!(
        "Initial angular velocity: {:e}",
        initial.angular_velocity()
    );

    // Propagate the geodesic and extract the orbital parameters
    let (traj, params) = scenario.run()?;
    println!("\n{params}\n");

    // Same values in the units of the reference results
    let aphelion: Kilometers = params.aphelion;
    let speed: KilometersPerSecond = params.aphelion_speed;
    println!(
        "Aphelion of {:.3} million km at {:.2} km/s, e = {:.4}",
        aphelion.value() / 1e6,
        speed.value(),
        params.eccentricity
    );

    // Render the orbit
    let output_dir = PathBuf::from(env::var("CARGO_MANIFEST_DIR").unwrap_or(".".to_string()))
        .join("output_data");
    fs::create_dir_all(&output_dir)?;
    let path = OrbitPlotter::builder()
        .title("Earth around the Sun (Schwarzschild geodesic)")
        .build()
        .plot_traj(&traj.into_cartesian(), output_dir.join("earth_orbit.svg"))?;
    info!("done, see {}", path.display());

    Ok(())
}
