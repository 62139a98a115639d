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

use crate::cosmic::{CartesianState, SchwarzschildBody, SphericalState};
use crate::md::solver::calculate_trajectory;
use crate::md::trajectory::Traj;
use crate::propagators::PropagationError;
use crate::time::Duration;
use plotters::prelude::*;
use snafu::prelude::*;
use std::fmt::Display;
use std::path::{Path, PathBuf};
use typed_builder::TypedBuilder;

/// Axes are in millions of kilometers.
const AXIS_SCALE_M: f64 = 1e9;

#[derive(Debug, Snafu)]
#[snafu(visibility(pub(crate)))]
pub enum PlotError {
    #[snafu(display("cannot plot an empty trajectory"))]
    NothingToPlot,
    #[snafu(display("could not solve the trajectory to plot: {source}"))]
    PlotSolver { source: PropagationError },
    #[snafu(display("rendering to {} failed: {msg}", path.display()))]
    Render { path: PathBuf, msg: String },
}

/// Renders the x-y projection of an orbit as a static SVG image, with the central body at the origin.
#[derive(Clone, Debug, TypedBuilder)]
#[builder(doc)]
pub struct OrbitPlotter {
    #[builder(default = 1000)]
    pub width: u32,
    #[builder(default = 1000)]
    pub height: u32,
    #[builder(default = String::from("Orbit in a Schwarzschild spacetime"), setter(into))]
    pub title: String,
}

impl Default for OrbitPlotter {
    fn default() -> Self {
        Self::builder().build()
    }
}

impl OrbitPlotter {
    /// Solves the trajectory from `initial` until `end_lambda` and renders it to `path`.
    pub fn plot<P: AsRef<Path>>(
        &self,
        body: &SchwarzschildBody,
        initial: &SphericalState,
        end_lambda: Duration,
        step: Duration,
        path: P,
    ) -> Result<PathBuf, PlotError> {
        let traj = calculate_trajectory(body, initial, end_lambda, step, true)
            .context(PlotSolverSnafu)?
            .into_cartesian();
        self.plot_traj(&traj, path)
    }

    /// Renders an existing trajectory to `path`, returning that path.
    pub fn plot_traj<P: AsRef<Path>>(
        &self,
        traj: &Traj<CartesianState>,
        path: P,
    ) -> Result<PathBuf, PlotError> {
        ensure!(!traj.is_empty(), NothingToPlotSnafu);
        let path = path.as_ref().to_path_buf();
        let points: Vec<(f64, f64)> = traj
            .iter()
            .map(|s| (s.x_m / AXIS_SCALE_M, s.y_m / AXIS_SCALE_M))
            .collect();

        self.render(&points, &path)?;
        info!("Orbit plot written to {}", path.display());
        Ok(path)
    }

    /// Draws the points, in millions of kilometers, with the central body and the initial state marked.
    fn render(&self, points: &[(f64, f64)], path: &Path) -> Result<(), PlotError> {
        let rendering = |e: &dyn Display| PlotError::Render {
            path: path.to_path_buf(),
            msg: e.to_string(),
        };
        let half_width = symmetric_extent(points);

        let root = SVGBackend::new(path, (self.width, self.height)).into_drawing_area();
        root.fill(&WHITE).map_err(|e| rendering(&e))?;
        let mut chart = ChartBuilder::on(&root)
            .caption(&self.title, ("sans-serif", 24))
            .margin(20)
            .x_label_area_size(40)
            .y_label_area_size(60)
            .build_cartesian_2d(-half_width..half_width, -half_width..half_width)
            .map_err(|e| rendering(&e))?;
        chart
            .configure_mesh()
            .x_desc("x (10^6 km)")
            .y_desc("y (10^6 km)")
            .draw()
            .map_err(|e| rendering(&e))?;

        chart
            .draw_series(LineSeries::new(points.iter().copied(), BLUE.stroke_width(2)))
            .map_err(|e| rendering(&e))?
            .label(format!("trajectory ({} states)", points.len()))
            .legend(|(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], BLUE));

        chart
            .draw_series(std::iter::once(Circle::new((0.0, 0.0), 8, RED.filled())))
            .map_err(|e| rendering(&e))?
            .label("central body")
            .legend(|(x, y)| Circle::new((x + 10, y), 5, RED.filled()));

        chart
            .draw_series(std::iter::once(Circle::new(points[0], 5, GREEN.filled())))
            .map_err(|e| rendering(&e))?
            .label("initial state")
            .legend(|(x, y)| Circle::new((x + 10, y), 5, GREEN.filled()));

        chart
            .configure_series_labels()
            .background_style(WHITE.mix(0.8))
            .border_style(BLACK)
            .draw()
            .map_err(|e| rendering(&e))?;

        root.present().map_err(|e| rendering(&e))
    }
}

/// Half width of a square window centered on the origin enclosing all the points, padded by 10 %.
fn symmetric_extent(points: &[(f64, f64)]) -> f64 {
    let max = points
        .iter()
        .fold(0.0_f64, |acc, (x, y)| acc.max(x.abs()).max(y.abs()));
    if max > 0.0 {
        max * 1.1
    } else {
        1.0
    }
}
