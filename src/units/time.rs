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

//! Proper time is carried as a [hifitime::Duration]. These helpers express durations in the units used
//! by orbit scenarios, i.e. Julian years and minutes.

use crate::time::{Duration, Unit};

/// A Julian year is exactly 365.25 days.
pub const DAYS_PER_JULIAN_YEAR: f64 = 365.25;

/// Returns the duration of the provided number of Julian years.
pub fn julian_years(years: f64) -> Duration {
    years * DAYS_PER_JULIAN_YEAR * Unit::Day
}

/// Returns the provided duration in Julian years.
pub fn to_julian_years(duration: Duration) -> f64 {
    duration.to_unit(Unit::Day) / DAYS_PER_JULIAN_YEAR
}

pub fn minutes(minutes: f64) -> Duration {
    minutes * Unit::Minute
}

pub fn to_minutes(duration: Duration) -> f64 {
    duration.to_unit(Unit::Minute)
}

#[cfg(test)]
mod ut_time {
    use super::*;

    #[test]
    fn one_year_in_seconds() {
        assert_eq!(julian_years(1.0).to_seconds(), 31_557_600.0);
        assert_eq!(minutes(5.0).to_seconds(), 300.0);
    }

    #[test]
    fn round_trips() {
        for years in [1.0, 0.5, 2.75, 1e-3] {
            let back = to_julian_years(julian_years(years));
            assert!(((back - years) / years).abs() <= 1e-9, "{back} != {years}");
            // Through seconds explicitly
            let secs = julian_years(years).to_seconds();
            let back_s = to_julian_years(Duration::from_seconds(secs));
            assert!(((back_s - years) / years).abs() <= 1e-9);
        }
        for mins in [5.0, 0.25, 1440.0] {
            let back = to_minutes(minutes(mins));
            assert!(((back - mins) / mins).abs() <= 1e-9);
        }
    }
}
