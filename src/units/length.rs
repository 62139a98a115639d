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

use super::Base;

/// A length in meters, the SI base unit used throughout the propagation.
#[derive(Copy, Clone, Default, PartialEq, PartialOrd)]
pub struct Meters(Base);

super::unit!(Meters, "m");

#[derive(Copy, Clone, Default, PartialEq, PartialOrd)]
pub struct Kilometers(Base);

super::unit!(Kilometers, "km");

super::linear_conversion!(1e3_f64, Kilometers, Meters);
super::linear_conversion!(1e-3_f64, Meters, Kilometers);

#[cfg(test)]
mod ut_length {
    use super::*;

    #[test]
    fn km_m_round_trip() {
        for km in [147.09e6, 152.1e6, 1.0, 0.0, -6378.137, 1.234_567_89e-3] {
            let m: Meters = Kilometers::new(km).into();
            assert_eq!(m.value(), km * 1e3);
            let back: Kilometers = m.into();
            if km == 0.0 {
                assert_eq!(back.value(), 0.0);
            } else {
                assert!(((back.value() - km) / km).abs() <= 1e-9, "{back} != {km} km");
            }
        }
    }

    #[test]
    fn same_unit_arithmetic() {
        let a = Meters::new(1500.0);
        let b = Kilometers::new(2.0);
        // Compatible units are converted before the operation
        assert_eq!((a + b).value(), 3500.0);
        assert_eq!((b - a).value(), 0.5);
        assert_eq!((a * 2.0).value(), 3000.0);
        assert_eq!(a / Meters::new(500.0), 3.0);
        assert_eq!(format!("{:.1}", b), "2.0 km");
    }
}
