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

use super::angle::RadiansPerSecond;
use super::length::Meters;
use super::Base;
use crate::time::Duration;

#[derive(Copy, Clone, Default, PartialEq, PartialOrd)]
pub struct MetersPerSecond(Base);

super::unit!(MetersPerSecond, "m/s");

#[derive(Copy, Clone, Default, PartialEq, PartialOrd)]
pub struct KilometersPerSecond(Base);

super::unit!(KilometersPerSecond, "km/s");

super::linear_conversion!(1e3_f64, KilometersPerSecond, MetersPerSecond);
super::linear_conversion!(1e-3_f64, MetersPerSecond, KilometersPerSecond);

/// length / time = velocity
impl ::std::ops::Div<Duration> for Meters {
    type Output = MetersPerSecond;

    fn div(self, rhs: Duration) -> Self::Output {
        MetersPerSecond::new(self.value() / rhs.to_seconds())
    }
}

/// velocity * time = length
impl ::std::ops::Mul<Duration> for MetersPerSecond {
    type Output = Meters;

    fn mul(self, rhs: Duration) -> Self::Output {
        Meters::new(self.value() * rhs.to_seconds())
    }
}

/// A tangential speed divided by its radius is the angular velocity, using the radian multiplier.
impl ::std::ops::Div<Meters> for MetersPerSecond {
    type Output = RadiansPerSecond;

    fn div(self, rhs: Meters) -> Self::Output {
        RadiansPerSecond::new(self.value() / rhs.value())
    }
}

#[cfg(test)]
mod ut_velocity {
    use super::*;
    use crate::time::Unit;

    #[test]
    fn kms_ms_round_trip() {
        for kms in [30.29, 29.30, 7.5, 1e-6, 299_792.458] {
            let ms: MetersPerSecond = KilometersPerSecond::new(kms).into();
            let back: KilometersPerSecond = ms.into();
            assert!(((back.value() - kms) / kms).abs() <= 1e-9);
        }
    }

    #[test]
    fn dimensional_products() {
        let v = Meters::new(600.0) / (1 * Unit::Minute);
        assert_eq!(v, MetersPerSecond::new(10.0));
        assert_eq!(v * (2 * Unit::Second), Meters::new(20.0));
        let w = MetersPerSecond::new(30.29e3) / Meters::new(147.09e9);
        assert_eq!(w.value(), 30.29e3 / 147.09e9);
    }
}
