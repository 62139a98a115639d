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

//! Typed physical quantities.
//!
//! Each unit is a newtype around an `f64`. Only quantities of the same unit may be added or subtracted,
//! and compatible units (e.g. kilometers and meters) convert into one another with `From`/`Into`.
//! Products and ratios across dimensions are only implemented where they are dimensionally valid,
//! so mixing incompatible quantities is a compile error. Durations are [`hifitime::Duration`]s.
//!
//! Text and configuration input goes through the runtime-tagged [`Quantity`], which checks the dimensions at run time.

pub mod angle;
pub mod length;
pub mod mass;
pub mod quantity;
pub mod time;
pub mod velocity;

pub use angle::{Degrees, Radians, RadiansPerSecond};
pub use length::{Kilometers, Meters};
pub use mass::{Kilograms, SolarMasses};
pub use quantity::{parse_quantity, Dimension, Quantity, QuantityUnit, UnitError};
pub use time::{julian_years, minutes, to_julian_years, to_minutes, DAYS_PER_JULIAN_YEAR};
pub use velocity::{KilometersPerSecond, MetersPerSecond};

type Base = f64;

macro_rules! unit {
    ($me:ident, $abbrev:literal) => {
        impl $me {
            pub const fn new(base: $crate::units::Base) -> Self {
                $me(base)
            }

            /// Returns the magnitude of this quantity, in this unit.
            pub const fn value(&self) -> $crate::units::Base {
                self.0
            }

            pub fn abs(self) -> Self {
                $me(self.0.abs())
            }
        }

        impl ::std::fmt::Debug for $me {
            fn fmt(
                &self,
                f: &mut ::std::fmt::Formatter<'_>,
            ) -> ::std::result::Result<(), ::std::fmt::Error> {
                ::std::write!(f, "{}({})", ::std::stringify!($me), self.0)
            }
        }

        impl ::std::fmt::Display for $me {
            fn fmt(
                &self,
                f: &mut ::std::fmt::Formatter<'_>,
            ) -> ::std::result::Result<(), ::std::fmt::Error> {
                if let Some(precision) = f.precision() {
                    ::std::write!(f, "{:.*} {}", precision, self.0, $abbrev)
                } else {
                    ::std::write!(f, "{} {}", self.0, $abbrev)
                }
            }
        }

        impl ::std::fmt::LowerExp for $me {
            fn fmt(
                &self,
                f: &mut ::std::fmt::Formatter<'_>,
            ) -> ::std::result::Result<(), ::std::fmt::Error> {
                if let Some(precision) = f.precision() {
                    ::std::write!(f, "{:.*e} {}", precision, self.0, $abbrev)
                } else {
                    ::std::write!(f, "{:e} {}", self.0, $abbrev)
                }
            }
        }

        impl ::std::ops::Add for $me {
            type Output = Self;

            fn add(self, rhs: Self) -> Self::Output {
                $me(self.0 + rhs.0)
            }
        }

        impl ::std::ops::AddAssign for $me {
            fn add_assign(&mut self, rhs: Self) {
                self.0 += rhs.0;
            }
        }

        impl ::std::ops::Sub for $me {
            type Output = Self;

            fn sub(self, rhs: Self) -> Self::Output {
                $me(self.0 - rhs.0)
            }
        }

        impl ::std::ops::SubAssign for $me {
            fn sub_assign(&mut self, rhs: Self) {
                self.0 -= rhs.0;
            }
        }

        impl ::std::ops::Neg for $me {
            type Output = Self;

            fn neg(self) -> Self::Output {
                $me(-self.0)
            }
        }

        /// Scaling by a dimensionless factor.
        impl ::std::ops::Mul<$crate::units::Base> for $me {
            type Output = Self;

            fn mul(self, rhs: $crate::units::Base) -> Self::Output {
                $me(self.0 * rhs)
            }
        }

        impl ::std::ops::Mul<$me> for $crate::units::Base {
            type Output = $me;

            fn mul(self, rhs: $me) -> Self::Output {
                $me(self * rhs.0)
            }
        }

        impl ::std::ops::Div<$crate::units::Base> for $me {
            type Output = Self;

            fn div(self, rhs: $crate::units::Base) -> Self::Output {
                $me(self.0 / rhs)
            }
        }

        /// The ratio of two quantities of the same unit is dimensionless.
        impl ::std::ops::Div for $me {
            type Output = $crate::units::Base;

            fn div(self, rhs: Self) -> Self::Output {
                self.0 / rhs.0
            }
        }
    };
}

macro_rules! linear_conversion {
    ($factor:literal, $from:ident, $into:ident) => {
        impl std::convert::From<$from> for $into {
            fn from(value: $from) -> Self {
                let converted = $factor * value.value();
                $into::new(converted)
            }
        }

        impl ::std::ops::Add<$from> for $into {
            type Output = Self;

            fn add(self, rhs: $from) -> Self::Output {
                let rhs: $into = rhs.into();
                $into::new(self.value() + rhs.value())
            }
        }

        impl ::std::ops::AddAssign<$from> for $into {
            fn add_assign(&mut self, rhs: $from) {
                let rhs: $into = rhs.into();
                *self = $into::new(self.value() + rhs.value());
            }
        }

        impl ::std::ops::Sub<$from> for $into {
            type Output = Self;

            fn sub(self, rhs: $from) -> Self::Output {
                let rhs: $into = rhs.into();
                $into::new(self.value() - rhs.value())
            }
        }

        impl ::std::ops::SubAssign<$from> for $into {
            fn sub_assign(&mut self, rhs: $from) {
                let rhs: $into = rhs.into();
                *self = $into::new(self.value() - rhs.value());
            }
        }
    };
}

pub(crate) use linear_conversion;
pub(crate) use unit;
