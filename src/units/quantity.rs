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

use super::{julian_years, Kilograms, Kilometers, Meters, MetersPerSecond, Radians};
use crate::time::{Duration, Unit};
use lazy_static::lazy_static;
use regex::Regex;
use serde_derive::{Deserialize, Serialize};
use snafu::prelude::*;
use std::fmt;
use std::str::FromStr;

lazy_static! {
    static ref QUANTITY_RE: Regex =
        Regex::new(r"^\s*([-+]?\d+\.?\d*(?:[eE][-+]?\d+)?)\s*\*?\s*([A-Za-z☉/]+)\s*$").unwrap();
}

#[derive(Debug, Clone, PartialEq, Snafu)]
#[snafu(visibility(pub(crate)))]
pub enum UnitError {
    #[snafu(display("cannot convert {from} into {into}: incompatible dimensions"))]
    UnitMismatch { from: Dimension, into: Dimension },
    #[snafu(display("cannot {op} {lhs} and {rhs}"))]
    IncompatibleOperation {
        op: &'static str,
        lhs: Dimension,
        rhs: Dimension,
    },
    #[snafu(display("unknown unit `{unit}`"))]
    UnknownUnit { unit: String },
    #[snafu(display("could not understand quantity `{input}`"))]
    MalformedQuantity { input: String },
}

/// The physical dimension of a quantity.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Dimension {
    Length,
    Mass,
    Time,
    Velocity,
    Angle,
    AngularVelocity,
}

impl fmt::Display for Dimension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Length => "length",
            Self::Mass => "mass",
            Self::Time => "time",
            Self::Velocity => "velocity",
            Self::Angle => "angle",
            Self::AngularVelocity => "angular velocity",
        };
        write!(f, "{name}")
    }
}

/// Units a [Quantity] may be tagged with.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum QuantityUnit {
    Meter,
    Kilometer,
    AstronomicalUnit,
    Kilogram,
    SolarMass,
    Second,
    Minute,
    Hour,
    Day,
    JulianYear,
    MeterPerSecond,
    KilometerPerSecond,
    KilometerPerHour,
    Radian,
    Degree,
    RadianPerSecond,
}

impl QuantityUnit {
    pub fn dimension(&self) -> Dimension {
        match self {
            Self::Meter | Self::Kilometer | Self::AstronomicalUnit => Dimension::Length,
            Self::Kilogram | Self::SolarMass => Dimension::Mass,
            Self::Second | Self::Minute | Self::Hour | Self::Day | Self::JulianYear => {
                Dimension::Time
            }
            Self::MeterPerSecond | Self::KilometerPerSecond | Self::KilometerPerHour => {
                Dimension::Velocity
            }
            Self::Radian | Self::Degree => Dimension::Angle,
            Self::RadianPerSecond => Dimension::AngularVelocity,
        }
    }

    /// Multiplier from this unit into the SI unit of its dimension.
    pub fn to_si(&self) -> f64 {
        match self {
            Self::Meter => 1.0,
            Self::Kilometer => 1e3,
            Self::AstronomicalUnit => crate::cosmic::AU,
            Self::Kilogram => 1.0,
            Self::SolarMass => 1.988_47e30,
            Self::Second => 1.0,
            Self::Minute => 60.0,
            Self::Hour => 3_600.0,
            Self::Day => 86_400.0,
            Self::JulianYear => 86_400.0 * super::DAYS_PER_JULIAN_YEAR,
            Self::MeterPerSecond => 1.0,
            Self::KilometerPerSecond => 1e3,
            Self::KilometerPerHour => 1e3 / 3_600.0,
            Self::Radian => 1.0,
            Self::Degree => std::f64::consts::PI / 180.0,
            Self::RadianPerSecond => 1.0,
        }
    }

    /// The SI unit of the provided dimension.
    pub fn si(dimension: Dimension) -> Self {
        match dimension {
            Dimension::Length => Self::Meter,
            Dimension::Mass => Self::Kilogram,
            Dimension::Time => Self::Second,
            Dimension::Velocity => Self::MeterPerSecond,
            Dimension::Angle => Self::Radian,
            Dimension::AngularVelocity => Self::RadianPerSecond,
        }
    }

    pub fn abbreviation(&self) -> &'static str {
        match self {
            Self::Meter => "m",
            Self::Kilometer => "km",
            Self::AstronomicalUnit => "au",
            Self::Kilogram => "kg",
            Self::SolarMass => "Msun",
            Self::Second => "s",
            Self::Minute => "min",
            Self::Hour => "h",
            Self::Day => "days",
            Self::JulianYear => "years",
            Self::MeterPerSecond => "m/s",
            Self::KilometerPerSecond => "km/s",
            Self::KilometerPerHour => "km/h",
            Self::Radian => "rad",
            Self::Degree => "deg",
            Self::RadianPerSecond => "rad/s",
        }
    }
}

impl FromStr for QuantityUnit {
    type Err = UnitError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "m" | "meter" | "meters" => Ok(Self::Meter),
            "km" | "kilometer" | "kilometers" => Ok(Self::Kilometer),
            "au" | "AU" => Ok(Self::AstronomicalUnit),
            "kg" | "kilogram" | "kilograms" => Ok(Self::Kilogram),
            "Msun" | "M☉" | "solar_mass" => Ok(Self::SolarMass),
            "s" | "sec" | "secs" | "second" | "seconds" => Ok(Self::Second),
            "min" | "mins" | "minute" | "minutes" => Ok(Self::Minute),
            "h" | "hour" | "hours" => Ok(Self::Hour),
            "d" | "day" | "days" => Ok(Self::Day),
            "yr" | "year" | "years" => Ok(Self::JulianYear),
            "m/s" => Ok(Self::MeterPerSecond),
            "km/s" => Ok(Self::KilometerPerSecond),
            "km/h" => Ok(Self::KilometerPerHour),
            "rad" | "radian" | "radians" => Ok(Self::Radian),
            "deg" | "degree" | "degrees" => Ok(Self::Degree),
            "rad/s" => Ok(Self::RadianPerSecond),
            _ => Err(UnitError::UnknownUnit {
                unit: s.to_string(),
            }),
        }
    }
}

/// A magnitude tagged with its unit, checked at run time.
///
/// Used for any quantity read from text. Conversions are only allowed within a dimension:
/// ```
/// use schwarzschild_orbit::units::{parse_quantity, QuantityUnit};
///
/// let r = parse_quantity("147.09e6 km").unwrap();
/// assert_eq!(r.convert_to(QuantityUnit::Meter).unwrap().value, 147.09e9);
/// assert!(r.convert_to(QuantityUnit::Second).is_err());
/// ```
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Quantity {
    pub value: f64,
    pub unit: QuantityUnit,
}

impl Quantity {
    pub fn new(value: f64, unit: QuantityUnit) -> Self {
        Self { value, unit }
    }

    pub fn dimension(&self) -> Dimension {
        self.unit.dimension()
    }

    /// Returns this quantity in the SI unit of its dimension.
    pub fn to_si(&self) -> Self {
        Self {
            value: self.value * self.unit.to_si(),
            unit: QuantityUnit::si(self.dimension()),
        }
    }

    /// Converts this quantity into the provided unit, which must be of the same dimension.
    pub fn convert_to(&self, unit: QuantityUnit) -> Result<Self, UnitError> {
        ensure!(
            self.dimension() == unit.dimension(),
            UnitMismatchSnafu {
                from: self.dimension(),
                into: unit.dimension()
            }
        );
        if self.unit == unit {
            return Ok(*self);
        }
        Ok(Self {
            value: self.value * self.unit.to_si() / unit.to_si(),
            unit,
        })
    }

    /// Adds two quantities of the same dimension, the result is in the unit of `self`.
    pub fn try_add(&self, rhs: &Self) -> Result<Self, UnitError> {
        ensure!(
            self.dimension() == rhs.dimension(),
            IncompatibleOperationSnafu {
                op: "add",
                lhs: self.dimension(),
                rhs: rhs.dimension()
            }
        );
        let rhs = rhs.convert_to(self.unit)?;
        Ok(Self::new(self.value + rhs.value, self.unit))
    }

    /// Divides two quantities whose ratio has a known dimension:
    /// length / time is a velocity, velocity / length is an angular velocity (radian multiplier),
    /// and angle / time is an angular velocity.
    pub fn try_div(&self, rhs: &Self) -> Result<Self, UnitError> {
        let unit = match (self.dimension(), rhs.dimension()) {
            (Dimension::Length, Dimension::Time) => QuantityUnit::MeterPerSecond,
            (Dimension::Velocity, Dimension::Length) => QuantityUnit::RadianPerSecond,
            (Dimension::Angle, Dimension::Time) => QuantityUnit::RadianPerSecond,
            (lhs, rhs) => {
                return Err(UnitError::IncompatibleOperation {
                    op: "divide",
                    lhs,
                    rhs,
                })
            }
        };
        Ok(Self::new(self.to_si().value / rhs.to_si().value, unit))
    }

    fn si_value_of(&self, dimension: Dimension) -> Result<f64, UnitError> {
        Ok(self.convert_to(QuantityUnit::si(dimension))?.value)
    }

    pub fn to_meters(&self) -> Result<Meters, UnitError> {
        Ok(Meters::new(self.si_value_of(Dimension::Length)?))
    }

    pub fn to_kilometers(&self) -> Result<Kilometers, UnitError> {
        Ok(self.to_meters()?.into())
    }

    pub fn to_kilograms(&self) -> Result<Kilograms, UnitError> {
        Ok(Kilograms::new(self.si_value_of(Dimension::Mass)?))
    }

    pub fn to_meters_per_second(&self) -> Result<MetersPerSecond, UnitError> {
        Ok(MetersPerSecond::new(self.si_value_of(Dimension::Velocity)?))
    }

    pub fn to_radians(&self) -> Result<Radians, UnitError> {
        Ok(Radians::new(self.si_value_of(Dimension::Angle)?))
    }

    /// Returns this time quantity as a Duration. Years are Julian years.
    pub fn to_duration(&self) -> Result<Duration, UnitError> {
        ensure!(
            self.dimension() == Dimension::Time,
            UnitMismatchSnafu {
                from: self.dimension(),
                into: Dimension::Time
            }
        );
        Ok(match self.unit {
            QuantityUnit::JulianYear => julian_years(self.value),
            QuantityUnit::Day => self.value * Unit::Day,
            QuantityUnit::Hour => self.value * Unit::Hour,
            QuantityUnit::Minute => self.value * Unit::Minute,
            _ => self.value * Unit::Second,
        })
    }
}

impl From<Duration> for Quantity {
    fn from(duration: Duration) -> Self {
        Self::new(duration.to_seconds(), QuantityUnit::Second)
    }
}

impl fmt::Display for Quantity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.value, self.unit.abbreviation())
    }
}

impl FromStr for Quantity {
    type Err = UnitError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_quantity(s)
    }
}

/// Parse a quantity made of a number and a unit, optionally separated by `*`.
///
/// ```
/// use schwarzschild_orbit::units::{parse_quantity, QuantityUnit};
///
/// assert_eq!(parse_quantity("1.989e30 kg").unwrap().unit, QuantityUnit::Kilogram);
/// assert_eq!(parse_quantity("30.29 km/s").unwrap().value, 30.29);
/// assert_eq!(parse_quantity("5 * min").unwrap().unit, QuantityUnit::Minute);
/// assert_eq!(parse_quantity("1 year").unwrap().to_duration().unwrap().to_seconds(), 31_557_600.0);
/// assert!(parse_quantity("12 parsecs").is_err());
/// ```
pub fn parse_quantity(input: &str) -> Result<Quantity, UnitError> {
    match QUANTITY_RE.captures(input) {
        Some(cap) => {
            let value = cap[1]
                .parse::<f64>()
                .map_err(|_| UnitError::MalformedQuantity {
                    input: input.to_string(),
                })?;
            let unit = QuantityUnit::from_str(&cap[2])?;
            Ok(Quantity { value, unit })
        }
        None => Err(UnitError::MalformedQuantity {
            input: input.to_string(),
        }),
    }
}
