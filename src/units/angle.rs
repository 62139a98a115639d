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

#[derive(Copy, Clone, Default, PartialEq, PartialOrd)]
pub struct Radians(Base);

super::unit!(Radians, "rad");

#[derive(Copy, Clone, Default, PartialEq, PartialOrd)]
pub struct Degrees(Base);

super::unit!(Degrees, "deg");

super::linear_conversion!(0.017_453_292_519_943_295_f64, Degrees, Radians);
super::linear_conversion!(57.295_779_513_082_32_f64, Radians, Degrees);

#[derive(Copy, Clone, Default, PartialEq, PartialOrd)]
pub struct RadiansPerSecond(Base);

super::unit!(RadiansPerSecond, "rad/s");
