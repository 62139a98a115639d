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
pub struct Kilograms(Base);

super::unit!(Kilograms, "kg");

/// Nominal solar masses, 1 M☉ = 1.988 47e30 kg.
#[derive(Copy, Clone, Default, PartialEq, PartialOrd)]
pub struct SolarMasses(Base);

super::unit!(SolarMasses, "M☉");

super::linear_conversion!(1.988_47e30_f64, SolarMasses, Kilograms);
super::linear_conversion!(5.028_992_139_685_286e-31_f64, Kilograms, SolarMasses);
