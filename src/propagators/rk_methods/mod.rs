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

mod rk;
pub use self::rk::*;
mod dormand;
pub use self::dormand::*;
mod fehlberg;
pub use self::fehlberg::*;

/// Butcher table of an explicit, embedded Runge Kutta method.
#[allow(clippy::upper_case_acronyms)]
pub trait RK
where
    Self: Sized,
{
    /// Order of the propagated solution, which sets the exponent of the step adaptation.
    const ORDER: u8;

    /// Number of evaluations of the equations of motion per step.
    const STAGES: usize;

    /// Strictly lower triangle of the a_ij coefficients, row by row, hence STAGES * (STAGES - 1) / 2 values.
    /// The nodes are not stored: c_i is recovered as the sum of row i.
    const A_COEFFS: &'static [f64];
    /// The weights b_i of the propagated solution followed by the weights b*_i of the embedded one
    /// (2 * STAGES values). A fixed step method repeats b_i.
    const B_COEFFS: &'static [f64];
}

#[cfg(test)]
mod ut_rk_methods {
    use super::*;

    fn check_table<T: RK>(name: &str) {
        assert_eq!(
            T::A_COEFFS.len(),
            T::STAGES * (T::STAGES - 1) / 2,
            "{name}: wrong number of A coefficients"
        );
        assert_eq!(
            T::B_COEFFS.len(),
            2 * T::STAGES,
            "{name}: wrong number of B coefficients"
        );
        let b_sum: f64 = T::B_COEFFS[..T::STAGES].iter().sum();
        let b_star_sum: f64 = T::B_COEFFS[T::STAGES..].iter().sum();
        assert!((b_sum - 1.0).abs() < 1e-14, "{name}: b sums to {b_sum}");
        assert!(
            (b_star_sum - 1.0).abs() < 1e-14,
            "{name}: b* sums to {b_star_sum}"
        );
        // Each c_i = sum_j a_ij lies within the step
        let mut idx = 0;
        for i in 1..T::STAGES {
            let ci: f64 = T::A_COEFFS[idx..idx + i].iter().sum();
            assert!(
                (-1e-14..=1.0 + 1e-14).contains(&ci),
                "{name}: c_{i} = {ci}"
            );
            idx += i;
        }
    }

    #[test]
    fn butcher_tables() {
        check_table::<RK4Fixed>("RK4");
        check_table::<RKF45>("RKF45");
        check_table::<CashKarp45>("CashKarp45");
        check_table::<Dormand45>("Dormand45");
    }
}
