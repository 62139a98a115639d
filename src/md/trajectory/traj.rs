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

use super::TrajError;
use crate::cosmic::{CartesianState, GeodesicState};
use crate::linalg::allocator::Allocator;
use crate::linalg::DefaultAllocator;
use crate::time::Duration;
use crate::State;
use std::fmt;

/// Store a trajectory of any State, ordered by strictly increasing proper time.
#[derive(Clone, PartialEq)]
pub struct Traj<S: State>
where
    DefaultAllocator: Allocator<S::VecLength>,
{
    /// Label used in logs and plots
    pub name: Option<String>,
    /// We use a vector because we know that the states are produced in a chronological manner.
    pub states: Vec<S>,
}

impl<S: State> Traj<S>
where
    DefaultAllocator: Allocator<S::VecLength>,
{
    pub fn new() -> Self {
        Self {
            name: None,
            states: Vec::new(),
        }
    }

    /// Builds a trajectory from states which must already be strictly increasing in proper time.
    pub fn from_states(states: Vec<S>) -> Result<Self, TrajError> {
        if states.is_empty() {
            return Err(TrajError::Empty);
        }
        for (index, pair) in states.windows(2).enumerate() {
            if pair[1].lambda() <= pair[0].lambda() {
                return Err(TrajError::NonMonotonic {
                    index: index + 1,
                    prev_lambda: pair[0].lambda(),
                    lambda: pair[1].lambda(),
                });
            }
        }
        Ok(Self {
            name: None,
            states,
        })
    }

    /// Sorts the states by proper time and drops repeated proper times, keeping the first.
    pub fn finalize(&mut self) {
        // Sort first so that duplicates are adjacent
        self.states.sort_by_key(|a| a.lambda());
        // Remove duplicate proper times
        self.states.dedup_by(|a, b| a.lambda().eq(&b.lambda()));
    }

    pub fn first(&self) -> Result<&S, TrajError> {
        self.states.first().ok_or(TrajError::Empty)
    }

    pub fn last(&self) -> Result<&S, TrajError> {
        self.states.last().ok_or(TrajError::Empty)
    }

    pub fn len(&self) -> usize {
        self.states.len()
    }

    pub fn is_empty(&self) -> bool {
        self.states.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, S> {
        self.states.iter()
    }

    /// Proper time spanned by this trajectory
    pub fn span(&self) -> Result<Duration, TrajError> {
        Ok(self.last()?.lambda() - self.first()?.lambda())
    }
}

impl Traj<GeodesicState> {
    /// Converts each state of this trajectory into Cartesian coordinates.
    pub fn to_cartesian(&self) -> Traj<CartesianState> {
        Traj {
            name: self.name.clone(),
            states: self.states.iter().map(|s| s.to_cartesian()).collect(),
        }
    }
}

impl<'a, S: State> IntoIterator for &'a Traj<S>
where
    DefaultAllocator: Allocator<S::VecLength>,
{
    type Item = &'a S;
    type IntoIter = std::slice::Iter<'a, S>;

    fn into_iter(self) -> Self::IntoIter {
        self.states.iter()
    }
}

impl<S: State> fmt::Display for Traj<S>
where
    DefaultAllocator: Allocator<S::VecLength>,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (self.states.first(), self.states.last()) {
            (Some(first), Some(last)) => {
                let dur = last.lambda() - first.lambda();
                write!(
                    f,
                    "Trajectory from λ = {} to λ = {} ({:.3} s) [{} states]",
                    first.lambda(),
                    last.lambda(),
                    dur.to_seconds(),
                    self.states.len()
                )
            }
            _ => write!(f, "Empty trajectory"),
        }
    }
}

impl<S: State> fmt::Debug for Traj<S>
where
    DefaultAllocator: Allocator<S::VecLength>,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{self}",)
    }
}

impl<S: State> Default for Traj<S>
where
    DefaultAllocator: Allocator<S::VecLength>,
{
    fn default() -> Self {
        Self::new()
    }
}
