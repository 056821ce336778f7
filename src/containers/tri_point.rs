/*
tri_point.rs

Copyright 2025 Hervé Quatremain

This file is part of Trigrid.

Trigrid is free software: you can redistribute it and/or modify it under the
terms of the GNU General Public License as published by the Free Software
Foundation, either version 3 of the License, or (at your option) any later
version.

Trigrid is distributed in the hope that it will be useful, but WITHOUT ANY
WARRANTY; without even the implied warranty of MERCHANTABILITY or FITNESS FOR
A PARTICULAR PURPOSE. See the GNU General Public License for more details.

You should have received a copy of the GNU General Public License along with
Trigrid. If not, see <https://www.gnu.org/licenses/>.

SPDX-License-Identifier: GPL-3.0-or-later
*/

//! Coordinates of a cell in a triangular grid.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::slot::Slot;

/// A triangular cell: a position and a slot.
///
/// The coordinates are signed so that neighbour computations can step outside the triangle;
/// [`super::tri_grid::TriGrid::are_cords_valid`] then filters the result.
#[derive(Serialize, Deserialize, Debug, Copy, Clone, PartialEq, Eq, Hash, Default)]
pub struct TriPoint {
    pub x: i32,
    pub y: i32,
    pub slot: Slot,
}

impl fmt::Display for TriPoint {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "[x={},y={},s={}]", self.x, self.y, self.slot)
    }
}

impl TriPoint {
    /// Create a [`TriPoint`] object.
    pub fn new(x: i32, y: i32, slot: Slot) -> Self {
        Self { x, y, slot }
    }

    /// Return a point moved by `(dx, dy)` and set to the given slot.
    pub fn translate(self, dx: i32, dy: i32, slot: Slot) -> Self {
        Self::new(self.x + dx, self.y + dy, slot)
    }

    /// Return the point at the same position in the other slot.
    pub fn with_other_slot(self) -> Self {
        Self::new(self.x, self.y, self.slot.other())
    }
}
