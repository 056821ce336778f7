/*
slot.rs

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

//! Slot of a triangular coordinate.
//!
//! Each `(x, y)` position of a triangular grid holds up to two triangles.
//! The triangle in slot `A` points up and has a wall on its lower side.
//! The triangle in slot `B` points down and has a wall on its upper side.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::direction::Direction;

/// Slot of a triangular cell.
#[derive(Serialize, Deserialize, Debug, Copy, Clone, PartialEq, Eq, Hash, Default)]
pub enum Slot {
    #[default]
    A,
    B,
}

impl fmt::Display for Slot {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Slot::A => write!(f, "A"),
            Slot::B => write!(f, "B"),
        }
    }
}

impl Slot {
    /// Whether the slot is `A`.
    pub fn is_a(self) -> bool {
        self == Slot::A
    }

    /// Whether the slot is `B`.
    pub fn is_b(self) -> bool {
        self == Slot::B
    }

    /// Return the other slot.
    pub fn other(self) -> Self {
        match self {
            Slot::A => Slot::B,
            Slot::B => Slot::A,
        }
    }

    /// Direction of the only vertical wall of the triangles in this slot.
    pub fn vert_dir(self) -> Direction {
        match self {
            Slot::A => Direction::Down,
            Slot::B => Direction::Up,
        }
    }

    /// Convert the direction for this slot: horizontal directions are unchanged, vertical
    /// directions become [`Slot::vert_dir`].
    pub fn convert_dir(self, direction: Direction) -> Direction {
        if direction.is_vertical() {
            self.vert_dir()
        } else {
            direction
        }
    }

    /// Whether the triangles in this slot have a wall in the given direction.
    pub fn has_direction(self, direction: Direction) -> bool {
        direction.is_horizontal() || direction == self.vert_dir()
    }

    /// Column in the backing rectangular grid for the given triangular x coordinate.
    pub fn column(self, x: usize) -> usize {
        match self {
            Slot::A => x * 2,
            Slot::B => x * 2 + 1,
        }
    }

    /// Slot of a column in the backing rectangular grid.
    pub fn of_column(column: usize) -> Self {
        if column % 2 == 0 { Slot::A } else { Slot::B }
    }
}
