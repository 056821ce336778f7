/*
direction.rs

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

//! The four basic directions.
//!
//! Use the directions in the `Up`, `Down`, `Left`, `Right` order when iterating, as the
//! generators do, to keep results reproducible.

use serde::{Deserialize, Serialize};

/// Basic directions.
#[derive(Serialize, Deserialize, Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// All the directions.
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Down,
        Direction::Left,
        Direction::Right,
    ];

    /// Return the opposite direction.
    pub fn opposite(self) -> Self {
        match self {
            Direction::Up => Direction::Down,
            Direction::Down => Direction::Up,
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
        }
    }

    /// Return the direction clockwise of this one.
    pub fn clockwise(self) -> Self {
        match self {
            Direction::Up => Direction::Right,
            Direction::Right => Direction::Down,
            Direction::Down => Direction::Left,
            Direction::Left => Direction::Up,
        }
    }

    /// Return the direction counter clockwise of this one.
    pub fn counter_clockwise(self) -> Self {
        self.clockwise().opposite()
    }

    /// Whether the direction is `Up` or `Down`.
    pub fn is_vertical(self) -> bool {
        match self {
            Direction::Up | Direction::Down => true,
            Direction::Left | Direction::Right => false,
        }
    }

    /// Whether the direction is `Left` or `Right`.
    pub fn is_horizontal(self) -> bool {
        !self.is_vertical()
    }

    /// Whether the two directions are both vertical or both horizontal.
    pub fn aligned_with(self, other: Direction) -> bool {
        self.is_vertical() == other.is_vertical()
    }

    /// Offset `(dx, dy)` of one step in this direction. The y axis points down.
    pub fn offset(self) -> (i32, i32) {
        match self {
            Direction::Up => (0, -1),
            Direction::Down => (0, 1),
            Direction::Left => (-1, 0),
            Direction::Right => (1, 0),
        }
    }
}
