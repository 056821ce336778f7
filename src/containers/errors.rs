/*
errors.rs

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

//! Errors raised by the grid containers.
//!
//! Out-of-range coordinates and geometrically impossible requests are programming errors from
//! the caller's point of view, so they are always reported and never silently corrected.
//! Player commands that bump into the edge of a board are not errors: the games handle them as
//! no-ops before they reach the containers.

use thiserror::Error;

use super::direction::Direction;
use super::slot::Slot;

/// Type of errors.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GridError {
    /// Rectangular coordinates outside the grid (cells, walls, or corners).
    #[error("index {x}/{y} out of bounds for {width}x{height}")]
    OutOfBounds {
        x: usize,
        y: usize,
        width: usize,
        height: usize,
    },

    /// Triangular coordinates that do not designate a cell of the triangle.
    #[error("index {x}/{y}/{slot:?} out of bounds for size {size}")]
    TriOutOfBounds {
        x: i32,
        y: i32,
        slot: Slot,
        size: usize,
    },

    /// The two cells cannot be neighbours.
    #[error("{0}")]
    NotNeighbours(String),

    /// The cell in the given slot has no wall in the given direction.
    #[error("cells in slot {slot:?} don't have a wall in the direction {direction:?}")]
    MissingWall { slot: Slot, direction: Direction },

    /// A corner must be designated by a vertical and a horizontal direction.
    #[error("{vertical:?}/{horizontal:?} does not designate a corner")]
    InvalidCorner {
        vertical: Direction,
        horizontal: Direction,
    },

    /// The grid dimensions do not allow at least one cell (or the minimum size of a game).
    #[error("invalid size {size}: must be at least {min}")]
    InvalidSize { size: usize, min: usize },
}
