/*
containers.rs

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

//! Grid containers.
//!
//! Two families of grids store values of a generic type in their cells and in the walls between
//! the cells:
//!
//! * [`grid::RectGrid`] is a rectangular grid addressed by [`grid::Point`] coordinates.
//!   [`corners::CornerGrid`] wraps a [`grid::RectGrid`] and adds a value at every corner, where
//!   the walls meet.
//!
//! * [`tri_grid::TriGrid`] is a triangular grid addressed by [`tri_point::TriPoint`]
//!   coordinates.
//!   Each position holds up to two triangles, distinguished by their [`slot::Slot`].
//!   The triangular grid is stored in a [`grid::RectGrid`].
//!
//! Walls are designated relative to a cell by a [`direction::Direction`].
//! Every operation that receives coordinates validates them, and returns a
//! [`errors::GridError`] when they are not valid.

pub mod corners;
pub mod direction;
pub mod errors;
pub mod grid;
pub mod slot;
pub mod tri_grid;
pub mod tri_point;
