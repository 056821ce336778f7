/*
lib.rs

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

//! Rectangular and triangular grids, and the games built on them.
//!
//! The [`containers`] module provides the grids, which store values in the cells and in the
//! walls between them. The [`games`] module uses the grids to generate mazes and to run a
//! minesweeper game on a triangular board.
//!
//! # Examples
//!
//! ```
//! use trigrid::containers::slot::Slot;
//! use trigrid::containers::tri_point::TriPoint;
//! use trigrid::games::tri_maze::TriMaze;
//!
//! let maze = TriMaze::with_seed(6, "example").unwrap();
//! assert_eq!(maze.start(), TriPoint::new(0, 0, Slot::A));
//! assert_eq!(maze.passages().len(), 6 * 6 - 1);
//! ```

pub mod config;
pub mod containers;
pub mod games;
