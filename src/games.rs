/*
games.rs

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

//! Games built on top of the grid containers.
//!
//! * [`maze::RectMaze`] and [`tri_maze::TriMaze`] generate perfect mazes (one path between any
//!   two cells) with a randomized depth-first search.
//!   The start of the maze is always the first cell, and the end is the last cell of the
//!   longest backtracking stack seen during the generation.
//!
//! * [`tri_minesweeper::TriMinesweeper`] is a minesweeper game on a triangular board.
//!   Mines are placed at the first uncover, away from the uncovered cell.
//!
//! Random behavior can be reproduced by providing a [`seed::Seed`] or a random number generator.

pub mod maze;
pub mod minesweeper_cell;
pub mod mistakes;
pub mod seed;
pub mod tri_maze;
pub mod tri_minesweeper;
