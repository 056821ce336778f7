/*
minesweeper_cell.rs

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

//! Cells of the minesweeper board.

/// Content of a board cell.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Default)]
pub struct BoardCell {
    pub is_mine: bool,

    /// Number of mines in the neighbouring cells (up to 12).
    pub mines_nearby: u8,
}

impl BoardCell {
    /// Create a [`BoardCell`] object.
    pub fn new(is_mine: bool, mines_nearby: u8) -> Self {
        Self {
            is_mine,
            mines_nearby,
        }
    }
}

/// What the player sees of a cell.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Default)]
pub enum CoverState {
    #[default]
    Covered,
    Uncovered,

    /// The player is sure the cell is a mine.
    Flagged,

    /// The player suspects the cell to be a mine.
    Marked,
}
