/*
config.rs

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

//! Build-time configuration and game constants.

pub static VERSION: &str = env!("CARGO_PKG_VERSION");
pub static COPYRIGHT_NOTICE: &str = concat!(
    env!("CARGO_PKG_VERSION"),
    "
Copyright 2025 Hervé Quatremain
License GPLv3+: GNU GPL version 3 or later <https://gnu.org/licenses/gpl.html>.
This is free software: you are free to change and redistribute it.
There is NO WARRANTY, to the extent permitted by law."
);

/// Smallest minesweeper board.
pub const MIN_MINESWEEPER_SIZE: usize = 5;

/// Size of the minesweeper board when none is given.
pub const DEFAULT_MINESWEEPER_SIZE: usize = 10;

/// Percentage of mines, applied to the number of cells by whole hundreds.
pub const MINE_PERCENT: usize = 15;

pub const DEFAULT_MAZE_WIDTH: usize = 20;
pub const DEFAULT_MAZE_HEIGHT: usize = 10;
pub const DEFAULT_TRI_MAZE_SIZE: usize = 12;
