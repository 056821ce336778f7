/*
mistakes.rs

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

//! Manage the player's mistake counter.
//!
//! In the minesweeper game, uncovering a mine does not end the game. Instead, the mistake is
//! counted and the player can continue.

use log::debug;

use serde::{Deserialize, Serialize};

use crate::containers::tri_point::TriPoint;

/// Manage the mistake counter.
#[derive(Serialize, Deserialize, Debug, Clone, Default)]
pub struct Mistakes {
    // Number of mistakes.
    count: usize,

    // Cells the player uncovered by mistake, in the order of the mistakes.
    cells: Vec<TriPoint>,
}

impl Mistakes {
    /// Create a [`Mistakes`] object.
    pub fn new() -> Self {
        Self {
            count: 0,
            cells: Vec::new(),
        }
    }

    /// Reset the object.
    pub fn clear(&mut self) {
        self.count = 0;
        self.cells.clear();
    }

    /// Return the number of mistakes.
    pub fn count(&self) -> usize {
        self.count
    }

    /// Return the cells in error.
    pub fn cells(&self) -> &[TriPoint] {
        &self.cells
    }

    /// Record a mine that the player just uncovered.
    pub fn add_cell(&mut self, cell: TriPoint) {
        self.count += 1;
        self.cells.push(cell);
        debug!("Mine uncovered at {cell}: mistake count + 1 = {}", self.count);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::containers::slot::Slot;

    #[test]
    fn test_counter() {
        let mut m: Mistakes = Mistakes::new();
        assert_eq!(m.count(), 0);
        m.add_cell(TriPoint::new(1, 2, Slot::B));
        m.add_cell(TriPoint::new(0, 0, Slot::A));
        assert_eq!(m.count(), 2);
        assert_eq!(m.cells()[0], TriPoint::new(1, 2, Slot::B));
        m.clear();
        assert_eq!(m.count(), 0);
        assert!(m.cells().is_empty());
    }
}
