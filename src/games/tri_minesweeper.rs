/*
tri_minesweeper.rs

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

//! Minesweeper game on a triangular board.
//!
//! Each triangle touches up to twelve other triangles, by an edge or by a vertex.
//! The number displayed in an uncovered triangle is the number of mines among these neighbours.
//!
//! The game has two phases. Before the first uncover, the board holds no mine. The first
//! uncover places the mines, away from the uncovered triangle and its neighbours, so that the
//! first move never hits a mine.
//!
//! Uncovering a mine counts as a mistake, but does not end the game.
//! The game is over when every triangle is either uncovered or flagged, and the number of flags
//! matches the number of mines.
//!
//! Uncovering, flagging, or marking a triangle that is already uncovered acts on all its
//! neighbours at once (a chord).

use log::{debug, warn};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use super::minesweeper_cell::{BoardCell, CoverState};
use super::mistakes::Mistakes;
use super::seed::Seed;
use crate::config::{MINE_PERCENT, MIN_MINESWEEPER_SIZE};
use crate::containers::direction::Direction;
use crate::containers::errors::GridError;
use crate::containers::slot::Slot;
use crate::containers::tri_grid::TriGrid;
use crate::containers::tri_point::TriPoint;

/// [`TriMinesweeper`] object.
#[derive(Debug, Clone)]
pub struct TriMinesweeper {
    /// Mines and mine counts.
    board: TriGrid<BoardCell, ()>,

    /// What the player sees.
    cover: TriGrid<CoverState, ()>,

    total_mines: usize,

    /// Number of flagged cells.
    flags: usize,

    mistakes: Mistakes,

    /// Whether the mines have been placed.
    is_generated: bool,

    rng: StdRng,

    /// Cell the player commands apply to.
    cursor: TriPoint,
}

impl TriMinesweeper {
    /// Create a [`TriMinesweeper`] object.
    ///
    /// # Errors
    ///
    /// The size must be at least [`MIN_MINESWEEPER_SIZE`].
    pub fn new(size: usize) -> Result<Self, GridError> {
        Self::with_rng(size, StdRng::from_os_rng())
    }

    /// Create a [`TriMinesweeper`] object that places its mines reproducibly.
    pub fn with_seed(size: usize, seed: impl Into<Seed>) -> Result<Self, GridError> {
        let seed: Seed = seed.into();
        debug!("Minesweeper seed = {seed}");
        Self::with_rng(size, StdRng::seed_from_u64(seed.to_u64()))
    }

    /// Create a [`TriMinesweeper`] object that uses the given random number generator to place
    /// its mines.
    pub fn with_rng(size: usize, rng: StdRng) -> Result<Self, GridError> {
        if size < MIN_MINESWEEPER_SIZE {
            return Err(GridError::InvalidSize {
                size,
                min: MIN_MINESWEEPER_SIZE,
            });
        }
        let total_mines: usize = size * size / 100 * MINE_PERCENT;
        debug!("Minesweeper of size {size} with {total_mines} mines");
        Ok(Self {
            board: TriGrid::new(size, BoardCell::default(), ())?,
            cover: TriGrid::new(size, CoverState::Covered, ())?,
            total_mines,
            flags: 0,
            mistakes: Mistakes::new(),
            is_generated: false,
            rng,
            cursor: TriGrid::<BoardCell, ()>::center_point(size),
        })
    }

    /// Create a [`TriMinesweeper`] object with the mines at the given positions.
    /// Duplicated positions are placed only once.
    pub fn with_mines(size: usize, mines: &[TriPoint]) -> Result<Self, GridError> {
        let mut game: Self = Self::with_rng(size, StdRng::seed_from_u64(0))?;
        game.total_mines = 0;
        for mine in mines {
            if !game.board.get(*mine)?.is_mine {
                game.place_mine(*mine)?;
                game.total_mines += 1;
            }
        }
        game.is_generated = true;
        Ok(game)
    }

    pub fn size(&self) -> usize {
        self.board.size()
    }

    pub fn cursor(&self) -> TriPoint {
        self.cursor
    }

    pub fn total_mines(&self) -> usize {
        self.total_mines
    }

    pub fn flags(&self) -> usize {
        self.flags
    }

    /// Number of mines that are not flagged yet. Negative when the player placed too many flags.
    pub fn remaining_mines(&self) -> i64 {
        self.total_mines as i64 - self.flags as i64
    }

    /// Number of mines the player uncovered.
    pub fn mistakes(&self) -> usize {
        self.mistakes.count()
    }

    /// Mines the player uncovered, in order.
    pub fn mistake_cells(&self) -> &[TriPoint] {
        self.mistakes.cells()
    }

    /// Whether the mines have been placed.
    pub fn is_generated(&self) -> bool {
        self.is_generated
    }

    /// Access the mines and mine counts.
    pub fn board(&self) -> &TriGrid<BoardCell, ()> {
        &self.board
    }

    pub fn cover_state(&self, point: TriPoint) -> Result<CoverState, GridError> {
        self.cover.get(point).copied()
    }

    pub fn board_cell(&self, point: TriPoint) -> Result<BoardCell, GridError> {
        self.board.get(point).copied()
    }

    pub fn is_mine(&self, point: TriPoint) -> Result<bool, GridError> {
        Ok(self.board.get(point)?.is_mine)
    }

    pub fn mines_nearby_of(&self, point: TriPoint) -> Result<u8, GridError> {
        Ok(self.board.get(point)?.mines_nearby)
    }

    /// Move the cursor to the neighbouring cell in the given direction.
    ///
    /// Moving up or down also changes the slot, so that the cursor crosses the horizontal wall
    /// of the current cell, or reaches the cell just below or above its tip.
    /// Nothing happens if the destination is outside the board.
    pub fn move_cursor(&mut self, direction: Direction) {
        let c: TriPoint = self.cursor;
        let target: TriPoint = match (direction, c.slot) {
            (Direction::Up, Slot::A) => c.translate(-1, -1, Slot::B),
            (Direction::Up, Slot::B) => c.translate(0, -1, Slot::A),
            (Direction::Down, Slot::A) => c.translate(0, 1, Slot::B),
            (Direction::Down, Slot::B) => c.translate(1, 1, Slot::A),
            (Direction::Left, slot) => c.translate(-1, 0, slot),
            (Direction::Right, slot) => c.translate(1, 0, slot),
        };
        if self.board.contains(target) {
            self.cursor = target;
        }
    }

    /// Move the cursor to the other slot of the same position, if it exists.
    pub fn toggle_slot(&mut self) {
        let target: TriPoint = self.cursor.with_other_slot();
        if self.board.contains(target) {
            self.cursor = target;
        }
    }

    /// Flag or unflag the cell under the cursor.
    pub fn toggle_flag(&mut self) -> Result<(), GridError> {
        self.toggle_flag_at(self.cursor)
    }

    /// Mark or unmark the cell under the cursor.
    pub fn toggle_mark(&mut self) -> Result<(), GridError> {
        self.toggle_mark_at(self.cursor)
    }

    /// Uncover the cell under the cursor.
    pub fn uncover(&mut self) -> Result<(), GridError> {
        self.uncover_at(self.cursor)
    }

    /// Flag or unflag the given cell.
    ///
    /// On an uncovered cell, flag all the covered and marked neighbours. If all the neighbours
    /// are already flagged or uncovered, then unflag them instead.
    pub fn toggle_flag_at(&mut self, point: TriPoint) -> Result<(), GridError> {
        match self.cover_state(point)? {
            CoverState::Covered | CoverState::Marked => {
                self.cover.set(point, CoverState::Flagged)?;
                self.flags += 1;
            }
            CoverState::Flagged => {
                self.cover.set(point, CoverState::Covered)?;
                self.flags -= 1;
            }
            CoverState::Uncovered => {
                let all_flagged: bool = self
                    .neighbours_at_cover_state(point, CoverState::Flagged)?
                    > 0
                    && self.neighbours_at_cover_state(point, CoverState::Covered)? == 0
                    && self.neighbours_at_cover_state(point, CoverState::Marked)? == 0;
                for n in self.board.neighbours(point) {
                    match self.cover_state(n)? {
                        CoverState::Covered | CoverState::Marked => {
                            self.cover.set(n, CoverState::Flagged)?;
                            self.flags += 1;
                        }
                        CoverState::Flagged if all_flagged => {
                            self.cover.set(n, CoverState::Covered)?;
                            self.flags -= 1;
                        }
                        CoverState::Flagged | CoverState::Uncovered => (),
                    }
                }
            }
        }
        Ok(())
    }

    /// Mark or unmark the given cell.
    ///
    /// On an uncovered cell, mark all the covered neighbours. If no neighbour is covered and at
    /// least one is marked, then unmark them instead.
    pub fn toggle_mark_at(&mut self, point: TriPoint) -> Result<(), GridError> {
        match self.cover_state(point)? {
            CoverState::Covered => self.cover.set(point, CoverState::Marked)?,
            CoverState::Flagged => {
                self.cover.set(point, CoverState::Marked)?;
                self.flags -= 1;
            }
            CoverState::Marked => self.cover.set(point, CoverState::Covered)?,
            CoverState::Uncovered => {
                let all_marked: bool = self
                    .neighbours_at_cover_state(point, CoverState::Marked)?
                    > 0
                    && self.neighbours_at_cover_state(point, CoverState::Covered)? == 0;
                for n in self.board.neighbours(point) {
                    match self.cover_state(n)? {
                        CoverState::Covered => self.cover.set(n, CoverState::Marked)?,
                        CoverState::Marked if all_marked => {
                            self.cover.set(n, CoverState::Covered)?
                        }
                        CoverState::Marked | CoverState::Flagged | CoverState::Uncovered => (),
                    }
                }
            }
        }
        Ok(())
    }

    /// Uncover the given cell. The first uncover of the game places the mines.
    ///
    /// Uncovering a cell with no mine nearby also uncovers its neighbours, recursively.
    /// On an already uncovered cell, uncover all the neighbours when the flags around account
    /// for all the nearby mines, or when at least one neighbour is marked.
    pub fn uncover_at(&mut self, point: TriPoint) -> Result<(), GridError> {
        let state: CoverState = self.cover_state(point)?;
        if !self.is_generated {
            self.generate(point)?;
        }
        match state {
            CoverState::Covered => self.uncover_chain(point),
            CoverState::Uncovered => {
                let flagged: usize = self.neighbours_at_cover_state(point, CoverState::Flagged)?;
                let marked: usize = self.neighbours_at_cover_state(point, CoverState::Marked)?;
                let covered: usize = self.neighbours_at_cover_state(point, CoverState::Covered)?;
                let nearby: usize = self.mines_nearby_of(point)?.into();
                if (flagged + self.uncovered_mines_around(point)? == nearby || marked > 0)
                    && covered > 0
                {
                    debug!("Uncovering the neighbours of {point}");
                    for n in self.board.neighbours(point) {
                        self.uncover_chain(n)?;
                    }
                }
                Ok(())
            }
            CoverState::Flagged | CoverState::Marked => Ok(()),
        }
    }

    /// Uncover the cell, and the neighbours of the cells with no mine nearby.
    fn uncover_chain(&mut self, start: TriPoint) -> Result<(), GridError> {
        let mut stack: Vec<TriPoint> = vec![start];
        while let Some(point) = stack.pop() {
            if self.cover_state(point)? != CoverState::Covered {
                continue;
            }
            self.cover.set(point, CoverState::Uncovered)?;
            let cell: BoardCell = self.board_cell(point)?;
            if cell.is_mine {
                self.mistakes.add_cell(point);
            } else if cell.mines_nearby == 0 {
                // Reversed so that the first neighbour is processed first
                stack.extend(self.board.neighbours(point).into_iter().rev());
            }
        }
        Ok(())
    }

    /// Place the mines randomly, but not on the given cell or its neighbours.
    fn generate(&mut self, first: TriPoint) -> Result<(), GridError> {
        let excluded: Vec<TriPoint> = self.board.neighbours(first);
        let mut candidates: Vec<TriPoint> = self
            .board
            .points()
            .filter(|p| *p != first && !excluded.contains(p))
            .collect();
        if candidates.len() < self.total_mines {
            warn!(
                "Only {} cells available for {} mines",
                candidates.len(),
                self.total_mines
            );
            self.total_mines = candidates.len();
        }

        for _ in 0..self.total_mines {
            let i: usize = self.rng.random_range(0..candidates.len());
            let mine: TriPoint = candidates.swap_remove(i);
            self.place_mine(mine)?;
        }
        self.is_generated = true;
        debug!("{} mines placed away from {first}", self.total_mines);
        Ok(())
    }

    /// Set a mine and update the mine counts of its neighbours.
    fn place_mine(&mut self, mine: TriPoint) -> Result<(), GridError> {
        let mut cell: BoardCell = self.board_cell(mine)?;
        cell.is_mine = true;
        self.board.set(mine, cell)?;
        for n in self.board.neighbours(mine) {
            let mut cell: BoardCell = self.board_cell(n)?;
            cell.mines_nearby += 1;
            self.board.set(n, cell)?;
        }
        Ok(())
    }

    /// Number of covered cells, in both slots.
    pub fn covered_cells(&self) -> usize {
        self.cover
            .points()
            .filter(|p| matches!(self.cover.get(*p), Ok(CoverState::Covered)))
            .count()
    }

    /// Whether all the mines are flagged and all the other cells uncovered.
    pub fn game_is_over(&self) -> bool {
        self.remaining_mines() == 0 && self.covered_cells() == 0
    }

    /// Whether the player placed more flags around the cell than it has mines nearby.
    /// Marked neighbours count as extra flags when the flags already match the mine count.
    pub fn too_many_flags(&self, point: TriPoint) -> Result<bool, GridError> {
        if self.is_mine(point)? || self.cover_state(point)? != CoverState::Uncovered {
            return Ok(false);
        }
        let flagged: usize = self.neighbours_at_cover_state(point, CoverState::Flagged)?;
        let nearby: usize = self.mines_nearby_of(point)?.into();
        Ok(flagged > nearby
            || (flagged == nearby
                && self.neighbours_at_cover_state(point, CoverState::Marked)? > 0))
    }

    /// Number of neighbours of the cell in the given state.
    pub fn neighbours_at_cover_state(
        &self,
        point: TriPoint,
        state: CoverState,
    ) -> Result<usize, GridError> {
        let mut count: usize = 0;
        for n in self.cover.neighbours(point) {
            if self.cover_state(n)? == state {
                count += 1;
            }
        }
        Ok(count)
    }

    fn uncovered_mines_around(&self, point: TriPoint) -> Result<usize, GridError> {
        let mut count: usize = 0;
        for n in self.board.neighbours(point) {
            if self.is_mine(n)? && self.cover_state(n)? == CoverState::Uncovered {
                count += 1;
            }
        }
        Ok(count)
    }
}
