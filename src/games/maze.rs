/*
maze.rs

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

//! Generate random rectangular mazes.
//!
//! The maze is stored in a [`CornerGrid`] of booleans, where `true` means closed: a wall that
//! is present, or a cell that the generator has not visited yet.
//! Once the maze is generated, all the cells are open, and the open walls are the passages
//! between the cells.
//! The corners are always closed.

use log::debug;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::time::Instant;

use super::seed::Seed;
use crate::containers::corners::CornerGrid;
use crate::containers::direction::Direction;
use crate::containers::errors::GridError;
use crate::containers::grid::{Point, RectGrid};

/// Order in which the neighbours of a cell are considered: x+1, y+1, x-1, y-1.
const OPTION_DIRECTIONS: [Direction; 4] = [
    Direction::Right,
    Direction::Down,
    Direction::Left,
    Direction::Up,
];

/// [`RectMaze`] object.
#[derive(Debug, Clone)]
pub struct RectMaze {
    /// Cells, walls, and corners of the maze.
    grid: CornerGrid<bool, bool, bool>,

    /// Cell where the generation started.
    start: Point,

    /// Last cell of the longest backtracking stack.
    end: Point,

    /// Number of iterations it took to generate the maze.
    pub iteration: usize,

    /// Duration in seconds it took to generate the maze.
    pub duration: f32,
}

impl RectMaze {
    /// Create a [`RectMaze`] object and generate a random maze.
    ///
    /// # Errors
    ///
    /// The width and the height must be at least 1.
    pub fn new(width: usize, height: usize) -> Result<Self, GridError> {
        Self::with_rng(width, height, &mut rand::rng())
    }

    /// Create a [`RectMaze`] object and generate a reproducible maze from the seed.
    pub fn with_seed(
        width: usize,
        height: usize,
        seed: impl Into<Seed>,
    ) -> Result<Self, GridError> {
        let seed: Seed = seed.into();
        debug!("Maze seed = {seed}");
        let mut rng: StdRng = StdRng::seed_from_u64(seed.to_u64());
        Self::with_rng(width, height, &mut rng)
    }

    /// Create a [`RectMaze`] object and generate a maze by using the provided random number
    /// generator.
    pub fn with_rng<R: Rng + ?Sized>(
        width: usize,
        height: usize,
        rng: &mut R,
    ) -> Result<Self, GridError> {
        let start: Point = Point::new(0, 0);
        let mut maze: Self = Self {
            grid: CornerGrid::new(width, height, true, true, true)?,
            start,
            end: start,
            iteration: 0,
            duration: 0.0,
        };
        maze.generate(rng)?;
        Ok(maze)
    }

    /// Carve the passages with a randomized depth-first search.
    fn generate<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Result<(), GridError> {
        let begin: Instant = Instant::now();
        debug!(
            "Generating a {}x{} maze from {}",
            self.width(),
            self.height(),
            self.start
        );

        let grid: &mut RectGrid<bool, bool> = self.grid.grid_mut();
        let mut stack: Vec<Point> = Vec::with_capacity(grid.width() * grid.height());
        let mut biggest_stack: usize = 0;

        grid.set(self.start, false)?;
        stack.push(self.start);
        while let Some(&current) = stack.last() {
            self.iteration += 1;
            let options: Vec<Point> = Self::find_options(grid, current);
            if options.is_empty() {
                if stack.len() > biggest_stack {
                    biggest_stack = stack.len();
                    self.end = current;
                }
                stack.pop();
                continue;
            }

            let next: Point = options[rng.random_range(0..options.len())];
            let direction: Direction = grid.calc_direction(current, next)?;
            grid.set_wall(current, direction, false)?;
            grid.set(next, false)?;
            stack.push(next);
        }

        self.duration = begin.elapsed().as_secs_f32();
        debug!(
            "End = {}  Iterations = {}  Duration = {}",
            self.end, self.iteration, self.duration
        );
        Ok(())
    }

    /// Return the neighbours of the cell that have not been visited yet.
    fn find_options(grid: &RectGrid<bool, bool>, current: Point) -> Vec<Point> {
        OPTION_DIRECTIONS
            .iter()
            .filter_map(|d| grid.neighbour(current, *d))
            .filter(|p| matches!(grid.get(*p), Ok(true)))
            .collect()
    }

    pub fn width(&self) -> usize {
        self.grid.grid().width()
    }

    pub fn height(&self) -> usize {
        self.grid.grid().height()
    }

    pub fn start(&self) -> Point {
        self.start
    }

    pub fn end(&self) -> Point {
        self.end
    }

    /// Access the cells, walls, and corners of the maze.
    pub fn grid(&self) -> &CornerGrid<bool, bool, bool> {
        &self.grid
    }

    /// Whether the cell has been visited by the generator. All the cells of a generated maze are
    /// open.
    pub fn is_open(&self, cell: Point) -> Result<bool, GridError> {
        Ok(!*self.grid.grid().get(cell)?)
    }

    /// Whether the wall of the cell in the given direction is present.
    pub fn wall(&self, cell: Point, direction: Direction) -> Result<bool, GridError> {
        self.grid.grid().wall(cell, direction).copied()
    }

    /// Whether the wall starting at the corner in the given direction is present.
    pub fn wall_from_corner(&self, corner: Point, direction: Direction) -> Result<bool, GridError> {
        self.grid.wall_from_corner(corner, direction).copied()
    }

    /// Value of a corner of the cell.
    pub fn corner(
        &self,
        cell: Point,
        vertical: Direction,
        horizontal: Direction,
    ) -> Result<bool, GridError> {
        self.grid.corner(cell, vertical, horizontal).copied()
    }

    /// Whether the cell diagonally adjacent to the corner is open.
    pub fn cell_from_corner(
        &self,
        corner: Point,
        vertical: Direction,
        horizontal: Direction,
    ) -> Result<bool, GridError> {
        Ok(!*self.grid.cell_from_corner(corner, vertical, horizontal)?)
    }

    /// Return the pairs of adjacent cells with no wall between them.
    /// Each pair is listed once, the second cell being at the right or below the first cell.
    pub fn passages(&self) -> Vec<(Point, Point)> {
        let grid: &RectGrid<bool, bool> = self.grid.grid();
        let mut passages: Vec<(Point, Point)> = Vec::new();
        for p in grid.points() {
            for direction in [Direction::Right, Direction::Down] {
                if let Some(n) = grid.neighbour(p, direction)
                    && matches!(grid.wall(p, direction), Ok(false))
                {
                    passages.push((p, n));
                }
            }
        }
        passages
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    fn reachable(maze: &RectMaze) -> HashSet<Point> {
        let mut seen: HashSet<Point> = HashSet::from([maze.start()]);
        let mut todo: Vec<Point> = vec![maze.start()];
        while let Some(p) = todo.pop() {
            for d in Direction::ALL {
                if let Some(n) = maze.grid().grid().neighbour(p, d)
                    && !maze.wall(p, d).unwrap()
                    && seen.insert(n)
                {
                    todo.push(n);
                }
            }
        }
        seen
    }

    #[test]
    fn test_spanning_tree() {
        for seed in 0..20u64 {
            let maze: RectMaze = RectMaze::with_seed(7, 5, seed).unwrap();
            assert_eq!(maze.passages().len(), 7 * 5 - 1);
            assert_eq!(reachable(&maze).len(), 7 * 5);
            for p in maze.grid().grid().points() {
                assert!(maze.is_open(p).unwrap());
            }
        }
    }

    #[test]
    fn test_border_stays_closed() {
        let maze: RectMaze = RectMaze::new(6, 4).unwrap();
        for p in maze.grid().grid().points() {
            for d in Direction::ALL {
                if maze.grid().grid().neighbour(p, d).is_none() {
                    assert!(maze.wall(p, d).unwrap(), "{p} {d:?}");
                }
            }
        }
        assert!(maze.corner(Point::new(0, 0), Direction::Up, Direction::Left).unwrap());
        assert!(maze.wall_from_corner(Point::new(0, 0), Direction::Right).unwrap());
    }

    #[test]
    fn test_reproducible() {
        let m1: RectMaze = RectMaze::with_seed(9, 9, "labyrinth").unwrap();
        let m2: RectMaze = RectMaze::with_seed(9, 9, "labyrinth").unwrap();
        assert_eq!(m1.passages(), m2.passages());
        assert_eq!(m1.end(), m2.end());
    }

    #[test]
    fn test_small_mazes() {
        let maze: RectMaze = RectMaze::new(1, 1).unwrap();
        assert_eq!(maze.start(), maze.end());
        assert!(maze.passages().is_empty());

        let maze: RectMaze = RectMaze::new(3, 1).unwrap();
        assert_eq!(maze.end(), Point::new(2, 0));
        assert_eq!(maze.passages().len(), 2);

        assert!(matches!(
            RectMaze::new(0, 3),
            Err(GridError::InvalidSize { .. })
        ));
    }
}
