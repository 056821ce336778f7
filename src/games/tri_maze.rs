/*
tri_maze.rs

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

//! Generate random triangular mazes.
//!
//! The maze is stored in a [`TriGrid`] of booleans, where `true` means closed.
//! The generation always starts from the top triangle.

use log::debug;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::time::Instant;

use super::seed::Seed;
use crate::containers::direction::Direction;
use crate::containers::errors::GridError;
use crate::containers::slot::Slot;
use crate::containers::tri_grid::TriGrid;
use crate::containers::tri_point::TriPoint;

/// [`TriMaze`] object.
#[derive(Debug, Clone)]
pub struct TriMaze {
    /// Triangles and walls of the maze.
    grid: TriGrid<bool, bool>,

    /// Seed used to generate the maze, if one was provided.
    seed: Option<u64>,

    start: TriPoint,
    end: TriPoint,

    /// Number of iterations it took to generate the maze.
    pub iteration: usize,

    /// Duration in seconds it took to generate the maze.
    pub duration: f32,
}

impl TriMaze {
    /// Create a [`TriMaze`] object and generate a random maze.
    ///
    /// # Errors
    ///
    /// The size must be at least 1.
    pub fn new(size: usize) -> Result<Self, GridError> {
        Self::generate_maze(size, None, &mut rand::rng())
    }

    /// Create a [`TriMaze`] object and generate a reproducible maze from the seed.
    pub fn with_seed(size: usize, seed: impl Into<Seed>) -> Result<Self, GridError> {
        let seed: Seed = seed.into();
        let value: u64 = seed.to_u64();
        debug!("Maze seed = {seed} ({value})");
        let mut rng: StdRng = StdRng::seed_from_u64(value);
        Self::generate_maze(size, Some(value), &mut rng)
    }

    /// Create a [`TriMaze`] object and generate a maze by using the provided random number
    /// generator.
    pub fn with_rng<R: Rng + ?Sized>(size: usize, rng: &mut R) -> Result<Self, GridError> {
        Self::generate_maze(size, None, rng)
    }

    fn generate_maze<R: Rng + ?Sized>(
        size: usize,
        seed: Option<u64>,
        rng: &mut R,
    ) -> Result<Self, GridError> {
        let start: TriPoint = TriPoint::new(0, 0, Slot::A);
        let mut maze: Self = Self {
            grid: TriGrid::new(size, true, true)?,
            seed,
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
        debug!("Generating a maze of size {}", self.size());

        let mut stack: Vec<TriPoint> = Vec::with_capacity(self.grid.cell_count());
        let mut biggest_stack: usize = 0;

        self.grid.set(self.start, false)?;
        stack.push(self.start);
        while let Some(&current) = stack.last() {
            self.iteration += 1;
            let options: Vec<TriPoint> = self.find_options(current);
            if options.is_empty() {
                if stack.len() > biggest_stack {
                    biggest_stack = stack.len();
                    self.end = current;
                }
                stack.pop();
                continue;
            }

            let next: TriPoint = options[rng.random_range(0..options.len())];
            let direction: Direction = self.grid.calc_direction(current, next)?;
            self.grid.set_wall(current, direction, false)?;
            self.grid.set(next, false)?;
            stack.push(next);
        }

        self.duration = begin.elapsed().as_secs_f32();
        debug!(
            "End = {}  Iterations = {}  Duration = {}",
            self.end, self.iteration, self.duration
        );
        Ok(())
    }

    /// Return the triangles sharing a wall with the given triangle that have not been visited
    /// yet.
    fn find_options(&self, current: TriPoint) -> Vec<TriPoint> {
        self.grid
            .edge_neighbours(current)
            .into_iter()
            .filter(|p| matches!(self.grid.get(*p), Ok(true)))
            .collect()
    }

    pub fn size(&self) -> usize {
        self.grid.size()
    }

    /// Number provided to seed the random number generator, if any.
    pub fn seed(&self) -> Option<u64> {
        self.seed
    }

    pub fn start(&self) -> TriPoint {
        self.start
    }

    pub fn end(&self) -> TriPoint {
        self.end
    }

    /// Access the triangles and walls of the maze.
    pub fn grid(&self) -> &TriGrid<bool, bool> {
        &self.grid
    }

    /// Whether the triangle has been visited by the generator.
    pub fn is_open(&self, point: TriPoint) -> Result<bool, GridError> {
        Ok(!*self.grid.get(point)?)
    }

    /// Whether the wall of the triangle in the given direction is present.
    pub fn wall(&self, point: TriPoint, direction: Direction) -> Result<bool, GridError> {
        self.grid.wall(point, direction).copied()
    }

    /// Return the pairs of adjacent triangles with no wall between them.
    /// Each pair is listed once, the triangle in slot `A` first.
    pub fn passages(&self) -> Vec<(TriPoint, TriPoint)> {
        let mut passages: Vec<(TriPoint, TriPoint)> = Vec::new();
        for p in self.grid.points().filter(|p| p.slot.is_a()) {
            for n in self.grid.edge_neighbours(p) {
                if let Ok(direction) = self.grid.calc_direction(p, n)
                    && matches!(self.grid.wall(p, direction), Ok(false))
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

    fn reachable(maze: &TriMaze) -> HashSet<TriPoint> {
        let mut seen: HashSet<TriPoint> = HashSet::from([maze.start()]);
        let mut todo: Vec<TriPoint> = vec![maze.start()];
        while let Some(p) = todo.pop() {
            for n in maze.grid().edge_neighbours(p) {
                let direction: Direction = maze.grid().calc_direction(p, n).unwrap();
                if !maze.wall(p, direction).unwrap() && seen.insert(n) {
                    todo.push(n);
                }
            }
        }
        seen
    }

    #[test]
    fn test_spanning_tree() {
        for seed in 0..20u64 {
            let maze: TriMaze = TriMaze::with_seed(8, seed).unwrap();
            assert_eq!(maze.passages().len(), 8 * 8 - 1);
            assert_eq!(reachable(&maze).len(), 8 * 8);
            assert_eq!(maze.seed(), Some(seed));
        }
    }

    #[test]
    fn test_border_stays_closed() {
        let maze: TriMaze = TriMaze::new(6).unwrap();
        for i in 0..6 {
            assert!(maze.wall(TriPoint::new(0, i, Slot::A), Direction::Left).unwrap());
            assert!(maze.wall(TriPoint::new(i, i, Slot::A), Direction::Right).unwrap());
            assert!(maze.wall(TriPoint::new(i, 5, Slot::A), Direction::Down).unwrap());
        }
        assert_eq!(maze.seed(), None);
    }

    #[test]
    fn test_single_cell() {
        let maze: TriMaze = TriMaze::new(1).unwrap();
        assert_eq!(maze.start(), TriPoint::new(0, 0, Slot::A));
        assert_eq!(maze.end(), maze.start());
        assert!(maze.passages().is_empty());
        assert!(TriMaze::new(0).is_err());
    }

    #[test]
    fn test_reproducible() {
        let m1: TriMaze = TriMaze::with_seed(12, "triangle").unwrap();
        let m2: TriMaze = TriMaze::with_seed(12, "triangle").unwrap();
        assert_eq!(m1.passages(), m2.passages());
        assert_eq!(m1.end(), m2.end());
        assert_eq!(m1.seed(), m2.seed());

        let mut rng: StdRng = StdRng::seed_from_u64(3);
        let m3: TriMaze = TriMaze::with_rng(12, &mut rng).unwrap();
        let m4: TriMaze = TriMaze::with_seed(12, 3u64).unwrap();
        assert_eq!(m3.passages(), m4.passages());
    }
}
