/*
corners.rs

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

//! Rectangular grid with corner values.
//!
//! A [`CornerGrid`] is a [`RectGrid`] plus one value for each point where the walls meet.
//! The corner `(x, y)` sits at the backing position `(2x, 2y)`, which is the upper left corner
//! of the cell `(x, y)`. Corner coordinates therefore range from 0 to the grid width and height
//! (included).

use super::direction::Direction;
use super::errors::GridError;
use super::grid::{Point, RectGrid, Wall};

/// Rectangular grid with cell values of type `C`, wall values of type `W`, and corner values of
/// type `K`.
#[derive(Debug, Clone)]
pub struct CornerGrid<C, W, K> {
    /// Cells and walls.
    grid: RectGrid<C, W>,

    /// Corner values: `height + 1` rows of `width + 1` corners.
    corners: Vec<K>,
}

/// Check that the two directions designate a corner of a cell, and return the corner offset
/// `(dx, dy)` from the upper left corner of the cell.
fn corner_offset(vertical: Direction, horizontal: Direction) -> Result<(usize, usize), GridError> {
    match (vertical, horizontal) {
        (Direction::Up, Direction::Left) => Ok((0, 0)),
        (Direction::Up, Direction::Right) => Ok((1, 0)),
        (Direction::Down, Direction::Left) => Ok((0, 1)),
        (Direction::Down, Direction::Right) => Ok((1, 1)),
        _ => Err(GridError::InvalidCorner {
            vertical,
            horizontal,
        }),
    }
}

impl<C: Clone, W: Clone, K: Clone> CornerGrid<C, W, K> {
    /// Create a [`CornerGrid`] object with all the cells, walls, and corners set to the given
    /// values.
    pub fn new(
        width: usize,
        height: usize,
        default_cell: C,
        default_wall: W,
        default_corner: K,
    ) -> Result<Self, GridError> {
        let grid: RectGrid<C, W> = RectGrid::new(width, height, default_cell, default_wall)?;
        Ok(Self {
            grid,
            corners: vec![default_corner; (width + 1) * (height + 1)],
        })
    }

    /// Access the underlying cells and walls.
    pub fn grid(&self) -> &RectGrid<C, W> {
        &self.grid
    }

    /// Access the underlying cells and walls for modification.
    pub fn grid_mut(&mut self) -> &mut RectGrid<C, W> {
        &mut self.grid
    }

    /// Whether the corner coordinates are in the bounds of the grid.
    pub fn contains_corner(&self, corner: Point) -> bool {
        corner.x <= self.grid.width() && corner.y <= self.grid.height()
    }

    fn corner_index(&self, corner: Point) -> Result<usize, GridError> {
        if self.contains_corner(corner) {
            Ok(corner.y * (self.grid.width() + 1) + corner.x)
        } else {
            Err(GridError::OutOfBounds {
                x: corner.x,
                y: corner.y,
                width: self.grid.width(),
                height: self.grid.height(),
            })
        }
    }

    /// Coordinates of the corner of the cell designated by the two directions.
    pub fn corner_of(
        &self,
        cell: Point,
        vertical: Direction,
        horizontal: Direction,
    ) -> Result<Point, GridError> {
        let (dx, dy) = corner_offset(vertical, horizontal)?;
        if !self.grid.contains(cell) {
            return Err(GridError::OutOfBounds {
                x: cell.x,
                y: cell.y,
                width: self.grid.width(),
                height: self.grid.height(),
            });
        }
        Ok(Point::new(cell.x + dx, cell.y + dy))
    }

    /// Set all the cells, walls, and corners to the given values.
    pub fn fill(&mut self, default_cell: C, default_wall: W, default_corner: K) {
        self.grid.fill(default_cell, default_wall);
        self.corners.fill(default_corner);
    }

    /// Return the value of the corner at the given corner coordinates.
    pub fn corner_at(&self, corner: Point) -> Result<&K, GridError> {
        let i: usize = self.corner_index(corner)?;
        Ok(&self.corners[i])
    }

    /// Set the value of the corner at the given corner coordinates.
    pub fn set_corner_at(&mut self, corner: Point, value: K) -> Result<(), GridError> {
        let i: usize = self.corner_index(corner)?;
        self.corners[i] = value;
        Ok(())
    }

    /// Return the value of a corner of the cell.
    pub fn corner(
        &self,
        cell: Point,
        vertical: Direction,
        horizontal: Direction,
    ) -> Result<&K, GridError> {
        self.corner_at(self.corner_of(cell, vertical, horizontal)?)
    }

    /// Set the value of a corner of the cell.
    pub fn set_corner(
        &mut self,
        cell: Point,
        vertical: Direction,
        horizontal: Direction,
        value: K,
    ) -> Result<(), GridError> {
        let corner: Point = self.corner_of(cell, vertical, horizontal)?;
        self.set_corner_at(corner, value)
    }

    /// Set the four corners of the cell to the given value.
    pub fn set_corners(&mut self, cell: Point, value: K) -> Result<(), GridError> {
        for vertical in [Direction::Up, Direction::Down] {
            for horizontal in [Direction::Left, Direction::Right] {
                self.set_corner(cell, vertical, horizontal, value.clone())?;
            }
        }
        Ok(())
    }

    /// Return the value of the cell diagonally adjacent to the corner in the given directions.
    pub fn cell_from_corner(
        &self,
        corner: Point,
        vertical: Direction,
        horizontal: Direction,
    ) -> Result<&C, GridError> {
        let (dx, dy) = corner_offset(vertical, horizontal)?;
        self.corner_index(corner)?;

        // The cell at the lower right of the corner has the same coordinates
        let x: Option<usize> = if dx == 0 { corner.x.checked_sub(1) } else { Some(corner.x) };
        let y: Option<usize> = if dy == 0 { corner.y.checked_sub(1) } else { Some(corner.y) };
        match (x, y) {
            (Some(x), Some(y)) => self.grid.get(Point::new(x, y)),
            _ => Err(GridError::OutOfBounds {
                x: corner.x,
                y: corner.y,
                width: self.grid.width(),
                height: self.grid.height(),
            }),
        }
    }

    fn wall_of_corner(&self, corner: Point, direction: Direction) -> Result<Wall, GridError> {
        self.corner_index(corner)?;
        Wall::of_corner(corner, direction).ok_or(GridError::OutOfBounds {
            x: corner.x,
            y: corner.y,
            width: self.grid.width(),
            height: self.grid.height(),
        })
    }

    /// Return the value of the wall starting at the corner in the given direction.
    pub fn wall_from_corner(&self, corner: Point, direction: Direction) -> Result<&W, GridError> {
        let wall: Wall = self.wall_of_corner(corner, direction)?;
        self.grid.wall_value(wall)
    }

    /// Set the value of the wall starting at the corner in the given direction.
    pub fn set_wall_from_corner(
        &mut self,
        corner: Point,
        direction: Direction,
        value: W,
    ) -> Result<(), GridError> {
        let wall: Wall = self.wall_of_corner(corner, direction)?;
        self.grid.set_wall_value(wall, value)
    }

    /// Set the walls starting at the corner to the given value.
    /// Walls outside the grid are ignored, so that corners on the border can be used.
    pub fn set_walls_from_corner(&mut self, corner: Point, value: W) -> Result<(), GridError> {
        self.corner_index(corner)?;
        for direction in Direction::ALL {
            if let Some(wall) = Wall::of_corner(corner, direction)
                && self.grid.wall_value(wall).is_ok()
            {
                self.grid.set_wall_value(wall, value.clone())?;
            }
        }
        Ok(())
    }

    /// Set the wall of the cell in the given direction, and the two corners at its ends.
    pub fn set_wall_and_corners(
        &mut self,
        cell: Point,
        direction: Direction,
        wall_value: W,
        corner_value: K,
    ) -> Result<(), GridError> {
        self.grid.set_wall(cell, direction, wall_value)?;
        if direction.is_vertical() {
            self.set_corner(cell, direction, direction.clockwise(), corner_value.clone())?;
            self.set_corner(cell, direction, direction.counter_clockwise(), corner_value)
        } else {
            self.set_corner(cell, direction.clockwise(), direction, corner_value.clone())?;
            self.set_corner(cell, direction.counter_clockwise(), direction, corner_value)
        }
    }

    /// Set all the corners on the border of the grid to the given value.
    pub fn set_border_corners(&mut self, value: K) {
        let width: usize = self.grid.width();
        let height: usize = self.grid.height();
        for x in 0..=width {
            self.corners[x] = value.clone();
            self.corners[height * (width + 1) + x] = value.clone();
        }
        for y in 0..=height {
            self.corners[y * (width + 1)] = value.clone();
            self.corners[y * (width + 1) + width] = value.clone();
        }
    }

    /// Set the walls and the corners on the border of the grid to the given values.
    pub fn set_border(&mut self, wall_value: W, corner_value: K) {
        self.grid.set_border(wall_value);
        self.set_border_corners(corner_value);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> CornerGrid<u8, u8, u8> {
        let mut grid: CornerGrid<u8, u8, u8> = CornerGrid::new(3, 2, 0, 0, 0).unwrap();
        for p in grid.grid().points().collect::<Vec<Point>>() {
            grid.grid_mut().set(p, (p.y * 3 + p.x) as u8 + 1).unwrap();
        }
        grid
    }

    #[test]
    fn test_corners_around_cell() {
        let mut grid: CornerGrid<u8, u8, u8> = sample();
        let cell: Point = Point::new(1, 1);
        grid.set_corner(cell, Direction::Down, Direction::Right, 4).unwrap();
        assert_eq!(*grid.corner_at(Point::new(2, 2)).unwrap(), 4);
        // Same corner, seen from the lower right corner of another cell
        assert_eq!(
            *grid
                .corner(Point::new(2, 1), Direction::Down, Direction::Left)
                .unwrap(),
            4
        );
        assert!(matches!(
            grid.corner(cell, Direction::Left, Direction::Right),
            Err(GridError::InvalidCorner { .. })
        ));
    }

    #[test]
    fn test_cell_from_corner() {
        let grid: CornerGrid<u8, u8, u8> = sample();
        let corner: Point = Point::new(1, 1);
        assert_eq!(*grid.cell_from_corner(corner, Direction::Up, Direction::Left).unwrap(), 1);
        assert_eq!(*grid.cell_from_corner(corner, Direction::Up, Direction::Right).unwrap(), 2);
        assert_eq!(*grid.cell_from_corner(corner, Direction::Down, Direction::Left).unwrap(), 4);
        assert_eq!(*grid.cell_from_corner(corner, Direction::Down, Direction::Right).unwrap(), 5);
        assert!(
            grid.cell_from_corner(Point::new(0, 0), Direction::Up, Direction::Left)
                .is_err()
        );
    }

    #[test]
    fn test_wall_from_corner() {
        let mut grid: CornerGrid<u8, u8, u8> = sample();
        let corner: Point = Point::new(1, 1);
        grid.set_wall_from_corner(corner, Direction::Up, 1).unwrap();
        grid.set_wall_from_corner(corner, Direction::Right, 2).unwrap();
        assert_eq!(*grid.grid().wall(Point::new(0, 0), Direction::Right).unwrap(), 1);
        assert_eq!(*grid.grid().wall(Point::new(1, 1), Direction::Up).unwrap(), 2);
        assert_eq!(*grid.wall_from_corner(corner, Direction::Left).unwrap(), 0);
        assert!(grid.wall_from_corner(Point::new(0, 0), Direction::Up).is_err());
        assert!(grid.wall_from_corner(Point::new(4, 0), Direction::Down).is_err());

        grid.set_walls_from_corner(Point::new(0, 0), 3).unwrap();
        assert_eq!(*grid.wall_from_corner(Point::new(0, 0), Direction::Down).unwrap(), 3);
        assert_eq!(*grid.wall_from_corner(Point::new(0, 0), Direction::Right).unwrap(), 3);
    }

    #[test]
    fn test_wall_and_corners() {
        let mut grid: CornerGrid<u8, u8, u8> = sample();
        grid.set_wall_and_corners(Point::new(0, 0), Direction::Right, 5, 6)
            .unwrap();
        assert_eq!(*grid.grid().wall(Point::new(1, 0), Direction::Left).unwrap(), 5);
        assert_eq!(*grid.corner_at(Point::new(1, 0)).unwrap(), 6);
        assert_eq!(*grid.corner_at(Point::new(1, 1)).unwrap(), 6);
        assert_eq!(*grid.corner_at(Point::new(0, 0)).unwrap(), 0);
    }

    #[test]
    fn test_border() {
        let mut grid: CornerGrid<u8, u8, u8> = sample();
        grid.set_border(1, 2);
        assert_eq!(*grid.corner_at(Point::new(0, 0)).unwrap(), 2);
        assert_eq!(*grid.corner_at(Point::new(3, 2)).unwrap(), 2);
        assert_eq!(*grid.corner_at(Point::new(1, 2)).unwrap(), 2);
        assert_eq!(*grid.corner_at(Point::new(1, 1)).unwrap(), 0);
        assert_eq!(*grid.grid().wall(Point::new(2, 1), Direction::Right).unwrap(), 1);
    }
}
