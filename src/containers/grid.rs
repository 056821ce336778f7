/*
grid.rs

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

//! Rectangular grid storing cell and wall values.
//!
//! The coordinates used by callers refer to the cells only.
//! Walls are addressed relative to a cell and a [`Direction`].
//!
//! Conceptually, the grid is a backing array of `(2 * width + 1) x (2 * height + 1)` positions
//! where a cell `(x, y)` sits at the backing position `(2x + 1, 2y + 1)`, and the walls around it
//! at one position away in each direction:
//!
//! ```text
//!  +---+---+
//!  | c | c |     + corner (both coordinates even)
//!  +---+---+     - | wall (exactly one coordinate even)
//!  | c | c |     c cell (both coordinates odd)
//!  +---+---+
//! ```
//!
//! Each role is stored in its own homogeneous vector indexed by logical coordinates, and
//! [`Position::from_backing`] decodes a backing position from its parity.
//! A wall between two cells is stored only once, so setting it from one cell is visible from the
//! other cell.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::direction::Direction;
use super::errors::GridError;

/// Coordinates of a cell (or of a corner) in a rectangular grid.
#[derive(Serialize, Deserialize, Debug, Copy, Clone, PartialEq, Eq, Hash, Default)]
pub struct Point {
    pub x: usize,
    pub y: usize,
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}/{}", self.x, self.y)
    }
}

impl Point {
    /// Create a [`Point`] object.
    pub fn new(x: usize, y: usize) -> Self {
        Self { x, y }
    }

    /// Return the point one step away in the given direction, or `None` if the step would lead
    /// to a negative coordinate.
    pub fn step(self, direction: Direction) -> Option<Point> {
        match direction {
            Direction::Up => self.y.checked_sub(1).map(|y| Point::new(self.x, y)),
            Direction::Down => Some(Point::new(self.x, self.y + 1)),
            Direction::Left => self.x.checked_sub(1).map(|x| Point::new(x, self.y)),
            Direction::Right => Some(Point::new(self.x + 1, self.y)),
        }
    }
}

/// Convert a cell coordinate to a backing coordinate.
pub fn convert(i: usize) -> usize {
    i * 2 + 1
}

/// Convert a backing coordinate to a cell coordinate. Opposite of [`convert`].
pub fn convert_back(i: usize) -> usize {
    i.saturating_sub(1) / 2
}

/// A wall of the grid.
///
/// - `Horizontal(p)` is the wall above the cell `p`. `p.y` ranges from 0 to the grid height
///   (included), the last row being the lower border.
/// - `Vertical(p)` is the wall at the left of the cell `p`. `p.x` ranges from 0 to the grid
///   width (included), the last column being the right border.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Wall {
    Horizontal(Point),
    Vertical(Point),
}

impl Wall {
    /// Wall in the given direction relative to a cell.
    pub fn of_cell(cell: Point, direction: Direction) -> Self {
        match direction {
            Direction::Up => Wall::Horizontal(cell),
            Direction::Down => Wall::Horizontal(Point::new(cell.x, cell.y + 1)),
            Direction::Left => Wall::Vertical(cell),
            Direction::Right => Wall::Vertical(Point::new(cell.x + 1, cell.y)),
        }
    }

    /// Wall in the given direction relative to a corner.
    ///
    /// Return `None` if the wall would be outside the grid on the upper or left side.
    pub fn of_corner(corner: Point, direction: Direction) -> Option<Self> {
        match direction {
            Direction::Up => corner
                .y
                .checked_sub(1)
                .map(|y| Wall::Vertical(Point::new(corner.x, y))),
            Direction::Down => Some(Wall::Vertical(corner)),
            Direction::Left => corner
                .x
                .checked_sub(1)
                .map(|x| Wall::Horizontal(Point::new(x, corner.y))),
            Direction::Right => Some(Wall::Horizontal(corner)),
        }
    }

    /// Whether the wall is between two vertically aligned cells.
    pub fn is_horizontal(self) -> bool {
        matches!(self, Wall::Horizontal(_))
    }
}

/// Role of a position in the backing array.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Position {
    Cell(Point),
    Wall(Wall),
    Corner(Point),
}

impl Position {
    /// Decode a backing position from the parity of its coordinates.
    pub fn from_backing(column: usize, row: usize) -> Self {
        match (column % 2 == 1, row % 2 == 1) {
            (true, true) => Position::Cell(Point::new(convert_back(column), convert_back(row))),
            (true, false) => {
                Position::Wall(Wall::Horizontal(Point::new(convert_back(column), row / 2)))
            }
            (false, true) => {
                Position::Wall(Wall::Vertical(Point::new(column / 2, convert_back(row))))
            }
            (false, false) => Position::Corner(Point::new(column / 2, row / 2)),
        }
    }

    /// Return the `(column, row)` backing coordinates of the position.
    pub fn to_backing(self) -> (usize, usize) {
        match self {
            Position::Cell(p) => (convert(p.x), convert(p.y)),
            Position::Wall(Wall::Horizontal(p)) => (convert(p.x), p.y * 2),
            Position::Wall(Wall::Vertical(p)) => (p.x * 2, convert(p.y)),
            Position::Corner(p) => (p.x * 2, p.y * 2),
        }
    }

    pub fn is_cell(self) -> bool {
        matches!(self, Position::Cell(_))
    }

    pub fn is_wall(self) -> bool {
        matches!(self, Position::Wall(_))
    }

    pub fn is_corner(self) -> bool {
        matches!(self, Position::Corner(_))
    }
}

/// Rectangular grid of cell values of type `C` and wall values of type `W`.
#[derive(Debug, Clone)]
pub struct RectGrid<C, W> {
    /// Number of cells in a row.
    width: usize,

    /// Number of rows.
    height: usize,

    /// Cell values, row by row.
    cells: Vec<C>,

    /// Horizontal walls: `height + 1` rows of `width` walls.
    h_walls: Vec<W>,

    /// Vertical walls: `height` rows of `width + 1` walls.
    v_walls: Vec<W>,
}

impl<C: Clone, W: Clone> RectGrid<C, W> {
    /// Create a [`RectGrid`] object with all the cells and walls set to the given values.
    ///
    /// # Errors
    ///
    /// The width and the height must be at least 1.
    pub fn new(
        width: usize,
        height: usize,
        default_cell: C,
        default_wall: W,
    ) -> Result<Self, GridError> {
        if width == 0 || height == 0 {
            return Err(GridError::InvalidSize {
                size: width.min(height),
                min: 1,
            });
        }
        Ok(Self {
            width,
            height,
            cells: vec![default_cell; width * height],
            h_walls: vec![default_wall.clone(); width * (height + 1)],
            v_walls: vec![default_wall; (width + 1) * height],
        })
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// Width of the backing array, walls and corners included.
    pub fn backing_width(&self) -> usize {
        self.width * 2 + 1
    }

    /// Height of the backing array, walls and corners included.
    pub fn backing_height(&self) -> usize {
        self.height * 2 + 1
    }

    /// Whether the cell is in the bounds of the grid.
    pub fn contains(&self, cell: Point) -> bool {
        cell.x < self.width && cell.y < self.height
    }

    fn out_of_bounds(&self, p: Point) -> GridError {
        GridError::OutOfBounds {
            x: p.x,
            y: p.y,
            width: self.width,
            height: self.height,
        }
    }

    fn cell_index(&self, cell: Point) -> Result<usize, GridError> {
        if self.contains(cell) {
            Ok(cell.y * self.width + cell.x)
        } else {
            Err(self.out_of_bounds(cell))
        }
    }

    fn wall_ref(&self, wall: Wall) -> Result<(bool, usize), GridError> {
        match wall {
            Wall::Horizontal(p) if p.x < self.width && p.y <= self.height => {
                Ok((true, p.y * self.width + p.x))
            }
            Wall::Vertical(p) if p.x <= self.width && p.y < self.height => {
                Ok((false, p.y * (self.width + 1) + p.x))
            }
            Wall::Horizontal(p) | Wall::Vertical(p) => Err(self.out_of_bounds(p)),
        }
    }

    /// Return the neighbour of the cell in the given direction, if it is in the grid.
    pub fn neighbour(&self, cell: Point, direction: Direction) -> Option<Point> {
        cell.step(direction).filter(|p| self.contains(*p))
    }

    /// Iterate over all the cell coordinates, row by row.
    pub fn points(&self) -> impl Iterator<Item = Point> + use<C, W> {
        let width: usize = self.width;
        (0..self.height).flat_map(move |y| (0..width).map(move |x| Point::new(x, y)))
    }

    /// Return the value of the cell.
    pub fn get(&self, cell: Point) -> Result<&C, GridError> {
        let i: usize = self.cell_index(cell)?;
        Ok(&self.cells[i])
    }

    /// Set the value of the cell.
    pub fn set(&mut self, cell: Point, value: C) -> Result<(), GridError> {
        let i: usize = self.cell_index(cell)?;
        self.cells[i] = value;
        Ok(())
    }

    /// Return the value of a wall.
    pub fn wall_value(&self, wall: Wall) -> Result<&W, GridError> {
        match self.wall_ref(wall)? {
            (true, i) => Ok(&self.h_walls[i]),
            (false, i) => Ok(&self.v_walls[i]),
        }
    }

    /// Set the value of a wall.
    pub fn set_wall_value(&mut self, wall: Wall, value: W) -> Result<(), GridError> {
        match self.wall_ref(wall)? {
            (true, i) => self.h_walls[i] = value,
            (false, i) => self.v_walls[i] = value,
        }
        Ok(())
    }

    /// Return the value of the wall in the given direction relative to the cell.
    pub fn wall(&self, cell: Point, direction: Direction) -> Result<&W, GridError> {
        self.cell_index(cell)?;
        self.wall_value(Wall::of_cell(cell, direction))
    }

    /// Set the value of the wall in the given direction relative to the cell.
    pub fn set_wall(&mut self, cell: Point, direction: Direction, value: W) -> Result<(), GridError> {
        self.cell_index(cell)?;
        self.set_wall_value(Wall::of_cell(cell, direction), value)
    }

    /// Set the four walls of the cell to the given value.
    pub fn set_walls(&mut self, cell: Point, value: W) -> Result<(), GridError> {
        for direction in Direction::ALL {
            self.set_wall(cell, direction, value.clone())?;
        }
        Ok(())
    }

    /// Set all the cells and all the walls to the given values.
    pub fn fill(&mut self, default_cell: C, default_wall: W) {
        self.cells.fill(default_cell);
        self.h_walls.fill(default_wall.clone());
        self.v_walls.fill(default_wall);
    }

    /// Set the border of the grid to the given value.
    /// The border is made of all the walls that are adjacent to only one cell.
    pub fn set_border(&mut self, value: W) {
        let last_row: usize = self.height * self.width;
        for x in 0..self.width {
            self.h_walls[x] = value.clone();
            self.h_walls[last_row + x] = value.clone();
        }
        for y in 0..self.height {
            let row: usize = y * (self.width + 1);
            self.v_walls[row] = value.clone();
            self.v_walls[row + self.width] = value.clone();
        }
    }

    /// Return the direction of the second cell relative to the first cell.
    ///
    /// # Errors
    ///
    /// The two cells must share exactly one coordinate.
    pub fn calc_direction(&self, p1: Point, p2: Point) -> Result<Direction, GridError> {
        if (p1.x != p2.x && p1.y != p2.y) || p1 == p2 {
            return Err(GridError::NotNeighbours(format!(
                "the coordinates {p1} and {p2} are not neighbours"
            )));
        }
        if p1.y != p2.y {
            Ok(if p1.y > p2.y {
                Direction::Up
            } else {
                Direction::Down
            })
        } else {
            Ok(if p1.x > p2.x {
                Direction::Left
            } else {
                Direction::Right
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_convert() {
        for i in 0..50 {
            assert_eq!(convert_back(convert(i)), i);
        }
        assert_eq!(convert(0), 1);
        assert_eq!(convert(3), 7);
    }

    #[test]
    fn test_position_parity() {
        assert_eq!(Position::from_backing(3, 1), Position::Cell(Point::new(1, 0)));
        assert_eq!(
            Position::from_backing(3, 2),
            Position::Wall(Wall::Horizontal(Point::new(1, 1)))
        );
        assert_eq!(
            Position::from_backing(4, 1),
            Position::Wall(Wall::Vertical(Point::new(2, 0)))
        );
        assert_eq!(Position::from_backing(4, 2), Position::Corner(Point::new(2, 1)));
        for column in 0..9 {
            for row in 0..7 {
                let p: Position = Position::from_backing(column, row);
                assert_eq!(p.to_backing(), (column, row));
            }
        }
    }

    #[test]
    fn test_shared_walls() {
        let mut grid: RectGrid<u8, bool> = RectGrid::new(3, 2, 0, false).unwrap();
        grid.set_wall(Point::new(0, 0), Direction::Right, true).unwrap();
        assert!(*grid.wall(Point::new(1, 0), Direction::Left).unwrap());
        grid.set_wall(Point::new(2, 1), Direction::Up, true).unwrap();
        assert!(*grid.wall(Point::new(2, 0), Direction::Down).unwrap());
        assert!(!*grid.wall(Point::new(1, 0), Direction::Down).unwrap());

        grid.set(Point::new(2, 1), 7).unwrap();
        assert_eq!(*grid.get(Point::new(2, 1)).unwrap(), 7);
    }

    #[test]
    fn test_border() {
        let mut grid: RectGrid<u8, u8> = RectGrid::new(3, 2, 0, 0).unwrap();
        grid.set_border(9);
        for p in grid.points() {
            for d in Direction::ALL {
                let expected: u8 = if grid.neighbour(p, d).is_none() { 9 } else { 0 };
                assert_eq!(*grid.wall(p, d).unwrap(), expected, "{p} {d:?}");
            }
        }
    }

    #[test]
    fn test_out_of_bounds() {
        let mut grid: RectGrid<u8, u8> = RectGrid::new(3, 2, 0, 0).unwrap();
        assert!(matches!(
            grid.get(Point::new(3, 0)),
            Err(GridError::OutOfBounds { x: 3, y: 0, .. })
        ));
        assert!(grid.set(Point::new(0, 2), 1).is_err());
        assert!(grid.wall(Point::new(3, 0), Direction::Left).is_err());
        assert!(RectGrid::<u8, u8>::new(0, 4, 0, 0).is_err());
    }

    #[test]
    fn test_calc_direction() {
        let grid: RectGrid<u8, u8> = RectGrid::new(4, 4, 0, 0).unwrap();
        let c: Point = Point::new(1, 1);
        assert_eq!(grid.calc_direction(c, Point::new(1, 0)), Ok(Direction::Up));
        assert_eq!(grid.calc_direction(c, Point::new(1, 2)), Ok(Direction::Down));
        assert_eq!(grid.calc_direction(c, Point::new(0, 1)), Ok(Direction::Left));
        assert_eq!(grid.calc_direction(c, Point::new(2, 1)), Ok(Direction::Right));
        assert!(matches!(
            grid.calc_direction(c, Point::new(2, 2)),
            Err(GridError::NotNeighbours(_))
        ));
        assert!(grid.calc_direction(c, c).is_err());
    }
}
