/*
tri_grid.rs

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

//! Triangular grid storing cell and wall values.
//!
//! A triangular grid of size `n` is a triangle made of `n` rows. Row `y` holds `y + 1` triangles
//! pointing up (slot `A`, `x` from 0 to `y`) and `y` triangles pointing down (slot `B`, `x` from
//! 0 to `y - 1`), interleaved:
//!
//! ```text
//!        /\
//!       /A \
//!      /\‾‾/\
//!     /A \B/A \
//!    ‾‾‾‾‾‾‾‾‾‾
//! ```
//!
//! The triangles are stored in a [`RectGrid`] of `2n - 1` columns and `n` rows: the triangle
//! `(x, y, A)` uses column `2x` and `(x, y, B)` uses column `2x + 1` of row `y`.
//! Horizontal neighbours in the same row share the vertical walls of the rectangular grid.
//! The lower wall of `(x, y, A)` and the upper wall of `(x, y + 1, B)` are different
//! horizontal walls of the rectangular grid (columns `2x` and `2x + 1`), so writing one of them
//! also writes the other one.

use super::direction::Direction;
use super::errors::GridError;
use super::grid::{Point, RectGrid};
use super::slot::Slot;
use super::tri_point::TriPoint;

/// Offsets `(dx, dy, slot)` of the neighbours of a triangle in slot `A`, including the
/// triangles that only share a vertex.
const NEIGHBOURS_A: [(i32, i32, Slot); 12] = [
    (-1, -1, Slot::A),
    (-1, -1, Slot::B),
    (0, -1, Slot::A),
    (-1, 0, Slot::A),
    (-1, 0, Slot::B),
    (0, 0, Slot::B),
    (1, 0, Slot::A),
    (-1, 1, Slot::B),
    (0, 1, Slot::A),
    (0, 1, Slot::B),
    (1, 1, Slot::A),
    (1, 1, Slot::B),
];

/// Offsets `(dx, dy, slot)` of the neighbours of a triangle in slot `B`.
const NEIGHBOURS_B: [(i32, i32, Slot); 12] = [
    (-1, -1, Slot::A),
    (-1, -1, Slot::B),
    (0, -1, Slot::A),
    (0, -1, Slot::B),
    (1, -1, Slot::A),
    (-1, 0, Slot::B),
    (0, 0, Slot::A),
    (1, 0, Slot::A),
    (1, 0, Slot::B),
    (0, 1, Slot::B),
    (1, 1, Slot::A),
    (1, 1, Slot::B),
];

/// Triangular grid of cell values of type `C` and wall values of type `W`.
#[derive(Debug, Clone)]
pub struct TriGrid<C, W> {
    /// Number of rows.
    size: usize,

    /// Backing rectangular grid.
    grid: RectGrid<C, W>,
}

impl<C: Clone, W: Clone> TriGrid<C, W> {
    /// Create a [`TriGrid`] object with all the cells and walls set to the given values.
    ///
    /// # Errors
    ///
    /// The size must be at least 1.
    pub fn new(size: usize, default_cell: C, default_wall: W) -> Result<Self, GridError> {
        if size == 0 {
            return Err(GridError::InvalidSize { size, min: 1 });
        }
        Ok(Self {
            size,
            grid: RectGrid::new(size * 2 - 1, size, default_cell, default_wall)?,
        })
    }

    pub fn size(&self) -> usize {
        self.size
    }

    /// Number of triangles in the grid.
    pub fn cell_count(&self) -> usize {
        self.size * self.size
    }

    /// Access the backing rectangular grid.
    pub fn rect(&self) -> &RectGrid<C, W> {
        &self.grid
    }

    /// Whether the position holds a triangle in both slots.
    pub fn has_two_slots(x: i32, y: i32) -> bool {
        x != y
    }

    /// Whether the coordinates designate a triangle of the grid.
    pub fn are_cords_valid(&self, x: i32, y: i32, slot: Slot) -> bool {
        let (x, y, size): (i64, i64, i64) = (x.into(), y.into(), self.size as i64);
        if x < 0 || y < 0 || y >= size {
            return false;
        }
        match slot {
            Slot::A => x <= y,
            Slot::B => x < y,
        }
    }

    /// Whether the point designates a triangle of the grid.
    pub fn contains(&self, point: TriPoint) -> bool {
        self.are_cords_valid(point.x, point.y, point.slot)
    }

    /// Return the coordinates of the triangle in the backing grid.
    fn backing(&self, point: TriPoint) -> Result<Point, GridError> {
        if !self.contains(point) {
            return Err(GridError::TriOutOfBounds {
                x: point.x,
                y: point.y,
                slot: point.slot,
                size: self.size,
            });
        }
        Ok(Point::new(
            point.slot.column(point.x as usize),
            point.y as usize,
        ))
    }

    fn validate_direction(slot: Slot, direction: Direction) -> Result<(), GridError> {
        if slot.has_direction(direction) {
            Ok(())
        } else {
            Err(GridError::MissingWall { slot, direction })
        }
    }

    /// Return the value of the triangle.
    pub fn get(&self, point: TriPoint) -> Result<&C, GridError> {
        self.grid.get(self.backing(point)?)
    }

    /// Set the value of the triangle.
    pub fn set(&mut self, point: TriPoint, value: C) -> Result<(), GridError> {
        let p: Point = self.backing(point)?;
        self.grid.set(p, value)
    }

    /// Return the value of the wall of the triangle in the given direction.
    ///
    /// # Errors
    ///
    /// Triangles in slot `A` have no upper wall, and triangles in slot `B` no lower wall.
    pub fn wall(&self, point: TriPoint, direction: Direction) -> Result<&W, GridError> {
        let p: Point = self.backing(point)?;
        Self::validate_direction(point.slot, direction)?;
        self.grid.wall(p, direction)
    }

    /// Return the value of the wall at the given position, without specifying the slot.
    /// The `Up` and `Left` walls are read from slot `B`, the `Down` and `Right` walls from
    /// slot `A`.
    pub fn wall_at(&self, x: i32, y: i32, direction: Direction) -> Result<&W, GridError> {
        let slot: Slot = match direction {
            Direction::Up | Direction::Left => Slot::B,
            Direction::Down | Direction::Right => Slot::A,
        };
        self.wall(TriPoint::new(x, y, slot), direction)
    }

    /// Set the value of the wall of the triangle in the given direction.
    ///
    /// Vertical walls are written in the two columns of the position, so that the wall stays
    /// consistent from both sides.
    pub fn set_wall(
        &mut self,
        point: TriPoint,
        direction: Direction,
        value: W,
    ) -> Result<(), GridError> {
        let p: Point = self.backing(point)?;
        Self::validate_direction(point.slot, direction)?;
        if direction.is_horizontal() {
            return self.grid.set_wall(p, direction, value);
        }

        let x: usize = point.x as usize;
        let column_b: usize = Slot::B.column(x);
        if column_b < self.grid.width() {
            self.grid
                .set_wall(Point::new(column_b, p.y), direction, value.clone())?;
        }
        self.grid
            .set_wall(Point::new(Slot::A.column(x), p.y), direction, value)
    }

    /// Set the three walls of the triangle to the given value.
    pub fn set_walls(&mut self, point: TriPoint, value: W) -> Result<(), GridError> {
        self.set_wall(point, point.slot.vert_dir(), value.clone())?;
        self.set_wall(point, Direction::Left, value.clone())?;
        self.set_wall(point, Direction::Right, value)
    }

    /// Set all the triangles and walls to the given values.
    pub fn fill(&mut self, default_cell: C, default_wall: W) {
        self.grid.fill(default_cell, default_wall);
    }

    /// Set the border of the triangle to the given value.
    pub fn set_border(&mut self, value: W) -> Result<(), GridError> {
        let last: i32 = self.size as i32 - 1;
        for i in 0..=last {
            self.set_wall(TriPoint::new(i, last, Slot::A), Direction::Down, value.clone())?;
            self.set_wall(TriPoint::new(0, i, Slot::A), Direction::Left, value.clone())?;
            self.set_wall(TriPoint::new(i, i, Slot::A), Direction::Right, value.clone())?;
        }
        Ok(())
    }

    /// Return the direction of the wall shared by two adjacent triangles, seen from the first
    /// one.
    ///
    /// # Errors
    ///
    /// The two triangles must share their x or y coordinate, must be in different slots, and
    /// the second triangle must be in a row the first triangle can reach through its vertical
    /// wall.
    pub fn calc_direction(&self, p1: TriPoint, p2: TriPoint) -> Result<Direction, GridError> {
        if p1.x != p2.x && p1.y != p2.y {
            return Err(GridError::NotNeighbours(format!(
                "{p1} and {p2} neither share the same x value nor the same y value"
            )));
        }
        if p1.slot.is_a() && p1.y > p2.y {
            return Err(GridError::NotNeighbours(format!(
                "{p2} is above {p1}, which has no upper wall"
            )));
        }
        if p1.slot.is_b() && p1.y < p2.y {
            return Err(GridError::NotNeighbours(format!(
                "{p2} is below {p1}, which has no lower wall"
            )));
        }
        if p1.slot == p2.slot {
            return Err(GridError::NotNeighbours(format!(
                "{p1} and {p2} have the same slot"
            )));
        }

        if p1.y == p2.y {
            Ok(match (p1.slot, p1.x == p2.x) {
                (Slot::A, true) | (Slot::B, false) => Direction::Right,
                (Slot::A, false) | (Slot::B, true) => Direction::Left,
            })
        } else {
            Ok(p1.slot.vert_dir())
        }
    }

    /// Iterate over all the triangles, row by row. In each position, slot `A` comes first.
    pub fn points(&self) -> impl Iterator<Item = TriPoint> + use<C, W> {
        let size: i32 = self.size as i32;
        (0..size).flat_map(|y| {
            (0..=y).flat_map(move |x| {
                let b: Option<TriPoint> = if Self::has_two_slots(x, y) {
                    Some(TriPoint::new(x, y, Slot::B))
                } else {
                    None
                };
                std::iter::once(TriPoint::new(x, y, Slot::A)).chain(b)
            })
        })
    }

    /// Return all the triangles that share a wall or a vertex with the given triangle (between 3
    /// and 12 triangles).
    pub fn neighbours(&self, point: TriPoint) -> Vec<TriPoint> {
        let offsets: &[(i32, i32, Slot); 12] = match point.slot {
            Slot::A => &NEIGHBOURS_A,
            Slot::B => &NEIGHBOURS_B,
        };
        offsets
            .iter()
            .map(|(dx, dy, slot)| point.translate(*dx, *dy, *slot))
            .filter(|p| self.contains(*p))
            .collect()
    }

    /// Return the triangles that share a wall with the given triangle (up to 3).
    ///
    /// The order is: the other slot at the same position, the horizontal neighbour on the
    /// other side, then the vertical neighbour.
    pub fn edge_neighbours(&self, point: TriPoint) -> Vec<TriPoint> {
        let other: Slot = point.slot.other();
        let (dx, dy): (i32, i32) = match point.slot {
            Slot::A => (-1, 1),
            Slot::B => (1, -1),
        };
        [
            point.with_other_slot(),
            point.translate(dx, 0, other),
            point.translate(0, dy, other),
        ]
        .into_iter()
        .filter(|p| self.contains(*p))
        .collect()
    }

    /// Return the triangle closest to the center of a grid of the given size.
    pub fn center_point(size: usize) -> TriPoint {
        let size: i32 = size as i32;
        if size % 3 == 0 {
            let y: i32 = size - 1 - size / 3;
            TriPoint::new((y - 1) / 2, y, Slot::B)
        } else if (size + 1) % 3 == 0 {
            let y: i32 = size - (size + 1) / 3;
            TriPoint::new((y - 1) / 2, y, Slot::B)
        } else {
            let y: i32 = size - (size + 2) / 3;
            TriPoint::new(y / 2, y, Slot::A)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn grid(size: usize) -> TriGrid<u8, bool> {
        TriGrid::new(size, 0, true).unwrap()
    }

    #[test]
    fn test_validity() {
        let g: TriGrid<u8, bool> = grid(4);
        assert!(g.are_cords_valid(0, 0, Slot::A));
        assert!(!g.are_cords_valid(0, 0, Slot::B));
        assert!(g.are_cords_valid(3, 3, Slot::A));
        assert!(!g.are_cords_valid(3, 3, Slot::B));
        assert!(g.are_cords_valid(2, 3, Slot::B));
        assert!(!g.are_cords_valid(2, 1, Slot::B));
        assert!(!g.are_cords_valid(0, 4, Slot::A));
        assert!(!g.are_cords_valid(-1, 2, Slot::A));
        assert_eq!(g.points().count(), g.cell_count());
        assert!(matches!(
            g.get(TriPoint::new(1, 0, Slot::A)),
            Err(GridError::TriOutOfBounds { .. })
        ));
    }

    #[test]
    fn test_vertical_wall_mirroring() {
        let mut g: TriGrid<u8, bool> = grid(3);
        g.set_wall(TriPoint::new(0, 1, Slot::A), Direction::Down, false)
            .unwrap();
        assert!(!*g.wall(TriPoint::new(0, 2, Slot::B), Direction::Up).unwrap());
        assert!(!*g.wall_at(0, 2, Direction::Up).unwrap());

        g.set_wall(TriPoint::new(1, 2, Slot::B), Direction::Up, false)
            .unwrap();
        assert!(!*g.wall(TriPoint::new(1, 1, Slot::A), Direction::Down).unwrap());
        assert!(*g.wall(TriPoint::new(0, 0, Slot::A), Direction::Down).unwrap());
    }

    #[test]
    fn test_horizontal_walls() {
        let mut g: TriGrid<u8, bool> = grid(3);
        g.set_wall(TriPoint::new(1, 2, Slot::A), Direction::Left, false)
            .unwrap();
        assert!(!*g.wall(TriPoint::new(0, 2, Slot::B), Direction::Right).unwrap());
        assert!(*g.wall_at(0, 2, Direction::Right).unwrap());
        assert!(matches!(
            g.wall(TriPoint::new(0, 2, Slot::A), Direction::Up),
            Err(GridError::MissingWall { .. })
        ));
        assert!(g.set_wall(TriPoint::new(0, 2, Slot::B), Direction::Down, false).is_err());
    }

    #[test]
    fn test_border() {
        let mut g: TriGrid<u8, bool> = grid(3);
        g.fill(0, false);
        g.set_border(true).unwrap();
        assert!(*g.wall(TriPoint::new(0, 0, Slot::A), Direction::Left).unwrap());
        assert!(*g.wall(TriPoint::new(0, 0, Slot::A), Direction::Right).unwrap());
        assert!(*g.wall(TriPoint::new(1, 2, Slot::A), Direction::Down).unwrap());
        assert!(!*g.wall(TriPoint::new(0, 1, Slot::A), Direction::Down).unwrap());
        assert!(!*g.wall(TriPoint::new(0, 2, Slot::B), Direction::Left).unwrap());
    }

    #[test]
    fn test_calc_direction() {
        let g: TriGrid<u8, bool> = grid(4);
        let a: TriPoint = TriPoint::new(1, 2, Slot::A);
        let b: TriPoint = TriPoint::new(1, 2, Slot::B);
        assert_eq!(g.calc_direction(a, b), Ok(Direction::Right));
        assert_eq!(g.calc_direction(b, a), Ok(Direction::Left));
        assert_eq!(
            g.calc_direction(a, TriPoint::new(0, 2, Slot::B)),
            Ok(Direction::Left)
        );
        assert_eq!(
            g.calc_direction(b, TriPoint::new(2, 2, Slot::A)),
            Ok(Direction::Right)
        );
        assert_eq!(
            g.calc_direction(a, TriPoint::new(1, 3, Slot::B)),
            Ok(Direction::Down)
        );
        assert_eq!(
            g.calc_direction(b, TriPoint::new(1, 1, Slot::A)),
            Ok(Direction::Up)
        );
        assert!(g.calc_direction(a, TriPoint::new(1, 1, Slot::B)).is_err());
        assert!(g.calc_direction(b, TriPoint::new(1, 3, Slot::A)).is_err());
        assert!(g.calc_direction(a, TriPoint::new(2, 2, Slot::A)).is_err());
        assert!(g.calc_direction(a, TriPoint::new(2, 3, Slot::B)).is_err());
    }

    #[test]
    fn test_neighbour_counts() {
        let g: TriGrid<u8, bool> = grid(5);
        assert_eq!(g.neighbours(TriPoint::new(0, 0, Slot::A)).len(), 3);
        assert_eq!(g.neighbours(TriPoint::new(0, 4, Slot::A)).len(), 3);
        assert_eq!(g.neighbours(TriPoint::new(4, 4, Slot::A)).len(), 3);
        assert_eq!(g.neighbours(TriPoint::new(1, 3, Slot::A)).len(), 12);
        assert_eq!(g.neighbours(TriPoint::new(1, 3, Slot::B)).len(), 12);
        for p in g.points() {
            let n: Vec<TriPoint> = g.neighbours(p);
            assert!(!n.contains(&p));
            assert!((3..=12).contains(&n.len()), "{p}: {}", n.len());
        }
    }

    #[test]
    fn test_edge_neighbours() {
        let g: TriGrid<u8, bool> = grid(4);
        assert_eq!(
            g.edge_neighbours(TriPoint::new(1, 2, Slot::A)),
            vec![
                TriPoint::new(1, 2, Slot::B),
                TriPoint::new(0, 2, Slot::B),
                TriPoint::new(1, 3, Slot::B)
            ]
        );
        assert_eq!(
            g.edge_neighbours(TriPoint::new(0, 2, Slot::B)),
            vec![
                TriPoint::new(0, 2, Slot::A),
                TriPoint::new(1, 2, Slot::A),
                TriPoint::new(0, 1, Slot::A)
            ]
        );
        assert_eq!(
            g.edge_neighbours(TriPoint::new(0, 0, Slot::A)),
            vec![TriPoint::new(0, 1, Slot::B)]
        );
    }

    #[test]
    fn test_center_point() {
        for size in 1..40 {
            let g: TriGrid<u8, bool> = grid(size);
            let c: TriPoint = TriGrid::<u8, bool>::center_point(size);
            assert!(g.contains(c), "size {size}: {c}");
        }
        assert_eq!(
            TriGrid::<u8, bool>::center_point(10),
            TriPoint::new(3, 6, Slot::A)
        );
    }
}
