/*
properties.rs

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

//! Property tests for the grids and the games.
//!
//! Invariants covered:
//! - Backing coordinates convert back to the cell coordinates.
//! - Triangular coordinate validity, and symmetry of the neighbour relation.
//! - Generated mazes are spanning trees: every cell is reachable from the start, and there is
//!   exactly one passage fewer than cells, so there is no cycle.
//! - Seeds reproduce the same maze.
//! - The minesweeper flag counter matches the flagged cells after any sequence of commands.

use proptest::prelude::*;
use std::collections::HashSet;

use trigrid::containers::direction::Direction;
use trigrid::containers::grid::{Point, convert, convert_back};
use trigrid::containers::slot::Slot;
use trigrid::containers::tri_grid::TriGrid;
use trigrid::containers::tri_point::TriPoint;
use trigrid::games::maze::RectMaze;
use trigrid::games::minesweeper_cell::CoverState;
use trigrid::games::tri_maze::TriMaze;
use trigrid::games::tri_minesweeper::TriMinesweeper;

fn slot_of(b: bool) -> Slot {
    if b { Slot::B } else { Slot::A }
}

/// Number of cells reachable from the start through the open walls.
fn tri_reachable(maze: &TriMaze) -> usize {
    let mut seen: HashSet<TriPoint> = HashSet::from([maze.start()]);
    let mut todo: Vec<TriPoint> = vec![maze.start()];
    while let Some(p) = todo.pop() {
        for (a, b) in maze.passages() {
            let next: Option<TriPoint> = if a == p {
                Some(b)
            } else if b == p {
                Some(a)
            } else {
                None
            };
            if let Some(n) = next
                && seen.insert(n)
            {
                todo.push(n);
            }
        }
    }
    seen.len()
}

fn rect_reachable(maze: &RectMaze) -> usize {
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
    seen.len()
}

fn count_state(game: &TriMinesweeper, state: CoverState) -> usize {
    game.board()
        .points()
        .filter(|p| game.cover_state(*p).unwrap() == state)
        .count()
}

#[test]
fn neighbours_are_symmetric() {
    for size in 1..20 {
        let grid: TriGrid<(), ()> = TriGrid::new(size, (), ()).unwrap();
        for p in grid.points() {
            for n in grid.neighbours(p) {
                assert!(grid.neighbours(n).contains(&p), "size {size}: {p} -> {n}");
            }
            for n in grid.edge_neighbours(p) {
                assert!(grid.edge_neighbours(n).contains(&p), "size {size}: {p} -> {n}");
                assert!(grid.neighbours(p).contains(&n));
            }
        }
    }
}

proptest! {
    #[test]
    fn convert_round_trip(i in 0usize..100_000) {
        prop_assert_eq!(convert_back(convert(i)), i);
    }

    #[test]
    fn tri_coordinates_validity(size in 1usize..30, x in -3i32..35, y in -3i32..35, b in any::<bool>()) {
        let grid: TriGrid<u8, u8> = TriGrid::new(size, 0, 0).unwrap();
        let s: i32 = size as i32;
        let expected: bool = if b {
            0 <= x && x < y && y < s
        } else {
            0 <= x && x <= y && y < s
        };
        prop_assert_eq!(grid.are_cords_valid(x, y, slot_of(b)), expected);
        prop_assert_eq!(grid.get(TriPoint::new(x, y, slot_of(b))).is_ok(), expected);
    }

    #[test]
    fn tri_maze_is_a_spanning_tree(size in 1usize..14, seed in any::<u64>()) {
        let maze: TriMaze = TriMaze::with_seed(size, seed).unwrap();
        prop_assert_eq!(maze.passages().len(), size * size - 1);
        prop_assert_eq!(tri_reachable(&maze), size * size);
        prop_assert!(maze.grid().contains(maze.end()));
    }

    #[test]
    fn rect_maze_is_a_spanning_tree(width in 1usize..15, height in 1usize..15, seed in any::<u64>()) {
        let maze: RectMaze = RectMaze::with_seed(width, height, seed).unwrap();
        prop_assert_eq!(maze.passages().len(), width * height - 1);
        prop_assert_eq!(rect_reachable(&maze), width * height);
    }

    #[test]
    fn text_seeds_are_reproducible(text in "[a-z ]{0,12}", size in 1usize..12) {
        let m1: TriMaze = TriMaze::with_seed(size, text.as_str()).unwrap();
        let m2: TriMaze = TriMaze::with_seed(size, text).unwrap();
        prop_assert_eq!(m1.passages(), m2.passages());
        prop_assert_eq!(m1.end(), m2.end());
    }

    #[test]
    fn minesweeper_counters(
        seed in any::<u64>(),
        size in 10usize..14,
        commands in prop::collection::vec(0u8..8, 1..80),
    ) {
        let mut game: TriMinesweeper = TriMinesweeper::with_seed(size, seed).unwrap();
        for command in commands {
            let cursor: TriPoint = game.cursor();
            let was_generated: bool = game.is_generated();
            let hits_mine: bool = was_generated
                && game.cover_state(cursor).unwrap() == CoverState::Covered
                && game.is_mine(cursor).unwrap();
            let mistakes: usize = game.mistakes();

            match command {
                0 => game.move_cursor(Direction::Up),
                1 => game.move_cursor(Direction::Down),
                2 => game.move_cursor(Direction::Left),
                3 => game.move_cursor(Direction::Right),
                4 => game.toggle_slot(),
                5 => game.toggle_flag().unwrap(),
                6 => game.toggle_mark().unwrap(),
                _ => game.uncover().unwrap(),
            }

            prop_assert!(game.board().contains(game.cursor()));
            prop_assert_eq!(game.flags(), count_state(&game, CoverState::Flagged));
            prop_assert_eq!(game.covered_cells(), count_state(&game, CoverState::Covered));
            prop_assert!(game.mistakes() >= mistakes);
            if hits_mine && command == 7 {
                prop_assert_eq!(game.mistakes(), mistakes + 1);
            }
            if !was_generated && game.is_generated() {
                prop_assert!(!game.is_mine(cursor).unwrap());
                for n in game.board().neighbours(cursor) {
                    prop_assert!(!game.is_mine(n).unwrap());
                }
            }
            if game.game_is_over() {
                prop_assert_eq!(game.flags(), game.total_mines());
            }
        }
    }
}
