/*
cli_options.rs

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

//! Process command-line options.
//!
//! The command generates mazes or minesweeper boards and reports on them.
//! It does not draw the grids.
//!
//! # Examples
//!
//! Generate three rectangular mazes and print some statistics:
//!
//! ```text
//! $ trigrid maze -W 30 -H 15 -c 3 -s
//! #0  start = 0/0  end = 17/9  passages = 449
//! #1  start = 0/0  end = 3/14  passages = 449
//! #2  start = 0/0  end = 26/2  passages = 449
//!
//!         total time = 0.000421s
//!       average time = 0.00014033334s
//!           max time = 0.000163s
//! average iterations = 899
//! ```
//!
//! Generate a reproducible triangular maze, with a text seed, and print the result as JSON:
//!
//! ```text
//! $ trigrid tri-maze --size 8 --seed labyrinth --json
//! ```
//!
//! Place the mines of a minesweeper game and uncover the starting cell:
//!
//! ```text
//! $ trigrid minesweeper --size 12 --seed 42
//! #0  seed = 42  mines = 15  cursor = [x=3,y=7,s=B]  uncovered = 61/144
//! ```

use clap::{Parser, ValueEnum};
use log::debug;
use serde::Serialize;
use std::env;
use std::time::Instant;

use trigrid::config::{
    COPYRIGHT_NOTICE, DEFAULT_MAZE_HEIGHT, DEFAULT_MAZE_WIDTH, DEFAULT_MINESWEEPER_SIZE,
    DEFAULT_TRI_MAZE_SIZE,
};
use trigrid::containers::errors::GridError;
use trigrid::containers::grid::Point;
use trigrid::containers::tri_point::TriPoint;
use trigrid::games::maze::RectMaze;
use trigrid::games::seed::Seed;
use trigrid::games::tri_maze::TriMaze;
use trigrid::games::tri_minesweeper::TriMinesweeper;

/// Kind of grid to generate.
#[derive(ValueEnum, Copy, Clone, Debug, PartialEq, Eq)]
enum Kind {
    /// Rectangular maze
    Maze,

    /// Triangular maze
    TriMaze,

    /// Triangular minesweeper board, after the first uncover
    Minesweeper,
}

/// Generate mazes and minesweeper boards on rectangular and triangular grids.
#[derive(Parser)]
#[command(about, long_about = None, version, long_version = COPYRIGHT_NOTICE)]
struct Args {
    /// What to generate
    #[arg(value_enum)]
    kind: Kind,

    /// Width of the rectangular maze
    #[arg(short = 'W', long, default_value_t = DEFAULT_MAZE_WIDTH)]
    width: usize,

    /// Height of the rectangular maze
    #[arg(short = 'H', long, default_value_t = DEFAULT_MAZE_HEIGHT)]
    height: usize,

    /// Number of rows of the triangular maze or of the minesweeper board
    #[arg(short = 'n', long)]
    size: Option<usize>,

    /// Seed for the random number generator: a number, or any text
    #[arg(long)]
    seed: Option<Seed>,

    /// Number of grids to generate
    #[arg(short, long, default_value_t = 1)]
    count: usize,

    /// Print some statistics after generating the grids
    #[arg(short, long, default_value_t = false)]
    summary: bool,

    /// Print the results in JSON format
    #[arg(short, long, default_value_t = false)]
    json: bool,

    /// Enable debug messages
    #[arg(short, long, default_value_t = false)]
    debug: bool,
}

/// Result of a maze generation.
#[derive(Serialize, Debug)]
struct MazeReport<P> {
    index: usize,
    seed: Option<u64>,
    start: P,
    end: P,
    passages: usize,
    iterations: usize,
    duration: f32,
}

/// State of a minesweeper game after the first uncover.
#[derive(Serialize, Debug)]
struct MinesweeperReport {
    index: usize,
    seed: Option<u64>,
    size: usize,
    cursor: TriPoint,
    total_mines: usize,
    uncovered: usize,
    covered: usize,
    mistakes: usize,
    duration: f32,
}

/// Timing statistics over all the generated grids.
#[derive(Default)]
struct Stats {
    total: f32,
    max: f32,
    iterations: usize,
}

impl Stats {
    fn add(&mut self, duration: f32, iterations: usize) {
        self.total += duration;
        if duration > self.max {
            self.max = duration;
        }
        self.iterations += iterations;
    }
}

/// Seed of the `i`th grid: consecutive numbers starting from the given seed.
fn seed_for(seed: Option<&Seed>, i: usize) -> Option<u64> {
    seed.map(|s| s.to_u64().wrapping_add(i as u64))
}

fn rect_maze(args: &Args, i: usize, stats: &mut Stats) -> Result<MazeReport<Point>, GridError> {
    let seed: Option<u64> = seed_for(args.seed.as_ref(), i);
    let maze: RectMaze = match seed {
        Some(s) => RectMaze::with_seed(args.width, args.height, s)?,
        None => RectMaze::new(args.width, args.height)?,
    };
    stats.add(maze.duration, maze.iteration);
    Ok(MazeReport {
        index: i,
        seed,
        start: maze.start(),
        end: maze.end(),
        passages: maze.passages().len(),
        iterations: maze.iteration,
        duration: maze.duration,
    })
}

fn tri_maze(args: &Args, i: usize, stats: &mut Stats) -> Result<MazeReport<TriPoint>, GridError> {
    let size: usize = args.size.unwrap_or(DEFAULT_TRI_MAZE_SIZE);
    let seed: Option<u64> = seed_for(args.seed.as_ref(), i);
    let maze: TriMaze = match seed {
        Some(s) => TriMaze::with_seed(size, s)?,
        None => TriMaze::new(size)?,
    };
    stats.add(maze.duration, maze.iteration);
    Ok(MazeReport {
        index: i,
        seed: maze.seed(),
        start: maze.start(),
        end: maze.end(),
        passages: maze.passages().len(),
        iterations: maze.iteration,
        duration: maze.duration,
    })
}

fn minesweeper(
    args: &Args,
    i: usize,
    stats: &mut Stats,
) -> Result<MinesweeperReport, GridError> {
    let size: usize = args.size.unwrap_or(DEFAULT_MINESWEEPER_SIZE);
    let seed: Option<u64> = seed_for(args.seed.as_ref(), i);
    let start: Instant = Instant::now();
    let mut game: TriMinesweeper = match seed {
        Some(s) => TriMinesweeper::with_seed(size, s)?,
        None => TriMinesweeper::new(size)?,
    };
    game.uncover()?;
    let duration: f32 = start.elapsed().as_secs_f32();
    stats.add(duration, 1);

    let covered: usize = game.covered_cells();
    Ok(MinesweeperReport {
        index: i,
        seed,
        size,
        cursor: game.cursor(),
        total_mines: game.total_mines(),
        uncovered: game.board().cell_count() - covered,
        covered,
        mistakes: game.mistakes(),
        duration,
    })
}

fn print_maze<P: std::fmt::Display>(r: &MazeReport<P>) {
    match r.seed {
        Some(s) => println!(
            "#{}  seed = {s}  start = {}  end = {}  passages = {}",
            r.index, r.start, r.end, r.passages
        ),
        None => println!(
            "#{}  start = {}  end = {}  passages = {}",
            r.index, r.start, r.end, r.passages
        ),
    }
}

fn print_minesweeper(r: &MinesweeperReport) {
    let seed: String = r.seed.map(|s| format!("  seed = {s}")).unwrap_or_default();
    println!(
        "#{}{seed}  mines = {}  cursor = {}  uncovered = {}/{}",
        r.index,
        r.total_mines,
        r.cursor,
        r.uncovered,
        r.uncovered + r.covered
    );
}

fn print_json<T: Serialize>(reports: &[T]) -> u8 {
    match serde_json::to_string_pretty(reports) {
        Ok(s) => {
            println!("{s}");
            0
        }
        Err(e) => {
            eprintln!("Cannot format the results: {e}");
            1
        }
    }
}

/// Generate the grids and print the reports.
fn run<T: Serialize>(
    args: &Args,
    stats: &mut Stats,
    generate: fn(&Args, usize, &mut Stats) -> Result<T, GridError>,
    print: fn(&T),
) -> u8 {
    let mut reports: Vec<T> = Vec::with_capacity(args.count);
    for i in 0..args.count {
        debug!("Iteration {i}");
        match generate(args, i, stats) {
            Ok(r) => {
                if !args.json {
                    print(&r);
                }
                reports.push(r);
            }
            Err(e) => {
                eprintln!("Error: {e}");
                return 1;
            }
        }
    }
    if args.json { print_json(&reports) } else { 0 }
}

/// Parse and process command-line options.
pub fn parse() -> u8 {
    let args: Args = Args::parse();

    if args.debug {
        unsafe {
            env::set_var("RUST_LOG", "debug");
        }
    }
    env_logger::init();

    let mut stats: Stats = Stats::default();
    let ret: u8 = match args.kind {
        Kind::Maze => run(&args, &mut stats, rect_maze, print_maze),
        Kind::TriMaze => run(&args, &mut stats, tri_maze, print_maze),
        Kind::Minesweeper => run(&args, &mut stats, minesweeper, print_minesweeper),
    };

    // Print some stats
    if args.summary && ret == 0 && args.count > 0 {
        println!(
            "
        total time = {}s
      average time = {}s
          max time = {}s
average iterations = {}",
            stats.total,
            stats.total / args.count as f32,
            stats.max,
            stats.iterations / args.count,
        );
    }
    ret
}
