// Opt in to warnings about new 2018 idioms
#![warn(rust_2018_idioms)]
// Additional warnings that are allow by default (`rustc -W help`)
#![warn(missing_copy_implementations)]
#![warn(missing_debug_implementations)]
#![warn(trivial_casts)]
#![warn(trivial_numeric_casts)]
#![warn(unreachable_pub)]
#![warn(unused)]
// Clippy
#![allow(unknown_lints)] // necessary because rustc doesn't know about clippy
#![warn(clippy::all)]

pub mod board_formatter;
pub mod config;
pub mod data;
pub mod parser;
pub mod puzzle;
pub mod puzzles;
pub mod solution_formatter;
pub mod solver;
pub mod vec2d;

mod fs;

use std::error::Error;

use crate::config::Method;
use crate::parser::{ParseState, PuzzleEntry};
use crate::puzzle::Puzzle;
use crate::solver::{SearchLimits, SolverErr, SolverOk};

pub trait LoadPuzzles {
    fn load_puzzles<P: ParseState>(&self, puzzle: &P) -> Result<Vec<PuzzleEntry<P::State>>, Box<dyn Error>>;
}

pub trait Solve<P: Puzzle> {
    fn solve(
        &self,
        puzzle: &P,
        method: Method,
        limits: &SearchLimits,
        print_status: bool,
    ) -> Result<SolverOk<P::Action>, SolverErr>;
}
