use std::error::Error;
use std::fs::File;
use std::io::prelude::*;
use std::path::Path;

use log::debug;

use crate::parser::{self, ParseState, PuzzleEntry};
use crate::LoadPuzzles;

pub(crate) fn read_file<P: AsRef<Path>>(path: P) -> Result<String, Box<dyn Error>> {
    let mut file = File::open(path)?;

    let mut contents = String::new();
    file.read_to_string(&mut contents)?;
    Ok(contents)
}

impl<T: AsRef<Path> + ?Sized> LoadPuzzles for T {
    fn load_puzzles<P: ParseState>(&self, puzzle: &P) -> Result<Vec<PuzzleEntry<P::State>>, Box<dyn Error>> {
        let path = self.as_ref();
        debug!("Loading {}", path.display());
        let text = read_file(path)?;
        Ok(parser::parse_puzzle_set(puzzle, &text)?)
    }
}
