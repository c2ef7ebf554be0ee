use std::fmt::{self, Debug, Display, Formatter};

use crate::data::Pos;
use crate::puzzle::Puzzle;

/// Families that can show a state as a board.
pub trait DrawBoard: Puzzle {
    /// `(rows, cols)`
    fn board_size(&self) -> (u8, u8);

    fn glyph(&self, state: &Self::State, pos: Pos) -> char;

    fn format_board<'a>(&'a self, state: &'a Self::State) -> BoardFormatter<'a, Self>
    where
        Self: Sized,
    {
        BoardFormatter::new(self, state)
    }
}

pub struct BoardFormatter<'a, P: DrawBoard> {
    puzzle: &'a P,
    state: &'a P::State,
}

impl<'a, P: DrawBoard> BoardFormatter<'a, P> {
    pub(crate) fn new(puzzle: &'a P, state: &'a P::State) -> Self {
        Self { puzzle, state }
    }
}

impl<P: DrawBoard> Display for BoardFormatter<'_, P> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let (rows, cols) = self.puzzle.board_size();
        let border = "+---".repeat(usize::from(cols)) + "+";
        for r in 0..rows {
            writeln!(f, "{}", border)?;
            write!(f, "|")?;
            for c in 0..cols {
                write!(f, " {} |", self.puzzle.glyph(self.state, Pos::new(r, c)))?;
            }
            writeln!(f)?;
        }
        writeln!(f, "{}", border)
    }
}

impl<P: DrawBoard> Debug for BoardFormatter<'_, P> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self)
    }
}
