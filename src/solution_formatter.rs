use std::fmt::{self, Debug, Display, Formatter};

use crate::board_formatter::DrawBoard;

/// One action per line, optionally followed by the board it leads to.
pub struct SolutionFormatter<'a, P: DrawBoard> {
    puzzle: &'a P,
    start: &'a P::State,
    actions: &'a [P::Action],
    include_boards: bool,
}

impl<'a, P: DrawBoard> SolutionFormatter<'a, P> {
    pub fn new(puzzle: &'a P, start: &'a P::State, actions: &'a [P::Action], include_boards: bool) -> Self {
        Self {
            puzzle,
            start,
            actions,
            include_boards,
        }
    }
}

impl<P: DrawBoard> Display for SolutionFormatter<'_, P> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let mut state = self.start.clone();
        for &action in self.actions {
            writeln!(f, "    {}", action)?;
            if !self.include_boards {
                continue;
            }
            // the actions might come from a different puzzle
            match self.puzzle.apply(&state, action) {
                Ok(new_state) => {
                    write!(f, "{}", self.puzzle.format_board(&new_state))?;
                    state = new_state;
                }
                Err(err) => return writeln!(f, "{}", err),
            }
        }
        Ok(())
    }
}

impl<P: DrawBoard> Debug for SolutionFormatter<'_, P> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self)
    }
}
