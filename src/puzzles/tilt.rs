//! Tilting the board slides every loose piece as far as it goes.
//! Light pieces drop into the hole in the center, heavy ones must never reach it.
//! Solved once all light pieces are gone.

use std::fmt::{self, Debug, Display, Formatter};

use log::trace;

use crate::board_formatter::DrawBoard;
use crate::data::{Dir, Pos, DIRECTIONS};
use crate::parser::{ParseState, ParserErr};
use crate::puzzle::{InvalidAction, Puzzle};
use crate::vec2d::Vec2d;

pub const DEFAULT_SIZE: u8 = 5;

#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub enum Cell {
    Empty,
    Blocker,
    Light,
    Heavy,
    Hole,
}

impl Cell {
    fn is_loose(self) -> bool {
        self == Cell::Light || self == Cell::Heavy
    }

    fn glyph(self) -> char {
        match self {
            Cell::Empty => ' ',
            Cell::Blocker => 'X',
            Cell::Light => 'L',
            Cell::Heavy => 'H',
            Cell::Hole => 'O',
        }
    }
}

impl Debug for Cell {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match *self {
            Cell::Empty => write!(f, "."),
            cell => write!(f, "{}", cell.glyph()),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Tilt {
    size: u8,
}

impl Default for Tilt {
    fn default() -> Self {
        Tilt::new(DEFAULT_SIZE)
    }
}

impl Tilt {
    /// # Panics
    /// Panics if the board is empty.
    pub fn new(size: u8) -> Self {
        assert!(size > 0);
        Tilt { size }
    }

    pub fn hole(&self) -> Pos {
        Pos::new(self.size / 2, self.size / 2)
    }

    /// A board with only the hole.
    pub fn empty_state(&self) -> TiltState {
        let mut grid = Vec2d::new(self.size, self.size, Cell::Empty);
        grid[self.hole()] = Cell::Hole;
        TiltState { grid, last: None }
    }

    /// Cells of one row or column, ordered so that pieces move towards index 0.
    fn lane(&self, dir: Dir, index: u8) -> Vec<Pos> {
        let mut lane: Vec<_> = (0..self.size)
            .map(|i| {
                if dir.is_horizontal() {
                    Pos::new(index, i)
                } else {
                    Pos::new(i, index)
                }
            })
            .collect();
        if dir == Dir::Right || dir == Dir::Down {
            lane.reverse();
        }
        lane
    }

    /// `None` if a heavy piece would cross the hole or nothing moved.
    fn tilt(&self, grid: &Vec2d<Cell>, dir: Dir) -> Option<Vec2d<Cell>> {
        let mut new_grid = grid.clone();
        for index in 0..self.size {
            let lane = self.lane(dir, index);
            let hole = lane.iter().position(|&pos| grid[pos] == Cell::Hole);

            // next free cell pieces can slide to
            let mut target = 0;
            for (i, &pos) in lane.iter().enumerate() {
                let cell = grid[pos];
                if cell.is_loose() {
                    new_grid[pos] = Cell::Empty;
                    let crosses_hole = hole.map_or(false, |hole| target <= hole && hole < i);
                    if !crosses_hole {
                        new_grid[lane[target]] = cell;
                        target += 1;
                    } else if cell == Cell::Heavy {
                        trace!("Heavy piece at {} would fall in when tilting {}", pos, dir);
                        return None;
                    }
                } else if cell == Cell::Blocker {
                    target = i + 1;
                }
            }
        }

        if new_grid == *grid {
            None
        } else {
            Some(new_grid)
        }
    }
}

#[derive(Clone, PartialEq, Eq, Hash)]
pub struct TiltState {
    grid: Vec2d<Cell>,
    /// Tilting the same way twice in a row is not allowed.
    last: Option<Dir>,
}

impl TiltState {
    pub fn cell(&self, pos: Pos) -> Cell {
        self.grid[pos]
    }

    pub fn last_tilt(&self) -> Option<Dir> {
        self.last
    }

    pub fn light_cnt(&self) -> usize {
        self.grid.cells().iter().filter(|&&cell| cell == Cell::Light).count()
    }
}

impl Debug for TiltState {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", self.grid)
    }
}

#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct TiltMove(pub Dir);

impl Display for TiltMove {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "tilt {}", self.0)
    }
}

impl Debug for TiltMove {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", self.0)
    }
}

impl Puzzle for Tilt {
    type State = TiltState;
    type Action = TiltMove;
    /// The last tilt is not part of the key - repeating it would be a no-op anyway.
    type Key = Vec2d<Cell>;

    fn legal_actions(&self, state: &TiltState) -> Vec<TiltMove> {
        DIRECTIONS
            .iter()
            .filter(|&&dir| Some(dir) != state.last)
            .filter(|&&dir| self.tilt(&state.grid, dir).is_some())
            .map(|&dir| TiltMove(dir))
            .collect()
    }

    fn apply(&self, state: &TiltState, action: TiltMove) -> Result<TiltState, InvalidAction> {
        if Some(action.0) == state.last {
            return Err(InvalidAction::new(action, "same direction as the previous tilt"));
        }
        let grid = self
            .tilt(&state.grid, action.0)
            .ok_or_else(|| InvalidAction::new(action, "nothing can move"))?;
        Ok(TiltState {
            grid,
            last: Some(action.0),
        })
    }

    fn is_goal(&self, state: &TiltState) -> bool {
        state.light_cnt() == 0
    }

    fn canonical_key(&self, state: &TiltState) -> Vec2d<Cell> {
        state.grid.clone()
    }
}

impl DrawBoard for Tilt {
    fn board_size(&self) -> (u8, u8) {
        (self.size, self.size)
    }

    fn glyph(&self, state: &TiltState, pos: Pos) -> char {
        state.grid[pos].glyph()
    }
}

impl ParseState for Tilt {
    /// Three strings of one-based digit pairs: blockers, light pieces, heavy pieces.
    fn parse_state(&self, line: usize, fields: &[&str]) -> Result<TiltState, ParserErr> {
        if fields.len() != 3 {
            return Err(ParserErr::FieldCount {
                line,
                expected: 3,
                got: fields.len(),
            });
        }

        let mut state = self.empty_state();
        for (field, &cell) in fields.iter().zip(&[Cell::Blocker, Cell::Light, Cell::Heavy]) {
            let digits = field
                .chars()
                .map(|c| c.to_digit(10).map(|d| d as u8))
                .collect::<Option<Vec<u8>>>()
                .filter(|digits| digits.len() % 2 == 0)
                .ok_or_else(|| ParserErr::Number {
                    line,
                    field: (*field).to_owned(),
                })?;
            for pair in digits.chunks(2) {
                let pos = Pos::from_one_based(pair[0], pair[1])
                    .filter(|&pos| state.grid.contains(pos))
                    .ok_or(ParserErr::OutOfBounds {
                        line,
                        column: pair[0],
                        row: pair[1],
                    })?;
                if state.grid[pos] != Cell::Empty {
                    return Err(ParserErr::Overlap { line, pos });
                }
                state.grid[pos] = cell;
            }
        }
        Ok(state)
    }
}
