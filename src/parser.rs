use std::error::Error;
use std::fmt::{self, Display, Formatter};

use fnv::FnvHashSet;
use log::debug;

use crate::data::Pos;
use crate::puzzle::Puzzle;

/// Marks a row which is not a puzzle.
const COMMENT: char = '#';

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParserErr {
    FieldCount { line: usize, expected: usize, got: usize },
    Number { line: usize, field: String },
    Id { line: usize, id: String },
    DuplicateId { line: usize, id: u32 },
    OutOfBounds { line: usize, column: u8, row: u8 },
    Overlap { line: usize, pos: Pos },
    Missing { line: usize, entity: &'static str },
}

impl Display for ParserErr {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match *self {
            ParserErr::FieldCount {
                line,
                expected,
                got,
            } => write!(f, "Line {}: expected {} fields, got {}", line, expected, got),
            ParserErr::Number { line, ref field } => {
                write!(f, "Line {}: invalid coordinates \"{}\"", line, field)
            }
            ParserErr::Id { line, ref id } => write!(f, "Line {}: invalid puzzle id \"{}\"", line, id),
            ParserErr::DuplicateId { line, id } => {
                write!(f, "Line {}: puzzle {} is defined more than once", line, id)
            }
            ParserErr::OutOfBounds { line, column, row } => {
                write!(f, "Line {}: position ({},{}) is not on the board", line, column, row)
            }
            ParserErr::Overlap { line, pos } => write!(f, "Line {}: cell {} is taken twice", line, pos),
            ParserErr::Missing { line, entity } => write!(f, "Line {}: {} is not on the board", line, entity),
        }
    }
}

impl Error for ParserErr {}

/// Builds a family's starting state from the fields after the puzzle id.
pub trait ParseState: Puzzle {
    fn parse_state(&self, line: usize, fields: &[&str]) -> Result<Self::State, ParserErr>;
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PuzzleEntry<S> {
    pub id: u32,
    pub state: S,
}

/// Parses a puzzle set - one `id,field...` row per puzzle.
pub fn parse_puzzle_set<P: ParseState>(puzzle: &P, text: &str) -> Result<Vec<PuzzleEntry<P::State>>, ParserErr> {
    let mut entries = Vec::new();
    let mut ids = FnvHashSet::default();

    for (i, row) in text.lines().enumerate() {
        let line = i + 1;
        let row = row.trim();
        if row.is_empty() || row.starts_with(COMMENT) {
            debug!("Skipping line {}", line);
            continue;
        }

        let mut fields: Vec<_> = row.split(',').map(str::trim).collect();
        let id = fields.remove(0);
        let id = id.parse::<u32>().map_err(|_| ParserErr::Id {
            line,
            id: id.to_owned(),
        })?;
        if !ids.insert(id) {
            return Err(ParserErr::DuplicateId { line, id });
        }

        let state = puzzle.parse_state(line, &fields)?;
        entries.push(PuzzleEntry { id, state });
    }

    debug!("Parsed {} puzzles", entries.len());
    Ok(entries)
}

/// Either `expected` numeric fields or a single field of `expected` digits.
pub(crate) fn numbers(line: usize, fields: &[&str], expected: usize) -> Result<Vec<u8>, ParserErr> {
    if fields.len() == 1 && fields[0].len() == expected {
        return fields[0]
            .chars()
            .map(|c| c.to_digit(10).map(|d| d as u8))
            .collect::<Option<Vec<u8>>>()
            .ok_or_else(|| ParserErr::Number {
                line,
                field: fields[0].to_owned(),
            });
    }

    if fields.len() != expected {
        return Err(ParserErr::FieldCount {
            line,
            expected,
            got: fields.len(),
        });
    }
    fields
        .iter()
        .map(|field| {
            field.parse::<u8>().map_err(|_| ParserErr::Number {
                line,
                field: (*field).to_owned(),
            })
        })
        .collect()
}

/// One-based coordinates, `0,0` means the entity is not on the board.
pub(crate) fn position(line: usize, column: u8, row: u8, cols: u8, rows: u8) -> Result<Option<Pos>, ParserErr> {
    if column == 0 && row == 0 {
        return Ok(None);
    }
    if column == 0 || row == 0 || column > cols || row > rows {
        return Err(ParserErr::OutOfBounds { line, column, row });
    }
    Ok(Pos::from_one_based(column, row))
}
