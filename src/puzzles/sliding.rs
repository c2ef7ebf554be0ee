//! Nine rectangular pieces on a 5x4 board with two free cells.
//! Every move shifts one piece by one cell.

use std::fmt::{self, Debug, Display, Formatter};

use crate::board_formatter::DrawBoard;
use crate::data::{Dir, Pos, DIRECTIONS};
use crate::parser::{self, ParseState, ParserErr};
use crate::puzzle::{InvalidAction, Puzzle};
use crate::vec2d::Vec2d;

pub const COLS: u8 = 5;
pub const ROWS: u8 = 4;
pub const PIECE_CNT: usize = 9;

const EMPTY: u8 = 255;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct PieceKind {
    id: char,
    width: u8,
    height: u8,
}

const PIECES: [PieceKind; PIECE_CNT] = [
    PieceKind { id: 'A', width: 2, height: 2 },
    PieceKind { id: 'B', width: 1, height: 1 },
    PieceKind { id: 'C', width: 1, height: 1 },
    PieceKind { id: 'D', width: 2, height: 1 },
    PieceKind { id: 'E', width: 2, height: 1 },
    PieceKind { id: 'F', width: 1, height: 2 },
    PieceKind { id: 'G', width: 1, height: 2 },
    PieceKind { id: 'H', width: 1, height: 2 },
    PieceKind { id: 'J', width: 1, height: 2 },
];

/// piece index, zero-based target
const GOALS: [(usize, Pos); 3] = [
    (0, Pos { r: 0, c: 2 }),
    (3, Pos { r: 0, c: 0 }),
    (4, Pos { r: 1, c: 0 }),
];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Sliding {
    /// Pieces which can swap places without changing the puzzle.
    /// Ordered by their first piece, each sorted.
    groups: Vec<Vec<usize>>,
}

impl Default for Sliding {
    fn default() -> Self {
        Sliding::new()
    }
}

impl Sliding {
    pub fn new() -> Self {
        let target = |piece: usize| GOALS.iter().find(|&&(i, _)| i == piece).map(|&(_, pos)| pos);

        let mut groups: Vec<Vec<usize>> = Vec::new();
        for piece in 0..PIECE_CNT {
            let same = groups.iter_mut().find(|group| {
                let other = group[0];
                target(piece).is_none()
                    && target(other).is_none()
                    && PIECES[piece].width == PIECES[other].width
                    && PIECES[piece].height == PIECES[other].height
            });
            match same {
                Some(group) => group.push(piece),
                None => groups.push(vec![piece]),
            }
        }
        Sliding { groups }
    }

    fn occupancy(&self, state: &SlidingState) -> Vec2d<u8> {
        let mut grid = Vec2d::new(ROWS, COLS, EMPTY);
        for (i, &pos) in state.pieces.iter().enumerate() {
            for cell in footprint(i, pos) {
                grid[cell] = i as u8;
            }
        }
        grid
    }

    fn can_move(&self, state: &SlidingState, occupancy: &Vec2d<u8>, piece: usize, dir: Dir) -> bool {
        let dest = match state.pieces[piece].shifted(dir, 1) {
            Some(dest) => dest,
            None => return false,
        };
        footprint(piece, dest).all(|cell| {
            occupancy.contains(cell) && (occupancy[cell] == EMPTY || occupancy[cell] == piece as u8)
        })
    }
}

/// Cells covered by `piece` with its top left corner at `pos`.
fn footprint(piece: usize, pos: Pos) -> impl Iterator<Item = Pos> {
    let kind = PIECES[piece];
    (0..kind.height).flat_map(move |dr| (0..kind.width).map(move |dc| Pos::new(pos.r + dr, pos.c + dc)))
}

#[derive(Clone, PartialEq, Eq, Hash)]
pub struct SlidingState {
    /// top left corners, indexed like `PIECES`
    pieces: [Pos; PIECE_CNT],
}

impl SlidingState {
    pub fn new(pieces: [Pos; PIECE_CNT]) -> Self {
        SlidingState { pieces }
    }

    pub fn piece(&self, index: usize) -> Pos {
        self.pieces[index]
    }
}

impl Debug for SlidingState {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        for (kind, pos) in PIECES.iter().zip(self.pieces.iter()) {
            write!(f, "{}{}", kind.id, pos)?;
        }
        Ok(())
    }
}

#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct PieceMove {
    pub piece: usize,
    pub dir: Dir,
}

impl PieceMove {
    pub fn new(piece: usize, dir: Dir) -> Self {
        PieceMove { piece, dir }
    }
}

impl Display for PieceMove {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", PIECES[self.piece].id, self.dir)
    }
}

impl Debug for PieceMove {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}{:?}", PIECES[self.piece].id, self.dir)
    }
}

impl Puzzle for Sliding {
    type State = SlidingState;
    type Action = PieceMove;
    type Key = [u8; PIECE_CNT];

    fn legal_actions(&self, state: &SlidingState) -> Vec<PieceMove> {
        let occupancy = self.occupancy(state);
        let mut actions = Vec::new();
        for piece in 0..PIECE_CNT {
            for &dir in &DIRECTIONS {
                if self.can_move(state, &occupancy, piece, dir) {
                    actions.push(PieceMove::new(piece, dir));
                }
            }
        }
        actions
    }

    fn apply(&self, state: &SlidingState, action: PieceMove) -> Result<SlidingState, InvalidAction> {
        if action.piece >= PIECE_CNT {
            return Err(InvalidAction::new(action, "no such piece"));
        }
        let occupancy = self.occupancy(state);
        if !self.can_move(state, &occupancy, action.piece, action.dir) {
            return Err(InvalidAction::new(action, "the piece is blocked"));
        }

        let mut new_state = state.clone();
        let pos = &mut new_state.pieces[action.piece];
        // can_move checked the bounds
        *pos = pos.shifted(action.dir, 1).unwrap_or(*pos);
        Ok(new_state)
    }

    fn is_goal(&self, state: &SlidingState) -> bool {
        GOALS.iter().all(|&(piece, target)| state.pieces[piece] == target)
    }

    fn canonical_key(&self, state: &SlidingState) -> [u8; PIECE_CNT] {
        let mut key = [0; PIECE_CNT];
        let mut i = 0;
        for group in &self.groups {
            let start = i;
            for &piece in group {
                let pos = state.pieces[piece];
                key[i] = pos.r * COLS + pos.c;
                i += 1;
            }
            key[start..i].sort();
        }
        key
    }
}

impl DrawBoard for Sliding {
    fn board_size(&self) -> (u8, u8) {
        (ROWS, COLS)
    }

    fn glyph(&self, state: &SlidingState, pos: Pos) -> char {
        (0..PIECE_CNT)
            .find(|&piece| footprint(piece, state.pieces[piece]).any(|cell| cell == pos))
            .map_or(' ', |piece| PIECES[piece].id)
    }
}

impl ParseState for Sliding {
    fn parse_state(&self, line: usize, fields: &[&str]) -> Result<SlidingState, ParserErr> {
        let numbers = parser::numbers(line, fields, PIECE_CNT * 2)?;

        let mut pieces = [Pos::new(0, 0); PIECE_CNT];
        let mut occupancy = Vec2d::new(ROWS, COLS, false);
        for (i, pair) in numbers.chunks(2).enumerate() {
            let out_of_bounds = ParserErr::OutOfBounds {
                line,
                column: pair[0],
                row: pair[1],
            };
            let pos = parser::position(line, pair[0], pair[1], COLS, ROWS)?.ok_or_else(|| out_of_bounds.clone())?;
            for cell in footprint(i, pos) {
                if !occupancy.contains(cell) {
                    return Err(out_of_bounds);
                }
                if occupancy[cell] {
                    return Err(ParserErr::Overlap { line, pos: cell });
                }
                occupancy[cell] = true;
            }
            pieces[i] = pos;
        }
        Ok(SlidingState::new(pieces))
    }
}

#[cfg(test)]
mod tests {
    use std::collections::VecDeque;

    use fnv::FnvHashSet;

    use super::*;
    use crate::solver::optimizer::replay;
    use crate::solver::{search, Outcome, SearchLimits};

    const SOLVED: &str = "3,1,3,3,4,3,1,1,1,2,5,1,5,3,1,3,2,3";
    const ONE_MOVE: &str = "3,2,3,4,4,4,1,1,1,2,5,1,5,3,1,3,2,3";
    const SIX_MOVES: &str = "4,1,3,4,3,2,1,1,1,2,5,3,4,3,1,3,2,3";

    fn state(text: &str) -> SlidingState {
        let fields: Vec<_> = text.split(',').collect();
        Sliding::new().parse_state(1, &fields).unwrap()
    }

    fn cells(state: &SlidingState) -> Vec<Vec<Pos>> {
        (0..PIECE_CNT)
            .map(|piece| footprint(piece, state.piece(piece)).collect())
            .collect()
    }

    #[test]
    fn groups() {
        let puzzle = Sliding::new();
        assert_eq!(
            puzzle.groups,
            vec![vec![0], vec![1, 2], vec![3], vec![4], vec![5, 6, 7, 8]]
        );
    }

    #[test]
    fn drawing() {
        let puzzle = Sliding::new();
        let expected = "\
+---+---+---+---+---+
| D | D | A | A | F |
+---+---+---+---+---+
| E | E | A | A | F |
+---+---+---+---+---+
| H | J | B | C | G |
+---+---+---+---+---+
| H | J |   |   | G |
+---+---+---+---+---+
";
        let solved = state(SOLVED);
        assert_eq!(puzzle.format_board(&solved).to_string(), expected);
        assert!(puzzle.is_goal(&solved));
    }

    #[test]
    fn legal_actions() {
        let puzzle = Sliding::new();
        let state = state(SOLVED);
        // only the small pieces next to the two free cells can move
        assert_eq!(
            puzzle.legal_actions(&state),
            [PieceMove::new(1, Dir::Down), PieceMove::new(2, Dir::Down)]
        );
        assert!(puzzle.apply(&state, PieceMove::new(0, Dir::Down)).is_err());
        assert!(puzzle.apply(&state, PieceMove::new(5, Dir::Right)).is_err());
        assert!(puzzle.apply(&state, PieceMove::new(3, Dir::Up)).is_err());
    }

    #[test]
    fn interchangeable_pieces_share_key() {
        let puzzle = Sliding::new();
        let original = state(SOLVED);
        // swap B with C and F with G
        let swapped = state("3,1,4,3,3,3,1,1,1,2,5,3,5,1,1,3,2,3");
        assert_ne!(original, swapped);
        assert_eq!(puzzle.canonical_key(&original), puzzle.canonical_key(&swapped));

        // D and E have different targets so they are not interchangeable
        let swapped_goal = state("3,1,3,3,4,3,1,2,1,1,5,1,5,3,1,3,2,3");
        assert_ne!(puzzle.canonical_key(&original), puzzle.canonical_key(&swapped_goal));
        assert!(!puzzle.is_goal(&swapped_goal));
    }

    #[test]
    fn pieces_never_overlap() {
        let puzzle = Sliding::new();
        let start = state(SIX_MOVES);

        let mut seen = FnvHashSet::default();
        let mut to_visit = VecDeque::new();
        seen.insert(start.clone());
        to_visit.push_back(start);
        while let Some(cur) = to_visit.pop_front() {
            for action in puzzle.legal_actions(&cur) {
                let next = puzzle.apply(&cur, action).unwrap();
                assert_ne!(next, cur);

                let mut covered = Vec2d::new(ROWS, COLS, false);
                for cell in cells(&next).into_iter().flatten() {
                    assert!(covered.contains(cell), "{:?} left the board", next);
                    assert!(!covered[cell], "{:?} has overlapping pieces", next);
                    covered[cell] = true;
                }
                if seen.insert(next.clone()) {
                    to_visit.push_back(next);
                }
            }
        }
        assert!(seen.len() > 1000);
    }

    #[test]
    fn solving() {
        let puzzle = Sliding::new();

        let start = state(ONE_MOVE);
        let solution = search(&puzzle, &start, &SearchLimits::default(), false).unwrap();
        assert_eq!(solution.outcome, Outcome::Found(vec![PieceMove::new(0, Dir::Up)]));

        let start = state(SIX_MOVES);
        let solution = search(&puzzle, &start, &SearchLimits::default(), false).unwrap();
        match solution.outcome {
            Outcome::Found(ref actions) => {
                assert_eq!(actions.len(), 6);
                assert!(puzzle.is_goal(&replay(&puzzle, &start, actions).unwrap()));
            }
            ref other => panic!("expected a solution, got {:?}", other),
        }
        assert_eq!(solution.stats.total_created(), 36);
        assert_eq!(solution.stats.total_reached_duplicates(), 19);
        assert_eq!(solution.stats.total_unique_visited(), 18);
    }

    #[test]
    fn parse_errors() {
        let puzzle = Sliding::new();
        // A sticking out on the right
        let fields: Vec<_> = "5,1,3,3,4,3,1,1,1,2,5,1,5,3,1,3,2,3".split(',').collect();
        assert_eq!(
            puzzle.parse_state(3, &fields).unwrap_err(),
            ParserErr::OutOfBounds {
                line: 3,
                column: 5,
                row: 1
            }
        );
        // B on top of A
        let fields: Vec<_> = "3,1,4,2,4,3,1,1,1,2,5,1,5,3,1,3,2,3".split(',').collect();
        assert_eq!(
            puzzle.parse_state(3, &fields).unwrap_err(),
            ParserErr::Overlap {
                line: 3,
                pos: Pos::new(1, 3)
            }
        );
    }
}
