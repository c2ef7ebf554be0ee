use std::fmt::{self, Debug, Display, Formatter};

/// Fixed enumeration order - the first solution found depends on it.
pub const DIRECTIONS: [Dir; 4] = [Dir::Up, Dir::Down, Dir::Left, Dir::Right];

/// Zero-based position on the board, shown one-based as `(column,row)`.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Pos {
    pub r: u8,
    pub c: u8,
}

impl Pos {
    pub fn new(r: u8, c: u8) -> Pos {
        Pos { r, c }
    }

    /// Takes one-based column and row the way puzzle files write them.
    pub fn from_one_based(column: u8, row: u8) -> Option<Pos> {
        if column == 0 || row == 0 {
            None
        } else {
            Some(Pos::new(row - 1, column - 1))
        }
    }

    /// Moves `dist` cells, `None` when that would go below zero.
    pub fn shifted(self, dir: Dir, dist: u8) -> Option<Pos> {
        let (dr, dc) = dir.deltas();
        let r = i16::from(self.r) + i16::from(dr) * i16::from(dist);
        let c = i16::from(self.c) + i16::from(dc) * i16::from(dist);
        if r < 0 || c < 0 || r > i16::from(u8::max_value()) || c > i16::from(u8::max_value()) {
            None
        } else {
            Some(Pos::new(r as u8, c as u8))
        }
    }

    /// Distance along `dir` if `other` lies on the ray starting at `self`.
    pub fn dist_along(self, dir: Dir, other: Pos) -> Option<u8> {
        match dir {
            Dir::Up if other.c == self.c && other.r < self.r => Some(self.r - other.r),
            Dir::Down if other.c == self.c && other.r > self.r => Some(other.r - self.r),
            Dir::Left if other.r == self.r && other.c < self.c => Some(self.c - other.c),
            Dir::Right if other.r == self.r && other.c > self.c => Some(other.c - self.c),
            _ => None,
        }
    }
}

impl Display for Pos {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "({},{})", u16::from(self.c) + 1, u16::from(self.r) + 1)
    }
}

impl Debug for Pos {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self)
    }
}

#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Dir {
    Up,
    Down,
    Left,
    Right,
}

impl Dir {
    /// `(row, column)` deltas
    pub fn deltas(self) -> (i8, i8) {
        match self {
            Dir::Up => (-1, 0),
            Dir::Down => (1, 0),
            Dir::Left => (0, -1),
            Dir::Right => (0, 1),
        }
    }

    pub fn is_horizontal(self) -> bool {
        self == Dir::Left || self == Dir::Right
    }

    pub fn word(self) -> &'static str {
        match self {
            Dir::Up => "up",
            Dir::Down => "down",
            Dir::Left => "left",
            Dir::Right => "right",
        }
    }
}

impl Display for Dir {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.word())
    }
}

impl Debug for Dir {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let letter = match *self {
            Dir::Up => 'U',
            Dir::Down => 'D',
            Dir::Left => 'L',
            Dir::Right => 'R',
        };
        write!(f, "{}", letter)
    }
}
