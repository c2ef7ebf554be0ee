use std::fmt::{self, Debug, Formatter};
use std::ops::{Index, IndexMut};

use crate::data::Pos;

/// Grid stored row by row, indexed by `Pos`.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct Vec2d<T> {
    data: Vec<T>,
    rows: u8,
    cols: u8,
}

impl<T: Clone> Vec2d<T> {
    pub(crate) fn new(rows: u8, cols: u8, default: T) -> Self {
        Vec2d {
            data: vec![default; usize::from(rows) * usize::from(cols)],
            rows,
            cols,
        }
    }
}

impl<T> Vec2d<T> {
    pub(crate) fn contains(&self, pos: Pos) -> bool {
        pos.r < self.rows && pos.c < self.cols
    }

    /// Row-major cells
    pub(crate) fn cells(&self) -> &[T] {
        &self.data
    }

    pub(crate) fn iter_rows(&self) -> impl Iterator<Item = &[T]> {
        self.data.chunks(usize::from(self.cols))
    }
}

impl<T: Debug> Debug for Vec2d<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        for row in self.iter_rows() {
            for cell in row {
                write!(f, "{:?}", cell)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

impl<T> Index<Pos> for Vec2d<T> {
    type Output = T;

    fn index(&self, index: Pos) -> &Self::Output {
        let index = usize::from(index.r) * usize::from(self.cols) + usize::from(index.c);
        &self.data[index]
    }
}

impl<T> IndexMut<Pos> for Vec2d<T> {
    fn index_mut(&mut self, index: Pos) -> &mut Self::Output {
        let index = usize::from(index.r) * usize::from(self.cols) + usize::from(index.c);
        &mut self.data[index]
    }
}
