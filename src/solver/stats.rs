use std::fmt::{self, Debug, Display, Formatter};

use prettytable::format::consts::FORMAT_CLEAN;
use prettytable::{Cell, Row, Table};
use separator::Separatable;

/// Counts by depth. Depth 0 is the starting state.
#[derive(Clone, Default, PartialEq, Eq)]
pub struct Stats {
    created_states: Vec<i32>,
    visited_states: Vec<i32>,
    duplicate_states: Vec<i32>,
    max_branching: usize,
}

impl Stats {
    pub fn new() -> Self {
        Stats::default()
    }

    pub fn total_created(&self) -> i32 {
        self.created_states.iter().sum::<i32>()
    }

    pub fn total_unique_visited(&self) -> i32 {
        self.visited_states.iter().sum::<i32>()
    }

    pub fn total_reached_duplicates(&self) -> i32 {
        self.duplicate_states.iter().sum::<i32>()
    }

    /// Most legal actions seen in a single state.
    pub fn max_branching(&self) -> usize {
        self.max_branching
    }

    /// Deepest level with a unique visited state.
    pub fn max_depth(&self) -> usize {
        self.visited_states.len().saturating_sub(1)
    }

    pub(crate) fn add_created(&mut self, depth: usize) -> bool {
        Self::add(&mut self.created_states, depth)
    }

    pub(crate) fn add_unique_visited(&mut self, depth: usize) -> bool {
        Self::add(&mut self.visited_states, depth)
    }

    pub(crate) fn add_reached_duplicate(&mut self, depth: usize) -> bool {
        Self::add(&mut self.duplicate_states, depth)
    }

    pub(crate) fn add_expanded(&mut self, branching: usize) {
        self.max_branching = self.max_branching.max(branching);
    }

    fn add(counts: &mut Vec<i32>, depth: usize) -> bool {
        let mut ret = false;

        // while because depth 0 has no created states
        while depth >= counts.len() {
            counts.push(0);
            ret = true;
        }
        counts[depth] += 1;
        ret
    }

    pub(crate) fn totals_line(&self) -> String {
        format!(
            "total created / unique visited / reached duplicates:\n{:<16}{:<17}{}",
            self.total_created().separated_string(),
            self.total_unique_visited().separated_string(),
            self.total_reached_duplicates().separated_string()
        )
    }
}

impl Debug for Stats {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        writeln!(f, "created by depth: {:?}", self.created_states)?;
        writeln!(f, "reached duplicates by depth: {:?}", self.duplicate_states)?;
        writeln!(f, "unique visited by depth: {:?}", self.visited_states)?;
        writeln!(f, "total created: {}", self.total_created().separated_string())?;
        writeln!(
            f,
            "total reached duplicates: {}",
            self.total_reached_duplicates().separated_string()
        )?;
        writeln!(f, "total unique visited: {}", self.total_unique_visited().separated_string())?;
        writeln!(f, "max branching: {}", self.max_branching)
    }
}

impl Display for Stats {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let created = self.total_created();
        let visited = self.total_unique_visited();
        let duplicates = self.total_reached_duplicates();
        writeln!(f, "States created total: {}", created.separated_string())?;
        writeln!(f, "Unique visited total: {}", visited.separated_string())?;
        writeln!(f, "Reached duplicates total: {}", duplicates.separated_string())?;
        writeln!(f, "Max branching: {}", self.max_branching)?;
        writeln!(f, "Max depth: {}", self.max_depth())?;
        writeln!(f)?;

        let mut table = Table::new();
        table.set_format(*FORMAT_CLEAN);
        table.set_titles(Row::new(vec![
            Cell::new("Depth"),
            Cell::new("Created"),
            Cell::new("Unique"),
            Cell::new("Duplicates"),
        ]));
        let depths = self.visited_states.len().max(self.created_states.len());
        for depth in 0..depths {
            let get = |counts: &[i32]| counts.get(depth).cloned().unwrap_or(0).separated_string();
            table.add_row(Row::new(vec![
                Cell::new(&format!("{}:", depth)),
                Cell::new(&get(&self.created_states)),
                Cell::new(&get(&self.visited_states)),
                Cell::new(&get(&self.duplicate_states)),
            ]));
        }
        write!(f, "{}", table)
    }
}
