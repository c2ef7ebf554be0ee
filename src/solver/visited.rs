use std::hash::Hash;

use fnv::FnvHashSet;

use crate::puzzle::Puzzle;

/// Canonical keys of states already reached during one search.
#[derive(Debug, Clone)]
pub(crate) struct VisitedSet<K> {
    keys: FnvHashSet<K>,
}

impl<K: Eq + Hash> Default for VisitedSet<K> {
    fn default() -> Self {
        VisitedSet {
            keys: FnvHashSet::default(),
        }
    }
}

impl<K: Eq + Hash> VisitedSet<K> {
    pub(crate) fn new() -> Self {
        VisitedSet::default()
    }

    /// Returns `true` if an equivalent state was seen before,
    /// otherwise remembers it and returns `false`.
    pub(crate) fn mark_and_check<P>(&mut self, puzzle: &P, state: &P::State) -> bool
    where
        P: Puzzle<Key = K>,
    {
        !self.keys.insert(puzzle.canonical_key(state))
    }

    pub(crate) fn len(&self) -> usize {
        self.keys.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::ParseState;
    use crate::puzzles::sliding::Sliding;

    #[test]
    fn marking() {
        let puzzle = Sliding::new();
        let parse = |text: &str| {
            let fields: Vec<_> = text.split(',').collect();
            puzzle.parse_state(1, &fields).unwrap()
        };
        let state = parse("3,1,3,3,4,3,1,1,1,2,5,1,5,3,1,3,2,3");
        // B and C swapped
        let equivalent = parse("3,1,4,3,3,3,1,1,1,2,5,1,5,3,1,3,2,3");
        let different = parse("3,1,3,4,4,3,1,1,1,2,5,1,5,3,1,3,2,3");

        let mut visited = VisitedSet::new();
        assert_eq!(visited.len(), 0);
        assert!(!visited.mark_and_check(&puzzle, &state));
        assert!(visited.mark_and_check(&puzzle, &state));
        assert!(visited.mark_and_check(&puzzle, &equivalent));
        assert_eq!(visited.len(), 1);
        assert!(!visited.mark_and_check(&puzzle, &different));
        assert!(visited.mark_and_check(&puzzle, &different));
        assert_eq!(visited.len(), 2);
    }
}
