//! Shortens solutions by dropping single actions which turn out to be unnecessary.
//! Greedy - the result is not necessarily the shortest solution.

use log::{debug, trace};

use crate::puzzle::{InvalidAction, Puzzle};

/// Applies `actions` one after another.
pub fn replay<P: Puzzle>(puzzle: &P, start: &P::State, actions: &[P::Action]) -> Result<P::State, InvalidAction> {
    let mut state = start.clone();
    for &action in actions {
        state = puzzle.apply(&state, action)?;
    }
    Ok(state)
}

/// Tries removing each action except the last.
/// Starts over from the shorter solution whenever one still reaches the goal.
pub fn optimize<P: Puzzle>(puzzle: &P, start: &P::State, actions: &[P::Action]) -> Vec<P::Action> {
    let mut best = actions.to_vec();

    'scan: loop {
        for i in 0..best.len().saturating_sub(1) {
            let mut candidate = best.clone();
            let removed = candidate.remove(i);

            match replay(puzzle, start, &candidate) {
                Ok(ref end) if puzzle.is_goal(end) => {
                    debug!("Removed {} at {}, {} actions left", removed, i, candidate.len());
                    best = candidate;
                    continue 'scan;
                }
                Ok(_) => trace!("Without {} at {} the goal is not reached", removed, i),
                Err(err) => trace!("Without {} at {}: {}", removed, i, err),
            }
        }
        return best;
    }
}
